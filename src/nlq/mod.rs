//! Natural Language Querying (NLQ)
//!
//! Translates a user question into a SQL string via an LLM. The system prompt
//! constrains the model to the recognized clause catalog and the four mock
//! tables; the execution engine ignores anything outside it anyway.

pub mod client;

use crate::config::NlqConfig;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NlqError {
    #[error("LLM API error: {0}")]
    Api(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("validation error: {0}")]
    Validation(String),
}

pub type NlqResult<T> = Result<T, NlqError>;

/// Default system prompt: pins the model to the supported query vocabulary
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a SQL generator for a mock Oracle EBS dataset. Translate the user's \
question into a single SELECT statement against exactly one of these tables:

sales_orders(id, order_number, customer_name, order_date, total_amount, status, region, sales_rep)
work_orders(id, work_order_number, description, assigned_to, status, priority, scheduled_date, completion_date, department)
invoices(id, invoice_number, vendor_name, invoice_date, due_date, amount, status, payment_terms)
inventory_items(id, item_code, item_name, category, quantity_on_hand, unit_price, reorder_level, warehouse)

Only use these WHERE shapes: status = '<value>', priority = '<value>', \
region = '<value>', due_date < GETDATE(), scheduled_date < GETDATE(), \
quantity_on_hand <= reorder_level, order_date >= DATEADD(quarter, -1, GETDATE()), \
and status = 'delayed' OR (status = 'in-progress' AND scheduled_date < GETDATE()). \
Optionally add ORDER BY <column> [ASC|DESC] and LIMIT <n>. \
Return ONLY the SQL, no markdown, no explanations.";

pub struct NlqPipeline {
    client: client::NlqClient,
}

impl NlqPipeline {
    pub fn new(config: NlqConfig) -> NlqResult<Self> {
        let client = client::NlqClient::new(&config)?;
        Ok(Self { client })
    }

    /// Translate a question to a SQL string
    pub async fn question_to_sql(&self, question: &str) -> NlqResult<String> {
        let response = self.client.generate_sql(question).await?;

        // LLM responses may carry markdown fences or explanations
        let sql = Self::extract_sql(&response);

        if Self::is_safe_query(&sql) {
            Ok(sql)
        } else {
            Err(NlqError::Validation(
                "generated query is not a plain SELECT statement".to_string(),
            ))
        }
    }

    /// Extract a SQL statement from an LLM response that may contain markdown
    /// fences, explanations, or multiple code blocks.
    fn extract_sql(response: &str) -> String {
        let trimmed = response.trim();

        // If response contains a fenced code block, extract the first one
        if let Some(start) = trimmed.find("```") {
            let after_fence = &trimmed[start + 3..];
            // Skip language tag (e.g. "sql\n")
            let code_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
            if let Some(end) = after_fence[code_start..].find("```") {
                return after_fence[code_start..code_start + end].trim().to_string();
            }
        }

        // No fences: take lines that look like SQL
        let sql_keywords = ["SELECT", "FROM", "WHERE", "ORDER", "LIMIT", "AND", "OR"];
        let lines: Vec<&str> = trimmed
            .lines()
            .filter(|line| {
                let upper = line.trim().to_uppercase();
                sql_keywords.iter().any(|kw| upper.starts_with(kw))
            })
            .collect();

        if !lines.is_empty() {
            return lines.join(" ");
        }

        // Fallback: strip outer fences and return as-is
        trimmed
            .trim_start_matches("```sql")
            .trim_start_matches("```")
            .trim_end_matches("```")
            .trim()
            .to_string()
    }

    fn is_safe_query(query: &str) -> bool {
        let q = query.trim().to_uppercase();
        q.starts_with("SELECT")
            && !q.contains("INSERT")
            && !q.contains("UPDATE")
            && !q.contains("DELETE")
            && !q.contains("DROP")
            && !q.contains("ALTER")
            && !q.contains("TRUNCATE")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_sql_from_fenced_block() {
        let response = "Here is the query:\n```sql\nSELECT * FROM invoices\n```\nHope that helps!";
        assert_eq!(NlqPipeline::extract_sql(response), "SELECT * FROM invoices");
    }

    #[test]
    fn test_extract_sql_from_plain_response() {
        let response = "SELECT * FROM work_orders WHERE priority = 'high'";
        assert_eq!(NlqPipeline::extract_sql(response), response);
    }

    #[test]
    fn test_extract_sql_filters_prose() {
        let response = "Sure! This finds them:\nSELECT * FROM invoices WHERE status = 'overdue'";
        assert_eq!(
            NlqPipeline::extract_sql(response),
            "SELECT * FROM invoices WHERE status = 'overdue'"
        );
    }

    #[test]
    fn test_extract_sql_multiline_statement() {
        let response = "SELECT * FROM sales_orders\nWHERE region = 'West'\nORDER BY order_date DESC";
        assert_eq!(
            NlqPipeline::extract_sql(response),
            "SELECT * FROM sales_orders WHERE region = 'West' ORDER BY order_date DESC"
        );
    }

    #[test]
    fn test_safe_query_check() {
        assert!(NlqPipeline::is_safe_query("SELECT * FROM invoices"));
        assert!(NlqPipeline::is_safe_query("select top 5 * from invoices"));
        assert!(!NlqPipeline::is_safe_query("DROP TABLE invoices"));
        assert!(!NlqPipeline::is_safe_query(
            "SELECT * FROM invoices; DELETE FROM invoices"
        ));
    }
}
