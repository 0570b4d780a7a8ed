//! HTTP handlers for the query API

use crate::data::DataStore;
use crate::nlq::NlqPipeline;
use crate::query::QueryStore;
use crate::sql::{self, QueryExecutor};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info};
use uuid::Uuid;

/// Shared application state
pub struct AppState {
    pub data: Arc<DataStore>,
    pub queries: Arc<QueryStore>,
    /// Absent when no LLM provider is configured; questions that already are
    /// SQL still execute
    pub nlq: Option<Arc<NlqPipeline>>,
    pub query_timeout: Duration,
}

/// Request to submit a natural-language question
#[derive(Deserialize)]
pub struct SubmitRequest {
    pub question: String,
}

/// Handler for submitting a question
///
/// Creates a `processing` record, returns it immediately, and runs
/// interpretation + execution as a detached background task. The caller polls
/// for completion.
pub async fn submit_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitRequest>,
) -> impl IntoResponse {
    let question = payload.question.trim().to_string();
    if question.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({ "error": "question must not be empty" })),
        )
            .into_response();
    }

    let record = state.queries.submit(question.clone()).await;
    info!(query_id = %record.id, "accepted question");

    let task_state = Arc::clone(&state);
    let id = record.id;
    tokio::spawn(async move {
        let outcome = timeout(
            task_state.query_timeout,
            run_pipeline(&task_state, id, &question),
        )
        .await;
        if outcome.is_err() {
            error!(query_id = %id, "query timed out");
            let _ = task_state
                .queries
                .complete_error(id, "query timed out".to_string(), None)
                .await;
        }
    });

    (StatusCode::ACCEPTED, axum::Json(record)).into_response()
}

/// Interpretation + execution for one submitted question; completes the
/// record exactly once. Only this task writes to its record.
async fn run_pipeline(state: &AppState, id: Uuid, question: &str) {
    let started = std::time::Instant::now();

    // Questions that already look like SQL skip the language model
    let sql = if question.trim().to_lowercase().starts_with("select") {
        question.to_string()
    } else {
        match &state.nlq {
            Some(pipeline) => match pipeline.question_to_sql(question).await {
                Ok(sql) => sql,
                Err(e) => {
                    error!(query_id = %id, "SQL generation failed: {}", e);
                    let _ = state.queries.complete_error(id, e.to_string(), None).await;
                    return;
                }
            },
            None => {
                let _ = state
                    .queries
                    .complete_error(
                        id,
                        "no LLM provider configured; submit SQL directly".to_string(),
                        None,
                    )
                    .await;
                return;
            }
        }
    };

    let parsed = match sql::parse(&sql) {
        Ok(parsed) => parsed,
        Err(e) => {
            let _ = state
                .queries
                .complete_error(id, e.to_string(), Some(sql))
                .await;
            return;
        }
    };

    let rows = QueryExecutor::new(&state.data).run(&parsed, Utc::now());
    let interpretation = format!(
        "Matched {} record(s) in {}.",
        rows.len(),
        parsed.table.sql_name()
    );
    let results = serde_json::Value::Array(rows.iter().map(|r| r.to_json()).collect());
    let duration_ms = started.elapsed().as_millis() as u64;

    info!(query_id = %id, rows = rows.len(), duration_ms, "query completed");
    let _ = state
        .queries
        .complete_success(id, sql, Some(interpretation), results, duration_ms)
        .await;
}

/// Handler for polling a query record
pub async fn get_query_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.queries.get(id).await {
        Some(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "error": format!("query not found: {}", id) })),
        )
            .into_response(),
    }
}

/// Handler for system status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut tables = serde_json::Map::new();
    for table in crate::data::Table::ALL {
        tables.insert(
            table.sql_name().to_string(),
            json!(state.data.count(table)),
        );
    }
    axum::Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "queries": state.queries.len().await,
        "tables": tables,
    }))
}
