//! Clause recognition for generated SQL
//!
//! Not a real SQL parser. The generator is constrained to a fixed vocabulary
//! of query shapes, so recognition is a catalog of regular expressions applied
//! to the raw query text. Unrecognized clause text is silently ignored.

use super::ast::{Direction, ParsedQuery, Predicate, SortKey};
use super::{columns, SqlError, SqlResult};
use crate::data::Table;
use regex::Regex;
use std::sync::LazyLock;

/// Text between WHERE and the first of ORDER BY / LIMIT / TOP / end of query
static WHERE_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bwhere\b(.*?)(?:\border\s+by\b|\blimit\b|\btop\b|\z)").unwrap()
});

static STATUS_EQ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bstatus\s*=\s*'([^']*)'").unwrap());

static PRIORITY_EQ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bpriority\s*=\s*'([^']*)'").unwrap());

static REGION_EQ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bregion\s*=\s*'([^']*)'").unwrap());

static BEFORE_NOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(due_date|scheduled_date)\s*<\s*(?:getdate\s*\(\s*\)|current_date\b|now\s*\(\s*\))")
        .unwrap()
});

static QTY_AT_REORDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bquantity_on_hand\s*<=\s*reorder_level\b").unwrap());

static LAST_QUARTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\border_date\s*>=\s*dateadd\s*\(\s*quarter\s*,\s*-\s*1\b").unwrap()
});

/// The one supported disjunction, hardcoded:
/// `status = 'delayed' OR (status = 'in-progress' AND scheduled_date < GETDATE())`
static DELAYED_OR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bstatus\s*=\s*'delayed'\s+or\b").unwrap());

static ORDER_BY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\border\s+by\s+([A-Za-z_][A-Za-z0-9_]*)(?:\s+(asc|desc)\b)?").unwrap()
});

static LIMIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\blimit\s+(\S+)").unwrap());

static SELECT_TOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bselect\s+top\s+(\S+)").unwrap());

/// Recognize a generated SQL string into a [`ParsedQuery`].
///
/// Fails with [`SqlError::UnsupportedStatement`] for non-SELECT input and
/// [`SqlError::UnknownTable`] when none of the four table names occurs.
/// Clause-level failures are wrapped with the table name for diagnostics.
pub fn parse(sql: &str) -> SqlResult<ParsedQuery> {
    if !sql.trim().to_lowercase().starts_with("select") {
        return Err(SqlError::UnsupportedStatement);
    }

    let table = Table::find_in(sql).ok_or(SqlError::UnknownTable)?;

    let limit = parse_limit(sql).map_err(|source| SqlError::Execution {
        table: table.sql_name(),
        source: Box::new(source),
    })?;

    Ok(ParsedQuery {
        table,
        predicates: parse_predicates(sql),
        order_by: parse_order_by(sql),
        limit,
    })
}

fn parse_predicates(sql: &str) -> Vec<Predicate> {
    let Some(segment) = WHERE_SEGMENT
        .captures(sql)
        .map(|c| c.get(1).map_or("", |m| m.as_str()).to_string())
    else {
        return Vec::new();
    };

    let mut predicates = Vec::new();

    // The hardcoded disjunction subsumes the plain status equality and the
    // scheduled_date overdue check that occur inside its own text, so those
    // two recognizers are skipped when it matches.
    let disjunction = DELAYED_OR.is_match(&segment);
    if disjunction {
        predicates.push(Predicate::DelayedOrInProgressPast);
    }

    if !disjunction {
        if let Some(caps) = STATUS_EQ.captures(&segment) {
            predicates.push(Predicate::FieldEquals {
                field: "status".to_string(),
                value: caps[1].to_string(),
            });
        }
    }

    if let Some(caps) = PRIORITY_EQ.captures(&segment) {
        predicates.push(Predicate::FieldEquals {
            field: "priority".to_string(),
            value: caps[1].to_string(),
        });
    }

    if let Some(caps) = REGION_EQ.captures(&segment) {
        predicates.push(Predicate::FieldEquals {
            field: "region".to_string(),
            value: caps[1].to_string(),
        });
    }

    for caps in BEFORE_NOW.captures_iter(&segment) {
        let field = columns::resolve(&caps[1]);
        if disjunction && field == "scheduledDate" {
            continue;
        }
        predicates.push(Predicate::BeforeNow { field });
    }

    if QTY_AT_REORDER.is_match(&segment) {
        predicates.push(Predicate::QuantityAtOrBelowReorder);
    }

    if LAST_QUARTER.is_match(&segment) {
        predicates.push(Predicate::WithinPastMonths {
            field: columns::resolve("order_date"),
            months: 3,
        });
    }

    predicates
}

fn parse_order_by(sql: &str) -> Option<SortKey> {
    let caps = ORDER_BY.captures(sql)?;
    let direction = match caps.get(2).map(|m| m.as_str().to_lowercase()) {
        Some(d) if d == "desc" => Direction::Descending,
        _ => Direction::Ascending,
    };
    Some(SortKey {
        column: columns::resolve(&caps[1]),
        direction,
    })
}

/// LIMIT is checked before TOP; only the first matching clause applies.
fn parse_limit(sql: &str) -> SqlResult<Option<usize>> {
    let token = LIMIT
        .captures(sql)
        .or_else(|| SELECT_TOP.captures(sql))
        .map(|caps| caps[1].to_string());

    match token {
        None => Ok(None),
        // Statement terminators after a valid count are not a malformed count
        Some(raw) => raw
            .trim_end_matches([';', ')'])
            .parse::<usize>()
            .map(Some)
            .map_err(|_| SqlError::LimitParse { token: raw }),
    }
}
