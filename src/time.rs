//! Date parsing, comparison and formatting on top of `chrono`.
//!
//! Dates are naive (no time zone). RFC 3339 input with an offset is
//! converted to UTC first. Format strings use `chrono`'s strftime syntax.

use std::fmt::Write as _;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("unsupported comparison operator: {0}")]
    InvalidOperator(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("invalid date format: {0}")]
    InvalidFormat(String),
}

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

const FRENCH_MONTHS: [&str; 12] = [
    "Janvier", "Février", "Mars", "Avril", "Mai", "Juin", "Juillet", "Août", "Septembre",
    "Octobre", "Novembre", "Décembre",
];

/// Parses RFC 3339, `Y-m-d H:M:S`, `Y-m-d`, `d/m/Y H:M:S` or `d/m/Y`.
/// Date-only input lands at midnight.
pub fn parse_date(input: &str) -> Result<NaiveDateTime, TimeError> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_utc());
    }
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return midnight(date, input);
        }
    }
    debug!(input, "parse_date_failed");
    Err(TimeError::InvalidDate(input.to_string()))
}

fn midnight(date: NaiveDate, input: &str) -> Result<NaiveDateTime, TimeError> {
    date.and_hms_opt(0, 0, 0)
        .ok_or_else(|| TimeError::InvalidDate(input.to_string()))
}

fn parse_with(input: &str, fmt: &str) -> Result<NaiveDateTime, TimeError> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
        return Ok(dt);
    }
    match NaiveDate::parse_from_str(input, fmt) {
        Ok(date) => midnight(date, input),
        Err(_) => Err(TimeError::InvalidDate(input.to_string())),
    }
}

/// Renders `date` with a strftime format; unknown specifiers are an error
/// rather than a panic.
pub fn format_date(date: &NaiveDateTime, fmt: &str) -> Result<String, TimeError> {
    let mut out = String::new();
    write!(out, "{}", date.format(fmt)).map_err(|_| TimeError::InvalidFormat(fmt.to_string()))?;
    Ok(out)
}

/// Reads `input` with format `from` and writes it with format `to`.
pub fn convert_format(input: &str, from: &str, to: &str) -> Result<String, TimeError> {
    format_date(&parse_with(input, from)?, to)
}

/// `d/m/Y`, plus ` H:M:S` when `with_time`.
pub fn to_european_format(input: &str, with_time: bool) -> Result<String, TimeError> {
    let fmt = if with_time { "%d/%m/%Y %H:%M:%S" } else { "%d/%m/%Y" };
    format_date(&parse_date(input)?, fmt)
}

/// `Y-m-d`, plus ` H:M:S` when `with_time`. Also the HTML5 date format.
pub fn to_american_format(input: &str, with_time: bool) -> Result<String, TimeError> {
    let fmt = if with_time { "%Y-%m-%d %H:%M:%S" } else { "%Y-%m-%d" };
    format_date(&parse_date(input)?, fmt)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn holds(self, left: &NaiveDateTime, right: &NaiveDateTime) -> bool {
        match self {
            CompareOp::Eq => left == right,
            CompareOp::Lt => left < right,
            CompareOp::Le => left <= right,
            CompareOp::Gt => left > right,
            CompareOp::Ge => left >= right,
        }
    }
}

impl FromStr for CompareOp {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(CompareOp::Eq),
            "<" => Ok(CompareOp::Lt),
            "<=" => Ok(CompareOp::Le),
            ">" => Ok(CompareOp::Gt),
            ">=" => Ok(CompareOp::Ge),
            other => Err(TimeError::InvalidOperator(other.to_string())),
        }
    }
}

/// `a <operator> b` for two date strings.
pub fn compare_dates(a: &str, b: &str, operator: &str) -> Result<bool, TimeError> {
    let op: CompareOp = operator.parse()?;
    Ok(op.holds(&parse_date(a)?, &parse_date(b)?))
}

/// `from <= date <= to`, or with `<` when `strict`.
pub fn is_between(date: &str, from: &str, to: &str, strict: bool) -> Result<bool, TimeError> {
    let op = if strict { CompareOp::Lt } else { CompareOp::Le };
    let date = parse_date(date)?;
    Ok(op.holds(&parse_date(from)?, &date) && op.holds(&date, &parse_date(to)?))
}

/// French name of month `1..=12`.
pub fn literal_month(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    FRENCH_MONTHS.get(index).copied()
}

/// True when `input` parses with `fmt` and formats back to the same text.
pub fn validate_date(input: &str, fmt: &str) -> bool {
    parse_with(input, fmt)
        .and_then(|dt| format_date(&dt, fmt))
        .is_ok_and(|round_trip| round_trip == input)
}

/// Milliseconds since the Unix epoch.
pub fn timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}
