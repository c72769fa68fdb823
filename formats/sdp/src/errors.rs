use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SDPError {
    #[error("fmt error: {0}")]
    FMTError(#[from] fmt::Error),
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    #[error("invalid sdp line at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },
    #[error("expect {expected} record, got: {found}, at line {line}")]
    UnexpectedRecord {
        expected: &'static str,
        found: String,
        line: usize,
    },
    #[error("invalid \"{record_type}=\" record: \"{value}\"; {reason}; at line:{line}, col:{column}")]
    RecordSyntax {
        record_type: char,
        value: String,
        line: usize,
        column: usize,
        reason: String,
    },
    #[error(
        "parsing attribute {field} failed, \"a={field}{}\"; {reason}; at line:{line}, col:{column}",
        value.as_ref().map(|v| format!(":{}", v)).unwrap_or_default()
    )]
    InvalidAttribute {
        field: String,
        value: Option<String>,
        line: usize,
        column: usize,
        reason: String,
    },
    #[error("parsing failed, non exhaustive sdp lines, unconsumed record at line {line}: {record}")]
    NonExhaustive { line: usize, record: String },
    #[error("integer overflow: {0}")]
    IntegerOverflow(String),
    #[error("syntax error: {0}")]
    SyntaxError(String),
}

pub type SDPResult<T> = Result<T, SDPError>;
