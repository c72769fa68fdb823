//! Splits a payload into `<type>=<value>` records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    CRLF, LF,
    errors::{SDPError, SDPResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    Version,          // v
    Origin,           // o
    SessionName,      // s
    Information,      // i
    Uri,              // u
    Email,            // e
    Phone,            // p
    Connection,       // c
    Bandwidth,        // b
    Time,             // t
    Repeat,           // r
    ZoneAdjustments,  // z
    Key,              // k
    Attribute,        // a
    Media,            // m
}

impl RecordType {
    pub fn tag(&self) -> char {
        match self {
            Self::Version => 'v',
            Self::Origin => 'o',
            Self::SessionName => 's',
            Self::Information => 'i',
            Self::Uri => 'u',
            Self::Email => 'e',
            Self::Phone => 'p',
            Self::Connection => 'c',
            Self::Bandwidth => 'b',
            Self::Time => 't',
            Self::Repeat => 'r',
            Self::ZoneAdjustments => 'z',
            Self::Key => 'k',
            Self::Attribute => 'a',
            Self::Media => 'm',
        }
    }
}

impl TryFrom<u8> for RecordType {
    type Error = u8;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            b'v' => Self::Version,
            b'o' => Self::Origin,
            b's' => Self::SessionName,
            b'i' => Self::Information,
            b'u' => Self::Uri,
            b'e' => Self::Email,
            b'p' => Self::Phone,
            b'c' => Self::Connection,
            b'b' => Self::Bandwidth,
            b't' => Self::Time,
            b'r' => Self::Repeat,
            b'z' => Self::ZoneAdjustments,
            b'k' => Self::Key,
            b'a' => Self::Attribute,
            b'm' => Self::Media,
            other => return Err(other),
        })
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One non blank line of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub record_type: RecordType,
    pub value: &'a str,
    /// 1-based line number in the payload
    pub line: usize,
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.record_type, self.value)
    }
}

/// The first line feed decides the line ending of the whole payload.
pub fn probe_eol(text: &str) -> SDPResult<&'static str> {
    let idx = text
        .find(LF)
        .ok_or_else(|| SDPError::InvalidPayload("no line break found in payload".to_owned()))?;
    if idx > 0 && text.as_bytes()[idx - 1] == b'\r' {
        Ok(CRLF)
    } else {
        Ok(LF)
    }
}

pub fn parse_record(line: &str, line_number: usize) -> SDPResult<Record<'_>> {
    let bytes = line.as_bytes();
    if bytes.len() < 2 {
        return Err(SDPError::InvalidRecord {
            line: line_number,
            reason: format!(
                "sdp line should be of form <type>=<value>, got: {}",
                line
            ),
        });
    }
    if bytes[1] != b'=' {
        return Err(SDPError::InvalidRecord {
            line: line_number,
            reason: format!(
                "<type> should be a single character followed by an \"=\" sign, got: {}",
                line
            ),
        });
    }
    let record_type = RecordType::try_from(bytes[0]).map_err(|tag| SDPError::InvalidRecord {
        line: line_number,
        reason: format!("unknown record type: {}", char::from(tag)),
    })?;
    Ok(Record {
        record_type,
        value: line.get(2..).unwrap_or_default(),
        line: line_number,
    })
}

/// Splits the payload with its probed line ending, dropping blank lines.
pub fn split_records(text: &str) -> SDPResult<Vec<Record<'_>>> {
    if text.is_empty() {
        return Err(SDPError::InvalidPayload("payload is empty".to_owned()));
    }
    let eol = probe_eol(text)?;
    text.split(eol)
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_record(line, idx + 1))
        .collect()
}
