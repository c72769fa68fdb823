use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{SDPError, SDPResult},
    grammar::{
        Cursor,
        chars::{is_byte_string_char, is_token_char},
    },
};

/// The media format an `a=fmtp` line applies to. Numeric formats are RTP
/// payload types, anything else (e.g. `webrtc-datachannel`) is kept as a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FmtpFormat {
    Payload(u8),
    Token(String),
}

impl FmtpFormat {
    fn read(cursor: &mut Cursor<'_>) -> SDPResult<Self> {
        let format = cursor.one_or_more(is_token_char, "format")?;
        // "08" stays a token, it must print back as written
        let is_payload = format.bytes().all(|c| c.is_ascii_digit())
            && (format.len() == 1 || !format.starts_with('0'));
        match format.parse::<u8>() {
            Ok(pt) if is_payload => Ok(Self::Payload(pt)),
            _ => Ok(Self::Token(format.to_owned())),
        }
    }
}

impl fmt::Display for FmtpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payload(pt) => write!(f, "{}", pt),
            Self::Token(token) => f.write_str(token),
        }
    }
}

/// An `a=fmtp` line whose format is not an RTP payload type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFormatParameters {
    pub format: String,
    pub parameters: FormatParameters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FmtpParameter {
    pub key: String,
    pub value: Option<String>,
}

impl fmt::Display for FmtpParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => write!(f, "{}", self.key),
        }
    }
}

/// fmtp-value = fmt SP format-specific-params
///
/// The parameter string is split on `;`, each piece on its first `=`.
/// A piece without `=` (e.g. the `0-15` of telephone-event) is kept as a bare key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatParameters {
    pub parameters: Vec<FmtpParameter>,
}

impl FormatParameters {
    pub fn get(&self, key: &str) -> Option<&FmtpParameter> {
        self.parameters.iter().find(|param| param.key == key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.parameters.iter_mut().find(|param| param.key == key) {
            Some(param) => param.value = value,
            None => self.parameters.push(FmtpParameter { key, value }),
        }
    }

    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<(FmtpFormat, Self)> {
        let format = FmtpFormat::read(cursor)?;
        cursor.space()?;
        let params = cursor.one_or_more(is_byte_string_char, "format specific parameters")?;
        let mut result = Self::default();
        for piece in params.split(';') {
            let (key, value) = match piece.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim().to_owned())),
                None => (piece.trim(), None),
            };
            if !key.is_empty() {
                result.set(key, value);
            }
        }
        if result.parameters.is_empty() {
            return Err(SDPError::SyntaxError(format!(
                "no format parameters found in: {}",
                params
            )));
        }
        Ok((format, result))
    }
}

impl fmt::Display for FormatParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parameters.iter().join(";"))
    }
}
