use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{errors::SDPResult, grammar::Cursor, grammar::chars::is_token_char};

/// rtpmap-value = payload-type SP encoding-name "/" clock-rate [ "/" encoding-params ]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtpMap {
    pub encoding_name: String,
    pub clock_rate: u64,
    pub encoding_params: Option<u64>,
}

impl RtpMap {
    pub fn new(encoding_name: impl Into<String>, clock_rate: u64) -> Self {
        Self {
            encoding_name: encoding_name.into(),
            clock_rate,
            encoding_params: None,
        }
    }

    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<(u8, Self)> {
        let payload_type = cursor.number("payload type")?;
        cursor.space()?;
        let encoding_name = cursor.one_or_more(is_token_char, "encoding name")?;
        cursor.literal("/")?;
        let clock_rate = cursor.number("clock rate")?;
        let encoding_params = if cursor.try_literal("/") {
            Some(cursor.number("encoding parameters")?)
        } else {
            None
        };
        Ok((
            payload_type,
            Self {
                encoding_name: encoding_name.to_owned(),
                clock_rate,
                encoding_params,
            },
        ))
    }
}

impl fmt::Display for RtpMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.encoding_name, self.clock_rate)?;
        if let Some(param) = self.encoding_params {
            write!(f, "/{}", param)?;
        }
        Ok(())
    }
}
