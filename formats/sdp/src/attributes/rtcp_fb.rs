use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    errors::SDPResult,
    grammar::{
        Cursor,
        chars::{is_byte_string_char, is_token_char},
    },
};

/// The payload an `a=rtcp-fb` line applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RtcpFeedbackTarget {
    Wildcard,
    Payload(u8),
}

impl fmt::Display for RtcpFeedbackTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => f.write_str("*"),
            Self::Payload(pt) => write!(f, "{}", pt),
        }
    }
}

/// RFC 4585 4.2:
/// rtcp-fb-val = "ack" rtcp-fb-ack-param
///             / "nack" rtcp-fb-nack-param
///             / "trr-int" SP 1*DIGIT
///             / rtcp-fb-id rtcp-fb-param
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RtcpFeedback {
    Ack {
        parameter: Option<String>,
        additional: Option<String>,
    },
    Nack {
        parameter: Option<String>,
        additional: Option<String>,
    },
    TrrInt {
        interval: u64,
    },
    Other {
        feedback_type: String,
        parameter: Option<String>,
        additional: Option<String>,
    },
}

impl RtcpFeedback {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<(RtcpFeedbackTarget, Self)> {
        let target = if cursor.try_literal("*") {
            RtcpFeedbackTarget::Wildcard
        } else {
            RtcpFeedbackTarget::Payload(cursor.number("payload type")?)
        };
        cursor.space()?;
        let feedback_type = cursor.word("feedback type")?;
        if feedback_type == "trr-int" {
            cursor.space()?;
            let interval = cursor.number("trr-int interval")?;
            return Ok((target, Self::TrrInt { interval }));
        }

        let mut parameter = None;
        let mut additional = None;
        if cursor.try_space() {
            parameter = Some(cursor.one_or_more(is_token_char, "feedback parameter")?.to_owned());
            if cursor.try_space() {
                additional = Some(
                    cursor
                        .one_or_more(is_byte_string_char, "feedback additional parameter")?
                        .to_owned(),
                );
            }
        }
        let feedback = match feedback_type {
            "ack" => Self::Ack {
                parameter,
                additional,
            },
            "nack" => Self::Nack {
                parameter,
                additional,
            },
            other => Self::Other {
                feedback_type: other.to_owned(),
                parameter,
                additional,
            },
        };
        Ok((target, feedback))
    }

    pub fn feedback_type(&self) -> &str {
        match self {
            Self::Ack { .. } => "ack",
            Self::Nack { .. } => "nack",
            Self::TrrInt { .. } => "trr-int",
            Self::Other { feedback_type, .. } => feedback_type,
        }
    }
}

impl fmt::Display for RtcpFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrrInt { interval } => write!(f, "trr-int {}", interval),
            Self::Ack {
                parameter,
                additional,
            }
            | Self::Nack {
                parameter,
                additional,
            }
            | Self::Other {
                parameter,
                additional,
                ..
            } => {
                write!(f, "{}", self.feedback_type())?;
                if let Some(parameter) = parameter {
                    write!(f, " {}", parameter)?;
                    if let Some(additional) = additional {
                        write!(f, " {}", additional)?;
                    }
                }
                Ok(())
            }
        }
    }
}
