use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::SDPError;

/// RFC 8866 6.7: `a=sendrecv`, `a=recvonly`, `a=sendonly` or `a=inactive`.
///
/// Also the optional `/direction` of an `a=extmap` line. A media section with no
/// direction flag is treated as `sendrecv`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaDirection {
    #[default]
    SendRecv,
    RecvOnly,
    SendOnly,
    Inactive,
}

impl MediaDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SendRecv => "sendrecv",
            Self::RecvOnly => "recvonly",
            Self::SendOnly => "sendonly",
            Self::Inactive => "inactive",
        }
    }

    pub fn sends(&self) -> bool {
        matches!(self, Self::SendRecv | Self::SendOnly)
    }

    pub fn receives(&self) -> bool {
        matches!(self, Self::SendRecv | Self::RecvOnly)
    }

    /// The direction the answering side takes for an offered one.
    pub fn reversed(&self) -> Self {
        match self {
            Self::RecvOnly => Self::SendOnly,
            Self::SendOnly => Self::RecvOnly,
            other => *other,
        }
    }
}

impl FromStr for MediaDirection {
    type Err = SDPError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::SendRecv, Self::RecvOnly, Self::SendOnly, Self::Inactive]
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| {
                SDPError::SyntaxError(format!(
                    "direction must be sendrecv, recvonly, sendonly or inactive, got: {}",
                    s
                ))
            })
    }
}

impl fmt::Display for MediaDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
