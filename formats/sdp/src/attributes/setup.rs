use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{SDPError, SDPResult},
    grammar::Cursor,
};

/// RFC 4145: setup-attr = "a=setup:" role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetupRole {
    Active,
    Passive,
    ActPass,
    HoldConn,
}

impl SetupRole {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<Self> {
        let role: Self = cursor.remaining().parse()?;
        cursor.take_rest();
        Ok(role)
    }
}

impl FromStr for SetupRole {
    type Err = SDPError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "passive" => Ok(Self::Passive),
            "actpass" => Ok(Self::ActPass),
            "holdconn" => Ok(Self::HoldConn),
            _ => Err(SDPError::SyntaxError(format!(
                "role must be one of active, passive, actpass, holdconn, got: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for SetupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Passive => f.write_str("passive"),
            Self::ActPass => f.write_str("actpass"),
            Self::HoldConn => f.write_str("holdconn"),
        }
    }
}
