use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    errors::SDPResult,
    grammar::{Cursor, chars::is_msid_char, chars::is_token_char},
};

/// msid-value = msid-id [ SP msid-appdata ]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Msid {
    pub id: String,
    pub appdata: Option<String>,
}

impl Msid {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<Self> {
        let id = cursor.bounded(is_msid_char, 1, 64, "msid id")?;
        let appdata = if cursor.try_space() {
            Some(cursor.bounded(is_msid_char, 1, 64, "msid appdata")?.to_owned())
        } else {
            None
        };
        Ok(Self {
            id: id.to_owned(),
            appdata,
        })
    }
}

impl fmt::Display for Msid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if let Some(appdata) = &self.appdata {
            write!(f, " {}", appdata)?;
        }
        Ok(())
    }
}

/// msid-semantic-value = msid-semantic msid-list
/// msid-list = *(SP msid-id) / SP "*"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsidSemantic {
    pub semantic: String,
    pub identifiers: Vec<String>,
    pub apply_for_all: bool,
}

impl MsidSemantic {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<Self> {
        // some browsers emit "a=msid-semantic: WMS"
        cursor.try_space();
        let semantic = cursor.one_or_more(is_token_char, "msid semantic")?;
        let mut result = Self {
            semantic: semantic.to_owned(),
            ..Default::default()
        };
        while cursor.try_space() {
            if cursor.try_literal("*") {
                result.apply_for_all = true;
                break;
            }
            result
                .identifiers
                .push(cursor.word("msid identifier")?.to_owned());
        }
        Ok(result)
    }
}

impl fmt::Display for MsidSemantic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.semantic)?;
        self.identifiers
            .iter()
            .try_for_each(|id| write!(f, " {}", id))?;
        if self.apply_for_all {
            write!(f, " *")?;
        }
        Ok(())
    }
}
