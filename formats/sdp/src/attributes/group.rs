use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{SDPError, SDPResult},
    grammar::{Cursor, chars::is_token_char, read_all},
};

/// RFC 5888: group-attribute = "a=group:" semantics *(SP identification-tag)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub semantic: String,
    pub identification_tags: Vec<String>,
}

impl Group {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<Self> {
        let semantic = cursor.one_or_more(is_token_char, "group semantic")?;
        let mut identification_tags = Vec::new();
        while cursor.try_space() {
            identification_tags
                .push(cursor.one_or_more(is_token_char, "identification tag")?.to_owned());
        }
        Ok(Self {
            semantic: semantic.to_owned(),
            identification_tags,
        })
    }
}

impl FromStr for Group {
    type Err = SDPError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_all(s, Self::read)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.semantic)?;
        self.identification_tags
            .iter()
            .try_for_each(|tag| write!(f, " {}", tag))
    }
}
