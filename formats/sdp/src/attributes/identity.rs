use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{SDPError, SDPResult},
    grammar::{
        Cursor,
        chars::{SP, is_base64_char, is_byte_string_char, is_token_char},
        read_all,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityExtension {
    pub name: String,
    pub value: Option<String>,
}

/// RFC 8827: identity-attribute = "identity:" identity-assertion
///                                 [ SP identity-extension *(";" identity-extension) ]
/// extensions are accepted separated by SP as well
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub assertion: String,
    pub extensions: Vec<IdentityExtension>,
}

impl Identity {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<Self> {
        let assertion = cursor.one_or_more(is_base64_char, "identity assertion")?;
        let mut extensions = Vec::new();
        while cursor.try_space() {
            let name = cursor.one_or_more(is_token_char, "identity extension name")?;
            let value = if cursor.try_literal("=") {
                Some(
                    cursor
                        .one_or_more(
                            |c| c != SP && is_byte_string_char(c),
                            "identity extension value",
                        )?
                        .to_owned(),
                )
            } else {
                None
            };
            extensions.push(IdentityExtension {
                name: name.to_owned(),
                value,
            });
        }
        Ok(Self {
            assertion: assertion.to_owned(),
            extensions,
        })
    }
}

impl FromStr for Identity {
    type Err = SDPError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_all(s, Self::read)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.assertion)?;
        self.extensions.iter().try_for_each(|ext| {
            write!(f, " {}", ext.name)?;
            if let Some(value) = &ext.value {
                write!(f, "={}", value)?;
            }
            Ok(())
        })
    }
}
