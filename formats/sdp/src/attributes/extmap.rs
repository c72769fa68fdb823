use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::media_direction::MediaDirection;
use crate::{
    errors::{SDPError, SDPResult},
    grammar::{
        Cursor,
        chars::{is_byte_string_char, is_token_char},
        read_all,
    },
};

/// RFC 8285: extmap = mapentry ["/" direction] SP extensionname [SP extensionattributes]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extmap {
    pub entry: u16,
    pub direction: Option<MediaDirection>,
    pub extension_name: String,
    pub extension_attributes: Option<String>,
}

impl Extmap {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<Self> {
        let entry = cursor.bounded_number(5, "extmap entry")?;
        let direction = if cursor.try_literal("/") {
            let start = *cursor;
            let direction = cursor.one_or_more(is_token_char, "extmap direction")?;
            match direction.parse::<MediaDirection>() {
                Ok(direction) => Some(direction),
                Err(err) => {
                    *cursor = start;
                    return Err(err);
                }
            }
        } else {
            None
        };
        cursor.space()?;
        let extension_name = cursor.word("extension name")?;
        let extension_attributes = if cursor.try_space() {
            Some(
                cursor
                    .one_or_more(is_byte_string_char, "extension attributes")?
                    .to_owned(),
            )
        } else {
            None
        };
        Ok(Self {
            entry,
            direction,
            extension_name: extension_name.to_owned(),
            extension_attributes,
        })
    }
}

impl FromStr for Extmap {
    type Err = SDPError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_all(s, Self::read)
    }
}

impl fmt::Display for Extmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entry)?;
        if let Some(direction) = &self.direction {
            write!(f, "/{}", direction)?;
        }
        write!(f, " {}", self.extension_name)?;
        if let Some(attributes) = &self.extension_attributes {
            write!(f, " {}", attributes)?;
        }
        Ok(())
    }
}
