use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{SDPError, SDPResult},
    grammar::{
        Cursor,
        chars::{is_byte_string_char, is_token_char},
        read_all,
    },
};

/// RFC 8122: fingerprint-attribute = "fingerprint" ":" hash-func SP fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub hash_function: String,
    pub fingerprint: String,
}

impl Fingerprint {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<Self> {
        let hash_function = cursor.one_or_more(is_token_char, "hash function")?;
        cursor.space()?;
        let fingerprint = cursor.one_or_more(is_byte_string_char, "fingerprint")?;
        Ok(Self {
            hash_function: hash_function.to_owned(),
            fingerprint: fingerprint.to_owned(),
        })
    }
}

impl FromStr for Fingerprint {
    type Err = SDPError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_all(s, Self::read)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.hash_function, self.fingerprint)
    }
}
