use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{SDPError, SDPResult},
    grammar::{Cursor, chars::is_token_char, read_all},
};

/// ssrc-attr = "ssrc:" ssrc-id SP attribute
/// attribute =/ ssrc-attr
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsrcAttribute {
    pub name: String,
    pub value: Option<String>,
}

impl SsrcAttribute {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<(u32, Self)> {
        let ssrc_id = cursor.number("ssrc id")?;
        cursor.space()?;
        let name = cursor.one_or_more(is_token_char, "ssrc attribute name")?;
        let value = if cursor.try_literal(":") {
            Some(cursor.take_rest().to_owned())
        } else {
            None
        };
        Ok((
            ssrc_id,
            Self {
                name: name.to_owned(),
                value,
            },
        ))
    }
}

impl fmt::Display for SsrcAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(value) = &self.value {
            write!(f, ":{}", value)?;
        }
        Ok(())
    }
}

/// All `a=ssrc` lines naming one ssrc id, attribute names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ssrc {
    pub ssrc_id: u32,
    pub attributes: Vec<SsrcAttribute>,
}

impl Ssrc {
    pub fn new(ssrc_id: u32) -> Self {
        Self {
            ssrc_id,
            attributes: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SsrcAttribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Later values of the same name overwrite earlier ones in place.
    pub fn set(&mut self, attribute: SsrcAttribute) {
        match self
            .attributes
            .iter_mut()
            .find(|attr| attr.name == attribute.name)
        {
            Some(existing) => existing.value = attribute.value,
            None => self.attributes.push(attribute),
        }
    }
}

/// RFC 5576: ssrc-group-attr = "ssrc-group:" semantics *(SP ssrc-id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsrcGroup {
    pub semantic: String,
    pub ssrc_ids: Vec<u32>,
}

impl SsrcGroup {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<Self> {
        let semantic = cursor.one_or_more(is_token_char, "ssrc group semantic")?;
        let mut ssrc_ids = Vec::new();
        while cursor.try_space() {
            ssrc_ids.push(cursor.number("ssrc id")?);
        }
        Ok(Self {
            semantic: semantic.to_owned(),
            ssrc_ids,
        })
    }
}

impl FromStr for SsrcGroup {
    type Err = SDPError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_all(s, Self::read)
    }
}

impl fmt::Display for SsrcGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.semantic)?;
        self.ssrc_ids
            .iter()
            .try_for_each(|id| write!(f, " {}", id))
    }
}
