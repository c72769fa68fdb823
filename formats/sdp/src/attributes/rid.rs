use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{SDPError, SDPResult},
    grammar::{
        Cursor,
        chars::{is_rid_char, is_token_char, is_vchar},
        read_all,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RidDirection {
    Send,
    Recv,
}

impl FromStr for RidDirection {
    type Err = SDPError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "send" => Ok(Self::Send),
            "recv" => Ok(Self::Recv),
            _ => Err(SDPError::SyntaxError(format!(
                "rid direction must be send or recv, got: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for RidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Send => f.write_str("send"),
            Self::Recv => f.write_str("recv"),
        }
    }
}

/// `height-width` is recognized alongside the RFC 8851 names.
///
/// rid-param = rid-width-param / rid-height-param / rid-fps-param / rid-fs-param
///           / rid-br-param / rid-pps-param / rid-bpp-param / rid-depend-param
///           / rid-param-other
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RidParam {
    MaxWidth(Option<String>),
    MaxHeight(Option<String>),
    HeightWidth(Option<String>),
    MaxFps(Option<String>),
    MaxFs(Option<String>),
    MaxBr(Option<String>),
    MaxPps(Option<String>),
    MaxBpp(Option<String>),
    Depend(Vec<String>),
    Other {
        param_type: String,
        value: Option<String>,
    },
}

impl RidParam {
    fn read(cursor: &mut Cursor<'_>) -> SDPResult<Self> {
        let param_type = cursor.one_or_more(is_token_char, "rid param")?;
        if param_type == "depend" {
            cursor.literal("=")?;
            let mut rids = vec![cursor.one_or_more(is_rid_char, "rid id")?.to_owned()];
            while cursor.try_literal(",") {
                rids.push(cursor.one_or_more(is_rid_char, "rid id")?.to_owned());
            }
            return Ok(Self::Depend(rids));
        }

        let value = if cursor.try_literal("=") {
            Some(
                cursor
                    .one_or_more(|c| c != b';' && is_vchar(c), "rid param value")?
                    .to_owned(),
            )
        } else {
            None
        };
        Ok(match param_type {
            "max-width" => Self::MaxWidth(value),
            "max-height" => Self::MaxHeight(value),
            "height-width" => Self::HeightWidth(value),
            "max-fps" => Self::MaxFps(value),
            "max-fs" => Self::MaxFs(value),
            "max-br" => Self::MaxBr(value),
            "max-pps" => Self::MaxPps(value),
            "max-bpp" => Self::MaxBpp(value),
            other => Self::Other {
                param_type: other.to_owned(),
                value,
            },
        })
    }

    pub fn param_type(&self) -> &str {
        match self {
            Self::MaxWidth(_) => "max-width",
            Self::MaxHeight(_) => "max-height",
            Self::HeightWidth(_) => "height-width",
            Self::MaxFps(_) => "max-fps",
            Self::MaxFs(_) => "max-fs",
            Self::MaxBr(_) => "max-br",
            Self::MaxPps(_) => "max-pps",
            Self::MaxBpp(_) => "max-bpp",
            Self::Depend(_) => "depend",
            Self::Other { param_type, .. } => param_type,
        }
    }
}

impl fmt::Display for RidParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.param_type())?;
        match self {
            Self::Depend(rids) => write!(f, "={}", rids.iter().join(",")),
            Self::MaxWidth(value)
            | Self::MaxHeight(value)
            | Self::HeightWidth(value)
            | Self::MaxFps(value)
            | Self::MaxFs(value)
            | Self::MaxBr(value)
            | Self::MaxPps(value)
            | Self::MaxBpp(value)
            | Self::Other { value, .. } => match value {
                Some(value) => write!(f, "={}", value),
                None => Ok(()),
            },
        }
    }
}

/// RFC 8851:
/// rid-syntax = %s"a=rid:" rid-id SP rid-dir
///              [ rid-pt-param-list / rid-param-list ]
/// rid-pt-param-list = SP rid-fmt-list *( ";" rid-param )
/// rid-param-list = SP rid-param *( ";" rid-param )
/// rid-fmt-list = %s"pt=" fmt *( "," fmt )
///
/// The params after a `pt=` list may also be separated from it by a space.
/// Printing always uses `;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rid {
    pub id: String,
    pub direction: RidDirection,
    pub payloads: Option<Vec<String>>,
    pub params: Vec<RidParam>,
}

impl Rid {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<Self> {
        let id = cursor.one_or_more(is_rid_char, "rid id")?;
        cursor.space()?;
        let start = *cursor;
        let direction = cursor.one_or_more(is_token_char, "rid direction")?;
        let direction: RidDirection = direction.parse().inspect_err(|_| *cursor = start)?;

        let mut rid = Self {
            id: id.to_owned(),
            direction,
            payloads: None,
            params: Vec::new(),
        };
        if !cursor.try_space() {
            return Ok(rid);
        }

        if cursor.try_literal("pt=") {
            let mut payloads = vec![cursor.one_or_more(is_token_char, "fmt")?.to_owned()];
            while cursor.try_literal(",") {
                payloads.push(cursor.one_or_more(is_token_char, "fmt")?.to_owned());
            }
            rid.payloads = Some(payloads);
            if cursor.try_space() {
                rid.params.push(RidParam::read(cursor)?);
            }
        } else {
            rid.params.push(RidParam::read(cursor)?);
        }
        while cursor.try_literal(";") {
            rid.params.push(RidParam::read(cursor)?);
        }
        Ok(rid)
    }
}

impl FromStr for Rid {
    type Err = SDPError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_all(s, Self::read)
    }
}

impl fmt::Display for Rid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.direction)?;
        let params = self.params.iter().join(";");
        match &self.payloads {
            Some(payloads) => {
                write!(f, " pt={}", payloads.iter().join(","))?;
                if !params.is_empty() {
                    write!(f, ";{}", params)?;
                }
            }
            None if !params.is_empty() => write!(f, " {}", params)?,
            None => {}
        }
        Ok(())
    }
}
