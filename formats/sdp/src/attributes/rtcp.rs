use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{SDPError, SDPResult},
    grammar::{Cursor, chars::is_token_char, read_all, rules},
    session::{SDPAddrType, SDPNetType},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtcpAddress {
    pub net_type: SDPNetType,
    pub addr_type: SDPAddrType,
    pub address: String,
}

/// RFC 3605: rtcp-attribute = "a=rtcp:" port [nettype space addrtype space connection-address]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rtcp {
    pub port: u16,
    pub address: Option<RtcpAddress>,
}

impl Rtcp {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<Self> {
        let port = cursor.number("port")?;
        let address = if cursor.try_space() {
            let net_type = cursor.one_or_more(is_token_char, "nettype")?;
            cursor.space()?;
            let addr_type = cursor.one_or_more(is_token_char, "addrtype")?;
            cursor.space()?;
            let address = cursor.rule(rules::address, "connection address")?;
            Some(RtcpAddress {
                net_type: net_type.into(),
                addr_type: addr_type.into(),
                address: address.to_owned(),
            })
        } else {
            None
        };
        Ok(Self { port, address })
    }
}

impl FromStr for Rtcp {
    type Err = SDPError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_all(s, Self::read)
    }
}

impl fmt::Display for Rtcp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.port)?;
        if let Some(address) = &self.address {
            write!(
                f,
                " {} {} {}",
                address.net_type, address.addr_type, address.address
            )?;
        }
        Ok(())
    }
}
