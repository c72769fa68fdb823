use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{SDPError, SDPResult},
    grammar::{
        Cursor,
        chars::{is_ice_char, is_token_char, is_vchar},
        read_all, rules,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateType {
    Host,
    Srflx,
    Prflx,
    Relay,
    Other(String),
}

impl From<&str> for CandidateType {
    fn from(value: &str) -> Self {
        match value {
            "host" => Self::Host,
            "srflx" => Self::Srflx,
            "prflx" => Self::Prflx,
            "relay" => Self::Relay,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for CandidateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Host => "host",
                Self::Srflx => "srflx",
                Self::Prflx => "prflx",
                Self::Relay => "relay",
                Self::Other(str) => str,
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateExtension {
    pub name: String,
    pub value: String,
}

/// RFC 8839 5.1:
/// candidate-attribute = "candidate" ":" foundation SP component-id SP
///                       transport SP
///                       priority SP
///                       connection-address SP     ;from RFC 4566
///                       port         ;port from RFC 4566
///                       SP cand-type
///                       [SP rel-addr]
///                       [SP rel-port]
///                       *(SP cand-extension)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub foundation: String,
    pub component: u32,
    pub transport: String,
    pub priority: u64,
    pub address: String,
    pub port: u16,
    pub candidate_type: CandidateType,
    pub related_address: Option<String>,
    pub related_port: Option<u16>,
    pub extensions: Vec<CandidateExtension>,
}

impl Candidate {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> SDPResult<Self> {
        let foundation = cursor.bounded(is_ice_char, 1, 32, "foundation")?;
        cursor.space()?;
        let component = cursor.bounded_number(5, "component id")?;
        cursor.space()?;
        let transport = cursor.one_or_more(is_token_char, "transport")?;
        cursor.space()?;
        let priority = cursor.bounded_number(10, "priority")?;
        cursor.space()?;
        let address = cursor.rule(rules::address, "connection address")?;
        cursor.space()?;
        let port = cursor.number("port")?;
        cursor.space()?;
        cursor.literal("typ")?;
        cursor.space()?;
        let candidate_type = cursor.one_or_more(is_token_char, "candidate type")?;

        let mut candidate = Self {
            foundation: foundation.to_owned(),
            component,
            transport: transport.to_owned(),
            priority,
            address: address.to_owned(),
            port,
            candidate_type: candidate_type.into(),
            related_address: None,
            related_port: None,
            extensions: Vec::new(),
        };

        if cursor.starts_with(" raddr ") {
            cursor.literal(" raddr")?;
            cursor.space()?;
            candidate.related_address =
                Some(cursor.rule(rules::address, "related address")?.to_owned());
        }
        if cursor.starts_with(" rport ") {
            cursor.literal(" rport")?;
            cursor.space()?;
            candidate.related_port = Some(cursor.number("related port")?);
        }
        while cursor.try_space() {
            let name = cursor.one_or_more(is_token_char, "extension name")?;
            cursor.space()?;
            let value = cursor.one_or_more(is_vchar, "extension value")?;
            candidate.extensions.push(CandidateExtension {
                name: name.to_owned(),
                value: value.to_owned(),
            });
        }
        Ok(candidate)
    }
}

impl FromStr for Candidate {
    type Err = SDPError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_all(s, Self::read)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} typ {}",
            self.foundation,
            self.component,
            self.transport,
            self.priority,
            self.address,
            self.port,
            self.candidate_type
        )?;
        if let Some(address) = &self.related_address {
            write!(f, " raddr {}", address)?;
        }
        if let Some(port) = self.related_port {
            write!(f, " rport {}", port)?;
        }
        self.extensions
            .iter()
            .try_for_each(|ext| write!(f, " {} {}", ext.name, ext.value))
    }
}

/// RFC 8839 5.2: remote-candidate = component-id SP connection-address SP port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCandidate {
    pub component: u32,
    pub address: String,
    pub port: u16,
}

impl RemoteCandidate {
    /// remote-candidate-att = "remote-candidates:" remote-candidate *(SP remote-candidate)
    pub(crate) fn read_list(cursor: &mut Cursor<'_>) -> SDPResult<Vec<Self>> {
        let mut list = Vec::new();
        loop {
            let component = cursor.bounded_number(5, "component id")?;
            cursor.space()?;
            let address = cursor.rule(rules::address, "connection address")?;
            cursor.space()?;
            let port = cursor.number("port")?;
            list.push(Self {
                component,
                address: address.to_owned(),
                port,
            });
            if !cursor.try_space() {
                break;
            }
        }
        Ok(list)
    }
}

impl fmt::Display for RemoteCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.component, self.address, self.port)
    }
}

/// Formats a remote candidate list as one attribute value.
pub fn join_remote_candidates(list: &[RemoteCandidate]) -> String {
    list.iter().join(" ")
}
