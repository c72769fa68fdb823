//! @see: RFC 8866 SDP: Session Description Protocol
use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    attributes::{media_attributes::MediaAttributes, session_attributes::SessionAttributes},
    errors::SDPError,
    reader::SessionDescriptionReader,
    writer::SessionDescriptionWriter,
};

/// 5.1. Protocol Version ("v=")
/// v=0
pub type SDPVersion = u32;

/// 5.2. Origin ("o=")
/// o=<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SDPNetType {
    #[default]
    IN,
    Other(String),
}

impl From<&str> for SDPNetType {
    fn from(value: &str) -> Self {
        match value {
            "IN" => Self::IN,
            other => Self::Other(other.into()),
        }
    }
}

impl fmt::Display for SDPNetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::IN => "IN",
                Self::Other(str) => str,
            }
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SDPAddrType {
    #[default]
    IP4,
    IP6,
    Other(String),
}

impl From<&str> for SDPAddrType {
    fn from(value: &str) -> Self {
        match value {
            "IP4" => Self::IP4,
            "IP6" => Self::IP6,
            other => Self::Other(other.into()),
        }
    }
}

impl fmt::Display for SDPAddrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::IP4 => "IP4",
                Self::IP6 => "IP6",
                Self::Other(str) => str,
            }
        )
    }
}

/// sess-id and sess-version are `1*DIGIT` of any length, kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SDPOrigin {
    pub user_name: String,
    pub session_id: String,
    pub session_version: String,
    pub net_type: SDPNetType,
    pub addr_type: SDPAddrType,
    pub unicast_address: String,
}

impl Default for SDPOrigin {
    fn default() -> Self {
        Self {
            user_name: "-".to_owned(),
            session_id: "0".to_owned(),
            session_version: "0".to_owned(),
            net_type: SDPNetType::IN,
            addr_type: SDPAddrType::IP4,
            unicast_address: "127.0.0.1".to_owned(),
        }
    }
}

impl fmt::Display for SDPOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.user_name,
            self.session_id,
            self.session_version,
            self.net_type,
            self.addr_type,
            self.unicast_address,
        )
    }
}

/// 5.7. Connection Information ("c=")
/// c=<nettype> <addrtype> <connection-address>
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SDPConnectionInformation {
    pub net_type: SDPNetType,
    pub addr_type: SDPAddrType,
    /// ttl and address count suffixes stay part of the address text
    pub address: String,
}

impl fmt::Display for SDPConnectionInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.net_type, self.addr_type, self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SDPBandwidthType {
    AS,   // AS
    CT,   // CT
    TIAS, // TIAS, RFC 3890
    Other(String),
}

impl From<&str> for SDPBandwidthType {
    fn from(value: &str) -> Self {
        match value {
            "AS" => Self::AS,
            "CT" => Self::CT,
            "TIAS" => Self::TIAS,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for SDPBandwidthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::AS => "AS",
                Self::CT => "CT",
                Self::TIAS => "TIAS",
                Self::Other(str) => str,
            }
        )
    }
}

/// 5.8. Bandwidth Information ("b=")
/// b=<bwtype>:<bandwidth>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SDPBandWidthInformation {
    pub bw_type: SDPBandwidthType,
    pub bandwidth: u64,
}

impl fmt::Display for SDPBandWidthInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.bw_type, self.bandwidth)
    }
}

/// 5.10. Repeat Times ("r=")
/// r=<repeat interval> <active duration> <offsets from start-time>
///
/// typed times keep their unit suffix, e.g. `7d`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SDPRepeatTime {
    pub interval: String,
    pub typed_times: Vec<String>,
}

impl fmt::Display for SDPRepeatTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.interval)?;
        self.typed_times
            .iter()
            .try_for_each(|item| write!(f, " {}", item))
    }
}

/// 5.11. Time Zone Adjustment ("z=")
/// z=<adjustment time> <offset> <adjustment time> <offset> ....
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SDPTimeZoneAdjustment {
    pub time: String,
    pub negative: bool,
    pub offset: String,
}

impl fmt::Display for SDPTimeZoneAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{}",
            self.time,
            if self.negative { "-" } else { "" },
            self.offset
        )
    }
}

/// 5.9. Time Active ("t=")
/// t=<start-time> <stop-time>
/// with the repeat and zone records that follow it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SDPTimeInformation {
    pub start_time: String,
    pub stop_time: String,
    pub repeat_times: Vec<SDPRepeatTime>,
    pub time_zone_adjustments: Vec<SDPTimeZoneAdjustment>,
}

impl Default for SDPTimeInformation {
    fn default() -> Self {
        Self {
            start_time: "0".to_owned(),
            stop_time: "0".to_owned(),
            repeat_times: Vec::new(),
            time_zone_adjustments: Vec::new(),
        }
    }
}

impl SDPTimeInformation {
    /// The `z=` value, `None` when there are no adjustments.
    pub fn zone_adjustments_text(&self) -> Option<String> {
        if self.time_zone_adjustments.is_empty() {
            None
        } else {
            Some(self.time_zone_adjustments.iter().join(" "))
        }
    }
}

/// 5.12. Encryption Keys ("k=")
/// k=<method>
/// k=<method>:<encryption key>
/// obsolete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SDPEncryptionKey {
    Prompt,
    Clear(String),
    Base64(String),
    Uri(String),
}

impl fmt::Display for SDPEncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prompt => f.write_str("prompt"),
            Self::Clear(key) => write!(f, "clear:{}", key),
            Self::Base64(key) => write!(f, "base64:{}", key),
            Self::Uri(uri) => write!(f, "uri:{}", uri),
        }
    }
}

/// 5.14. Media Descriptions ("m=")
/// m=<media> <port> <proto> <fmt> ...
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum SDPMediaType {
    #[default]
    Audio, // audio
    Video,       // video
    Text,        // text
    Application, // application
    Message,     // message
    Image,       // image
    Other(String),
}

impl fmt::Display for SDPMediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Audio => "audio",
                Self::Video => "video",
                Self::Text => "text",
                Self::Application => "application",
                Self::Message => "message",
                Self::Image => "image",
                Self::Other(str) => str,
            }
        )
    }
}

impl From<&str> for SDPMediaType {
    fn from(value: &str) -> Self {
        match value {
            "audio" => Self::Audio,
            "video" => Self::Video,
            "text" => Self::Text,
            "application" => Self::Application,
            "message" => Self::Message,
            "image" => Self::Image,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// port ["/" integer]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SDPRangedPort {
    pub port: u16,
    pub range: Option<u16>,
}

impl From<u16> for SDPRangedPort {
    fn from(value: u16) -> Self {
        SDPRangedPort {
            port: value,
            range: None,
        }
    }
}

impl fmt::Display for SDPRangedPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.port)?;
        if let Some(range) = self.range {
            write!(f, "/{}", range)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SDPMediaLine {
    pub media_type: SDPMediaType,
    pub port: SDPRangedPort,
    /// slash separated transport protocol, e.g. `UDP/TLS/RTP/SAVPF`
    pub protocols: Vec<String>,
    pub formats: Vec<String>,
}

impl SDPMediaLine {
    pub fn protocol(&self) -> String {
        self.protocols.join("/")
    }
}

impl fmt::Display for SDPMediaLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.media_type, self.port, self.protocol())?;
        self.formats
            .iter()
            .try_for_each(|item| write!(f, " {}", item))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SDPMediaDescription {
    pub media_line: SDPMediaLine,
    pub media_title: Option<String>,
    pub connections: Vec<SDPConnectionInformation>,
    pub bandwidths: Vec<SDPBandWidthInformation>,
    pub key: Option<SDPEncryptionKey>,
    pub attributes: MediaAttributes,
}

impl SDPMediaDescription {
    pub fn new(media_line: SDPMediaLine) -> Self {
        Self {
            media_line,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDescription {
    pub version: SDPVersion,
    pub origin: SDPOrigin,
    pub session_name: Option<String>,
    pub session_information: Option<String>,
    pub uri: Option<String>,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub connection: Option<SDPConnectionInformation>,
    pub bandwidths: Vec<SDPBandWidthInformation>,
    pub time_information: Vec<SDPTimeInformation>,
    pub key: Option<SDPEncryptionKey>,
    pub attributes: SessionAttributes,
    pub media_descriptions: Vec<SDPMediaDescription>,
}

impl SessionDescription {
    pub fn reader() -> SessionDescriptionReader {
        SessionDescriptionReader::new()
    }

    /// The media section tagged with `a=mid:<mid>`.
    pub fn media(&self, mid: &str) -> Option<&SDPMediaDescription> {
        self.media_descriptions
            .iter()
            .find(|media| media.attributes.mid.as_deref() == Some(mid))
    }
}

impl FromStr for SessionDescription {
    type Err = SDPError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::reader().read_from(s)
    }
}

impl fmt::Display for SessionDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SessionDescriptionWriter::default().write_to(f, self)
    }
}
