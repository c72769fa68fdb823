pub mod candidate;
pub mod extmap;
pub mod fingerprint;
pub mod fmtp;
pub mod group;
pub mod ice;
pub mod identity;
pub mod media_attributes;
pub mod media_direction;
pub mod msid;
pub mod payload;
pub mod rid;
pub mod rtcp;
pub mod rtcp_fb;
pub mod rtpmap;
pub mod session_attributes;
pub mod setup;
pub mod ssrc;

#[cfg(test)]
mod test;

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use candidate::{Candidate, RemoteCandidate, join_remote_candidates};
use extmap::Extmap;
use fingerprint::Fingerprint;
use fmtp::{FmtpFormat, FormatParameters};
use group::Group;
use identity::Identity;
use media_direction::MediaDirection;
use msid::{Msid, MsidSemantic};
use rid::Rid;
use rtcp::Rtcp;
use rtcp_fb::{RtcpFeedback, RtcpFeedbackTarget};
use rtpmap::RtpMap;
use setup::SetupRole;
use ssrc::{SsrcAttribute, SsrcGroup};

use crate::{
    errors::{SDPError, SDPResult},
    grammar::{
        Cursor,
        chars::{is_byte_string_char, is_digit, is_tls_id_char, is_token_char},
    },
};

/// 5.13. Attributes ("a=")
/// a=<attribute-name>
/// a=<attribute-name>:<attribute-value>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SDPTrivialAttribute {
    pub name: String,
    pub value: Option<String>,
}

impl fmt::Display for SDPTrivialAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(value) = &self.value {
            write!(f, ":{}", value)?;
        }
        Ok(())
    }
}

/// An `a=` record split into its field and optional value.
///
/// attribute = (attribute-name ":" attribute-value) / attribute-name
/// attribute-name = token
/// attribute-value = byte-string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLine<'a> {
    pub field: &'a str,
    pub value: Option<&'a str>,
    pub line: usize,
}

impl<'a> AttributeLine<'a> {
    pub fn parse(text: &'a str, line: usize) -> SDPResult<Self> {
        let mut cursor = Cursor::new(text);
        let split = |cursor: &mut Cursor<'a>| -> SDPResult<Self> {
            let field = cursor.one_or_more(is_token_char, "attribute name")?;
            let value = if cursor.try_literal(":") {
                Some(cursor.one_or_more(is_byte_string_char, "attribute value")?)
            } else {
                None
            };
            cursor.expect_end()?;
            Ok(Self { field, value, line })
        };
        split(&mut cursor).map_err(|err| SDPError::RecordSyntax {
            record_type: 'a',
            value: text.to_owned(),
            line,
            column: cursor.position(),
            reason: reason_of(err),
        })
    }

    /// Runs `read` over the value, which must be consumed completely.
    pub(crate) fn read_value<T>(
        &self,
        read: impl FnOnce(&mut Cursor<'a>) -> SDPResult<T>,
    ) -> SDPResult<T> {
        let mut cursor = Cursor::new(self.value.unwrap_or_default());
        let result = read(&mut cursor).and_then(|value| cursor.expect_end().map(|_| value));
        result.map_err(|err| self.error(cursor.position(), err))
    }

    pub(crate) fn expect_flag(&self) -> SDPResult<()> {
        match self.value {
            None => Ok(()),
            Some(_) => Err(self.error(
                0,
                SDPError::SyntaxError(format!("{} is a flag and takes no value", self.field)),
            )),
        }
    }

    pub(crate) fn error(&self, column: usize, err: SDPError) -> SDPError {
        let reason = reason_of(err);
        tracing::debug!(
            "invalid attribute at line {}, col {}: {}, {}",
            self.line,
            column,
            self,
            reason
        );
        SDPError::InvalidAttribute {
            field: self.field.to_owned(),
            value: self.value.map(str::to_owned),
            line: self.line,
            column,
            reason,
        }
    }

    pub(crate) fn to_trivial(self) -> SDPTrivialAttribute {
        tracing::debug!("keep unrecognized attribute at line {}: {}", self.line, self);
        SDPTrivialAttribute {
            name: self.field.to_owned(),
            value: self.value.map(str::to_owned),
        }
    }
}

impl fmt::Display for AttributeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={}", self.field)?;
        if let Some(value) = self.value {
            write!(f, ":{}", value)?;
        }
        Ok(())
    }
}

impl From<&SDPAttribute> for SDPTrivialAttribute {
    fn from(value: &SDPAttribute) -> Self {
        let text = value.to_string();
        match text.split_once(':') {
            Some((name, value)) => Self {
                name: name.to_owned(),
                value: Some(value.to_owned()),
            },
            None => Self {
                name: text,
                value: None,
            },
        }
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, field: &str) -> SDPResult<()> {
    if slot.is_some() {
        return Err(SDPError::SyntaxError(format!(
            "{} must appear only once",
            field
        )));
    }
    *slot = Some(value);
    Ok(())
}

fn set_flag(flag: &mut bool, field: &str) -> SDPResult<()> {
    if *flag {
        return Err(SDPError::SyntaxError(format!(
            "{} must appear only once",
            field
        )));
    }
    *flag = true;
    Ok(())
}

pub(crate) fn reason_of(err: SDPError) -> String {
    match err {
        SDPError::SyntaxError(reason) | SDPError::IntegerOverflow(reason) => reason,
        other => other.to_string(),
    }
}

fn read_ptime(cursor: &mut Cursor<'_>) -> SDPResult<f64> {
    let start = *cursor;
    let text = cursor.one_or_more(|c| is_digit(c) || c == b'.', "packet time")?;
    match text.parse::<f64>() {
        Ok(value) if value > 0.0 => Ok(value),
        _ => {
            *cursor = start;
            Err(SDPError::SyntaxError(format!(
                "packet time must be a non zero number, got: {}",
                text
            )))
        }
    }
}

fn read_raw(cursor: &mut Cursor<'_>) -> SDPResult<String> {
    Ok(cursor
        .one_or_more(is_byte_string_char, "attribute value")?
        .to_owned())
}

/// One recognized `a=` line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SDPAttribute {
    Group(Group),
    MsidSemantic(MsidSemantic),
    IceLite,
    IceUfrag(String),
    IcePwd(String),
    IceOptions(Vec<String>),
    Fingerprint(Fingerprint),
    Setup(SetupRole),
    TlsId(String),
    Identity(Identity),
    Extmap(Extmap),
    Rtcp(Rtcp),
    Candidate(Candidate),
    RemoteCandidates(Vec<RemoteCandidate>),
    EndOfCandidates,
    Mid(String),
    RtpMap(u8, RtpMap),
    Fmtp(FmtpFormat, FormatParameters),
    RtcpFeedback(RtcpFeedbackTarget, RtcpFeedback),
    PTime(f64),
    MaxPTime(f64),
    Direction(MediaDirection),
    SsrcGroup(SsrcGroup),
    Ssrc(u32, SsrcAttribute),
    RtcpMux,
    RtcpMuxOnly,
    RtcpRsize,
    Msid(Msid),
    ImageAttr(String),
    Rid(Rid),
    Simulcast(String),
    SctpPort(u16),
    MaxMessageSize(u64),
    Trivial(SDPTrivialAttribute),
}

impl SDPAttribute {
    /// Attributes shared by both scopes, `None` when the field is not one of them.
    fn read_common(line: &AttributeLine<'_>) -> Option<SDPResult<Self>> {
        let attribute = match line.field {
            "ice-ufrag" => line.read_value(ice::read_ufrag).map(Self::IceUfrag),
            "ice-pwd" => line.read_value(ice::read_pwd).map(Self::IcePwd),
            "ice-options" => line.read_value(ice::read_options).map(Self::IceOptions),
            "fingerprint" => line.read_value(Fingerprint::read).map(Self::Fingerprint),
            "setup" => line.read_value(SetupRole::read).map(Self::Setup),
            "extmap" => line.read_value(Extmap::read).map(Self::Extmap),
            _ => return None,
        };
        Some(attribute)
    }

    /// Dispatches a session level attribute, unknown fields are kept verbatim.
    pub fn read_session(line: &AttributeLine<'_>) -> SDPResult<Self> {
        if let Some(attribute) = Self::read_common(line) {
            return attribute;
        }
        match line.field {
            "group" => line.read_value(Group::read).map(Self::Group),
            "msid-semantic" => line.read_value(MsidSemantic::read).map(Self::MsidSemantic),
            "ice-lite" => line.expect_flag().map(|_| Self::IceLite),
            "tls-id" => line
                .read_value(|cursor| {
                    Ok(cursor.one_or_more(is_tls_id_char, "tls-id")?.to_owned())
                })
                .map(Self::TlsId),
            "identity" => line.read_value(Identity::read).map(Self::Identity),
            _ => Ok(Self::Trivial(line.to_trivial())),
        }
    }

    /// Dispatches a media level attribute, unknown fields are kept verbatim.
    pub fn read_media(line: &AttributeLine<'_>) -> SDPResult<Self> {
        if let Some(attribute) = Self::read_common(line) {
            return attribute;
        }
        match line.field {
            "rtcp" => line.read_value(Rtcp::read).map(Self::Rtcp),
            "candidate" => line.read_value(Candidate::read).map(Self::Candidate),
            "remote-candidates" => line
                .read_value(RemoteCandidate::read_list)
                .map(Self::RemoteCandidates),
            "end-of-candidates" => line.expect_flag().map(|_| Self::EndOfCandidates),
            "mid" => line
                .read_value(|cursor| Ok(cursor.one_or_more(is_token_char, "mid")?.to_owned()))
                .map(Self::Mid),
            "rtpmap" => line
                .read_value(RtpMap::read)
                .map(|(pt, rtp_map)| Self::RtpMap(pt, rtp_map)),
            "fmtp" => line
                .read_value(FormatParameters::read)
                .map(|(format, fmtp)| Self::Fmtp(format, fmtp)),
            "rtcp-fb" => line
                .read_value(RtcpFeedback::read)
                .map(|(target, feedback)| Self::RtcpFeedback(target, feedback)),
            "ptime" => line.read_value(read_ptime).map(Self::PTime),
            "maxptime" => line.read_value(read_ptime).map(Self::MaxPTime),
            "sendrecv" | "recvonly" | "sendonly" | "inactive" => line
                .expect_flag()
                .and_then(|_| line.field.parse::<MediaDirection>())
                .map(Self::Direction),
            "ssrc-group" => line.read_value(SsrcGroup::read).map(Self::SsrcGroup),
            "ssrc" => line
                .read_value(SsrcAttribute::read)
                .map(|(id, attribute)| Self::Ssrc(id, attribute)),
            "rtcp-mux" => line.expect_flag().map(|_| Self::RtcpMux),
            "rtcp-mux-only" => line.expect_flag().map(|_| Self::RtcpMuxOnly),
            "rtcp-rsize" => line.expect_flag().map(|_| Self::RtcpRsize),
            "msid" => line.read_value(Msid::read).map(Self::Msid),
            "imageattr" => line.read_value(read_raw).map(Self::ImageAttr),
            "rid" => line.read_value(Rid::read).map(Self::Rid),
            "simulcast" => line.read_value(read_raw).map(Self::Simulcast),
            "sctp-port" => line
                .read_value(|cursor| cursor.bounded_number::<u16>(5, "sctp port"))
                .map(Self::SctpPort),
            "max-message-size" => line
                .read_value(|cursor| cursor.number::<u64>("max message size"))
                .map(Self::MaxMessageSize),
            _ => Ok(Self::Trivial(line.to_trivial())),
        }
    }
}

impl fmt::Display for SDPAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(group) => write!(f, "group:{}", group),
            Self::MsidSemantic(semantic) => write!(f, "msid-semantic:{}", semantic),
            Self::IceLite => f.write_str("ice-lite"),
            Self::IceUfrag(ufrag) => write!(f, "ice-ufrag:{}", ufrag),
            Self::IcePwd(pwd) => write!(f, "ice-pwd:{}", pwd),
            Self::IceOptions(options) => write!(f, "ice-options:{}", options.iter().join(" ")),
            Self::Fingerprint(fingerprint) => write!(f, "fingerprint:{}", fingerprint),
            Self::Setup(role) => write!(f, "setup:{}", role),
            Self::TlsId(id) => write!(f, "tls-id:{}", id),
            Self::Identity(identity) => write!(f, "identity:{}", identity),
            Self::Extmap(extmap) => write!(f, "extmap:{}", extmap),
            Self::Rtcp(rtcp) => write!(f, "rtcp:{}", rtcp),
            Self::Candidate(candidate) => write!(f, "candidate:{}", candidate),
            Self::RemoteCandidates(list) => {
                write!(f, "remote-candidates:{}", join_remote_candidates(list))
            }
            Self::EndOfCandidates => f.write_str("end-of-candidates"),
            Self::Mid(mid) => write!(f, "mid:{}", mid),
            Self::RtpMap(pt, rtp_map) => write!(f, "rtpmap:{} {}", pt, rtp_map),
            Self::Fmtp(format, fmtp) => write!(f, "fmtp:{} {}", format, fmtp),
            Self::RtcpFeedback(target, feedback) => write!(f, "rtcp-fb:{} {}", target, feedback),
            Self::PTime(ptime) => write!(f, "ptime:{}", ptime),
            Self::MaxPTime(max_ptime) => write!(f, "maxptime:{}", max_ptime),
            Self::Direction(direction) => write!(f, "{}", direction),
            Self::SsrcGroup(group) => write!(f, "ssrc-group:{}", group),
            Self::Ssrc(id, attribute) => write!(f, "ssrc:{} {}", id, attribute),
            Self::RtcpMux => f.write_str("rtcp-mux"),
            Self::RtcpMuxOnly => f.write_str("rtcp-mux-only"),
            Self::RtcpRsize => f.write_str("rtcp-rsize"),
            Self::Msid(msid) => write!(f, "msid:{}", msid),
            Self::ImageAttr(value) => write!(f, "imageattr:{}", value),
            Self::Rid(rid) => write!(f, "rid:{}", rid),
            Self::Simulcast(value) => write!(f, "simulcast:{}", value),
            Self::SctpPort(port) => write!(f, "sctp-port:{}", port),
            Self::MaxMessageSize(size) => write!(f, "max-message-size:{}", size),
            Self::Trivial(trivial) => write!(f, "{}", trivial),
        }
    }
}
