use serde::{Deserialize, Serialize};

use super::{
    AttributeLine, SDPAttribute, SDPTrivialAttribute,
    candidate::{Candidate, RemoteCandidate},
    extmap::Extmap,
    fingerprint::Fingerprint,
    fmtp::{FmtpFormat, TokenFormatParameters},
    media_direction::MediaDirection,
    msid::Msid,
    payload::PayloadAttribute,
    rid::Rid,
    rtcp::Rtcp,
    rtcp_fb::{RtcpFeedback, RtcpFeedbackTarget},
    set_flag, set_once,
    setup::SetupRole,
    ssrc::{Ssrc, SsrcGroup},
};
use crate::errors::SDPResult;

/// Media level attributes, in print order.
///
/// `rtpmap`, `fmtp` and `rtcp-fb` lines are folded into [`PayloadAttribute`]s keyed by
/// payload type, `ssrc` lines into [`Ssrc`]s keyed by id. Both keep first seen order.
/// `fmtp` lines for non RTP formats stay in `token_fmtps`, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaAttributes {
    pub rtcp: Option<Rtcp>,
    pub ice_ufrag: Option<String>,
    pub ice_pwd: Option<String>,
    pub ice_options: Option<Vec<String>>,
    pub candidates: Vec<Candidate>,
    pub remote_candidates: Vec<Vec<RemoteCandidate>>,
    pub end_of_candidates: bool,
    pub fingerprints: Vec<Fingerprint>,
    pub setup: Option<SetupRole>,
    pub mid: Option<String>,
    pub extmaps: Vec<Extmap>,
    pub rtcp_feedback_wildcards: Vec<RtcpFeedback>,
    pub payloads: Vec<PayloadAttribute>,
    pub token_fmtps: Vec<TokenFormatParameters>,
    pub ptime: Option<f64>,
    pub max_ptime: Option<f64>,
    pub direction: Option<MediaDirection>,
    pub ssrc_groups: Vec<SsrcGroup>,
    pub ssrcs: Vec<Ssrc>,
    pub rtcp_mux: bool,
    pub rtcp_mux_only: bool,
    pub rtcp_rsize: bool,
    pub msids: Vec<Msid>,
    pub image_attrs: Vec<String>,
    pub rids: Vec<Rid>,
    pub simulcast: Option<String>,
    pub sctp_port: Option<u16>,
    pub max_message_size: Option<u64>,
    pub unrecognized: Vec<SDPTrivialAttribute>,
}

impl MediaAttributes {
    pub fn payload(&self, payload_type: u8) -> Option<&PayloadAttribute> {
        self.payloads
            .iter()
            .find(|payload| payload.payload_type == payload_type)
    }

    /// Looks up the payload record, creating an empty one at the end when missing.
    pub fn payload_mut(&mut self, payload_type: u8) -> &mut PayloadAttribute {
        let idx = match self
            .payloads
            .iter()
            .position(|payload| payload.payload_type == payload_type)
        {
            Some(idx) => idx,
            None => {
                self.payloads.push(PayloadAttribute::new(payload_type));
                self.payloads.len() - 1
            }
        };
        &mut self.payloads[idx]
    }

    pub fn ssrc(&self, ssrc_id: u32) -> Option<&Ssrc> {
        self.ssrcs.iter().find(|ssrc| ssrc.ssrc_id == ssrc_id)
    }

    /// Looks up the ssrc record, creating an empty one at the end when missing.
    pub fn ssrc_mut(&mut self, ssrc_id: u32) -> &mut Ssrc {
        let idx = match self.ssrcs.iter().position(|ssrc| ssrc.ssrc_id == ssrc_id) {
            Some(idx) => idx,
            None => {
                self.ssrcs.push(Ssrc::new(ssrc_id));
                self.ssrcs.len() - 1
            }
        };
        &mut self.ssrcs[idx]
    }

    /// Parses one `a=` line of a media section and merges it in.
    pub fn read(&mut self, line: &AttributeLine<'_>) -> SDPResult<()> {
        let attribute = SDPAttribute::read_media(line)?;
        self.push(attribute).map_err(|err| line.error(0, err))
    }

    pub fn push(&mut self, attribute: SDPAttribute) -> SDPResult<()> {
        match attribute {
            SDPAttribute::Rtcp(rtcp) => set_once(&mut self.rtcp, rtcp, "rtcp")?,
            SDPAttribute::IceUfrag(ufrag) => set_once(&mut self.ice_ufrag, ufrag, "ice-ufrag")?,
            SDPAttribute::IcePwd(pwd) => set_once(&mut self.ice_pwd, pwd, "ice-pwd")?,
            SDPAttribute::IceOptions(options) => {
                set_once(&mut self.ice_options, options, "ice-options")?
            }
            SDPAttribute::Candidate(candidate) => self.candidates.push(candidate),
            SDPAttribute::RemoteCandidates(list) => self.remote_candidates.push(list),
            SDPAttribute::EndOfCandidates => {
                set_flag(&mut self.end_of_candidates, "end-of-candidates")?
            }
            SDPAttribute::Fingerprint(fingerprint) => self.fingerprints.push(fingerprint),
            SDPAttribute::Setup(role) => set_once(&mut self.setup, role, "setup")?,
            SDPAttribute::Mid(mid) => self.mid = Some(mid),
            SDPAttribute::Extmap(extmap) => self.extmaps.push(extmap),
            SDPAttribute::RtpMap(pt, rtp_map) => self.payload_mut(pt).rtp_map = Some(rtp_map),
            SDPAttribute::Fmtp(FmtpFormat::Payload(pt), fmtp) => {
                self.payload_mut(pt).fmtp = Some(fmtp)
            }
            SDPAttribute::Fmtp(FmtpFormat::Token(format), parameters) => self
                .token_fmtps
                .push(TokenFormatParameters { format, parameters }),
            SDPAttribute::RtcpFeedback(RtcpFeedbackTarget::Wildcard, feedback) => {
                self.rtcp_feedback_wildcards.push(feedback)
            }
            SDPAttribute::RtcpFeedback(RtcpFeedbackTarget::Payload(pt), feedback) => {
                self.payload_mut(pt).rtcp_feedbacks.push(feedback)
            }
            SDPAttribute::PTime(ptime) => set_once(&mut self.ptime, ptime, "ptime")?,
            SDPAttribute::MaxPTime(max_ptime) => {
                set_once(&mut self.max_ptime, max_ptime, "maxptime")?
            }
            SDPAttribute::Direction(direction) => {
                set_once(&mut self.direction, direction, "direction")?
            }
            SDPAttribute::SsrcGroup(group) => self.ssrc_groups.push(group),
            SDPAttribute::Ssrc(id, attribute) => self.ssrc_mut(id).set(attribute),
            SDPAttribute::RtcpMux => set_flag(&mut self.rtcp_mux, "rtcp-mux")?,
            SDPAttribute::RtcpMuxOnly => set_flag(&mut self.rtcp_mux_only, "rtcp-mux-only")?,
            SDPAttribute::RtcpRsize => set_flag(&mut self.rtcp_rsize, "rtcp-rsize")?,
            SDPAttribute::Msid(msid) => self.msids.push(msid),
            SDPAttribute::ImageAttr(value) => self.image_attrs.push(value),
            SDPAttribute::Rid(rid) => self.rids.push(rid),
            SDPAttribute::Simulcast(value) => set_once(&mut self.simulcast, value, "simulcast")?,
            SDPAttribute::SctpPort(port) => set_once(&mut self.sctp_port, port, "sctp-port")?,
            SDPAttribute::MaxMessageSize(size) => {
                set_once(&mut self.max_message_size, size, "max-message-size")?
            }
            SDPAttribute::Trivial(trivial) => self.unrecognized.push(trivial),
            other => self.unrecognized.push(SDPTrivialAttribute::from(&other)),
        }
        Ok(())
    }

    /// The attributes in print order, payload records expanded back into
    /// `rtpmap`, `fmtp` and `rtcp-fb` lines.
    pub fn to_attributes(&self) -> Vec<SDPAttribute> {
        let mut attributes = Vec::new();
        attributes.extend(self.rtcp.clone().map(SDPAttribute::Rtcp));
        attributes.extend(self.ice_ufrag.clone().map(SDPAttribute::IceUfrag));
        attributes.extend(self.ice_pwd.clone().map(SDPAttribute::IcePwd));
        attributes.extend(self.ice_options.clone().map(SDPAttribute::IceOptions));
        attributes.extend(self.candidates.iter().cloned().map(SDPAttribute::Candidate));
        attributes.extend(
            self.remote_candidates
                .iter()
                .cloned()
                .map(SDPAttribute::RemoteCandidates),
        );
        if self.end_of_candidates {
            attributes.push(SDPAttribute::EndOfCandidates);
        }
        attributes.extend(
            self.fingerprints
                .iter()
                .cloned()
                .map(SDPAttribute::Fingerprint),
        );
        attributes.extend(self.setup.map(SDPAttribute::Setup));
        attributes.extend(self.mid.clone().map(SDPAttribute::Mid));
        attributes.extend(self.extmaps.iter().cloned().map(SDPAttribute::Extmap));
        attributes.extend(self.rtcp_feedback_wildcards.iter().map(|feedback| {
            SDPAttribute::RtcpFeedback(RtcpFeedbackTarget::Wildcard, feedback.clone())
        }));
        for payload in &self.payloads {
            let pt = payload.payload_type;
            attributes.extend(
                payload
                    .rtp_map
                    .clone()
                    .map(|rtp_map| SDPAttribute::RtpMap(pt, rtp_map)),
            );
            attributes.extend(
                payload
                    .fmtp
                    .clone()
                    .map(|fmtp| SDPAttribute::Fmtp(FmtpFormat::Payload(pt), fmtp)),
            );
            attributes.extend(payload.rtcp_feedbacks.iter().map(|feedback| {
                SDPAttribute::RtcpFeedback(RtcpFeedbackTarget::Payload(pt), feedback.clone())
            }));
        }
        attributes.extend(self.token_fmtps.iter().map(|fmtp| {
            SDPAttribute::Fmtp(
                FmtpFormat::Token(fmtp.format.clone()),
                fmtp.parameters.clone(),
            )
        }));
        attributes.extend(self.ptime.map(SDPAttribute::PTime));
        attributes.extend(self.max_ptime.map(SDPAttribute::MaxPTime));
        attributes.extend(self.direction.map(SDPAttribute::Direction));
        attributes.extend(self.ssrc_groups.iter().cloned().map(SDPAttribute::SsrcGroup));
        for ssrc in &self.ssrcs {
            attributes.extend(
                ssrc.attributes
                    .iter()
                    .map(|attribute| SDPAttribute::Ssrc(ssrc.ssrc_id, attribute.clone())),
            );
        }
        if self.rtcp_mux {
            attributes.push(SDPAttribute::RtcpMux);
        }
        if self.rtcp_mux_only {
            attributes.push(SDPAttribute::RtcpMuxOnly);
        }
        if self.rtcp_rsize {
            attributes.push(SDPAttribute::RtcpRsize);
        }
        attributes.extend(self.msids.iter().cloned().map(SDPAttribute::Msid));
        attributes.extend(self.image_attrs.iter().cloned().map(SDPAttribute::ImageAttr));
        attributes.extend(self.rids.iter().cloned().map(SDPAttribute::Rid));
        attributes.extend(self.simulcast.clone().map(SDPAttribute::Simulcast));
        attributes.extend(self.sctp_port.map(SDPAttribute::SctpPort));
        attributes.extend(self.max_message_size.map(SDPAttribute::MaxMessageSize));
        attributes.extend(self.unrecognized.iter().cloned().map(SDPAttribute::Trivial));
        attributes
    }
}
