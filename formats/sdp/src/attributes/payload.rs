use serde::{Deserialize, Serialize};

use super::{fmtp::FormatParameters, rtcp_fb::RtcpFeedback, rtpmap::RtpMap};

/// Everything the media section says about one payload type, gathered from the
/// `rtpmap`, `fmtp` and `rtcp-fb` lines that name it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadAttribute {
    pub payload_type: u8,
    pub rtp_map: Option<RtpMap>,
    pub fmtp: Option<FormatParameters>,
    pub rtcp_feedbacks: Vec<RtcpFeedback>,
}

impl PayloadAttribute {
    pub fn new(payload_type: u8) -> Self {
        Self {
            payload_type,
            rtp_map: None,
            fmtp: None,
            rtcp_feedbacks: Vec::new(),
        }
    }
}
