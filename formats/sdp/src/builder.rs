use crate::{
    attributes::{
        SDPAttribute, SDPTrivialAttribute, media_attributes::MediaAttributes,
        session_attributes::SessionAttributes,
    },
    errors::SDPResult,
    grammar::{read_all, rules},
    session::{
        SDPAddrType, SDPBandWidthInformation, SDPBandwidthType, SDPConnectionInformation,
        SDPEncryptionKey, SDPMediaDescription, SDPMediaLine, SDPMediaType, SDPNetType,
        SDPRangedPort, SDPRepeatTime, SDPTimeInformation, SDPTimeZoneAdjustment, SDPVersion,
        SessionDescription,
    },
};

#[derive(Debug, Default)]
pub struct SessionDescriptionBuilder {
    session_description: SessionDescription,
}

impl SessionDescriptionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: SDPVersion) -> Self {
        self.session_description.version = version;
        self
    }

    pub fn origin_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.session_description.origin.user_name = user_name.into();
        self
    }

    pub fn origin_session_id(mut self, session_id: u64) -> Self {
        self.session_description.origin.session_id = session_id.to_string();
        self
    }

    pub fn origin_session_version(mut self, session_version: u64) -> Self {
        self.session_description.origin.session_version = session_version.to_string();
        self
    }

    pub fn origin_net_type(mut self, net_type: SDPNetType) -> Self {
        self.session_description.origin.net_type = net_type;
        self
    }

    pub fn origin_addr_type(mut self, addr_type: SDPAddrType) -> Self {
        self.session_description.origin.addr_type = addr_type;
        self
    }

    pub fn origin_unicast_address(mut self, unicast_address: impl Into<String>) -> Self {
        self.session_description.origin.unicast_address = unicast_address.into();
        self
    }

    pub fn session_name(mut self, session_name: impl Into<String>) -> Self {
        self.session_description.session_name = Some(session_name.into());
        self
    }

    pub fn session_info(mut self, session_info: impl Into<String>) -> Self {
        self.session_description.session_information = Some(session_info.into());
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.session_description.uri = Some(uri.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.session_description.emails.push(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.session_description.phones.push(phone.into());
        self
    }

    pub fn connection_info(
        mut self,
        net_type: SDPNetType,
        addr_type: SDPAddrType,
        address: impl Into<String>,
    ) -> Self {
        self.session_description.connection = Some(SDPConnectionInformation {
            net_type,
            addr_type,
            address: address.into(),
        });
        self
    }

    pub fn bandwidth_info(mut self, bw_type: SDPBandwidthType, bandwidth: u64) -> Self {
        self.session_description
            .bandwidths
            .push(SDPBandWidthInformation { bw_type, bandwidth });
        self
    }

    /// Adds a time description. Start and stop are NTP seconds as written on
    /// the `t=` line: `0` or at least ten digits.
    pub fn time_info(
        mut self,
        start_time: &str,
        stop_time: &str,
        repeat_times: Vec<SDPRepeatTime>,
        time_zone_adjustments: Vec<SDPTimeZoneAdjustment>,
    ) -> SDPResult<Self> {
        let start_time = read_all(start_time, |cursor| cursor.rule(rules::time, "start time"))?;
        let stop_time = read_all(stop_time, |cursor| cursor.rule(rules::time, "stop time"))?;
        self.session_description
            .time_information
            .push(SDPTimeInformation {
                start_time: start_time.to_owned(),
                stop_time: stop_time.to_owned(),
                repeat_times,
                time_zone_adjustments,
            });
        Ok(self)
    }

    pub fn encryption_key(mut self, key: SDPEncryptionKey) -> Self {
        self.session_description.key = Some(key);
        self
    }

    pub fn attributes(mut self, attributes: SessionAttributes) -> Self {
        self.session_description.attributes = attributes;
        self
    }

    /// Adds one session attribute, single valued attributes may be set only once.
    pub fn attribute(mut self, attribute: SDPAttribute) -> SDPResult<Self> {
        self.session_description.attributes.push(attribute)?;
        Ok(self)
    }

    pub fn trivial_attribute(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.session_description
            .attributes
            .unrecognized
            .push(SDPTrivialAttribute {
                name: name.into(),
                value,
            });
        self
    }

    pub fn media_description(mut self, media: SDPMediaDescription) -> Self {
        self.session_description.media_descriptions.push(media);
        self
    }

    pub fn build(self) -> SessionDescription {
        self.session_description
    }
}

#[derive(Debug, Default)]
pub struct MediaDescriptionBuilder {
    media_description: SDPMediaDescription,
}

impl MediaDescriptionBuilder {
    pub fn new(media_type: SDPMediaType, port: u16, protocol: &str) -> Self {
        Self {
            media_description: SDPMediaDescription::new(SDPMediaLine {
                media_type,
                port: SDPRangedPort::from(port),
                protocols: protocol.split('/').map(str::to_owned).collect(),
                formats: Vec::new(),
            }),
        }
    }

    pub fn port_range(mut self, range: u16) -> Self {
        self.media_description.media_line.port.range = Some(range);
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.media_description.media_line.formats.push(format.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.media_description.media_title = Some(title.into());
        self
    }

    pub fn connection_info(
        mut self,
        net_type: SDPNetType,
        addr_type: SDPAddrType,
        address: impl Into<String>,
    ) -> Self {
        self.media_description
            .connections
            .push(SDPConnectionInformation {
                net_type,
                addr_type,
                address: address.into(),
            });
        self
    }

    pub fn bandwidth_info(mut self, bw_type: SDPBandwidthType, bandwidth: u64) -> Self {
        self.media_description
            .bandwidths
            .push(SDPBandWidthInformation { bw_type, bandwidth });
        self
    }

    pub fn encryption_key(mut self, key: SDPEncryptionKey) -> Self {
        self.media_description.key = Some(key);
        self
    }

    pub fn attributes(mut self, attributes: MediaAttributes) -> Self {
        self.media_description.attributes = attributes;
        self
    }

    /// Adds one media attribute, payload and ssrc records are merged by key.
    pub fn attribute(mut self, attribute: SDPAttribute) -> SDPResult<Self> {
        self.media_description.attributes.push(attribute)?;
        Ok(self)
    }

    pub fn build(self) -> SDPMediaDescription {
        self.media_description
    }
}
