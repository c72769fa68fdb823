use crate::{
    attributes::{AttributeLine, reason_of},
    errors::{SDPError, SDPResult},
    grammar::{
        Cursor,
        chars::{is_base64_char, is_non_ws_char, is_token_char},
        cursor::parse_number,
        rules,
    },
    record::{Record, RecordType, split_records},
    session::{
        SDPBandWidthInformation, SDPConnectionInformation, SDPEncryptionKey, SDPMediaDescription,
        SDPMediaLine, SDPOrigin, SDPRangedPort, SDPRepeatTime, SDPTimeInformation,
        SDPTimeZoneAdjustment, SessionDescription,
    },
};

// @see: RFC 8866, 9. SDP Grammar
/// session-description = version-field
///                       origin-field
///                       session-name-field
///                       [information-field]
///                       [uri-field]
///                       *email-field
///                       *phone-field
///                       [connection-field]
///                       *bandwidth-field
///                       1*time-description
///                       [key-field]
///                       *attribute-field
///                       *media-description
/// time-description = time-field
///                    [repeat-description]
/// repeat-description = 1*repeat-field
///                      [zone-field]
/// media-description = media-field
///                     [information-field]
///                     *connection-field
///                     *bandwidth-field
///                     [key-field]
///                     *attribute-field
///
/// Every optional section looks at the next record only; a record that does
/// not belong to the section is left for the sections after it.
#[derive(Debug, Default)]
enum SessionDescriptionReadState {
    #[default]
    Version,
    Origin,
    SessionName,
    SessionInformation,
    SessionUri,
    SessionEmail,
    SessionPhone,
    SessionConnection,
    SessionBandwidth,
    SessionTime,
    SessionKey,
    SessionAttribute,
    MediaField,
    MediaInformation,
    MediaConnection,
    MediaBandwidth,
    MediaKey,
    MediaAttribute,
    Finished,
}

/// The record list with a read index that only moves forward.
struct RecordQueue<'a> {
    records: Vec<Record<'a>>,
    index: usize,
}

impl<'a> RecordQueue<'a> {
    fn peek(&self) -> Option<Record<'a>> {
        self.records.get(self.index).copied()
    }

    fn advance(&mut self) -> Option<Record<'a>> {
        let record = self.peek()?;
        tracing::trace!("read record at line {}: {}", record.line, record);
        self.index += 1;
        Some(record)
    }

    /// Takes the next record when it is of `record_type`.
    fn next_if(&mut self, record_type: RecordType) -> Option<Record<'a>> {
        match self.peek() {
            Some(record) if record.record_type == record_type => self.advance(),
            _ => None,
        }
    }

    /// Takes the next record, which must be of `record_type`.
    fn expect(&mut self, record_type: RecordType, expected: &'static str) -> SDPResult<Record<'a>> {
        match self.peek() {
            Some(record) if record.record_type == record_type => {
                self.advance();
                Ok(record)
            }
            Some(record) => Err(SDPError::UnexpectedRecord {
                expected,
                found: record.to_string(),
                line: record.line,
            }),
            None => Err(SDPError::UnexpectedRecord {
                expected,
                found: "end of payload".to_owned(),
                line: self.records.last().map(|record| record.line).unwrap_or_default(),
            }),
        }
    }
}

/// Runs `read` over a record value that must be consumed completely.
fn read_record<'a, T>(
    record: &Record<'a>,
    read: impl FnOnce(&mut Cursor<'a>) -> SDPResult<T>,
) -> SDPResult<T> {
    let mut cursor = Cursor::new(record.value);
    let result = read(&mut cursor).and_then(|value| cursor.expect_end().map(|_| value));
    result.map_err(|err| SDPError::RecordSyntax {
        record_type: record.record_type.tag(),
        value: record.value.to_owned(),
        line: record.line,
        column: cursor.position(),
        reason: reason_of(err),
    })
}

fn read_text(cursor: &mut Cursor<'_>) -> SDPResult<String> {
    Ok(cursor.rule(rules::text, "text")?.to_owned())
}

pub struct SessionDescriptionReader {
    session_description: SessionDescription,
    read_state: SessionDescriptionReadState,
}

impl Default for SessionDescriptionReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionDescriptionReader {
    pub fn new() -> Self {
        Self {
            session_description: Default::default(),
            read_state: Default::default(),
        }
    }

    /// The classified records of `text`, before any section grammar is applied.
    pub fn records(text: &str) -> SDPResult<Vec<Record<'_>>> {
        split_records(text)
    }

    pub fn read_from(mut self, text: &str) -> SDPResult<SessionDescription> {
        let mut records = RecordQueue {
            records: split_records(text)?,
            index: 0,
        };
        loop {
            match self.read_state {
                SessionDescriptionReadState::Version => self.read_version(&mut records)?,
                SessionDescriptionReadState::Origin => self.read_origin(&mut records)?,
                SessionDescriptionReadState::SessionName => {
                    if let Some(record) = records.next_if(RecordType::SessionName) {
                        self.session_description.session_name =
                            Some(read_record(&record, read_text)?);
                    }
                    self.read_state = SessionDescriptionReadState::SessionInformation;
                }
                SessionDescriptionReadState::SessionInformation => {
                    if let Some(record) = records.next_if(RecordType::Information) {
                        self.session_description.session_information =
                            Some(read_record(&record, read_text)?);
                    }
                    self.read_state = SessionDescriptionReadState::SessionUri;
                }
                SessionDescriptionReadState::SessionUri => {
                    if let Some(record) = records.next_if(RecordType::Uri) {
                        self.session_description.uri = Some(read_record(&record, read_text)?);
                    }
                    self.read_state = SessionDescriptionReadState::SessionEmail;
                }
                SessionDescriptionReadState::SessionEmail => {
                    while let Some(record) = records.next_if(RecordType::Email) {
                        let email = read_record(&record, read_text)?;
                        self.session_description.emails.push(email);
                    }
                    self.read_state = SessionDescriptionReadState::SessionPhone;
                }
                SessionDescriptionReadState::SessionPhone => {
                    while let Some(record) = records.next_if(RecordType::Phone) {
                        let phone = read_record(&record, read_text)?;
                        self.session_description.phones.push(phone);
                    }
                    self.read_state = SessionDescriptionReadState::SessionConnection;
                }
                SessionDescriptionReadState::SessionConnection => {
                    if let Some(record) = records.next_if(RecordType::Connection) {
                        self.session_description.connection =
                            Some(read_record(&record, Self::read_connection)?);
                    }
                    self.read_state = SessionDescriptionReadState::SessionBandwidth;
                }
                SessionDescriptionReadState::SessionBandwidth => {
                    while let Some(record) = records.next_if(RecordType::Bandwidth) {
                        let bandwidth = read_record(&record, Self::read_bandwidth)?;
                        self.session_description.bandwidths.push(bandwidth);
                    }
                    self.read_state = SessionDescriptionReadState::SessionTime;
                }
                SessionDescriptionReadState::SessionTime => {
                    while let Some(record) = records.next_if(RecordType::Time) {
                        let time = Self::read_time_description(&record, &mut records)?;
                        self.session_description.time_information.push(time);
                    }
                    self.read_state = SessionDescriptionReadState::SessionKey;
                }
                SessionDescriptionReadState::SessionKey => {
                    if let Some(record) = records.next_if(RecordType::Key) {
                        self.session_description.key = Some(read_record(&record, Self::read_key)?);
                    }
                    self.read_state = SessionDescriptionReadState::SessionAttribute;
                }
                SessionDescriptionReadState::SessionAttribute => {
                    while let Some(record) = records.next_if(RecordType::Attribute) {
                        let line = AttributeLine::parse(record.value, record.line)?;
                        self.session_description.attributes.read(&line)?;
                    }
                    self.read_state = SessionDescriptionReadState::MediaField;
                }
                SessionDescriptionReadState::MediaField => {
                    self.read_state = match records.next_if(RecordType::Media) {
                        Some(record) => {
                            let media_line = read_record(&record, Self::read_media_line)?;
                            self.session_description
                                .media_descriptions
                                .push(SDPMediaDescription::new(media_line));
                            SessionDescriptionReadState::MediaInformation
                        }
                        None => SessionDescriptionReadState::Finished,
                    };
                }
                SessionDescriptionReadState::MediaInformation => {
                    if let Some(record) = records.next_if(RecordType::Information) {
                        let title = read_record(&record, read_text)?;
                        self.current_media()?.media_title = Some(title);
                    }
                    self.read_state = SessionDescriptionReadState::MediaConnection;
                }
                SessionDescriptionReadState::MediaConnection => {
                    while let Some(record) = records.next_if(RecordType::Connection) {
                        let connection = read_record(&record, Self::read_connection)?;
                        self.current_media()?.connections.push(connection);
                    }
                    self.read_state = SessionDescriptionReadState::MediaBandwidth;
                }
                SessionDescriptionReadState::MediaBandwidth => {
                    while let Some(record) = records.next_if(RecordType::Bandwidth) {
                        let bandwidth = read_record(&record, Self::read_bandwidth)?;
                        self.current_media()?.bandwidths.push(bandwidth);
                    }
                    self.read_state = SessionDescriptionReadState::MediaKey;
                }
                SessionDescriptionReadState::MediaKey => {
                    if let Some(record) = records.next_if(RecordType::Key) {
                        let key = read_record(&record, Self::read_key)?;
                        self.current_media()?.key = Some(key);
                    }
                    self.read_state = SessionDescriptionReadState::MediaAttribute;
                }
                SessionDescriptionReadState::MediaAttribute => {
                    while let Some(record) = records.next_if(RecordType::Attribute) {
                        let line = AttributeLine::parse(record.value, record.line)?;
                        self.current_media()?.attributes.read(&line)?;
                    }
                    self.read_state = SessionDescriptionReadState::MediaField;
                }
                SessionDescriptionReadState::Finished => break,
            }
        }

        if let Some(record) = records.peek() {
            return Err(SDPError::NonExhaustive {
                line: record.line,
                record: record.to_string(),
            });
        }
        Ok(self.session_description)
    }

    fn current_media(&mut self) -> SDPResult<&mut SDPMediaDescription> {
        self.session_description
            .media_descriptions
            .last_mut()
            .ok_or_else(|| SDPError::SyntaxError("no media description to read into".to_owned()))
    }

    /// version-field = %s"v" "=" 1*DIGIT CRLF
    fn read_version(&mut self, records: &mut RecordQueue<'_>) -> SDPResult<()> {
        let record = records.expect(RecordType::Version, "v=")?;
        self.session_description.version = read_record(&record, |cursor| {
            let digits = cursor.rule(rules::digits, "version")?;
            parse_number(digits, "version")
        })?;
        self.read_state = SessionDescriptionReadState::Origin;
        Ok(())
    }

    /// origin-field = %s"o" "=" username SP sess-id SP sess-version SP nettype SP addrtype SP unicast-address CRLF
    fn read_origin(&mut self, records: &mut RecordQueue<'_>) -> SDPResult<()> {
        let record = records.expect(RecordType::Origin, "o=")?;
        self.session_description.origin = read_record(&record, |cursor| {
            let user_name = cursor.one_or_more(is_non_ws_char, "username")?.to_owned();
            cursor.space()?;
            let session_id = cursor.rule(rules::digits, "session id")?.to_owned();
            cursor.space()?;
            let session_version = cursor.rule(rules::digits, "session version")?.to_owned();
            cursor.space()?;
            let net_type = cursor.rule(rules::token, "nettype")?.into();
            cursor.space()?;
            let addr_type = cursor.rule(rules::token, "addrtype")?.into();
            cursor.space()?;
            let unicast_address = cursor.rule(rules::address, "unicast address")?.to_owned();
            Ok(SDPOrigin {
                user_name,
                session_id,
                session_version,
                net_type,
                addr_type,
                unicast_address,
            })
        })?;
        self.read_state = SessionDescriptionReadState::SessionName;
        Ok(())
    }

    /// connection-field = %s"c" "=" nettype SP addrtype SP connection-address CRLF
    fn read_connection(cursor: &mut Cursor<'_>) -> SDPResult<SDPConnectionInformation> {
        let net_type = cursor.rule(rules::token, "nettype")?.into();
        cursor.space()?;
        let addr_type = cursor.rule(rules::token, "addrtype")?.into();
        cursor.space()?;
        let address = cursor.rule(rules::address, "connection address")?.to_owned();
        Ok(SDPConnectionInformation {
            net_type,
            addr_type,
            address,
        })
    }

    /// bandwidth-field = %s"b" "=" bwtype ":" bandwidth CRLF
    fn read_bandwidth(cursor: &mut Cursor<'_>) -> SDPResult<SDPBandWidthInformation> {
        let bw_type = cursor.rule(rules::token, "bwtype")?.into();
        cursor.literal(":")?;
        let bandwidth = cursor.number::<u64>("bandwidth")?;
        Ok(SDPBandWidthInformation { bw_type, bandwidth })
    }

    /// time-field = %s"t" "=" start-time SP stop-time CRLF
    /// followed by its repeat and zone records
    fn read_time_description(
        record: &Record<'_>,
        records: &mut RecordQueue<'_>,
    ) -> SDPResult<SDPTimeInformation> {
        let (start_time, stop_time) = read_record(record, |cursor| {
            let start_time = cursor.rule(rules::time, "start time")?.to_owned();
            cursor.space()?;
            let stop_time = cursor.rule(rules::time, "stop time")?.to_owned();
            Ok((start_time, stop_time))
        })?;

        let mut repeat_times = Vec::new();
        while let Some(record) = records.next_if(RecordType::Repeat) {
            repeat_times.push(read_record(&record, Self::read_repeat)?);
        }

        let time_zone_adjustments = match records.next_if(RecordType::ZoneAdjustments) {
            Some(record) => read_record(&record, Self::read_zone_adjustments)?,
            None => Vec::new(),
        };

        Ok(SDPTimeInformation {
            start_time,
            stop_time,
            repeat_times,
            time_zone_adjustments,
        })
    }

    /// repeat-field = %s"r" "=" repeat-interval SP typed-time 1*(SP typed-time) CRLF
    fn read_repeat(cursor: &mut Cursor<'_>) -> SDPResult<SDPRepeatTime> {
        let interval = cursor.rule(rules::repeat_interval, "repeat interval")?.to_owned();
        let mut typed_times = Vec::new();
        cursor.space()?;
        typed_times.push(cursor.rule(rules::typed_time, "typed time")?.to_owned());
        while cursor.try_space() {
            typed_times.push(cursor.rule(rules::typed_time, "typed time")?.to_owned());
        }
        Ok(SDPRepeatTime {
            interval,
            typed_times,
        })
    }

    /// zone-field = %s"z" "=" time SP ["-"] typed-time *(SP time SP ["-"] typed-time) CRLF
    fn read_zone_adjustments(cursor: &mut Cursor<'_>) -> SDPResult<Vec<SDPTimeZoneAdjustment>> {
        let mut adjustments = Vec::new();
        loop {
            let time = cursor.rule(rules::time, "adjustment time")?.to_owned();
            cursor.space()?;
            let negative = cursor.try_literal("-");
            let offset = cursor.rule(rules::typed_time, "offset")?.to_owned();
            adjustments.push(SDPTimeZoneAdjustment {
                time,
                negative,
                offset,
            });
            if !cursor.try_space() {
                break;
            }
        }
        Ok(adjustments)
    }

    /// key-type = %s"prompt" / %s"clear:" text / %s"base64:" base64 / %s"uri:" uri
    fn read_key(cursor: &mut Cursor<'_>) -> SDPResult<SDPEncryptionKey> {
        if cursor.try_literal("prompt") {
            Ok(SDPEncryptionKey::Prompt)
        } else if cursor.try_literal("clear:") {
            Ok(SDPEncryptionKey::Clear(read_text(cursor)?))
        } else if cursor.try_literal("base64:") {
            Ok(SDPEncryptionKey::Base64(
                cursor.one_or_more(is_base64_char, "base64 key")?.to_owned(),
            ))
        } else if cursor.try_literal("uri:") {
            Ok(SDPEncryptionKey::Uri(
                cursor.one_or_more(is_non_ws_char, "key uri")?.to_owned(),
            ))
        } else {
            Err(SDPError::SyntaxError(format!(
                "expect key type prompt, clear, base64 or uri, got: \"{}\"",
                cursor.remaining()
            )))
        }
    }

    /// media-field = %s"m" "=" media SP port ["/" integer] SP proto 1*(SP fmt) CRLF
    /// proto = token *("/" token)
    fn read_media_line(cursor: &mut Cursor<'_>) -> SDPResult<SDPMediaLine> {
        let media_type = cursor.rule(rules::token, "media")?.into();
        cursor.space()?;
        let port = cursor.rule(rules::port, "port")?;
        let port = SDPRangedPort {
            port: parse_number(port, "port")?,
            range: if cursor.try_literal("/") {
                let range = cursor.rule(rules::integer, "port count")?;
                Some(parse_number(range, "port count")?)
            } else {
                None
            },
        };
        cursor.space()?;
        let mut protocols = vec![cursor.one_or_more(is_token_char, "proto")?.to_owned()];
        while cursor.try_literal("/") {
            protocols.push(cursor.one_or_more(is_token_char, "proto")?.to_owned());
        }
        let mut formats = Vec::new();
        cursor.space()?;
        formats.push(cursor.one_or_more(is_token_char, "fmt")?.to_owned());
        while cursor.try_space() {
            formats.push(cursor.one_or_more(is_token_char, "fmt")?.to_owned());
        }
        Ok(SDPMediaLine {
            media_type,
            port,
            protocols,
            formats,
        })
    }
}
