use std::fmt::{self, Write};

use crate::{
    CRLF,
    attributes::SDPAttribute,
    session::{SDPMediaDescription, SDPTimeInformation, SessionDescription},
};

/// Prints documents in record order, every line ends with `eol`.
///
/// No validation happens here, the document is printed as it is.
#[derive(Debug, Clone, Copy)]
pub struct SessionDescriptionWriter<'a> {
    eol: &'a str,
}

impl Default for SessionDescriptionWriter<'static> {
    fn default() -> Self {
        Self { eol: CRLF }
    }
}

struct Printed<'w, 'd> {
    writer: &'w SessionDescriptionWriter<'w>,
    document: &'d SessionDescription,
}

impl fmt::Display for Printed<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.writer.write_to(f, self.document)
    }
}

impl<'a> SessionDescriptionWriter<'a> {
    pub fn new(eol: &'a str) -> Self {
        Self { eol }
    }

    pub fn write(&self, document: &SessionDescription) -> String {
        Printed {
            writer: self,
            document,
        }
        .to_string()
    }

    pub fn write_to<W: Write>(&self, w: &mut W, document: &SessionDescription) -> fmt::Result {
        let eol = self.eol;
        write!(w, "v={}{}", document.version, eol)?;
        write!(w, "o={}{}", document.origin, eol)?;
        if let Some(name) = &document.session_name {
            write!(w, "s={}{}", name, eol)?;
        }
        if let Some(info) = &document.session_information {
            write!(w, "i={}{}", info, eol)?;
        }
        if let Some(uri) = &document.uri {
            write!(w, "u={}{}", uri, eol)?;
        }
        document
            .emails
            .iter()
            .try_for_each(|item| write!(w, "e={}{}", item, eol))?;
        document
            .phones
            .iter()
            .try_for_each(|item| write!(w, "p={}{}", item, eol))?;
        if let Some(connection) = &document.connection {
            write!(w, "c={}{}", connection, eol)?;
        }
        document
            .bandwidths
            .iter()
            .try_for_each(|item| write!(w, "b={}{}", item, eol))?;
        document
            .time_information
            .iter()
            .try_for_each(|item| self.write_time(w, item))?;
        if let Some(key) = &document.key {
            write!(w, "k={}{}", key, eol)?;
        }
        self.write_attributes(w, &document.attributes.to_attributes())?;
        document
            .media_descriptions
            .iter()
            .try_for_each(|item| self.write_media(w, item))
    }

    fn write_time<W: Write>(&self, w: &mut W, time: &SDPTimeInformation) -> fmt::Result {
        let eol = self.eol;
        write!(w, "t={} {}{}", time.start_time, time.stop_time, eol)?;
        time.repeat_times
            .iter()
            .try_for_each(|item| write!(w, "r={}{}", item, eol))?;
        if let Some(zone) = time.zone_adjustments_text() {
            write!(w, "z={}{}", zone, eol)?;
        }
        Ok(())
    }

    fn write_media<W: Write>(&self, w: &mut W, media: &SDPMediaDescription) -> fmt::Result {
        let eol = self.eol;
        write!(w, "m={}{}", media.media_line, eol)?;
        if let Some(title) = &media.media_title {
            write!(w, "i={}{}", title, eol)?;
        }
        media
            .connections
            .iter()
            .try_for_each(|item| write!(w, "c={}{}", item, eol))?;
        media
            .bandwidths
            .iter()
            .try_for_each(|item| write!(w, "b={}{}", item, eol))?;
        if let Some(key) = &media.key {
            write!(w, "k={}{}", key, eol)?;
        }
        self.write_attributes(w, &media.attributes.to_attributes())
    }

    fn write_attributes<W: Write>(&self, w: &mut W, attributes: &[SDPAttribute]) -> fmt::Result {
        attributes
            .iter()
            .try_for_each(|item| write!(w, "a={}{}", item, self.eol))
    }
}
