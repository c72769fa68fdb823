pub mod attributes;
pub mod builder;
pub mod errors;
pub mod grammar;
pub mod reader;
pub mod record;
pub mod session;
pub mod writer;

pub use errors::{SDPError, SDPResult};
pub use session::SessionDescription;

pub const CRLF: &str = "\r\n";
pub const LF: &str = "\n";

/// Parses a whole session description, any grammar violation fails the parse.
pub fn parse(text: &str) -> SDPResult<SessionDescription> {
    reader::SessionDescriptionReader::new().read_from(text)
}

/// Prints `document` with `eol` after every line, CRLF when `eol` is `None`.
pub fn print(document: &SessionDescription, eol: Option<&str>) -> String {
    writer::SessionDescriptionWriter::new(eol.unwrap_or(CRLF)).write(document)
}
