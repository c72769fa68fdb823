//! RFC 8839 ICE session and media attributes.

use crate::{
    errors::SDPResult,
    grammar::{Cursor, chars::is_ice_char},
};

/// ice-ufrag-att = "ice-ufrag:" ufrag; ufrag = 4*256ice-char
pub(crate) fn read_ufrag(cursor: &mut Cursor<'_>) -> SDPResult<String> {
    Ok(cursor.bounded(is_ice_char, 4, 256, "ice-ufrag")?.to_owned())
}

/// ice-pwd-att = "ice-pwd:" password; password = 22*256ice-char
pub(crate) fn read_pwd(cursor: &mut Cursor<'_>) -> SDPResult<String> {
    Ok(cursor.bounded(is_ice_char, 22, 256, "ice-pwd")?.to_owned())
}

/// ice-options = "ice-options:" ice-option-tag *(SP ice-option-tag)
pub(crate) fn read_options(cursor: &mut Cursor<'_>) -> SDPResult<Vec<String>> {
    let mut options = Vec::new();
    loop {
        options.push(cursor.one_or_more(is_ice_char, "ice option tag")?.to_owned());
        if !cursor.try_space() || cursor.is_at_end() {
            break;
        }
    }
    Ok(options)
}
