//! ABNF character classes used by the sdp grammars (RFC 5234 core rules,
//! RFC 8866 section 9, RFC 8839 ice-char, RFC 4572 / 8122 base64).

pub const SP: u8 = b' ';
pub const NUL: u8 = 0x00;
pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';

#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// POS-DIGIT = %x31-39
#[inline]
pub fn is_pos_digit(c: u8) -> bool {
    (b'1'..=b'9').contains(&c)
}

#[inline]
pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

#[inline]
pub fn is_hex_digit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

/// VCHAR = %x21-7E
#[inline]
pub fn is_vchar(c: u8) -> bool {
    (0x21..=0x7e).contains(&c)
}

/// non-ws-string = 1*(VCHAR/%x80-FF)
#[inline]
pub fn is_non_ws_char(c: u8) -> bool {
    is_vchar(c) || c >= 0x80
}

/// token-char = %x21 / %x23-27 / %x2A-2B / %x2D-2E / %x30-39 / %x41-5A / %x5E-7E
#[inline]
pub fn is_token_char(c: u8) -> bool {
    matches!(c, 0x21 | 0x23..=0x27 | 0x2a..=0x2b | 0x2d..=0x2e | 0x30..=0x39 | 0x41..=0x5a | 0x5e..=0x7e)
}

/// byte-string = 1*(%x01-09/%x0B-0C/%x0E-FF)
#[inline]
pub fn is_byte_string_char(c: u8) -> bool {
    matches!(c, 0x01..=0x09 | 0x0b..=0x0c | 0x0e..=0xff)
}

/// text = byte-string, anything but NUL, CR and LF
#[inline]
pub fn is_text_char(c: u8) -> bool {
    c != NUL && c != CR && c != LF
}

/// fixed-len-time-unit = %s"d" / %s"h" / %s"m" / %s"s"
#[inline]
pub fn is_fixed_len_time_unit(c: u8) -> bool {
    matches!(c, b'd' | b'h' | b'm' | b's')
}

/// ice-char = ALPHA / DIGIT / "+" / "/"
#[inline]
pub fn is_ice_char(c: u8) -> bool {
    is_alpha(c) || is_digit(c) || c == b'+' || c == b'/'
}

/// tls-id-char = ALPHA / DIGIT / "+" / "/" / "-" / "_"
#[inline]
pub fn is_tls_id_char(c: u8) -> bool {
    is_alpha(c) || is_digit(c) || matches!(c, b'+' | b'/' | b'-' | b'_')
}

/// base64-char = ALPHA / DIGIT / "+" / "/" / "="
#[inline]
pub fn is_base64_char(c: u8) -> bool {
    is_alpha(c) || is_digit(c) || matches!(c, b'+' | b'/' | b'=')
}

/// rid-id = 1*(alpha-numeric / "-" / "_")
#[inline]
pub fn is_rid_char(c: u8) -> bool {
    is_alpha(c) || is_digit(c) || c == b'-' || c == b'_'
}

/// msid-id / msid-appdata = 1*64token-char
#[inline]
pub fn is_msid_char(c: u8) -> bool {
    is_token_char(c)
}
