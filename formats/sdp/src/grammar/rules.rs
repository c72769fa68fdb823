//! Consumption rules. Every rule takes the whole value and a start offset and
//! returns the offset right after the longest run matching the rule, or `None`
//! when the rule does not match there. Rules never read past the end of input.
//!
//! ; RFC 8866 9. SDP Grammar, address related productions
//! unicast-address = IP4-address / IP6-address / FQDN / extn-addr
//! multicast-address = IP4-multicast / IP6-multicast / FQDN / extn-addr
//! IP4-multicast = m1 3( "." decimal-uchar ) "/" ttl [ "/" numaddr ]
//! m1 = ("22" ("4"/"5"/"6"/"7"/"8"/"9")) / ("23" DIGIT )
//! IP6-multicast = IP6-address [ "/" numaddr ]
//! ttl = (POS-DIGIT *2DIGIT) / "0"
//! FQDN = 4*(alpha-numeric / "-" / ".")
//! IP4-address = b1 3("." decimal-uchar)
//! IP6-address = hexpart [ ":" IP4-address ]
//! hexpart = hexseq / hexseq "::" [ hexseq ] / "::" [ hexseq ]
//! hexseq = hex4 *( ":" hex4)
//! hex4 = 1*4HEXDIG
//! extn-addr = non-ws-string

use super::chars::{
    SP, is_alpha, is_digit, is_fixed_len_time_unit, is_hex_digit, is_non_ws_char, is_pos_digit,
    is_text_char, is_token_char,
};

#[inline]
fn at(bytes: &[u8], pos: usize) -> Option<u8> {
    bytes.get(pos).copied()
}

/// Longest run of bytes satisfying `pred`, at least one byte.
pub fn one_or_more(bytes: &[u8], pos: usize, pred: impl Fn(u8) -> bool) -> Option<usize> {
    let end = zero_or_more(bytes, pos, pred);
    (end > pos).then_some(end)
}

/// Longest run of bytes satisfying `pred`, possibly empty.
pub fn zero_or_more(bytes: &[u8], pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    let mut peek = pos;
    while at(bytes, peek).is_some_and(&pred) {
        peek += 1;
    }
    peek
}

/// Longest run of bytes satisfying `pred` whose length lies in `min..=max`.
pub fn bounded(
    bytes: &[u8],
    pos: usize,
    pred: impl Fn(u8) -> bool,
    min: usize,
    max: usize,
) -> Option<usize> {
    let end = zero_or_more(bytes, pos, pred);
    (min..=max).contains(&(end - pos)).then_some(end)
}

/// Everything up to (not including) `stop` or the end of input, possibly empty.
pub fn till(bytes: &[u8], pos: usize, stop: u8) -> usize {
    zero_or_more(bytes, pos, |c| c != stop)
}

pub fn space(bytes: &[u8], pos: usize) -> Option<usize> {
    (at(bytes, pos)? == SP).then_some(pos + 1)
}

pub fn literal(bytes: &[u8], pos: usize, lit: &str) -> Option<usize> {
    let end = pos.checked_add(lit.len())?;
    (bytes.get(pos..end)? == lit.as_bytes()).then_some(end)
}

pub fn text(bytes: &[u8], pos: usize) -> Option<usize> {
    one_or_more(bytes, pos, is_text_char)
}

pub fn token(bytes: &[u8], pos: usize) -> Option<usize> {
    one_or_more(bytes, pos, is_token_char)
}

pub fn digits(bytes: &[u8], pos: usize) -> Option<usize> {
    one_or_more(bytes, pos, is_digit)
}

/// integer = POS-DIGIT *DIGIT
pub fn integer(bytes: &[u8], pos: usize) -> Option<usize> {
    if !is_pos_digit(at(bytes, pos)?) {
        return None;
    }
    Some(zero_or_more(bytes, pos + 1, is_digit))
}

/// zero-based-integer = "0" / integer
pub fn zero_based_integer(bytes: &[u8], pos: usize) -> Option<usize> {
    if at(bytes, pos)? == b'0' {
        return Some(pos + 1);
    }
    integer(bytes, pos)
}

/// decimal-uchar, 0 to 255 without leading zeros.
pub fn decimal_uchar(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut end = pos;
    while end - pos < 3 && at(bytes, end).is_some_and(is_digit) {
        end += 1;
    }
    let run = bytes.get(pos..end)?;
    if run.is_empty() || (run.len() > 1 && run[0] == b'0') {
        return None;
    }
    let value = run
        .iter()
        .fold(0u32, |acc, c| acc * 10 + u32::from(c - b'0'));
    (value <= 255).then_some(end)
}

/// ttl = (POS-DIGIT *2DIGIT) / "0", bounded to 0-255.
pub fn ttl(bytes: &[u8], pos: usize) -> Option<usize> {
    let first = at(bytes, pos)?;
    if first == b'0' {
        return Some(pos + 1);
    }
    if !is_pos_digit(first) {
        return None;
    }
    decimal_uchar(bytes, pos)
}

/// time = POS-DIGIT 9*DIGIT, a bare "0" is accepted as well.
pub fn time(bytes: &[u8], pos: usize) -> Option<usize> {
    let first = at(bytes, pos)?;
    if first == b'0' {
        return Some(pos + 1);
    }
    if !is_pos_digit(first) {
        return None;
    }
    let end = zero_or_more(bytes, pos + 1, is_digit);
    (end - pos >= 10).then_some(end)
}

/// typed-time = 1*DIGIT [fixed-len-time-unit]
pub fn typed_time(bytes: &[u8], pos: usize) -> Option<usize> {
    let end = digits(bytes, pos)?;
    Some(unit_suffix(bytes, end))
}

/// repeat-interval = POS-DIGIT *DIGIT [fixed-len-time-unit]
pub fn repeat_interval(bytes: &[u8], pos: usize) -> Option<usize> {
    let end = integer(bytes, pos)?;
    Some(unit_suffix(bytes, end))
}

fn unit_suffix(bytes: &[u8], pos: usize) -> usize {
    match at(bytes, pos) {
        Some(c) if is_fixed_len_time_unit(c) => pos + 1,
        _ => pos,
    }
}

pub fn ip4_address(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut peek = decimal_uchar(bytes, pos)?;
    for _ in 0..3 {
        peek = literal(bytes, peek, ".")?;
        peek = decimal_uchar(bytes, peek)?;
    }
    Some(peek)
}

/// hex4 = 1*4HEXDIG
pub fn hex4(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut end = pos;
    while end - pos < 4 && at(bytes, end).is_some_and(is_hex_digit) {
        end += 1;
    }
    (end > pos).then_some(end)
}

/// hexseq = hex4 *( ":" hex4)
pub fn hexseq(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut peek = hex4(bytes, pos)?;
    while at(bytes, peek) == Some(b':') && at(bytes, peek + 1) != Some(b':') {
        match hex4(bytes, peek + 1) {
            Some(next) => peek = next,
            None => break,
        }
    }
    Some(peek)
}

/// hexpart = hexseq / hexseq "::" [ hexseq ] / "::" [ hexseq ]
pub fn hexpart(bytes: &[u8], pos: usize) -> Option<usize> {
    let peek = match literal(bytes, pos, "::") {
        Some(after) => return Some(hexseq(bytes, after).unwrap_or(after)),
        None => hexseq(bytes, pos)?,
    };
    match literal(bytes, peek, "::") {
        Some(after) => Some(hexseq(bytes, after).unwrap_or(after)),
        None => Some(peek),
    }
}

/// IP6-address = hexpart [ ":" IP4-address ]
pub fn ip6_address(bytes: &[u8], pos: usize) -> Option<usize> {
    let peek = hexpart(bytes, pos)?;
    // the trailing dotted quad may have been eaten as a hex group, back off to it
    let group_start = bytes
        .get(pos..peek)?
        .iter()
        .rposition(|c| *c == b':')
        .map(|idx| pos + idx + 1);
    if let (Some(start), Some(b'.')) = (group_start, at(bytes, peek)) {
        return ip4_address(bytes, start);
    }
    match at(bytes, peek) {
        Some(b':') => ip4_address(bytes, peek + 1).or(Some(peek)),
        _ => Some(peek),
    }
}

/// FQDN = 4*(alpha-numeric / "-" / ".")
pub fn fqdn(bytes: &[u8], pos: usize) -> Option<usize> {
    let end = zero_or_more(bytes, pos, |c| {
        is_alpha(c) || is_digit(c) || c == b'-' || c == b'.'
    });
    (end - pos >= 4).then_some(end)
}

/// extn-addr = non-ws-string
pub fn extn_addr(bytes: &[u8], pos: usize) -> Option<usize> {
    one_or_more(bytes, pos, is_non_ws_char)
}

/// IP4-multicast = m1 3( "." decimal-uchar ) "/" ttl [ "/" numaddr ]
pub fn ip4_multicast(bytes: &[u8], pos: usize) -> Option<usize> {
    let first_end = decimal_uchar(bytes, pos)?;
    let m1 = std::str::from_utf8(bytes.get(pos..first_end)?)
        .ok()?
        .parse::<u8>()
        .ok()?;
    if !(224..=239).contains(&m1) {
        return None;
    }
    let mut peek = first_end;
    for _ in 0..3 {
        peek = literal(bytes, peek, ".")?;
        peek = decimal_uchar(bytes, peek)?;
    }
    peek = literal(bytes, peek, "/")?;
    peek = ttl(bytes, peek)?;
    if at(bytes, peek) == Some(b'/') {
        peek = integer(bytes, peek + 1)?;
    }
    Some(peek)
}

/// IP6-multicast = IP6-address [ "/" numaddr ]
pub fn ip6_multicast(bytes: &[u8], pos: usize) -> Option<usize> {
    let peek = ip6_address(bytes, pos)?;
    if at(bytes, peek) == Some(b'/') {
        return integer(bytes, peek + 1);
    }
    Some(peek)
}

/// multicast-address, selected by the `addrtype` of the record.
pub fn multicast_address(bytes: &[u8], pos: usize, addr_type: &str) -> Option<usize> {
    match addr_type {
        "IP4" | "ip4" => ip4_multicast(bytes, pos),
        "IP6" | "ip6" => ip6_multicast(bytes, pos),
        _ => fqdn(bytes, pos).or_else(|| extn_addr(bytes, pos)),
    }
}

/// unicast-address, strict variant selected by the `addrtype` of the record.
pub fn strict_unicast_address(bytes: &[u8], pos: usize, addr_type: &str) -> Option<usize> {
    match addr_type {
        "IP4" | "ip4" => ip4_address(bytes, pos),
        "IP6" | "ip6" => ip6_address(bytes, pos),
        _ => fqdn(bytes, pos).or_else(|| extn_addr(bytes, pos)),
    }
}

/// Address as accepted on the parse path: any non-empty run up to the next space.
/// Malformed addresses are not rejected here.
pub fn address(bytes: &[u8], pos: usize) -> Option<usize> {
    let end = till(bytes, pos, SP);
    (end > pos).then_some(end)
}

/// port = 1*DIGIT
pub fn port(bytes: &[u8], pos: usize) -> Option<usize> {
    digits(bytes, pos)
}
