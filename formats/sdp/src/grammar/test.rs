mod tests {
    use crate::{
        errors::SDPError,
        grammar::{
            Cursor,
            chars::{is_byte_string_char, is_ice_char, is_token_char},
            rules,
        },
    };

    fn full(rule: impl Fn(&[u8], usize) -> Option<usize>, text: &str) -> bool {
        rule(text.as_bytes(), 0) == Some(text.len())
    }

    #[test]
    fn test_char_classes() {
        assert!(is_token_char(b'!'));
        assert!(!is_token_char(b'"'));
        assert!(!is_token_char(b':'));
        assert!(is_token_char(b'~'));
        assert!(is_ice_char(b'+'));
        assert!(!is_ice_char(b'='));
        assert!(is_byte_string_char(0x01));
        assert!(is_byte_string_char(b'\t'));
        assert!(!is_byte_string_char(b'\n'));
        assert!(!is_byte_string_char(b'\r'));
        assert!(is_byte_string_char(0xff));
    }

    #[test]
    fn test_one_or_more_rejects_empty_run() {
        assert_eq!(rules::one_or_more(b"abc", 0, |c| c == b'a'), Some(1));
        assert_eq!(rules::one_or_more(b"abc", 0, |c| c == b'x'), None);
        assert_eq!(rules::one_or_more(b"abc", 3, |_| true), None);
    }

    #[test]
    fn test_numeric_rules() {
        assert!(full(rules::integer, "10"));
        assert_eq!(rules::integer(b"01", 0), None);
        assert!(full(rules::zero_based_integer, "0"));
        assert!(full(rules::decimal_uchar, "255"));
        assert_eq!(rules::decimal_uchar(b"256", 0), None);
        assert_eq!(rules::decimal_uchar(b"1234", 0), Some(3));
        assert!(full(rules::ttl, "0"));
        assert!(full(rules::ttl, "127"));
        assert_eq!(rules::ttl(b"05", 0), Some(1));
        assert!(full(rules::ttl, "255"));
        assert_eq!(rules::ttl(b"256", 0), None);
        assert_eq!(rules::ttl(b"999", 0), None);
    }

    #[test]
    fn test_time_needs_ten_digits() {
        assert!(full(rules::time, "0"));
        assert!(full(rules::time, "3034423619"));
        assert_eq!(rules::time(b"303442361", 0), None);
        assert_eq!(rules::time(b"0123456789", 0), Some(1));
    }

    #[test]
    fn test_typed_time() {
        assert!(full(rules::typed_time, "7d"));
        assert!(!full(rules::typed_time, "-0"));
        assert_eq!(rules::typed_time(b"25hx", 0), Some(3));
        assert!(full(rules::repeat_interval, "604800"));
        assert_eq!(rules::repeat_interval(b"0", 0), None);
    }

    #[test]
    fn test_ip4_address() {
        assert!(full(rules::ip4_address, "192.168.0.1"));
        assert!(full(rules::ip4_address, "0.0.0.0"));
        assert_eq!(rules::ip4_address(b"192.168.0", 0), None);
        assert_eq!(rules::ip4_address(b"300.1.1.1", 0), None);
    }

    #[test]
    fn test_ip6_address() {
        assert!(full(rules::ip6_address, "::1"));
        assert!(full(rules::ip6_address, "fe80::1ff:fe23:4567:890a"));
        assert!(full(rules::ip6_address, "2001:db8:0:0:0:0:2:1"));
        assert!(full(rules::ip6_address, "::ffff:192.168.0.1"));
        assert!(full(rules::ip6_address, "::"));
        assert_eq!(rules::ip6_address(b"zz::1", 0), None);
    }

    #[test]
    fn test_multicast_address() {
        assert!(full(|b, p| rules::multicast_address(b, p, "IP4"), "224.2.36.42/127"));
        assert!(full(|b, p| rules::multicast_address(b, p, "IP4"), "224.2.1.1/127/3"));
        assert_eq!(rules::ip4_multicast(b"192.168.0.1/127", 0), None);
        assert_eq!(rules::ip4_multicast(b"224.2.36.42", 0), None);
        assert_eq!(rules::ip4_multicast(b"224.2.1.1/999", 0), None);
        assert!(full(|b, p| rules::multicast_address(b, p, "IP6"), "ff15::101/3"));
        assert!(full(|b, p| rules::multicast_address(b, p, "XY"), "media.example.com"));
    }

    #[test]
    fn test_strict_unicast_address() {
        assert!(full(|b, p| rules::strict_unicast_address(b, p, "IP4"), "10.47.16.5"));
        assert!(full(|b, p| rules::strict_unicast_address(b, p, "IP6"), "2001:db8::1"));
        assert!(full(rules::fqdn, "host.example.com"));
        assert_eq!(rules::fqdn(b"a.b", 0), None);
        assert!(full(rules::extn_addr, "[weird]addr"));
    }

    #[test]
    fn test_simplified_address_accepts_until_space() {
        assert_eq!(rules::address(b"999.999.1.1 x", 0), Some(11));
        assert_eq!(rules::address(b" x", 0), None);
    }

    #[test]
    fn test_cursor_keeps_position_on_failure() {
        let mut cursor = Cursor::new("abc 123");
        assert_eq!(cursor.one_or_more(is_token_char, "token").unwrap(), "abc");
        assert!(cursor.literal("x").is_err());
        assert_eq!(cursor.position(), 3);
        cursor.space().unwrap();
        let value: u32 = cursor.number("number").unwrap();
        assert_eq!(value, 123);
        assert!(cursor.expect_end().is_ok());
    }

    #[test]
    fn test_cursor_bounded() {
        let mut cursor = Cursor::new("ab");
        assert!(cursor.bounded(is_ice_char, 4, 256, "ice-ufrag").is_err());
        assert_eq!(cursor.position(), 0);
        let mut cursor = Cursor::new("abcd");
        assert_eq!(cursor.bounded(is_ice_char, 4, 256, "ice-ufrag").unwrap(), "abcd");
    }

    #[test]
    fn test_cursor_number_overflow() {
        let mut cursor = Cursor::new("256");
        let result: Result<u8, _> = cursor.number("payload type");
        assert!(matches!(result, Err(SDPError::IntegerOverflow(_))));
    }

    #[test]
    fn test_cursor_till_and_rest() {
        let mut cursor = Cursor::new("key=value=more;next");
        assert_eq!(cursor.till(b'='), "key");
        assert!(cursor.try_literal("="));
        assert_eq!(cursor.till(b';'), "value=more");
        assert!(cursor.try_literal(";"));
        assert_eq!(cursor.take_rest(), "next");
        assert!(cursor.is_at_end());
    }
}
