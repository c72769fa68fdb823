mod tests {
    use crate::{
        attributes::{
            AttributeLine, SDPAttribute, SDPTrivialAttribute,
            candidate::{Candidate, CandidateType},
            extmap::Extmap,
            fmtp::{FmtpFormat, FormatParameters},
            group::Group,
            identity::Identity,
            media_attributes::MediaAttributes,
            media_direction::MediaDirection,
            msid::MsidSemantic,
            rid::{Rid, RidDirection, RidParam},
            rtcp::Rtcp,
            rtcp_fb::{RtcpFeedback, RtcpFeedbackTarget},
            session_attributes::SessionAttributes,
            setup::SetupRole,
            ssrc::SsrcGroup,
        },
        errors::{SDPError, SDPResult},
        session::{SDPAddrType, SDPNetType},
    };

    fn media_attribute(text: &str) -> SDPResult<SDPAttribute> {
        let line = AttributeLine::parse(text, 1)?;
        SDPAttribute::read_media(&line)
    }

    fn session_attribute(text: &str) -> SDPResult<SDPAttribute> {
        let line = AttributeLine::parse(text, 1)?;
        SDPAttribute::read_session(&line)
    }

    fn media_attributes(lines: &[&str]) -> SDPResult<MediaAttributes> {
        let mut attributes = MediaAttributes::default();
        for (idx, text) in lines.iter().enumerate() {
            attributes.read(&AttributeLine::parse(text, idx + 1)?)?;
        }
        Ok(attributes)
    }

    #[test]
    fn test_attribute_line_split() -> SDPResult<()> {
        let line = AttributeLine::parse("rtpmap:111 opus/48000/2", 7)?;
        assert_eq!(line.field, "rtpmap");
        assert_eq!(line.value, Some("111 opus/48000/2"));
        assert_eq!(line.line, 7);
        assert_eq!(line.to_string(), "a=rtpmap:111 opus/48000/2");

        let flag = AttributeLine::parse("rtcp-mux", 1)?;
        assert_eq!(flag.value, None);

        assert!(matches!(
            AttributeLine::parse("foo:", 3),
            Err(SDPError::RecordSyntax {
                record_type: 'a',
                line: 3,
                column: 4,
                ..
            })
        ));
        assert!(AttributeLine::parse(":value", 1).is_err());
        Ok(())
    }

    #[test]
    fn test_unknown_attribute_kept() -> SDPResult<()> {
        let attribute = media_attribute("foo:bar baz")?;
        assert_eq!(
            attribute,
            SDPAttribute::Trivial(SDPTrivialAttribute {
                name: "foo".to_owned(),
                value: Some("bar baz".to_owned()),
            })
        );
        assert_eq!(attribute.to_string(), "foo:bar baz");

        let flag = session_attribute("x-google-flag")?;
        assert_eq!(flag.to_string(), "x-google-flag");
        Ok(())
    }

    #[test]
    fn test_ice_attributes() -> SDPResult<()> {
        assert_eq!(
            session_attribute("ice-ufrag:F7gI")?,
            SDPAttribute::IceUfrag("F7gI".to_owned())
        );
        assert_eq!(
            media_attribute("ice-pwd:x9cml/YzichV2+XlhiMu8g")?,
            SDPAttribute::IcePwd("x9cml/YzichV2+XlhiMu8g".to_owned())
        );
        assert_eq!(
            session_attribute("ice-options:trickle renomination")?,
            SDPAttribute::IceOptions(vec!["trickle".to_owned(), "renomination".to_owned()])
        );
        assert_eq!(session_attribute("ice-lite")?, SDPAttribute::IceLite);
        Ok(())
    }

    #[test]
    fn test_ice_ufrag_too_short() {
        let err = media_attribute("ice-ufrag:ab").unwrap_err();
        match err {
            SDPError::InvalidAttribute {
                field,
                value,
                line,
                column,
                ..
            } => {
                assert_eq!(field, "ice-ufrag");
                assert_eq!(value.as_deref(), Some("ab"));
                assert_eq!(line, 1);
                assert_eq!(column, 0);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(media_attribute("ice-pwd:tooshort").is_err());
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(media_attribute("mid:0 1").is_err());
        assert!(media_attribute("sctp-port:5000x").is_err());
        assert!(media_attribute("setup:actpass2").is_err());
        assert!(media_attribute("rtcp-mux:1").is_err());
    }

    #[test]
    fn test_candidate() -> SDPResult<()> {
        let candidate: Candidate = "1467250027 1 udp 2122260223 192.168.0.196 46243 typ host generation 0"
            .parse()?;
        assert_eq!(candidate.foundation, "1467250027");
        assert_eq!(candidate.component, 1);
        assert_eq!(candidate.transport, "udp");
        assert_eq!(candidate.priority, 2122260223);
        assert_eq!(candidate.address, "192.168.0.196");
        assert_eq!(candidate.port, 46243);
        assert_eq!(candidate.candidate_type, CandidateType::Host);
        assert_eq!(candidate.extensions.len(), 1);
        assert_eq!(candidate.extensions[0].name, "generation");
        assert_eq!(candidate.extensions[0].value, "0");

        let text = "842163049 1 udp 1677729535 203.0.113.7 36512 typ srflx raddr 10.0.0.2 rport 46243 generation 0 network-cost 999";
        let candidate: Candidate = text.parse()?;
        assert_eq!(candidate.candidate_type, CandidateType::Srflx);
        assert_eq!(candidate.related_address.as_deref(), Some("10.0.0.2"));
        assert_eq!(candidate.related_port, Some(46243));
        assert_eq!(candidate.extensions.len(), 2);
        assert_eq!(candidate.to_string(), text);

        assert!("1 1 udp 1 1.1.1.1 9 host".parse::<Candidate>().is_err());
        assert!("1 123456 udp 1 1.1.1.1 9 typ host".parse::<Candidate>().is_err());
        Ok(())
    }

    #[test]
    fn test_remote_candidates() -> SDPResult<()> {
        let attribute = media_attribute("remote-candidates:1 192.0.2.3 45664 2 192.0.2.3 45665")?;
        let SDPAttribute::RemoteCandidates(list) = &attribute else {
            panic!("unexpected attribute: {:?}", attribute);
        };
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].component, 2);
        assert_eq!(list[1].port, 45665);
        assert_eq!(
            attribute.to_string(),
            "remote-candidates:1 192.0.2.3 45664 2 192.0.2.3 45665"
        );
        Ok(())
    }

    #[test]
    fn test_rtpmap_fmtp() -> SDPResult<()> {
        let SDPAttribute::RtpMap(pt, rtp_map) = media_attribute("rtpmap:111 opus/48000/2")? else {
            panic!("not a rtpmap");
        };
        assert_eq!(pt, 111);
        assert_eq!(rtp_map.encoding_name, "opus");
        assert_eq!(rtp_map.clock_rate, 48000);
        assert_eq!(rtp_map.encoding_params, Some(2));
        assert!(media_attribute("rtpmap:300 opus/48000").is_err());

        let SDPAttribute::Fmtp(pt, fmtp) =
            media_attribute("fmtp:111 minptime=10;useinbandfec=1; sprop=a=b")?
        else {
            panic!("not a fmtp");
        };
        assert_eq!(pt, FmtpFormat::Payload(111));
        assert_eq!(fmtp.parameters.len(), 3);
        assert_eq!(
            fmtp.get("useinbandfec").and_then(|p| p.value.as_deref()),
            Some("1")
        );
        assert_eq!(fmtp.get("sprop").and_then(|p| p.value.as_deref()), Some("a=b"));

        let SDPAttribute::Fmtp(_, bare) = media_attribute("fmtp:101 0-15")? else {
            panic!("not a fmtp");
        };
        assert_eq!(bare.parameters[0].key, "0-15");
        assert_eq!(bare.parameters[0].value, None);
        assert_eq!(bare.to_string(), "0-15");
        Ok(())
    }

    #[test]
    fn test_fmtp_token_format() -> SDPResult<()> {
        let attribute = media_attribute("fmtp:webrtc-datachannel max-message-size=1")?;
        let SDPAttribute::Fmtp(format, fmtp) = &attribute else {
            panic!("not a fmtp: {:?}", attribute);
        };
        assert_eq!(format, &FmtpFormat::Token("webrtc-datachannel".to_owned()));
        assert_eq!(
            fmtp.get("max-message-size").and_then(|p| p.value.as_deref()),
            Some("1")
        );
        assert_eq!(
            attribute.to_string(),
            "fmtp:webrtc-datachannel max-message-size=1"
        );

        let SDPAttribute::Fmtp(padded, _) = media_attribute("fmtp:08 a=1")? else {
            panic!("not a fmtp");
        };
        assert_eq!(padded, FmtpFormat::Token("08".to_owned()));

        let attributes = media_attributes(&[
            "fmtp:webrtc-datachannel max-message-size=1",
            "rtpmap:8 PCMA/8000",
            "fmtp:8 someparam=1",
        ])?;
        assert_eq!(attributes.payloads.len(), 1);
        assert_eq!(attributes.token_fmtps.len(), 1);
        assert_eq!(attributes.token_fmtps[0].format, "webrtc-datachannel");
        let printed: Vec<String> = attributes
            .to_attributes()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            printed,
            vec![
                "rtpmap:8 PCMA/8000",
                "fmtp:8 someparam=1",
                "fmtp:webrtc-datachannel max-message-size=1",
            ]
        );
        assert!(media_attribute("fmtp:webrtc-datachannel").is_err());
        Ok(())
    }

    #[test]
    fn test_format_parameters_set() {
        let mut fmtp = FormatParameters::default();
        fmtp.set("profile-level-id", Some("42e01f".to_owned()));
        fmtp.set("packetization-mode", Some("1".to_owned()));
        fmtp.set("profile-level-id", Some("640c1f".to_owned()));
        assert_eq!(fmtp.to_string(), "profile-level-id=640c1f;packetization-mode=1");
    }

    #[test]
    fn test_rtcp_fb() -> SDPResult<()> {
        assert_eq!(
            media_attribute("rtcp-fb:96 nack pli")?,
            SDPAttribute::RtcpFeedback(
                RtcpFeedbackTarget::Payload(96),
                RtcpFeedback::Nack {
                    parameter: Some("pli".to_owned()),
                    additional: None,
                }
            )
        );
        let trr_int = media_attribute("rtcp-fb:* trr-int 100")?;
        assert_eq!(
            trr_int,
            SDPAttribute::RtcpFeedback(
                RtcpFeedbackTarget::Wildcard,
                RtcpFeedback::TrrInt { interval: 100 }
            )
        );
        assert_eq!(trr_int.to_string(), "rtcp-fb:* trr-int 100");

        let other = media_attribute("rtcp-fb:96 ccm fir extra")?;
        assert_eq!(other.to_string(), "rtcp-fb:96 ccm fir extra");
        assert!(media_attribute("rtcp-fb:* trr-int").is_err());
        Ok(())
    }

    #[test]
    fn test_payload_correlation() -> SDPResult<()> {
        let attributes = media_attributes(&[
            "rtcp-fb:8 nack pli",
            "rtpmap:0 PCMU/8000",
            "fmtp:8 someparam=1",
            "rtpmap:8 PCMA/8000",
            "rtcp-fb:8 nack",
            "rtcp-fb:* transport-cc",
        ])?;
        assert_eq!(attributes.payloads.len(), 2);
        assert_eq!(attributes.payloads[0].payload_type, 8);
        assert_eq!(attributes.payloads[1].payload_type, 0);

        let pcma = attributes.payload(8).expect("payload 8");
        assert_eq!(
            pcma.rtp_map.as_ref().map(|m| m.encoding_name.as_str()),
            Some("PCMA")
        );
        assert_eq!(
            pcma.fmtp
                .as_ref()
                .and_then(|fmtp| fmtp.get("someparam"))
                .and_then(|p| p.value.as_deref()),
            Some("1")
        );
        assert_eq!(pcma.rtcp_feedbacks.len(), 2);
        assert_eq!(attributes.rtcp_feedback_wildcards.len(), 1);

        let printed: Vec<String> = attributes
            .to_attributes()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            printed,
            vec![
                "rtcp-fb:* transport-cc",
                "rtpmap:8 PCMA/8000",
                "fmtp:8 someparam=1",
                "rtcp-fb:8 nack pli",
                "rtcp-fb:8 nack",
                "rtpmap:0 PCMU/8000",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_ssrc_correlation() -> SDPResult<()> {
        let attributes = media_attributes(&[
            "ssrc-group:FID 1111 2222",
            "ssrc:1111 cname:user@host",
            "ssrc:2222 cname:user@host",
            "ssrc:1111 msid:stream track",
            "ssrc:1111 cname:other",
            "ssrc:1111 label",
        ])?;
        assert_eq!(attributes.ssrc_groups[0].ssrc_ids, vec![1111, 2222]);
        assert_eq!(attributes.ssrcs.len(), 2);
        assert_eq!(attributes.ssrcs[0].ssrc_id, 1111);

        let first = attributes.ssrc(1111).expect("ssrc 1111");
        assert_eq!(first.attributes.len(), 3);
        assert_eq!(
            first.get("cname").and_then(|a| a.value.as_deref()),
            Some("other")
        );
        assert_eq!(
            first.get("msid").and_then(|a| a.value.as_deref()),
            Some("stream track")
        );
        assert_eq!(first.get("label").map(|a| a.value.is_none()), Some(true));

        let group: SsrcGroup = "SIM 1 2 3".parse()?;
        assert_eq!(group.to_string(), "SIM 1 2 3");
        Ok(())
    }

    #[test]
    fn test_single_occurrence() {
        let err = media_attributes(&["ptime:20", "ptime:30"]).unwrap_err();
        assert!(matches!(
            err,
            SDPError::InvalidAttribute { line: 2, column: 0, .. }
        ));
        assert!(media_attributes(&["sendrecv", "recvonly"]).is_err());
        assert!(media_attributes(&["rtcp-mux", "rtcp-mux"]).is_err());

        let mut session = SessionAttributes::default();
        let line = AttributeLine::parse("ice-lite", 1).unwrap();
        session.read(&line).unwrap();
        assert!(session.read(&line).is_err());
    }

    #[test]
    fn test_media_flags_and_scalars() -> SDPResult<()> {
        let attributes = media_attributes(&[
            "rtcp:9 IN IP4 0.0.0.0",
            "end-of-candidates",
            "mid:audio",
            "ptime:20",
            "maxptime:40.5",
            "sendonly",
            "rtcp-mux",
            "rtcp-rsize",
            "sctp-port:5000",
            "max-message-size:262144",
        ])?;
        assert_eq!(
            attributes.rtcp,
            Some(Rtcp {
                port: 9,
                address: Some(crate::attributes::rtcp::RtcpAddress {
                    net_type: SDPNetType::IN,
                    addr_type: SDPAddrType::IP4,
                    address: "0.0.0.0".to_owned(),
                }),
            })
        );
        assert!(attributes.end_of_candidates);
        assert_eq!(attributes.mid.as_deref(), Some("audio"));
        assert_eq!(attributes.ptime, Some(20.0));
        assert_eq!(attributes.max_ptime, Some(40.5));
        assert_eq!(attributes.direction, Some(MediaDirection::SendOnly));
        assert!(attributes.rtcp_mux);
        assert!(!attributes.rtcp_mux_only);
        assert!(attributes.rtcp_rsize);
        assert_eq!(attributes.sctp_port, Some(5000));
        assert_eq!(attributes.max_message_size, Some(262144));

        assert!(media_attribute("ptime:0").is_err());
        assert_eq!("5000".parse::<Rtcp>()?.address, None);
        Ok(())
    }

    #[test]
    fn test_group_and_msid_semantic() -> SDPResult<()> {
        let group: Group = "BUNDLE 0 1 data".parse()?;
        assert_eq!(group.semantic, "BUNDLE");
        assert_eq!(group.identification_tags, vec!["0", "1", "data"]);
        assert_eq!(group.to_string(), "BUNDLE 0 1 data");

        let SDPAttribute::MsidSemantic(semantic) = session_attribute("msid-semantic: WMS *")? else {
            panic!("not a msid-semantic");
        };
        assert_eq!(
            semantic,
            MsidSemantic {
                semantic: "WMS".to_owned(),
                identifiers: Vec::new(),
                apply_for_all: true,
            }
        );

        let SDPAttribute::MsidSemantic(semantic) =
            session_attribute("msid-semantic:WMS stream-a stream-b")?
        else {
            panic!("not a msid-semantic");
        };
        assert_eq!(semantic.identifiers, vec!["stream-a", "stream-b"]);
        assert_eq!(semantic.to_string(), "WMS stream-a stream-b");
        Ok(())
    }

    #[test]
    fn test_fingerprint_setup_identity() -> SDPResult<()> {
        let attribute = session_attribute(
            "fingerprint:sha-256 19:E2:1C:3B:4B:9F:81:E6:B8:5C:F4:A5:A8:D8:73:04:BB:05:2F:70:9F:04:A9:0E:05:E9:26:33:E8:70:88:A2",
        )?;
        let SDPAttribute::Fingerprint(fingerprint) = attribute else {
            panic!("not a fingerprint");
        };
        assert_eq!(fingerprint.hash_function, "sha-256");

        assert_eq!("actpass".parse::<SetupRole>()?, SetupRole::ActPass);
        assert!("server".parse::<SetupRole>().is_err());

        let identity: Identity = "eyJpZHAiOnt9fQ== a=b c".parse()?;
        assert_eq!(identity.assertion, "eyJpZHAiOnt9fQ==");
        assert_eq!(identity.extensions.len(), 2);
        assert_eq!(identity.extensions[1].value, None);
        assert_eq!(identity.to_string(), "eyJpZHAiOnt9fQ== a=b c");

        assert_eq!(
            session_attribute("tls-id:abc+/123")?,
            SDPAttribute::TlsId("abc+/123".to_owned())
        );
        Ok(())
    }

    #[test]
    fn test_media_direction() -> SDPResult<()> {
        let SDPAttribute::Direction(direction) = media_attribute("recvonly")? else {
            panic!("not a direction");
        };
        assert_eq!(direction, MediaDirection::RecvOnly);
        assert!(direction.receives());
        assert!(!direction.sends());
        assert_eq!(direction.reversed(), MediaDirection::SendOnly);
        assert_eq!(MediaDirection::Inactive.reversed(), MediaDirection::Inactive);
        assert!(!MediaDirection::Inactive.sends());
        assert!(MediaDirection::default().sends());
        assert!("sideways".parse::<MediaDirection>().is_err());
        assert!(media_attribute("sendonly:1").is_err());
        Ok(())
    }

    #[test]
    fn test_extmap() -> SDPResult<()> {
        let extmap: Extmap = "1 urn:ietf:params:rtp-hdrext:ssrc-audio-level".parse()?;
        assert_eq!(extmap.entry, 1);
        assert_eq!(extmap.direction, None);

        let text = "3/recvonly urn:ietf:params:rtp-hdrext:encrypt urn:ietf:params:rtp-hdrext:smpte-tc 25@600/24";
        let extmap: Extmap = text.parse()?;
        assert_eq!(extmap.entry, 3);
        assert_eq!(extmap.direction, Some(MediaDirection::RecvOnly));
        assert_eq!(
            extmap.extension_attributes.as_deref(),
            Some("urn:ietf:params:rtp-hdrext:smpte-tc 25@600/24")
        );
        assert_eq!(extmap.to_string(), text);

        assert!("1/sideways urn:x".parse::<Extmap>().is_err());
        assert!("123456 urn:x".parse::<Extmap>().is_err());
        Ok(())
    }

    #[test]
    fn test_rid() -> SDPResult<()> {
        let rid: Rid = "hi send pt=96,97;max-width=1280;max-height=720".parse()?;
        assert_eq!(rid.id, "hi");
        assert_eq!(rid.direction, RidDirection::Send);
        assert_eq!(
            rid.payloads,
            Some(vec!["96".to_owned(), "97".to_owned()])
        );
        assert_eq!(
            rid.params,
            vec![
                RidParam::MaxWidth(Some("1280".to_owned())),
                RidParam::MaxHeight(Some("720".to_owned())),
            ]
        );
        assert_eq!(rid.to_string(), "hi send pt=96,97;max-width=1280;max-height=720");

        let rid: Rid = "lo recv depend=hi,mid;x-custom=7;x-flag".parse()?;
        assert_eq!(rid.payloads, None);
        assert_eq!(
            rid.params,
            vec![
                RidParam::Depend(vec!["hi".to_owned(), "mid".to_owned()]),
                RidParam::Other {
                    param_type: "x-custom".to_owned(),
                    value: Some("7".to_owned()),
                },
                RidParam::Other {
                    param_type: "x-flag".to_owned(),
                    value: None,
                },
            ]
        );
        assert_eq!(rid.to_string(), "lo recv depend=hi,mid;x-custom=7;x-flag");

        assert_eq!("r0 send".parse::<Rid>()?.params, Vec::new());
        assert!("r0 both".parse::<Rid>().is_err());
        Ok(())
    }

    #[test]
    fn test_rid_space_after_payloads() -> SDPResult<()> {
        let attribute = media_attribute("rid:1 send pt=96 max-width=10")?;
        let SDPAttribute::Rid(rid) = &attribute else {
            panic!("not a rid: {:?}", attribute);
        };
        assert_eq!(rid.payloads, Some(vec!["96".to_owned()]));
        assert_eq!(rid.params, vec![RidParam::MaxWidth(Some("10".to_owned()))]);
        assert_eq!(attribute.to_string(), "rid:1 send pt=96;max-width=10");

        let rid: Rid = "2 recv pt=97 height-width=720;max-fps=30".parse()?;
        assert_eq!(
            rid.params,
            vec![
                RidParam::HeightWidth(Some("720".to_owned())),
                RidParam::MaxFps(Some("30".to_owned())),
            ]
        );
        assert_eq!(rid.to_string(), "2 recv pt=97;height-width=720;max-fps=30");
        assert!("3 send pt=96 ".parse::<Rid>().is_err());
        Ok(())
    }

    #[test]
    fn test_session_attributes_print_order() -> SDPResult<()> {
        let mut attributes = SessionAttributes::default();
        for (idx, text) in [
            "foo:bar",
            "extmap:1 urn:x",
            "setup:actpass",
            "group:BUNDLE 0",
            "ice-ufrag:abcd",
        ]
        .iter()
        .enumerate()
        {
            attributes.read(&AttributeLine::parse(text, idx + 1)?)?;
        }
        let printed: Vec<String> = attributes
            .to_attributes()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            printed,
            vec![
                "group:BUNDLE 0",
                "ice-ufrag:abcd",
                "setup:actpass",
                "extmap:1 urn:x",
                "foo:bar",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_media_only_attribute_at_session_level() -> SDPResult<()> {
        let mut attributes = SessionAttributes::default();
        attributes.read(&AttributeLine::parse("sendrecv", 1)?)?;
        attributes.read(&AttributeLine::parse("candidate:0 1 UDP 1 1.1.1.1 9 typ host", 2)?)?;
        assert_eq!(attributes.unrecognized.len(), 2);
        assert_eq!(attributes.unrecognized[0].name, "sendrecv");
        assert_eq!(attributes.unrecognized[1].name, "candidate");
        assert_eq!(
            attributes.unrecognized[1].value.as_deref(),
            Some("0 1 UDP 1 1.1.1.1 9 typ host")
        );
        Ok(())
    }
}
