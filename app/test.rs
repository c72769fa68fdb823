mod tests {
    use sdp_grammar::{CRLF, LF};

    use crate::{
        config::{AppConfig, Logger, Output},
        util::{OutputFormat, parse_eol, parse_log_level, parse_output_format},
    };

    fn config(level: &str, eol: &str, format: &str) -> AppConfig {
        AppConfig {
            logger: Logger {
                level: level.to_owned(),
            },
            output: Output {
                eol: eol.to_owned(),
                format: format.to_owned(),
            },
        }
    }

    #[test]
    fn test_parse_settings() {
        assert_eq!(parse_log_level("DEBUG").ok(), Some(tracing::Level::DEBUG));
        assert!(parse_log_level("verbose").is_err());
        assert_eq!(parse_eol("crlf").ok(), Some(CRLF));
        assert_eq!(parse_eol("LF").ok(), Some(LF));
        assert!(parse_eol("cr").is_err());
        assert_eq!(parse_output_format("json").ok(), Some(OutputFormat::Json));
        assert!(parse_output_format("xml").is_err());
    }

    #[test]
    fn test_validate() {
        assert!(config("info", "crlf", "sdp").validate().is_ok());
        assert!(config("info", "crlf", "yaml").validate().is_err());
        assert!(config("loud", "lf", "sdp").validate().is_err());
        assert_eq!(config("info", "lf", "json").eol().ok(), Some(LF));
    }
}
