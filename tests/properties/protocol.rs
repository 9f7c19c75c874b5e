//! Property tests for the capture filename codec.

use proptest::prelude::*;

use locshot::models::ScreenshotName;
use locshot::protocol;

fn test_code() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9.]{3}").unwrap()
}

fn body() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{0,40}").unwrap()
}

fn locale() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{2}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: encoding a valid field tuple and parsing it back recovers
    /// the exact same tuple.
    #[test]
    fn property_codec_round_trip(
        test_code in test_code(),
        kind in proptest::char::range('A', 'Z'),
        body in body(),
        locale in locale(),
        variant in proptest::char::range('0', '9'),
    ) {
        let shot = ScreenshotName { test_code, kind, body, locale, variant };
        let parsed = ScreenshotName::parse(&shot.encode()).unwrap();
        prop_assert_eq!(parsed, shot);
    }

    /// PROPERTY: any successfully parsed filename re-encodes to itself, so
    /// the codec is a bijection over conforming names.
    #[test]
    fn property_parse_then_encode_is_identity(
        s in "[ -~]{0,24}\\.png"
    ) {
        if let Ok(shot) = ScreenshotName::parse(&s) {
            prop_assert_eq!(shot.encode(), s);
        }
    }

    /// PROPERTY: parsing and key derivation never panic on arbitrary input.
    #[test]
    fn property_parse_never_panics(
        s in "(?s).{0,64}"
    ) {
        let _ = ScreenshotName::parse(&s);
        let _ = protocol::scenario_key(&s);
    }

    /// PROPERTY: the scenario key, when present, is always a suffix of the
    /// filename starting with '_'.
    #[test]
    fn property_scenario_key_is_underscore_suffix(
        s in "(?s).{0,64}"
    ) {
        if let Ok(key) = protocol::scenario_key(&s) {
            prop_assert!(key.starts_with('_'));
            prop_assert!(s.ends_with(key));
        }
    }
}
