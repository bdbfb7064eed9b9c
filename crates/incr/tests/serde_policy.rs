use incr::Overflow;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Settings {
    overflow: Overflow,
}

#[test]
fn test_policy_serializes_lowercase() {
    let settings = Settings {
        overflow: Overflow::Saturating,
    };
    let text = toml::to_string(&settings).expect("Failed to serialize");
    assert_eq!(text, "overflow = \"saturating\"\n");
}

#[test]
fn test_policy_deserializes_lowercase() {
    let settings: Settings = toml::from_str("overflow = \"wrapping\"").expect("Failed to parse");
    assert_eq!(
        settings,
        Settings {
            overflow: Overflow::Wrapping
        }
    );
}

#[test]
fn test_unknown_policy_is_rejected() {
    assert!(toml::from_str::<Settings>("overflow = \"modular\"").is_err());
}
