//! JSON line codec for the socket protocol.
//!
//! Every notification crosses the socket as a single JSON object
//! terminated by `\n`. Key order carries no meaning and unknown keys are
//! ignored, so either side can grow fields without breaking the other.

use crate::error::WireError;
use crate::types::Notification;

/// Encode one notification as a newline-terminated JSON line.
pub fn encode_line(notification: &Notification) -> Result<String, WireError> {
    let mut line = serde_json::to_string(notification).map_err(WireError::Serialize)?;
    line.push('\n');
    Ok(line)
}

/// Decode one line back into a notification. The trailing newline may
/// still be present or already stripped by the reader.
pub fn decode_line(line: &str) -> Result<Notification, WireError> {
    serde_json::from_str(line.trim_end()).map_err(WireError::Deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::collections::HashMap;

    fn sample() -> Notification {
        let mut hints = HashMap::new();
        hints.insert("urgency".to_string(), json!(1));
        hints.insert("sender-pid".to_string(), json!(4242));
        hints.insert("tags".to_string(), json!(["ci", "nightly"]));
        Notification {
            id: 7,
            sender: "builder".to_string(),
            summary: "Build finished".to_string(),
            body: "all targets ok".to_string(),
            icon: "dialog-information".to_string(),
            actions: vec!["default".to_string(), "Open".to_string()],
            hints,
            expires_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 5).unwrap()),
        }
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let original = sample();
        let line = encode_line(&original).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
        assert_eq!(decode_line(&line).unwrap(), original);
    }

    #[test]
    fn wire_keys_are_camel_case() {
        let line = encode_line(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        let object = value.as_object().unwrap();
        for key in ["id", "sender", "summary", "body", "icon", "actions", "hints", "expiresAt"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert!(!object.contains_key("expires_at"));
    }

    #[test]
    fn pinned_notifications_omit_the_deadline_key() {
        let mut pinned = sample();
        pinned.expires_at = None;
        let line = encode_line(&pinned).unwrap();
        assert!(!line.contains("expiresAt"));
        assert_eq!(decode_line(&line).unwrap().expires_at, None);
    }

    #[test]
    fn decode_accepts_stripped_newline_and_unknown_keys() {
        let line = r#"{"id":3,"sender":"s","summary":"hi","body":"","icon":"","actions":[],"hints":{},"futureField":true}"#;
        let decoded = decode_line(line).unwrap();
        assert_eq!(decoded.id, 3);
        assert_eq!(decoded.summary, "hi");
        assert_eq!(decoded.expires_at, None);
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert!(matches!(
            decode_line("this is not json"),
            Err(WireError::Deserialize(_))
        ));
    }
}
