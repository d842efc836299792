//! Notification data model.
//!
//! A [`Notification`] is immutable once built. The daemon stamps the
//! expiry deadline at arrival time so consumers never need to know the
//! sender's relative timeout, only the absolute moment the entry stops
//! being relevant.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fallback lifetime for senders that leave the expiry choice to the
/// server (a timeout of `-1`).
pub const DEFAULT_EXPIRATION_MS: i64 = 5000;

/// One desktop notification as it travels from the daemon to consumers.
///
/// Field names mirror the wire protocol exactly; see [`crate::wire`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Server-assigned id, or the sender-requested replacement id.
    pub id: i32,
    /// Application name as reported by the sender.
    pub sender: String,
    pub summary: String,
    pub body: String,
    /// Icon name or path, empty when the sender set none.
    pub icon: String,
    pub actions: Vec<String>,
    /// Sender hints carried structurally, uninterpreted.
    pub hints: HashMap<String, serde_json::Value>,
    /// Moment the notification stops being shown. Absent for pinned
    /// notifications that never expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// True once `now` has moved strictly past the deadline. Pinned
    /// notifications never expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(deadline) => now > deadline,
            None => false,
        }
    }

    /// Single-line display form, `summary // body` with the delimiter
    /// dropped when the body is empty.
    pub fn display_text(&self) -> String {
        if self.body.is_empty() {
            self.summary.clone()
        } else {
            format!("{} // {}", self.summary, self.body)
        }
    }
}

/// Resolve a sender-supplied expiry timeout against the moment of
/// arrival. `-1` delegates to the server default, `0` pins the
/// notification forever, and any other negative value is treated as
/// pinned as well.
pub fn expiry_deadline(now: DateTime<Utc>, expire_timeout_ms: i32) -> Option<DateTime<Utc>> {
    match expire_timeout_ms {
        -1 => Some(now + Duration::milliseconds(DEFAULT_EXPIRATION_MS)),
        ms if ms <= 0 => None,
        ms => Some(now + Duration::milliseconds(i64::from(ms))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(expires_at: Option<DateTime<Utc>>) -> Notification {
        Notification {
            id: 1,
            sender: "test-suite".to_string(),
            summary: "Build finished".to_string(),
            body: "all targets ok".to_string(),
            icon: String::new(),
            actions: Vec::new(),
            hints: HashMap::new(),
            expires_at,
        }
    }

    fn at_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn server_default_fills_in_for_minus_one() {
        let now = at_noon();
        assert_eq!(
            expiry_deadline(now, -1),
            Some(now + Duration::milliseconds(DEFAULT_EXPIRATION_MS))
        );
    }

    #[test]
    fn zero_timeout_pins_forever() {
        assert_eq!(expiry_deadline(at_noon(), 0), None);
    }

    #[test]
    fn other_negative_timeouts_pin_too() {
        assert_eq!(expiry_deadline(at_noon(), -7), None);
    }

    #[test]
    fn positive_timeout_is_relative_to_arrival() {
        let now = at_noon();
        assert_eq!(
            expiry_deadline(now, 2500),
            Some(now + Duration::milliseconds(2500))
        );
    }

    #[test]
    fn expiry_is_strictly_after_the_deadline() {
        let deadline = at_noon();
        let n = sample(Some(deadline));
        assert!(!n.is_expired(deadline));
        assert!(n.is_expired(deadline + Duration::milliseconds(1)));
    }

    #[test]
    fn pinned_notifications_never_expire() {
        let n = sample(None);
        assert!(!n.is_expired(at_noon() + Duration::days(365)));
    }

    #[test]
    fn display_text_joins_summary_and_body() {
        assert_eq!(sample(None).display_text(), "Build finished // all targets ok");
    }

    #[test]
    fn display_text_drops_delimiter_without_body() {
        let mut n = sample(None);
        n.body.clear();
        assert_eq!(n.display_text(), "Build finished");
    }
}
