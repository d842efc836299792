//! Once-a-second ticker output.
//!
//! Each tick sweeps the feed and prints one line: every live
//! notification newest first, then the current local time. The line is
//! printed even when the feed is empty so the ticker visibly runs.

use crate::feed::Feed;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;

/// Timestamp layout at the end of every line, e.g. `May  1 12:00:05`.
const STAMP_FORMAT: &str = "%b %e %H:%M:%S";

/// Print the feed once per second, pruning expired entries on the way.
pub async fn run(feed: Arc<Feed>) {
    let mut tick = interval(Duration::from_secs(1));
    loop {
        tick.tick().await;
        println!("{}", ticker_line(&feed));
    }
}

/// One rendered line for the current moment.
pub fn ticker_line(feed: &Feed) -> String {
    let texts = feed.sweep_and_collect(chrono::Utc::now());
    let stamp = chrono::Local::now().format(STAMP_FORMAT).to_string();
    compose_line(&texts, &stamp)
}

fn compose_line(texts: &[String], stamp: &str) -> String {
    let mut line = String::new();
    for text in texts {
        line.push_str(text);
        line.push_str(" :: ");
    }
    line.push_str(stamp);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use noticker_proto::Notification;
    use std::collections::HashMap;

    #[test]
    fn entries_are_joined_ahead_of_the_stamp() {
        let texts = vec!["b // two".to_string(), "a".to_string()];
        assert_eq!(
            compose_line(&texts, "May  1 12:00:05"),
            "b // two :: a :: May  1 12:00:05"
        );
    }

    #[test]
    fn empty_feed_still_renders_the_stamp() {
        assert_eq!(compose_line(&[], "May  1 12:00:05"), "May  1 12:00:05");
    }

    #[test]
    fn ticker_line_drops_expired_entries() {
        let feed = Feed::new();
        feed.insert(Notification {
            id: 1,
            sender: "test-suite".to_string(),
            summary: "long gone".to_string(),
            body: String::new(),
            icon: String::new(),
            actions: Vec::new(),
            hints: HashMap::new(),
            expires_at: Some(Utc::now() - Duration::seconds(1)),
        });
        feed.insert(Notification {
            id: 2,
            sender: "test-suite".to_string(),
            summary: "still live".to_string(),
            body: String::new(),
            icon: String::new(),
            actions: Vec::new(),
            hints: HashMap::new(),
            expires_at: None,
        });

        let line = ticker_line(&feed);
        assert!(line.starts_with("still live :: "));
        assert!(!line.contains("long gone"));
        assert_eq!(feed.len(), 1);
    }
}
