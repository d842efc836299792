//! Self-pruning feed of live notifications, newest first.

use chrono::{DateTime, Utc};
use noticker_proto::Notification;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Shared list of notifications awaiting display.
///
/// All access funnels through one mutex so insertion from the socket
/// reader and pruning from the render tick never interleave. Expired
/// entries are only dropped during [`Feed::sweep_and_collect`], which
/// keeps removal aligned with the moment a viewer would notice.
pub struct Feed {
    entries: Mutex<VecDeque<Notification>>,
    replace_duplicates: bool,
}

impl Feed {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            replace_duplicates: false,
        }
    }

    /// Like [`Feed::new`], but an incoming id already present in the feed
    /// replaces the listed entry instead of being shown alongside it.
    pub fn with_replacement() -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            replace_duplicates: true,
        }
    }

    /// Add a notification at the front of the feed.
    pub fn insert(&self, notification: Notification) {
        let mut entries = self.entries.lock().unwrap();
        if self.replace_duplicates {
            entries.retain(|existing| existing.id != notification.id);
        }
        entries.push_front(notification);
    }

    /// Drop every entry whose deadline has passed and return the display
    /// text of the survivors, newest first.
    pub fn sweep_and_collect(&self, now: DateTime<Utc>) -> Vec<String> {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|entry| !entry.is_expired(now));
        entries.iter().map(|entry| entry.display_text()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}
