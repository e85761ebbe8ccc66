use std::sync::mpsc;

use chrono::{DateTime, Utc};

use super::video_id::VideoId;

pub(crate) const DEFAULT_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecentEntry {
    pub(crate) id: VideoId,
    pub(crate) title: String,
    pub(crate) played_at: DateTime<Utc>,
}

/// Sent to subscribers after every `record`. Carries the new revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HistoryChanged {
    pub(crate) revision: u64,
}

/// Most-recent-first list of played videos, unique by id and capped at
/// `capacity` entries.
#[derive(Debug)]
pub(crate) struct RecentHistory {
    entries: Vec<RecentEntry>,
    capacity: usize,
    revision: u64,
    subscribers: Vec<mpsc::Sender<HistoryChanged>>,
}

impl Default for RecentHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl RecentHistory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::new(),
            capacity,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, id: VideoId, title: String, played_at: DateTime<Utc>) {
        self.entries.retain(|entry| entry.id != id);
        self.entries.insert(
            0,
            RecentEntry {
                id,
                title,
                played_at,
            },
        );
        self.entries.truncate(self.capacity);

        self.revision += 1;
        let event = HistoryChanged {
            revision: self.revision,
        };
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    pub(crate) fn list(&self) -> &[RecentEntry] {
        &self.entries
    }

    pub(crate) fn select(&self, id: &VideoId) -> Option<&RecentEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub(crate) fn subscribe(&mut self) -> mpsc::Receiver<HistoryChanged> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Human label for how long ago `played_at` was, relative to `now`.
pub(crate) fn relative_label(played_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(played_at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} {} ago", plural(minutes, "minute"))
    } else if hours < 24 {
        format!("{hours} {} ago", plural(hours, "hour"))
    } else {
        format!("{days} {} ago", plural(days, "day"))
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}
