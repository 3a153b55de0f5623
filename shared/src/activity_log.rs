//! Capacity-bounded audit trail of user actions, persisted under
//! `activityLogs` as a JSON array.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::VecDeque;

use crate::config::DEFAULT_ACTIVITY_LOG_CAPACITY;

pub type Details = Map<String, Value>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityLogEntry {
    /// ISO-8601 with millisecond precision, e.g. `2024-05-01T09:30:00.000Z`.
    pub timestamp: String,
    pub action: String,
    #[serde(default)]
    pub details: Details,
}

impl ActivityLogEntry {
    pub fn new(action: impl Into<String>, details: Details, at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            action: action.into(),
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLog {
    entries: VecDeque<ActivityLogEntry>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_ACTIVITY_LOG_CAPACITY)
    }
}

impl ActivityLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Appends, evicting from the front once over capacity. Returns how many
    /// entries were evicted.
    pub fn record(&mut self, entry: ActivityLogEntry) -> usize {
        self.entries.push_back(entry);
        self.enforce_capacity()
    }

    /// Places entries read from storage ahead of anything recorded since
    /// start-up, then re-applies the cap.
    pub fn merge_loaded(&mut self, persisted: Vec<ActivityLogEntry>) -> usize {
        let recent = std::mem::take(&mut self.entries);
        self.entries = persisted.into_iter().chain(recent).collect();
        self.enforce_capacity()
    }

    pub fn set_capacity(&mut self, capacity: usize) -> usize {
        self.capacity = capacity.max(1);
        self.enforce_capacity()
    }

    fn enforce_capacity(&mut self) -> usize {
        let overflow = self.entries.len().saturating_sub(self.capacity);
        self.entries.drain(..overflow);
        overflow
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ActivityLogEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<ActivityLogEntry> {
        self.entries.iter().cloned().collect()
    }
}
