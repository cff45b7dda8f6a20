// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CommitStyle;

/// Most recent generations kept in memory. Nothing survives the session.
pub const HISTORY_CAPACITY: usize = 10;

/// One successful generation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// Epoch milliseconds at creation
    pub timestamp: i64,
    pub input: String,
    pub output: String,
    pub style: CommitStyle,
}

impl HistoryEntry {
    pub fn new(input: impl Into<String>, output: impl Into<String>, style: CommitStyle) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            input: input.into(),
            output: output.into(),
            style,
        }
    }
}

/// Insertion-ordered log, newest at index 0, bounded at [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `entry`; the oldest entry is dropped once the log is full.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Newest-first snapshot.
    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
