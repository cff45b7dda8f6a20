// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use tracing::{debug, warn};

use crate::config::GenerationConfig;
use crate::domain::{HistoryEntry, HistoryLog};
use crate::error::{Error, Result};
use crate::services::client::GenerationClient;
use crate::services::clipboard;

/// Where the session currently sits in the generate lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Generating,
    Succeeded,
    Failed,
}

/// The whole mutable session: input, output, error, per-call config and the
/// bounded history. Created at session start, dropped at session end;
/// nothing persists.
///
/// One generation at a time: `generate` borrows the session exclusively, so
/// overlapping calls cannot exist. Sequential re-entry is allowed and the
/// later call's result wins.
#[derive(Debug, Default)]
pub struct Session {
    pub input: String,
    pub output: String,
    pub error: Option<String>,
    pub phase: Phase,
    pub config: GenerationConfig,
    pub history: HistoryLog,
}

impl Session {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn is_generating(&self) -> bool {
        self.phase == Phase::Generating
    }

    /// Run one generation round against `client` and record the outcome.
    ///
    /// Empty input fails validation without touching the network. On success
    /// the result becomes the current output and one history entry is
    /// pushed; on failure the previous output is kept.
    pub async fn generate(&mut self, client: &GenerationClient) -> Phase {
        if self.input.trim().is_empty() {
            self.error = Some(Error::EmptyInput.to_string());
            self.phase = Phase::Failed;
            return self.phase;
        }

        self.error = None;
        self.phase = Phase::Generating;

        match client.generate(&self.input, &self.config).await {
            Ok(result) => {
                self.output = result.clone();
                self.history
                    .push(HistoryEntry::new(self.input.clone(), result, self.config.style));
                self.phase = Phase::Succeeded;
                debug!(history_len = self.history.len(), "generation succeeded");
            }
            Err(e) => {
                warn!(error = %e, "generation failed");
                self.error = Some(e.to_string());
                self.phase = Phase::Failed;
            }
        }

        self.phase
    }

    /// Republish a stored entry as the current editable state. Pure state
    /// transition: the log itself is untouched, and only `style` is copied
    /// back into the config.
    pub fn select_history(&mut self, id: &str) -> bool {
        let Some(entry) = self.history.get(id).cloned() else {
            return false;
        };

        self.input = entry.input;
        self.output = entry.output;
        self.config.style = entry.style;
        true
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// One-shot export of the current output to the system clipboard.
    pub fn copy_output(&self) -> Result<()> {
        clipboard::copy_text(&self.output)
    }
}
