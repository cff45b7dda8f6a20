// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use tracing::debug;

use crate::config::{GenerationConfig, Settings};
use crate::error::{Error, Result};
use crate::services::llm::{self, TextGenerator};
use crate::services::prompt::PromptBuilder;

/// Returned instead of an empty string when the model answers with nothing.
pub const EMPTY_RESPONSE_FALLBACK: &str = "Failed to generate message.";

const CONTENT_PREFACE: &str = "Generate a commit message for these changes:";

/// One-shot wrapper around the external generation endpoint.
pub struct GenerationClient {
    generator: Box<dyn TextGenerator>,
    temperature: f32,
}

impl GenerationClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            generator: llm::create_generator(settings),
            temperature: settings.temperature,
        }
    }

    /// Swap in a different backend (used by tests and embedders).
    pub fn with_generator(generator: Box<dyn TextGenerator>, temperature: f32) -> Self {
        Self {
            generator,
            temperature,
        }
    }

    /// Single call, no retry. Empty input is rejected before any network
    /// activity.
    pub async fn generate(&self, raw_input: &str, config: &GenerationConfig) -> Result<String> {
        if raw_input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let instruction = PromptBuilder::build_instruction(config);
        let content = format!("{CONTENT_PREFACE}\n\n{raw_input}");

        debug!(
            generator = self.generator.name(),
            style = %config.style,
            input_chars = raw_input.len(),
            "requesting generation"
        );

        let text = self
            .generator
            .request(&instruction, &content, self.temperature)
            .await?;

        let text = text.trim();
        if text.is_empty() {
            return Ok(EMPTY_RESPONSE_FALLBACK.to_string());
        }

        Ok(text.to_string())
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }
}
