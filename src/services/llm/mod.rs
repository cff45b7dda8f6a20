// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;

pub mod gemini;

use crate::config::Settings;
use crate::error::Result;

/// Narrow contract to the hosted model: one request, one resolution.
/// No retry, no streaming, no cancellation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn request(
        &self,
        instruction: &str,
        content: &str,
        temperature: f32,
    ) -> Result<String>;

    fn name(&self) -> &str;
}

pub fn create_generator(settings: &Settings) -> Box<dyn TextGenerator> {
    Box::new(gemini::GeminiGenerator::new(settings))
}
