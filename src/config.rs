// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use figment::Figment;
use figment::providers::{Env, Serialized};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::CommitStyle;
use crate::error::{Error, Result};

/// Per-generation options, mutated only by user actions between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub style: CommitStyle,

    /// Optional commit scope, e.g. "auth". Empty and absent are equivalent.
    #[serde(default)]
    pub scope: Option<String>,

    /// Accepted but not consulted by prompt building.
    #[serde(default)]
    pub include_body: bool,

    #[serde(default)]
    pub include_footer: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            style: CommitStyle::default(),
            scope: None,
            include_body: false,
            include_footer: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generation endpoint (overridable for tests)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Never serialized; read from COMMITMUSE_API_KEY, GEMINI_API_KEY or
    /// API_KEY. Absence is not a load error: it surfaces as a generation
    /// failure downstream.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Sampling temperature (0.0-2.0, default 0.7)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds (default 300)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-3-flash-preview".into()
}
fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_timeout_secs() -> u64 {
    300
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base_url: default_api_base_url(),
            api_key: None,
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load with priority: ENV > defaults. There is no config file layer;
    /// all state is process-local.
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Env::prefixed("COMMITMUSE_"));

        let mut settings: Settings = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        if settings.api_key.is_none() {
            settings.api_key = std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .ok()
                .map(SecretString::from);
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.is_empty() {
            return Err(Error::Config("model cannot be empty".into()));
        }

        let parsed = Url::parse(&self.api_base_url)
            .map_err(|e| Error::Config(format!("api_base_url is not a valid URL: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "api_base_url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::Config(format!(
                "temperature must be 0.0–2.0, got {}",
                self.temperature
            )));
        }

        if !(1..=3600).contains(&self.timeout_secs) {
            return Err(Error::Config(format!(
                "timeout_secs must be 1–3600, got {}",
                self.timeout_secs
            )));
        }

        Ok(())
    }
}
