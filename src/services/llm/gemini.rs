// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::TextGenerator;
use crate::config::Settings;
use crate::error::{Error, Result};

pub struct GeminiGenerator {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<SecretString>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationParameters,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationParameters {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiGenerator {
    pub fn new(settings: &Settings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            // Sanitize: remove trailing slashes to avoid //models/...
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn request(
        &self,
        instruction: &str,
        content: &str,
        temperature: f32,
    ) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        // A missing key is sent as an empty header and rejected server-side:
        // credential problems surface as generation failures, not earlier.
        let api_key = self
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().to_string())
            .unwrap_or_default();

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest {
                system_instruction: Content {
                    parts: vec![Part {
                        text: instruction.to_string(),
                    }],
                },
                contents: vec![Content {
                    parts: vec![Part {
                        text: content.to_string(),
                    }],
                }],
                generation_config: GenerationParameters { temperature },
            })
            .send()
            .await
            .map_err(|e| {
                error!(generator = "gemini", cause = %e, "transport failure");
                Error::AgentCommunication
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(generator = "gemini", %status, body = %body, "API error response");
            return Err(Error::AgentCommunication);
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(generator = "gemini", cause = %e, "malformed response body");
            Error::AgentCommunication
        })?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        Ok(text.trim().to_string())
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
