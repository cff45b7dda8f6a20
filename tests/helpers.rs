// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use commitmuse::error::{Error, Result};
use commitmuse::services::llm::TextGenerator;

/// Captured arguments of one `request` call.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub instruction: String,
    pub content: String,
    pub temperature: f32,
}

/// Generator that always answers with a fixed reply and records what it was
/// asked.
pub struct CannedGenerator {
    reply: String,
    pub calls: AtomicUsize,
    pub last_request: Mutex<Option<SeenRequest>>,
}

#[allow(dead_code)]
impl CannedGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn request(
        &self,
        instruction: &str,
        content: &str,
        temperature: f32,
    ) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(SeenRequest {
            instruction: instruction.to_string(),
            content: content.to_string(),
            temperature,
        });
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "canned"
    }
}

/// Delegating wrapper so a test can keep a handle on a generator after
/// handing it to a `GenerationClient`.
#[allow(dead_code)]
pub struct SharedGenerator<T>(pub Arc<T>);

#[async_trait]
impl<T: TextGenerator> TextGenerator for SharedGenerator<T> {
    async fn request(
        &self,
        instruction: &str,
        content: &str,
        temperature: f32,
    ) -> Result<String> {
        self.0.request(instruction, content, temperature).await
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}

/// Generator whose every call fails the way a broken endpoint would.
#[allow(dead_code)]
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn request(&self, _: &str, _: &str, _: f32) -> Result<String> {
        Err(Error::AgentCommunication)
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Generator that must never be reached.
#[allow(dead_code)]
pub struct UnreachableGenerator;

#[async_trait]
impl TextGenerator for UnreachableGenerator {
    async fn request(&self, _: &str, _: &str, _: f32) -> Result<String> {
        panic!("generator was invoked but no network call was expected");
    }

    fn name(&self) -> &str {
        "unreachable"
    }
}
