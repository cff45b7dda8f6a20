// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Raised before any network attempt; the message doubles as the
    /// user-facing validation text.
    #[error("Please provide some changes or a description.")]
    #[diagnostic(
        code(commitmuse::input::empty),
        help("Paste a git diff or describe your changes before generating")
    )]
    EmptyInput,

    /// Single opaque failure for anything the external call can throw.
    /// The underlying cause is logged, never surfaced.
    #[error("Failed to communicate with the AI agent.")]
    #[diagnostic(
        code(commitmuse::agent::unreachable),
        help("Check your network connection and GEMINI_API_KEY")
    )]
    AgentCommunication,

    #[error("Configuration error: {0}")]
    #[diagnostic(code(commitmuse::config::error))]
    Config(String),

    #[error("Clipboard error: {0}")]
    #[diagnostic(code(commitmuse::clipboard::error))]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, Error>;
