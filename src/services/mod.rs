// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

pub mod client;
pub mod clipboard;
pub mod llm;
pub mod prompt;
