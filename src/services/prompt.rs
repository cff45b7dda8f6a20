// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use crate::config::GenerationConfig;
use crate::domain::CommitStyle;

const PREAMBLE: &str = "You are a Senior Software Engineer and Git expert.\n\
Your task is to generate professional, accurate, and concise Git commit messages based on the provided code changes or descriptions.\n\
Guidelines:";

const FIXED_GUIDANCE: &[&str] = &[
    "Use the imperative mood (e.g., \"add\", \"fix\", \"change\" instead of \"added\", \"fixes\", \"changed\").",
    "Do not include markdown code blocks in the final answer, just the raw commit text.",
    "If the input is a diff, analyze it carefully to understand the intent.",
    "Focus on \"why\" as well as \"what\" if the style is Detailed.",
];

fn style_guideline(style: CommitStyle) -> &'static str {
    match style {
        CommitStyle::Conventional => {
            "Use the Conventional Commits specification (type(scope): description). \
             Types: feat, fix, docs, style, refactor, perf, test, build, ci, chore, revert."
        }
        CommitStyle::Gitmoji => {
            "Use the Gitmoji style. Start with a relevant emoji followed by a concise description."
        }
        CommitStyle::Minimal => {
            "Keep it extremely short and direct. No prefixes, just the core action."
        }
        CommitStyle::Detailed => {
            "Provide a clear summary followed by a bulleted list of changes for the body."
        }
    }
}

pub struct PromptBuilder;

impl PromptBuilder {
    /// Map a generation config to the system instruction sent with every
    /// request. Deterministic and total: same config, same string.
    pub fn build_instruction(config: &GenerationConfig) -> String {
        let mut instruction = String::from(PREAMBLE);

        instruction.push_str("\n- ");
        instruction.push_str(style_guideline(config.style));

        let scope = config.scope.as_deref().map(str::trim).filter(|s| !s.is_empty());
        if let Some(scope) = scope {
            instruction.push_str(&format!("\n- Use '{scope}' as the scope if applicable."));
        }

        for line in FIXED_GUIDANCE {
            instruction.push_str("\n- ");
            instruction.push_str(line);
        }

        instruction
    }
}
