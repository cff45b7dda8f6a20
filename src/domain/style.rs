// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitStyle {
    #[default]
    Conventional,
    Gitmoji,
    Minimal,
    Detailed,
}

impl CommitStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conventional => "Conventional Commits",
            Self::Gitmoji => "Gitmoji",
            Self::Minimal => "Minimalist",
            Self::Detailed => "Detailed/Storytelling",
        }
    }

    pub const ALL: [CommitStyle; 4] = [
        Self::Conventional,
        Self::Gitmoji,
        Self::Minimal,
        Self::Detailed,
    ];
}

impl std::fmt::Display for CommitStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
