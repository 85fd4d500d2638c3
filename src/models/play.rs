// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Play record data structures.
//!
//! This module defines the canonical shape of a playbook entry. Every
//! ingestion path collapses legacy documents into this shape, so the rest
//! of the application never sees alternate field names.

use serde::{Deserialize, Serialize};

/// Canonical defense formations, in display order.
pub const DEFENSES: [&str; 2] = ["6:0", "5:1"];

/// Canonical situation vocabulary, in display order. Phases share it.
pub const SITUATIONS: [&str; 6] = [
    "Támadás",
    "Védekezés",
    "Lerohanás",
    "Visszarendeződés",
    "Létszámfölény",
    "Létszámhátrány",
];

/// Default media path prefix for newly added plays.
pub const MEDIA_PREFIX: &str = "assets/media/";

/// A single tactical play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub id: String,
    pub name: String,
    pub defense: String,
    pub situation: String,
    pub phase: String,
    pub media: String,
    pub description: String,
}

impl Play {
    /// Create an empty play with the given id, ready for editing.
    pub fn new(id: String) -> Self {
        Self {
            id,
            media: MEDIA_PREFIX.to_string(),
            ..Default::default()
        }
    }

    /// Name to show in lists; falls back to a placeholder for untitled plays.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Untitled play"
        } else {
            &self.name
        }
    }

    /// Non-empty tag chips (phase first, then situation).
    pub fn chips(&self) -> Vec<&str> {
        [self.phase.as_str(), self.situation.as_str()]
            .into_iter()
            .filter(|v| !v.is_empty())
            .collect()
    }
}

/// Editable fields of a play, used by the editor to route edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayField {
    Name,
    Defense,
    Situation,
    Phase,
    Media,
    Description,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_play_has_media_prefix() {
        let play = Play::new("7".to_string());
        assert_eq!(play.id, "7");
        assert_eq!(play.media, "assets/media/");
        assert!(play.name.is_empty());
    }

    #[test]
    fn test_chips_skip_empty() {
        let play = Play {
            situation: "Támadás".to_string(),
            ..Default::default()
        };
        assert_eq!(play.chips(), vec!["Támadás"]);
        assert_eq!(play.display_name(), "Untitled play");
    }
}
