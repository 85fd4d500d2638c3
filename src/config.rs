// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Every setting has a default, so the
//! application starts without any configuration.
//!
//! - `PLAYBOOK_DATA_FILE`: fallback plays document
//! - `PLAYBOOK_DRAFT_DIR`: directory holding the draft slot
//! - `PLAYBOOK_DRAFT_KEY`: name of the draft slot
//! - `PLAYBOOK_MEDIA_ROOT`: directory media paths are relative to

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "assets/data/plays.json";
pub const DEFAULT_DRAFT_DIR: &str = ".playbook";
pub const DEFAULT_DRAFT_KEY: &str = "bf_playbook_plays_v1";
pub const DEFAULT_MEDIA_ROOT: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub draft_dir: PathBuf,
    pub draft_key: String,
    pub media_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            draft_dir: PathBuf::from(DEFAULT_DRAFT_DIR),
            draft_key: DEFAULT_DRAFT_KEY.to_string(),
            media_root: PathBuf::from(DEFAULT_MEDIA_ROOT),
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read the configuration from the environment.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            data_file: non_empty("PLAYBOOK_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            draft_dir: non_empty("PLAYBOOK_DRAFT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.draft_dir),
            draft_key: non_empty("PLAYBOOK_DRAFT_KEY").unwrap_or(defaults.draft_key),
            media_root: non_empty("PLAYBOOK_MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.media_root),
        }
    }
}
