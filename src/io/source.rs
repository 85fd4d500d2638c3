// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Read-only fallback sources for the play collection.

use crate::error::{PlaybookError, Result};
use crate::io::serialization::{parse_plays, Format};
use crate::models::play::Play;
use std::path::PathBuf;

/// Something that can produce a baseline collection of plays.
pub trait PlaySource {
    /// Load and normalize the collection.
    fn load(&self) -> Result<Vec<Play>>;

    /// Human-readable location, used in logs and notices.
    fn describe(&self) -> String;
}

/// The static plays document shipped with the application.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn unavailable(&self, reason: impl ToString) -> PlaybookError {
        PlaybookError::SourceUnavailable {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl PlaySource for FileSource {
    fn load(&self) -> Result<Vec<Play>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;
        let plays =
            parse_plays(&text, Format::from_path(&self.path)).map_err(|e| self.unavailable(e))?;
        log::info!("Loaded {} plays from {}", plays.len(), self.path.display());
        Ok(plays)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
