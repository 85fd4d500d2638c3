// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for loading, importing and saving plays.
//!
//! Normalization never fails, so everything here comes from I/O or from
//! documents that are not arrays of records. Each variant maps to a
//! recovery the application applies: an empty collection, a rejected
//! import, or a draft that will not survive a restart.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybookError {
    /// The fallback data file could not be read or is not an array.
    #[error("Play data unavailable at {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    /// A user-supplied import document is unparsable or not an array.
    #[error("Import rejected: {0}")]
    MalformedImport(String),

    /// The draft slot could not be written.
    #[error("Could not save draft: {0}")]
    StorageWriteFailure(#[source] std::io::Error),

    /// Export target could not be written.
    #[error("Could not export plays: {0}")]
    ExportFailure(String),
}

pub type Result<T> = std::result::Result<T, PlaybookError>;
