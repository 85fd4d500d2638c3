// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Plays document serialization and deserialization.
//!
//! This module handles exporting and importing play collections in JSON
//! and YAML formats. Every document is an array of play records; parsing
//! normalizes each record on the way in.

use crate::error::{PlaybookError, Result};
use crate::models::play::Play;
use crate::normalize::normalize_collection;
use serde_json::Value;
use std::path::Path;

/// Default file name offered when exporting.
pub const EXPORT_FILE_NAME: &str = "plays.json";

/// Document formats understood by import and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from a file extension. Unknown extensions are JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

/// Normalize a parsed document, rejecting anything that is not an array.
pub fn plays_from_value(value: &Value) -> std::result::Result<Vec<Play>, String> {
    match value.as_array() {
        Some(items) => Ok(normalize_collection(items)),
        None => Err("document is not an array of plays".to_string()),
    }
}

/// Parse a document in the given format into normalized plays.
pub fn parse_plays(text: &str, format: Format) -> std::result::Result<Vec<Play>, String> {
    let value: Value = match format {
        Format::Json => serde_json::from_str(text).map_err(|e| e.to_string())?,
        Format::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string())?,
    };
    plays_from_value(&value)
}

/// Render plays as a pretty-printed JSON array.
pub fn to_json(plays: &[Play]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(plays)
}

/// Export plays to JSON format.
pub fn export_json(plays: &[Play], path: &Path) -> Result<()> {
    let json = to_json(plays).map_err(|e| PlaybookError::ExportFailure(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| PlaybookError::ExportFailure(e.to_string()))
}

/// Export plays to YAML format.
pub fn export_yaml(plays: &[Play], path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(plays).map_err(|e| PlaybookError::ExportFailure(e.to_string()))?;
    std::fs::write(path, yaml).map_err(|e| PlaybookError::ExportFailure(e.to_string()))
}

/// Export plays, choosing the format from the file extension.
pub fn export_file(plays: &[Play], path: &Path) -> Result<()> {
    match Format::from_path(path) {
        Format::Json => export_json(plays, path),
        Format::Yaml => export_yaml(plays, path),
    }
}

/// Import plays from a user-supplied file.
pub fn import_file(path: &Path) -> Result<Vec<Play>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| PlaybookError::MalformedImport(format!("{}: {}", path.display(), e)))?;
    parse_plays(&text, Format::from_path(path)).map_err(PlaybookError::MalformedImport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_plays;

    fn sample() -> Vec<Play> {
        vec![
            Play {
                id: "1".to_string(),
                name: "0 Bal".to_string(),
                defense: "6-0".to_string(),
                situation: "lerihanas".to_string(),
                media: "assets/media/01.mp4".to_string(),
                description: "Kulcspontok:\n- gyors indítás".to_string(),
                ..Default::default()
            },
            Play {
                id: "".to_string(),
                name: "Keresztezés".to_string(),
                defense: "5.1".to_string(),
                phase: "Támadás".to_string(),
                ..Default::default()
            },
            Play {
                id: "1".to_string(),
                name: "Másolat".to_string(),
                situation: "Emberelőny".to_string(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_export_import_roundtrip_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);

        let plays = sample();
        export_file(&plays, &path).unwrap();
        let imported = import_file(&path).unwrap();

        assert_eq!(imported, normalize_plays(plays));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plays.yaml");

        let plays = normalize_plays(sample());
        export_file(&plays, &path).unwrap();
        assert_eq!(import_file(&path).unwrap(), plays);
    }

    #[test]
    fn test_export_is_pretty_array() {
        let json = to_json(&normalize_plays(sample())).unwrap();
        assert!(json.starts_with("[\n"));
        assert!(json.contains("\"defense\": \"6:0\""));
    }

    #[test]
    fn test_non_array_rejected() {
        assert!(parse_plays("{\"name\": \"x\"}", Format::Json).is_err());
        assert!(parse_plays("not json", Format::Json).is_err());
        assert!(parse_plays("[]", Format::Json).unwrap().is_empty());
    }

    #[test]
    fn test_import_missing_file_is_malformed_import() {
        let err = import_file(Path::new("/nonexistent/plays.json")).unwrap_err();
        assert!(matches!(err, PlaybookError::MalformedImport(_)));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("a.YML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("plays")), Format::Json);
    }
}
