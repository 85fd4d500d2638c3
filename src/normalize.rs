// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Tag and record normalization.
//!
//! Incoming play documents come from several generations of the data file
//! and from hand edits, so the same tag shows up with different punctuation,
//! casing, accents and typos. This module maps all of them onto the
//! canonical vocabularies in [`crate::models::play`] and collapses legacy
//! field names into the canonical [`Play`] shape.
//!
//! Every function here is total: unrecognized values are passed through
//! (trimmed) rather than rejected.

use crate::models::play::{Play, DEFENSES, SITUATIONS};
use serde_json::Value;
use std::collections::HashSet;

/// Exact (lower-case) misspellings and legacy names of situation tags.
const SITUATION_TYPOS: &[(&str, &str)] = &[
    ("tamadas", "Támadás"),
    ("támadas", "Támadás"),
    ("tamadás", "Támadás"),
    ("vedekezes", "Védekezés"),
    ("védekezes", "Védekezés"),
    ("vedekezés", "Védekezés"),
    ("lerohanas", "Lerohanás"),
    ("visszarendezodes", "Visszarendeződés"),
    ("visszarendeződes", "Visszarendeződés"),
    ("visszarendezödés", "Visszarendeződés"),
    ("letszamfoleny", "Létszámfölény"),
    ("létszámfoleny", "Létszámfölény"),
    ("letszamhatrany", "Létszámhátrány"),
    ("létszámhatrany", "Létszámhátrány"),
    ("emberelőny", "Létszámfölény"),
    ("emberelony", "Létszámfölény"),
    ("emberelöny", "Létszámfölény"),
    ("emberhátrány", "Létszámhátrány"),
    ("emberhatrany", "Létszámhátrány"),
];

/// Fragments of common "Lerohanás" misspellings.
const LEROHANAS_FRAGMENTS: &[&str] = &["leriha", "lariha", "lerih"];

/// Legacy spellings of each canonical field, most preferred first.
const ID_KEYS: &[&str] = &["id", "ID", "Id"];
const NAME_KEYS: &[&str] = &["name", "név", "nev"];
const DEFENSE_KEYS: &[&str] = &["defense", "vedekezes", "védekezés", "véd", "ved"];
const SITUATION_KEYS: &[&str] = &["situation", "szituacio", "szituáció", "szitu"];
const PHASE_KEYS: &[&str] = &["phase", "fazis", "fázis"];
const MEDIA_KEYS: &[&str] = &["media", "útvonal", "utvonal"];
const DESCRIPTION_KEYS: &[&str] = &["description", "leírás", "leiras"];

/// Canonicalize a defense formation.
///
/// Whitespace is dropped and `.`/`-` separators become `:`, so `"6 - 0"`
/// and `"6.0"` both map to `"6:0"`. Anything that still does not match a
/// known formation is returned trimmed, unchanged.
pub fn normalize_defense(raw: &str) -> String {
    let trimmed = raw.trim();
    let compact: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '.' || c == '-' { ':' } else { c })
        .collect();

    match DEFENSES.iter().find(|d| **d == compact) {
        Some(defense) => defense.to_string(),
        None => trimmed.to_string(),
    }
}

/// Canonicalize a situation tag.
///
/// Lookup order: typo table, "Lerohanás" fragments, case-insensitive match
/// against the vocabulary. The returned value always uses canonical casing
/// when a match is found.
pub fn normalize_situation(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_lowercase();

    if let Some((_, canonical)) = SITUATION_TYPOS.iter().find(|(typo, _)| *typo == lower) {
        return canonical.to_string();
    }

    if LEROHANAS_FRAGMENTS.iter().any(|f| lower.contains(f)) {
        return "Lerohanás".to_string();
    }

    match SITUATIONS.iter().find(|s| s.to_lowercase() == lower) {
        Some(canonical) => canonical.to_string(),
        None => trimmed.to_string(),
    }
}

/// Canonicalize a phase tag. Phases use the situation vocabulary.
pub fn normalize_phase(raw: &str) -> String {
    normalize_situation(raw)
}

/// Re-normalize the tag fields of an already canonical-shaped play.
pub fn normalize_fields(play: &mut Play) {
    play.id = play.id.trim().to_string();
    play.defense = normalize_defense(&play.defense);
    play.situation = normalize_situation(&play.situation);
    play.phase = normalize_phase(&play.phase);
}

/// Build a canonical play from an arbitrary JSON value.
///
/// `index` is the position in the source document and seeds the id when the
/// record carries none.
pub fn normalize_play(value: &Value, index: usize) -> Play {
    let id = field_text(value, ID_KEYS).trim().to_string();
    let mut play = Play {
        id: if id.is_empty() {
            (index + 1).to_string()
        } else {
            id
        },
        name: field_text(value, NAME_KEYS),
        defense: field_text(value, DEFENSE_KEYS),
        situation: field_text(value, SITUATION_KEYS),
        phase: field_text(value, PHASE_KEYS),
        media: field_text(value, MEDIA_KEYS),
        description: field_text(value, DESCRIPTION_KEYS),
    };
    normalize_fields(&mut play);
    play
}

/// Normalize every element of a document array and make ids distinct.
pub fn normalize_collection(values: &[Value]) -> Vec<Play> {
    let mut plays: Vec<Play> = values
        .iter()
        .enumerate()
        .map(|(i, v)| normalize_play(v, i))
        .collect();
    ensure_distinct_ids(&mut plays);
    plays
}

/// Normalize plays that are already in canonical shape.
pub fn normalize_plays(mut plays: Vec<Play>) -> Vec<Play> {
    for (i, play) in plays.iter_mut().enumerate() {
        normalize_fields(play);
        if play.id.is_empty() {
            play.id = (i + 1).to_string();
        }
    }
    ensure_distinct_ids(&mut plays);
    plays
}

/// Next free numeric id: the largest numeric id plus one.
///
/// Non-numeric ids count as zero, so an empty collection yields `"1"`.
/// When the largest id is already `u64::MAX`, the smallest unused positive
/// id is handed out instead.
pub fn next_id(plays: &[Play]) -> String {
    let used: HashSet<u64> = plays
        .iter()
        .filter_map(|p| p.id.trim().parse::<u64>().ok())
        .collect();
    let max = used.iter().copied().max().unwrap_or(0);

    match max.checked_add(1) {
        Some(next) => next.to_string(),
        None => (1..=u64::MAX)
            .find(|n| !used.contains(n))
            .unwrap_or(0)
            .to_string(),
    }
}

/// Replace empty or repeated ids with fresh numeric ones. First occurrence wins.
fn ensure_distinct_ids(plays: &mut [Play]) {
    let mut seen = HashSet::new();
    for i in 0..plays.len() {
        if plays[i].id.is_empty() || seen.contains(&plays[i].id) {
            let fresh = next_id(plays);
            log::warn!(
                "Reassigning id {:?} of play {:?} to {}",
                plays[i].id,
                plays[i].name,
                fresh
            );
            plays[i].id = fresh;
        }
        seen.insert(plays[i].id.clone());
    }
}

/// Text of the first present alias key; scalars are stringified.
fn field_text(value: &Value, keys: &[&str]) -> String {
    let found = keys
        .iter()
        .filter_map(|k| value.get(*k))
        .find(|v| !v.is_null());

    match found {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defense_separators() {
        for raw in ["6-0", "6.0", "6 : 0", "6:0", " 6 - 0 "] {
            assert_eq!(normalize_defense(raw), "6:0", "input {:?}", raw);
        }
        assert_eq!(normalize_defense("5-1"), "5:1");
        assert_eq!(normalize_defense("5.1"), "5:1");
    }

    #[test]
    fn test_defense_passthrough() {
        assert_eq!(normalize_defense("7:6"), "7:6");
        assert_eq!(normalize_defense("  3-2-1 "), "3-2-1");
        assert_eq!(normalize_defense(""), "");
        assert_eq!(normalize_defense("   "), "");
    }

    #[test]
    fn test_lerohanas_fragments() {
        for raw in ["leriha", "Lerihanás", "LARIHANAS", "a lerih valami", "Gyors lariha"] {
            assert_eq!(normalize_situation(raw), "Lerohanás", "input {:?}", raw);
        }
    }

    #[test]
    fn test_situation_typo_table() {
        assert_eq!(normalize_situation("tamadas"), "Támadás");
        assert_eq!(normalize_situation("  VEDEKEZES "), "Védekezés");
        assert_eq!(normalize_situation("Emberelőny"), "Létszámfölény");
        assert_eq!(normalize_situation("emberhatrany"), "Létszámhátrány");
    }

    #[test]
    fn test_situation_canonical_casing() {
        assert_eq!(normalize_situation("támadás"), "Támadás");
        assert_eq!(normalize_situation("LÉTSZÁMFÖLÉNY"), "Létszámfölény");
        assert_eq!(normalize_situation("7:6 játék"), "7:6 játék");
        assert_eq!(normalize_situation("  Egyedi  "), "Egyedi");
        assert_eq!(normalize_situation(""), "");
    }

    #[test]
    fn test_normalizers_idempotent() {
        let inputs = [
            "", " ", "6-0", "5.1", "7:6", "tamadas", "Lerihanas", "Emberelőny", "VÉDEKEZÉS",
            "Custom tag", "  x  ", "6 . 0", "lariha-6-0",
        ];
        for raw in inputs {
            let once = normalize_situation(raw);
            assert_eq!(normalize_situation(&once), once, "situation {:?}", raw);
            let once = normalize_defense(raw);
            assert_eq!(normalize_defense(&once), once, "defense {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_play_legacy_aliases() {
        let value = json!({
            "ID": 12,
            "név": "0 Bal",
            "vedekezes": "6-0",
            "szituacio": "leriha",
            "útvonal": "assets/media/01.mp4",
            "leírás": "Kulcspontok"
        });
        let play = normalize_play(&value, 0);
        assert_eq!(play.id, "12");
        assert_eq!(play.name, "0 Bal");
        assert_eq!(play.defense, "6:0");
        assert_eq!(play.situation, "Lerohanás");
        assert_eq!(play.phase, "");
        assert_eq!(play.media, "assets/media/01.mp4");
        assert_eq!(play.description, "Kulcspontok");
    }

    #[test]
    fn test_canonical_key_wins_over_alias() {
        let value = json!({ "name": "Canonical", "nev": "Legacy", "defense": null, "ved": "5-1" });
        let play = normalize_play(&value, 3);
        assert_eq!(play.name, "Canonical");
        assert_eq!(play.defense, "5:1");
        assert_eq!(play.id, "4");
    }

    #[test]
    fn test_non_object_element_becomes_empty_play() {
        let play = normalize_play(&json!("garbage"), 1);
        assert_eq!(play.id, "2");
        assert!(play.name.is_empty());
    }

    #[test]
    fn test_collection_ids_distinct() {
        let values = vec![
            json!({ "id": 2, "name": "a" }),
            json!({ "name": "b" }),
            json!({ "id": "2", "name": "c" }),
        ];
        let plays = normalize_collection(&values);
        let ids: Vec<&str> = plays.iter().map(|p| p.id.as_str()).collect();
        // "b" synthesizes "2" from its position, colliding with "a".
        assert_eq!(ids, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&[]), "1");
        let plays = vec![Play::new("3".into()), Play::new("abc".into()), Play::new("10".into())];
        assert_eq!(next_id(&plays), "11");
    }

    #[test]
    fn test_next_id_at_numeric_limit() {
        let max = u64::MAX.to_string();
        let plays = normalize_collection(&[json!({ "id": max })]);
        assert_eq!(next_id(&plays), "1");

        let plays = normalize_collection(&[json!({ "id": max }), json!({ "id": "1" }), json!({ "id": 3 })]);
        assert_eq!(next_id(&plays), "2");
    }

    #[test]
    fn test_collection_collision_at_numeric_limit() {
        let max = u64::MAX.to_string();
        let plays = normalize_collection(&[json!({ "id": max, "name": "a" }), json!({ "id": max, "name": "b" })]);
        let ids: Vec<&str> = plays.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec![max.as_str(), "1"]);
    }
}
