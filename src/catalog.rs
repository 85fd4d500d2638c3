// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog queries over a play collection.
//!
//! Filtering is a linear scan over the caller's snapshot. Collections are
//! tens to low hundreds of plays, so there is no index.

use crate::models::play::{Play, DEFENSES, SITUATIONS};
use crate::util::text::locale_compare;

/// Tag fields that can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Defense,
    Situation,
    Phase,
}

impl TagField {
    /// Value of this field on a play.
    pub fn value(self, play: &Play) -> &str {
        match self {
            TagField::Defense => &play.defense,
            TagField::Situation => &play.situation,
            TagField::Phase => &play.phase,
        }
    }

    /// Canonical display order for this field's values.
    pub fn canonical_order(self) -> &'static [&'static str] {
        match self {
            TagField::Defense => &DEFENSES,
            TagField::Situation | TagField::Phase => &SITUATIONS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TagField::Defense => "Defense",
            TagField::Situation => "Situation",
            TagField::Phase => "Phase",
        }
    }
}

/// Exact-match constraints per tag field. Empty means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFilters {
    pub defense: String,
    pub situation: String,
    pub phase: String,
}

impl FieldFilters {
    pub fn get(&self, field: TagField) -> &str {
        match field {
            TagField::Defense => &self.defense,
            TagField::Situation => &self.situation,
            TagField::Phase => &self.phase,
        }
    }

    pub fn get_mut(&mut self, field: TagField) -> &mut String {
        match field {
            TagField::Defense => &mut self.defense,
            TagField::Situation => &mut self.situation,
            TagField::Phase => &mut self.phase,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.defense.is_empty() && self.situation.is_empty() && self.phase.is_empty()
    }
}

const TAG_FIELDS: [TagField; 3] = [TagField::Defense, TagField::Situation, TagField::Phase];

/// Distinct non-empty values of `field`, canonical values first in
/// `canonical_order`, then the rest in locale order.
pub fn build_filter_vocabulary(
    records: &[Play],
    field: TagField,
    canonical_order: &[&str],
) -> Vec<String> {
    let mut present: Vec<&str> = records
        .iter()
        .map(|p| field.value(p))
        .filter(|v| !v.is_empty())
        .collect();
    present.sort_unstable();
    present.dedup();

    let mut vocabulary: Vec<String> = canonical_order
        .iter()
        .filter(|c| present.binary_search(*c).is_ok())
        .map(|c| c.to_string())
        .collect();

    let mut extras: Vec<&str> = present
        .into_iter()
        .filter(|v| !canonical_order.contains(v))
        .collect();
    extras.sort_by(|a, b| locale_compare(a, b));

    vocabulary.extend(extras.into_iter().map(str::to_string));
    vocabulary
}

/// Whether a play passes the field filters and the free-text query.
pub fn matches(record: &Play, query: &str, filters: &FieldFilters) -> bool {
    let filters_pass = TAG_FIELDS.iter().all(|&field| {
        let wanted = filters.get(field);
        wanted.is_empty() || field.value(record) == wanted
    });
    if !filters_pass {
        return false;
    }

    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let haystack = [
        record.name.as_str(),
        record.defense.as_str(),
        record.situation.as_str(),
        record.phase.as_str(),
        record.description.as_str(),
    ]
    .into_iter()
    .filter(|v| !v.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase();

    haystack.contains(&query.to_lowercase())
}

/// Plays matching the query, in their original order.
pub fn filter<'a>(records: &'a [Play], query: &str, filters: &FieldFilters) -> Vec<&'a Play> {
    records
        .iter()
        .filter(|p| matches(p, query, filters))
        .collect()
}

/// How the gallery should present a play's media path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    None,
    Image,
    Video,
}

impl MediaKind {
    /// Classify a media path by suffix. Does not touch the filesystem.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim();
        if path.is_empty() {
            return MediaKind::None;
        }
        let lower = path.to_lowercase();
        if [".mp4", ".webm", ".ogg"].iter().any(|ext| lower.ends_with(ext)) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}
