// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session collection management.
//!
//! [`PlayStore`] owns the in-memory collection for the running session.
//! The application controller holds it and passes slices to the catalog
//! and the draft store; nothing else keeps a copy.

use super::play::{Play, PlayField};
use crate::normalize::{
    next_id, normalize_defense, normalize_phase, normalize_plays, normalize_situation,
};

/// The mutable, ordered play collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayStore {
    plays: Vec<Play>,
}

impl PlayStore {
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Replace the whole collection (bootstrap, import, reset).
    pub fn replace_all(&mut self, plays: Vec<Play>) {
        self.plays = normalize_plays(plays);
    }

    /// Prepend an empty play and return its index.
    pub fn add(&mut self) -> usize {
        let play = Play::new(next_id(&self.plays));
        log::info!("Added play {}", play.id);
        self.plays.insert(0, play);
        0
    }

    /// Insert a copy of the play at `idx` right after it, with a fresh id.
    pub fn duplicate(&mut self, idx: usize) -> Option<usize> {
        let mut copy = self.plays.get(idx)?.clone();
        copy.id = next_id(&self.plays);
        log::info!("Duplicated play {} as {}", self.plays[idx].id, copy.id);
        self.plays.insert(idx + 1, copy);
        Some(idx + 1)
    }

    /// Position of the play with `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.plays.iter().position(|p| p.id == id)
    }

    /// Remove the play with `id`. Ids stay valid while rows move, so this is
    /// what confirmed deletes use.
    pub fn delete_by_id(&mut self, id: &str) -> Option<Play> {
        let idx = self.position(id)?;
        let removed = self.plays.remove(idx);
        log::info!("Deleted play {}, total: {}", removed.id, self.plays.len());
        Some(removed)
    }

    /// Set one field of the play at `idx`, re-normalizing tag fields.
    ///
    /// Returns whether the stored value changed.
    pub fn set_field(&mut self, idx: usize, field: PlayField, value: &str) -> bool {
        let Some(play) = self.plays.get_mut(idx) else {
            return false;
        };
        let (slot, value) = match field {
            PlayField::Name => (&mut play.name, value.to_string()),
            PlayField::Defense => (&mut play.defense, normalize_defense(value)),
            PlayField::Situation => (&mut play.situation, normalize_situation(value)),
            PlayField::Phase => (&mut play.phase, normalize_phase(value)),
            PlayField::Media => (&mut play.media, value.to_string()),
            PlayField::Description => (&mut play.description, value.to_string()),
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }
}
