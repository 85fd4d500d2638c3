// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Table editor for the play collection.
//!
//! Each row edits one play in place. The editor never mutates the
//! collection itself; it reports what the user did and the application
//! applies it to the store and persists the draft.

use crate::catalog::TagField;
use crate::models::play::{Play, PlayField};

/// Result of editor interaction.
pub enum EditorAction {
    None,
    Edit(usize, PlayField, String),
    Duplicate(usize),
    Delete(usize),
}

/// Display the editor table.
pub fn show(ui: &mut egui::Ui, plays: &[Play]) -> EditorAction {
    let mut action = EditorAction::None;

    if plays.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("No plays yet. Use \"Add play\" or import a plays.json file.")
                    .color(egui::Color32::from_gray(150)),
            );
        });
        return action;
    }

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("plays_table")
                .striped(true)
                .num_columns(8)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    for header in ["#", "Name", "Defense", "Situation", "Phase", "Media", "Description", ""] {
                        ui.label(egui::RichText::new(header).strong());
                    }
                    ui.end_row();

                    for (i, play) in plays.iter().enumerate() {
                        if let Some(row_action) = row(ui, i, play) {
                            action = row_action;
                        }
                        ui.end_row();
                    }
                });
        });

    action
}

/// Id of one editor widget for the play with `play_id`.
fn widget_id(column: &str, play_id: &str) -> egui::Id {
    egui::Id::new(("plays_table", column, play_id))
}

/// One editor row. Widget ids are keyed by the play id so focus and cursor
/// state follow the play when rows move; `i` only addresses the action.
fn row(ui: &mut egui::Ui, i: usize, play: &Play) -> Option<EditorAction> {
    let mut action = None;

    ui.label(egui::RichText::new(&play.id).monospace().weak());

    let mut name = play.name.clone();
    if ui
        .add(
            egui::TextEdit::singleline(&mut name)
                .id(widget_id("name", &play.id))
                .hint_text("e.g. 0 Left")
                .desired_width(160.0),
        )
        .changed()
    {
        action = Some(EditorAction::Edit(i, PlayField::Name, name));
    }

    for (field, play_field) in [
        (TagField::Defense, PlayField::Defense),
        (TagField::Situation, PlayField::Situation),
        (TagField::Phase, PlayField::Phase),
    ] {
        if let Some(value) = tag_select(ui, &play.id, field, field.value(play)) {
            action = Some(EditorAction::Edit(i, play_field, value));
        }
    }

    let mut media = play.media.clone();
    if ui
        .add(
            egui::TextEdit::singleline(&mut media)
                .id(widget_id("media", &play.id))
                .hint_text("assets/media/01_play.mp4")
                .desired_width(200.0),
        )
        .changed()
    {
        action = Some(EditorAction::Edit(i, PlayField::Media, media));
    }

    let mut description = play.description.clone();
    if ui
        .add(
            egui::TextEdit::multiline(&mut description)
                .id(widget_id("description", &play.id))
                .hint_text("Key points...")
                .desired_rows(2)
                .desired_width(260.0),
        )
        .changed()
    {
        action = Some(EditorAction::Edit(i, PlayField::Description, description));
    }

    ui.horizontal(|ui| {
        if ui.button("Duplicate").clicked() {
            action = Some(EditorAction::Duplicate(i));
        }
        if ui
            .button(egui::RichText::new("Delete").color(egui::Color32::from_rgb(220, 80, 80)))
            .clicked()
        {
            action = Some(EditorAction::Delete(i));
        }
    });

    action
}

/// Combo box over the canonical vocabulary. A value outside the vocabulary
/// stays selectable so editing never silently drops it.
fn tag_select(ui: &mut egui::Ui, id: &str, field: TagField, current: &str) -> Option<String> {
    let mut selected = current.to_string();
    let mut options: Vec<&str> = field.canonical_order().to_vec();
    if !current.is_empty() && !options.contains(&current) {
        options.push(current);
    }

    let selected_text = if current.is_empty() { "—" } else { current };
    egui::ComboBox::from_id_source(widget_id(field.label(), id))
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, String::new(), "—");
            for option in options {
                ui.selectable_value(&mut selected, option.to_string(), option);
            }
        });

    (selected != current).then_some(selected)
}
