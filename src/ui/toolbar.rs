// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar and view selection UI.
//!
//! This module provides the toolbar for switching between the gallery and
//! the editor, and the editor's collection-level actions.

use crate::app::View;

/// Collection-level action requested from the toolbar.
pub enum ToolbarAction {
    None,
    Add,
    Import,
    Export,
    Reset,
}

/// Display the toolbar with view selection and editor actions.
pub fn show(ui: &mut egui::Ui, current_view: &mut View, busy: bool) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.selectable_label(*current_view == View::Gallery, "▦ Gallery").clicked() {
            *current_view = View::Gallery;
        }
        if ui.selectable_label(*current_view == View::Editor, "✏ Editor").clicked() {
            *current_view = View::Editor;
        }

        ui.separator();

        match current_view {
            View::Gallery => {
                ui.label(
                    egui::RichText::new("Search and filter the playbook")
                        .italics()
                        .weak(),
                );
            }
            View::Editor => {
                ui.add_enabled_ui(!busy, |ui| {
                    if ui.button("➕ Add play").clicked() {
                        action = ToolbarAction::Add;
                    }
                    if ui.button("Import...").clicked() {
                        action = ToolbarAction::Import;
                    }
                    if ui.button("Export plays.json...").clicked() {
                        action = ToolbarAction::Export;
                    }
                    ui.separator();
                    if ui.button("Reset draft").clicked() {
                        action = ToolbarAction::Reset;
                    }
                });
            }
        }
    });

    action
}
