// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the application controller. It owns the session's
//! [`PlayStore`] and the draft slot, routes gallery/editor interaction to
//! them, and persists the full collection after every change.

use crate::catalog::FieldFilters;
use crate::config::Config;
use crate::error::{PlaybookError, Result};
use crate::io::draft::{bootstrap, Bootstrap, DraftStore, FileStore, Origin};
use crate::io::serialization::{self, EXPORT_FILE_NAME};
use crate::io::source::{FileSource, PlaySource};
use crate::models::play::{Play, PlayField};
use crate::models::store::PlayStore;
use crate::ui::{editor, gallery, toolbar};
use std::sync::mpsc::{channel, Receiver, TryRecvError};

/// Which page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Gallery,
    Editor,
}

/// Modal confirmation waiting for the user. Deletes hold the play id, since
/// rows can move while the dialog is open.
enum Confirm {
    Delete(String),
    Reset,
}

/// Message shown in the status bar or as a blocking alert.
struct Notice {
    text: String,
    is_error: bool,
}

/// Main application state.
pub struct PlaybookApp {
    config: Config,

    /// Currently selected page
    current_view: View,

    /// The session's play collection
    store: PlayStore,

    /// Persistent draft slot
    drafts: DraftStore<FileStore>,

    /// Gallery search text
    query: String,

    /// Gallery tag filters
    filters: FieldFilters,

    /// Gallery media previews
    previews: gallery::PreviewCache,

    /// Receiver for background bootstrapping
    loader: Option<Receiver<Bootstrap>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Pending confirmation dialog
    confirm: Option<Confirm>,

    /// Blocking error alert
    alert: Option<String>,

    /// Last status bar message
    status: Option<Notice>,
}

impl Default for PlaybookApp {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl PlaybookApp {
    /// Create the application and start bootstrapping the collection.
    pub fn new(config: Config) -> Self {
        let drafts = DraftStore::new(FileStore::new(&config.draft_dir), config.draft_key.clone());
        let previews = gallery::PreviewCache::new(config.media_root.clone());

        let mut app = Self {
            config,
            current_view: View::Gallery,
            store: PlayStore::default(),
            drafts,
            query: String::new(),
            filters: FieldFilters::default(),
            previews,
            loader: None,
            loading_message: None,
            confirm: None,
            alert: None,
            status: None,
        };

        app.start_bootstrap();
        app
    }

    /// A load is in flight. Import, Export and Reset wait for it.
    fn busy(&self) -> bool {
        self.loader.is_some()
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(Notice {
            text: text.into(),
            is_error: false,
        });
    }

    fn set_error(&mut self, error: &PlaybookError) {
        self.status = Some(Notice {
            text: error.to_string(),
            is_error: true,
        });
    }

    /// Load the draft, or seed it from the fallback file (asynchronously).
    fn start_bootstrap(&mut self) {
        let (sender, receiver) = channel();
        self.loader = Some(receiver);

        let source = FileSource::new(&self.config.data_file);
        let mut drafts = self.drafts.clone();
        self.loading_message = Some(format!("Loading {}...", source.describe()));

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let _ = sender.send(bootstrap(&mut drafts, &source));
        });
    }

    /// Persist the collection after a change. Failures are shown but the
    /// in-memory collection stays as it is.
    fn persist(&mut self) {
        if let Err(e) = self.drafts.save_draft(self.store.plays()) {
            self.set_error(&e);
        }
    }

    /// Receive a finished bootstrap and make it the session's collection.
    fn poll_loader(&mut self) {
        let Some(ref receiver) = self.loader else {
            return;
        };
        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                log::error!("Loader thread exited without a result");
                Bootstrap {
                    plays: Vec::new(),
                    origin: Origin::Empty,
                    notice: Some(PlaybookError::SourceUnavailable {
                        path: self.config.data_file.clone(),
                        reason: "loading stopped unexpectedly".to_string(),
                    }),
                }
            }
        };
        self.loader = None;
        self.loading_message = None;

        self.store.replace_all(result.plays);
        self.previews.clear();

        match (result.origin, result.notice) {
            (_, Some(e @ PlaybookError::SourceUnavailable { .. })) => {
                self.alert = Some(format!(
                    "{}\n\nStarting with an empty playbook. Check that the data file exists.",
                    e
                ));
                self.set_error(&e);
            }
            (_, Some(e)) => self.set_error(&e),
            (Origin::Draft, None) => {
                self.set_status(format!("Loaded draft with {} plays", self.store.len()))
            }
            (Origin::Fallback, None) => {
                self.set_status(format!("Loaded {} plays from the data file", self.store.len()))
            }
            (Origin::Empty, None) => {}
        }
    }

    /// Export the collection to a file chosen by the user.
    fn export_plays(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .add_filter("YAML", &["yaml", "yml"])
            .set_file_name(EXPORT_FILE_NAME)
            .save_file()
        else {
            return;
        };

        match serialization::export_file(self.store.plays(), &path) {
            Ok(()) => {
                log::info!("Exported {} plays to {}", self.store.len(), path.display());
                self.set_status(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                log::error!("{}", e);
                self.set_error(&e);
            }
        }
    }

    /// Replace the collection with a file chosen by the user.
    fn import_plays(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Plays", &["json", "yaml", "yml"])
            .pick_file()
        else {
            return;
        };

        log::info!("Importing {}", path.display());
        self.apply_import(serialization::import_file(&path));
    }

    /// Adopt an imported collection and persist it. A failed import leaves
    /// the collection and the draft untouched.
    fn apply_import(&mut self, imported: Result<Vec<Play>>) {
        match imported {
            Ok(plays) => {
                log::info!("Imported {} plays", plays.len());
                self.store.replace_all(plays);
                self.previews.clear();
                self.set_status(format!("Imported {} plays", self.store.len()));
                self.persist();
            }
            Err(e) => {
                log::warn!("{}", e);
                self.alert = Some(e.to_string());
            }
        }
    }

    /// Clear the draft and start over from the fallback file.
    fn reset_draft(&mut self) {
        if let Err(e) = self.drafts.reset_draft() {
            self.set_error(&e);
            return;
        }
        self.store.replace_all(Vec::new());
        self.previews.clear();
        self.start_bootstrap();
    }

    fn apply_editor_action(&mut self, action: editor::EditorAction) {
        match action {
            editor::EditorAction::Edit(idx, field, value) => {
                if self.store.set_field(idx, field, &value) {
                    if field == PlayField::Media {
                        self.previews.clear();
                    }
                    self.persist();
                }
            }
            editor::EditorAction::Duplicate(idx) => {
                if self.store.duplicate(idx).is_some() {
                    self.persist();
                }
            }
            editor::EditorAction::Delete(idx) => {
                if let Some(play) = self.store.plays().get(idx) {
                    self.confirm = Some(Confirm::Delete(play.id.clone()));
                }
            }
            editor::EditorAction::None => {}
        }
    }

    /// Show the pending confirmation, if any, and apply the answer.
    fn show_confirm(&mut self, ctx: &egui::Context) {
        let Some(confirm) = self.confirm.as_ref() else {
            return;
        };
        let question = match confirm {
            Confirm::Delete(id) => {
                let name = self
                    .store
                    .position(id)
                    .map(|idx| self.store.plays()[idx].display_name().to_string())
                    .unwrap_or_default();
                format!("Delete \"{}\"?", name)
            }
            Confirm::Reset => {
                "Discard the locally stored draft and reload the data file?".to_string()
            }
        };

        let mut answer = None;
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(question);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(false);
                    }
                });
            });

        self.answer_confirm(answer);
    }

    /// Apply the user's answer to the pending confirmation. `None` keeps it
    /// open.
    fn answer_confirm(&mut self, answer: Option<bool>) {
        match (answer, self.confirm.take()) {
            (Some(true), Some(Confirm::Delete(id))) => {
                if self.store.delete_by_id(&id).is_some() {
                    self.persist();
                }
            }
            (Some(true), Some(Confirm::Reset)) => self.reset_draft(),
            (None, pending) => self.confirm = pending,
            (Some(_), _) => {}
        }
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(ref text) = self.alert else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(text).color(egui::Color32::from_rgb(230, 90, 90)));
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.alert = None;
        }
    }
}

impl eframe::App for PlaybookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed fallback loading
        self.poll_loader();

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let busy = self.busy();
                    if ui.add_enabled(!busy, egui::Button::new("Import Plays...")).clicked() {
                        self.import_plays();
                        ui.close_menu();
                    }
                    if ui.add_enabled(!busy, egui::Button::new("Export Plays...")).clicked() {
                        self.export_plays();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.add_enabled(!busy, egui::Button::new("Reset Draft...")).clicked() {
                        self.confirm = Some(Confirm::Reset);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Gallery").clicked() {
                        self.current_view = View::Gallery;
                        ui.close_menu();
                    }
                    if ui.button("Editor").clicked() {
                        self.current_view = View::Editor;
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar
        let busy = self.busy();
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.current_view, busy)
            })
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::Add => {
                self.store.add();
                self.persist();
            }
            toolbar::ToolbarAction::Import => self.import_plays(),
            toolbar::ToolbarAction::Export => self.export_plays(),
            toolbar::ToolbarAction::Reset => self.confirm = Some(Confirm::Reset),
            toolbar::ToolbarAction::None => {}
        }

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.store.is_empty() {
                    ui.label("Empty playbook");
                } else {
                    ui.label(format!("{} plays", self.store.len()));
                }
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("Draft: {}", self.config.draft_dir.display())).weak(),
                );
                if let Some(ref notice) = self.status {
                    ui.separator();
                    let text = egui::RichText::new(&notice.text);
                    ui.label(if notice.is_error {
                        text.color(egui::Color32::from_rgb(230, 90, 90))
                    } else {
                        text
                    });
                }
            });
        });

        // Main area (center)
        let editor_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                // Show loading overlay if loading
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                        });
                    });
                    return editor::EditorAction::None;
                }

                match self.current_view {
                    View::Gallery => {
                        gallery::show(
                            ui,
                            self.store.plays(),
                            &mut self.query,
                            &mut self.filters,
                            &mut self.previews,
                        );
                        editor::EditorAction::None
                    }
                    View::Editor => editor::show(ui, self.store.plays()),
                }
            })
            .inner;

        // Handle editor actions
        self.apply_editor_action(editor_action);

        self.show_confirm(ctx);
        self.show_alert(ctx);
    }
}
