// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Read-only play gallery.
//!
//! This module renders the filter bar (free-text query plus one combo box
//! per tag field) and the filtered list of play cards with media previews.

use crate::catalog::{self, FieldFilters, MediaKind, TagField};
use crate::io::media;
use crate::models::play::Play;
use std::collections::HashMap;
use std::path::PathBuf;

const PREVIEW_WIDTH: f32 = 320.0;

/// Lazily loaded preview textures, keyed by media path.
pub struct PreviewCache {
    media_root: PathBuf,
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl PreviewCache {
    pub fn new(media_root: PathBuf) -> Self {
        Self {
            media_root,
            textures: HashMap::new(),
        }
    }

    /// Texture for an image path, loading it on first use. Failed loads are
    /// remembered so they are not retried every frame.
    fn get(&mut self, ctx: &egui::Context, path: &str) -> Option<&egui::TextureHandle> {
        if !self.textures.contains_key(path) {
            let resolved = media::resolve(&self.media_root, path);
            let texture = match media::load_image(&resolved) {
                Ok(img) => {
                    let size = [img.width as usize, img.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &img.pixels);
                    Some(ctx.load_texture(path, color_image, egui::TextureOptions::LINEAR))
                }
                Err(e) => {
                    log::warn!("No preview for {}: {:#}", resolved.display(), e);
                    None
                }
            };
            self.textures.insert(path.to_string(), texture);
        }
        self.textures.get(path).and_then(Option::as_ref)
    }

    /// Forget all previews, e.g. after the collection was replaced.
    pub fn clear(&mut self) {
        self.textures.clear();
    }
}

/// Display the filter bar and the filtered play list.
pub fn show(
    ui: &mut egui::Ui,
    plays: &[Play],
    query: &mut String,
    filters: &mut FieldFilters,
    previews: &mut PreviewCache,
) {
    filter_bar(ui, plays, query, filters);
    ui.separator();

    let visible = catalog::filter(plays, query, filters);
    ui.label(
        egui::RichText::new(format!("{} / {} plays", visible.len(), plays.len()))
            .weak(),
    );

    if visible.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("No plays match the current filters")
                    .color(egui::Color32::from_gray(150)),
            );
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for play in visible {
                card(ui, play, previews);
                ui.add_space(8.0);
            }
        });
}

fn filter_bar(ui: &mut egui::Ui, plays: &[Play], query: &mut String, filters: &mut FieldFilters) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(query)
                .hint_text("name, tag or description")
                .desired_width(220.0),
        );

        for field in [TagField::Defense, TagField::Situation, TagField::Phase] {
            ui.separator();
            ui.label(format!("{}:", field.label()));
            let options =
                catalog::build_filter_vocabulary(plays, field, field.canonical_order());
            let selected = filters.get_mut(field);
            let selected_text = if selected.is_empty() {
                "All".to_string()
            } else {
                selected.clone()
            };
            egui::ComboBox::from_id_source(("filter", field.label()))
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(selected, String::new(), "All");
                    for option in options {
                        ui.selectable_value(selected, option.clone(), option);
                    }
                });
        }

        if !filters.is_empty() || !query.is_empty() {
            ui.separator();
            if ui.button("Clear").clicked() {
                query.clear();
                *filters = FieldFilters::default();
            }
        }
    });
}

fn card(ui: &mut egui::Ui, play: &Play, previews: &mut PreviewCache) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_top(|ui| {
            media_box(ui, play, previews);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.heading(play.display_name());
                    if !play.defense.is_empty() {
                        ui.label(egui::RichText::new(&play.defense).strong());
                    }
                });
                ui.horizontal_wrapped(|ui| {
                    for chip in play.chips() {
                        ui.label(
                            egui::RichText::new(chip)
                                .small()
                                .background_color(egui::Color32::from_gray(60))
                                .color(egui::Color32::from_gray(220)),
                        );
                    }
                });
                if !play.description.is_empty() {
                    ui.add_space(4.0);
                    ui.label(play.description.as_str());
                }
            });
        });
    });
}

fn media_box(ui: &mut egui::Ui, play: &Play, previews: &mut PreviewCache) {
    let placeholder = |ui: &mut egui::Ui, text: String| {
        ui.add_sized(
            [PREVIEW_WIDTH, PREVIEW_WIDTH * 9.0 / 16.0],
            egui::Label::new(egui::RichText::new(text).color(egui::Color32::from_gray(130))),
        );
    };

    match MediaKind::from_path(&play.media) {
        MediaKind::None => placeholder(ui, "Media goes here".to_string()),
        MediaKind::Video => placeholder(ui, format!("▶ {}", play.media)),
        MediaKind::Image => match previews.get(ui.ctx(), &play.media) {
            Some(texture) => {
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                        .max_width(PREVIEW_WIDTH),
                );
            }
            None => placeholder(ui, format!("Missing: {}", play.media)),
        },
    }
}
