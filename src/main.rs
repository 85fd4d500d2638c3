// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playbook - handball play catalog and editor
//!
//! A cross-platform desktop application for browsing a team's tactical
//! plays in a searchable gallery and editing them in a table, with the
//! collection kept as a local draft.

mod app;
mod catalog;
mod config;
mod error;
mod io;
mod models;
mod normalize;
mod ui;
mod util;

use anyhow::Result;
use app::PlaybookApp;
use config::Config;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = Config::from_env();
    log::info!(
        "Data file: {}, draft: {}/{}",
        config.data_file.display(),
        config.draft_dir.display(),
        config.draft_key
    );

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Playbook"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Playbook",
        options,
        Box::new(|_cc| Ok(Box::new(PlaybookApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
