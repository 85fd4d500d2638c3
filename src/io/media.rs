// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading for gallery previews.
//!
//! Play media paths are relative to the data directory. Images are decoded
//! into RGBA pixels suitable for an egui texture; videos are only labelled.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Longest edge of a gallery preview, in pixels.
pub const PREVIEW_MAX_EDGE: u32 = 480;

/// Decoded image ready to be uploaded as a texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Resolve a play's media path against the base directory.
pub fn resolve(base_dir: &Path, media: &str) -> PathBuf {
    let media = Path::new(media.trim());
    if media.is_absolute() {
        media.to_path_buf()
    } else {
        base_dir.join(media)
    }
}

/// Load an image and shrink it to preview size.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path).with_context(|| format!("opening {}", path.display()))?;
    let img = if img.width() > PREVIEW_MAX_EDGE || img.height() > PREVIEW_MAX_EDGE {
        img.thumbnail(PREVIEW_MAX_EDGE, PREVIEW_MAX_EDGE)
    } else {
        img
    };
    let rgba = img.to_rgba8();

    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}
