// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! Decodes a user-selected raster file into RGBA pixels suitable both for
//! display as an egui texture and as the blit source for the frame renderer.

use anyhow::{Context, Result};
use image::RgbaImage;
use std::path::Path;

/// A decoded source image. Replaced wholesale when a new file is opened,
/// never mutated.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub image: RgbaImage,
}

/// Decode any raster format supported by the `image` crate to RGBA.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let image = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?
        .to_rgba8();

    Ok(LoadedImage {
        width: image.width(),
        height: image.height(),
        image,
    })
}
