// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Ringframe
//!
//! A desktop tool that frames an image with three concentric colored
//! borders, previews a reveal animation, and exports the result as a
//! transparent PNG or an animated GIF.

mod app;
mod io;
mod models;
mod render;
mod ui;

use anyhow::Result;
use app::RingframeApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Ringframe"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Ringframe",
        options,
        Box::new(|_cc| Ok(Box::new(RingframeApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
