// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns all mutable state (parameters, colors, source image,
//! running animation) and re-derives geometry and re-renders the preview
//! whenever any of it changes. Geometry is never cached across parameter
//! changes, so the displayed and exported result always reflects the
//! current state.

use crate::io::export::{self, GifExportMessage};
use crate::io::media::{self, LoadedImage};
use crate::models::color::BorderColors;
use crate::models::params::{LayoutParams, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::render::frame::{FrameRenderer, FRAME_DELAY_MS};
use crate::render::layout::compute_layout;
use crate::ui::{canvas, toolbar};
use image::RgbaImage;
use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

/// One running reveal animation: the eagerly generated, immutable frame
/// sequence and its start time. Dropping this stops playback; egui repaint
/// requests are one-shot, so no scheduled callback can outlive it.
struct Playback {
    frames: Vec<RgbaImage>,
    started: Instant,
}

impl Playback {
    /// Frame to show right now, cycling through the sequence indefinitely.
    fn current_frame(&self) -> &RgbaImage {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        let index = (elapsed_ms / FRAME_DELAY_MS) as usize % self.frames.len();
        &self.frames[index]
    }
}

/// Key identifying which state the displayed static preview was rendered
/// from. Re-render whenever the live state no longer matches.
type RenderKey = (LayoutParams, BorderColors, u64);

/// Main application state.
pub struct RingframeApp {
    /// Slider-controlled border width and gutter size
    params: LayoutParams,

    /// Ordered ring colors, outermost first
    colors: BorderColors,

    /// Decoded source image, replaced on every upload
    source: Option<LoadedImage>,

    /// Bumped when a new image replaces the old one
    image_generation: u64,

    /// State key of the currently displayed static preview
    rendered_key: Option<RenderKey>,

    /// Composed frame uploaded as an egui texture
    preview_texture: Option<egui::TextureHandle>,

    /// Running animation, if any
    playback: Option<Playback>,

    /// Swatch index currently being dragged
    dragged_swatch: Option<usize>,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<LoadedImage, String>>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Receiver for the background GIF encoder
    gif_export: Option<Receiver<GifExportMessage>>,

    /// Fraction of GIF frames encoded so far
    export_progress: Option<f32>,
}

impl Default for RingframeApp {
    fn default() -> Self {
        Self::new()
    }
}

impl RingframeApp {
    /// Create a new Ringframe application instance.
    pub fn new() -> Self {
        Self {
            params: LayoutParams::default(),
            colors: BorderColors::default(),
            source: None,
            image_generation: 0,
            rendered_key: None,
            preview_texture: None,
            playback: None,
            dragged_swatch: None,
            image_loader: None,
            loading_message: None,
            gif_export: None,
            export_progress: None,
        }
    }

    /// Open the native file picker and start loading the chosen image.
    fn open_image_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(
                "Images",
                &["jpg", "jpeg", "png", "bmp", "gif", "webp", "tiff", "tif"],
            )
            .pick_file()
        {
            self.load_image_file(path);
        }
    }

    /// Load an image file on a background thread.
    fn load_image_file(&mut self, path: std::path::PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading image...".to_string());

        std::thread::spawn(move || {
            let result = media::load_image(&path)
                .map_err(|e| format!("Failed to load image: {e}"));
            if let Ok(loaded) = &result {
                log::info!(
                    "Loaded image: {} ({}x{})",
                    path.display(),
                    loaded.width,
                    loaded.height
                );
            }
            let _ = sender.send(result);
        });
    }

    /// Build a renderer for the current state. `None` without an image.
    fn make_renderer(&self) -> Option<FrameRenderer> {
        let source = self.source.as_ref()?;
        let layout = compute_layout(
            source.width,
            source.height,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            self.params.clamped(),
            &self.colors,
        );
        Some(FrameRenderer::new(
            Some(&source.image),
            layout,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
        ))
    }

    /// Upload a composed frame into the preview texture.
    fn set_preview(
        texture_slot: &mut Option<egui::TextureHandle>,
        ctx: &egui::Context,
        frame: &RgbaImage,
    ) {
        let size = [frame.width() as usize, frame.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, frame.as_raw());
        match texture_slot {
            Some(texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
            None => {
                *texture_slot =
                    Some(ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR));
            }
        }
    }

    /// Start the reveal animation: generate all frames eagerly, then play.
    fn start_animation(&mut self) {
        if let Some(renderer) = self.make_renderer() {
            let frames = renderer.render_sequence();
            log::info!("Generated {} animation frames", frames.len());
            self.playback = Some(Playback {
                frames,
                started: Instant::now(),
            });
        }
    }

    /// Stop playback and fall back to the static preview.
    fn stop_animation(&mut self) {
        self.playback = None;
        // Force a static re-render on the next update.
        self.rendered_key = None;
    }

    fn toggle_animation(&mut self) {
        if self.playback.is_some() {
            self.stop_animation();
        } else {
            self.start_animation();
        }
    }

    /// Export the static composition as a transparent PNG.
    fn export_png_dialog(&self) {
        let Some(renderer) = self.make_renderer() else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("bordered-image.png")
            .save_file()
        {
            let frame = renderer.render_static();
            match export::export_png(&frame, &path) {
                Ok(()) => log::info!("Exported PNG to {}", path.display()),
                Err(e) => log::error!("Failed to export PNG: {e}"),
            }
        }
    }

    /// Hand the current animation frames to the background GIF encoder.
    fn export_gif_dialog(&mut self) {
        let Some(playback) = &self.playback else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("GIF", &["gif"])
            .set_file_name("animated-border.gif")
            .save_file()
        {
            log::info!("Encoding GIF to {}", path.display());
            self.gif_export = Some(export::spawn_gif_export(
                playback.frames.clone(),
                FRAME_DELAY_MS as u16,
                path,
            ));
            self.export_progress = Some(0.0);
        }
    }

    /// Poll the background image loader, if one is running.
    fn poll_image_loader(&mut self) {
        let result = self
            .image_loader
            .as_ref()
            .and_then(|receiver| receiver.try_recv().ok());
        let Some(result) = result else {
            return;
        };

        self.image_loader = None;
        self.loading_message = None;

        match result {
            Ok(loaded) => {
                self.source = Some(loaded);
                self.image_generation += 1;
                // New image invalidates any running animation and preview.
                self.playback = None;
                self.rendered_key = None;
                log::info!("Image loaded successfully");
            }
            Err(e) => {
                // Undecodable selection: log and keep the previous state.
                log::error!("{e}");
            }
        }
    }

    /// Poll the background GIF encoder, if one is running.
    fn poll_gif_export(&mut self) {
        let Some(receiver) = &self.gif_export else {
            return;
        };
        let messages: Vec<GifExportMessage> = receiver.try_iter().collect();

        for message in messages {
            match message {
                GifExportMessage::Progress(fraction) => {
                    self.export_progress = Some(fraction);
                }
                GifExportMessage::Done(Ok(())) => {
                    log::info!("GIF export finished");
                    self.gif_export = None;
                    self.export_progress = None;
                }
                GifExportMessage::Done(Err(e)) => {
                    // Leave the UI usable so the export can be retried.
                    log::error!("GIF export failed: {e}");
                    self.gif_export = None;
                    self.export_progress = None;
                }
            }
        }
    }
}

impl eframe::App for RingframeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_image_loader();
        self.poll_gif_export();

        // Keep polling while background work is pending.
        if self.loading_message.is_some() || self.gif_export.is_some() {
            ctx.request_repaint();
        }

        // Toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                if let Some(progress) = self.export_progress {
                    ui.add(
                        egui::ProgressBar::new(progress)
                            .desired_width(f32::INFINITY)
                            .show_percentage(),
                    );
                }
                toolbar::show(
                    ui,
                    &mut self.params,
                    &self.colors,
                    &mut self.dragged_swatch,
                    self.source.is_some(),
                    self.playback.is_some(),
                    self.gif_export.is_some(),
                )
            })
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::OpenImage => self.open_image_dialog(),
            toolbar::ToolbarAction::RandomizeColors => {
                self.colors.randomize();
                log::info!("Randomized colors");
            }
            toolbar::ToolbarAction::ReorderColors { from, to } => {
                self.colors.reorder(from, to);
                log::info!("Moved color {from} to position {to}");
            }
            toolbar::ToolbarAction::ToggleAnimation => self.toggle_animation(),
            toolbar::ToolbarAction::ExportPng => self.export_png_dialog(),
            toolbar::ToolbarAction::ExportGif => self.export_gif_dialog(),
            toolbar::ToolbarAction::None => {}
        }

        // Drive the preview: cycle the animation, or re-render the static
        // composition when parameters, colors or the image changed.
        if let Some(playback) = &self.playback {
            let frame = playback.current_frame();
            Self::set_preview(&mut self.preview_texture, ctx, frame);
            ctx.request_repaint_after(Duration::from_millis(FRAME_DELAY_MS));
        } else if self.source.is_some() {
            let key = (
                self.params.clamped(),
                self.colors,
                self.image_generation,
            );
            if self.rendered_key != Some(key) {
                if let Some(renderer) = self.make_renderer() {
                    let frame = renderer.render_static();
                    Self::set_preview(&mut self.preview_texture, ctx, &frame);
                    self.rendered_key = Some(key);
                }
            }
        }

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(message) = &self.loading_message {
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
                    canvas::CanvasAction::None
                } else {
                    canvas::show(
                        ui,
                        &self.preview_texture,
                        self.source.is_some(),
                        self.playback.is_some(),
                    )
                }
            })
            .inner;

        match canvas_action {
            canvas::CanvasAction::OpenImage => self.open_image_dialog(),
            canvas::CanvasAction::None => {}
        }
    }
}
