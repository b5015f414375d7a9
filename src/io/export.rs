// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! PNG and animated GIF export.
//!
//! Both exporters treat pure white as the transparency key: every pixel that
//! exactly matches the background color becomes fully transparent, all other
//! pixels are left unchanged. Anti-aliased or resampled edges may retain
//! partial white, which then exports opaque; this is a known limitation.

use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};

use crate::render::frame::BACKGROUND;

/// Messages sent by the background GIF encoder to the UI thread.
pub enum GifExportMessage {
    /// Fraction of frames written so far, in [0, 1].
    Progress(f32),
    /// Encoding finished (or failed). Always the final message.
    Done(Result<(), String>),
}

/// Set alpha to zero on every pixel whose RGB exactly matches the
/// background key.
pub fn key_background_transparent(frame: &mut RgbaImage) {
    for pixel in frame.pixels_mut() {
        if pixel.0[0] == BACKGROUND.0[0]
            && pixel.0[1] == BACKGROUND.0[1]
            && pixel.0[2] == BACKGROUND.0[2]
        {
            pixel.0[3] = 0;
        }
    }
}

/// Write a composed frame as a PNG with the background keyed transparent.
pub fn export_png(frame: &RgbaImage, path: &Path) -> Result<()> {
    let mut keyed = frame.clone();
    key_background_transparent(&mut keyed);

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    PngEncoder::new(writer)
        .write_image(
            keyed.as_raw(),
            keyed.width(),
            keyed.height(),
            image::ExtendedColorType::Rgba8,
        )
        .context("PNG encoding failed")?;

    Ok(())
}

/// Encode a frame sequence as an infinitely looping animated GIF.
///
/// The background key is mapped to the GIF transparent index (whole-pixel
/// match only; GIF has no partial alpha). `on_progress` is called after each
/// frame with the fraction written.
pub fn encode_gif<F: FnMut(f32)>(
    frames: &[RgbaImage],
    delay_ms: u16,
    path: &Path,
    mut on_progress: F,
) -> Result<()> {
    let first = frames.first().context("no frames to encode")?;
    let width = first.width() as u16;
    let height = first.height() as u16;
    // GIF delays are in centiseconds.
    let delay_cs = (delay_ms / 10).max(1);

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut encoder = gif::Encoder::new(BufWriter::new(file), width, height, &[])
        .context("GIF encoder init failed")?;
    encoder
        .set_repeat(gif::Repeat::Infinite)
        .context("GIF set repeat failed")?;

    for (i, frame_image) in frames.iter().enumerate() {
        let mut keyed = frame_image.clone();
        key_background_transparent(&mut keyed);
        let mut raw = keyed.into_raw();

        // from_rgba_speed quantizes and maps zero-alpha pixels to the
        // frame's transparent index.
        let mut frame = gif::Frame::from_rgba_speed(width, height, &mut raw, 10);
        frame.delay = delay_cs;
        frame.dispose = gif::DisposalMethod::Background;
        encoder
            .write_frame(&frame)
            .with_context(|| format!("GIF frame {i} write failed"))?;

        on_progress((i + 1) as f32 / frames.len() as f32);
    }

    Ok(())
}

/// Encode a GIF on a background thread, reporting progress over a channel.
///
/// The receiver yields [`GifExportMessage::Progress`] updates and ends with
/// a single [`GifExportMessage::Done`].
pub fn spawn_gif_export(
    frames: Vec<RgbaImage>,
    delay_ms: u16,
    path: PathBuf,
) -> Receiver<GifExportMessage> {
    let (sender, receiver) = channel();

    std::thread::spawn(move || {
        let progress_sender = sender.clone();
        let result = encode_gif(&frames, delay_ms, &path, |fraction| {
            let _ = progress_sender.send(GifExportMessage::Progress(fraction));
        });
        let _ = sender.send(GifExportMessage::Done(result.map_err(|e| e.to_string())));
    });

    receiver
}
