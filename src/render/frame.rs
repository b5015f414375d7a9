// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Frame renderer and reveal animator.
//!
//! Rasterizes one composed frame from the layout geometry: white background,
//! the three ring strokes, image on top. In animated mode each ring is
//! clipped to a square mask growing outward from the canvas center, staggered
//! so the innermost ring appears first.

use image::{imageops, Rgba, RgbaImage};

use crate::models::color::{Rgb, RING_COUNT};
use crate::render::layout::{Layout, Rect};

/// Number of frames in one animation run.
pub const FRAME_COUNT: usize = 60;
/// Delay between animation frames, in milliseconds (both preview and GIF).
pub const FRAME_DELAY_MS: u64 = 50;
/// Background fill; doubles as the transparency key on export.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Reveal progress of one ring at a global progress value.
///
/// Rings animate inner-to-outer: ring 2 starts at 0, ring 1 at 0.133,
/// ring 0 at 0.267, and every ring reaches full reveal before the global
/// progress does (slope 1.5 > 1).
pub fn ring_progress(ring: usize, progress: f32) -> f32 {
    (progress * 1.5 - 0.2 * (RING_COUNT - 1 - ring) as f32).clamp(0.0, 1.0)
}

/// Rasterizes composed frames for one layout.
///
/// The layout is identical for every frame of a run, so the source image is
/// scaled once at construction and reused for each blit.
pub struct FrameRenderer {
    canvas_width: u32,
    canvas_height: u32,
    layout: Layout,
    /// Image pre-scaled to its layout size. `None` when no image is loaded
    /// or the layout is degenerate; frames then render without a blit.
    scaled_image: Option<RgbaImage>,
}

impl FrameRenderer {
    pub fn new(
        source: Option<&RgbaImage>,
        layout: Layout,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Self {
        let scaled_image = source.and_then(|img| {
            let w = layout.image_rect.width.round() as i64;
            let h = layout.image_rect.height.round() as i64;
            if w < 1 || h < 1 {
                // Degenerate layout: skip the blit rather than resize to a
                // non-positive size.
                return None;
            }
            Some(imageops::resize(
                img,
                w as u32,
                h as u32,
                imageops::FilterType::Triangle,
            ))
        });

        Self {
            canvas_width,
            canvas_height,
            layout,
            scaled_image,
        }
    }

    /// A background-only frame at canvas size.
    pub fn blank_frame(canvas_width: u32, canvas_height: u32) -> RgbaImage {
        RgbaImage::from_pixel(canvas_width, canvas_height, BACKGROUND)
    }

    /// Render the static composition: all rings unmasked, image on top.
    pub fn render_static(&self) -> RgbaImage {
        let mut canvas = Self::blank_frame(self.canvas_width, self.canvas_height);
        for ring in &self.layout.rings {
            stroke_rect(
                &mut canvas,
                ring.rect,
                self.layout.stroke_width,
                ring.color,
                None,
            );
        }
        self.blit_image(&mut canvas);
        canvas
    }

    /// Render one animation frame at the given reveal progress in [0, 1].
    ///
    /// Rings are drawn inner-to-outer so later (outer) strokes are never
    /// occluded where they overlap an inner ring's region at the gutter
    /// boundary. The image itself is not animated and is drawn on top
    /// unconditionally.
    pub fn render_frame(&self, progress: f32) -> RgbaImage {
        let mut canvas = Self::blank_frame(self.canvas_width, self.canvas_height);

        let center_x = self.canvas_width as f32 / 2.0;
        let center_y = self.canvas_height as f32 / 2.0;
        let max_extent = self.canvas_width.max(self.canvas_height) as f32;

        for ring in (0..RING_COUNT).rev() {
            let reveal = ring_progress(ring, progress);
            if reveal <= 0.0 {
                continue;
            }
            // Square mask centered on the canvas, growing from a point to
            // full coverage as the ring's reveal reaches 1.
            let mask_size = reveal * max_extent;
            let clip = Rect::new(
                center_x - mask_size,
                center_y - mask_size,
                mask_size * 2.0,
                mask_size * 2.0,
            );
            stroke_rect(
                &mut canvas,
                self.layout.rings[ring].rect,
                self.layout.stroke_width,
                self.layout.rings[ring].color,
                Some(clip),
            );
        }

        self.blit_image(&mut canvas);
        canvas
    }

    /// Generate the full animation: exactly [`FRAME_COUNT`] frames at
    /// evenly spaced progress values `i / FRAME_COUNT` (never reaching 1.0).
    pub fn render_sequence(&self) -> Vec<RgbaImage> {
        (0..FRAME_COUNT)
            .map(|i| self.render_frame(i as f32 / FRAME_COUNT as f32))
            .collect()
    }

    fn blit_image(&self, canvas: &mut RgbaImage) {
        if let Some(scaled) = &self.scaled_image {
            imageops::overlay(
                canvas,
                scaled,
                self.layout.image_rect.x.round() as i64,
                self.layout.image_rect.y.round() as i64,
            );
        }
    }
}

/// Fill the stroke band of an axis-aligned rectangle.
///
/// The stroke is centered on the rectangle path: half the width extends
/// outward, half inward. Pixels are tested at their centers against the band
/// (and the optional clip rectangle), clamped to the canvas bounds.
fn stroke_rect(
    canvas: &mut RgbaImage,
    rect: Rect,
    stroke_width: f32,
    color: Rgb,
    clip: Option<Rect>,
) {
    let half = stroke_width / 2.0;
    let outer = Rect::new(
        rect.x - half,
        rect.y - half,
        rect.width + stroke_width,
        rect.height + stroke_width,
    );
    // May have non-positive extent for thin rects; `contains` then rejects
    // everything and the band is solid.
    let inner = Rect::new(
        rect.x + half,
        rect.y + half,
        rect.width - stroke_width,
        rect.height - stroke_width,
    );

    let mut x0 = outer.x;
    let mut y0 = outer.y;
    let mut x1 = outer.x + outer.width;
    let mut y1 = outer.y + outer.height;
    if let Some(clip) = clip {
        x0 = x0.max(clip.x);
        y0 = y0.max(clip.y);
        x1 = x1.min(clip.x + clip.width);
        y1 = y1.min(clip.y + clip.height);
    }
    let x0 = (x0.floor().max(0.0)) as u32;
    let y0 = (y0.floor().max(0.0)) as u32;
    let x1 = (x1.ceil().max(0.0) as u32).min(canvas.width());
    let y1 = (y1.ceil().max(0.0) as u32).min(canvas.height());

    let pixel = Rgba([color.r, color.g, color.b, 255]);
    for py in y0..y1 {
        for px in x0..x1 {
            let cx = px as f32 + 0.5;
            let cy = py as f32 + 0.5;
            if !outer.contains(cx, cy) || inner.contains(cx, cy) {
                continue;
            }
            if let Some(clip) = clip {
                if !clip.contains(cx, cy) {
                    continue;
                }
            }
            canvas.put_pixel(px, py, pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::color::BorderColors;
    use crate::models::params::LayoutParams;
    use crate::render::layout::compute_layout;

    const EPS: f32 = 1e-4;

    fn test_renderer(source: Option<&RgbaImage>) -> FrameRenderer {
        let layout = compute_layout(
            400,
            300,
            800,
            800,
            LayoutParams::default(),
            &BorderColors::default(),
        );
        FrameRenderer::new(source, layout, 800, 800)
    }

    fn solid_source(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([10, 20, 30, 255]))
    }

    #[test]
    fn test_ring_progress_stagger() {
        // Innermost ring starts immediately.
        assert!(ring_progress(2, 0.0).abs() < EPS);
        assert!(ring_progress(2, 0.01) > 0.0);
        // Middle and outer rings are staggered.
        assert!(ring_progress(1, 0.133).abs() < 0.01);
        assert!(ring_progress(0, 0.266).abs() < 0.01);
        // Innermost fully revealed around two thirds in.
        assert!((ring_progress(2, 0.667) - 1.0).abs() < EPS);
        // Everything fully revealed at the end.
        assert!((ring_progress(0, 1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_sequence_has_exactly_sixty_frames() {
        let source = solid_source(400, 300);
        let frames = test_renderer(Some(&source)).render_sequence();
        assert_eq!(frames.len(), FRAME_COUNT);
        for frame in &frames {
            assert_eq!(frame.dimensions(), (800, 800));
        }
    }

    #[test]
    fn test_static_draws_rings_and_image() {
        let source = solid_source(400, 300);
        let frame = test_renderer(Some(&source)).render_static();

        // Center of the canvas is covered by the image.
        assert_eq!(*frame.get_pixel(400, 400), Rgba([10, 20, 30, 255]));
        // A point on the outer ring's stroke band carries ring 0's color.
        // Outer ring rect starts at x = 61 - 7.5 - 2*23 = 7.5; band spans
        // x in [0, 15) at mid-height.
        let expected = BorderColors::default().get(0);
        assert_eq!(
            *frame.get_pixel(10, 400),
            Rgba([expected.r, expected.g, expected.b, 255])
        );
        // Corners stay background.
        assert_eq!(*frame.get_pixel(0, 0), BACKGROUND);
    }

    #[test]
    fn test_first_frame_shows_no_rings() {
        // At progress 0 every ring's reveal is 0, so only background and
        // image are drawn.
        let source = solid_source(400, 300);
        let frame = test_renderer(Some(&source)).render_frame(0.0);
        assert_eq!(*frame.get_pixel(10, 400), BACKGROUND);
        assert_eq!(*frame.get_pixel(400, 400), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_late_frame_matches_static_ring_coverage() {
        // By progress 59/60 all masks cover the canvas, so the frame equals
        // the static render.
        let source = solid_source(400, 300);
        let renderer = test_renderer(Some(&source));
        let last = renderer.render_frame(59.0 / 60.0);
        assert_eq!(last, renderer.render_static());
    }

    #[test]
    fn test_mask_clips_outer_ring_midway() {
        let source = solid_source(400, 300);
        let renderer = test_renderer(Some(&source));
        // At progress 0.55 the outer ring's reveal is 0.425, so the mask is
        // a centered square with half-extent 340: the ring's top edge
        // (y ≈ 85..100 at canvas center x) is inside the mask, while its
        // left edge at canvas mid-height (x ≈ 0..15) is still outside.
        let frame = renderer.render_frame(0.55);
        let expected = BorderColors::default().get(0);
        assert_eq!(
            *frame.get_pixel(400, 90),
            Rgba([expected.r, expected.g, expected.b, 255])
        );
        assert_eq!(*frame.get_pixel(10, 400), BACKGROUND);
    }

    #[test]
    fn test_no_image_renders_background_only_center() {
        let renderer = test_renderer(None);
        let frame = renderer.render_static();
        // Rings still present, image region stays background.
        assert_eq!(*frame.get_pixel(400, 400), BACKGROUND);
    }

    #[test]
    fn test_degenerate_layout_skips_blit() {
        let layout = compute_layout(
            400,
            300,
            100,
            100,
            LayoutParams {
                border_width: 20,
                gutter_size: 20,
            },
            &BorderColors::default(),
        );
        let source = solid_source(400, 300);
        let renderer = FrameRenderer::new(Some(&source), layout, 100, 100);
        // Must not panic; image is skipped entirely.
        let frame = renderer.render_static();
        assert_eq!(frame.dimensions(), (100, 100));
    }
}
