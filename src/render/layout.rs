// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Layout engine: scale-to-fit image placement and ring geometry.
//!
//! This module computes, from the image's intrinsic dimensions and the
//! current parameters, where the scaled image sits on the canvas and the
//! position, size and color of each of the three border rings. The result
//! is derived fresh on every render so the displayed and exported output is
//! always consistent with the current parameters.

use crate::models::color::{BorderColors, Rgb, RING_COUNT};
use crate::models::params::LayoutParams;

/// Axis-aligned rectangle in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside the rectangle. Degenerate rectangles
    /// (non-positive extent) contain nothing.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// One border ring: its stroke path rectangle and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub rect: Rect,
    pub color: Rgb,
}

/// Derived geometry for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Scaled, centered placement of the image.
    pub image_rect: Rect,
    /// Uniform scale factor applied to the image (clamped at 0 when the
    /// borders leave no room).
    pub scale: f32,
    /// Stroke width shared by all rings.
    pub stroke_width: f32,
    /// The three rings, outermost first.
    pub rings: [Ring; RING_COUNT],
}

/// Compute the image placement and ring geometry.
///
/// The three borders and the two gutters between them consume
/// `3*border_width + 2*gutter_size` on every side, and the image is scaled
/// uniformly to fit the space that remains, centered on the canvas. The
/// innermost ring is flush against the image edge: its path is inset by half
/// the stroke width, since the stroke is centered on the path. Each ring
/// further out adds one gutter plus one border width per side.
pub fn compute_layout(
    image_width: u32,
    image_height: u32,
    canvas_width: u32,
    canvas_height: u32,
    params: LayoutParams,
    colors: &BorderColors,
) -> Layout {
    let border_width = params.border_width as f32;
    let gutter = params.gutter_size as f32;
    let canvas_w = canvas_width as f32;
    let canvas_h = canvas_height as f32;

    let total_border_width = 3.0 * border_width + 2.0 * gutter;
    let available_width = canvas_w - 2.0 * total_border_width;
    let available_height = canvas_h - 2.0 * total_border_width;

    // Clamped at zero so degenerate parameter combinations never produce a
    // negative-size image rect downstream.
    let scale = (available_width / image_width as f32)
        .min(available_height / image_height as f32)
        .max(0.0);

    let scaled_width = image_width as f32 * scale;
    let scaled_height = image_height as f32 * scale;
    let x = (canvas_w - scaled_width) / 2.0;
    let y = (canvas_h - scaled_height) / 2.0;

    // Ring index counts outward-in: ring 2 hugs the image, each ring
    // further out steps one gutter plus one border width per side.
    let step = gutter + border_width;
    let rings = std::array::from_fn(|i| {
        let steps_out = (RING_COUNT - 1 - i) as f32;
        Ring {
            rect: Rect::new(
                x - border_width / 2.0 - steps_out * step,
                y - border_width / 2.0 - steps_out * step,
                scaled_width + border_width + 2.0 * steps_out * step,
                scaled_height + border_width + 2.0 * steps_out * step,
            ),
            color: colors.get(i),
        }
    });

    Layout {
        image_rect: Rect::new(x, y, scaled_width, scaled_height),
        scale,
        stroke_width: border_width,
        rings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn layout(
        image_width: u32,
        image_height: u32,
        border_width: u32,
        gutter_size: u32,
    ) -> Layout {
        compute_layout(
            image_width,
            image_height,
            800,
            800,
            LayoutParams {
                border_width,
                gutter_size,
            },
            &BorderColors::default(),
        )
    }

    #[test]
    fn test_worked_example_400x300() {
        // 3*15 + 2*8 = 61 consumed per side, 678 available, width-bound.
        let l = layout(400, 300, 15, 8);
        assert!((l.scale - 1.695).abs() < EPS);
        assert!((l.image_rect.width - 678.0).abs() < EPS);
        assert!((l.image_rect.height - 508.5).abs() < EPS);
        assert!((l.image_rect.x - 61.0).abs() < EPS);
        assert!((l.image_rect.y - 145.75).abs() < EPS);
    }

    #[test]
    fn test_image_exactly_centered() {
        for (w, h, bw, g) in [(400, 300, 15, 8), (1000, 1000, 1, 0), (123, 777, 20, 20)] {
            let l = layout(w, h, bw, g);
            assert!((400.0 - l.image_rect.width / 2.0 - l.image_rect.x).abs() < EPS);
            assert!((400.0 - l.image_rect.height / 2.0 - l.image_rect.y).abs() < EPS);
        }
    }

    #[test]
    fn test_scale_preserves_aspect_ratio() {
        let l = layout(400, 300, 15, 8);
        let ratio = l.image_rect.width / l.image_rect.height;
        assert!((ratio - 400.0 / 300.0).abs() < EPS);
    }

    #[test]
    fn test_inner_ring_flush_with_image() {
        let l = layout(640, 480, 12, 5);
        let inner = l.rings[2].rect;
        assert!((inner.x - (l.image_rect.x - 6.0)).abs() < EPS);
        assert!((inner.y - (l.image_rect.y - 6.0)).abs() < EPS);
        assert!((inner.width - (l.image_rect.width + 12.0)).abs() < EPS);
        assert!((inner.height - (l.image_rect.height + 12.0)).abs() < EPS);
    }

    #[test]
    fn test_uniform_ring_spacing() {
        let l = layout(640, 480, 12, 5);
        let step = 12.0 + 5.0;
        for pair in l.rings.windows(2) {
            let (outer, inner) = (pair[0].rect, pair[1].rect);
            assert!((inner.x - outer.x - step).abs() < EPS);
            assert!((inner.y - outer.y - step).abs() < EPS);
            assert!((outer.width - inner.width - 2.0 * step).abs() < EPS);
            assert!((outer.height - inner.height - 2.0 * step).abs() < EPS);
        }
    }

    #[test]
    fn test_ring_colors_follow_order() {
        let colors = BorderColors::default();
        let l = layout(400, 300, 15, 8);
        for i in 0..RING_COUNT {
            assert_eq!(l.rings[i].color, colors.get(i));
        }
    }

    #[test]
    fn test_degenerate_space_clamps_scale_to_zero() {
        // 20px borders and gutters on a tiny canvas leave negative space.
        let l = compute_layout(
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
        assert_eq!(l.scale, 0.0);
        assert_eq!(l.image_rect.width, 0.0);
        assert_eq!(l.image_rect.height, 0.0);
    }

    #[test]
    fn test_degenerate_rect_contains_nothing() {
        let r = Rect::new(10.0, 10.0, -5.0, -5.0);
        assert!(!r.contains(10.0, 10.0));
        assert!(!r.contains(8.0, 8.0));
    }
}
