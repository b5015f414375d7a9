// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! User-adjustable layout parameters and canvas constants.

use std::ops::RangeInclusive;

/// Fixed output canvas dimensions in pixels.
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 800;

/// Allowed range for the border stroke width.
pub const BORDER_WIDTH_RANGE: RangeInclusive<u32> = 1..=20;
/// Allowed range for the gap between adjacent rings.
pub const GUTTER_SIZE_RANGE: RangeInclusive<u32> = 0..=20;

/// Slider-controlled parameters driving the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    /// Stroke width of each border ring, in canvas pixels.
    pub border_width: u32,
    /// Gap between adjacent rings (and between the innermost ring and the
    /// image), in canvas pixels.
    pub gutter_size: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            border_width: 15,
            gutter_size: 8,
        }
    }
}

impl LayoutParams {
    /// Clamp both fields into their configured ranges.
    pub fn clamped(self) -> Self {
        Self {
            border_width: self
                .border_width
                .clamp(*BORDER_WIDTH_RANGE.start(), *BORDER_WIDTH_RANGE.end()),
            gutter_size: self
                .gutter_size
                .clamp(*GUTTER_SIZE_RANGE.start(), *GUTTER_SIZE_RANGE.end()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_in_range() {
        let params = LayoutParams::default();
        assert_eq!(params, params.clamped());
        assert_eq!(params.border_width, 15);
        assert_eq!(params.gutter_size, 8);
    }

    #[test]
    fn test_clamped_pins_to_range() {
        let params = LayoutParams {
            border_width: 0,
            gutter_size: 99,
        };
        let clamped = params.clamped();
        assert_eq!(clamped.border_width, 1);
        assert_eq!(clamped.gutter_size, 20);
    }
}
