// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Border color data structures.
//!
//! This module defines the RGB color type, the fixed randomization palette,
//! and the ordered three-color set assigned to the border rings.

use rand::seq::SliceRandom;

/// Number of concentric border rings. The whole tool is built around
/// exactly three.
pub const RING_COUNT: usize = 3;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as a `#RRGGBB` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Fixed palette used by color randomization. The first three entries are
/// the default ring colors.
pub const PALETTE: [Rgb; 15] = [
    Rgb::new(0x88, 0xA7, 0xFD), // #88A7FD
    Rgb::new(0xEF, 0xB6, 0x46), // #EFB646
    Rgb::new(0x74, 0x94, 0x69), // #749469
    Rgb::new(0xAB, 0xD7, 0xF6), // #ABD7F6
    Rgb::new(0x46, 0x70, 0xDB), // #4670DB
    Rgb::new(0x80, 0x8C, 0xAC), // #808CAC
    Rgb::new(0xFF, 0xE3, 0xCE), // #FFE3CE
    Rgb::new(0xFF, 0x94, 0x83), // #FF9483
    Rgb::new(0xBB, 0x64, 0x00), // #BB6400
    Rgb::new(0xB3, 0x8D, 0x7A), // #B38D7A
    Rgb::new(0xFF, 0xFB, 0x4E), // #FFFB4E
    Rgb::new(0x75, 0x69, 0x27), // #756927
    Rgb::new(0x3A, 0x82, 0x66), // #3A8266
    Rgb::new(0x5B, 0xE0, 0xA0), // #5BE0A0
    Rgb::new(0xE7, 0xFF, 0xC6), // #E7FFC6
];

/// Ordered colors for the three rings. Index 0 is the outermost ring,
/// index 2 the innermost, flush against the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderColors([Rgb; RING_COUNT]);

impl Default for BorderColors {
    fn default() -> Self {
        Self([PALETTE[0], PALETTE[1], PALETTE[2]])
    }
}

impl BorderColors {
    pub fn new(colors: [Rgb; RING_COUNT]) -> Self {
        Self(colors)
    }

    /// Color assigned to the given ring.
    pub fn get(&self, ring: usize) -> Rgb {
        self.0[ring]
    }

    pub fn as_array(&self) -> &[Rgb; RING_COUNT] {
        &self.0
    }

    /// Move the color at `from` to position `to`, shifting the others.
    /// Matches drag-and-drop semantics: remove then re-insert, so dragging
    /// an entry back to its origin restores the original order.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from >= RING_COUNT || to >= RING_COUNT || from == to {
            return;
        }
        let mut colors = self.0.to_vec();
        let dragged = colors.remove(from);
        colors.insert(to, dragged);
        self.0.copy_from_slice(&colors);
    }

    /// Replace all three colors with distinct entries drawn without
    /// replacement from [`PALETTE`].
    pub fn randomize(&mut self) {
        let mut rng = rand::thread_rng();
        let picked: Vec<Rgb> = PALETTE
            .choose_multiple(&mut rng, RING_COUNT)
            .copied()
            .collect();
        self.0.copy_from_slice(&picked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let color = Rgb::from_hex("#88A7FD").unwrap();
        assert_eq!(color, Rgb::new(0x88, 0xA7, 0xFD));
        assert_eq!(color.to_hex(), "#88A7FD");
    }

    #[test]
    fn test_hex_rejects_malformed() {
        assert!(Rgb::from_hex("88A7FD").is_none());
        assert!(Rgb::from_hex("#88A7").is_none());
        assert!(Rgb::from_hex("#88A7FDAA").is_none());
        assert!(Rgb::from_hex("#GGA7FD").is_none());
    }

    #[test]
    fn test_reorder_roundtrip() {
        let original = BorderColors::default();
        let mut colors = original;

        colors.reorder(0, 2);
        assert_ne!(colors, original);
        colors.reorder(2, 0);
        assert_eq!(colors, original);
    }

    #[test]
    fn test_reorder_shifts_between() {
        let mut colors = BorderColors::default();
        colors.reorder(0, 1);
        assert_eq!(colors.get(0), PALETTE[1]);
        assert_eq!(colors.get(1), PALETTE[0]);
        assert_eq!(colors.get(2), PALETTE[2]);
    }

    #[test]
    fn test_reorder_out_of_bounds_is_noop() {
        let original = BorderColors::default();
        let mut colors = original;
        colors.reorder(0, 3);
        colors.reorder(5, 1);
        assert_eq!(colors, original);
    }

    #[test]
    fn test_randomize_yields_distinct_palette_colors() {
        for _ in 0..50 {
            let mut colors = BorderColors::default();
            colors.randomize();
            let picked = colors.as_array();
            assert!(picked.iter().all(|c| PALETTE.contains(c)));
            assert_ne!(picked[0], picked[1]);
            assert_ne!(picked[0], picked[2]);
            assert_ne!(picked[1], picked[2]);
        }
    }
}
