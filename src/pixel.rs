// Copyright (c) 2026 The veil-core developers
// SPDX-License-Identifier: GPL-3.0-only

//! In-memory pixel buffer.
//!
//! A [`PixelImage`] is a width × height grid of 32-bit packed words in ARGB
//! byte order: alpha in the top byte (ignored by the engine), then the three
//! color channels with channel 0 in the most significant color byte. This
//! matches the packing used by common decoded-image representations, so a
//! frontend can hand raw pixel words straight to the engine.
//!
//! The buffer is exclusively owned by the caller. Embedding takes `&mut` and
//! mutates it in place; extraction only reads. There is no locking anywhere
//! in the engine — exclusive access is enforced by the borrow, not at runtime.

/// A decoded image as a flat row-major grid of 32-bit ARGB words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelImage {
    /// Create an image of the given dimensions with all pixels opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![0xFF00_0000; len],
        }
    }

    /// Wrap an existing row-major ARGB buffer.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u32>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of embeddable slots: one per color channel per pixel.
    pub fn total_slots(&self) -> usize {
        self.pixels.len() * 3
    }

    /// Read the packed word at (x, y).
    ///
    /// # Panics
    /// Panics if the coordinate is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)]
    }

    /// Replace the packed word at (x, y).
    ///
    /// # Panics
    /// Panics if the coordinate is outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u32) {
        let i = self.index(x, y);
        self.pixels[i] = value;
    }

    /// The raw row-major buffer, for handing back to an image encoder.
    pub fn as_raw(&self) -> &[u32] {
        &self.pixels
    }

    /// Consume the image, yielding the raw buffer.
    pub fn into_raw(self) -> Vec<u32> {
        self.pixels
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        y as usize * self.width as usize + x as usize
    }
}
