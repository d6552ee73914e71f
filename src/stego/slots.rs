// Copyright (c) 2026 The veil-core developers
// SPDX-License-Identifier: GPL-3.0-only

//! Slot addressing.
//!
//! A slot is one (pixel, color-channel) pair, identified by a flat index in
//! `[0, width * height * 3)`. Three consecutive indices address the three
//! channels of one pixel; pixels are counted in row-major order. Channels
//! are numbered by significance within the packed word: channel 0 is the
//! most significant color byte, channel 2 the least. The alpha byte above
//! channel 0 is never addressed.
//!
//! All functions here are pure and total; bounds are the caller's contract.

/// Decode a flat slot index into (x, y, channel).
pub fn slot_to_coord(idx: u32, width: u32) -> (u32, u32, u8) {
    let pixel_index = idx / 3;
    let x = pixel_index % width;
    let y = pixel_index / width;
    let channel = (idx % 3) as u8;
    (x, y, channel)
}

/// Bit offset of a channel's byte within the packed word.
fn shift(channel: u8) -> u32 {
    8 * (2 - channel as u32)
}

/// Extract one color channel byte from a packed ARGB word.
pub fn read_channel(pixel: u32, channel: u8) -> u8 {
    ((pixel >> shift(channel)) & 0xFF) as u8
}

/// Replace one color channel byte in a packed ARGB word.
///
/// All other bytes, including alpha, pass through untouched.
pub fn write_channel(pixel: u32, channel: u8, byte: u8) -> u32 {
    let s = shift(channel);
    (pixel & !(0xFF << s)) | ((byte as u32) << s)
}
