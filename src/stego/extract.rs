// Copyright (c) 2026 The veil-core developers
// SPDX-License-Identifier: GPL-3.0-only

//! Extraction engine.
//!
//! Reads back the LSBs of the key-addressed slots in order and reconstructs
//! each payload bit by majority vote over its [`REDUNDANCY`] copies: the bit
//! decodes as 1 when strictly more than half of its copies read 1. A single
//! flipped copy per triple is outvoted.
//!
//! The decode window is explicit: [`extract`] takes the number of payload
//! bits to recover, which the pipeline carries alongside the key in a
//! [`KeyRecord`](crate::stego::record::KeyRecord). [`extract_fixed_window`]
//! keeps the historical behavior of guessing a 100-character payload, which
//! pads short messages with garbage decoded from unrelated slots and
//! silently truncates longer ones.

use crate::pixel::PixelImage;
use crate::stego::bits::bits_to_text;
use crate::stego::slots::{read_channel, slot_to_coord};
use crate::stego::{LEGACY_WINDOW_CHARS, REDUNDANCY};

/// Recover `payload_bits` bits from `image` via `key` and decode them as text.
///
/// Reads at most `payload_bits * REDUNDANCY` key entries, stopping early if
/// the key is shorter. Bits whose copies fall entirely past the key's end
/// decode from zero counts; callers get exact recovery by passing the bit
/// count reported at embed time.
pub fn extract(image: &PixelImage, key: &[u32], payload_bits: usize) -> String {
    let width = image.width();
    let mut counts = vec![0u8; payload_bits];

    for i in 0..payload_bits * REDUNDANCY {
        if i >= key.len() {
            break;
        }
        let (x, y, channel) = slot_to_coord(key[i], width);
        counts[i / REDUNDANCY] += read_channel(image.pixel(x, y), channel) & 1;
    }

    let bits: Vec<u8> = counts
        .iter()
        .map(|&c| u8::from(c as usize > REDUNDANCY / 2))
        .collect();
    bits_to_text(&bits)
}

/// Extract with the original fixed 100-character decode window.
///
/// Legacy entry point for callers without a recorded payload length. The
/// result is always [`LEGACY_WINDOW_CHARS`] characters (fewer only when the
/// key is too short): short payloads come back padded with noise, long ones
/// truncated.
pub fn extract_fixed_window(image: &PixelImage, key: &[u32]) -> String {
    extract(image, key, LEGACY_WINDOW_CHARS * 8)
}
