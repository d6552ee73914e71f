// Copyright (c) 2026 The veil-core developers
// SPDX-License-Identifier: GPL-3.0-only

//! Capacity queries.
//!
//! Triplicated redundancy trades channel capacity for majority-vote
//! robustness, so a width × height image carries at most
//! `width * height * 3 / REDUNDANCY / 8` characters. Callers that cannot
//! tolerate truncation should check [`required_slots`] against the image's
//! slot count (or use [`conceal_strict`](crate::stego::conceal_strict))
//! before embedding.

use crate::pixel::PixelImage;
use crate::stego::REDUNDANCY;

/// Number of payload bits a key of `total_slots` entries can carry in full.
pub fn available_bits(total_slots: usize) -> usize {
    total_slots / REDUNDANCY
}

/// Number of whole characters an image can carry.
pub fn capacity_chars(image: &PixelImage) -> usize {
    available_bits(image.total_slots()) / 8
}

/// Number of placement-key entries a message of `char_count` characters
/// consumes when embedded in full.
pub fn required_slots(char_count: usize) -> usize {
    char_count * 8 * REDUNDANCY
}
