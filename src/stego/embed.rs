// Copyright (c) 2026 The veil-core developers
// SPDX-License-Identifier: GPL-3.0-only

//! Embedding engine.
//!
//! Walks the payload bits in order and, for each bit, writes it into the
//! least-significant bit of the channel byte addressed by the next
//! [`REDUNDANCY`] placement-key entries. Only LSBs of targeted channel
//! bytes change; every other bit of the image, including alpha, is
//! preserved, so the perturbation is visually imperceptible.
//!
//! Running out of key entries is not an error: embedding stops at the slot
//! boundary and reports how far it got, mirroring the historical behavior
//! but making the truncation visible to the caller.

use crate::pixel::PixelImage;
use crate::stego::bits::text_to_bits;
use crate::stego::slots::{read_channel, slot_to_coord, write_channel};
use crate::stego::REDUNDANCY;

/// Result of an embedding pass.
///
/// `bits_written` counts payload bits whose full complement of redundant
/// copies landed in the image. A bit interrupted partway through its copies
/// is not counted, so extraction with this count never votes over missing
/// copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedOutcome {
    /// Every payload bit was placed with full redundancy.
    Completed {
        /// Total payload bits written.
        bits_written: usize,
    },
    /// The key ran out of entries before the payload ran out of bits.
    Truncated {
        /// Payload bits written with full redundancy before the cutoff.
        bits_written: usize,
    },
}

impl EmbedOutcome {
    /// Payload bits placed with full redundancy.
    pub fn bits_written(&self) -> usize {
        match *self {
            Self::Completed { bits_written } | Self::Truncated { bits_written } => bits_written,
        }
    }

    /// Whether the payload was cut off at the slot boundary.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

/// Embed `text` into `image` in place, scattering bits per `key`.
///
/// Each payload bit is written identically into [`REDUNDANCY`] consecutive
/// key-indexed slots. If the key is exhausted mid-payload the remaining
/// bits are dropped and the outcome reports [`EmbedOutcome::Truncated`].
pub fn embed(image: &mut PixelImage, text: &str, key: &[u32]) -> EmbedOutcome {
    let bits = text_to_bits(text);
    let width = image.width();
    let mut k = 0usize;

    for (bit_idx, &bit) in bits.iter().enumerate() {
        for _ in 0..REDUNDANCY {
            if k >= key.len() {
                return EmbedOutcome::Truncated { bits_written: bit_idx };
            }
            let (x, y, channel) = slot_to_coord(key[k], width);
            let pixel = image.pixel(x, y);
            let byte = (read_channel(pixel, channel) & 0xFE) | bit;
            image.set_pixel(x, y, write_channel(pixel, channel, byte));
            k += 1;
        }
    }

    EmbedOutcome::Completed { bits_written: bits.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::permute::generate_key_seeded;
    use crate::stego::slots::read_channel;

    fn lsb_at(image: &PixelImage, slot: u32) -> u8 {
        let (x, y, ch) = slot_to_coord(slot, image.width());
        read_channel(image.pixel(x, y), ch) & 1
    }

    #[test]
    fn writes_each_bit_redundantly() {
        let mut img = PixelImage::new(10, 10);
        let key = generate_key_seeded(img.total_slots(), &[9u8; 32]);
        let outcome = embed(&mut img, "A", &key);
        assert_eq!(outcome, EmbedOutcome::Completed { bits_written: 8 });

        // 'A' = 01000001; copy r of bit i sits at key[i * 3 + r].
        let expected = [0u8, 1, 0, 0, 0, 0, 0, 1];
        for (i, &bit) in expected.iter().enumerate() {
            for r in 0..REDUNDANCY {
                assert_eq!(lsb_at(&img, key[i * REDUNDANCY + r]), bit, "bit {i} copy {r}");
            }
        }
    }

    #[test]
    fn truncates_at_slot_boundary() {
        // 2×2 image → 12 slots → 4 fully redundant bits; "A" needs 8.
        let mut img = PixelImage::new(2, 2);
        let key = generate_key_seeded(img.total_slots(), &[3u8; 32]);
        let outcome = embed(&mut img, "A", &key);
        assert_eq!(outcome, EmbedOutcome::Truncated { bits_written: 4 });

        // First 4 bits of 'A' (0100) land in key[0..12); nothing else is touched.
        let expected = [0u8, 1, 0, 0];
        for (i, &bit) in expected.iter().enumerate() {
            for r in 0..REDUNDANCY {
                assert_eq!(lsb_at(&img, key[i * REDUNDANCY + r]), bit);
            }
        }
    }

    #[test]
    fn partial_final_bit_not_counted() {
        // 11-entry key: bit 3 gets only 2 of its 3 copies.
        let mut img = PixelImage::new(2, 2);
        let full = generate_key_seeded(img.total_slots(), &[5u8; 32]);
        let outcome = embed(&mut img, "A", &full[..11]);
        assert_eq!(outcome, EmbedOutcome::Truncated { bits_written: 3 });
    }

    #[test]
    fn only_targeted_lsbs_change() {
        let mut img = PixelImage::from_raw(
            6,
            6,
            (0..36u32).map(|i| 0xFF00_0000 | (i.wrapping_mul(0x0701_0305) & 0x00FF_FFFF)).collect(),
        )
        .unwrap();
        let before = img.clone();
        let key = generate_key_seeded(img.total_slots(), &[1u8; 32]);
        embed(&mut img, "hi", &key);

        let touched: std::collections::HashSet<u32> =
            key[..crate::stego::capacity::required_slots(2)].iter().copied().collect();
        for slot in 0..img.total_slots() as u32 {
            let (x, y, ch) = slot_to_coord(slot, img.width());
            let old = read_channel(before.pixel(x, y), ch);
            let new = read_channel(img.pixel(x, y), ch);
            if touched.contains(&slot) {
                assert_eq!(old & 0xFE, new & 0xFE, "non-LSB bits changed in slot {slot}");
            } else {
                assert_eq!(old, new, "untouched slot {slot} changed");
            }
        }
        // Alpha bytes are never written.
        for (a, b) in before.as_raw().iter().zip(img.as_raw()) {
            assert_eq!(a >> 24, b >> 24);
        }
    }

    #[test]
    fn empty_text_is_a_noop() {
        let mut img = PixelImage::new(3, 3);
        let before = img.clone();
        let key = generate_key_seeded(img.total_slots(), &[8u8; 32]);
        let outcome = embed(&mut img, "", &key);
        assert_eq!(outcome, EmbedOutcome::Completed { bits_written: 0 });
        assert_eq!(img, before);
    }
}
