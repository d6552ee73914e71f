// Copyright (c) 2026 The veil-core developers
// SPDX-License-Identifier: GPL-3.0-only

//! Text ↔ bit-sequence codec.
//!
//! Each character maps to exactly 8 bits, most significant first. Characters
//! above U+00FF are truncated to their low 8 bits — a deliberate lossy
//! constraint of the wire format, not multi-byte-safe text encoding. The
//! low-8-bits value space round-trips as Latin-1, so 7-bit ASCII payloads
//! survive exactly.

/// Encode text as a flat bit sequence, one `0`/`1` byte per bit.
///
/// Emits the 8 low bits of each character in original order, MSB first.
pub fn text_to_bits(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.chars().count() * 8);
    for c in text.chars() {
        let byte = (c as u32 & 0xFF) as u8;
        for shift in (0..8).rev() {
            out.push((byte >> shift) & 1);
        }
    }
    out
}

/// Decode a flat bit sequence back into text.
///
/// Bits are grouped 8 at a time, left to right, each group read MSB first
/// as a value in 0..=255 and mapped to the corresponding character.
/// A trailing group of fewer than 8 bits is discarded.
pub fn bits_to_text(bits: &[u8]) -> String {
    bits.chunks_exact(8)
        .map(|group| {
            let mut value = 0u8;
            for &bit in group {
                value = (value << 1) | (bit & 1);
            }
            char::from(value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_char_msb_first() {
        // 'A' = 0x41 = 01000001
        assert_eq!(text_to_bits("A"), vec![0, 1, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn preserves_order() {
        let bits = text_to_bits("AB");
        assert_eq!(&bits[..8], &[0, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(&bits[8..], &[0, 1, 0, 0, 0, 0, 1, 0]);
    }

    #[test]
    fn roundtrip_ascii() {
        for text in ["", "A", "HELLO", "The quick brown fox! 123"] {
            assert_eq!(bits_to_text(&text_to_bits(text)), text);
        }
    }

    #[test]
    fn high_codepoints_truncate_to_low_byte() {
        // U+0141 (Ł) → low byte 0x41 → 'A'
        assert_eq!(bits_to_text(&text_to_bits("\u{0141}")), "A");
        // U+00E9 (é) fits in one byte and survives as Latin-1
        assert_eq!(bits_to_text(&text_to_bits("é")), "é");
    }

    #[test]
    fn partial_trailing_group_discarded() {
        let mut bits = text_to_bits("HI");
        bits.extend_from_slice(&[1, 0, 1]); // 3 stray bits
        assert_eq!(bits_to_text(&bits), "HI");
    }

    #[test]
    fn empty_is_empty() {
        assert!(text_to_bits("").is_empty());
        assert_eq!(bits_to_text(&[]), "");
    }
}
