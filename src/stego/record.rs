// Copyright (c) 2026 The veil-core developers
// SPDX-License-Identifier: GPL-3.0-only

//! Persisted key record.
//!
//! The record is what actually gets handed to the key-value store: the
//! placement permutation tagged with the payload's bit length, so extraction
//! decodes exactly the bits that were embedded instead of guessing a fixed
//! window. Wire layout, all fields big-endian:
//!
//! ```text
//! [4 bytes ] payload bit length (u32)
//! [4 bytes ] key entry count (u32)
//! [4N bytes] key entries (u32 slot indices, embed order)
//! [4 bytes ] CRC-32 of everything above
//! ```
//!
//! The CRC catches storage-level corruption; structural validity of the
//! permutation itself (bijection, length vs. image) is checked separately by
//! [`validate_key`](crate::stego::permute::validate_key) because it depends
//! on the image the record is applied to.

use crate::stego::error::StegoError;

/// Fixed overhead: bit length (4) + entry count (4) + CRC (4).
pub const RECORD_OVERHEAD: usize = 12;

/// A placement key tagged with the embedded payload's bit length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    /// Slot indices in embed order; a permutation of the image's slot range.
    pub key: Vec<u32>,
    /// Payload bits written at embed time (full-redundancy bits only).
    pub payload_bits: u32,
}

impl KeyRecord {
    /// Serialize for storage.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(RECORD_OVERHEAD + self.key.len() * 4);
        out.extend_from_slice(&self.payload_bits.to_be_bytes());
        out.extend_from_slice(&(self.key.len() as u32).to_be_bytes());
        for &idx in &self.key {
            out.extend_from_slice(&idx.to_be_bytes());
        }
        let crc = crc32fast::hash(&out);
        out.extend_from_slice(&crc.to_be_bytes());
        out
    }

    /// Parse a stored record, verifying framing and checksum.
    ///
    /// # Errors
    /// [`StegoError::CorruptKey`] if the buffer is truncated, its declared
    /// entry count disagrees with its length, or the CRC does not match.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StegoError> {
        if bytes.len() < RECORD_OVERHEAD {
            return Err(StegoError::CorruptKey("record too short"));
        }
        let body = &bytes[..bytes.len() - 4];
        let stored_crc = u32::from_be_bytes(bytes[bytes.len() - 4..].try_into().unwrap());
        if crc32fast::hash(body) != stored_crc {
            return Err(StegoError::CorruptKey("checksum mismatch"));
        }

        let payload_bits = u32::from_be_bytes(body[0..4].try_into().unwrap());
        let count = u32::from_be_bytes(body[4..8].try_into().unwrap()) as usize;
        if body.len() - 8 != count * 4 {
            return Err(StegoError::CorruptKey("entry count does not match record length"));
        }

        let key = body[8..]
            .chunks_exact(4)
            .map(|c| u32::from_be_bytes(c.try_into().unwrap()))
            .collect();
        Ok(Self { key, payload_bits })
    }
}
