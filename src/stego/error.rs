// Copyright (c) 2026 The veil-core developers
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the steganography engine.
//!
//! Only the entry points and the persistence boundary can fail; the
//! addressing and bit-codec functions are total. Capacity overrun is not an
//! error at all — plain `conceal` reports it through
//! [`EmbedOutcome::Truncated`](crate::stego::embed::EmbedOutcome).

use core::fmt;

/// Errors that can occur during concealment, revelation, or key persistence.
#[derive(Debug)]
pub enum StegoError {
    /// No placement key is stored under the given image identifier.
    KeyNotFound,
    /// The persisted key failed validation; the reason names the first
    /// check that failed (checksum, length, out-of-range or duplicate entry).
    CorruptKey(&'static str),
    /// The placement key's length does not match the image's slot count.
    KeyLengthMismatch {
        /// Slots addressable in the image.
        expected: usize,
        /// Entries in the key.
        actual: usize,
    },
    /// The message needs more redundant slots than the image provides
    /// (strict mode only).
    MessageTooLarge,
    /// The backing key store failed to save or load a record.
    Store(String),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyNotFound => write!(f, "no placement key stored for this image id"),
            Self::CorruptKey(reason) => write!(f, "corrupt placement key: {reason}"),
            Self::KeyLengthMismatch { expected, actual } => {
                write!(f, "placement key has {actual} entries, image has {expected} slots")
            }
            Self::MessageTooLarge => write!(f, "message too large for this image"),
            Self::Store(msg) => write!(f, "key store failure: {msg}"),
        }
    }
}

impl std::error::Error for StegoError {}
