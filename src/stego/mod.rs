// Copyright (c) 2026 The veil-core developers
// SPDX-License-Identifier: GPL-3.0-only

//! Steganographic embedding and extraction.
//!
//! The engine scatters payload bits across an image using a secret placement
//! key: a random permutation of every (pixel, channel) slot index. Each bit
//! is written into [`REDUNDANCY`] consecutive key entries, and extraction
//! recovers it by majority vote across those copies. The permutation is the
//! sole secret — without it the payload is indistinguishable from pixel
//! noise, but this is placement obfuscation, not encryption.
//!
//! Entry points, from low to high level:
//!
//! - [`embed`](embed::embed) / [`extract`](extract::extract): operate on a
//!   bare key slice with an explicit decode window.
//! - [`conceal`] / [`reveal`]: generate the key, tag it with the payload
//!   bit length as a [`KeyRecord`](record::KeyRecord), and decode exactly
//!   that many bits.
//! - [`conceal_to_store`] / [`reveal_from_store`]: additionally persist the
//!   record through a [`KeyStore`](store::KeyStore) keyed by an opaque
//!   image identifier supplied by the caller.

pub mod error;
pub mod bits;
pub mod slots;
pub mod permute;
pub mod capacity;
pub mod embed;
pub mod extract;
pub mod record;
pub mod store;
mod pipeline;

pub use error::StegoError;
pub use pipeline::{conceal, conceal_strict, reveal, conceal_to_store, reveal_from_store};

/// Number of consecutive placement-key entries consumed per payload bit.
///
/// Three copies of every bit means a single flipped slot per triple is
/// outvoted on extraction. Odd so the vote can never tie.
pub const REDUNDANCY: usize = 3;

/// Decode window, in characters, assumed by the original fixed-window
/// extraction (see [`extract::extract_fixed_window`]).
pub const LEGACY_WINDOW_CHARS: usize = 100;
