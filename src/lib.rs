// Copyright (c) 2026 The veil-core developers
// SPDX-License-Identifier: GPL-3.0-only

//! # veil-core
//!
//! Pure-Rust LSB steganography engine for hiding text payloads in the
//! least-significant bits of an image's color channels. Placement is keyed
//! by a per-image random permutation of all (pixel, channel) slots, and
//! every payload bit is written into three slots so extraction can recover
//! it by majority vote even if a copy gets flipped.
//!
//! The engine works on in-memory pixel buffers only. Decoding image file
//! formats, moving images between peers, and storing placement keys are all
//! jobs for the caller; the key-value persistence boundary is expressed as
//! the minimal [`KeyStore`] trait.
//!
//! # Quick start
//!
//! ```rust
//! use veil_core::{PixelImage, MemoryKeyStore, conceal_to_store, reveal_from_store};
//!
//! let mut image = PixelImage::new(100, 100);
//! let mut store = MemoryKeyStore::new();
//! let mut rng = rand::thread_rng();
//!
//! conceal_to_store(&mut image, "HELLO", "img-42", &mut store, &mut rng).unwrap();
//! let text = reveal_from_store(&image, "img-42", &store).unwrap();
//! assert_eq!(text, "HELLO");
//! ```

pub mod pixel;
pub mod stego;

pub use pixel::PixelImage;
pub use stego::error::StegoError;
pub use stego::{REDUNDANCY, LEGACY_WINDOW_CHARS};
pub use stego::permute::{generate_key, generate_key_seeded, validate_key};
pub use stego::embed::{embed, EmbedOutcome};
pub use stego::extract::{extract, extract_fixed_window};
pub use stego::capacity::{available_bits, capacity_chars, required_slots};
pub use stego::record::KeyRecord;
pub use stego::store::{KeyStore, MemoryKeyStore};
pub use stego::{conceal, conceal_strict, reveal, conceal_to_store, reveal_from_store};
