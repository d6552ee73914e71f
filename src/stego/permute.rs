// Copyright (c) 2026 The veil-core developers
// SPDX-License-Identifier: GPL-3.0-only

//! Placement key generation and validation.
//!
//! The placement key is a uniformly random permutation of every slot index
//! in the image, produced by a Fisher-Yates shuffle over the identity
//! sequence. The random source is injected so callers can use a seeded
//! generator for deterministic keys (and tests); [`generate_key_seeded`]
//! wraps a ChaCha20 PRNG for that purpose.
//!
//! # Portability of seeded keys
//!
//! The shuffle samples its swap targets from `u32` ranges rather than
//! `usize`. Sampling a `usize` range pulls a platform-dependent amount of
//! PRNG output per draw (32 bits on WASM, 64 on native), so the same seed
//! would otherwise produce unrelated permutations on different targets.
//! Fixing the draw width at `u32` makes a seed identify one key everywhere.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::stego::error::StegoError;

/// Generate a placement key: a uniformly random permutation of `[0, length)`.
///
/// `length` is the image's total slot count. `length = 0` yields an empty
/// key. Slot indices are `u32`, which bounds supported images at 2^32 slots.
pub fn generate_key<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Vec<u32> {
    debug_assert!(length <= u32::MAX as usize, "slot count exceeds u32 index space");
    let mut key: Vec<u32> = (0..length as u32).collect();
    for i in (1..length).rev() {
        let j = rng.gen_range(0..=(i as u32)) as usize;
        key.swap(i, j);
    }
    key
}

/// Generate a placement key deterministically from a 32-byte seed.
pub fn generate_key_seeded(length: usize, seed: &[u8; 32]) -> Vec<u32> {
    let mut rng = ChaCha20Rng::from_seed(*seed);
    generate_key(length, &mut rng)
}

/// Check that `key` is a bijection onto `[0, expected_len)`.
///
/// Run on every key loaded from persistence before it touches an image.
/// Out-of-range or duplicate entries are never clamped or wrapped.
///
/// # Errors
/// - [`StegoError::KeyLengthMismatch`] if the entry count is wrong.
/// - [`StegoError::CorruptKey`] if any entry is out of range or repeated.
pub fn validate_key(key: &[u32], expected_len: usize) -> Result<(), StegoError> {
    if key.len() != expected_len {
        return Err(StegoError::KeyLengthMismatch {
            expected: expected_len,
            actual: key.len(),
        });
    }
    let mut seen = vec![false; expected_len];
    for &idx in key {
        let slot = match seen.get_mut(idx as usize) {
            Some(slot) => slot,
            None => return Err(StegoError::CorruptKey("slot index out of range")),
        };
        if *slot {
            return Err(StegoError::CorruptKey("duplicate slot index"));
        }
        *slot = true;
    }
    Ok(())
}
