// Copyright (c) 2026 The veil-core developers
// SPDX-License-Identifier: GPL-3.0-only

//! Conceal/reveal pipelines.
//!
//! `conceal` ties the pieces together for one embedding pass:
//! 1. Generate a placement key covering every slot in the image.
//! 2. Scatter the payload bits through it, LSB per slot, triplicated.
//! 3. Return the key tagged with the bit count actually written, ready for
//!    persistence.
//!
//! `reveal` is the inverse: validate the key against the image, then
//! majority-vote exactly the recorded number of bits back out. The
//! `*_to_store` / `*_from_store` variants run the same pipelines against a
//! [`KeyStore`] keyed by a caller-supplied opaque image identifier.

use rand::Rng;

use crate::pixel::PixelImage;
use crate::stego::capacity::required_slots;
use crate::stego::embed::{embed, EmbedOutcome};
use crate::stego::error::StegoError;
use crate::stego::extract::extract;
use crate::stego::permute::{generate_key, validate_key};
use crate::stego::record::KeyRecord;
use crate::stego::store::KeyStore;
use crate::stego::REDUNDANCY;

/// Embed `text` into `image` under a freshly generated placement key.
///
/// Never fails: if the payload outsizes the image the trailing bits are
/// dropped and the outcome says so. The returned record's `payload_bits`
/// reflects what was actually written, so a later [`reveal`] decodes
/// exactly the surviving payload.
pub fn conceal<R: Rng + ?Sized>(
    image: &mut PixelImage,
    text: &str,
    rng: &mut R,
) -> (KeyRecord, EmbedOutcome) {
    let key = generate_key(image.total_slots(), rng);
    let outcome = embed(image, text, &key);
    let record = KeyRecord {
        key,
        payload_bits: outcome.bits_written() as u32,
    };
    (record, outcome)
}

/// Like [`conceal`], but reject payloads that would truncate.
///
/// # Errors
/// [`StegoError::MessageTooLarge`] if the message needs more redundant
/// slots than the image provides; the image is untouched in that case.
pub fn conceal_strict<R: Rng + ?Sized>(
    image: &mut PixelImage,
    text: &str,
    rng: &mut R,
) -> Result<KeyRecord, StegoError> {
    if required_slots(text.chars().count()) > image.total_slots() {
        return Err(StegoError::MessageTooLarge);
    }
    let (record, _) = conceal(image, text, rng);
    Ok(record)
}

/// Recover the payload described by `record` from `image`.
///
/// # Errors
/// [`StegoError::KeyLengthMismatch`] or [`StegoError::CorruptKey`] if the
/// record's key is not a permutation of this image's slot range, or if its
/// `payload_bits` claims more bits than the key can address. [`conceal`]
/// never produces such a record, so the inconsistency means tampering or
/// storage corruption.
pub fn reveal(image: &PixelImage, record: &KeyRecord) -> Result<String, StegoError> {
    validate_key(&record.key, image.total_slots())?;
    if record.payload_bits as u64 * REDUNDANCY as u64 > record.key.len() as u64 {
        return Err(StegoError::CorruptKey("payload length exceeds key capacity"));
    }
    Ok(extract(image, &record.key, record.payload_bits as usize))
}

/// [`conceal`] and persist the record under `image_id`.
///
/// Returns the embed outcome so callers can surface truncation to the user.
///
/// # Errors
/// [`StegoError::Store`] if the store rejects the save.
pub fn conceal_to_store<R: Rng + ?Sized, S: KeyStore>(
    image: &mut PixelImage,
    text: &str,
    image_id: &str,
    store: &mut S,
    rng: &mut R,
) -> Result<EmbedOutcome, StegoError> {
    let (record, outcome) = conceal(image, text, rng);
    store.save(image_id, &record)?;
    Ok(outcome)
}

/// Load the record for `image_id` and [`reveal`] the payload.
///
/// # Errors
/// - [`StegoError::KeyNotFound`] if the store has no record for this id.
/// - [`StegoError::CorruptKey`] / [`StegoError::KeyLengthMismatch`] if the
///   stored record cannot be applied to this image.
/// - [`StegoError::Store`] if the store itself fails.
pub fn reveal_from_store<S: KeyStore>(
    image: &PixelImage,
    image_id: &str,
    store: &S,
) -> Result<String, StegoError> {
    let record = store.load(image_id)?.ok_or(StegoError::KeyNotFound)?;
    reveal(image, &record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::store::MemoryKeyStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn conceal_reveal_roundtrip() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut img = PixelImage::new(50, 50);
        let (record, outcome) = conceal(&mut img, "round trip", &mut rng);
        assert!(!outcome.is_truncated());
        assert_eq!(record.payload_bits, 80);
        assert_eq!(reveal(&img, &record).unwrap(), "round trip");
    }

    #[test]
    fn truncated_conceal_reveals_prefix_bits_only() {
        let mut rng = StdRng::seed_from_u64(2);
        // 2×2 → 4 usable bits; "A" needs 8. Half a character survives,
        // and the half-character is dropped by the codec on reveal.
        let mut img = PixelImage::new(2, 2);
        let (record, outcome) = conceal(&mut img, "A", &mut rng);
        assert!(outcome.is_truncated());
        assert_eq!(record.payload_bits, 4);
        assert_eq!(reveal(&img, &record).unwrap(), "");
    }

    #[test]
    fn strict_rejects_oversized() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut img = PixelImage::new(2, 2);
        let before = img.clone();
        assert!(matches!(
            conceal_strict(&mut img, "A", &mut rng),
            Err(StegoError::MessageTooLarge)
        ));
        assert_eq!(img, before, "strict failure must not touch the image");
    }

    #[test]
    fn strict_accepts_exact_fit() {
        let mut rng = StdRng::seed_from_u64(4);
        // 2×4 → 24 slots → exactly one character.
        let mut img = PixelImage::new(2, 4);
        let record = conceal_strict(&mut img, "Z", &mut rng).unwrap();
        assert_eq!(reveal(&img, &record).unwrap(), "Z");
    }

    #[test]
    fn store_roundtrip_and_missing_key() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut img = PixelImage::new(40, 40);
        let mut store = MemoryKeyStore::new();

        conceal_to_store(&mut img, "stored", "id-1", &mut store, &mut rng).unwrap();
        assert_eq!(reveal_from_store(&img, "id-1", &store).unwrap(), "stored");

        assert!(matches!(
            reveal_from_store(&img, "other-id", &store),
            Err(StegoError::KeyNotFound)
        ));
    }

    #[test]
    fn reveal_rejects_overclaimed_payload_length() {
        // 2×2 → 12 slots → at most 4 fully redundant bits. A record whose
        // key is a valid permutation but whose tag claims 800 bits passes
        // the CRC and the bijection check, so the length bound must catch it
        // instead of decoding phantom text.
        let img = PixelImage::new(2, 2);
        let key = crate::stego::permute::generate_key_seeded(img.total_slots(), &[17u8; 32]);
        let record = KeyRecord { key, payload_bits: 800 };
        let record = KeyRecord::from_bytes(&record.to_bytes()).unwrap();
        assert!(matches!(
            reveal(&img, &record),
            Err(StegoError::CorruptKey("payload length exceeds key capacity"))
        ));

        // The same bound must hold at the extreme without allocating first.
        let key = crate::stego::permute::generate_key_seeded(img.total_slots(), &[18u8; 32]);
        let record = KeyRecord { key, payload_bits: u32::MAX };
        assert!(matches!(reveal(&img, &record), Err(StegoError::CorruptKey(_))));

        // Exactly-full claims are still legitimate.
        let key = crate::stego::permute::generate_key_seeded(img.total_slots(), &[19u8; 32]);
        let record = KeyRecord { key, payload_bits: 4 };
        assert!(reveal(&img, &record).is_ok());
    }

    #[test]
    fn reveal_rejects_foreign_key() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut small = PixelImage::new(4, 4);
        let (record, _) = conceal(&mut small, "x", &mut rng);

        let other = PixelImage::new(8, 8);
        assert!(matches!(
            reveal(&other, &record),
            Err(StegoError::KeyLengthMismatch { .. })
        ));
    }
}
