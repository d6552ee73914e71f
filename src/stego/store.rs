// Copyright (c) 2026 The veil-core developers
// SPDX-License-Identifier: GPL-3.0-only

//! Key persistence boundary.
//!
//! The engine never stores keys itself; it talks to a key-value collaborator
//! through [`KeyStore`], keyed by an opaque image identifier that the calling
//! shell generates. An absent entry is `Ok(None)` — "not found" is a normal
//! answer, distinct from a store failure.
//!
//! [`MemoryKeyStore`] is the in-process reference implementation. It holds
//! records in their serialized form, so the encode/decode and checksum path
//! is exercised even without a real database behind it.

use std::collections::HashMap;

use crate::stego::error::StegoError;
use crate::stego::record::KeyRecord;

/// Key-value persistence for placement key records.
pub trait KeyStore {
    /// Persist `record` under `image_id`, replacing any previous record.
    fn save(&mut self, image_id: &str, record: &KeyRecord) -> Result<(), StegoError>;

    /// Fetch the record stored under `image_id`, or `None` if absent.
    fn load(&self, image_id: &str) -> Result<Option<KeyRecord>, StegoError>;
}

/// In-memory [`KeyStore`] backed by a `HashMap` of serialized records.
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    records: HashMap<String, Vec<u8>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl KeyStore for MemoryKeyStore {
    fn save(&mut self, image_id: &str, record: &KeyRecord) -> Result<(), StegoError> {
        self.records.insert(image_id.to_owned(), record.to_bytes());
        Ok(())
    }

    fn load(&self, image_id: &str) -> Result<Option<KeyRecord>, StegoError> {
        match self.records.get(image_id) {
            Some(bytes) => Ok(Some(KeyRecord::from_bytes(bytes)?)),
            None => Ok(None),
        }
    }
}
