//! # Gallery — the image-reference store
//!
//! [`Gallery`] maintains an ordered list of captured-image URIs in a single
//! named slot of a persistent key-value backend. All reads and writes go
//! through the [`SlotStore`] trait, so the same logic works against an
//! in-memory store (tests), a filesystem store (desktop/mobile), or an
//! IndexedDB store (web).
//!
//! ## [`SlotStore`] trait
//!
//! An async interface with two methods — `read` returns the raw contents of a
//! named slot (`None` if it has never been written), `write` replaces them.
//! Implementations live in sibling modules ([`crate::memory`],
//! [`crate::file_store`], [`crate::idb`]).
//!
//! ## Slot format
//!
//! The list lives under the [`IMAGES_SLOT`] slot as a JSON array of strings:
//!
//! ```text
//! ["file:///.../media/1724900000000.jpg", "file:///.../media/1724900034817.jpg"]
//! ```
//!
//! Insertion order is capture order. Duplicates are permitted — the store
//! does not enforce uniqueness. An absent slot reads as the empty list; a
//! present slot that does not parse as an array of strings is a
//! [`StoreError::Parse`].
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`list`](Gallery::list) | Read and parse the slot. Absent slot → empty list. |
//! | [`add`](Gallery::add) | Append one URI and write the full list back. |
//! | [`remove`](Gallery::remove) | Drop every occurrence of a URI, preserving the order of the rest, and write back. |
//!
//! `add` and `remove` are read-modify-write round trips with no transaction
//! between them: if two operations overlap, the last writer wins. The app
//! drives the store from a single logical thread, so overlapping writers only
//! arise from rapid user actions; a serializing backend can be injected where
//! that matters.

use crate::error::StoreError;

/// Name of the key-value slot holding the serialized image list.
pub const IMAGES_SLOT: &str = "images";

/// Async trait for reading and writing named key-value slots.
pub trait SlotStore {
    fn read(
        &self,
        slot: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>>;
    fn write(
        &self,
        slot: &str,
        value: String,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}

/// The image-reference store, backed by a [`SlotStore`].
pub struct Gallery<S: SlotStore> {
    store: S,
}

impl<S: SlotStore> Gallery<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All stored image URIs, in capture order.
    pub async fn list(&self) -> Result<Vec<String>, StoreError> {
        match self.store.read(IMAGES_SLOT).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Append a URI to the end of the list.
    pub async fn add(&self, uri: &str) -> Result<(), StoreError> {
        let mut images = self.list().await?;
        images.push(uri.to_string());
        self.persist(images).await
    }

    /// Remove every occurrence of a URI. Removing an absent URI is a no-op.
    pub async fn remove(&self, uri: &str) -> Result<(), StoreError> {
        let mut images = self.list().await?;
        images.retain(|stored| stored != uri);
        self.persist(images).await
    }

    async fn persist(&self, images: Vec<String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&images)?;
        self.store.write(IMAGES_SLOT, raw).await
    }
}
