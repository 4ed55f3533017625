//! # IndexedDB slot store — browser-side persistence
//!
//! [`IdbStore`] is the [`SlotStore`] implementation used on the **web
//! platform**. It persists slots into the browser's IndexedDB via the
//! [`rexie`] crate (a Rust wrapper around the IndexedDB API).
//!
//! ## Database schema
//!
//! A single IndexedDB database named `"snapvault"` (version 1) with one
//! object store:
//!
//! | IndexedDB store | Key | Value |
//! |-----------------|-----|-------|
//! | `"slots"` | slot name (e.g. `"images"`) | slot contents as a string |
//!
//! ## Connection management
//!
//! `IdbStore` is a zero-size struct (`Clone`-friendly) that opens a fresh
//! [`Rexie`] connection on every operation. This is intentional: `Rexie` does
//! not implement `Clone`, and reopening is cheap because the browser caches
//! IndexedDB connections internally.
//!
//! ## Error handling
//!
//! Every IndexedDB failure maps to [`StoreError::Unavailable`] so callers see
//! the same taxonomy as on native targets. A missing key is `Ok(None)`, not
//! an error.

use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use wasm_bindgen::JsValue;

use crate::error::StoreError;
use crate::gallery::SlotStore;

const DB_NAME: &str = "snapvault";
const DB_VERSION: u32 = 1;
const SLOTS_STORE: &str = "slots";

/// IndexedDB-backed SlotStore for the web platform.
#[derive(Clone, Default)]
pub struct IdbStore;

impl IdbStore {
    pub fn new() -> Self {
        Self
    }

    async fn open_db(&self) -> Result<Rexie, StoreError> {
        Rexie::builder(DB_NAME)
            .version(DB_VERSION)
            .add_object_store(RexieObjectStore::new(SLOTS_STORE))
            .build()
            .await
            .map_err(StoreError::unavailable)
    }
}

impl SlotStore for IdbStore {
    async fn read(&self, slot: &str) -> Result<Option<String>, StoreError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[SLOTS_STORE], TransactionMode::ReadOnly)
            .map_err(StoreError::unavailable)?;
        let store = tx.store(SLOTS_STORE).map_err(StoreError::unavailable)?;

        let key = JsValue::from_str(slot);
        let value = store.get(key).await.map_err(StoreError::unavailable)?;

        match value {
            Some(js_val) => {
                let content: String =
                    serde_wasm_bindgen::from_value(js_val).map_err(StoreError::unavailable)?;
                Ok(Some(content))
            }
            None => Ok(None),
        }
    }

    async fn write(&self, slot: &str, value: String) -> Result<(), StoreError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[SLOTS_STORE], TransactionMode::ReadWrite)
            .map_err(StoreError::unavailable)?;
        let store = tx.store(SLOTS_STORE).map_err(StoreError::unavailable)?;

        let key = JsValue::from_str(slot);
        let js_val = serde_wasm_bindgen::to_value(&value).map_err(StoreError::unavailable)?;
        store
            .put(&js_val, Some(&key))
            .await
            .map_err(StoreError::unavailable)?;
        tx.done().await.map_err(StoreError::unavailable)?;
        Ok(())
    }
}
