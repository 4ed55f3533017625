use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::gallery::SlotStore;

/// In-memory SlotStore for testing and ephemeral fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemoryStore {
    async fn read(&self, slot: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slots.lock().unwrap().get(slot).cloned())
    }

    async fn write(&self, slot: &str, value: String) -> Result<(), StoreError> {
        self.slots.lock().unwrap().insert(slot.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{Gallery, IMAGES_SLOT};

    /// SlotStore double whose operations always fail, for error-path tests.
    #[derive(Clone, Debug, Default)]
    struct UnavailableStore;

    impl SlotStore for UnavailableStore {
        async fn read(&self, _slot: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::unavailable("device storage offline"))
        }

        async fn write(&self, _slot: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::unavailable("device storage offline"))
        }
    }

    #[tokio::test]
    async fn test_list_on_empty_storage() {
        let gallery = Gallery::new(MemoryStore::new());
        assert!(gallery.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_preserves_capture_order() {
        let gallery = Gallery::new(MemoryStore::new());

        gallery.add("file:///a.jpg").await.unwrap();
        gallery.add("file:///b.jpg").await.unwrap();
        gallery.add("file:///c.jpg").await.unwrap();

        assert_eq!(
            gallery.list().await.unwrap(),
            vec!["file:///a.jpg", "file:///b.jpg", "file:///c.jpg"]
        );
    }

    #[tokio::test]
    async fn test_add_then_remove_scenario() {
        let gallery = Gallery::new(MemoryStore::new());

        gallery.add("a").await.unwrap();
        gallery.add("b").await.unwrap();
        assert_eq!(gallery.list().await.unwrap(), vec!["a", "b"]);

        gallery.remove("a").await.unwrap();
        assert_eq!(gallery.list().await.unwrap(), vec!["b"]);
    }

    #[tokio::test]
    async fn test_remove_absent_uri_is_noop() {
        let gallery = Gallery::new(MemoryStore::new());

        gallery.add("a").await.unwrap();
        gallery.add("b").await.unwrap();

        gallery.remove("x").await.unwrap();
        assert_eq!(gallery.list().await.unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_remove_drops_every_occurrence() {
        let gallery = Gallery::new(MemoryStore::new());

        gallery.add("dup").await.unwrap();
        gallery.add("keep").await.unwrap();
        gallery.add("dup").await.unwrap();
        gallery.add("tail").await.unwrap();

        gallery.remove("dup").await.unwrap();
        assert_eq!(gallery.list().await.unwrap(), vec!["keep", "tail"]);
    }

    #[tokio::test]
    async fn test_duplicates_are_allowed() {
        let gallery = Gallery::new(MemoryStore::new());

        gallery.add("same").await.unwrap();
        gallery.add("same").await.unwrap();

        assert_eq!(gallery.list().await.unwrap(), vec!["same", "same"]);
    }

    #[tokio::test]
    async fn test_add_grows_list_by_exactly_one() {
        let gallery = Gallery::new(MemoryStore::new());
        gallery.add("existing").await.unwrap();

        let before = gallery.list().await.unwrap();
        gallery.add("existing").await.unwrap();
        let after = gallery.list().await.unwrap();

        assert_eq!(after.len(), before.len() + 1);
        let count = |list: &[String]| list.iter().filter(|u| *u == "existing").count();
        assert_eq!(count(&after), count(&before) + 1);
    }

    #[tokio::test]
    async fn test_malformed_slot_is_a_parse_error() {
        let store = MemoryStore::new();
        store
            .write(IMAGES_SLOT, "not json at all".to_string())
            .await
            .unwrap();

        let gallery = Gallery::new(store);
        assert!(matches!(gallery.list().await, Err(StoreError::Parse(_))));
    }

    #[tokio::test]
    async fn test_non_array_json_slot_is_a_parse_error() {
        let store = MemoryStore::new();
        store
            .write(IMAGES_SLOT, r#"{"images": []}"#.to_string())
            .await
            .unwrap();

        let gallery = Gallery::new(store);
        assert!(matches!(gallery.list().await, Err(StoreError::Parse(_))));
    }

    #[tokio::test]
    async fn test_slot_payload_is_a_json_array() {
        let store = MemoryStore::new();
        let gallery = Gallery::new(store.clone());

        gallery.add("file:///a.jpg").await.unwrap();
        gallery.add("file:///b.jpg").await.unwrap();

        let raw = store.read(IMAGES_SLOT).await.unwrap().unwrap();
        assert_eq!(raw, r#"["file:///a.jpg","file:///b.jpg"]"#);
    }

    #[tokio::test]
    async fn test_unavailable_backend_surfaces_from_every_operation() {
        let gallery = Gallery::new(UnavailableStore);

        assert!(matches!(
            gallery.list().await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            gallery.add("a").await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            gallery.remove("a").await,
            Err(StoreError::Unavailable(_))
        ));
    }
}
