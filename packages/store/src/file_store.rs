//! # Filesystem-backed slot store
//!
//! [`FileStore`] is a [`SlotStore`] implementation that persists slots to the
//! local filesystem. It is used on desktop and mobile platforms to retain the
//! captured-image list across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── slots/
//!     └── <slot_name>        # raw slot contents (UTF-8 text)
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/snapvault/` |
//! | Linux | `~/.local/share/snapvault/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\snapvault\` |
//! | Android | App-internal storage (via `dirs`) |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::gallery::SlotStore;

/// Filesystem-backed SlotStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn slots_dir(&self) -> PathBuf {
        self.base.join("slots")
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.slots_dir().join(slot)
    }
}

impl SlotStore for FileStore {
    async fn read(&self, slot: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.slot_path(slot)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::unavailable(e)),
        }
    }

    async fn write(&self, slot: &str, value: String) -> Result<(), StoreError> {
        let path = self.slot_path(slot);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StoreError::unavailable)?;
        }
        std::fs::write(path, value).map_err(StoreError::unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Gallery;

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("snapvault_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        let gallery = Gallery::new(store);

        gallery.add("file:///capture-1.jpg").await.unwrap();
        gallery.add("file:///capture-2.jpg").await.unwrap();

        // Re-open from the same directory
        let store2 = FileStore::new(dir.clone());
        let gallery2 = Gallery::new(store2);

        assert_eq!(
            gallery2.list().await.unwrap(),
            vec!["file:///capture-1.jpg", "file:///capture-2.jpg"]
        );

        gallery2.remove("file:///capture-1.jpg").await.unwrap();
        assert_eq!(
            gallery2.list().await.unwrap(),
            vec!["file:///capture-2.jpg"]
        );

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_never_written_directory_reads_empty() {
        let dir = std::env::temp_dir().join(format!("snapvault_empty_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let gallery = Gallery::new(FileStore::new(dir));
        assert!(gallery.list().await.unwrap().is_empty());
    }
}
