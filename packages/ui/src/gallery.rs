//! Shared gallery constructor for all platforms.
//!
//! Returns a [`store::Gallery`] backed by the appropriate [`store::SlotStore`]:
//! - **Web** (WASM + `web` feature): IndexedDB via [`store::IdbStore`]
//! - **Desktop / Mobile** (native): filesystem via [`store::FileStore`]

/// Create a platform-appropriate gallery.
///
/// On native targets the backing files live under `<data_dir>/snapvault/`
/// (see [`store::FileStore`] for per-platform paths). On the web the list is
/// kept in the `"snapvault"` IndexedDB database.
pub fn make_gallery() -> store::Gallery<impl store::SlotStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Gallery::new(store::IdbStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        // No IndexedDB without the `web` feature; captures last for the session.
        store::Gallery::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("snapvault");
        store::Gallery::new(store::FileStore::new(base))
    }
}
