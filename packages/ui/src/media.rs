//! Media-library save for captured photos.
//!
//! [`save_capture`] hands the captured bytes to the platform's notion of a
//! media library and returns the URI the gallery stores:
//! - **Native**: the bytes are written to `<data_dir>/snapvault/media/` and a
//!   `file://` URI is returned.
//! - **Web**: the bytes become a Blob object URL, valid for the session.
//!
//! [`discard_capture`] releases a capture the user chose not to keep. Both
//! paths are best-effort; a URI that fails to release just lingers.

use thiserror::Error;

/// Failure to hand a capture to the media library.
#[derive(Debug, Error)]
#[error("failed to save capture: {0}")]
pub struct MediaError(String);

impl MediaError {
    fn new(reason: impl std::fmt::Display) -> Self {
        MediaError(reason.to_string())
    }
}

/// Persist captured photo bytes and return the URI to store in the gallery.
///
/// `file_name` is the name reported by the capture input; its extension is
/// kept so viewers can infer the format (defaults to `jpg`).
#[cfg(not(target_arch = "wasm32"))]
pub async fn save_capture(bytes: Vec<u8>, file_name: &str) -> Result<String, MediaError> {
    let ext = extension_of(file_name);
    let dir = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("snapvault")
        .join("media");
    std::fs::create_dir_all(&dir).map_err(MediaError::new)?;

    let path = dir.join(format!("{}.{ext}", current_millis()));
    std::fs::write(&path, bytes).map_err(MediaError::new)?;

    Ok(format!("file://{}", path.display()))
}

/// Persist captured photo bytes and return the URI to store in the gallery.
#[cfg(target_arch = "wasm32")]
pub async fn save_capture(bytes: Vec<u8>, _file_name: &str) -> Result<String, MediaError> {
    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&array);

    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
        .map_err(|e| MediaError::new(format!("{e:?}")))?;
    web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| MediaError::new(format!("{e:?}")))
}

/// Release a capture the user retook instead of saving.
#[cfg(not(target_arch = "wasm32"))]
pub fn discard_capture(uri: &str) {
    if let Some(path) = uri.strip_prefix("file://") {
        let _ = std::fs::remove_file(path);
    }
}

/// Release a capture the user retook instead of saving.
#[cfg(target_arch = "wasm32")]
pub fn discard_capture(uri: &str) {
    let _ = web_sys::Url::revoke_object_url(uri);
}

#[cfg(not(target_arch = "wasm32"))]
fn extension_of(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext,
        _ => "jpg",
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn current_millis() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
