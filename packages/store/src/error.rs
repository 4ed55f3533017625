use thiserror::Error;

/// Failures surfaced by [`crate::Gallery`] and the [`crate::SlotStore`] backends.
///
/// There is no internal recovery or retry; every error propagates unchanged
/// to the caller, which decides how to present it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted slot content is not a JSON array of strings.
    #[error("stored image list is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The underlying key-value backend could not be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(reason: impl std::fmt::Display) -> Self {
        StoreError::Unavailable(reason.to_string())
    }
}
