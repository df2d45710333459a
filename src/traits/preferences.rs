//! Persisted preference store abstraction.
//!
//! A narrow get/set-string-by-key capability. The controller uses it for the
//! theme preference only, but nothing here is theme-specific.

/// Preference storage errors.
#[derive(Debug, Clone)]
pub enum PreferenceError {
    /// Failed to read the backing store
    LoadFailed(String),
    /// Failed to write the backing store
    SaveFailed(String),
    /// Stored data could not be (de)serialized
    Serialization(String),
}

impl std::fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceError::LoadFailed(msg) => write!(f, "Failed to load preferences: {}", msg),
            PreferenceError::SaveFailed(msg) => write!(f, "Failed to save preferences: {}", msg),
            PreferenceError::Serialization(msg) => {
                write!(f, "Preference serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PreferenceError {}

/// Persisted string key-value store.
///
/// Reads are infallible from the caller's point of view: a store that cannot
/// be read behaves like an empty one.
pub trait PreferenceStore: Send + Sync {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
