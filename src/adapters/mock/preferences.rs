//! In-memory preference store for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{PreferenceError, PreferenceStore};

/// In-memory [`PreferenceStore`].
///
/// Clones share the same map, so a test can hand one clone to an `App`,
/// drop the app, and give another clone to a fresh `App` to simulate a new
/// session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
    save_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Configure whether `set` should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(PreferenceError::SaveFailed(
                "Simulated save failure".to_string(),
            ));
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
