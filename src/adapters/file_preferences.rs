//! File-based preference store.
//!
//! Preferences live in a flat JSON object, by default at
//! `<config dir>/folio/preferences.json`. The file is read once on open and
//! replaced on every `set` by writing a sibling `.tmp` file and renaming it
//! over the original.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::traits::{PreferenceError, PreferenceStore};

const APP_DIR: &str = "folio";
const PREFERENCES_FILE: &str = "preferences.json";

/// JSON-file backed [`PreferenceStore`].
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FilePreferenceStore {
    /// Default location under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(PREFERENCES_FILE))
    }

    /// Open the store at `path`.
    ///
    /// A missing or unreadable file yields an empty store; it is created on
    /// the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read_values(&path) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("Ignoring preferences at {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn read_values(path: &Path) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let json =
            fs::read_to_string(path).map_err(|e| PreferenceError::LoadFailed(e.to_string()))?;
        if json.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&json).map_err(|e| PreferenceError::Serialization(e.to_string()))
    }

    fn write_values(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PreferenceError::SaveFailed(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| PreferenceError::Serialization(e.to_string()))?;
        let tmp_path = Self::tmp_path(&self.path);
        fs::write(&tmp_path, json).map_err(|e| PreferenceError::SaveFailed(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            PreferenceError::SaveFailed(e.to_string())
        })
    }

    /// Sibling file the next contents are staged in before the rename.
    fn tmp_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        path.with_file_name(name)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        self.write_values(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::open(dir.path().join("preferences.json"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let store = FilePreferenceStore::open(&path);
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme"), Some("light".to_string()));

        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(reopened.get("theme"), Some("light".to_string()));
    }

    #[test]
    fn test_set_leaves_no_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");

        let store = FilePreferenceStore::open(&path);
        store.set("theme", "light").unwrap();
        store.set("theme", "dark").unwrap();

        assert!(!dir.path().join("preferences.json.tmp").exists());
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("preferences.json")]);
        assert_eq!(
            FilePreferenceStore::open(&path).get("theme"),
            Some("dark".to_string())
        );
    }

    #[test]
    fn test_stale_tmp_file_does_not_affect_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"theme":"light"}"#).unwrap();
        fs::write(dir.path().join("preferences.json.tmp"), "{trunc").unwrap();

        let store = FilePreferenceStore::open(&path);
        assert_eq!(store.get("theme"), Some("light".to_string()));

        store.set("theme", "dark").unwrap();
        assert!(!dir.path().join("preferences.json.tmp").exists());
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::open(dir.path().join("preferences.json"));
        store.set("theme", "light").unwrap();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();

        let store = FilePreferenceStore::open(&path);
        assert_eq!(store.get("theme"), None);

        // Next write replaces the corrupt file
        store.set("theme", "light").unwrap();
        assert_eq!(
            FilePreferenceStore::open(&path).get("theme"),
            Some("light".to_string())
        );
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        if let Some(path) = FilePreferenceStore::default_path() {
            assert!(path.ends_with("folio/preferences.json"));
        }
    }
}
