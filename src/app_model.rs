use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{
    DEFAULT_APPS_KEY, DEFAULT_DOWNLOAD_KEY, DEFAULT_ICON_KEY, DEFAULT_NAME_KEY,
};

/// Lookup keys used when decoding entries from a JSON mapping.
///
/// Catalog documents in the wild do not agree on key names, so every lookup
/// is configurable. The defaults match the field names of [`AppModel`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct DictKeys {
    pub name: String,
    pub download: String,
    pub icon: String,
    /// Key holding the entry array when the catalog document is an object
    pub apps: String,
}

impl Default for DictKeys {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME_KEY.to_string(),
            download: DEFAULT_DOWNLOAD_KEY.to_string(),
            icon: DEFAULT_ICON_KEY.to_string(),
            apps: DEFAULT_APPS_KEY.to_string(),
        }
    }
}

/// One downloadable application entry
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppModel {
    pub name: String,
    pub download: String,
    pub icon: String,
}

fn string_at(dict: &Map<String, Value>, key: &str) -> String {
    match dict.get(key).and_then(Value::as_str) {
        Some(string) => string.to_string(),
        None => String::new(),
    }
}

impl AppModel {
    /// Decode one entry from a JSON object.
    ///
    /// This never fails: a key that is absent or holds a non-string value
    /// leaves the matching field empty.
    pub fn from_dict(dict: &Map<String, Value>, keys: &DictKeys) -> Self {
        Self {
            name: string_at(dict, &keys.name),
            download: string_at(dict, &keys.download),
            icon: string_at(dict, &keys.icon),
        }
    }

    /// Decode from any JSON value; non-objects yield the all-empty entry
    pub fn from_value(value: &Value, keys: &DictKeys) -> Self {
        match value.as_object() {
            Some(dict) => Self::from_dict(dict, keys),
            None => Self::default(),
        }
    }

    /// True when all three fields are empty
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.download.is_empty() && self.icon.is_empty()
    }
}
