use std::{error::Error, fmt, fs, io, path::Path, time::Instant};

use serde_json::Value;

use crate::app_model::{AppModel, DictKeys};


/// Failure to read or decode a catalog document.
///
/// Only the top-level document shape can fail; individual entries are decoded
/// by a total factory and degrade to empty fields instead of erroring.
#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    Json(serde_json::Error),
    Shape(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read catalog: {}", err),
            Self::Json(err) => write!(f, "failed to parse catalog: {}", err),
            Self::Shape(message) => write!(f, "unexpected catalog shape: {}", message),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Shape(_) => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// A decoded list of application entries
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub apps: Vec<AppModel>,
}

impl Catalog {
    /// Parse a catalog document.
    ///
    /// The document is either a top-level array of entry objects, or an
    /// object holding that array under the configured collection key.
    /// Array elements that are not objects are skipped with a warning.
    pub fn parse_json(label: &str, data: &[u8], keys: &DictKeys) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_slice(data)?;
        let entries = match &value {
            Value::Array(entries) => entries.as_slice(),
            Value::Object(map) => match map.get(&keys.apps).and_then(Value::as_array) {
                Some(entries) => entries.as_slice(),
                None => {
                    return Err(CatalogError::Shape(format!(
                        "{}: object document has no {:?} array",
                        label, keys.apps
                    )));
                }
            },
            _ => {
                return Err(CatalogError::Shape(format!(
                    "{}: top-level value must be an array or an object",
                    label
                )));
            }
        };

        let mut apps = Vec::with_capacity(entries.len());
        let mut skipped = 0;
        for entry in entries {
            if !entry.is_object() {
                skipped += 1;
                continue;
            }
            apps.push(AppModel::from_value(entry, keys));
        }
        if skipped > 0 {
            log::warn!("{}: skipped {} non-object entries", label, skipped);
        }
        Ok(Self { apps })
    }

    /// Read and parse a catalog file
    pub fn load(path: &Path, keys: &DictKeys) -> Result<Self, CatalogError> {
        let start = Instant::now();
        let data = fs::read(path)?;
        let catalog = Self::parse_json(&path.display().to_string(), &data, keys)?;
        log::debug!(
            "loaded {} entries from {:?} in {:?}",
            catalog.apps.len(),
            path,
            start.elapsed()
        );
        Ok(catalog)
    }
}
