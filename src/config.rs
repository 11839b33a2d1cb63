use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::app_model::DictKeys;

const CONFIG_PATH: &str = "app-catalog/config.json";

/// User configuration, currently just the catalog lookup keys
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Config {
    pub keys: DictKeys,
}

impl Config {
    /// Load configuration, falling back to defaults on any failure.
    ///
    /// An unreadable explicit path logs an error; a missing default config
    /// file is the normal first-run state and logs at info.
    pub fn load(path_opt: Option<&Path>) -> Self {
        let path = match path_opt {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) => path,
                None => {
                    log::info!("no config directory, using default configuration");
                    return Self::default();
                }
            },
        };
        match fs::read(&path) {
            Ok(data) => match serde_json::from_slice::<Self>(&data) {
                Ok(config) => config,
                Err(err) => {
                    log::error!("failed to parse config {:?}: {}", path, err);
                    Self::default()
                }
            },
            Err(err) => {
                if path_opt.is_some() {
                    log::error!("failed to read config {:?}: {}", path, err);
                } else {
                    log::info!("no config at {:?}: {}", path, err);
                }
                Self::default()
            }
        }
    }
}

fn default_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(CONFIG_PATH))
}
