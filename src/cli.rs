use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app_model::DictKeys;

#[derive(Debug, Parser)]
#[command(about = "Inspect catalogs of downloadable application entries")]
pub struct Cli {
    /// Configuration file overriding the default lookup keys
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Mapping key for the display name field
    #[arg(long)]
    pub name_key: Option<String>,
    /// Mapping key for the download URL field
    #[arg(long)]
    pub download_key: Option<String>,
    /// Mapping key for the icon URL field
    #[arg(long)]
    pub icon_key: Option<String>,
    /// Key holding the entry array in an object catalog document
    #[arg(long)]
    pub apps_key: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every entry in a catalog
    List { catalog: PathBuf },
    /// Search a catalog by name, download URL, or icon URL
    Search { catalog: PathBuf, query: String },
    /// Print the entry whose name matches exactly
    Show { catalog: PathBuf, name: String },
}

impl Cli {
    /// Fold command-line key overrides into the configured lookup keys
    pub fn apply_key_overrides(&self, keys: &mut DictKeys) {
        if let Some(name) = &self.name_key {
            keys.name = name.clone();
        }
        if let Some(download) = &self.download_key {
            keys.download = download.clone();
        }
        if let Some(icon) = &self.icon_key {
            keys.icon = icon.clone();
        }
        if let Some(apps) = &self.apps_key {
            keys.apps = apps.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_overrides_replace_only_given_keys() {
        let cli = Cli::parse_from([
            "app-catalog",
            "--name-key",
            "title",
            "--apps-key",
            "entries",
            "list",
            "catalog.json",
        ]);
        let mut keys = DictKeys::default();
        cli.apply_key_overrides(&mut keys);
        assert_eq!(keys.name, "title");
        assert_eq!(keys.apps, "entries");
        assert_eq!(keys.download, "download");
        assert_eq!(keys.icon, "icon");
    }
}
