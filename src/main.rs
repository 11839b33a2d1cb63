// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;
use std::error::Error;
use std::path::Path;

use app_model::AppModel;
mod app_model;

use catalog::Catalog;
mod catalog;

use cli::{Cli, Command};
mod cli;

use config::Config;
mod config;

mod constants;

mod search;

mod utils;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());
    let mut keys = config.keys;
    cli.apply_key_overrides(&mut keys);

    match &cli.command {
        Command::List { catalog } => {
            let catalog = Catalog::load(catalog, &keys)?;
            let mut apps = catalog.apps;
            let total = apps.len();
            apps.retain(|model| !model.is_empty());
            if apps.len() < total {
                log::info!("{} empty entries not shown", total - apps.len());
            }
            apps.sort_by(|a, b| a.name.cmp(&b.name));
            for model in &apps {
                print_row(model);
            }
            println!("{} entries", apps.len());
        }
        Command::Search { catalog, query } => {
            let catalog = Catalog::load(catalog, &keys)?;
            let results = search::search(&catalog.apps, query);
            for result in results.iter().take(constants::MAX_RESULTS) {
                println!(
                    "{:>4} {:<24} {}",
                    result.index,
                    cell(&result.model.name, 24),
                    cell(&result.model.download, constants::ELIDE_WIDTH),
                );
            }
            if results.len() > constants::MAX_RESULTS {
                println!(
                    "showing {} of {} results",
                    constants::MAX_RESULTS,
                    results.len()
                );
            } else {
                println!("{} results", results.len());
            }
        }
        Command::Show { catalog, name } => {
            let path: &Path = catalog;
            let catalog = Catalog::load(path, &keys)?;
            match catalog.apps.iter().find(|model| model.name == *name) {
                Some(model) => {
                    println!("name: {}", model.name);
                    println!("download: {}", or_dash(&model.download));
                    println!("icon: {}", or_dash(&model.icon));
                }
                None => {
                    return Err(format!("no entry named {:?} in {:?}", name, path).into());
                }
            }
        }
    }

    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn cell(value: &str, max: usize) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        utils::elide(value, max)
    }
}

fn print_row(model: &AppModel) {
    println!(
        "{:<24} {:<width$} {}",
        cell(&model.name, 24),
        cell(&model.download, constants::ELIDE_WIDTH),
        cell(&model.icon, constants::ELIDE_WIDTH),
        width = constants::ELIDE_WIDTH,
    );
}
