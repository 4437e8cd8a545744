//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `restobook_core` linkage and configuration loading.
//! - Open (or seed) the restaurant book and print a deterministic summary.
//!
//! Usage: `restobook_cli [config.json]`

use restobook_core::{
    init_logging_from_config, load_config, sample_book, BookStorage, EntityKind, JsonBookStorage,
    RestaurantModel, Snapshot,
};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_CONFIG_FILE: &str = "restobook.config.json";

fn main() -> ExitCode {
    println!("restobook_core ping={}", restobook_core::ping());
    println!("restobook_core version={}", restobook_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = load_config(&config_path).map_err(|err| err.to_string())?;
    init_logging_from_config(&config)?;

    let storage = JsonBookStorage::new(config.data_file.clone());
    let book = match storage.read_book().map_err(|err| err.to_string())? {
        Some(book) => book,
        None if config.seed_sample_data => sample_book().map_err(|err| err.to_string())?,
        None => Snapshot::default(),
    };
    let model = RestaurantModel::new(book, config.window_policy);

    let current = model.current();
    println!("data_file={}", storage.path().display());
    for kind in EntityKind::ALL {
        println!("{}_count={}", kind, current.len_of(kind));
    }
    println!("capacity={}", current.capacity());
    log::info!("event=cli_summary module=cli status=ok");
    Ok(())
}
