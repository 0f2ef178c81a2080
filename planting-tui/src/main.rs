mod app;
mod data;
mod error;
mod event_loop;
mod filters;
mod paths;
mod settings;
mod terminal;
mod theme;
mod view;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::settings::Settings;

fn init_logging() {
    paths::rotate_logs();

    let file = paths::log_file()
        .and_then(|path| File::create(path).ok())
        .or_else(|| File::create("planting-tui.log").ok());

    if let Some(file) = file {
        if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
            eprintln!("Failed to initialize logger: {}", e);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let settings = Settings::load().unwrap_or_else(|e| {
        log::warn!("Using default settings: {}", e);
        Settings::default()
    });

    if let Err(e) = event_loop::run(&settings).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
