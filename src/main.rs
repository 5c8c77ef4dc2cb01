mod app;
mod config;
mod data;
mod error;
mod export;
mod fit;
mod state;
mod ui;

use std::path::Path;
use std::process::ExitCode;

use app::ClimateTrendsApp;
use eframe::egui;

fn main() -> ExitCode {
    env_logger::init();

    // The dataset is required; refuse to open a window without it.
    let dataset = match data::loader::load_file(Path::new(config::DATASET_PATH)) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            eprintln!("error: could not load climate dataset: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    if dataset.is_empty() {
        log::warn!("{} contains no records", config::DATASET_PATH);
    } else if let Some((first, last)) = dataset.year_span() {
        log::info!(
            "Loaded {} records ({first}–{last}) from {}",
            dataset.len(),
            config::DATASET_PATH
        );
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    let result = eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            // Chart colours assume a light background.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(ClimateTrendsApp::new(dataset)))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("GUI terminated with error: {e}");
            ExitCode::FAILURE
        }
    }
}
