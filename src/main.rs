mod app;
mod cli;
mod color;
mod data;
mod headless;
mod state;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use eframe::egui;

use app::JomatoApp;
use cli::Cli;
use state::AppState;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if cli.headless {
        let stdout = std::io::stdout();
        return match headless::run(&cli, &mut stdout.lock()) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{e:#}");
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        };
    }

    let mut state = AppState::default();
    match headless::load_dataset(&cli) {
        Ok(ds) => {
            state.set_dataset(ds);
            state.apply_criteria(cli.criteria());
        }
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Jomato – Restaurant Browser",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(JomatoApp::new(state)))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("UI exited with error: {e}");
            ExitCode::FAILURE
        }
    }
}
