#![warn(clippy::all)]

use conway_torus::{App, Config};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    use eframe::egui::{vec2, ViewportBuilder};

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // optional JSON config as the only argument
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path),
        None => Ok(Config::default()),
    };
    let app = match config.and_then(|config| App::new(&config)) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!(%err, "cannot start the simulation");
            return ExitCode::FAILURE;
        }
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(860., 600.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    let result = eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    );
    if let Err(err) = result {
        tracing::error!(%err, "window closed with an error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
