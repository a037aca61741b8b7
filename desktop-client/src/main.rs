mod app;
mod config;
mod sprites;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use snake_engine::config::load_or_create;
use snake_engine::{SessionRng, log, logger};

use app::SnakeApp;
use config::{Config, default_config_path};

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    /// Path to the YAML settings file (created with defaults if missing)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed session seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger();

    let config_path = args.config.unwrap_or_else(default_config_path);
    let config: Config = load_or_create(&config_path)?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let window_size = [
        config.game.board_width as f32 * config.cell_pixels as f32,
        config.game.board_height as f32 * config.cell_pixels as f32 + 40.0,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(&config, rng)))),
    )?;

    Ok(())
}
