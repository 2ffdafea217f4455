// main.rs - Window setup for the interactive Game of Life

use anyhow::{Context, anyhow};
use eframe::egui;
use life::LifeConfig;
use log::{error, info};

mod input;  // egui input -> TickInput
mod ui;     // eframe::App implementation

use ui::LifeApp;

const TITLE: &str = "Life";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LifeConfig::from_env().context("invalid configuration")?;
    info!(
        "starting {n}x{n} grid, {} px cells, one generation every {} ticks",
        config.cell_size,
        config.step_interval,
        n = config.grid_size
    );

    let side = config.screen_size()? as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([side, side])
            .with_resizable(false),
        ..Default::default()
    };

    let app = LifeApp::new(config);
    eframe::run_native(TITLE, options, Box::new(move |_cc| Box::new(app))).map_err(|err| {
        error!("failed to initialise the window: {err}");
        anyhow!("failed to initialise the window: {err}")
    })
}
