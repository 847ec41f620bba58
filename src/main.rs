#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod config;
mod error;
mod layout;
mod logging;
mod model;
mod ui;

use eframe::egui;

fn main() -> eframe::Result<()> {
    logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting hako");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1400.0, 900.0])
        .with_min_inner_size([900.0, 600.0])
        .with_title("hako");

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "hako",
        options,
        Box::new(|cc| Ok(Box::new(ui::HakoApp::new(cc)))),
    )
}
