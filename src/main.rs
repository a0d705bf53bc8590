//! Native entry point: logger setup and the eframe event loop.

use eframe::egui;
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> eframe::Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();
    info!("starting kinelab");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1100.0, 780.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Kinelab",
        options,
        Box::new(|cc| {
            // The canvases assume a light page background.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(kinelab::KinelabApp::new()))
        }),
    )
}
