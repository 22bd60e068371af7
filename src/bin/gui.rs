// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use mv_dash::config::consts::{WINDOW_H, WINDOW_W};
use mv_dash::config::options::AppOptions;
use mv_dash::{gui, log};

fn main() {
    log::init(log::LogTarget::File);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Football Market Values")
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, AppOptions::from_env()) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
