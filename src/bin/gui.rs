// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use drive_chart::config::state::AppState;
use drive_chart::gui;
use eframe::egui::ViewportBuilder;

fn main() {
    drive_chart::log::init_file();

    // Optional first argument: path to the play-by-play table.
    let mut state = AppState::default();
    if let Some(path) = std::env::args_os().nth(1) {
        state.options.data_path = path.into();
    }
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Drive Chart")
            .with_inner_size([state.gui.window_w, state.gui.window_h])
            .with_icon(gui::icon::app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
