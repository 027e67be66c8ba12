// src/gui/components/mod.rs
use eframe::egui;

pub mod drive_list;
pub mod field_view;
pub mod game_info;
pub mod scoreboard;
pub mod top_bar;

/// Centered static message (load error, empty week, nothing selected).
pub fn message(ui: &mut egui::Ui, text: &str) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(text).size(16.0).italics());
    });
}
