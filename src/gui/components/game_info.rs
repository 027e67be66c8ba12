// src/gui/components/game_info.rs
use eframe::egui::{self, RichText};
use crate::view::DriveView;

/// Metadata under the field. Hidden until the marker transition finishes;
/// the space is still reserved so the layout doesn't jump.
pub fn draw(ui: &mut egui::Ui, view: &DriveView, revealed: bool) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        if !revealed {
            ui.add_space(18.0 * view.info.len().max(1) as f32);
            return;
        }

        for line in &view.info {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{}:", line.label)).strong());
                ui.label(line.value.as_str());
            });
        }

        if let Some(play) = &view.scoring_play {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("Scoring Play:").strong());
                ui.label(play.as_str());
            });
        }
    });
}
