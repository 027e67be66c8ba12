// src/gui/components/scoreboard.rs
use eframe::egui::{self, Color32, RichText};
use crate::view::{DriveView, ScoreLine};

const HOME_COLOR: Color32 = Color32::from_rgb(21, 101, 192);
const AWAY_COLOR: Color32 = Color32::from_rgb(198, 40, 40);

fn side(ui: &mut egui::Ui, line: &ScoreLine, color: Color32) {
    ui.label(RichText::new(&line.team).size(18.0).strong().color(color));
    ui.label(RichText::new(line.points.to_string()).size(30.0).strong());
}

/// Home always on the left, regardless of who drove.
pub fn draw(ui: &mut egui::Ui, view: &DriveView) {
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            // Rough centering; egui has no intrinsic-width centering for rows.
            let w = ui.available_width();
            ui.add_space((w / 2.0 - 110.0).max(0.0));
            side(ui, &view.home, HOME_COLOR);
            ui.label(RichText::new("-").size(30.0));
            ui.label(RichText::new(view.away.points.to_string()).size(30.0).strong());
            ui.label(RichText::new(&view.away.team).size(18.0).strong().color(AWAY_COLOR));
        });
    });
}
