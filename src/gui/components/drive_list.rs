// src/gui/components/drive_list.rs
//
// Left panel: every drive of the selected week with the running score.
// Clicking a row jumps to that drive.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Drives");
    ui.separator();

    let cur = app.cursor.index();
    let home = app.cursor.axis().home().to_string();
    let opp = app.cursor.opponent();
    let drives = app.cursor.drives();
    let snaps = app.cursor.snapshots();
    let mut jump: Option<usize> = None;

    TableBuilder::new(ui)
        .striped(true)
        .id_salt("drive_list")
        .column(Column::exact(28.0))
        .column(Column::exact(48.0))
        .column(Column::exact(48.0))
        .column(Column::remainder().at_least(56.0))
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("#"); });
            header.col(|ui| { ui.strong("Team"); });
            header.col(|ui| { ui.strong("Ended"); });
            header.col(|ui| { ui.strong(format!("{home}-{opp}")); });
        })
        .body(|body| {
            body.rows(20.0, drives.len(), |mut row| {
                let ix = row.index();
                let d = &drives[ix];
                row.col(|ui| {
                    if ui.selectable_label(ix == cur, format!("{}", ix + 1)).clicked() {
                        jump = Some(ix);
                    }
                });
                row.col(|ui| { ui.label(d.team().unwrap_or("-")); });
                row.col(|ui| {
                    let ended = d.ended_how.as_ref().map(|h| h.code()).unwrap_or("-");
                    if d.is_touchdown() { ui.strong(ended); } else { ui.label(ended); }
                });
                row.col(|ui| {
                    if let Some(snap) = snaps.get(ix) {
                        ui.label(format!("{}-{}", snap.points(&home), snap.points(&opp)));
                    }
                });
            });
        });

    if let Some(ix) = jump {
        app.jump_to(ix);
    }
}
