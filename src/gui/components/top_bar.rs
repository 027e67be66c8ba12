// src/gui/components/top_bar.rs
//
// Week selector, drive navigation, counter and clipboard copy.
// Selection changes are applied after the widgets are drawn.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut picked = app.state.gui.selected_week.clone();
    let mut go_prev = false;
    let mut go_next = false;
    let mut copy = false;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let enabled = app.load_error.is_none();
        ui.add_enabled_ui(enabled, |ui| {
            let shown = picked.as_deref()
                .map(|w| format!("Week {w}"))
                .unwrap_or_else(|| s!("Select a week"));

            egui::ComboBox::from_id_salt("week_selector")
                .selected_text(shown)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut picked, None, "Select a week");
                    for w in &app.season.weeks {
                        ui.selectable_value(&mut picked, Some(w.clone()), format!("Week {w}"));
                    }
                });
        });

        if app.has_drives() {
            ui.separator();

            go_prev = ui.add_enabled(app.cursor.has_prev(), egui::Button::new("▲ Previous"))
                .on_hover_text("Arrow Up")
                .clicked();

            if let Some(counter) = app.cursor.counter() {
                ui.label(egui::RichText::new(counter).strong());
            }

            go_next = ui.add_enabled(app.cursor.has_next(), egui::Button::new("Next ▼"))
                .on_hover_text("Arrow Down")
                .clicked();

            ui.separator();
            ui.checkbox(&mut app.state.gui.show_drive_list, "Drive list");
            copy = ui.button("Copy").on_hover_text("Copy score timeline").clicked();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(app.status.as_str());
        });
    });

    if picked != app.state.gui.selected_week {
        app.select_week(picked);
    }
    if go_prev { app.go_prev(); }
    if go_next { app.go_next(); }
    if copy { app.copy_timeline(ui.ctx()); }
}
