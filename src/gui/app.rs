// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    cursor::{DriveCursor, WeekSelection},
    field::FieldAxis,
    file,
    store::{self, Season},
    transition::MarkerTransition,
};

use super::components;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Drive Chart",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded once at startup
    pub season: Season,
    pub load_error: Option<String>,

    // selected week + drive
    pub cursor: DriveCursor,

    // egui time at which the current drive was first drawn; None = restart transition
    pub shown_at: Option<f64>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (season, load_error) = match store::load_season(&state.options.data_path) {
            Ok(season) => (season, None),
            Err(e) => {
                let msg = format!(
                    "Error loading data. Please ensure {} is in the same directory as the application. ({})",
                    state.options.data_path.display(),
                    e
                );
                (Season::default(), Some(msg))
            }
        };

        let status = if load_error.is_none() {
            format!("Loaded {} drive(s), {} week(s)", season.drives.len(), season.weeks.len())
        } else {
            s!("Load failed")
        };

        logf!("Init: home={}, weeks={:?}", state.options.home_team, season.weeks);

        let cursor = DriveCursor::new(FieldAxis::new(state.options.home_team.clone()));

        Self { state, season, load_error, cursor, shown_at: None, status }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn has_drives(&self) -> bool { !self.cursor.is_empty() }

    #[inline]
    fn restart_transition(&mut self) { self.shown_at = None; }

    pub fn select_week(&mut self, week: Option<String>) {
        logf!("UI: Week {:?} → {:?}", self.state.gui.selected_week, week);
        let outcome = self.cursor.select_week(&self.season.drives, week.as_deref());
        self.state.gui.selected_week = week;
        self.status = match outcome {
            WeekSelection::Cleared => s!("Idle"),
            WeekSelection::Empty => s!("No games found for this week."),
            WeekSelection::Ready { drives } => format!("{} drive(s)", drives),
        };
        self.restart_transition();
    }

    pub fn go_prev(&mut self) {
        if self.cursor.prev() { self.restart_transition(); }
    }

    pub fn go_next(&mut self) {
        if self.cursor.next() { self.restart_transition(); }
    }

    pub fn jump_to(&mut self, ix: usize) {
        if self.cursor.jump(ix) { self.restart_transition(); }
    }

    /// Copy the week's score timeline (TSV/CSV per export options) to the clipboard.
    pub fn copy_timeline(&mut self, ctx: &egui::Context) {
        let export = &self.state.options.export;
        let text = file::score_timeline_string(
            self.cursor.drives(),
            self.cursor.snapshots(),
            self.cursor.axis().home(),
            &self.cursor.opponent(),
            export.include_headers,
            export.format.delim(),
        );
        ctx.copy_text(text);
        logf!("UI: Copied timeline ({} drive(s))", self.cursor.len());
        self.status = format!("Copied {} drive(s)", self.cursor.len());
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if !self.has_drives() { return; }
        let (up, down) = ctx.input(|i| (
            i.key_pressed(egui::Key::ArrowUp),
            i.key_pressed(egui::Key::ArrowDown),
        ));
        if up { self.go_prev(); }
        if down { self.go_next(); }
    }

    fn draw_drive(&mut self, ui: &mut egui::Ui) {
        let Some(view) = self.cursor.current() else { return; };

        let now = ui.input(|i| i.time);
        let shown_at = *self.shown_at.get_or_insert(now);
        let transition = MarkerTransition::new(view.start_marker, view.end_marker, &self.state.options.transition);
        let frame = transition.frame(now - shown_at);
        if frame.animating {
            ui.ctx().request_repaint();
        }

        ui.vertical_centered(|ui| {
            ui.heading(view.title.as_str());
        });
        ui.add_space(6.0);
        components::scoreboard::draw(ui, &view);
        ui.add_space(6.0);
        components::field_view::draw(ui, &view, &frame);
        ui.add_space(10.0);
        components::game_info::draw(ui, &view, frame.revealed);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("week_bar").show(ctx, |ui| {
            components::top_bar::draw(ui, self);
        });

        if self.state.gui.show_drive_list && self.has_drives() {
            egui::SidePanel::left("drives")
                .resizable(false)
                .show(ctx, |ui| {
                    components::drive_list::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.load_error {
                components::message(ui, err);
            } else if self.state.gui.selected_week.is_none() {
                components::message(ui, "Select a week to view its drives.");
            } else if !self.has_drives() {
                components::message(ui, "No games found for this week.");
            } else {
                self.draw_drive(ui);
            }
        });
    }
}
