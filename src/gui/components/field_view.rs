// src/gui/components/field_view.rs
//
// Painted field: end zones, yard lines, start/end markers, touchdown banner.
// Positions come in as field percent (0 = left edge, 100 = right edge).

use eframe::egui::{self, Align2, Color32, CornerRadius, FontId, Pos2, Rect, Stroke, Vec2};

use crate::config::consts::{AWAY_GOAL_LINE, HOME_GOAL_LINE, YARD_LINES};
use crate::transition::Frame;
use crate::view::DriveView;

const TURF: Color32 = Color32::from_rgb(46, 125, 50);
const HOME_ENDZONE: Color32 = Color32::from_rgb(21, 101, 192);
const AWAY_ENDZONE: Color32 = Color32::from_rgb(198, 40, 40);
const START_MARKER: Color32 = Color32::from_rgb(0, 230, 118);
const END_MARKER: Color32 = Color32::from_rgb(255, 23, 68);
const BANNER: Color32 = Color32::from_rgb(255, 214, 0);

const ASPECT: f32 = 0.32;
const MIN_HEIGHT: f32 = 140.0;

fn x_at(rect: Rect, pct: f64) -> f32 {
    rect.left() + rect.width() * (pct as f32 / 100.0)
}

pub fn draw(ui: &mut egui::Ui, view: &DriveView, frame: &Frame) {
    let w = ui.available_width();
    let h = (w * ASPECT).max(MIN_HEIGHT);
    let (response, painter) = ui.allocate_painter(Vec2::new(w, h), egui::Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, CornerRadius::same(6), TURF);

    // End zones
    let left = Rect::from_min_max(rect.min, Pos2::new(x_at(rect, HOME_GOAL_LINE), rect.bottom()));
    let right = Rect::from_min_max(Pos2::new(x_at(rect, AWAY_GOAL_LINE), rect.top()), rect.max);
    painter.rect_filled(left, CornerRadius::same(6), HOME_ENDZONE);
    painter.rect_filled(right, CornerRadius::same(6), AWAY_ENDZONE);

    let label_font = FontId::proportional((h * 0.14).clamp(12.0, 26.0));
    painter.text(left.center(), Align2::CENTER_CENTER, &view.left_endzone, label_font.clone(), Color32::WHITE);
    painter.text(right.center(), Align2::CENTER_CENTER, &view.right_endzone, label_font, Color32::WHITE);

    // Yard lines
    let line = Stroke::new(2.0, Color32::from_white_alpha(200));
    for pct in YARD_LINES {
        let x = x_at(rect, pct);
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], line);
    }

    let y = rect.center().y;
    let r = (h * 0.07).clamp(7.0, 14.0);
    let outline = Stroke::new(2.0, Color32::WHITE);

    if let Some(s) = view.start_marker {
        let c = Pos2::new(x_at(rect, s), y);
        painter.circle_filled(c, r, START_MARKER);
        painter.circle_stroke(c, r, outline);
    }

    if let Some(e) = frame.end_marker {
        let c = Pos2::new(x_at(rect, e), y);
        let a = frame.end_opacity;
        painter.circle_filled(c, r, END_MARKER.gamma_multiply(a));
        painter.circle_stroke(c, r, Stroke::new(2.0, Color32::WHITE.gamma_multiply(a)));
    }

    if view.touchdown && frame.revealed {
        let font = FontId::proportional((h * 0.3).clamp(24.0, 64.0));
        let pos = Pos2::new(rect.center().x, rect.top() + h * 0.25);
        painter.text(pos + Vec2::splat(2.0), Align2::CENTER_CENTER, "TOUCHDOWN", font.clone(), Color32::BLACK);
        painter.text(pos, Align2::CENTER_CENTER, "TOUCHDOWN", font, BANNER);
    }
}
