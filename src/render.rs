// src/render.rs
//
// Plain-text drive card for the CLI.

use std::fmt::Write;

use crate::config::consts::YARD_LINES;
use crate::view::DriveView;

pub const FIELD_WIDTH: usize = 60;

/// Column for a field percentage on a `width`-wide strip.
fn column(pct: f64, width: usize) -> usize {
    let last = width.saturating_sub(1) as f64;
    ((pct / 100.0) * last).round().clamp(0.0, last) as usize
}

/// One-line field: `[MER|....S.....E....|YSU]`.
/// Yard lines are `:`; the end marker wins when both land on one column.
pub fn field_strip(view: &DriveView, width: usize) -> String {
    if width == 0 {
        return format!("[{}||{}]", view.left_endzone, view.right_endzone);
    }
    let mut cells = vec!['.'; width];
    for pct in YARD_LINES {
        cells[column(pct, width)] = ':';
    }
    if let Some(s) = view.start_marker {
        cells[column(s, width)] = 'S';
    }
    if let Some(e) = view.end_marker {
        cells[column(e, width)] = 'E';
    }
    let field: String = cells.into_iter().collect();
    format!("[{}|{}|{}]", view.left_endzone, field, view.right_endzone)
}

pub fn drive_card(view: &DriveView) -> String {
    let mut out = s!();
    let _ = writeln!(out, "{}  {}", view.counter, view.title);
    let _ = writeln!(
        out,
        "{} {} - {} {}",
        view.home.team, view.home.points, view.away.points, view.away.team
    );
    let _ = writeln!(out, "{}", field_strip(view, FIELD_WIDTH));
    if view.touchdown {
        let _ = writeln!(out, "TOUCHDOWN");
    }
    for line in &view.info {
        let _ = writeln!(out, "{}: {}", line.label, line.value);
    }
    if let Some(play) = &view.scoring_play {
        let _ = writeln!(out, "Scoring Play: {}", play);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drive::{Drive, DriveResult};
    use crate::field::FieldAxis;
    use crate::score::ScoreSnapshot;

    fn view() -> DriveView {
        let d = Drive {
            team: Some(s!("MER")),
            scoring_team: Some(s!("MER")),
            ended_how: Some(DriveResult::Touchdown),
            started_spot: Some(s!("MER0")),
            ended_spot: Some(s!("YSU0")),
            site: Some(s!("Erie, PA")),
            scoring_play: Some(s!("MER - Smith 5 yd run")),
            ..Drive::default()
        };
        let snap = ScoreSnapshot::from([("MER", 7), ("YSU", 0)]);
        let teams = vec![s!("MER"), s!("YSU")];
        DriveView::build(&d, 0, 4, &snap, &teams, &FieldAxis::default())
    }

    #[test]
    fn markers_sit_on_goal_lines() {
        let strip = field_strip(&view(), 11);
        // 10% and 90% of an 11-wide strip → columns 1 and 9. A home drive
        // whose scoring play names the home team has no inferable opponent.
        assert_eq!(strip, "[MER|.S:::::::E.|OPP]");
    }

    #[test]
    fn zero_width_strip_has_only_end_zones() {
        assert_eq!(field_strip(&view(), 0), "[MER||OPP]");
    }

    #[test]
    fn card_has_score_banner_and_play() {
        let card = drive_card(&view());
        assert!(card.starts_with("Drive 1 of 4  Drive for MER\n"));
        assert!(card.contains("MER 7 - 0 YSU\n"));
        assert!(card.contains("\nTOUCHDOWN\n"));
        assert!(card.contains("Site: Erie, PA\n"));
        assert!(card.contains("Drive Ended: TD\n"));
        assert!(card.ends_with("Scoring Play: MER - Smith 5 yd run\n"));
    }
}
