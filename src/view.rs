// src/view.rs
//
// Everything the presenters (GUI painter, CLI text) show for one drive,
// computed up front as plain data.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::UNKNOWN_OPPONENT;
use crate::drive::Drive;
use crate::field::FieldAxis;
use crate::score::ScoreSnapshot;

static SCORING_PLAY_TEAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]+)\s*-").expect("scoring play pattern")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreLine {
    pub team: String,
    pub points: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DriveView {
    pub title: String,
    pub counter: String,
    pub home: ScoreLine,
    pub away: ScoreLine,
    pub left_endzone: String,
    pub right_endzone: String,
    pub start_marker: Option<f64>,
    pub end_marker: Option<f64>,
    pub touchdown: bool,
    pub info: Vec<InfoLine>,
    pub scoring_play: Option<String>,
}

/// Best guess at the other side of a drive: the scoring team if it isn't the
/// driving team, else the team prefix of the scoring play ("YSU - ..."),
/// else "OPP".
pub fn opposing_team(drive: &Drive) -> String {
    let team = drive.team();

    if let Some(st) = drive.scoring_team() {
        if Some(st) != team {
            return s!(st);
        }
    }

    if let Some(play) = drive.scoring_play.as_deref() {
        if let Some(caps) = SCORING_PLAY_TEAM_RE.captures(play) {
            let prefix = &caps[1];
            if Some(prefix) != team {
                return s!(prefix);
            }
        }
    }

    s!(UNKNOWN_OPPONENT)
}

/// Opponent shown in the right end zone: the driving team when it isn't home.
fn right_endzone(drive: &Drive, home: &str) -> String {
    match drive.team() {
        Some(t) if t != home => s!(t),
        _ => opposing_team(drive),
    }
}

/// Opponent for the scoreboard. A clean two-team week names it directly;
/// anything else falls back to per-drive inference.
fn scoreboard_opponent(drive: &Drive, week_teams: &[String], home: &str) -> String {
    if week_teams.len() == 2 {
        week_teams.iter()
            .find(|t| t.as_str() != home)
            .cloned()
            .unwrap_or_else(|| s!(UNKNOWN_OPPONENT))
    } else {
        right_endzone(drive, home)
    }
}

fn info_lines(drive: &Drive) -> Vec<InfoLine> {
    let mut out = Vec::with_capacity(5);
    let mut push = |label: &'static str, value: Option<String>| {
        if let Some(value) = value {
            out.push(InfoLine { label, value });
        }
    };

    push("Date", drive.date.clone());
    push("Site", drive.site.clone());
    push("Temperature", drive.temperature.as_ref().map(|t| format!("{t}°F")));
    push("Weather", drive.weather.clone());
    push("Drive Ended", drive.ended_how.as_ref().map(|h| h.to_string()));
    out
}

impl DriveView {
    pub fn build(
        drive: &Drive,
        index: usize,
        count: usize,
        snapshot: &ScoreSnapshot,
        week_teams: &[String],
        axis: &FieldAxis,
    ) -> Self {
        let home = axis.home();
        let opponent = scoreboard_opponent(drive, week_teams, home);
        let touchdown = drive.is_touchdown();

        Self {
            title: format!("Drive for {}", drive.team().unwrap_or("Unknown")),
            counter: format!("Drive {} of {}", index + 1, count),
            home: ScoreLine { team: s!(home), points: snapshot.points(home) },
            away: ScoreLine { points: snapshot.points(&opponent), team: opponent },
            left_endzone: s!(home),
            right_endzone: right_endzone(drive, home),
            start_marker: axis.marker(drive.started_spot.as_deref()),
            end_marker: axis.marker(drive.ended_spot.as_deref()),
            touchdown,
            info: info_lines(drive),
            scoring_play: if touchdown { drive.scoring_play.clone() } else { None },
        }
    }

    /// Info value for `label`, if shown.
    pub fn info_value(&self, label: &str) -> Option<&str> {
        self.info.iter().find(|l| l.label == label).map(|l| l.value.as_str())
    }
}
