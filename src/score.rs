// src/score.rs
//
// Running score per drive. One owned snapshot per input drive; snapshot[i]
// is the score after drive i has been applied.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::config::consts::{FIELD_GOAL_POINTS, TOUCHDOWN_POINTS};
use crate::drive::{Drive, DriveResult};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreSnapshot {
    points: BTreeMap<String, u32>,
}

impl ScoreSnapshot {
    /// Points for `team`; teams not seen this week have 0.
    pub fn points(&self, team: &str) -> u32 {
        self.points.get(team).copied().unwrap_or(0)
    }

    fn add(&mut self, team: &str, pts: u32) {
        *self.points.entry(s!(team)).or_insert(0) += pts;
    }
}

impl<const N: usize> From<[(&str, u32); N]> for ScoreSnapshot {
    fn from(pairs: [(&str, u32); N]) -> Self {
        Self { points: pairs.into_iter().map(|(t, p)| (s!(t), p)).collect() }
    }
}

/// Teams seen in a week, first appearance first: every driving team, plus
/// any named scoring team.
pub fn teams_in_week<D: Borrow<Drive>>(drives: &[D]) -> Vec<String> {
    let mut teams: Vec<String> = Vec::new();
    for d in drives {
        let d = d.borrow();
        for t in [d.team(), d.scoring_team()].into_iter().flatten() {
            if !teams.iter().any(|x| x == t) {
                teams.push(s!(t));
            }
        }
    }
    teams
}

/// Who gets points for this drive, and how many.
pub fn points_for(drive: &Drive) -> Option<(&str, u32)> {
    let how = drive.ended_how.as_ref()?;
    match (how, drive.scoring_team()) {
        (DriveResult::Touchdown, Some(team)) => Some((team, TOUCHDOWN_POINTS)),
        (h, Some(team)) if h.is_field_goal() => Some((team, FIELD_GOAL_POINTS)),
        // Unattributed field goal goes to the team that drove.
        (h, None) if h.is_field_goal() => drive.team().map(|t| (t, FIELD_GOAL_POINTS)),
        _ => None,
    }
}

pub fn accumulate<D: Borrow<Drive>>(drives: &[D]) -> Vec<ScoreSnapshot> {
    let mut running = ScoreSnapshot::default();
    for team in teams_in_week(drives) {
        running.points.insert(team, 0);
    }

    drives.iter()
        .map(|d| {
            if let Some((team, pts)) = points_for(d.borrow()) {
                running.add(team, pts);
            }
            running.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(team: &str, how: &str, scoring: Option<&str>) -> Drive {
        Drive {
            team: Some(s!(team)),
            ended_how: Some(DriveResult::parse(how)),
            scoring_team: scoring.map(|s| s!(s)),
            ..Drive::default()
        }
    }

    #[test]
    fn touchdown_then_unattributed_field_goal() {
        let drives = vec![drive("MER", "TD", Some("MER")), drive("OPP", "FG", None)];
        let snaps = accumulate(&drives);
        assert_eq!(snaps, vec![
            ScoreSnapshot::from([("MER", 7), ("OPP", 0)]),
            ScoreSnapshot::from([("MER", 7), ("OPP", 3)]),
        ]);
    }

    #[test]
    fn defensive_touchdown_credits_scoring_team() {
        let drives = vec![drive("MER", "TD", Some("YSU"))];
        let snaps = accumulate(&drives);
        assert_eq!(snaps[0].points("YSU"), 7);
        assert_eq!(snaps[0].points("MER"), 0);
    }

    #[test]
    fn touchdown_without_scoring_team_scores_nothing() {
        let snaps = accumulate(&[drive("MER", "TD", None)]);
        assert_eq!(snaps[0], ScoreSnapshot::from([("MER", 0)]));
    }

    #[test]
    fn unknown_result_carries_forward() {
        let drives = vec![drive("MER", "FGA", None), drive("YSU", "PUNT", None), Drive::default()];
        let snaps = accumulate(&drives);
        assert_eq!(snaps.len(), 3);
        assert_eq!(snaps[0], snaps[1]);
        assert_eq!(snaps[1], snaps[2]);
        assert_eq!(snaps[2].points("MER"), 3);
    }

    #[test]
    fn teams_keep_first_appearance_order() {
        let drives = vec![drive("YSU", "PUNT", None), drive("MER", "TD", Some("MER")), drive("YSU", "TD", Some("YSU"))];
        assert_eq!(teams_in_week(&drives), vec!["YSU", "MER"]);
    }

    #[test]
    fn empty_week_has_no_snapshots() {
        let none: [Drive; 0] = [];
        assert!(accumulate(&none).is_empty());
    }
}
