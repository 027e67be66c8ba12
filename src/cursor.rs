// src/cursor.rs
//
// Drive navigation state for the selected week. One owner (the GUI app or
// the CLI run); replaced wholesale when another week is picked.

use crate::drive::Drive;
use crate::field::FieldAxis;
use crate::score::{self, ScoreSnapshot};
use crate::view::DriveView;
use crate::weeks;

/// Outcome of picking a week.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeekSelection {
    /// No week chosen; nothing to show.
    Cleared,
    /// Week has no drives ("No games found").
    Empty,
    Ready { drives: usize },
}

#[derive(Clone, Debug, Default)]
pub struct DriveCursor {
    axis: FieldAxis,
    week: Option<String>,
    drives: Vec<Drive>,
    teams: Vec<String>,
    snapshots: Vec<ScoreSnapshot>,
    index: usize,
}

impl DriveCursor {
    pub fn new(axis: FieldAxis) -> Self {
        Self { axis, ..Self::default() }
    }

    pub fn select_week(&mut self, all: &[Drive], week: Option<&str>) -> WeekSelection {
        let Some(week) = week else {
            *self = Self::new(self.axis.clone());
            return WeekSelection::Cleared;
        };

        let drives: Vec<Drive> = weeks::rows_for_week(all, week).into_iter().cloned().collect();
        self.teams = score::teams_in_week(&drives);
        self.snapshots = score::accumulate(&drives);
        self.drives = drives;
        self.week = Some(s!(week));
        self.index = 0;

        logf!("Week {}: {} drive(s), teams {:?}", week, self.drives.len(), self.teams);

        if self.drives.is_empty() {
            WeekSelection::Empty
        } else {
            WeekSelection::Ready { drives: self.drives.len() }
        }
    }

    pub fn week(&self) -> Option<&str> { self.week.as_deref() }
    pub fn index(&self) -> usize { self.index }
    pub fn len(&self) -> usize { self.drives.len() }
    pub fn is_empty(&self) -> bool { self.drives.is_empty() }
    pub fn drives(&self) -> &[Drive] { &self.drives }
    pub fn snapshots(&self) -> &[ScoreSnapshot] { &self.snapshots }
    pub fn teams(&self) -> &[String] { &self.teams }
    pub fn axis(&self) -> &FieldAxis { &self.axis }

    pub fn has_prev(&self) -> bool { self.index > 0 }
    pub fn has_next(&self) -> bool { self.index + 1 < self.drives.len() }

    /// Step back one drive. Returns false at the first drive.
    pub fn prev(&mut self) -> bool {
        if !self.has_prev() { return false; }
        self.index -= 1;
        logd!("Nav: drive {}/{}", self.index + 1, self.len());
        true
    }

    /// Step forward one drive. Returns false at the last drive.
    pub fn next(&mut self) -> bool {
        if !self.has_next() { return false; }
        self.index += 1;
        logd!("Nav: drive {}/{}", self.index + 1, self.len());
        true
    }

    /// Jump to drive `ix` (0-based) if it exists.
    pub fn jump(&mut self, ix: usize) -> bool {
        if ix >= self.drives.len() || ix == self.index { return false; }
        self.index = ix;
        logd!("Nav: jump to drive {}/{}", ix + 1, self.len());
        true
    }

    /// "Drive i of n", or None with nothing loaded.
    pub fn counter(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("Drive {} of {}", self.index + 1, self.len()))
    }

    pub fn view_at(&self, ix: usize) -> Option<DriveView> {
        let drive = self.drives.get(ix)?;
        let snap = self.snapshots.get(ix)?;
        Some(DriveView::build(drive, ix, self.drives.len(), snap, &self.teams, &self.axis))
    }

    pub fn current(&self) -> Option<DriveView> {
        self.view_at(self.index)
    }

    /// Opponent for the score timeline: the week's non-home team.
    pub fn opponent(&self) -> String {
        self.teams.iter()
            .find(|t| t.as_str() != self.axis.home())
            .cloned()
            .unwrap_or_else(|| s!(crate::config::consts::UNKNOWN_OPPONENT))
    }
}
