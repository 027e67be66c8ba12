// src/drive.rs
//
// Typed drive row. Built once from a parsed record; everything downstream
// works with Option fields instead of re-checking "NULL" strings.

use std::fmt;

use crate::csv::{self, DataSet};
use crate::record::{self, Record};

/// Column names consumed from the play-by-play file.
pub mod col {
    pub const WEEK: &str = "Week Number";
    pub const TEAM: &str = "Team";
    pub const SCORING_TEAM: &str = "scoring_team";
    pub const ENDED_HOW: &str = "Ended: How";
    pub const STARTED_SPOT: &str = "Started: Spot";
    pub const ENDED_SPOT: &str = "Ended: Spot";
    pub const DATE: &str = "Date";
    pub const SITE: &str = "Site";
    pub const TEMPERATURE: &str = "Temperature";
    pub const WEATHER: &str = "Weather";
    pub const SCORING_PLAY: &str = "Scoring Play";

    pub const REQUIRED: [&str; 11] = [
        WEEK, TEAM, SCORING_TEAM, ENDED_HOW, STARTED_SPOT, ENDED_SPOT,
        DATE, SITE, TEMPERATURE, WEATHER, SCORING_PLAY,
    ];
}

/// How a drive ended, as far as scoring is concerned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriveResult {
    Touchdown,
    FieldGoal,
    /// "FGA": counted as a field goal (the file doesn't separate made/missed).
    FieldGoalAttempt,
    Other(String),
}

impl DriveResult {
    pub fn parse(code: &str) -> Self {
        match code {
            "TD" => Self::Touchdown,
            "FG" => Self::FieldGoal,
            "FGA" => Self::FieldGoalAttempt,
            other => Self::Other(s!(other)),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Touchdown => "TD",
            Self::FieldGoal => "FG",
            Self::FieldGoalAttempt => "FGA",
            Self::Other(s) => s,
        }
    }

    #[inline] pub fn is_touchdown(&self) -> bool { matches!(self, Self::Touchdown) }
    #[inline] pub fn is_field_goal(&self) -> bool { matches!(self, Self::FieldGoal | Self::FieldGoalAttempt) }
}

impl fmt::Display for DriveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One possession by one team.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Drive {
    pub week: Option<String>,
    pub team: Option<String>,
    pub scoring_team: Option<String>,
    pub ended_how: Option<DriveResult>,
    pub started_spot: Option<String>,
    pub ended_spot: Option<String>,
    pub date: Option<String>,
    pub site: Option<String>,
    pub temperature: Option<String>,
    pub weather: Option<String>,
    pub scoring_play: Option<String>,
}

impl Drive {
    pub fn from_record(rec: &Record<'_>) -> Self {
        let get = |c: &str| rec.get(c).map(str::to_string);
        Self {
            week: get(col::WEEK),
            team: get(col::TEAM),
            scoring_team: get(col::SCORING_TEAM),
            ended_how: rec.get(col::ENDED_HOW).map(DriveResult::parse),
            started_spot: get(col::STARTED_SPOT),
            ended_spot: get(col::ENDED_SPOT),
            date: get(col::DATE),
            site: get(col::SITE),
            temperature: get(col::TEMPERATURE),
            weather: get(col::WEATHER),
            scoring_play: get(col::SCORING_PLAY),
        }
    }

    pub fn from_dataset(ds: &DataSet) -> Vec<Self> {
        let missing: Vec<&str> = col::REQUIRED.iter()
            .copied()
            .filter(|c| ds.column(c).is_none())
            .collect();
        if !missing.is_empty() && !ds.rows.is_empty() {
            logw!("Table: missing columns {:?}; treating as absent", missing);
        }
        record::records(ds).map(|r| Self::from_record(&r)).collect()
    }

    #[inline] pub fn team(&self) -> Option<&str> { self.team.as_deref() }
    #[inline] pub fn scoring_team(&self) -> Option<&str> { self.scoring_team.as_deref() }

    pub fn is_touchdown(&self) -> bool {
        self.ended_how.as_ref().is_some_and(DriveResult::is_touchdown)
    }

    pub fn in_week(&self, week: &str) -> bool {
        self.week.as_deref() == Some(week)
    }
}

/// Text → typed drives, in file order.
pub fn parse(text: &str) -> Vec<Drive> {
    Drive::from_dataset(&csv::parse_table(text))
}
