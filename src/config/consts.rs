// src/config/consts.rs

// Input
pub const DEFAULT_DATA_FILE: &str = "plays.csv";
pub const NULL_MARKER: &str = "NULL";

// Teams
pub const HOME_TEAM: &str = "MER";
pub const UNKNOWN_OPPONENT: &str = "OPP";

// Scoring
pub const TOUCHDOWN_POINTS: u32 = 7;
pub const FIELD_GOAL_POINTS: u32 = 3;

// Field axis, in percent of field width
pub const HOME_GOAL_LINE: f64 = 10.0;
pub const AWAY_GOAL_LINE: f64 = 90.0;
pub const PERCENT_PER_YARD: f64 = 0.4;
pub const MIDFIELD: f64 = 50.0;
pub const MARKER_MIN: f64 = 5.0;
pub const MARKER_MAX: f64 = 95.0;
pub const YARD_LINES: [f64; 9] = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

// Marker transition
pub const TRANSITION_DELAY_MS: u64 = 100;
pub const TRANSITION_DURATION_MS: u64 = 3000;
pub const FADE_IN_FRACTION: f64 = 0.1;

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_TIMELINE_STEM: &str = "timeline";
