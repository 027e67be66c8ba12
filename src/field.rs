// src/field.rs
//
// Field-position mapping. The home team's end zone is pinned to the left of
// a shared 0..100 axis; opponent yard lines count down from the right.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::*;

static SPOT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z]+)([0-9]+)").expect("spot pattern")
});

/// Parsed spot code, e.g. "YSU31" → (YSU, 31).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpot {
    pub team: String,
    pub yard: f64,
}

impl FieldSpot {
    /// First `LETTERS DIGITS` run in `text`, or None if there isn't one.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = SPOT_RE.captures(text)?;
        let yard = caps[2].parse::<f64>().ok()?;
        Some(Self { team: s!(&caps[1]), yard })
    }
}

/// Maps spot codes onto the horizontal field axis for one home team.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldAxis {
    home: String,
}

impl Default for FieldAxis {
    fn default() -> Self { Self::new(HOME_TEAM) }
}

impl FieldAxis {
    pub fn new(home: impl Into<String>) -> Self { Self { home: home.into() } }

    pub fn home(&self) -> &str { &self.home }

    /// Unclamped position of a parsed spot.
    pub fn raw_position(&self, spot: &FieldSpot) -> f64 {
        if spot.team == self.home {
            HOME_GOAL_LINE + spot.yard * PERCENT_PER_YARD
        } else {
            AWAY_GOAL_LINE - spot.yard * PERCENT_PER_YARD
        }
    }

    /// Marker position in [5, 95]; midfield if the code doesn't look like a spot.
    pub fn position(&self, text: &str) -> f64 {
        match FieldSpot::parse(text) {
            Some(spot) => self.raw_position(&spot).clamp(MARKER_MIN, MARKER_MAX),
            None => MIDFIELD,
        }
    }

    /// None when there is nothing to draw.
    pub fn marker(&self, spot: Option<&str>) -> Option<f64> {
        crate::record::present(spot).map(|t| self.position(t))
    }
}

/// Default-home mapping: None for absent spots, 50 for unparseable ones.
pub fn map_spot(spot: Option<&str>) -> Option<f64> {
    FieldAxis::default().marker(spot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

    #[test]
    fn home_spots_run_left_to_right() {
        assert!(approx(map_spot(Some("MER0")).unwrap(), 10.0));
        assert!(approx(map_spot(Some("MER50")).unwrap(), 30.0));
        assert!(approx(map_spot(Some("MER35")).unwrap(), 24.0));
    }

    #[test]
    fn opponent_spots_run_right_to_left() {
        assert!(approx(map_spot(Some("YSU0")).unwrap(), 90.0));
        assert!(approx(map_spot(Some("YSU31")).unwrap(), 77.6));
        assert!(approx(map_spot(Some("YSU100")).unwrap(), 50.0));
    }

    #[test]
    fn clamps_only_outside_range() {
        let axis = FieldAxis::default();
        let far = FieldSpot { team: s!("MER"), yard: 250.0 };
        assert!(approx(axis.raw_position(&far), 110.0));
        assert!(approx(axis.position("MER250"), 95.0));
        assert!(approx(axis.position("YSU250"), 5.0));
    }

    #[test]
    fn unparseable_is_midfield_absent_is_none() {
        assert_eq!(map_spot(Some("midfield")), Some(50.0));
        assert_eq!(map_spot(Some("MER 35")), Some(50.0));
        assert_eq!(map_spot(Some("NULL")), None);
        assert_eq!(map_spot(Some("")), None);
        assert_eq!(map_spot(None), None);
    }

    #[test]
    fn first_match_wins() {
        let spot = FieldSpot::parse("at YSU31 (was MER20)").unwrap();
        assert_eq!(spot.team, "YSU");
        assert!(approx(spot.yard, 31.0));
    }

    #[test]
    fn yard_digits_are_ascii_only() {
        let spot = FieldSpot::parse("MER5\u{0663}").unwrap();
        assert!(approx(spot.yard, 5.0));
        assert!(approx(map_spot(Some("MER5\u{0663}")).unwrap(), 12.0));
    }

    #[test]
    fn home_is_configurable() {
        let axis = FieldAxis::new("YSU");
        assert!(approx(axis.position("YSU0"), 10.0));
        assert!(approx(axis.position("MER0"), 90.0));
    }
}
