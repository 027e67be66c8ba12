// src/weeks.rs
use std::cmp::Ordering;

use crate::drive::Drive;

/// Leading integer of a week id: "3rd" → 3, " -1" → -1, "Bowl" → None.
fn leading_int(week: &str) -> Option<i64> {
    let t = week.trim_start();
    let digits_at = usize::from(t.starts_with(['+', '-']));
    let len = t[digits_at..].bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    t[..digits_at + len].parse().ok()
}

/// Sort key: numeric weeks first (by value), anything else after, by text.
fn week_order(a: &str, b: &str) -> Ordering {
    match (leading_int(a), leading_int(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Distinct week ids, ascending by numeric value. Drives with no week are skipped.
pub fn weeks_of(drives: &[Drive]) -> Vec<String> {
    let mut weeks: Vec<String> = drives.iter()
        .filter_map(|d| d.week.clone())
        .collect();
    weeks.sort_by(|a, b| week_order(a, b));
    weeks.dedup();
    weeks
}

/// Drives of one week, in file (chronological) order. Empty if none match.
pub fn rows_for_week<'a>(drives: &'a [Drive], week: &str) -> Vec<&'a Drive> {
    drives.iter().filter(|d| d.in_week(week)).collect()
}
