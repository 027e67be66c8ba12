// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::csv::{rows_to_string, write_row};
use crate::drive::Drive;
use crate::error::{Error, Result};
use crate::score::ScoreSnapshot;

/// Drive-by-drive score table for one week.
/// Columns: Drive, Team, Ended, Start, End, <home>, <opponent>.
pub fn score_timeline(
    drives: &[Drive],
    snapshots: &[ScoreSnapshot],
    home: &str,
    opponent: &str,
) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = cells!["Drive", "Team", "Ended", "Start", "End", home, opponent];

    let rows = drives.iter()
        .zip(snapshots)
        .enumerate()
        .map(|(i, (d, snap))| cells![
            i + 1,
            d.team().unwrap_or_default(),
            d.ended_how.as_ref().map(|h| h.code()).unwrap_or_default(),
            d.started_spot.as_deref().unwrap_or_default(),
            d.ended_spot.as_deref().unwrap_or_default(),
            snap.points(home),
            snap.points(opponent),
        ])
        .collect();

    (headers, rows)
}

/// Timeline as text (clipboard / stdout).
pub fn score_timeline_string(
    drives: &[Drive],
    snapshots: &[ScoreSnapshot],
    home: &str,
    opponent: &str,
    include_headers: bool,
    sep: char,
) -> String {
    let (headers, rows) = score_timeline(drives, snapshots, home, opponent);
    rows_to_string(include_headers.then_some(headers.as_slice()), &rows, sep)
}

/// Write the timeline to `path`, creating parent directories as needed.
pub fn write_score_timeline(
    path: &Path,
    drives: &[Drive],
    snapshots: &[ScoreSnapshot],
    home: &str,
    opponent: &str,
    include_headers: bool,
    sep: char,
) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let (headers, rows) = score_timeline(drives, snapshots, home, opponent);
    let export_err = |source: std::io::Error| Error::Export { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(export_err)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    if include_headers {
        write_row(&mut out, &headers, sep).map_err(export_err)?;
    }
    for row in &rows {
        write_row(&mut out, row, sep).map_err(export_err)?;
    }
    out.flush().map_err(export_err)?;

    logf!("Export: {} ({} drive(s))", path.display(), rows.len());
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| Error::Export { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

/// Filename-safe version of a week id.
pub fn sanitize_stem(name: &str) -> String {
    let out: String = name.trim()
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '-' { ch } else { '_' })
        .collect();
    if out.is_empty() { s!("unknown") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_are_filename_safe() {
        assert_eq!(sanitize_stem("3"), "3");
        assert_eq!(sanitize_stem(" Bowl Game "), "Bowl_Game");
        assert_eq!(sanitize_stem("a/b"), "a_b");
        assert_eq!(sanitize_stem(""), "unknown");
    }
}
