// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::options::{AppOptions, ExportFormat, ExportOptions};
use crate::cursor::{DriveCursor, WeekSelection};
use crate::error::{Error, Result};
use crate::field::FieldAxis;
use crate::{file, render, store};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f { Format::Csv => ExportFormat::Csv, Format::Tsv => ExportFormat::Tsv }
    }
}

#[derive(Debug, Parser)]
#[command(name = "drive_chart-cli")]
#[command(about = "Print football drive charts from a play-by-play table")]
pub struct Args {
    /// Play-by-play table
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Team pinned to the left end zone
    #[arg(long)]
    pub home: Option<String>,

    /// List available weeks and exit
    #[arg(long)]
    pub list_weeks: bool,

    /// Week to show
    #[arg(short, long)]
    pub week: Option<String>,

    /// Drive number within the week (1-based); defaults to the first
    #[arg(short = 'n', long, conflicts_with = "all")]
    pub drive: Option<usize>,

    /// Print every drive of the week
    #[arg(short, long)]
    pub all: bool,

    /// Write the week's score timeline; without a path, to out/timeline_week<W>.<ext>
    #[arg(short, long, requires = "week", num_args = 0..=1, value_name = "PATH")]
    pub export: Option<Option<PathBuf>>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Header line in the exported timeline
    #[arg(long)]
    pub include_headers: bool,
}

impl Args {
    /// Flags layered over the defaults.
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(p) = &self.data { opts.data_path = p.clone(); }
        if let Some(h) = &self.home { opts.home_team = h.clone(); }
        opts.export.format = self.format.into();
        opts.export.include_headers = self.include_headers;
        opts
    }

    /// Export file for `week`, if `--export` was given.
    pub fn export_path(&self, export: &ExportOptions, week: &str) -> Option<PathBuf> {
        self.export.as_ref().map(|p| match p {
            Some(p) => p.clone(),
            None => export.timeline_path(week),
        })
    }
}

pub fn run(args: &Args) -> Result<()> {
    let opts = args.options();
    let season = store::load_season(&opts.data_path)?;

    if args.list_weeks || args.week.is_none() {
        for w in &season.weeks {
            println!("Week {}", w);
        }
        return Ok(());
    }

    let week = args.week.as_deref().unwrap_or_default();
    if !season.has_week(week) {
        return Err(Error::UnknownWeek(s!(week)));
    }

    let mut cursor = DriveCursor::new(FieldAxis::new(opts.home_team.clone()));
    let count = match cursor.select_week(&season.drives, Some(week)) {
        WeekSelection::Ready { drives } => drives,
        WeekSelection::Empty | WeekSelection::Cleared => {
            println!("No games found for this week.");
            return Ok(());
        }
    };

    if let Some(path) = args.export_path(&opts.export, week) {
        let written = file::write_score_timeline(
            &path,
            cursor.drives(),
            cursor.snapshots(),
            &opts.home_team,
            &cursor.opponent(),
            opts.export.include_headers,
            opts.export.format.delim(),
        )?;
        println!("Wrote {}", written.display());
        return Ok(());
    }

    if args.all {
        for ix in 0..count {
            if let Some(view) = cursor.view_at(ix) {
                println!("{}", render::drive_card(&view));
            }
        }
        return Ok(());
    }

    let n = args.drive.unwrap_or(1);
    if n == 0 || n > count {
        return Err(Error::DriveOutOfRange { week: s!(week), drive: n, count });
    }
    cursor.jump(n - 1);
    if let Some(view) = cursor.current() {
        print!("{}", render::drive_card(&view));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "drive_chart-cli", "--data", "season.csv", "--home", "YSU",
            "--week", "3", "--format", "tsv", "--include-headers",
        ]);
        let opts = args.options();
        assert_eq!(opts.data_path, PathBuf::from("season.csv"));
        assert_eq!(opts.home_team, "YSU");
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(opts.export.include_headers);
    }

    #[test]
    fn drive_and_all_conflict() {
        let res = Args::try_parse_from(["drive_chart-cli", "--week", "1", "--drive", "2", "--all"]);
        assert!(res.is_err());
    }

    #[test]
    fn bare_export_uses_default_timeline_path() {
        let args = Args::parse_from(["drive_chart-cli", "--week", "2", "--format", "tsv", "--export"]);
        assert_eq!(args.export, Some(None));
        let opts = args.options();
        let path = args.export_path(&opts.export, "2").unwrap();
        assert_eq!(path, opts.export.timeline_path("2"));
        assert!(path.to_string_lossy().ends_with("timeline_week2.tsv"));

        let args = Args::parse_from(["drive_chart-cli", "--week", "2", "--export", "mine.csv"]);
        assert_eq!(args.export_path(&args.options().export, "2"), Some(PathBuf::from("mine.csv")));

        let args = Args::parse_from(["drive_chart-cli", "--week", "2"]);
        assert_eq!(args.export_path(&args.options().export, "2"), None);
    }

    #[test]
    fn export_requires_week() {
        let res = Args::try_parse_from(["drive_chart-cli", "--export", "out.csv"]);
        assert!(res.is_err());
    }
}
