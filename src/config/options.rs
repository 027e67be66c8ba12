// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub data_path: PathBuf,
    pub home_team: String,
    pub transition: TransitionOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            home_team: s!(HOME_TEAM),
            transition: TransitionOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransitionOptions {
    /// Pause between showing a drive and starting the marker travel.
    pub delay: Duration,
    /// Marker travel time; info panel and banner appear when it ends.
    pub duration: Duration,
    /// Share of the travel over which the end marker fades in.
    pub fade_in: f64,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(TRANSITION_DELAY_MS),
            duration: Duration::from_millis(TRANSITION_DURATION_MS),
            fade_in: FADE_IN_FRACTION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    /// Default file for a week's timeline: `out/timeline_week<W>.<ext>`.
    pub fn timeline_path(&self, week: &str) -> PathBuf {
        let stem = crate::file::sanitize_stem(week);
        self.out_dir.join(format!("{DEFAULT_TIMELINE_STEM}_week{stem}.{}", self.format.ext()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_path_follows_format() {
        let mut export = ExportOptions::default();
        let p = export.timeline_path("3");
        assert!(p.to_string_lossy().ends_with("timeline_week3.csv"));

        export.format = ExportFormat::Tsv;
        let p = export.timeline_path("3");
        assert!(p.to_string_lossy().ends_with("timeline_week3.tsv"));
        assert!(p.starts_with(DEFAULT_OUT_DIR));
    }
}
