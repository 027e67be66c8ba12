// src/store.rs
use std::{borrow::Cow, fs, path::Path};

use crate::csv::parse_table;
use crate::drive::Drive;
use crate::error::{Error, Result};
use crate::weeks;

/// Everything loaded at startup: all drives plus the week list derived from them.
#[derive(Clone, Debug, Default)]
pub struct Season {
    pub drives: Vec<Drive>,
    pub weeks: Vec<String>,
}

impl Season {
    pub fn from_text(text: &str) -> Self {
        let ds = parse_table(text);
        logd!("Table: {} header(s), {} row(s)", ds.header_count(), ds.row_count());
        let drives = Drive::from_dataset(&ds);
        let weeks = weeks::weeks_of(&drives);
        Self { drives, weeks }
    }

    pub fn has_week(&self, week: &str) -> bool {
        self.weeks.iter().any(|w| w == week)
    }
}

/// Read and parse the play-by-play file. The only failure is I/O;
/// bytes that aren't UTF-8 become U+FFFD.
pub fn load_season(path: &Path) -> Result<Season> {
    let bytes = fs::read(path).map_err(|source| {
        loge!("Load: {} failed ({})", path.display(), source);
        Error::Io { path: path.to_path_buf(), source }
    })?;

    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        logw!("Load: {} is not valid UTF-8; replaced bad bytes", path.display());
    }

    let season = Season::from_text(&text);
    logf!(
        "Load: {} (drives={}, weeks={})",
        path.display(),
        season.drives.len(),
        season.weeks.len()
    );
    Ok(season)
}
