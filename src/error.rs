// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to export {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Unknown week: {0}")]
    UnknownWeek(String),

    #[error("Drive {drive} out of range for week {week} (1..={count})")]
    DriveOutOfRange { week: String, drive: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" load failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_is_not_found() {
        let err = Error::Io {
            path: PathBuf::from("plays.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("plays.csv"));

        let err = Error::Io {
            path: PathBuf::from("plays.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn drive_out_of_range_message() {
        let err = Error::DriveOutOfRange { week: s!("4"), drive: 12, count: 9 };
        assert_eq!(err.to_string(), "Drive 12 out of range for week 4 (1..=9)");
    }
}
