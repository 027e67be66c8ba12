// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;

pub mod csv;
pub mod record;
pub mod drive;
pub mod weeks;
pub mod score;
pub mod field;
pub mod view;
pub mod cursor;
pub mod transition;

pub mod file;
pub mod render;
pub mod store;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use drive::{parse, Drive, DriveResult};
pub use error::{Error, Result};
pub use field::map_spot;
pub use score::{accumulate, ScoreSnapshot};
pub use weeks::{rows_for_week, weeks_of};
