//! Command-line configuration.

use std::{path::PathBuf, time::Duration};

use clap::{builder::RangedU64ValueParser, Parser};
use log::LevelFilter;

/// Largest accepted grid dimension.
const MAX_DIMENSION: u64 = 255;

/// Options read from the command line.
///
/// The defaults reproduce a 20 by 20 grid polled ten times per second with logging turned off.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Number of columns in the grid.
    #[arg(
        long,
        default_value_t = 20,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DIMENSION)
    )]
    pub width: usize,
    /// Number of rows in the grid.
    #[arg(
        long,
        default_value_t = 20,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DIMENSION)
    )]
    pub height: usize,
    /// Milliseconds to wait for input per frame. Auto-run advances one step per frame.
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,
    /// File to write logs to. Logging is disabled when absent, since the terminal is in use.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Most verbose level written to the log file.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Config {
    /// Time to wait for input on each pass of the main loop.
    pub const fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
