use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Interactive parking lot manager.
#[derive(Debug, Parser)]
#[command(name = "parking_management", version, about)]
pub struct Args {
    /// Number of slots, at least 1. Skips the capacity prompt.
    #[arg(short, long)]
    pub capacity: Option<NonZeroUsize>,

    /// JSON file with `capacity` and an optional `log_level`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for `logs/parking.log` (error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print plain text without ANSI colors.
    #[arg(long)]
    pub no_color: bool,
}
