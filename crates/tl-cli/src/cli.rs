//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Find days with more than a threshold of kilometers travelled by car.
///
/// Reads a location timeline JSON export. Each vehicle activity's full
/// distance is attributed to the calendar day of its start time.
#[derive(Debug, Parser)]
#[command(name = "tl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the timeline export (e.g. Timeline.json), or `-` for stdin.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Threshold in kilometers [default: 100.0, or `threshold_km` from config].
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}
