use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

const MAX_RECENT_YEAR_WINDOW: i64 = 100;

#[derive(Parser, Debug)]
#[command(
    name = "sroi-review",
    version,
    about = "Heuristic review of SROI methodology documents and calculation models"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Validate(ValidateArgs),
    Sample(SampleArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Methodology text, already decoded to plain text (.txt, .md).
    #[arg(long)]
    pub methodology: PathBuf,

    /// Calculation model, already decoded to a JSON sheet grid (.json).
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Year treated as "now" by the recent-data check.
    #[arg(long)]
    pub as_of_year: Option<i32>,

    /// Years counted as recent, including the as-of year.
    #[arg(
        long,
        default_value_t = crate::commands::validate::DEFAULT_RECENT_YEAR_WINDOW,
        value_parser = clap::value_parser!(u32).range(1..=MAX_RECENT_YEAR_WINDOW)
    )]
    pub recent_year_window: u32,

    /// Directory for date-stamped report, highlights and json outputs.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long)]
    pub highlights_path: Option<PathBuf>,

    #[arg(long)]
    pub json_path: Option<PathBuf>,

    /// Print the json report to stdout instead of the text report.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}
