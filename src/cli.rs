use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::io::OutputFormat as ReportFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Terminal,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "readscore")]
#[command(about = "Readability scores for a headline or short text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Text to score (read from stdin when omitted)
    pub headline: Option<String>,

    /// Only score the first N words (0 scores everything)
    #[arg(long, env = "READSCORE_SAMPLE_LIMIT")]
    pub sample_limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Configuration file (defaults to the nearest .readscore.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
