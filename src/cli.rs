use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use crate::engine::ConversionJob;
use crate::models::ConversionError;

/// Convert Bitcoin wallet transaction exports into Koinly's universal CSV format
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,

    /// Directory the converted file is written to [default: ~/Downloads]
    #[clap(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Log level written to stderr: error, warn, info, debug or trace
    #[clap(short, long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a Sparrow wallet transaction export
    Sparrow {
        /// Path to the exported CSV file
        source: PathBuf,
    },

    /// Convert the three-file Zeus export (invoices, payments, onchain)
    ///
    /// A file that is not given is looked up under its export name in the current directory.
    Zeus {
        /// Path to invoices.csv
        #[clap(long)]
        invoices: Option<PathBuf>,

        /// Path to payments.csv
        #[clap(long)]
        payments: Option<PathBuf>,

        /// Path to onchain.csv
        #[clap(long)]
        onchain: Option<PathBuf>,
    },

    /// Convert the single-file Zeus payments export
    ZeusSingle {
        /// Path to the exported CSV file
        source: PathBuf,
    },
}

impl Command {
    pub fn into_job(self, base_dir: &Path) -> Result<ConversionJob, ConversionError> {
        match self {
            Command::Sparrow { source } => Ok(ConversionJob::Sparrow { source }),
            Command::Zeus { invoices, payments, onchain } => ConversionJob::zeus(invoices, payments, onchain, base_dir),
            Command::ZeusSingle { source } => Ok(ConversionJob::ZeusSingle { source }),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

/// `~/Downloads`, or the current directory when no home directory is known.
pub fn default_output_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join("Downloads"))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
