mod cli;
mod converters;
mod engine;
mod models;
mod output;
mod types;

use std::env;
use std::io::stderr;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::ConversionEngine;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::parse();

    setup_logging(cli::parse_log_level(&args.log_level));

    let output_dir = args.output_dir.unwrap_or_else(cli::default_output_dir);
    let job = args.command.into_job(&env::current_dir()?)?;
    let engine = ConversionEngine::new(output_dir);

    info!("Converting {} export into {}", job.wallet(), engine.output_dir().display());

    let timer = Instant::now();
    let output_file = engine.run(&job).await?;
    let duration = timer.elapsed();

    info!("Converted transactions in: {duration:?}");

    //NOTE: stdout only ever carries the output path so the converter can be scripted
    println!("{}", output_file.display());

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
