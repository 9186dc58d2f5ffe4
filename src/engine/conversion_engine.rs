use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use futures::future::join_all;
use tokio::task::{JoinHandle, spawn_blocking};
use tracing::{debug, info};

use crate::converters::{
    SourceConverter, SparrowConverter, ZeusInvoiceConverter, ZeusOnchainConverter, ZeusPaymentConverter,
    ZeusSingleConverter, read_source, validate_source_file
};
use crate::engine::ConversionJob;
use crate::models::{ConversionError, KoinlyRecord, SourceKind};
use crate::output::write_koinly_csv;

type SourceHandle = JoinHandle<Result<Vec<KoinlyRecord>, ConversionError>>;

/// Reads the export files of a job, merges them into one date ordered Koinly file and writes it.
pub struct ConversionEngine {
    output_dir: PathBuf
}

impl ConversionEngine {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into()
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Converts the job and returns the path of the written file.
    pub async fn run(&self, job: &ConversionJob) -> anyhow::Result<PathBuf> {
        let wallet = job.wallet();

        self.convert(job).await
            .with_context(|| format!("{wallet} conversion failed"))
    }

    async fn convert(&self, job: &ConversionJob) -> anyhow::Result<PathBuf> {
        let wallet = job.wallet();

        //NOTE: Every input is checked before any of them is read so a typo in the last path fails fast
        for (kind, path) in job.sources() {
            validate_source_file(kind, path)?;
        }

        let readers: Vec<SourceHandle> = job.sources()
            .into_iter()
            .map(|(kind, path)| spawn_source_reader(kind, path))
            .collect();

        let mut records = Vec::new();

        for result in join_all(readers).await {
            records.extend(result??);
        }

        // Stable, so rows sharing a timestamp keep their file order
        records.sort_by_key(|record| record.date);

        info!("Merged {} transactions from the {wallet} export", records.len());

        let output_file = write_koinly_csv(&self.output_dir, wallet.file_prefix(), &records, Utc::now())?;

        info!("Koinly-formatted CSV saved to: {}", output_file.display());

        Ok(output_file)
    }
}

fn spawn_source_reader(kind: SourceKind, path: &Path) -> SourceHandle {
    debug!("Reading {kind} file {}", path.display());

    let path = path.to_path_buf();

    match kind {
        SourceKind::Sparrow => spawn_reader(path, SparrowConverter::new()),
        SourceKind::ZeusInvoices => spawn_reader(path, ZeusInvoiceConverter),
        SourceKind::ZeusPayments => spawn_reader(path, ZeusPaymentConverter),
        SourceKind::ZeusOnchain => spawn_reader(path, ZeusOnchainConverter),
        SourceKind::ZeusSingle => spawn_reader(path, ZeusSingleConverter)
    }
}

fn spawn_reader<C: SourceConverter>(path: PathBuf, converter: C) -> SourceHandle {
    spawn_blocking(move || read_source(&path, converter))
}
