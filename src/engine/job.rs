use std::path::{Path, PathBuf};

use crate::models::{ConversionError, SourceKind, Wallet};

/// The export file(s) a single conversion run reads.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ConversionJob {
    Sparrow {
        source: PathBuf
    },
    Zeus {
        invoices: PathBuf,
        payments: PathBuf,
        onchain: PathBuf
    },
    ZeusSingle {
        source: PathBuf
    }
}

impl ConversionJob {
    /// Builds a three-file Zeus job, falling back to the default export names in `base_dir`.
    pub fn zeus(invoices: Option<PathBuf>, payments: Option<PathBuf>, onchain: Option<PathBuf>, base_dir: &Path) -> Result<Self, ConversionError> {
        Ok(ConversionJob::Zeus {
            invoices: resolve_export(SourceKind::ZeusInvoices, invoices, base_dir)?,
            payments: resolve_export(SourceKind::ZeusPayments, payments, base_dir)?,
            onchain: resolve_export(SourceKind::ZeusOnchain, onchain, base_dir)?
        })
    }

    pub fn wallet(&self) -> Wallet {
        match self {
            ConversionJob::Sparrow { .. } => Wallet::Sparrow,
            ConversionJob::Zeus { .. } => Wallet::Zeus,
            ConversionJob::ZeusSingle { .. } => Wallet::ZeusSingle
        }
    }

    /// Every file the job reads, tagged with its kind.
    pub fn sources(&self) -> Vec<(SourceKind, &Path)> {
        match self {
            ConversionJob::Sparrow { source } => vec![(SourceKind::Sparrow, source.as_path())],
            ConversionJob::Zeus { invoices, payments, onchain } => vec![
                (SourceKind::ZeusInvoices, invoices.as_path()),
                (SourceKind::ZeusPayments, payments.as_path()),
                (SourceKind::ZeusOnchain, onchain.as_path())
            ],
            ConversionJob::ZeusSingle { source } => vec![(SourceKind::ZeusSingle, source.as_path())]
        }
    }
}

/// An explicit path always wins. Otherwise the export's default file name is looked up in `base_dir`.
pub fn resolve_export(kind: SourceKind, explicit: Option<PathBuf>, base_dir: &Path) -> Result<PathBuf, ConversionError> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let not_provided = |file_name: &'static str| ConversionError::ExportNotProvided {
        kind,
        file_name,
        base_dir: base_dir.to_path_buf()
    };

    let Some(file_name) = kind.default_file_name() else {
        return Err(not_provided("the export"));
    };

    let candidate = base_dir.join(file_name);

    if candidate.exists() {
        Ok(candidate)
    } else {
        Err(not_provided(file_name))
    }
}
