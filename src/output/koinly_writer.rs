use std::fs;
use std::fs::File;
use std::io;
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use csv::Writer;
use tracing::debug;

use crate::models::{ConversionError, KoinlyRecord};

const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// `<prefix>_<YYYY-MM-DD_HH-MM-SS>.csv`, stamped in UTC.
pub fn output_file_name(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{prefix}_{}.csv", now.format(FILE_TIMESTAMP_FORMAT))
}

/// Writes `records` as a Koinly CSV into `output_dir`, creating the directory if needed.
pub fn write_koinly_csv(output_dir: &Path, prefix: &str, records: &[KoinlyRecord], now: DateTime<Utc>) -> Result<PathBuf, ConversionError> {
    if records.is_empty() {
        return Err(ConversionError::NoTransactions);
    }

    fs::create_dir_all(output_dir).map_err(|error| {
        permission_denied_or(output_dir, error, |error| ConversionError::OutputDirectory {
            path: output_dir.to_path_buf(),
            error
        })
    })?;

    let path = output_dir.join(output_file_name(prefix, now));

    let file = File::create(&path).map_err(|error| {
        permission_denied_or(&path, error, |error| ConversionError::write(&path, error.into()))
    })?;

    let mut writer = Writer::from_writer(BufWriter::new(file));

    for record in records {
        writer.serialize(record).map_err(|error| ConversionError::write(&path, error))?;
    }

    writer.flush().map_err(|error| ConversionError::write(&path, error.into()))?;

    debug!("Successfully wrote {} transactions to {}", records.len(), path.display());

    Ok(path)
}

/// Permission failures on the output side are reported as such, anything else through `otherwise`.
pub(super) fn permission_denied_or<F>(path: &Path, error: io::Error, otherwise: F) -> ConversionError
where
    F: FnOnce(io::Error) -> ConversionError,
{
    match error.kind() {
        ErrorKind::PermissionDenied => ConversionError::PermissionDenied { path: path.to_path_buf() },
        _ => otherwise(error)
    }
}
