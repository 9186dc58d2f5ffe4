use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::SourceKind;
use crate::types::{AmountError, DateError};

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("{kind} file not found at path: {}", .path.display())]
    SourceNotFound {
        kind: SourceKind,
        path: PathBuf
    },
    #[error("{kind} path is not a file: {}", .path.display())]
    NotAFile {
        kind: SourceKind,
        path: PathBuf
    },
    #[error("{kind} file must be a CSV file: {}", .path.display())]
    NotCsv {
        kind: SourceKind,
        path: PathBuf
    },
    #[error("{kind} file was not given and {file_name} was not found in {}", .base_dir.display())]
    ExportNotProvided {
        kind: SourceKind,
        file_name: &'static str,
        base_dir: PathBuf
    },
    #[error("{kind} file is empty")]
    EmptySource {
        kind: SourceKind
    },
    #[error("No valid dates found in {kind} file")]
    NoValidDates {
        kind: SourceKind
    },
    #[error("Missing required columns in {kind} file: {columns}")]
    MissingColumns {
        kind: SourceKind,
        columns: String
    },
    #[error("Invalid amount in {kind} file at line {line}")]
    InvalidAmount {
        kind: SourceKind,
        line: usize,
        #[source]
        error: AmountError
    },
    #[error("Invalid date in {kind} file at line {line}")]
    InvalidDate {
        kind: SourceKind,
        line: usize,
        #[source]
        error: DateError
    },
    #[error("Cannot read {kind} file: {}", .path.display())]
    Read {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        error: io::Error
    },
    #[error("Invalid CSV format in {kind} file")]
    Csv {
        kind: SourceKind,
        #[source]
        error: csv::Error
    },
    #[error("No transactions found to export")]
    NoTransactions,
    #[error("Cannot create output directory: {}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        error: io::Error
    },
    #[error("Cannot write to {}. Check file permissions.", .path.display())]
    PermissionDenied {
        path: PathBuf
    },
    #[error("Error writing output file: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        error: csv::Error
    }
}

impl ConversionError {
    pub fn missing_columns(kind: SourceKind, columns: &[&str]) -> Self {
        Self::MissingColumns { kind, columns: columns.join(", ") }
    }

    pub fn invalid_amount(kind: SourceKind, line: usize, error: AmountError) -> Self {
        Self::InvalidAmount { kind, line, error }
    }

    pub fn invalid_date(kind: SourceKind, line: usize, error: DateError) -> Self {
        Self::InvalidDate { kind, line, error }
    }

    pub fn read(kind: SourceKind, path: &Path, error: io::Error) -> Self {
        Self::Read { kind, path: path.to_path_buf(), error }
    }

    pub fn csv(kind: SourceKind, error: csv::Error) -> Self {
        Self::Csv { kind, error }
    }

    pub fn write(path: &Path, error: csv::Error) -> Self {
        Self::Write { path: path.to_path_buf(), error }
    }
}
