use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::converters::SourceConverter;
use crate::models::{ConversionError, KoinlyRecord, SourceKind};

/// Checks that `path` names an existing `.csv` file.
pub fn validate_source_file(kind: SourceKind, path: &Path) -> Result<(), ConversionError> {
    if !path.exists() {
        return Err(ConversionError::SourceNotFound { kind, path: path.to_path_buf() });
    }

    if !path.is_file() {
        return Err(ConversionError::NotAFile { kind, path: path.to_path_buf() });
    }

    let is_csv = path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));

    if !is_csv {
        return Err(ConversionError::NotCsv { kind, path: path.to_path_buf() });
    }

    Ok(())
}

/// Streams the CSV file at `path` through `converter` and returns the resulting records in file order.
pub fn read_source<C: SourceConverter>(path: &Path, mut converter: C) -> Result<Vec<KoinlyRecord>, ConversionError> {
    let kind = converter.source();

    validate_source_file(kind, path)?;

    let file = File::open(path).map_err(|error| ConversionError::read(kind, path, error))?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader.headers()
        .map_err(|error| ConversionError::csv(kind, error))?
        .clone();

    if headers.iter().all(|header| header.is_empty()) {
        return Err(ConversionError::EmptySource { kind });
    }

    let missing: Vec<&str> = converter.required_columns()
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .collect();

    if !missing.is_empty() {
        return Err(ConversionError::missing_columns(kind, &missing));
    }

    let mut records = Vec::new();
    let mut rows_read = 0;

    for result in reader.records() {
        let record = result.map_err(|error| ConversionError::csv(kind, error))?;
        let line = record.position().map_or(0, |position| position.line() as usize);
        let row: C::Row = record.deserialize(Some(&headers))
            .map_err(|error| ConversionError::csv(kind, error))?;
        rows_read += 1;

        match converter.convert_row(line, row)? {
            Some(converted) => records.push(converted),
            None => debug!("Dropped {kind} row at line {line}")
        }
    }

    debug!("Read {rows_read} rows from {kind} file {}, kept {}", path.display(), records.len());

    converter.finish(rows_read, records)
}
