mod reader;
mod sparrow;
mod zeus;
mod zeus_single;

use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::models::{ConversionError, KoinlyRecord, SourceKind};
use crate::types::{Satoshis, Timestamp};

pub use reader::{read_source, validate_source_file};
pub use sparrow::SparrowConverter;
pub use zeus::{ZeusInvoiceConverter, ZeusOnchainConverter, ZeusPaymentConverter};
pub use zeus_single::ZeusSingleConverter;

/// Maps the rows of one wallet export file onto Koinly records.
pub trait SourceConverter: Send + 'static {
    type Row: DeserializeOwned;

    fn source(&self) -> SourceKind;

    fn required_columns(&self) -> &'static [&'static str];

    /// Converts a single row. `line` is the 1-based line in the file, the header being line 1.
    /// Returning `Ok(None)` drops the row.
    fn convert_row(&mut self, line: usize, row: Self::Row) -> Result<Option<KoinlyRecord>, ConversionError>;

    /// Called once every row has been converted.
    fn finish(self, rows_read: usize, records: Vec<KoinlyRecord>) -> Result<Vec<KoinlyRecord>, ConversionError>
    where
        Self: Sized,
    {
        let _ = rows_read;
        Ok(records)
    }
}

fn parse_amount(kind: SourceKind, line: usize, value: &str) -> Result<Satoshis, ConversionError> {
    Satoshis::from_str(value).map_err(|error| ConversionError::invalid_amount(kind, line, error))
}

/// Optional fee columns may be absent or blank, which counts as no fee.
fn parse_fee(kind: SourceKind, line: usize, value: Option<&str>) -> Result<Satoshis, ConversionError> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => parse_amount(kind, line, value),
        None => Ok(Satoshis::default())
    }
}

fn parse_date(kind: SourceKind, line: usize, value: &str) -> Result<Timestamp, ConversionError> {
    Timestamp::from_str(value).map_err(|error| ConversionError::invalid_date(kind, line, error))
}
