use std::str::FromStr;

use tracing::warn;

use crate::converters::{SourceConverter, parse_amount};
use crate::models::{ConversionError, KoinlyRecord, SourceKind, SparrowRow};
use crate::types::Timestamp;

/// Converts a Sparrow wallet transaction export.
///
/// Rows without a parseable date (unconfirmed transactions) are skipped, but a
/// file in which no row has a valid date is rejected.
#[derive(Debug, Default)]
pub struct SparrowConverter {
    dated_rows: usize
}

impl SparrowConverter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SourceConverter for SparrowConverter {
    type Row = SparrowRow;

    fn source(&self) -> SourceKind {
        SourceKind::Sparrow
    }

    fn required_columns(&self) -> &'static [&'static str] {
        SparrowRow::REQUIRED_COLUMNS
    }

    fn convert_row(&mut self, line: usize, row: SparrowRow) -> Result<Option<KoinlyRecord>, ConversionError> {
        let date = match Timestamp::from_str(&row.date) {
            Ok(date) => date,
            Err(error) => {
                warn!("Skipping Sparrow transaction [{}] at line {line}: {error}", row.txid);
                return Ok(None);
            }
        };
        self.dated_rows += 1;

        let value = parse_amount(SourceKind::Sparrow, line, &row.value)?;

        Ok(KoinlyRecord::from_signed(date, value).map(|record| {
            record
                .with_label(row.label)
                .with_tx_hash(row.txid)
        }))
    }

    fn finish(self, rows_read: usize, records: Vec<KoinlyRecord>) -> Result<Vec<KoinlyRecord>, ConversionError> {
        if rows_read == 0 {
            return Err(ConversionError::EmptySource { kind: SourceKind::Sparrow });
        }

        if self.dated_rows == 0 {
            return Err(ConversionError::NoValidDates { kind: SourceKind::Sparrow });
        }

        Ok(records)
    }
}
