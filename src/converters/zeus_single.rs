use crate::converters::{SourceConverter, parse_amount, parse_date};
use crate::models::{ConversionError, Description, KoinlyRecord, SourceKind, ZeusSingleRow};

const DESTINATION_PREVIEW_CHARS: usize = 20;

/// Converts the newer single-file Zeus export, where a payment is outgoing
/// exactly when it has a destination.
#[derive(Debug, Default)]
pub struct ZeusSingleConverter;

impl SourceConverter for ZeusSingleConverter {
    type Row = ZeusSingleRow;

    fn source(&self) -> SourceKind {
        SourceKind::ZeusSingle
    }

    fn required_columns(&self) -> &'static [&'static str] {
        ZeusSingleRow::REQUIRED_COLUMNS
    }

    fn convert_row(&mut self, line: usize, row: ZeusSingleRow) -> Result<Option<KoinlyRecord>, ConversionError> {
        let kind = self.source();
        let amount = parse_amount(kind, line, &row.amount_paid)?;
        let date = parse_date(kind, line, &row.creation_date)?;

        if amount.is_zero() {
            return Ok(None);
        }

        let destination = row.destination
            .as_deref()
            .map(str::trim)
            .filter(|destination| !destination.is_empty());

        let record = match destination {
            Some(_) => KoinlyRecord::sent(date, amount),
            None => KoinlyRecord::received(date, amount)
        };

        let preview = destination.map(|destination| {
            format!("{}...", destination.chars().take(DESTINATION_PREVIEW_CHARS).collect::<String>())
        });

        let description = Description::new()
            .push("Memo", row.memo.as_deref())
            .push("Note", row.note.as_deref())
            .push("To", preview.as_deref())
            .build();

        Ok(Some(
            record
                .with_description(description)
                .with_tx_hash(row.payment_hash)
        ))
    }
}
