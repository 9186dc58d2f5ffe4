use crate::converters::{SourceConverter, parse_amount, parse_date, parse_fee};
use crate::models::{ConversionError, Description, KoinlyRecord, SourceKind, ZeusInvoiceRow, ZeusOnchainRow, ZeusPaymentRow};

/// `invoices.csv`: every paid invoice is an incoming Lightning payment.
#[derive(Debug, Default)]
pub struct ZeusInvoiceConverter;

impl SourceConverter for ZeusInvoiceConverter {
    type Row = ZeusInvoiceRow;

    fn source(&self) -> SourceKind {
        SourceKind::ZeusInvoices
    }

    fn required_columns(&self) -> &'static [&'static str] {
        ZeusInvoiceRow::REQUIRED_COLUMNS
    }

    fn convert_row(&mut self, line: usize, row: ZeusInvoiceRow) -> Result<Option<KoinlyRecord>, ConversionError> {
        let kind = self.source();
        let amount = parse_amount(kind, line, &row.amount_paid)?;
        let date = parse_date(kind, line, &row.creation_date)?;

        // Unpaid and expired invoices are exported with nothing paid
        if amount.is_zero() {
            return Ok(None);
        }

        let description = Description::new()
            .push("Memo", row.memo.as_deref())
            .build();

        Ok(Some(
            KoinlyRecord::received(date, amount)
                .with_description(description)
                .with_tx_hash(row.payment_hash)
        ))
    }
}

/// `payments.csv`: outgoing Lightning payments, with routing fees.
#[derive(Debug, Default)]
pub struct ZeusPaymentConverter;

impl SourceConverter for ZeusPaymentConverter {
    type Row = ZeusPaymentRow;

    fn source(&self) -> SourceKind {
        SourceKind::ZeusPayments
    }

    fn required_columns(&self) -> &'static [&'static str] {
        ZeusPaymentRow::REQUIRED_COLUMNS
    }

    fn convert_row(&mut self, line: usize, row: ZeusPaymentRow) -> Result<Option<KoinlyRecord>, ConversionError> {
        let kind = self.source();
        let amount = parse_amount(kind, line, &row.amount_paid)?;
        let fee = parse_fee(kind, line, row.total_fees.as_deref())?;
        let date = parse_date(kind, line, &row.creation_date)?;

        if amount.is_zero() {
            return Ok(None);
        }

        let description = Description::new()
            .push("Memo", row.memo.as_deref())
            .push("Note", row.note.as_deref())
            .push("Destination", row.destination.as_deref())
            .build();

        Ok(Some(
            KoinlyRecord::sent(date, amount)
                .with_fee(fee)
                .with_description(description)
                .with_tx_hash(row.payment_hash)
        ))
    }
}

/// `onchain.csv`: positive amounts were received, negative amounts were sent.
#[derive(Debug, Default)]
pub struct ZeusOnchainConverter;

impl SourceConverter for ZeusOnchainConverter {
    type Row = ZeusOnchainRow;

    fn source(&self) -> SourceKind {
        SourceKind::ZeusOnchain
    }

    fn required_columns(&self) -> &'static [&'static str] {
        ZeusOnchainRow::REQUIRED_COLUMNS
    }

    fn convert_row(&mut self, line: usize, row: ZeusOnchainRow) -> Result<Option<KoinlyRecord>, ConversionError> {
        let kind = self.source();
        let amount = parse_amount(kind, line, &row.amount)?;
        let fee = parse_fee(kind, line, row.total_fees.as_deref())?;
        let date = parse_date(kind, line, &row.timestamp)?;

        let Some(record) = KoinlyRecord::from_signed(date, amount) else {
            return Ok(None);
        };

        // The sender pays the miner fee
        let record = if record.is_sent() { record.with_fee(fee) } else { record };

        let description = Description::new()
            .push("Note", row.note.as_deref())
            .build();

        Ok(Some(
            record
                .with_description(description)
                .with_tx_hash(row.transaction_hash)
        ))
    }
}
