mod errors;
mod koinly;
mod sparrow;
#[cfg(test)]
mod tests;
mod zeus;

use std::fmt;
use std::fmt::{Display, Formatter};

pub use errors::ConversionError;
pub use koinly::{Description, KoinlyRecord};
pub use sparrow::SparrowRow;
pub use zeus::{ZeusInvoiceRow, ZeusOnchainRow, ZeusPaymentRow, ZeusSingleRow};

/// Wallet export formats that can be converted.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Wallet {
    Sparrow,
    Zeus,
    ZeusSingle
}

impl Wallet {
    /// Prefix of the timestamped output file name.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Wallet::Sparrow => "sparrow_wallet",
            Wallet::Zeus => "zeus_wallet",
            Wallet::ZeusSingle => "zeus_wallet_single"
        }
    }
}

impl Display for Wallet {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Wallet::Sparrow => "Sparrow wallet",
            Wallet::Zeus => "Zeus wallet",
            Wallet::ZeusSingle => "Zeus wallet (single file)"
        };
        formatter.write_str(name)
    }
}

/// The individual CSV file a row was read from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SourceKind {
    Sparrow,
    ZeusInvoices,
    ZeusPayments,
    ZeusOnchain,
    ZeusSingle
}

impl SourceKind {
    /// Name Zeus gives the file when exporting, looked up when no path is given.
    pub fn default_file_name(&self) -> Option<&'static str> {
        match self {
            SourceKind::ZeusInvoices => Some("invoices.csv"),
            SourceKind::ZeusPayments => Some("payments.csv"),
            SourceKind::ZeusOnchain => Some("onchain.csv"),
            SourceKind::Sparrow | SourceKind::ZeusSingle => None
        }
    }
}

impl Display for SourceKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Sparrow => "Sparrow export",
            SourceKind::ZeusInvoices => "Zeus invoices",
            SourceKind::ZeusPayments => "Zeus payments",
            SourceKind::ZeusOnchain => "Zeus onchain",
            SourceKind::ZeusSingle => "Zeus payments export"
        };
        formatter.write_str(name)
    }
}
