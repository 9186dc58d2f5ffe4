use serde::Deserialize;

/// A row of `invoices.csv`: Lightning invoices the wallet issued (incoming).
#[derive(Debug, Clone, Deserialize)]
pub struct ZeusInvoiceRow {
    #[serde(rename = "Amount Paid (sat)")]
    pub amount_paid: String,
    #[serde(rename = "Payment Hash")]
    pub payment_hash: String,
    #[serde(rename = "Creation Date")]
    pub creation_date: String,
    #[serde(rename = "Memo", default)]
    pub memo: Option<String>
}

impl ZeusInvoiceRow {
    pub const REQUIRED_COLUMNS: &'static [&'static str] = &["Amount Paid (sat)", "Payment Hash", "Creation Date"];
}

/// A row of `payments.csv`: Lightning payments the wallet made (outgoing).
#[derive(Debug, Clone, Deserialize)]
pub struct ZeusPaymentRow {
    #[serde(rename = "Amount Paid (sat)")]
    pub amount_paid: String,
    #[serde(rename = "Payment Hash")]
    pub payment_hash: String,
    #[serde(rename = "Creation Date")]
    pub creation_date: String,
    #[serde(rename = "Total Fees (sat)", default)]
    pub total_fees: Option<String>,
    #[serde(rename = "Destination", default)]
    pub destination: Option<String>,
    #[serde(rename = "Memo", default)]
    pub memo: Option<String>,
    #[serde(rename = "Note", default)]
    pub note: Option<String>
}

impl ZeusPaymentRow {
    pub const REQUIRED_COLUMNS: &'static [&'static str] = &["Amount Paid (sat)", "Payment Hash", "Creation Date"];
}

/// A row of `onchain.csv`. The sign of the amount gives the direction.
#[derive(Debug, Clone, Deserialize)]
pub struct ZeusOnchainRow {
    #[serde(rename = "Amount (sat)")]
    pub amount: String,
    #[serde(rename = "Transaction Hash")]
    pub transaction_hash: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Total Fees (sat)", default)]
    pub total_fees: Option<String>,
    #[serde(rename = "Note", default)]
    pub note: Option<String>
}

impl ZeusOnchainRow {
    pub const REQUIRED_COLUMNS: &'static [&'static str] = &["Amount (sat)", "Transaction Hash", "Timestamp"];
}

/// A row of the newer single-file Zeus export, which lists sent and received
/// Lightning payments together. Sent payments carry a destination.
#[derive(Debug, Clone, Deserialize)]
pub struct ZeusSingleRow {
    #[serde(rename = "Amount Paid (sat)")]
    pub amount_paid: String,
    #[serde(rename = "Payment Hash")]
    pub payment_hash: String,
    #[serde(rename = "Creation Date")]
    pub creation_date: String,
    #[serde(rename = "Destination", default)]
    pub destination: Option<String>,
    #[serde(rename = "Memo", default)]
    pub memo: Option<String>,
    #[serde(rename = "Note", default)]
    pub note: Option<String>
}

impl ZeusSingleRow {
    pub const REQUIRED_COLUMNS: &'static [&'static str] = &["Amount Paid (sat)", "Payment Hash", "Creation Date"];
}
