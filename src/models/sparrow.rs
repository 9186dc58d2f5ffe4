use serde::Deserialize;

/// One row of a Sparrow wallet transaction export.
///
/// Values are kept as raw text so that a bad cell can be reported together with
/// its line number; unconfirmed transactions carry a non-date in `Date (UTC)`.
#[derive(Debug, Clone, Deserialize)]
pub struct SparrowRow {
    #[serde(rename = "Date (UTC)")]
    pub date: String,
    /// Signed wallet balance change in satoshis.
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "Label", default)]
    pub label: Option<String>,
    #[serde(rename = "Txid")]
    pub txid: String
}

impl SparrowRow {
    pub const REQUIRED_COLUMNS: &'static [&'static str] = &["Date (UTC)", "Value", "Label", "Txid"];
}
