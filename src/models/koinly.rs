use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{Btc, Satoshis, Timestamp};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Currency {
    #[serde(rename = "BTC")]
    Btc
}

/// A single line of Koinly's universal CSV import format.
///
/// Field order is the column order of the written file. Koinly fills in the
/// net worth itself when it is left empty, so those columns are never set by
/// the wallet converters.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct KoinlyRecord {
    #[serde(rename = "Date")]
    pub date: Timestamp,
    #[serde(rename = "Sent Amount")]
    pub sent_amount: Option<Btc>,
    #[serde(rename = "Sent Currency")]
    pub sent_currency: Option<Currency>,
    #[serde(rename = "Received Amount")]
    pub received_amount: Option<Btc>,
    #[serde(rename = "Received Currency")]
    pub received_currency: Option<Currency>,
    #[serde(rename = "Fee Amount")]
    pub fee_amount: Option<Btc>,
    #[serde(rename = "Fee Currency")]
    pub fee_currency: Option<Currency>,
    #[serde(rename = "Net Worth Amount")]
    pub net_worth_amount: Option<Decimal>,
    #[serde(rename = "Net Worth Currency")]
    pub net_worth_currency: Option<String>,
    #[serde(rename = "Label")]
    pub label: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "TxHash")]
    pub tx_hash: Option<String>
}

impl KoinlyRecord {
    fn empty(date: Timestamp) -> Self {
        Self {
            date,
            sent_amount: None,
            sent_currency: None,
            received_amount: None,
            received_currency: None,
            fee_amount: None,
            fee_currency: None,
            net_worth_amount: None,
            net_worth_currency: None,
            label: None,
            description: None,
            tx_hash: None
        }
    }

    /// Incoming funds. The sign of `amount` is ignored.
    pub fn received(date: Timestamp, amount: Satoshis) -> Self {
        Self {
            received_amount: Some(Btc::from(amount.abs())),
            received_currency: Some(Currency::Btc),
            ..Self::empty(date)
        }
    }

    /// Outgoing funds. The sign of `amount` is ignored.
    pub fn sent(date: Timestamp, amount: Satoshis) -> Self {
        Self {
            sent_amount: Some(Btc::from(amount.abs())),
            sent_currency: Some(Currency::Btc),
            ..Self::empty(date)
        }
    }

    /// Picks the direction from the sign of a wallet balance change.
    /// A zero change produces no record.
    pub fn from_signed(date: Timestamp, amount: Satoshis) -> Option<Self> {
        if amount.is_zero() {
            None
        } else if amount.is_negative() {
            Some(Self::sent(date, amount))
        } else {
            Some(Self::received(date, amount))
        }
    }

    pub fn is_sent(&self) -> bool {
        self.sent_amount.is_some()
    }

    pub fn with_fee(mut self, fee: Satoshis) -> Self {
        if fee.is_positive() {
            self.fee_amount = Some(Btc::from(fee));
            self.fee_currency = Some(Currency::Btc);
        }
        self
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = non_blank(label);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = non_blank(description);
        self
    }

    pub fn with_tx_hash(mut self, tx_hash: impl Into<String>) -> Self {
        self.tx_hash = non_blank(Some(tx_hash.into()));
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Builds the free text description from the note-like columns of an export.
#[derive(Debug, Default)]
pub struct Description {
    parts: Vec<String>
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key: value` unless the value is missing or blank.
    pub fn push(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) {
            self.parts.push(format!("{key}: {value}"));
        }
        self
    }

    pub fn build(self) -> Option<String> {
        (!self.parts.is_empty()).then(|| self.parts.join(" | "))
    }
}
