use super::koinly::Currency;
use super::{Description, KoinlyRecord, SourceKind, Wallet};

use std::str::FromStr;

use anyhow::Result;

use crate::types::{Satoshis, Timestamp};

fn timestamp(value: &str) -> Result<Timestamp> {
    Ok(Timestamp::from_str(value)?)
}

#[test]
fn test_positive_balance_change_is_received() -> Result<()> {
    let record = KoinlyRecord::from_signed(timestamp("2023-06-15 14:32")?, Satoshis::new(150_000_000))
        .ok_or_else(|| anyhow::anyhow!("record expected"))?;

    assert_eq!(record.received_amount.map(|amount| amount.to_string()), Some("1.50000000".to_string()));
    assert_eq!(record.received_currency, Some(Currency::Btc));
    assert!(record.sent_amount.is_none());
    assert!(!record.is_sent());

    Ok(())
}

#[test]
fn test_negative_balance_change_is_sent_as_absolute_value() -> Result<()> {
    let record = KoinlyRecord::from_signed(timestamp("2023-06-15 14:32")?, Satoshis::new(-2_500))
        .ok_or_else(|| anyhow::anyhow!("record expected"))?;

    assert_eq!(record.sent_amount.map(|amount| amount.to_string()), Some("0.00002500".to_string()));
    assert_eq!(record.sent_currency, Some(Currency::Btc));
    assert!(record.received_amount.is_none());
    assert!(record.is_sent());

    Ok(())
}

#[test]
fn test_zero_balance_change_produces_no_record() -> Result<()> {
    assert!(KoinlyRecord::from_signed(timestamp("2023-06-15 14:32")?, Satoshis::new(0)).is_none());

    Ok(())
}

#[test]
fn test_only_positive_fees_are_recorded() -> Result<()> {
    let date = timestamp("2023-06-15 14:32")?;

    let with_fee = KoinlyRecord::sent(date, Satoshis::new(1_000)).with_fee(Satoshis::new(12));
    let without_fee = KoinlyRecord::sent(date, Satoshis::new(1_000)).with_fee(Satoshis::new(0));

    assert_eq!(with_fee.fee_amount.map(|amount| amount.to_string()), Some("0.00000012".to_string()));
    assert_eq!(with_fee.fee_currency, Some(Currency::Btc));
    assert!(without_fee.fee_amount.is_none());
    assert!(without_fee.fee_currency.is_none());

    Ok(())
}

#[test]
fn test_blank_text_fields_are_left_empty() -> Result<()> {
    let record = KoinlyRecord::received(timestamp("2023-06-15 14:32")?, Satoshis::new(1))
        .with_label(Some("  ".to_string()))
        .with_description(Some(String::new()))
        .with_tx_hash("");

    assert!(record.label.is_none());
    assert!(record.description.is_none());
    assert!(record.tx_hash.is_none());

    Ok(())
}

#[test]
fn test_description_joins_non_blank_parts() {
    let description = Description::new()
        .push("Memo", Some("coffee"))
        .push("Note", Some("   "))
        .push("Destination", None)
        .push("To", Some(" 03abcdef "))
        .build();

    assert_eq!(description, Some("Memo: coffee | To: 03abcdef".to_string()));
    assert_eq!(Description::new().push("Memo", Some("")).build(), None);
}

#[test]
fn test_wallet_file_prefixes() {
    assert_eq!(Wallet::Sparrow.file_prefix(), "sparrow_wallet");
    assert_eq!(Wallet::Zeus.file_prefix(), "zeus_wallet");
    assert_eq!(Wallet::ZeusSingle.file_prefix(), "zeus_wallet_single");
}

#[test]
fn test_only_zeus_exports_have_default_file_names() {
    assert_eq!(SourceKind::ZeusInvoices.default_file_name(), Some("invoices.csv"));
    assert_eq!(SourceKind::ZeusPayments.default_file_name(), Some("payments.csv"));
    assert_eq!(SourceKind::ZeusOnchain.default_file_name(), Some("onchain.csv"));
    assert_eq!(SourceKind::Sparrow.default_file_name(), None);
    assert_eq!(SourceKind::ZeusSingle.default_file_name(), None);
}
