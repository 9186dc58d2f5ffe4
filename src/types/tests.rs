use super::{AmountError, Btc, DateError, Satoshis, Timestamp};
use anyhow::Result;
use chrono::{TimeZone, Utc};
use std::str::FromStr;

#[test]
fn test_satoshis_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("150000000", 150_000_000),
        ("-2500", -2_500),
        ("  42  ", 42),
        ("+7", 7),
        ("0", 0),
        ("1200.0", 1_200),
        ("-300.000", -300),
    ];

    for (input_string, expected) in test_cases {
        assert_eq!(Satoshis::from_str(input_string)?, Satoshis::new(expected));
    }

    Ok(())
}

#[test]
fn test_satoshis_fails_to_parse_invalid_strings() {
    assert!(matches!(Satoshis::from_str(""), Err(AmountError::InvalidFormat(_))));
    assert!(matches!(Satoshis::from_str("   "), Err(AmountError::InvalidFormat(_))));
    assert!(matches!(Satoshis::from_str("abc"), Err(AmountError::InvalidFormat(_))));
    assert!(matches!(Satoshis::from_str("1.5"), Err(AmountError::Fractional(_))));
    assert!(matches!(Satoshis::from_str("12abc"), Err(AmountError::InvalidFormat(_))));
}

#[test]
fn test_satoshis_sign_helpers() {
    assert!(Satoshis::new(-1).is_negative());
    assert!(Satoshis::new(1).is_positive());
    assert!(Satoshis::new(0).is_zero());
    assert_eq!(Satoshis::new(-2_500).abs(), Satoshis::new(2_500));
    assert_eq!(Satoshis::new(i64::MIN).abs(), Satoshis::new(i64::MAX));
}

#[test]
fn test_btc_always_formats_eight_decimal_places() {
    let test_cases = vec![
        (150_000_000, "1.50000000"),
        (2_500, "0.00002500"),
        (1, "0.00000001"),
        (100_000_000, "1.00000000"),
        (2_100_000_000_000_000, "21000000.00000000"),
        (-50_000, "-0.00050000"),
    ];

    for (sats, expected) in test_cases {
        assert_eq!(Btc::from(Satoshis::new(sats)).to_string(), expected);
    }
}

#[test]
fn test_timestamp_parses_sparrow_style_dates() -> Result<()> {
    let expected = Utc.with_ymd_and_hms(2023, 6, 15, 14, 32, 10).unwrap();

    assert_eq!(Timestamp::from_str("2023-06-15 14:32:10")?.as_datetime(), expected);
    assert_eq!(Timestamp::from_str("2023-06-15T14:32:10")?.as_datetime(), expected);
    assert_eq!(Timestamp::from_str(" 2023-06-15 14:32:10.000 ")?.as_datetime(), expected);
    assert_eq!(Timestamp::from_str("2023-06-15 14:32")?.to_string(), "2023-06-15 14:32 UTC");

    Ok(())
}

#[test]
fn test_timestamp_parses_epochs_and_offsets() -> Result<()> {
    assert_eq!(Timestamp::from_str("1700000000")?.to_string(), "2023-11-14 22:13 UTC");
    assert_eq!(Timestamp::from_str("1700000000000")?.to_string(), "2023-11-14 22:13 UTC");
    assert_eq!(Timestamp::from_str("2024-01-02T03:04:05+02:00")?.to_string(), "2024-01-02 01:04 UTC");
    assert_eq!(Timestamp::from_str("2024-01-02T03:04:05Z")?.to_string(), "2024-01-02 03:04 UTC");

    Ok(())
}

#[test]
fn test_timestamp_accepts_its_own_output_and_plain_dates() -> Result<()> {
    assert_eq!(Timestamp::from_str("2022-12-31 23:59 UTC")?.to_string(), "2022-12-31 23:59 UTC");
    assert_eq!(Timestamp::from_str("2022-12-31")?.to_string(), "2022-12-31 00:00 UTC");
    assert_eq!(Timestamp::from_str("12/31/2022, 11:59:00 PM")?.to_string(), "2022-12-31 23:59 UTC");
    assert_eq!(Timestamp::from_str("12/31/2022, 11:59 PM")?.to_string(), "2022-12-31 23:59 UTC");
    assert_eq!(Timestamp::from_str("12/31/2022 11:59 PM")?.to_string(), "2022-12-31 23:59 UTC");
    assert_eq!(Timestamp::from_str("12/31/2022, 23:59")?.to_string(), "2022-12-31 23:59 UTC");
    assert_eq!(Timestamp::from_str("12/31/2022 23:59")?.to_string(), "2022-12-31 23:59 UTC");
    assert_eq!(Timestamp::from_str("1/5/2024, 9:03 AM")?.to_string(), "2024-01-05 09:03 UTC");

    Ok(())
}

#[test]
fn test_timestamp_rejects_unconfirmed_and_garbage() {
    assert!(matches!(Timestamp::from_str(""), Err(DateError::Empty)));
    assert!(matches!(Timestamp::from_str("Unconfirmed"), Err(DateError::Unrecognised(_))));
    assert!(matches!(Timestamp::from_str("2023-13-40 10:00"), Err(DateError::Unrecognised(_))));
    assert!(matches!(Timestamp::from_str("99999999999999999"), Err(DateError::OutOfRange(_))));
}

#[test]
fn test_timestamps_order_chronologically() -> Result<()> {
    let earlier = Timestamp::from_str("2023-01-01 00:00")?;
    let later = Timestamp::from_str("1700000000")?;

    assert!(earlier < later);

    Ok(())
}
