use super::koinly_writer::{output_file_name, permission_denied_or};
use super::write_koinly_csv;

use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use crate::models::{ConversionError, KoinlyRecord};
use crate::types::{Satoshis, Timestamp};

const HEADER: &str = "Date,Sent Amount,Sent Currency,Received Amount,Received Currency,Fee Amount,Fee Currency,Net Worth Amount,Net Worth Currency,Label,Description,TxHash";

#[test]
fn test_output_file_name_is_timestamped_in_utc() {
    let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();

    assert_eq!(output_file_name("zeus_wallet", now), "zeus_wallet_2024-03-09_07-05-01.csv");
}

#[test]
fn test_writer_emits_fixed_header_and_rows() -> Result<()> {
    let dir = tempdir()?;
    let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();

    let records = vec![
        KoinlyRecord::received(Timestamp::from_str("2023-06-15 14:32")?, Satoshis::new(150_000_000))
            .with_label(Some("Salary".to_string()))
            .with_tx_hash("aaa"),
        KoinlyRecord::sent(Timestamp::from_str("2023-06-16 08:00")?, Satoshis::new(5_000))
            .with_fee(Satoshis::new(3))
            .with_description(Some("Memo: rent, june".to_string()))
            .with_tx_hash("bbb"),
    ];

    let path = write_koinly_csv(dir.path(), "sparrow_wallet", &records, now)?;

    assert_eq!(path, dir.path().join("sparrow_wallet_2024-03-09_07-05-01.csv"));

    let contents = fs::read_to_string(&path)?;
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines, vec![
        HEADER,
        "2023-06-15 14:32 UTC,,,1.50000000,BTC,,,,,Salary,,aaa",
        "2023-06-16 08:00 UTC,0.00005000,BTC,,,0.00000003,BTC,,,,\"Memo: rent, june\",bbb",
    ]);

    Ok(())
}

#[test]
fn test_writer_creates_missing_output_directories() -> Result<()> {
    let dir = tempdir()?;
    let nested = dir.path().join("reports").join("2023");
    let records = vec![KoinlyRecord::received(Timestamp::from_str("2023-06-15 14:32")?, Satoshis::new(1))];

    let path = write_koinly_csv(&nested, "zeus_wallet", &records, Utc::now())?;

    assert!(path.starts_with(&nested));
    assert!(path.is_file());

    Ok(())
}

#[test]
fn test_writer_refuses_to_write_nothing() -> Result<()> {
    let dir = tempdir()?;

    let result = write_koinly_csv(dir.path(), "zeus_wallet", &[], Utc::now());

    assert!(matches!(result, Err(ConversionError::NoTransactions)));
    assert_eq!(fs::read_dir(dir.path())?.count(), 0);

    Ok(())
}

#[test]
fn test_permission_failures_are_reported_as_permission_denied() {
    let path = Path::new("/readonly/reports");
    let error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");

    let mapped = permission_denied_or(path, error, |error| ConversionError::OutputDirectory {
        path: path.to_path_buf(),
        error
    });

    match mapped {
        ConversionError::PermissionDenied { path: reported } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}")
    }
}

#[test]
fn test_other_io_failures_keep_their_own_error() {
    let path = Path::new("/missing/reports");
    let error = io::Error::new(io::ErrorKind::NotFound, "gone");

    let mapped = permission_denied_or(path, error, |error| ConversionError::OutputDirectory {
        path: path.to_path_buf(),
        error
    });

    assert!(matches!(mapped, ConversionError::OutputDirectory { .. }));
}

#[test]
fn test_output_dir_that_is_a_file_fails_to_be_created() -> Result<()> {
    let dir = tempdir()?;
    let blocker = dir.path().join("reports");
    fs::write(&blocker, "not a directory")?;
    let records = vec![KoinlyRecord::received(Timestamp::from_str("2023-06-15 14:32")?, Satoshis::new(1))];

    let result = write_koinly_csv(&blocker.join("2023"), "zeus_wallet", &records, Utc::now());

    assert!(matches!(result, Err(ConversionError::OutputDirectory { .. })));

    Ok(())
}
