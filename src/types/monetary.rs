use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Number of fractional digits in a BTC amount (1 BTC = 10^8 sat).
pub const BTC_DECIMAL_PLACES: u32 = 8;

/// A signed amount of satoshis as found in wallet exports.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Satoshis(i64);

impl Satoshis {
    #[cfg(test)]
    pub fn new(value: i64) -> Self {
        Satoshis(value)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn abs(self) -> Satoshis {
        Satoshis(self.0.saturating_abs())
    }
}

impl FromStr for Satoshis {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        if let Ok(sats) = value.parse::<i64>() {
            return Ok(Satoshis(sats));
        }

        //NOTE: Spreadsheet round trips tend to turn "1200" into "1200.0", so whole decimals are accepted
        let decimal = Decimal::from_str(value).map_err(|error| {
            AmountError::InvalidFormat(format!("'{value}' is not a number: {error}"))
        })?;

        if !decimal.fract().is_zero() {
            return Err(AmountError::Fractional(value.to_string()));
        }

        decimal.to_i64()
            .map(Satoshis)
            .ok_or_else(|| AmountError::Overflow(value.to_string()))
    }
}

/// A BTC amount carried as an exact decimal with eight fractional digits.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Btc(Decimal);

impl From<Satoshis> for Btc {
    fn from(sats: Satoshis) -> Self {
        Btc(Decimal::new(sats.0, BTC_DECIMAL_PLACES))
    }
}

impl Display for Btc {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.width$}", self.0, width = BTC_DECIMAL_PLACES as usize)
    }
}

impl Serialize for Btc {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
