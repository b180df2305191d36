use crate::types::errors::AmountError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{AddAssign, SubAssign};
use std::str::FromStr;
use tracing::{debug, error};

const DECIMAL_PLACES: u32 = 2;
const SCALE: i64 = 10i64.pow(DECIMAL_PLACES);

/// A monetary quantity held as an integer count of minor currency units (cents).
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);
    pub const MINOR_UNITS_PER_MAJOR: i64 = SCALE;

    pub fn from_minor_units(minor_units: i64) -> Self {
        Amount(minor_units)
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// The value in major units, e.g. `1250` minor units is `12.50`.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, DECIMAL_PLACES)
    }
}

impl AddAssign<Amount> for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Amount AddAssign error: Overflow")
        }
    }
}

impl SubAssign<Amount> for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        if let Some(new_val) = self.checked_sub(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Amount SubAssign error: Overflow")
        }
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |mut total, amount| {
            total += *amount;
            total
        })
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.to_decimal())
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        // JSON numbers such as 1e-7 arrive in scientific notation
        let decimal = Decimal::from_str(value).or_else(|_| Decimal::from_scientific(value))?.normalize();

        let rounded = decimal.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        if rounded != decimal {
            debug!("Amount [{value}] rounded to [{rounded}]");
        }

        let minor_units = rounded.checked_mul(Decimal::from(SCALE))
            .and_then(|scaled| scaled.to_i64())
            .ok_or(AmountError::Overflow)?;

        Ok(Amount::from_minor_units(minor_units))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Stored amounts are either text (`"100"`) or a bare JSON number (`100`, `12.5`).
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAmount {
    Text(String),
    Number(serde_json::Number)
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match StoredAmount::deserialize(deserializer)? {
            StoredAmount::Text(text) => text,
            StoredAmount::Number(number) => number.to_string()
        };

        Amount::from_str(&value).map_err(de::Error::custom)
    }
}
