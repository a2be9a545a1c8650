use crate::{
    constants::{AMOUNT_DECIMALS, COIN, MAX_ASSET_PRECISION},
    errors::amount::AmountError,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// A signed amount counted in minimal units, where [`COIN`] units make one coin.
///
/// Renders as `[-]Q.RRRRRRRR`. Quotient and remainder are taken from the
/// unsigned magnitude so `i64::MIN` formats without overflowing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(pub i64);

impl Amount {
    pub const fn from_units(units: i64) -> Self {
        Amount(units)
    }

    pub const fn units(self) -> i64 {
        self.0
    }
}

impl From<i64> for Amount {
    fn from(units: i64) -> Self {
        Amount(units)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let coin = COIN as u64;
        write!(f, "{}{}.{:0width$}", sign, magnitude / coin, magnitude % coin, width = AMOUNT_DECIMALS)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (quotient, remainder) = digits.split_once('.').ok_or_else(|| AmountError::MissingPoint(s.to_string()))?;
        if remainder.len() != AMOUNT_DECIMALS {
            return Err(AmountError::FractionLength(remainder.len()));
        }
        if quotient.is_empty() || !quotient.bytes().all(|b| b.is_ascii_digit()) || !remainder.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::InvalidDigits(s.to_string()));
        }
        let quotient: u64 = quotient.parse().map_err(|_| AmountError::OutOfRange(s.to_string()))?;
        let remainder: u64 = remainder.parse().map_err(|_| AmountError::InvalidDigits(s.to_string()))?;
        let magnitude = quotient
            .checked_mul(COIN as u64)
            .and_then(|units| units.checked_add(remainder))
            .ok_or_else(|| AmountError::OutOfRange(s.to_string()))?;

        let units = if negative {
            0i64.checked_sub_unsigned(magnitude).ok_or_else(|| AmountError::OutOfRange(s.to_string()))?
        } else {
            i64::try_from(magnitude).map_err(|_| AmountError::OutOfRange(s.to_string()))?
        };
        Ok(Amount(units))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Formats an asset amount at the asset's own decimal precision.
///
/// A precision of zero still renders a single fractional digit (`"5.0"`),
/// matching what asset explorers already parse.
pub fn format_asset_amount(amount: i64, precision: u8) -> Result<String, AmountError> {
    if precision > MAX_ASSET_PRECISION {
        return Err(AmountError::InvalidPrecision(precision));
    }
    let sign = if amount < 0 { "-" } else { "" };
    let magnitude = amount.unsigned_abs();
    if precision == 0 {
        return Ok(format!("{}{}.0", sign, magnitude));
    }
    let divisor = 10u64.pow(precision as u32);
    Ok(format!("{}{}.{:0width$}", sign, magnitude / divisor, magnitude % divisor, width = precision as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_display() {
        struct Test {
            name: &'static str,
            units: i64,
            expected: &'static str,
        }

        let tests = vec![
            Test { name: "zero", units: 0, expected: "0.00000000" },
            Test { name: "one coin", units: 100_000_000, expected: "1.00000000" },
            Test { name: "one unit", units: 1, expected: "0.00000001" },
            Test { name: "minus one unit", units: -1, expected: "-0.00000001" },
            Test { name: "mixed", units: 123_456_789_012, expected: "1234.56789012" },
            Test { name: "negative coin", units: -100_000_000, expected: "-1.00000000" },
            Test { name: "max", units: i64::MAX, expected: "92233720368.54775807" },
            Test { name: "min", units: i64::MIN, expected: "-92233720368.54775808" },
        ];

        for test in tests {
            assert_eq!(Amount(test.units).to_string(), test.expected, "{} formatted wrongly", test.name);
        }
    }

    #[test]
    fn test_amount_reverses_exactly() {
        let samples = [0, 1, -1, 99_999_999, 100_000_000, -100_000_001, 2_100_000_000_000_000, i64::MAX, i64::MIN, i64::MIN + 1];
        for units in samples {
            let formatted = Amount(units).to_string();
            assert_eq!(formatted.parse::<Amount>().unwrap(), Amount(units), "{formatted} did not reverse");
        }

        // a deterministic sweep over the whole range, including values near both ends
        let mut units = i64::MIN;
        let step = (u64::MAX / 4099) as i64;
        while let Some(next) = units.checked_add(step) {
            let formatted = Amount(units).to_string();
            assert_eq!(formatted.parse::<Amount>().unwrap().units(), units);
            units = next;
        }
    }

    #[test]
    fn test_amount_parse_rejects() {
        assert!(matches!("1".parse::<Amount>(), Err(AmountError::MissingPoint(_))));
        assert!(matches!("1.0".parse::<Amount>(), Err(AmountError::FractionLength(1))));
        assert!(matches!("1.0000000a".parse::<Amount>(), Err(AmountError::InvalidDigits(_))));
        assert!(matches!("+1.00000000".parse::<Amount>(), Err(AmountError::InvalidDigits(_))));
        assert!(matches!("92233720368.54775808".parse::<Amount>(), Err(AmountError::OutOfRange(_))));
        assert!(matches!("-92233720368.54775809".parse::<Amount>(), Err(AmountError::OutOfRange(_))));
    }

    #[test]
    fn test_amount_serde_as_string() {
        let json = serde_json::to_string(&Amount(150_000_000)).unwrap();
        assert_eq!(json, "\"1.50000000\"");
        assert_eq!(serde_json::from_str::<Amount>(&json).unwrap(), Amount(150_000_000));
    }

    #[test]
    fn test_format_asset_amount() {
        assert_eq!(format_asset_amount(12_345, 2).unwrap(), "123.45");
        assert_eq!(format_asset_amount(-5, 3).unwrap(), "-0.005");
        assert_eq!(format_asset_amount(100_000_000, 8).unwrap(), "1.00000000");
        assert_eq!(format_asset_amount(7, 0).unwrap(), "7.0");
        assert_eq!(format_asset_amount(1, 9), Err(AmountError::InvalidPrecision(9)));
    }
}
