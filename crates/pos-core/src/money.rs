//! Currency Amounts
//!
//! Exact decimal money on top of `rust_decimal`. Prices arrive from the
//! backend as JSON numbers or numeric strings; neither path goes through
//! binary floating point.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An exact currency amount (Rupiah)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Price multiplied by a line quantity
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0 * Decimal::from(quantity))
    }

    /// Even share over `count` parts, rounded to cents; zero when `count` is 0
    pub fn divided_by(self, count: u64) -> Money {
        if count == 0 {
            return Money::ZERO;
        }
        Money(round_cents(self.0 / Decimal::from(count)))
    }

    /// This amount as a fraction of `whole`, for sizing chart bars
    pub fn ratio_of(self, whole: Money) -> f64 {
        if whole.0.is_zero() {
            return 0.0;
        }
        (self.0 / whole.0).to_f64().unwrap_or(0.0)
    }

    /// Fixed two-decimal wire representation, e.g. `"20000.00"`
    pub fn to_fixed2(&self) -> String {
        let mut rounded = round_cents(self.0);
        rounded.rescale(2);
        rounded.to_string()
    }

    /// Indonesian display form: `Rp 45.000` or `Rp 12.500,50`
    pub fn format_rupiah(&self) -> String {
        let rounded = round_cents(self.0);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        let abs = rounded.abs();
        let whole = abs.trunc();
        let cents = ((abs - whole) * Decimal::ONE_HUNDRED).to_u32().unwrap_or(0);

        let digits = whole.normalize().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        if cents == 0 {
            format!("{}Rp {}", sign, grouped)
        } else {
            format!("{}Rp {},{:02}", sign, grouped, cents)
        }
    }
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

macro_rules! money_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Money {
                fn from(amount: $int) -> Self {
                    Money(Decimal::from(amount))
                }
            }
        )*
    };
}

money_from_int!(i32, i64, u32, u64);

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s).map(Money)
    }
}

/// Parse a decimal literal, also accepting exponent notation (`"1.5e4"`)
pub fn parse_decimal(s: &str) -> Result<Decimal, rust_decimal::Error> {
    let trimmed = s.trim();
    Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed))
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_rupiah())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_fixed2())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decimal_from_json(deserializer).map(Money)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Text(String),
    Number(serde_json::Number),
}

/// Deserialize a decimal from either a JSON string or a JSON number
pub fn decimal_from_json<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    let text = match RawDecimal::deserialize(deserializer)? {
        RawDecimal::Text(text) => text,
        RawDecimal::Number(number) => number.to_string(),
    };
    parse_decimal(&text).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_from_string_and_number() {
        let from_string: Money = serde_json::from_str(r#""15000.50""#).unwrap();
        let from_number: Money = serde_json::from_str("15000.5").unwrap();
        let from_int: Money = serde_json::from_str("8000").unwrap();
        assert_eq!(from_string, Money::new(dec!(15000.50)));
        assert_eq!(from_number, from_string);
        assert_eq!(from_int, Money::new(dec!(8000)));
        assert!(serde_json::from_str::<Money>(r#""abc""#).is_err());
    }

    #[test]
    fn test_repeated_sums_do_not_drift() {
        let dime = Money::new(dec!(0.10));
        let total: Money = std::iter::repeat(dime).take(1000).sum();
        assert_eq!(total, Money::new(dec!(100)));
    }

    #[test]
    fn test_to_fixed2() {
        assert_eq!(Money::new(dec!(20000)).to_fixed2(), "20000.00");
        assert_eq!(Money::new(dec!(12.5)).to_fixed2(), "12.50");
        assert_eq!(Money::new(dec!(0.005)).to_fixed2(), "0.01");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(Money::new(dec!(45000)).format_rupiah(), "Rp 45.000");
        assert_eq!(Money::new(dec!(1250000.5)).format_rupiah(), "Rp 1.250.000,50");
        assert_eq!(Money::new(dec!(999)).format_rupiah(), "Rp 999");
        assert_eq!(Money::ZERO.format_rupiah(), "Rp 0");
    }

    #[test]
    fn test_divided_by() {
        assert_eq!(Money::new(dec!(100000)).divided_by(3), Money::new(dec!(33333.33)));
        assert_eq!(Money::new(dec!(100000)).divided_by(0), Money::ZERO);
    }
}
