//! Exact decimal nightly rates.
//!
//! Rates are stored as whole hundredths so that equality, hashing, and sums
//! are exact. Text input accepts up to two fractional digits; output always
//! shows two.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::error::CatalogError;

/// Number of minor units in one major unit.
const MINOR_PER_MAJOR: u64 = 100;

/// Maximum number of fractional digits accepted when parsing.
const MAX_FRACTION_DIGITS: usize = 2;

/// A non-negative nightly price with two decimal places.
///
/// # Example
///
/// ```
/// use room_catalog::Rate;
///
/// let rate: Rate = "225.5".parse().expect("valid rate");
/// assert_eq!(rate, Rate::from_minor_units(22_550));
/// assert_eq!(rate.to_string(), "225.50");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rate(u64);

impl Rate {
    /// The zero rate, returned by sums over empty sequences.
    pub const ZERO: Self = Self(0);

    /// Builds a rate from hundredths, so `22_500` is `225.00`.
    #[must_use]
    pub const fn from_minor_units(minor: u64) -> Self {
        Self(minor)
    }

    /// Builds a rate with no fractional part, saturating on overflow.
    #[must_use]
    pub const fn from_major_units(major: u64) -> Self {
        Self(major.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Returns the rate in hundredths.
    #[must_use]
    pub const fn minor_units(self) -> u64 {
        self.0
    }
}

impl Add for Rate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Rate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Rate {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.0.div_euclid(MINOR_PER_MAJOR);
        let minor = self.0.rem_euclid(MINOR_PER_MAJOR);
        write!(f, "{major}.{minor:02}")
    }
}

impl FromStr for Rate {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &'static str| CatalogError::InvalidRate {
            value: value.to_owned(),
            reason,
        };

        let trimmed = value.trim();
        if trimmed.starts_with('-') {
            return Err(invalid("rate must not be negative"));
        }

        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal point"));
        }
        if fraction.len() > MAX_FRACTION_DIGITS || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected at most two fractional digits"));
        }

        let major: u64 = whole.parse().map_err(|_| invalid("rate is too large"))?;
        let minor = match fraction.len() {
            0 => 0,
            1 => fraction
                .parse::<u64>()
                .map(|tenths| tenths.saturating_mul(10))
                .map_err(|_| invalid("expected at most two fractional digits"))?,
            _ => fraction
                .parse::<u64>()
                .map_err(|_| invalid("expected at most two fractional digits"))?,
        };

        major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|scaled| scaled.checked_add(minor))
            .map(Self)
            .ok_or_else(|| invalid("rate is too large"))
    }
}

#[cfg(test)]
mod tests {
    //! Covers rate parsing, formatting, and summation.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("225.00", 22_500)]
    #[case("225", 22_500)]
    #[case("225.5", 22_550)]
    #[case("0.05", 5)]
    #[case(" 175.00 ", 17_500)]
    #[case("175.", 17_500)]
    fn parses_valid_rates(#[case] input: &str, #[case] minor: u64) {
        assert_eq!(input.parse::<Rate>(), Ok(Rate::from_minor_units(minor)));
    }

    #[rstest]
    #[case::negative("-1.00", "rate must not be negative")]
    #[case::empty("", "expected digits before the decimal point")]
    #[case::letters("abc", "expected digits before the decimal point")]
    #[case::leading_dot(".50", "expected digits before the decimal point")]
    #[case::too_precise("1.005", "expected at most two fractional digits")]
    #[case::bad_fraction("1.x", "expected at most two fractional digits")]
    #[case::overflow("99999999999999999999", "rate is too large")]
    fn rejects_invalid_rates(#[case] input: &str, #[case] reason: &'static str) {
        assert_eq!(
            input.parse::<Rate>(),
            Err(CatalogError::InvalidRate {
                value: input.to_owned(),
                reason,
            })
        );
    }

    #[rstest]
    #[case(0, "0.00")]
    #[case(5, "0.05")]
    #[case(22_500, "225.00")]
    #[case(17_550, "175.50")]
    fn displays_two_decimal_places(#[case] minor: u64, #[case] expected: &str) {
        assert_eq!(Rate::from_minor_units(minor).to_string(), expected);
    }

    #[test]
    fn major_units_scale_to_hundredths() {
        assert_eq!(Rate::from_major_units(250).minor_units(), 25_000);
    }

    #[test]
    fn sum_of_empty_sequence_is_zero() {
        let rates: Vec<Rate> = Vec::new();
        assert_eq!(rates.iter().sum::<Rate>(), Rate::ZERO);
    }

    #[test]
    fn sum_saturates_instead_of_overflowing() {
        let total: Rate = [Rate::from_minor_units(u64::MAX), Rate::from_minor_units(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Rate::from_minor_units(u64::MAX));
    }
}
