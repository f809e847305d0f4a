//! Arbitrary-precision amount formatting.
//!
//! Explorer APIs hand out coin amounts as base-unit integer strings (wei) that
//! routinely exceed `u64`. [`UnitValue`] keeps them exact: a `BigInt`
//! mantissa plus a decimal scale, with the handful of operations the view
//! composers need (unit shift, rounding, grouping).

use std::fmt;
use std::ops::Mul;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use super::error::ScoutError;
use crate::constants::{LOCALE_MAX_FRACTION_DIGITS, NATIVE_COIN_DECIMALS};

/// Exponents and unit decimals beyond this are treated as a broken data
/// contract.
pub const MAX_EXPONENT: u32 = 1_000;

// ============================================================================
// UnitValue
// ============================================================================

/// An exact decimal number: `mantissa / 10^scale`.
///
/// # Example
///
/// ```ignore
/// let fee = UnitValue::with_unit("21000000000000", 18)?;
/// assert_eq!(fee.to_fixed_format(5), "0.00002");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitValue {
    mantissa: BigInt,
    scale: u32,
}

impl UnitValue {
    /// Parse a decimal string such as `"1500"`, `"-0.25"` or `"2.5e18"`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::InvalidAmount`] if the string is not a decimal
    /// number.
    pub fn parse(raw: &str) -> Result<Self, ScoutError> {
        let invalid = || ScoutError::invalid_amount(raw);
        let text = raw.trim();

        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let (number, exponent) = match body.find(['e', 'E']) {
            Some(idx) => {
                let exponent: i64 = body[idx + 1..].parse().map_err(|_| invalid())?;
                (&body[..idx], exponent)
            }
            None => (body, 0),
        };
        if exponent.unsigned_abs() > u64::from(MAX_EXPONENT) {
            return Err(invalid());
        }

        let (int_part, frac_part) = number.split_once('.').unwrap_or((number, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(invalid());
        }

        let digits = format!("{int_part}{frac_part}");
        let mut mantissa = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;

        let mut scale = frac_part.len() as i64 - exponent;
        if scale < 0 {
            mantissa *= pow10(scale.unsigned_abs() as u32);
            scale = 0;
        }
        if negative {
            mantissa = -mantissa;
        }

        Ok(Self {
            mantissa,
            scale: u32::try_from(scale).map_err(|_| invalid())?,
        })
    }

    /// Parse a base-unit amount and convert it to display units by dividing
    /// by `10^decimals`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::InvalidAmount`] for malformed input or when
    /// `decimals` exceeds [`MAX_EXPONENT`].
    pub fn with_unit(raw: &str, decimals: u32) -> Result<Self, ScoutError> {
        let invalid = || ScoutError::invalid_amount(raw);
        if decimals > MAX_EXPONENT {
            return Err(invalid());
        }
        Self::parse(raw)?.shift_decimals(decimals).ok_or_else(invalid)
    }

    /// Divide by `10^decimals` without losing precision. `None` if the scale
    /// overflows.
    #[must_use]
    pub fn shift_decimals(mut self, decimals: u32) -> Option<Self> {
        self.scale = self.scale.checked_add(decimals)?;
        Some(self)
    }

    /// Returns true if the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Round half away from zero to at most `places` fractional digits.
    #[must_use]
    pub fn dp(&self, places: u32) -> Self {
        if self.scale <= places {
            return self.clone();
        }

        let divisor = pow10(self.scale - places);
        let magnitude = self.mantissa.abs();
        let mut quotient = &magnitude / &divisor;
        let remainder = &magnitude % &divisor;
        if remainder * 2u32 >= divisor {
            quotient += 1u32;
        }
        if self.mantissa.is_negative() {
            quotient = -quotient;
        }

        Self {
            mantissa: quotient,
            scale: places,
        }
    }

    /// Grouped representation without trailing fractional zeros.
    #[must_use]
    pub fn to_format(&self) -> String {
        self.render(None)
    }

    /// Grouped representation with exactly `places` fractional digits.
    #[must_use]
    pub fn to_fixed_format(&self, places: u32) -> String {
        self.dp(places).render(Some(places))
    }

    /// Grouped representation with at most three fractional digits, the way
    /// an en-US number locale prints it.
    #[must_use]
    pub fn to_locale_string(&self) -> String {
        self.dp(LOCALE_MAX_FRACTION_DIGITS).to_format()
    }

    fn render(&self, fixed_places: Option<u32>) -> String {
        let scale = self.scale as usize;
        let mut digits = self.mantissa.magnitude().to_string();
        if digits.len() <= scale {
            digits = format!("{}{digits}", "0".repeat(scale + 1 - digits.len()));
        }

        let (int_digits, frac_digits) = digits.split_at(digits.len() - scale);
        let fraction = match fixed_places {
            Some(places) => format!("{frac_digits:0<width$}", width = places as usize),
            None => frac_digits.trim_end_matches('0').to_string(),
        };

        let sign = if self.mantissa.is_negative() { "-" } else { "" };
        let grouped = group_thousands(int_digits);
        if fraction.is_empty() {
            format!("{sign}{grouped}")
        } else {
            format!("{sign}{grouped}.{fraction}")
        }
    }
}

impl Mul for &UnitValue {
    type Output = UnitValue;

    fn mul(self, rhs: &UnitValue) -> UnitValue {
        UnitValue {
            mantissa: &self.mantissa * &rhs.mantissa,
            scale: self.scale + rhs.scale,
        }
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_format())
    }
}

fn pow10(exponent: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exponent as usize)
}

// ============================================================================
// Number Formatting Helpers
// ============================================================================

/// Insert `,` separators into a run of ASCII digits.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(group_thousands("1000000"), "1,000,000");
/// ```
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a float the way an en-US locale does: grouping, at most three
/// fractional digits.
#[must_use]
pub fn format_locale_f64(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = format!("{:.*}", LOCALE_MAX_FRACTION_DIGITS as usize, value.abs());
    let (int_digits, frac_digits) = rounded.split_once('.').unwrap_or((&rounded, ""));
    let fraction = frac_digits.trim_end_matches('0');
    let is_zero = int_digits.bytes().all(|b| b == b'0') && fraction.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    let grouped = group_thousands(int_digits);
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

// ============================================================================
// ValueFormatter
// ============================================================================

/// Converts raw base-unit amounts into display strings.
///
/// The composers only talk to this trait so the conversion can be swapped
/// for a spy in tests.
pub trait ValueFormatter {
    /// Convert `raw` to display units, fixed to `places` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::InvalidAmount`] for malformed input.
    fn format_fixed(&self, raw: &str, places: u32) -> Result<String, ScoutError>;
}

impl<F: ValueFormatter + ?Sized> ValueFormatter for &F {
    fn format_fixed(&self, raw: &str, places: u32) -> Result<String, ScoutError> {
        (**self).format_fixed(raw, places)
    }
}

/// [`ValueFormatter`] backed by [`UnitValue`] with a fixed decimals count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitFormatter {
    decimals: u32,
}

impl UnitFormatter {
    /// Formatter for the chain's native coin (18 decimals).
    #[must_use]
    pub const fn native() -> Self {
        Self::with_decimals(NATIVE_COIN_DECIMALS)
    }

    /// Formatter for a token with the given decimals.
    #[must_use]
    pub const fn with_decimals(decimals: u32) -> Self {
        Self { decimals }
    }
}

impl Default for UnitFormatter {
    fn default() -> Self {
        Self::native()
    }
}

impl ValueFormatter for UnitFormatter {
    fn format_fixed(&self, raw: &str, places: u32) -> Result<String, ScoutError> {
        Ok(UnitValue::with_unit(raw, self.decimals)?.to_fixed_format(places))
    }
}

// ============================================================================
// Tests
// ============================================================================
