//! Stability-fee rendering.
//!
//! Chains with a stability mechanism charge fees in a token instead of the
//! native coin. The fee is shown as a token amount, optionally with its USD
//! value.

use std::fmt;

use serde::Serialize;

use crate::constants::{NATIVE_COIN_DECIMALS, USD_PLACES};
use crate::domain::amount::MAX_EXPONENT;
use crate::domain::{ScoutError, StabilityFee, UnitValue};

/// Display payload of a stability fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StabilityFeeView {
    /// Token amount, rounded to the requested accuracy.
    pub amount: String,
    /// Token symbol (or name). Omitted when the amount is zero.
    pub token: Option<String>,
    /// USD value, when a rate is known and USD is not hidden.
    pub usd: Option<String>,
}

impl fmt::Display for StabilityFeeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.amount)?;
        if let Some(token) = &self.token {
            write!(f, " {token}")?;
        }
        if let Some(usd) = &self.usd {
            write!(f, " (${usd})")?;
        }
        Ok(())
    }
}

/// Render a stability fee with `accuracy` fractional digits.
///
/// # Errors
///
/// Returns [`ScoutError::InvalidAmount`] if the fee, token decimals or
/// exchange rate are not decimal numbers, or the decimals are out of range.
pub fn render_stability_fee(
    fee: &StabilityFee,
    accuracy: u32,
    hide_usd: bool,
) -> Result<StabilityFeeView, ScoutError> {
    let decimals = match fee.token.decimals.as_deref() {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&decimals| decimals <= MAX_EXPONENT)
            .ok_or_else(|| ScoutError::invalid_amount(raw))?,
        None => NATIVE_COIN_DECIMALS,
    };

    let value = UnitValue::with_unit(&fee.total_fee, decimals)?;
    let amount = value.dp(accuracy).to_format();

    let token = if amount == "0" {
        None
    } else {
        fee.token.symbol.clone().or_else(|| fee.token.name.clone())
    };

    let usd = match fee.token.exchange_rate.as_deref() {
        Some(rate) if !hide_usd => {
            let rate = UnitValue::parse(rate)?;
            Some((&value * &rate).dp(USD_PLACES).to_format())
        }
        _ => None,
    };

    Ok(StabilityFeeView { amount, token, usd })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TransactionMother;
    use rstest::rstest;

    #[test]
    fn test_render_with_usd() {
        let fee = TransactionMother::stability_fee("1234567000000000000", Some("18"), Some("2"));
        let view = render_stability_fee(&fee, 5, false).unwrap();
        assert_eq!(view.amount, "1.23457");
        assert_eq!(view.token.as_deref(), Some("USDC"));
        assert_eq!(view.usd.as_deref(), Some("2.47"));
        insta::assert_snapshot!(view.to_string(), @"1.23457 USDC ($2.47)");
    }

    #[test]
    fn test_hide_usd() {
        let fee = TransactionMother::stability_fee("1000000", Some("6"), Some("1.5"));
        let view = render_stability_fee(&fee, 5, true).unwrap();
        assert_eq!(view.to_string(), "1 USDC");
        assert!(view.usd.is_none());
    }

    #[test]
    fn test_zero_amount_drops_token() {
        let fee = TransactionMother::stability_fee("1", Some("18"), None);
        let view = render_stability_fee(&fee, 5, true).unwrap();
        assert_eq!(view.amount, "0");
        assert!(view.token.is_none());
    }

    #[test]
    fn test_missing_decimals_default_to_native() {
        let fee = TransactionMother::stability_fee("500000000000000000", None, None);
        let view = render_stability_fee(&fee, 5, true).unwrap();
        assert_eq!(view.amount, "0.5");
    }

    #[test]
    fn test_falls_back_to_token_name() {
        let mut fee = TransactionMother::stability_fee("2000000000000000000", None, None);
        fee.token.symbol = None;
        let view = render_stability_fee(&fee, 5, true).unwrap();
        assert_eq!(view.token.as_deref(), Some("USD Coin"));
    }

    #[test]
    fn test_malformed_decimals_propagate() {
        let fee = TransactionMother::stability_fee("1", Some("eighteen"), None);
        assert!(render_stability_fee(&fee, 5, true).is_err());
    }

    #[rstest]
    #[case::above_exponent_cap("1001")]
    #[case::huge("10000000")]
    #[case::u32_max("4294967295")]
    fn test_out_of_range_decimals_are_invalid(#[case] decimals: &str) {
        let fee = TransactionMother::stability_fee("1.5", Some(decimals), None);
        match render_stability_fee(&fee, 5, true) {
            Err(ScoutError::InvalidAmount { input }) => assert_eq!(input, decimals),
            other => panic!("Expected InvalidAmount, got {other:?}"),
        }
    }
}
