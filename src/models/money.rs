//! Currency rounding and formatting.
//!
//! Every monetary value leaving a calculator passes through [`round_currency`].
//! Intermediate products may carry extra precision; visible values never do.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Number of fractional digits carried by every visible monetary value.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Guard added before flooring so that the residue of a non-terminating
/// division (`4000 / 3 * 3 = 3999.999...`) floors to the intended cent.
pub const ROUNDING_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 10);

/// Largest monetary input accepted by validation (one trillion).
///
/// Keeps every intermediate product of the calculators inside the range of
/// [`Decimal`].
pub const MAX_MONETARY_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Rejects a monetary input that is negative or above [`MAX_MONETARY_AMOUNT`].
pub(crate) fn ensure_valid_amount(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidArgument {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    if value > MAX_MONETARY_AMOUNT {
        return Err(EngineError::InvalidArgument {
            field: field.to_string(),
            message: format!("must not exceed {}, got {}", MAX_MONETARY_AMOUNT, value),
        });
    }
    Ok(())
}

/// Rounds a monetary amount down to 2 decimal places.
///
/// The amount is floored after adding [`ROUNDING_EPSILON`], and the result is
/// rescaled to exactly two fractional digits.
///
/// # Examples
///
/// ```
/// use severance_engine::models::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_currency(Decimal::from_str("558.949").unwrap());
/// assert_eq!(rounded.to_string(), "558.94");
///
/// let whole = round_currency(Decimal::from(800));
/// assert_eq!(whole.to_string(), "800.00");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = (amount + ROUNDING_EPSILON).round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::ToNegativeInfinity,
    );
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// Renders an amount with exactly two decimals, rounding half away from zero.
pub fn format_money(amount: Decimal) -> String {
    let mut shown =
        amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    shown.rescale(CURRENCY_DECIMAL_PLACES);
    shown.to_string()
}

/// Renders a fractional rate as a percentage with one decimal (`0.075` -> `7.5`).
pub fn format_percent(rate: Decimal) -> String {
    let mut percent = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    percent.rescale(1);
    percent.to_string()
}
