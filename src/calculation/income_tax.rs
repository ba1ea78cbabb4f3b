//! Income tax (IRRF) withholding.
//!
//! Deductions are subtracted from the base first; the adjusted base may go
//! negative, in which case nothing is withheld.

use rust_decimal::Decimal;

use crate::config::RateTables;
use crate::models::Deductions;

use super::progressive::{DetailedTax, progressive_tax};

/// Computes the IRRF withheld from `base` after `deductions`.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::income_tax;
/// use severance_engine::config::RateTables;
/// use severance_engine::models::Deductions;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let deductions = Deductions {
///     dependents: 2,
///     alimony: Decimal::from(200),
///     other: Decimal::from(50),
/// };
/// let tax = income_tax(Decimal::from(3000), Some(&deductions), &RateTables::default());
/// assert_eq!(tax, Decimal::from_str("35.01").unwrap());
/// ```
pub fn income_tax(base: Decimal, deductions: Option<&Deductions>, tables: &RateTables) -> Decimal {
    income_tax_detailed(base, deductions, tables).amount
}

/// Computes the IRRF withheld from `base` after `deductions`, with its audit trail.
pub fn income_tax_detailed(
    base: Decimal,
    deductions: Option<&Deductions>,
    tables: &RateTables,
) -> DetailedTax {
    let table = &tables.income_tax;
    let total_deductions =
        deductions.map_or(Decimal::ZERO, |d| d.total(table.deduction_per_dependent));

    progressive_tax(base - total_deductions, &table.brackets).into()
}
