//! Income tax deductions declared by the employee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::money::{ensure_valid_amount, format_money};

/// Amounts subtracted from the income tax base before the brackets apply.
///
/// Every field defaults to zero, so an absent deduction set behaves exactly
/// like `Deductions::default()`.
///
/// # Example
///
/// ```
/// use severance_engine::models::Deductions;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let deductions = Deductions {
///     dependents: 2,
///     alimony: Decimal::from(200),
///     other: Decimal::from(50),
/// };
/// let per_dependent = Decimal::from_str("189.59").unwrap();
/// assert_eq!(deductions.total(per_dependent), Decimal::from_str("629.18").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Number of declared dependents.
    #[serde(default)]
    pub dependents: u32,
    /// Court-ordered alimony paid by the employee.
    #[serde(default)]
    pub alimony: Decimal,
    /// Any other legally deductible amount.
    #[serde(default)]
    pub other: Decimal,
}

impl Deductions {
    /// Combines the set into one amount: `dependents x per_dependent + alimony + other`.
    pub fn total(&self, per_dependent: Decimal) -> Decimal {
        Decimal::from(self.dependents) * per_dependent + self.alimony + self.other
    }

    /// Returns true when nothing would be deducted.
    pub fn is_empty(&self) -> bool {
        self.dependents == 0 && self.alimony.is_zero() && self.other.is_zero()
    }

    /// Renders the deduction breakdown for the audit trail.
    pub fn describe(&self, per_dependent: Decimal) -> String {
        format!(
            "({} dependentes x {}) + {} pensão + {} outras deduções = {}",
            self.dependents,
            format_money(per_dependent),
            format_money(self.alimony),
            format_money(self.other),
            format_money(self.total(per_dependent))
        )
    }

    /// Rejects negative or oversized monetary deductions.
    pub fn validate(&self) -> EngineResult<()> {
        ensure_valid_amount("deductions.alimony", self.alimony)?;
        ensure_valid_amount("deductions.other", self.other)
    }
}
