//! Progressive bracket evaluation.
//!
//! A base amount is split across the tiers of a [`BracketTable`]; each tier
//! taxes only the slice of the base between the previous tier's upper bound
//! and its own:
//!
//! ```text
//! slice(tier) = max(0, min(base, upper_bound) - floor)
//! ```
//!
//! The evaluator returns one [`TierContribution`] per non-empty slice. The
//! rendered audit trail is produced separately by [`ProgressiveTax::audit_trail`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::BracketTable;
use crate::models::{format_money, format_percent, round_currency};

/// The slice of the base taxed by one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierContribution {
    /// Part of the base falling inside the tier (unrounded).
    pub amount: Decimal,
    /// Rate of the tier.
    pub rate: Decimal,
}

impl TierContribution {
    /// The tax owed on this slice (unrounded).
    pub fn tax(&self) -> Decimal {
        self.amount * self.rate
    }
}

/// The outcome of a progressive evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressiveTax {
    /// Sum of every tier's tax, rounded to cents.
    pub total: Decimal,
    /// Non-empty tier slices in table order.
    pub tiers: Vec<TierContribution>,
}

impl ProgressiveTax {
    /// Renders `"(slice x rate%) + ... = total"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use severance_engine::calculation::progressive_tax;
    /// use severance_engine::config::RateTables;
    /// use rust_decimal::Decimal;
    ///
    /// let tables = RateTables::default();
    /// let tax = progressive_tax(Decimal::from(2000), &tables.social_security.brackets);
    /// assert_eq!(tax.audit_trail(), "(1045.00 x 7.5%) + (955.00 x 9.0%) = 164.32");
    /// ```
    pub fn audit_trail(&self) -> String {
        let terms: Vec<String> = self
            .tiers
            .iter()
            .map(|tier| {
                format!(
                    "({} x {}%)",
                    format_money(tier.amount),
                    format_percent(tier.rate)
                )
            })
            .collect();

        if terms.is_empty() {
            format!("= {}", format_money(self.total))
        } else {
            format!("{} = {}", terms.join(" + "), format_money(self.total))
        }
    }
}

/// A withholding amount together with its rendered audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedTax {
    /// The amount withheld, rounded to cents.
    pub amount: Decimal,
    /// How the amount was obtained.
    pub audit_trail: String,
}

impl From<ProgressiveTax> for DetailedTax {
    fn from(tax: ProgressiveTax) -> Self {
        let audit_trail = tax.audit_trail();
        Self {
            amount: tax.total,
            audit_trail,
        }
    }
}

/// Running state of the fold over the tiers.
struct Accumulator {
    floor: Decimal,
    tax: Decimal,
    tiers: Vec<TierContribution>,
}

/// Evaluates `base` against a progressive table.
///
/// An unbounded tier takes whatever remains of the base. A zero or negative
/// base owes nothing and produces no tiers.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::progressive_tax;
/// use severance_engine::config::RateTables;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tables = RateTables::default();
/// let tax = progressive_tax(Decimal::from(5000), &tables.social_security.brackets);
/// assert_eq!(tax.total, Decimal::from_str("558.94").unwrap());
/// assert_eq!(tax.tiers.len(), 4);
/// ```
pub fn progressive_tax(base: Decimal, table: &BracketTable) -> ProgressiveTax {
    let initial = Accumulator {
        floor: Decimal::ZERO,
        tax: Decimal::ZERO,
        tiers: Vec::new(),
    };

    let Accumulator { tax, tiers, .. } = table.brackets().iter().fold(initial, |acc, bracket| {
        let ceiling = bracket.upper_bound.map_or(base, |bound| base.min(bound));
        let amount = ceiling - acc.floor;
        if amount <= Decimal::ZERO {
            return acc;
        }

        let contribution = TierContribution {
            amount,
            rate: bracket.rate,
        };
        let mut tiers = acc.tiers;
        tiers.push(contribution);

        Accumulator {
            floor: ceiling,
            tax: acc.tax + contribution.tax(),
            tiers,
        }
    });

    ProgressiveTax {
        total: round_currency(tax),
        tiers,
    }
}
