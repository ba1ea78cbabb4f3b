//! Social security (INSS) contribution.
//!
//! Payments up to the table ceiling go through the progressive evaluator;
//! anything above it owes the fixed contribution cap.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::RateTables;
use crate::models::format_money;

use super::progressive::{DetailedTax, progressive_tax};

/// Computes the INSS contribution owed on `payment`.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::social_security_contribution;
/// use severance_engine::config::RateTables;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tables = RateTables::default();
/// assert_eq!(
///     social_security_contribution(Decimal::from(2000), &tables),
///     Decimal::from_str("164.32").unwrap()
/// );
/// assert_eq!(
///     social_security_contribution(Decimal::from(8000), &tables),
///     Decimal::from_str("713.09").unwrap()
/// );
/// ```
pub fn social_security_contribution(payment: Decimal, tables: &RateTables) -> Decimal {
    social_security_contribution_detailed(payment, tables).amount
}

/// Computes the INSS contribution owed on `payment` along with its audit trail.
pub fn social_security_contribution_detailed(payment: Decimal, tables: &RateTables) -> DetailedTax {
    let table = &tables.social_security;

    if let Some(ceiling) = table.brackets.ceiling() {
        if payment > ceiling {
            warn!(
                payment = %payment,
                ceiling = %ceiling,
                "Payment above the INSS ceiling, applying contribution cap"
            );
            return DetailedTax {
                amount: table.contribution_cap,
                audit_trail: format!(
                    "Para salários acima de {}, paga-se o teto de {}",
                    format_money(ceiling),
                    format_money(table.contribution_cap)
                ),
            };
        }
    }

    progressive_tax(payment, &table.brackets).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_contribution_two_tiers() {
        let detailed = social_security_contribution_detailed(dec("2000"), &RateTables::default());
        assert_eq!(detailed.amount, dec("164.32"));
        assert_eq!(
            detailed.audit_trail,
            "(1045.00 x 7.5%) + (955.00 x 9.0%) = 164.32"
        );
    }

    #[test]
    fn test_contribution_above_ceiling_is_capped() {
        let detailed = social_security_contribution_detailed(dec("8000"), &RateTables::default());
        assert_eq!(detailed.amount, dec("713.09"));
        assert_eq!(
            detailed.audit_trail,
            "Para salários acima de 6101.06, paga-se o teto de 713.09"
        );
    }

    #[test]
    fn test_contribution_at_ceiling_uses_brackets() {
        let detailed = social_security_contribution_detailed(dec("6101.06"), &RateTables::default());
        assert_eq!(detailed.amount, dec("713.09"));
        assert!(detailed.audit_trail.starts_with("(1045.00 x 7.5%)"));
    }

    #[test]
    fn test_contribution_on_zero_payment() {
        let tables = RateTables::default();
        assert_eq!(social_security_contribution(Decimal::ZERO, &tables), Decimal::ZERO);
    }

    #[test]
    fn test_contribution_all_four_tiers() {
        let tables = RateTables::default();
        assert_eq!(social_security_contribution(dec("5000"), &tables), dec("558.94"));
        assert_eq!(social_security_contribution(dec("4500"), &tables), dec("488.94"));
    }

    #[test]
    fn test_contribution_first_tier_only() {
        let tables = RateTables::default();
        assert_eq!(social_security_contribution(dec("800"), &tables), dec("60.00"));
    }
}
