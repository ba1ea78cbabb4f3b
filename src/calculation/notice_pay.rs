//! Notice period length and notice pay.
//!
//! Notice paid in lieu is an indemnity: it carries FGTS and INSS but no
//! income tax.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateTables;
use crate::error::EngineResult;
use crate::models::{
    AuditEntry, AuditItem, CalculationResult, ComponentTaxes, NoticePeriod, PaymentInput,
    SettlementComponent, round_currency,
};

use super::calendar::{add_days, completed_years};
use super::common::{DAYS_IN_MONTH, fgts_deposit, prorate};
use super::social_security::social_security_contribution_detailed;

/// Determines the notice period for the tenure between the input dates.
///
/// `days = min(base_days + extra_days_per_year x completed_years, max_days)`,
/// and the projected end date is the termination date plus those days.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::notice_period;
/// use severance_engine::config::RateTables;
/// use severance_engine::models::PaymentInput;
/// use rust_decimal::Decimal;
///
/// let input = PaymentInput::new(Decimal::from(6000), "2013-09-23", "2020-11-04").unwrap();
/// let notice = notice_period(&input, &RateTables::default()).unwrap();
/// assert_eq!(notice.days, 51);
/// assert_eq!(notice.projected_end_date.to_string(), "2020-12-25");
/// ```
pub fn notice_period(input: &PaymentInput, tables: &RateTables) -> EngineResult<NoticePeriod> {
    let rules = &tables.notice;
    let years = completed_years(input.start_date, input.end_date);
    let days = years
        .saturating_mul(rules.extra_days_per_year)
        .saturating_add(rules.base_days)
        .min(rules.max_days);

    Ok(NoticePeriod {
        days,
        projected_end_date: add_days(input.end_date, days)?,
    })
}

/// Calculates the pay owed for the notice period.
///
/// `gross = salary x notice_days / 30`; FGTS and INSS apply, IRRF does not.
///
/// # Arguments
///
/// * `input` - Salary and employment dates; deductions are ignored
/// * `tables` - The statutory tables supplying the notice rules, the FGTS rate and the INSS brackets
///
/// # Returns
///
/// Returns a `CalculationResult` whose net value is the gross value minus
/// INSS, or an error if the input fails validation or the projected end
/// date leaves the supported calendar range.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::notice_pay;
/// use severance_engine::config::RateTables;
/// use severance_engine::models::PaymentInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = PaymentInput::new(Decimal::from(5000), "2014-11-06", "2020-10-12").unwrap();
/// let result = notice_pay(&input, &RateTables::default()).unwrap();
/// assert_eq!(result.gross_value, Decimal::from(7500));
/// assert_eq!(result.net_value, Decimal::from_str("6786.91").unwrap());
/// ```
pub fn notice_pay(input: &PaymentInput, tables: &RateTables) -> EngineResult<CalculationResult> {
    input.validate()?;

    let notice = notice_period(input, tables)?;
    let gross_value = round_currency(prorate(input.gross_salary, notice.days, DAYS_IN_MONTH));

    let (fgts, fgts_entry) = fgts_deposit(gross_value, tables);
    let inss = social_security_contribution_detailed(gross_value, tables);
    let net_value = round_currency(gross_value - inss.amount);

    debug!(
        notice_days = notice.days,
        gross_value = %gross_value,
        net_value = %net_value,
        "Calculated notice pay"
    );

    Ok(CalculationResult {
        component: SettlementComponent::NoticePay,
        gross_value,
        first_installment: Decimal::ZERO,
        taxes: ComponentTaxes {
            inss: inss.amount,
            irrf: Decimal::ZERO,
            fgts,
        },
        net_value,
        audit_trail: vec![
            AuditEntry::new(
                AuditItem::GrossValue,
                format!("Salário proporcional para {} dias", notice.days),
            ),
            fgts_entry,
            AuditEntry::new(AuditItem::Inss, inss.audit_trail),
            AuditEntry::new(AuditItem::Irrf, "Não há IRRF para aviso prévio"),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Deductions;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_notice_period_grows_three_days_per_year() {
        let tables = RateTables::default();
        let cases = [
            ("2020-01-10", "2020-11-04", 30),
            ("2019-11-04", "2020-11-04", 33),
            ("2014-11-06", "2020-10-12", 45),
            ("2013-09-23", "2020-11-04", 51),
        ];
        for (start, end, expected) in cases {
            let input = PaymentInput::new(dec("1000"), start, end).unwrap();
            assert_eq!(
                notice_period(&input, &tables).unwrap().days,
                expected,
                "{start} to {end}"
            );
        }
    }

    #[test]
    fn test_notice_period_is_capped_at_ninety_days() {
        let input = PaymentInput::new(dec("1000"), "1990-01-01", "2020-11-04").unwrap();
        let notice = notice_period(&input, &RateTables::default()).unwrap();
        assert_eq!(notice.days, 90);
        assert_eq!(notice.projected_end_date.to_string(), "2021-02-02");
    }

    #[test]
    fn test_notice_pay_above_inss_ceiling() {
        let input = PaymentInput::new(dec("5000"), "2014-11-06", "2020-10-12").unwrap();
        let result = notice_pay(&input, &RateTables::default()).unwrap();

        assert_eq!(result.component, SettlementComponent::NoticePay);
        assert_eq!(result.gross_value, dec("7500.00"));
        assert_eq!(result.taxes.fgts, dec("600.00"));
        assert_eq!(result.taxes.inss, dec("713.09"));
        assert_eq!(result.taxes.irrf, Decimal::ZERO);
        assert_eq!(result.net_value, dec("6786.91"));
        assert_eq!(
            result.audit_for(AuditItem::GrossValue),
            Some("Salário proporcional para 45 dias")
        );
        assert_eq!(result.audit_for(AuditItem::Fgts), Some("8.0% sobre 7500.00"));
        assert_eq!(
            result.audit_for(AuditItem::Inss),
            Some("Para salários acima de 6101.06, paga-se o teto de 713.09")
        );
        assert_eq!(
            result.audit_for(AuditItem::Irrf),
            Some("Não há IRRF para aviso prévio")
        );
    }

    #[test]
    fn test_notice_pay_ignores_deductions() {
        let input = PaymentInput::new(dec("6000"), "2013-09-23", "2020-11-04")
            .unwrap()
            .with_deductions(Deductions {
                dependents: 3,
                ..Deductions::default()
            });
        let result = notice_pay(&input, &RateTables::default()).unwrap();

        assert_eq!(result.gross_value, dec("10200.00"));
        assert_eq!(result.taxes.fgts, dec("816.00"));
        assert_eq!(result.net_value, dec("9486.91"));
        assert_eq!(result.audit_for(AuditItem::IrrfDeductions), None);
    }
}
