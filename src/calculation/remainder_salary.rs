//! Remainder salary: the days worked in the termination month.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateTables;
use crate::error::EngineResult;
use crate::models::{
    AuditEntry, AuditItem, CalculationResult, ComponentTaxes, PaymentInput, SettlementComponent,
    round_currency,
};

use super::calendar::days_elapsed_in_current_month;
use super::common::{DAYS_IN_MONTH, fgts_deposit, income_tax_entries, prorate};
use super::income_tax::income_tax_detailed;
use super::social_security::social_security_contribution_detailed;

/// Calculates the salary owed for the days worked in the termination month.
///
/// `gross = salary x day_of_month(end_date) / 30`. FGTS and INSS apply over
/// the gross value; IRRF applies over `gross - inss` after deductions.
///
/// # Arguments
///
/// * `input` - Salary, termination date and IRRF deductions
/// * `tables` - The statutory tables supplying the FGTS rate and the INSS and IRRF brackets
///
/// # Returns
///
/// Returns a `CalculationResult` with the gross value, the withholdings and
/// their audit trail, or an error if:
/// - A monetary field is negative or above the accepted maximum
/// - The termination date precedes the start date
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::remainder_salary;
/// use severance_engine::config::RateTables;
/// use severance_engine::models::PaymentInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = PaymentInput::new(Decimal::from(5000), "2014-11-06", "2020-10-12").unwrap();
/// let result = remainder_salary(&input, &RateTables::default()).unwrap();
///
/// assert_eq!(result.gross_value, Decimal::from(2000));
/// assert_eq!(result.net_value, Decimal::from_str("1835.68").unwrap());
/// ```
pub fn remainder_salary(input: &PaymentInput, tables: &RateTables) -> EngineResult<CalculationResult> {
    input.validate()?;

    // Step 1: Prorate the monthly salary over the days worked
    let days = days_elapsed_in_current_month(input.end_date);
    let gross_value = round_currency(prorate(input.gross_salary, days, DAYS_IN_MONTH));

    // Step 2: FGTS and INSS over the gross value
    let (fgts, fgts_entry) = fgts_deposit(gross_value, tables);
    let inss = social_security_contribution_detailed(gross_value, tables);

    // Step 3: IRRF over what remains after INSS and the deductions
    let irrf = income_tax_detailed(gross_value - inss.amount, Some(&input.deductions), tables);
    let net_value = round_currency(gross_value - inss.amount - irrf.amount);

    debug!(
        days,
        gross_value = %gross_value,
        net_value = %net_value,
        "Calculated remainder salary"
    );

    let mut audit_trail = vec![
        AuditEntry::new(
            AuditItem::GrossValue,
            format!("Salário proporcional para {} dias", days),
        ),
        fgts_entry,
        AuditEntry::new(AuditItem::Inss, inss.audit_trail),
    ];
    audit_trail.extend(income_tax_entries(&input.deductions, irrf.audit_trail, tables));

    Ok(CalculationResult {
        component: SettlementComponent::RemainderSalary,
        gross_value,
        first_installment: Decimal::ZERO,
        taxes: ComponentTaxes {
            inss: inss.amount,
            irrf: irrf.amount,
            fgts,
        },
        net_value,
        audit_trail,
    })
}
