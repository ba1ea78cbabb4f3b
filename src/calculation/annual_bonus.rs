//! Annual bonus ("13th salary") owed on termination.
//!
//! The proportional part covers the months worked in the termination year
//! and is taxed like salary. The indemnified part covers the months the
//! notice period projects into and only carries FGTS.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateTables;
use crate::error::EngineResult;
use crate::models::{
    AuditEntry, AuditItem, CalculationResult, ComponentTaxes, PaymentInput, SettlementComponent,
    round_currency,
};

use super::calendar::{MONTHS_IN_YEAR, months_elapsed_in_current_year};
use super::common::{fgts_deposit, income_tax_entries, prorate};
use super::income_tax::income_tax_detailed;
use super::notice_pay::notice_period;
use super::social_security::social_security_contribution_detailed;

fn bonus_description(months: u32) -> String {
    format!("13º proporcional para {} meses", months)
}

/// Calculates the bonus prorated over the months worked in the current year.
///
/// `gross = salary x months_elapsed_in_current_year(end_date) / 12`. FGTS,
/// INSS and IRRF apply; the advance already paid is subtracted from the net.
///
/// # Arguments
///
/// * `input` - Salary, termination date, deductions and the advance already paid
/// * `tables` - The statutory tables supplying the FGTS rate and the INSS and IRRF brackets
///
/// # Returns
///
/// Returns a `CalculationResult` whose net value may be negative when the
/// advance exceeds the bonus due, or an error if the input fails validation.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::prorated_bonus;
/// use severance_engine::config::RateTables;
/// use severance_engine::models::PaymentInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = PaymentInput::new(Decimal::from(6000), "2014-11-06", "2020-10-12")
///     .unwrap()
///     .with_first_installment(Decimal::from(2500));
/// let result = prorated_bonus(&input, &RateTables::default()).unwrap();
/// assert_eq!(result.gross_value, Decimal::from(4500));
/// assert_eq!(result.net_value, Decimal::from_str("1244.70").unwrap());
/// ```
pub fn prorated_bonus(input: &PaymentInput, tables: &RateTables) -> EngineResult<CalculationResult> {
    input.validate()?;

    // Step 1: Prorate the yearly bonus over the months worked
    let months = months_elapsed_in_current_year(input.end_date);
    let gross_value = round_currency(prorate(input.gross_salary, months, MONTHS_IN_YEAR));

    // Step 2: Withholdings, taxed like salary
    let (fgts, fgts_entry) = fgts_deposit(gross_value, tables);
    let inss = social_security_contribution_detailed(gross_value, tables);
    let irrf = income_tax_detailed(gross_value - inss.amount, Some(&input.deductions), tables);

    // Step 3: Subtract the advance
    let first_installment = round_currency(input.first_installment);
    let net_value = round_currency(gross_value - inss.amount - irrf.amount - first_installment);

    debug!(
        months,
        gross_value = %gross_value,
        net_value = %net_value,
        "Calculated prorated bonus"
    );

    let mut audit_trail = vec![
        AuditEntry::new(AuditItem::GrossValue, bonus_description(months)),
        AuditEntry::new(AuditItem::FirstInstallment, "Valor líquido do 13º adiantado"),
        fgts_entry,
        AuditEntry::new(AuditItem::Inss, inss.audit_trail),
    ];
    audit_trail.extend(income_tax_entries(&input.deductions, irrf.audit_trail, tables));

    Ok(CalculationResult {
        component: SettlementComponent::ProratedBonus,
        gross_value,
        first_installment,
        taxes: ComponentTaxes {
            inss: inss.amount,
            irrf: irrf.amount,
            fgts,
        },
        net_value,
        audit_trail,
    })
}

/// Calculates the bonus for the months added by the notice period.
///
/// The month count is the difference of `months_elapsed_in_current_year`
/// between the projected end date and the end date, wrapped into `0..12`
/// when the notice crosses into the next year. Only FGTS applies.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::indemnified_bonus;
/// use severance_engine::config::RateTables;
/// use severance_engine::models::PaymentInput;
/// use rust_decimal::Decimal;
///
/// let input = PaymentInput::new(Decimal::from(6000), "2012-12-12", "2020-11-14").unwrap();
/// let result = indemnified_bonus(&input, &RateTables::default()).unwrap();
/// assert_eq!(result.gross_value, Decimal::from(1000));
/// assert_eq!(result.taxes.fgts, Decimal::from(80));
/// ```
pub fn indemnified_bonus(
    input: &PaymentInput,
    tables: &RateTables,
) -> EngineResult<CalculationResult> {
    input.validate()?;

    // Step 1: Months the notice period adds, wrapped across the year end
    let notice = notice_period(input, tables)?;
    let projected = months_elapsed_in_current_year(notice.projected_end_date);
    let current = months_elapsed_in_current_year(input.end_date);
    let months = (projected + MONTHS_IN_YEAR - current) % MONTHS_IN_YEAR;

    // Step 2: Prorate the bonus; only FGTS applies
    let gross_value = round_currency(prorate(input.gross_salary, months, MONTHS_IN_YEAR));
    let (fgts, fgts_entry) = fgts_deposit(gross_value, tables);

    debug!(
        months,
        projected_end_date = %notice.projected_end_date,
        gross_value = %gross_value,
        "Calculated indemnified bonus"
    );

    Ok(CalculationResult {
        component: SettlementComponent::IndemnifiedBonus,
        gross_value,
        first_installment: Decimal::ZERO,
        taxes: ComponentTaxes {
            inss: Decimal::ZERO,
            irrf: Decimal::ZERO,
            fgts,
        },
        net_value: gross_value,
        audit_trail: vec![
            AuditEntry::new(AuditItem::GrossValue, bonus_description(months)),
            fgts_entry,
            AuditEntry::new(
                AuditItem::Inss,
                "Não há incidência de INSS para décimo terceiro indenizado",
            ),
            AuditEntry::new(AuditItem::Irrf, "Não há IRRF para décimo terceiro indenizado"),
        ],
    })
}
