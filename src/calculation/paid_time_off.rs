//! Paid time off settled on termination.
//!
//! Both parts are indemnities: they carry the one-third constitutional bonus
//! and are exempt from INSS, IRRF and FGTS.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateTables;
use crate::error::EngineResult;
use crate::models::{
    AuditEntry, AuditItem, CalculationResult, ComponentTaxes, PaymentInput, SettlementComponent,
    round_currency,
};

use super::calendar::{MONTHS_IN_YEAR, completed_months_since_anniversary, last_anniversary};
use super::common::{DAYS_IN_MONTH, prorate, with_one_third_bonus};
use super::notice_pay::notice_period;

fn exempt_entries() -> [AuditEntry; 3] {
    [
        AuditEntry::new(AuditItem::Fgts, "Não há incidência de FGTS para férias indenizadas"),
        AuditEntry::new(AuditItem::Inss, "Não há incidência de INSS para férias indenizadas"),
        AuditEntry::new(AuditItem::Irrf, "Não há IRRF para férias indenizadas"),
    ]
}

fn exempt_result(
    component: SettlementComponent,
    gross_value: Decimal,
    description: String,
) -> CalculationResult {
    let mut audit_trail = vec![AuditEntry::new(AuditItem::GrossValue, description)];
    audit_trail.extend(exempt_entries());

    CalculationResult {
        component,
        gross_value,
        first_installment: Decimal::ZERO,
        taxes: ComponentTaxes::default(),
        net_value: gross_value,
        audit_trail,
    }
}

/// Calculates the pay for acquired time-off days not taken.
///
/// `gross = (salary x pending_days / 30) x 4/3`.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::accrued_paid_time_off;
/// use severance_engine::models::PaymentInput;
/// use rust_decimal::Decimal;
///
/// let input = PaymentInput::new(Decimal::from(6000), "2013-09-23", "2020-11-04")
///     .unwrap()
///     .with_pending_time_off_days(30);
/// let result = accrued_paid_time_off(&input).unwrap();
/// assert_eq!(result.gross_value, Decimal::from(8000));
/// ```
pub fn accrued_paid_time_off(input: &PaymentInput) -> EngineResult<CalculationResult> {
    input.validate()?;

    let days = input.pending_time_off_days;
    let base = prorate(input.gross_salary, days, DAYS_IN_MONTH);
    let gross_value = round_currency(with_one_third_bonus(base));

    debug!(days, gross_value = %gross_value, "Calculated accrued paid time off");

    Ok(exempt_result(
        SettlementComponent::AccruedPaidTimeOff,
        gross_value,
        format!("Férias vencidas com {} dias não utilizados", days),
    ))
}

/// Calculates the time off of the current acquisition year.
///
/// Months are counted from the last employment anniversary up to the
/// termination date projected by the notice period; the monthly salary plus
/// one third is prorated over those months.
///
/// # Arguments
///
/// * `input` - Salary and employment dates
/// * `tables` - The statutory tables supplying the notice rules
///
/// # Returns
///
/// Returns an exempt `CalculationResult` (net equals gross), or an error if
/// the input fails validation.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::proportional_paid_time_off;
/// use severance_engine::config::RateTables;
/// use severance_engine::models::PaymentInput;
/// use rust_decimal::Decimal;
///
/// let input = PaymentInput::new(Decimal::from(6000), "2013-09-23", "2020-11-04").unwrap();
/// let result = proportional_paid_time_off(&input, &RateTables::default()).unwrap();
/// assert_eq!(result.gross_value, Decimal::from(2000));
/// ```
pub fn proportional_paid_time_off(
    input: &PaymentInput,
    tables: &RateTables,
) -> EngineResult<CalculationResult> {
    input.validate()?;

    let notice = notice_period(input, tables)?;
    let months = completed_months_since_anniversary(input.start_date, notice.projected_end_date);
    let anniversary = last_anniversary(input.start_date, notice.projected_end_date);

    let full_year = with_one_third_bonus(input.gross_salary);
    let gross_value = round_currency(prorate(full_year, months, MONTHS_IN_YEAR));

    debug!(
        months,
        projected_end_date = %notice.projected_end_date,
        gross_value = %gross_value,
        "Calculated proportional paid time off"
    );

    Ok(exempt_result(
        SettlementComponent::ProportionalPaidTimeOff,
        gross_value,
        format!(
            "Férias proporcionais do ano aquisitivo vigente, referente ao período de {} até {} (após acréscimo de {} dias do aviso prévio) totalizando {} meses",
            anniversary.format("%d/%m/%Y"),
            notice.projected_end_date.format("%d/%m/%Y"),
            notice.days,
            months
        ),
    ))
}

/// Calculates both paid-time-off parts: `(accrued, proportional)`.
pub fn paid_time_off(
    input: &PaymentInput,
    tables: &RateTables,
) -> EngineResult<(CalculationResult, CalculationResult)> {
    Ok((
        accrued_paid_time_off(input)?,
        proportional_paid_time_off(input, tables)?,
    ))
}
