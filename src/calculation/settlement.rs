//! Termination settlement aggregation.
//!
//! Runs every partial calculator over one input record and consolidates the
//! results, the FGTS balance and its termination penalty into a
//! [`SettlementReport`].
//!
//! Every subtotal is rounded to cents before it feeds the next sum.

use rust_decimal::Decimal;
use tracing::info;

use crate::config::RateTables;
use crate::error::EngineResult;
use crate::models::{
    BonusSection, CalculationResult, FgtsSection, PaidTimeOffSection, SalarySection,
    SettlementInput, SettlementReport, SettlementTotals, format_money, format_percent,
    round_currency,
};

use super::annual_bonus::{indemnified_bonus, prorated_bonus};
use super::notice_pay::{notice_period, notice_pay};
use super::paid_time_off::paid_time_off;
use super::remainder_salary::remainder_salary;

/// Rounded sum of the net values of `results`.
fn net_total(results: &[&CalculationResult]) -> Decimal {
    round_currency(results.iter().map(|result| result.net_value).sum())
}

/// Computes the full termination settlement for one input record.
///
/// The input is validated first; the first invalid field aborts the whole
/// computation.
///
/// FGTS is settled as:
/// - `deposited = current_balance + withdrawn`
/// - `penalty_base = deposited + remainder_fgts + proportional_bonus_fgts`
/// - `penalty = penalty_rate x penalty_base`
/// - `total = current_balance + penalty + remainder_fgts + notice_fgts
///   + proportional_bonus_fgts + indemnified_bonus_fgts`
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::termination_settlement;
/// use severance_engine::config::RateTables;
/// use severance_engine::models::{PaymentInput, SettlementInput};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let payment = PaymentInput::new(Decimal::from(6000), "2013-09-23", "2020-11-04")
///     .unwrap()
///     .with_pending_time_off_days(30);
/// let input = SettlementInput::new(payment, Decimal::from(39800), Decimal::from(200));
///
/// let report = termination_settlement(&input, &RateTables::default()).unwrap();
/// assert_eq!(report.total.salary, Decimal::from_str("25304.86").unwrap());
/// assert_eq!(report.total.fgts, Decimal::from_str("57345.60").unwrap());
/// assert_eq!(report.total.net_value, Decimal::from_str("82650.46").unwrap());
/// ```
pub fn termination_settlement(
    input: &SettlementInput,
    tables: &RateTables,
) -> EngineResult<SettlementReport> {
    input.validate()?;
    let payment = &input.payment;

    let notice = notice_period(payment, tables)?;
    let remainder = remainder_salary(payment, tables)?;
    let notice_result = notice_pay(payment, tables)?;
    let proportional_bonus = prorated_bonus(payment, tables)?;
    let indemnified = indemnified_bonus(payment, tables)?;
    let (accrued_time_off, proportional_time_off) = paid_time_off(payment, tables)?;

    let salary = SalarySection {
        total: net_total(&[&remainder, &notice_result]),
        remainder,
        notice: notice_result,
    };
    let thirteenth_salary = BonusSection {
        total: net_total(&[&proportional_bonus, &indemnified]),
        proportional: proportional_bonus,
        indemnified,
    };
    let paid_time_off = PaidTimeOffSection {
        total: net_total(&[&accrued_time_off, &proportional_time_off]),
        accrued: accrued_time_off,
        proportional: proportional_time_off,
    };

    let fgts = settle_fgts(input, &salary, &thirteenth_salary, tables);

    let salary_total =
        round_currency(salary.total + thirteenth_salary.total + paid_time_off.total);
    let total = SettlementTotals {
        salary: salary_total,
        fgts: fgts.total,
        net_value: round_currency(salary_total + fgts.total),
    };

    info!(
        start_date = %payment.start_date,
        end_date = %payment.end_date,
        notice_days = notice.days,
        salary_total = %total.salary,
        fgts_total = %total.fgts,
        net_value = %total.net_value,
        "Computed termination settlement"
    );

    Ok(SettlementReport {
        start_date: payment.start_date,
        end_date: payment.end_date,
        notice,
        salary,
        thirteenth_salary,
        paid_time_off,
        fgts,
        total,
    })
}

fn settle_fgts(
    input: &SettlementInput,
    salary: &SalarySection,
    bonus: &BonusSection,
    tables: &RateTables,
) -> FgtsSection {
    let penalty_rate = tables.fgts.termination_penalty_rate;

    let over_remainder_salary = salary.remainder.taxes.fgts;
    let over_notice_pay = salary.notice.taxes.fgts;
    let over_proportional_bonus = bonus.proportional.taxes.fgts;
    let over_indemnified_bonus = bonus.indemnified.taxes.fgts;

    let deposited = round_currency(input.current_fgts_balance + input.withdrawn_fgts);
    let penalty_base = round_currency(deposited + over_remainder_salary + over_proportional_bonus);
    let penalty = round_currency(penalty_base * penalty_rate);
    let total = round_currency(
        input.current_fgts_balance
            + penalty
            + over_remainder_salary
            + over_notice_pay
            + over_proportional_bonus
            + over_indemnified_bonus,
    );

    let indemnity_note = "(verba indenizatória, não entra no cálculo da multa)";
    let audit_trail = vec![
        format!(
            "Saldo atual + valor sacado: {} + {} = {}",
            format_money(input.current_fgts_balance),
            format_money(input.withdrawn_fgts),
            format_money(deposited)
        ),
        format!(
            "Base da multa: {} + {} sobre saldo de salário + {} sobre 13º proporcional = {}",
            format_money(deposited),
            format_money(over_remainder_salary),
            format_money(over_proportional_bonus),
            format_money(penalty_base)
        ),
        format!(
            "{}% de {}",
            format_percent(penalty_rate),
            format_money(penalty_base)
        ),
        format!(
            "{} sobre aviso prévio {}",
            format_money(over_notice_pay),
            indemnity_note
        ),
        format!(
            "{} sobre 13º indenizado {}",
            format_money(over_indemnified_bonus),
            indemnity_note
        ),
        format!(
            "Valor já sacado: {} (não compõe o total a receber)",
            format_money(input.withdrawn_fgts)
        ),
    ];

    FgtsSection {
        deposited,
        over_remainder_salary,
        over_proportional_bonus,
        penalty_base,
        penalty,
        current_balance: round_currency(input.current_fgts_balance),
        withdrawn: round_currency(input.withdrawn_fgts),
        over_notice_pay,
        over_indemnified_bonus,
        total,
        audit_trail,
    }
}
