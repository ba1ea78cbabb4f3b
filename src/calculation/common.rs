//! Formulas shared by the partial payment calculators.

use rust_decimal::Decimal;

use crate::config::RateTables;
use crate::models::{
    AuditEntry, AuditItem, Deductions, format_money, format_percent, round_currency,
};

/// Days in a commercial month; monthly salaries are prorated per 30 days.
pub const DAYS_IN_MONTH: u32 = 30;

/// `amount x numerator / denominator`, multiplied first to keep precision.
pub(crate) fn prorate(amount: Decimal, numerator: u32, denominator: u32) -> Decimal {
    amount * Decimal::from(numerator) / Decimal::from(denominator)
}

/// Adds the constitutional one-third bonus owed on paid time off.
pub(crate) fn with_one_third_bonus(amount: Decimal) -> Decimal {
    amount + amount / Decimal::from(3)
}

/// The FGTS deposit over `gross_value` and the audit line describing it.
pub(crate) fn fgts_deposit(gross_value: Decimal, tables: &RateTables) -> (Decimal, AuditEntry) {
    let rate = tables.fgts.deposit_rate;
    let deposit = round_currency(gross_value * rate);
    let entry = AuditEntry::new(
        AuditItem::Fgts,
        format!("{}% sobre {}", format_percent(rate), format_money(gross_value)),
    );
    (deposit, entry)
}

/// Audit lines for an income tax withholding, preceded by the deduction
/// breakdown when any deduction applies.
pub(crate) fn income_tax_entries(
    deductions: &Deductions,
    irrf_trail: String,
    tables: &RateTables,
) -> Vec<AuditEntry> {
    let mut entries = Vec::with_capacity(2);
    if !deductions.is_empty() {
        entries.push(AuditEntry::new(
            AuditItem::IrrfDeductions,
            deductions.describe(tables.income_tax.deduction_per_dependent),
        ));
    }
    entries.push(AuditEntry::new(AuditItem::Irrf, irrf_trail));
    entries
}
