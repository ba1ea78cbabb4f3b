//! Core data models for the Severance Engine.
//!
//! This module contains the inputs, results and report types shared by the
//! calculators, plus the currency rounding every monetary value goes through.

mod calculation_result;
mod deductions;
mod money;
mod settlement_input;
mod settlement_report;

pub use calculation_result::{
    AuditEntry, AuditItem, CalculationResult, ComponentTaxes, SettlementComponent,
};
pub use deductions::Deductions;
pub use money::{
    CURRENCY_DECIMAL_PLACES, MAX_MONETARY_AMOUNT, ROUNDING_EPSILON, format_money, format_percent,
    round_currency,
};
pub use settlement_input::{PaymentInput, SettlementInput};
pub use settlement_report::{
    BonusSection, FgtsSection, NoticePeriod, PaidTimeOffSection, SalarySection, SettlementReport,
    SettlementTotals,
};
