//! Calculation logic for the Severance Engine.
//!
//! This module contains the calendar arithmetic, the progressive bracket
//! evaluator behind INSS and IRRF, one calculator per settlement component
//! (remainder salary, notice pay, prorated and indemnified annual bonus,
//! accrued and proportional paid time off) and the aggregator that turns
//! them into a full termination settlement.

mod annual_bonus;
mod calendar;
mod common;
mod income_tax;
mod notice_pay;
mod paid_time_off;
mod progressive;
mod remainder_salary;
mod settlement;
mod social_security;

pub use annual_bonus::{indemnified_bonus, prorated_bonus};
pub use calendar::{
    MONTH_PROMOTION_DAYS, MONTHS_IN_YEAR, add_days, completed_months,
    completed_months_since_anniversary, completed_years, days_elapsed_in_current_month,
    last_anniversary, months_elapsed_in_current_year, parse_iso_date,
};
pub use common::DAYS_IN_MONTH;
pub use income_tax::{income_tax, income_tax_detailed};
pub use notice_pay::{notice_pay, notice_period};
pub use paid_time_off::{accrued_paid_time_off, paid_time_off, proportional_paid_time_off};
pub use progressive::{DetailedTax, ProgressiveTax, TierContribution, progressive_tax};
pub use remainder_salary::remainder_salary;
pub use settlement::termination_settlement;
pub use social_security::{social_security_contribution, social_security_contribution_detailed};
