//! The consolidated termination settlement report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CalculationResult;

/// The notice period granted for the employee's tenure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticePeriod {
    /// Notice days: 30 plus 3 per completed year, capped at 90.
    pub days: u32,
    /// The termination date pushed forward by the notice days.
    pub projected_end_date: NaiveDate,
}

/// Salary owed for the termination month and the notice period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySection {
    /// Days worked in the termination month.
    pub remainder: CalculationResult,
    /// Notice paid in lieu.
    pub notice: CalculationResult,
    /// Sum of both net values.
    pub total: Decimal,
}

/// Annual bonus ("13th salary") owed on termination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusSection {
    /// Bonus for the months worked in the current year.
    pub proportional: CalculationResult,
    /// Bonus for the months added by the notice period.
    pub indemnified: CalculationResult,
    /// Sum of both net values.
    pub total: Decimal,
}

/// Paid time off owed on termination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidTimeOffSection {
    /// Acquired days not taken.
    pub accrued: CalculationResult,
    /// Current acquisition year, projected by the notice period.
    pub proportional: CalculationResult,
    /// Sum of both net values.
    pub total: Decimal,
}

/// FGTS balance, termination penalty and the deposits due on termination.
///
/// Deposits over notice pay and over the indemnified bonus are paid but stay
/// out of the penalty base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FgtsSection {
    /// Current balance plus the amount withdrawn during the contract.
    pub deposited: Decimal,
    /// Deposit over the remainder salary.
    pub over_remainder_salary: Decimal,
    /// Deposit over the proportional bonus.
    pub over_proportional_bonus: Decimal,
    /// Base of the termination penalty.
    pub penalty_base: Decimal,
    /// Termination penalty over the base.
    pub penalty: Decimal,
    /// Balance currently available in the account.
    pub current_balance: Decimal,
    /// Amount withdrawn during the contract, already received.
    pub withdrawn: Decimal,
    /// Deposit over notice pay.
    pub over_notice_pay: Decimal,
    /// Deposit over the indemnified bonus.
    pub over_indemnified_bonus: Decimal,
    /// Amount payable from the fund.
    pub total: Decimal,
    /// Description of each value above.
    pub audit_trail: Vec<String>,
}

/// Grand totals of the settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementTotals {
    /// Sum of every salary, bonus and time-off net value.
    pub salary: Decimal,
    /// FGTS payable.
    pub fgts: Decimal,
    /// `salary + fgts`.
    pub net_value: Decimal,
}

/// The complete termination settlement, built once per input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// First day of employment.
    pub start_date: NaiveDate,
    /// Last day of employment.
    pub end_date: NaiveDate,
    /// Notice period derived from the tenure.
    pub notice: NoticePeriod,
    /// Remainder salary and notice pay.
    pub salary: SalarySection,
    /// Proportional and indemnified annual bonus.
    pub thirteenth_salary: BonusSection,
    /// Accrued and proportional paid time off.
    pub paid_time_off: PaidTimeOffSection,
    /// FGTS settlement.
    pub fgts: FgtsSection,
    /// Grand totals.
    pub total: SettlementTotals,
}

impl SettlementReport {
    /// Iterates over every partial result in report order.
    pub fn components(&self) -> impl Iterator<Item = &CalculationResult> {
        [
            &self.salary.remainder,
            &self.salary.notice,
            &self.thirteenth_salary.proportional,
            &self.thirteenth_salary.indemnified,
            &self.paid_time_off.accrued,
            &self.paid_time_off.proportional,
        ]
        .into_iter()
    }
}
