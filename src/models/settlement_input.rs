//! Input records for the partial payment calculators and the settlement.
//!
//! Dates are exchanged as ISO `YYYY-MM-DD` strings and money as decimal
//! numbers or strings. Inputs are validated before any computation starts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::calculation::parse_iso_date;
use crate::error::{EngineError, EngineResult};

use super::Deductions;
use super::money::ensure_valid_amount;

/// Employment data shared by every partial payment calculator.
///
/// # Example
///
/// ```
/// use severance_engine::models::PaymentInput;
/// use rust_decimal::Decimal;
///
/// let input = PaymentInput::new(Decimal::from(6000), "2013-09-23", "2020-11-04")
///     .unwrap()
///     .with_pending_time_off_days(30);
/// assert_eq!(input.end_date.to_string(), "2020-11-04");
/// assert_eq!(input.pending_time_off_days, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInput {
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    /// First day of employment.
    #[serde(deserialize_with = "deserialize_iso_date")]
    pub start_date: NaiveDate,
    /// Last day of employment.
    #[serde(deserialize_with = "deserialize_iso_date")]
    pub end_date: NaiveDate,
    /// Income tax deductions; absent means none.
    #[serde(default)]
    pub deductions: Deductions,
    /// Net amount of the annual bonus already advanced to the employee.
    #[serde(default)]
    pub first_installment: Decimal,
    /// Days of acquired time off not yet taken.
    #[serde(default)]
    pub pending_time_off_days: u32,
}

impl PaymentInput {
    /// Builds an input from ISO date strings, with no deductions, no advance
    /// and no pending time off.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] when either date fails to parse.
    pub fn new(gross_salary: Decimal, start_date: &str, end_date: &str) -> EngineResult<Self> {
        Ok(Self {
            gross_salary,
            start_date: parse_iso_date(start_date)?,
            end_date: parse_iso_date(end_date)?,
            deductions: Deductions::default(),
            first_installment: Decimal::ZERO,
            pending_time_off_days: 0,
        })
    }

    /// Sets the income tax deductions.
    pub fn with_deductions(mut self, deductions: Deductions) -> Self {
        self.deductions = deductions;
        self
    }

    /// Sets the annual bonus advance.
    pub fn with_first_installment(mut self, first_installment: Decimal) -> Self {
        self.first_installment = first_installment;
        self
    }

    /// Sets the number of pending time-off days.
    pub fn with_pending_time_off_days(mut self, days: u32) -> Self {
        self.pending_time_off_days = days;
        self
    }

    /// Rejects negative or oversized amounts and a termination before the
    /// start date.
    pub fn validate(&self) -> EngineResult<()> {
        ensure_valid_amount("gross_salary", self.gross_salary)?;
        ensure_valid_amount("first_installment", self.first_installment)?;
        self.deductions.validate()?;

        if self.end_date < self.start_date {
            return Err(EngineError::InvalidArgument {
                field: "end_date".to_string(),
                message: format!(
                    "{} is before start_date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }
}

/// The complete record a termination settlement is computed from.
///
/// # Example
///
/// ```
/// use severance_engine::models::SettlementInput;
///
/// let input = SettlementInput::from_json(r#"{
///     "gross_salary": 6000,
///     "start_date": "2013-09-23",
///     "end_date": "2020-11-04",
///     "current_fgts_balance": 39800,
///     "withdrawn_fgts": 200,
///     "pending_time_off_days": 30
/// }"#).unwrap();
/// assert_eq!(input.payment.pending_time_off_days, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementInput {
    /// Salary, dates, deductions and advances.
    #[serde(flatten)]
    pub payment: PaymentInput,
    /// Current balance of the employee's FGTS account.
    #[serde(default)]
    pub current_fgts_balance: Decimal,
    /// FGTS already withdrawn during the contract; counts toward the penalty base.
    #[serde(default)]
    pub withdrawn_fgts: Decimal,
}

impl SettlementInput {
    /// Creates a settlement input from its parts.
    pub fn new(payment: PaymentInput, current_fgts_balance: Decimal, withdrawn_fgts: Decimal) -> Self {
        Self {
            payment,
            current_fgts_balance,
            withdrawn_fgts,
        }
    }

    /// Decodes a settlement input from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InputParse`] for malformed JSON, missing fields
    /// or dates that are not ISO `YYYY-MM-DD`.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::InputParse {
            message: e.to_string(),
        })
    }

    /// Validates the payment data and the FGTS amounts.
    ///
    /// Every monetary field must lie in `0..=MAX_MONETARY_AMOUNT`.
    pub fn validate(&self) -> EngineResult<()> {
        self.payment.validate()?;
        ensure_valid_amount("current_fgts_balance", self.current_fgts_balance)?;
        ensure_valid_amount("withdrawn_fgts", self.withdrawn_fgts)
    }
}

fn deserialize_iso_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_iso_date(&value).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_MONETARY_AMOUNT;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_input() -> PaymentInput {
        PaymentInput::new(dec("6000"), "2013-09-23", "2020-11-04").unwrap()
    }

    #[test]
    fn test_new_parses_iso_dates() {
        let input = create_test_input();
        assert_eq!(input.start_date, NaiveDate::from_ymd_opt(2013, 9, 23).unwrap());
        assert_eq!(input.end_date, NaiveDate::from_ymd_opt(2020, 11, 4).unwrap());
        assert_eq!(input.first_installment, Decimal::ZERO);
        assert!(input.deductions.is_empty());
    }

    #[test]
    fn test_new_rejects_malformed_date() {
        let err = PaymentInput::new(dec("6000"), "23/09/2013", "2020-11-04").unwrap_err();
        assert!(matches!(err, EngineError::InvalidDate { ref value, .. } if value == "23/09/2013"));
    }

    #[test]
    fn test_builders_set_optional_fields() {
        let input = create_test_input()
            .with_first_installment(dec("2500"))
            .with_pending_time_off_days(12)
            .with_deductions(Deductions {
                dependents: 1,
                ..Deductions::default()
            });
        assert_eq!(input.first_installment, dec("2500"));
        assert_eq!(input.pending_time_off_days, 12);
        assert_eq!(input.deductions.dependents, 1);
    }

    #[test]
    fn test_validate_accepts_same_day_termination() {
        let input = PaymentInput::new(dec("1000"), "2020-01-10", "2020-01-10").unwrap();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_salary() {
        let input = PaymentInput::new(dec("-1"), "2020-01-10", "2020-02-10").unwrap();
        let err = input.validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument { ref field, .. } if field == "gross_salary"));
    }

    #[test]
    fn test_validate_rejects_salary_above_maximum() {
        let input = PaymentInput::new(
            dec("10000000000000000000000000000"),
            "2013-09-23",
            "2020-11-04",
        )
        .unwrap();
        let err = input.validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument { ref field, .. } if field == "gross_salary"));
    }

    #[test]
    fn test_validate_accepts_salary_at_maximum() {
        let input = PaymentInput::new(MAX_MONETARY_AMOUNT, "2013-09-23", "2020-11-04").unwrap();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_settlement_validate_rejects_oversized_fgts_balance() {
        let input = SettlementInput::from_json(
            r#"{
                "gross_salary": "6000",
                "start_date": "2013-09-23",
                "end_date": "2020-11-04",
                "current_fgts_balance": "10000000000000000000000000000"
            }"#,
        )
        .unwrap();
        let err = input.validate().unwrap_err();
        assert!(
            matches!(err, EngineError::InvalidArgument { ref field, .. } if field == "current_fgts_balance")
        );
    }

    #[test]
    fn test_validate_rejects_end_before_start() {
        let input = PaymentInput::new(dec("1000"), "2020-02-10", "2020-01-10").unwrap();
        let err = input.validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument { ref field, .. } if field == "end_date"));
    }

    #[test]
    fn test_settlement_validate_rejects_negative_fgts() {
        let input = SettlementInput::new(create_test_input(), dec("-5"), Decimal::ZERO);
        let err = input.validate().unwrap_err();
        assert!(
            matches!(err, EngineError::InvalidArgument { ref field, .. } if field == "current_fgts_balance")
        );
    }

    #[test]
    fn test_from_json_reads_flattened_fields() {
        let input = SettlementInput::from_json(
            r#"{
                "gross_salary": "5000.00",
                "start_date": "2014-11-06",
                "end_date": "2020-10-12",
                "first_installment": 2500,
                "deductions": { "dependents": 2, "alimony": 200 },
                "current_fgts_balance": 1000,
                "withdrawn_fgts": 0
            }"#,
        )
        .unwrap();

        assert_eq!(input.payment.gross_salary, dec("5000"));
        assert_eq!(input.payment.first_installment, dec("2500"));
        assert_eq!(input.payment.deductions.dependents, 2);
        assert_eq!(input.payment.deductions.alimony, dec("200"));
        assert_eq!(input.payment.pending_time_off_days, 0);
        assert_eq!(input.current_fgts_balance, dec("1000"));
    }

    #[test]
    fn test_from_json_rejects_invalid_date() {
        let err = SettlementInput::from_json(
            r#"{
                "gross_salary": 5000,
                "start_date": "2014-02-30",
                "end_date": "2020-10-12"
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InputParse { .. }));
    }

    #[test]
    fn test_from_json_rejects_unpadded_date() {
        let err = SettlementInput::from_json(
            r#"{
                "gross_salary": 5000,
                "start_date": "2014-1-6",
                "end_date": "2020-10-12"
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InputParse { ref message } if message.contains("2014-1-6")));
    }
}
