//! Integration tests for the Severance Engine.
//!
//! This test suite drives the public API end to end:
//! - Statutory tables loaded from YAML
//! - Settlement input decoded from JSON
//! - Full termination settlement for the reference employee
//! - Report serialization
//! - Error cases

use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

use severance_engine::calculation::{
    add_days, income_tax, income_tax_detailed, parse_iso_date, social_security_contribution,
    social_security_contribution_detailed, termination_settlement,
};
use severance_engine::config::{ConfigLoader, RateTables};
use severance_engine::error::EngineError;
use severance_engine::models::{
    AuditItem, Deductions, PaymentInput, SettlementComponent, SettlementInput, SettlementReport,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn load_tables() -> RateTables {
    ConfigLoader::load("./config/statutory-2020.yaml")
        .expect("Failed to load config")
        .into_tables()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn reference_request() -> Value {
    json!({
        "gross_salary": "6000",
        "start_date": "2013-09-23",
        "end_date": "2020-11-04",
        "current_fgts_balance": "39800",
        "withdrawn_fgts": "200",
        "pending_time_off_days": 30
    })
}

fn settle(request: &Value) -> Result<SettlementReport, EngineError> {
    let input = SettlementInput::from_json(&request.to_string())?;
    termination_settlement(&input, &load_tables())
}

fn assert_money(value: &Value, expected: &str) {
    let actual = value.as_str().unwrap();
    assert_eq!(
        decimal(actual),
        decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// SECTION 1: Tax Primitives
// =============================================================================

#[test]
fn test_social_security_two_brackets() {
    let tables = load_tables();
    let detailed = social_security_contribution_detailed(decimal("2000"), &tables);
    assert_eq!(detailed.amount, decimal("164.32"));
    assert_eq!(
        detailed.audit_trail,
        "(1045.00 x 7.5%) + (955.00 x 9.0%) = 164.32"
    );
}

#[test]
fn test_social_security_capped_above_ceiling() {
    let tables = load_tables();
    assert_eq!(
        social_security_contribution(decimal("8000"), &tables),
        decimal("713.09")
    );
}

#[test]
fn test_income_tax_with_deductions() {
    let tables = load_tables();
    let deductions = Deductions {
        dependents: 2,
        alimony: decimal("200"),
        other: decimal("50"),
    };
    assert_eq!(
        income_tax(decimal("3000"), Some(&deductions), &tables),
        decimal("35.01")
    );
}

#[test]
fn test_income_tax_exempt_band() {
    let tables = load_tables();
    let detailed = income_tax_detailed(decimal("1500"), None, &tables);
    assert_eq!(detailed.amount, Decimal::ZERO);
}

#[test]
fn test_add_days_carries_into_next_month() {
    let date = parse_iso_date("2020-01-30").unwrap();
    assert_eq!(add_days(date, 7).unwrap().to_string(), "2020-02-06");
}

// =============================================================================
// SECTION 2: Reference Settlement
// =============================================================================

#[test]
fn test_reference_settlement_totals() {
    let report = settle(&reference_request()).unwrap();

    assert_eq!(report.notice.days, 51);
    assert_eq!(report.total.salary, decimal("25304.86"));
    assert_eq!(report.total.fgts, decimal("57345.60"));
    assert_eq!(report.total.net_value, decimal("82650.46"));
}

#[test]
fn test_reference_settlement_components() {
    let report = settle(&reference_request()).unwrap();

    let nets: Vec<(SettlementComponent, Decimal)> = report
        .components()
        .map(|result| (result.component, result.net_value))
        .collect();
    assert_eq!(
        nets,
        vec![
            (SettlementComponent::RemainderSalary, decimal("740.00")),
            (SettlementComponent::NoticePay, decimal("9486.91")),
            (SettlementComponent::ProratedBonus, decimal("4077.95")),
            (SettlementComponent::IndemnifiedBonus, decimal("1000.00")),
            (SettlementComponent::AccruedPaidTimeOff, decimal("8000.00")),
            (SettlementComponent::ProportionalPaidTimeOff, decimal("2000.00")),
        ]
    );
}

#[test]
fn test_reference_settlement_audit_trail() {
    let report = settle(&reference_request()).unwrap();

    assert_eq!(
        report.salary.remainder.audit_for(AuditItem::GrossValue),
        Some("Salário proporcional para 4 dias")
    );
    assert_eq!(
        report.salary.notice.audit_for(AuditItem::Inss),
        Some("Para salários acima de 6101.06, paga-se o teto de 713.09")
    );
    assert_eq!(
        report.thirteenth_salary.proportional.audit_for(AuditItem::GrossValue),
        Some("13º proporcional para 10 meses")
    );
    assert!(
        report
            .fgts
            .audit_trail
            .iter()
            .any(|line| line == "40.0% de 40464.00")
    );
}

#[test]
fn test_builder_input_matches_json_input() {
    let payment = PaymentInput::new(decimal("6000"), "2013-09-23", "2020-11-04")
        .unwrap()
        .with_pending_time_off_days(30);
    let built = SettlementInput::new(payment, decimal("39800"), decimal("200"));
    let decoded = SettlementInput::from_json(&reference_request().to_string()).unwrap();

    assert_eq!(built, decoded);
}

#[test]
fn test_loaded_tables_match_defaults() {
    let input = SettlementInput::from_json(&reference_request().to_string()).unwrap();
    let from_file = termination_settlement(&input, &load_tables()).unwrap();
    let from_defaults = termination_settlement(&input, &RateTables::default()).unwrap();
    assert_eq!(from_file, from_defaults);
}

// =============================================================================
// SECTION 3: Variations
// =============================================================================

#[test]
fn test_settlement_with_dependents_and_advance() {
    let request = json!({
        "gross_salary": 6000,
        "start_date": "2014-11-06",
        "end_date": "2020-10-12",
        "current_fgts_balance": 10000,
        "first_installment": 2500,
        "deductions": { "dependents": 1 }
    });
    let report = settle(&request).unwrap();

    assert_eq!(report.notice.days, 45);
    assert_eq!(report.notice.projected_end_date.to_string(), "2020-11-26");
    assert_eq!(
        report.salary.remainder.audit_for(AuditItem::IrrfDeductions),
        Some("(1 dependentes x 189.59) + 0.00 pensão + 0.00 outras deduções = 189.59")
    );
    assert_eq!(report.fgts.withdrawn, Decimal::ZERO);
    assert_eq!(report.paid_time_off.accrued.net_value, Decimal::ZERO);
}

#[test]
fn test_same_day_termination() {
    let request = json!({
        "gross_salary": 3000,
        "start_date": "2020-03-10",
        "end_date": "2020-03-10"
    });
    let report = settle(&request).unwrap();

    assert_eq!(report.notice.days, 30);
    // 10 days of salary
    assert_eq!(report.salary.remainder.gross_value, decimal("1000.00"));
    assert_eq!(report.fgts.deposited, Decimal::ZERO);
}

// =============================================================================
// SECTION 4: Serialization
// =============================================================================

#[test]
fn test_report_serializes_to_json() {
    let report = settle(&reference_request()).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["start_date"], "2013-09-23");
    assert_eq!(value["notice"]["days"], 51);
    assert_eq!(value["notice"]["projected_end_date"], "2020-12-25");
    assert_eq!(value["salary"]["remainder"]["component"], "remainder_salary");
    assert_money(&value["salary"]["notice"]["taxes"]["inss"], "713.09");
    assert_money(&value["fgts"]["penalty"], "16185.60");
    assert_money(&value["total"]["net_value"], "82650.46");
}

#[test]
fn test_report_json_round_trip() {
    let report = settle(&reference_request()).unwrap();
    let encoded = serde_json::to_string(&report).unwrap();
    let decoded: SettlementReport = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, report);
}

// =============================================================================
// SECTION 5: Error Cases
// =============================================================================

#[test]
fn test_malformed_json_is_rejected() {
    let result = SettlementInput::from_json("{ not json");
    assert!(matches!(result, Err(EngineError::InputParse { .. })));
}

#[test]
fn test_missing_salary_is_rejected() {
    let request = json!({
        "start_date": "2013-09-23",
        "end_date": "2020-11-04"
    });
    assert!(matches!(settle(&request), Err(EngineError::InputParse { .. })));
}

#[test]
fn test_non_iso_date_is_rejected() {
    let mut request = reference_request();
    request["end_date"] = json!("04/11/2020");
    assert!(matches!(settle(&request), Err(EngineError::InputParse { .. })));
}

#[test]
fn test_end_before_start_is_rejected() {
    let mut request = reference_request();
    request["end_date"] = json!("2012-01-01");
    let err = settle(&request).unwrap_err();
    assert!(matches!(err, EngineError::InvalidArgument { ref field, .. } if field == "end_date"));
}

#[test]
fn test_negative_salary_is_rejected() {
    let mut request = reference_request();
    request["gross_salary"] = json!("-1");
    let err = settle(&request).unwrap_err();
    assert!(
        matches!(err, EngineError::InvalidArgument { ref field, .. } if field == "gross_salary")
    );
}

#[test]
fn test_negative_alimony_is_rejected() {
    let mut request = reference_request();
    request["deductions"] = json!({ "alimony": "-10" });
    assert!(matches!(
        settle(&request),
        Err(EngineError::InvalidArgument { .. })
    ));
}

#[test]
fn test_missing_config_file_is_reported() {
    let result = ConfigLoader::load("./config/does-not-exist.yaml");
    assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
}
