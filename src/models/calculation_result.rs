//! Calculation result models for the Severance Engine.
//!
//! This module contains the [`CalculationResult`] type produced by every
//! partial payment calculator, together with the structured audit entries
//! that describe how each value was obtained.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies which settlement component a result belongs to.
///
/// # Example
///
/// ```
/// use severance_engine::models::SettlementComponent;
///
/// let component = SettlementComponent::NoticePay;
/// assert_eq!(format!("{:?}", component), "NoticePay");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementComponent {
    /// Salary for the days worked in the termination month.
    RemainderSalary,
    /// Notice period paid in lieu of being worked.
    NoticePay,
    /// Annual bonus prorated over the months worked in the current year.
    ProratedBonus,
    /// Annual bonus for the months projected by the notice period.
    IndemnifiedBonus,
    /// Time off already acquired and not taken.
    AccruedPaidTimeOff,
    /// Time off of the current acquisition year, projected by the notice period.
    ProportionalPaidTimeOff,
}

/// The value an audit entry explains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditItem {
    /// How the gross value was prorated.
    GrossValue,
    /// The advance already paid and subtracted from the net value.
    FirstInstallment,
    /// The FGTS deposit over the gross value.
    Fgts,
    /// The social security contribution.
    Inss,
    /// The deductions applied to the income tax base.
    IrrfDeductions,
    /// The income tax withholding.
    Irrf,
}

/// One human-readable line of a calculation's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// The value this line explains.
    pub item: AuditItem,
    /// The literal description of the formula applied.
    pub description: String,
}

impl AuditEntry {
    /// Creates a new audit entry.
    pub fn new(item: AuditItem, description: impl Into<String>) -> Self {
        Self {
            item,
            description: description.into(),
        }
    }
}

/// Withholdings and deposits attached to one settlement component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTaxes {
    /// Social security contribution withheld from the employee.
    pub inss: Decimal,
    /// Income tax withheld from the employee.
    pub irrf: Decimal,
    /// Employer FGTS deposit; not subtracted from the net value.
    pub fgts: Decimal,
}

/// The result of one partial payment calculation.
///
/// Results are built once from their inputs and never mutated afterwards.
/// All monetary fields carry exactly two fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The component this result was computed for.
    pub component: SettlementComponent,
    /// The prorated amount before withholdings.
    pub gross_value: Decimal,
    /// Advance already paid to the employee and subtracted from the net value.
    pub first_installment: Decimal,
    /// Withholdings and deposits for this component.
    pub taxes: ComponentTaxes,
    /// `gross_value - inss - irrf - first_installment`.
    pub net_value: Decimal,
    /// Ordered description of every value above.
    pub audit_trail: Vec<AuditEntry>,
}

impl CalculationResult {
    /// Returns the description recorded for `item`, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use severance_engine::models::{
    ///     AuditEntry, AuditItem, CalculationResult, ComponentTaxes, SettlementComponent,
    /// };
    /// use rust_decimal::Decimal;
    ///
    /// let result = CalculationResult {
    ///     component: SettlementComponent::AccruedPaidTimeOff,
    ///     gross_value: Decimal::from(8000),
    ///     first_installment: Decimal::ZERO,
    ///     taxes: ComponentTaxes::default(),
    ///     net_value: Decimal::from(8000),
    ///     audit_trail: vec![AuditEntry::new(
    ///         AuditItem::Irrf,
    ///         "Não há IRRF para férias indenizadas",
    ///     )],
    /// };
    /// assert_eq!(
    ///     result.audit_for(AuditItem::Irrf),
    ///     Some("Não há IRRF para férias indenizadas")
    /// );
    /// assert_eq!(result.audit_for(AuditItem::Inss), None);
    /// ```
    pub fn audit_for(&self, item: AuditItem) -> Option<&str> {
        self.audit_trail
            .iter()
            .find(|entry| entry.item == item)
            .map(|entry| entry.description.as_str())
    }
}
