//! Rate table types for settlement calculations.
//!
//! This module contains the strongly-typed structures holding the statutory
//! brackets and rates. They can be deserialized from YAML; the [`Default`]
//! values are the 2020 federal tables.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One tier of a progressive table.
///
/// The rate applies to the part of the base between the previous tier's
/// upper bound and this one. A tier without an upper bound is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    /// Upper limit of the tier; `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<Decimal>,
    /// Fraction of the tier amount owed (`0.075` for 7.5%).
    pub rate: Decimal,
}

impl Bracket {
    /// Creates a tier capped at `upper_bound`.
    pub const fn bounded(upper_bound: Decimal, rate: Decimal) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    /// Creates an open-ended tier.
    pub const fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}

/// An ordered progressive table with strictly increasing upper bounds.
///
/// Only the last tier may be unbounded.
///
/// # Example
///
/// ```
/// use severance_engine::config::{Bracket, BracketTable};
/// use rust_decimal::Decimal;
///
/// let table = BracketTable::new(vec![
///     Bracket::bounded(Decimal::from(1000), Decimal::ZERO),
///     Bracket::unbounded(Decimal::new(1, 1)),
/// ])
/// .unwrap();
/// assert_eq!(table.brackets().len(), 2);
/// assert_eq!(table.ceiling(), None);
///
/// let unordered = BracketTable::new(vec![
///     Bracket::bounded(Decimal::from(1000), Decimal::ZERO),
///     Bracket::bounded(Decimal::from(500), Decimal::ZERO),
/// ]);
/// assert!(unordered.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bracket>", into = "Vec<Bracket>")]
pub struct BracketTable {
    brackets: Vec<Bracket>,
}

impl BracketTable {
    /// Validates and wraps an ordered list of tiers.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRateTable`] when the list is empty, a
    /// rate is negative, upper bounds do not strictly increase, or an
    /// unbounded tier is not the last one.
    pub fn new(brackets: Vec<Bracket>) -> EngineResult<Self> {
        if brackets.is_empty() {
            return Err(EngineError::InvalidRateTable {
                message: "a table needs at least one bracket".to_string(),
            });
        }

        let mut previous = Decimal::ZERO;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO {
                return Err(EngineError::InvalidRateTable {
                    message: format!("bracket {} has a negative rate", index + 1),
                });
            }
            match bracket.upper_bound {
                Some(bound) if bound <= previous => {
                    return Err(EngineError::InvalidRateTable {
                        message: format!(
                            "bracket {} upper bound {} does not exceed {}",
                            index + 1,
                            bound,
                            previous
                        ),
                    });
                }
                Some(bound) => previous = bound,
                None if index + 1 != brackets.len() => {
                    return Err(EngineError::InvalidRateTable {
                        message: format!("bracket {} is unbounded but not last", index + 1),
                    });
                }
                None => {}
            }
        }

        Ok(Self { brackets })
    }

    /// The tiers in ascending order.
    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    /// The highest upper bound, or `None` when the last tier is unbounded.
    pub fn ceiling(&self) -> Option<Decimal> {
        self.brackets.last().and_then(|bracket| bracket.upper_bound)
    }
}

impl TryFrom<Vec<Bracket>> for BracketTable {
    type Error = EngineError;

    fn try_from(brackets: Vec<Bracket>) -> EngineResult<Self> {
        Self::new(brackets)
    }
}

impl From<BracketTable> for Vec<Bracket> {
    fn from(table: BracketTable) -> Self {
        table.brackets
    }
}

/// Social security (INSS) contribution table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityTable {
    /// Progressive tiers; the last upper bound is the contribution ceiling.
    pub brackets: BracketTable,
    /// Fixed contribution owed above the ceiling.
    pub contribution_cap: Decimal,
}

/// Income tax (IRRF) withholding table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxTable {
    /// Progressive tiers; the first is the exempt allowance, the last is unbounded.
    pub brackets: BracketTable,
    /// Amount deducted from the base per declared dependent.
    pub deduction_per_dependent: Decimal,
}

/// FGTS deposit and termination penalty rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FgtsRates {
    /// Monthly deposit over each salary payment.
    pub deposit_rate: Decimal,
    /// Penalty owed by the employer on no-fault termination.
    pub termination_penalty_rate: Decimal,
}

/// Notice period length rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeRules {
    /// Days granted to every employee.
    pub base_days: u32,
    /// Days added per completed year of employment.
    pub extra_days_per_year: u32,
    /// Upper limit of the notice period.
    pub max_days: u32,
}

/// Every statutory constant used by the calculators.
///
/// # Example
///
/// ```
/// use severance_engine::config::RateTables;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tables = RateTables::default();
/// assert_eq!(tables.social_security.contribution_cap, Decimal::from_str("713.09").unwrap());
/// assert_eq!(tables.notice.max_days, 90);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTables {
    /// The date these tables took effect.
    pub effective_date: NaiveDate,
    /// INSS table.
    pub social_security: SocialSecurityTable,
    /// IRRF table.
    pub income_tax: IncomeTaxTable,
    /// FGTS rates.
    pub fgts: FgtsRates,
    /// Notice period rules.
    pub notice: NoticeRules,
}

impl Default for RateTables {
    fn default() -> Self {
        Self {
            effective_date: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap_or_default(),
            social_security: SocialSecurityTable {
                brackets: BracketTable {
                    brackets: vec![
                        Bracket::bounded(Decimal::new(104500, 2), Decimal::new(75, 3)),
                        Bracket::bounded(Decimal::new(208960, 2), Decimal::new(9, 2)),
                        Bracket::bounded(Decimal::new(313440, 2), Decimal::new(12, 2)),
                        Bracket::bounded(Decimal::new(610106, 2), Decimal::new(14, 2)),
                    ],
                },
                contribution_cap: Decimal::new(71309, 2),
            },
            income_tax: IncomeTaxTable {
                brackets: BracketTable {
                    brackets: vec![
                        Bracket::bounded(Decimal::new(190398, 2), Decimal::ZERO),
                        Bracket::bounded(Decimal::new(282665, 2), Decimal::new(75, 3)),
                        Bracket::bounded(Decimal::new(375105, 2), Decimal::new(15, 2)),
                        Bracket::bounded(Decimal::new(466468, 2), Decimal::new(225, 3)),
                        Bracket::unbounded(Decimal::new(275, 3)),
                    ],
                },
                deduction_per_dependent: Decimal::new(18959, 2),
            },
            fgts: FgtsRates {
                deposit_rate: Decimal::new(8, 2),
                termination_penalty_rate: Decimal::new(40, 2),
            },
            notice: NoticeRules {
                base_days: 30,
                extra_days_per_year: 3,
                max_days: 90,
            },
        }
    }
}
