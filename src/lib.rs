//! Severance Engine for Brazilian employment terminations
//!
//! This crate computes the amounts owed when an employment contract ends:
//! remainder salary, notice pay, the annual bonus ("13th salary"), paid time
//! off and the FGTS balance with its termination penalty. INSS and IRRF are
//! withheld through progressive bracket tables loaded from configuration, and
//! every amount carries a human-readable audit trail.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
