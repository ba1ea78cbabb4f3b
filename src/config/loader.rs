//! Rate table loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! rate tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::RateTables;

/// Loads and provides access to a set of rate tables.
///
/// The file mirrors the structure of [`RateTables`]:
/// ```text
/// effective_date: 2020-03-01
/// social_security:
///   brackets: [{ upper_bound: "1045.00", rate: "0.075" }, ...]
///   contribution_cap: "713.09"
/// income_tax:
///   brackets: [...]
///   deduction_per_dependent: "189.59"
/// fgts: { deposit_rate: "0.08", termination_penalty_rate: "0.40" }
/// notice: { base_days: 30, extra_days_per_year: 3, max_days: 90 }
/// ```
///
/// # Example
///
/// ```no_run
/// use severance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/statutory-2020.yaml").unwrap();
/// println!("Tables effective from {}", loader.tables().effective_date);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: RateTables,
}

impl ConfigLoader {
    /// Loads rate tables from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or a field is missing
    /// - A bracket table is not strictly increasing
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let tables = Self::parse(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        info!(
            path = %path_str,
            effective_date = %tables.effective_date,
            "Loaded rate tables"
        );

        Ok(Self { tables })
    }

    /// Parses rate tables from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let tables = Self::parse(content).map_err(|e| EngineError::ConfigParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { tables })
    }

    fn parse(content: &str) -> Result<RateTables, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Returns the loaded tables.
    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    /// Consumes the loader, returning the tables.
    pub fn into_tables(self) -> RateTables {
        self.tables
    }
}
