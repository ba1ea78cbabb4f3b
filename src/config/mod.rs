//! Statutory rate tables for the Severance Engine.
//!
//! This module holds the brackets and rates the calculators apply, with the
//! 2020 federal values as [`RateTables::default`] and a loader for the same
//! structure stored as YAML.
//!
//! # Example
//!
//! ```no_run
//! use severance_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/statutory-2020.yaml").unwrap();
//! println!("INSS cap: {}", loader.tables().social_security.contribution_cap);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    Bracket, BracketTable, FgtsRates, IncomeTaxTable, NoticeRules, RateTables, SocialSecurityTable,
};
