//! Configuration types for policy defaults.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML policy files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the policy rule set.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the rule set.
    pub name: String,
    /// The jurisdiction the rules apply to (e.g. "NO").
    pub jurisdiction: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// URL to the official rule documentation.
    pub source_url: String,
}

/// Default values applied when a request omits a policy field.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyDefaults {
    /// Days the employer bears the cost before reimbursement applies.
    pub employer_period_days: u32,
    /// Working days per year.
    pub working_days_per_year: u32,
    /// Employer-side payroll surcharge rate.
    pub social_surcharge_rate: Decimal,
    /// Indirect cost rate relative to direct wage cost.
    pub indirect_cost_rate: Decimal,
    /// Share of long-term cost refunded by public insurance.
    pub reimbursement_share: Decimal,
}

/// A complete policy configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Metadata about the rule set.
    pub policy: PolicyMetadata,
    /// The default values.
    pub defaults: PolicyDefaults,
}
