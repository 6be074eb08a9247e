//! Audit trace models.
//!
//! Every estimation records the formula steps it took so a reviewer can see
//! which number came from where. Warnings flag results that were adjusted,
//! such as a capped reimbursement.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording one formula application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the calculation.
    pub reasoning: String,
}

/// A warning generated during estimation.
///
/// Warnings indicate adjusted results that don't prevent estimation but may
/// require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g. "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for an estimation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of formula steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during estimation.
    pub warnings: Vec<AuditWarning>,
    /// The total estimation duration in microseconds.
    pub duration_us: u64,
}
