//! Core data models for the absence cost engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod breakdown;
mod result;
mod scenario;
mod trend;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use breakdown::{CostBreakdown, CostCategory, ExportRow, Savings};
pub use result::{EstimateResult, SavingsResult, TrendResult};
pub use scenario::{
    AbsenceCategory, AbsenceScenario, DEFAULT_EMPLOYER_PERIOD_DAYS, DEFAULT_WORKING_DAYS_PER_YEAR,
    ExtraCostScaling, default_indirect_cost_rate, default_reimbursement_share,
    default_social_surcharge_rate,
};
pub use trend::{Month, MonthlyCost, MonthlyTrend};
