//! Calculation logic for the absence cost engine.
//!
//! This module contains all the calculation functions for estimating absence
//! cost, including daily wage derivation, category-adjusted absence rates,
//! direct wage cost, the payroll surcharge, indirect cost, substitute and
//! overtime staffing cost, public insurance reimbursement, savings
//! comparison against a target absence rate, and the month-by-month trend.

mod daily_wage;
mod direct_wage;
mod effective_absence;
mod estimate;
mod extra_staffing;
mod indirect_cost;
mod reimbursement;
mod social_surcharge;
mod trend;
mod validate;

pub use daily_wage::{DailyWageResult, calculate_daily_wage};
pub use direct_wage::{DirectWageResult, calculate_direct_wage_cost};
pub use effective_absence::{EffectiveAbsenceResult, calculate_effective_absence};
pub use estimate::{
    TracedBreakdown, TracedSavings, compute, compute_savings, compute_savings_traced,
    compute_traced,
};
pub use extra_staffing::{ExtraCostKind, ExtraStaffingResult, calculate_extra_staffing_cost};
pub use indirect_cost::{IndirectCostResult, calculate_indirect_cost};
pub use reimbursement::{ReimbursementResult, calculate_reimbursement};
pub use social_surcharge::{SocialSurchargeResult, calculate_social_surcharge};
pub use trend::compute_monthly_trend;
pub use validate::validate_scenario;
