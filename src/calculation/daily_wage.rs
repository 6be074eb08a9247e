//! Daily wage derivation.
//!
//! Converts an annual salary into a per-working-day wage, the base unit for
//! the reimbursement formula.

use rust_decimal::Decimal;

use crate::models::{AbsenceScenario, AuditStep};

/// The result of deriving the daily wage, including the audit step.
#[derive(Debug, Clone)]
pub struct DailyWageResult {
    /// Average wage per working day per employee.
    pub daily_wage: Decimal,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives the average daily wage from the annual salary.
///
/// `daily_wage = average_annual_salary / working_days_per_year`
///
/// The scenario must have passed [`validate_scenario`](crate::calculation::validate_scenario),
/// which guarantees a non-zero denominator.
///
/// # Examples
///
/// ```
/// use absence_engine::calculation::calculate_daily_wage;
/// use absence_engine::models::AbsenceScenario;
/// use rust_decimal::Decimal;
///
/// let scenario = AbsenceScenario::with_defaults(50, Decimal::from(520_000), Decimal::from(5));
/// let result = calculate_daily_wage(&scenario, 1);
/// assert_eq!(result.daily_wage, Decimal::from(2000));
/// ```
pub fn calculate_daily_wage(scenario: &AbsenceScenario, step_number: u32) -> DailyWageResult {
    let daily_wage = scenario.average_annual_salary / Decimal::from(scenario.working_days_per_year);

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_wage".to_string(),
        rule_name: "Daily Wage".to_string(),
        input: serde_json::json!({
            "average_annual_salary": scenario.average_annual_salary.to_string(),
            "working_days_per_year": scenario.working_days_per_year,
        }),
        output: serde_json::json!({
            "daily_wage": daily_wage.to_string(),
        }),
        reasoning: format!(
            "{} / {} working days = {}",
            scenario.average_annual_salary.normalize(),
            scenario.working_days_per_year,
            daily_wage.normalize()
        ),
    };

    DailyWageResult {
        daily_wage,
        audit_step,
    }
}
