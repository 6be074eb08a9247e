//! Direct wage cost calculation.
//!
//! The wage the employer pays for absent time during the employer period,
//! for the whole organization. Every other cost category scales from this
//! line or sits beside it; none of them feed back into it.

use rust_decimal::Decimal;

use crate::models::{AbsenceScenario, AuditStep};

/// The result of the direct wage cost calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct DirectWageResult {
    /// Wage paid for absent time during the employer period.
    pub direct_wage_cost: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the direct wage cost for the employer period.
///
/// `direct_wage_cost = average_annual_salary * (effective_absence_percent / 100)
///   * (employer_period_days / working_days_per_year) * employee_count`
///
/// # Examples
///
/// ```
/// use absence_engine::calculation::calculate_direct_wage_cost;
/// use absence_engine::models::AbsenceScenario;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let scenario = AbsenceScenario::with_defaults(50, Decimal::from(520_000), Decimal::from(5));
/// let result = calculate_direct_wage_cost(&scenario, Decimal::from(5), 1);
/// assert_eq!(result.direct_wage_cost, Decimal::from_str("80000").unwrap());
/// ```
pub fn calculate_direct_wage_cost(
    scenario: &AbsenceScenario,
    effective_absence_percent: Decimal,
    step_number: u32,
) -> DirectWageResult {
    let absence_fraction = effective_absence_percent / Decimal::ONE_HUNDRED;
    // Divide by the working year last so evenly divisible inputs stay exact.
    let direct_wage_cost = scenario.average_annual_salary
        * absence_fraction
        * Decimal::from(scenario.employer_period_days)
        * Decimal::from(scenario.employee_count)
        / Decimal::from(scenario.working_days_per_year);

    let audit_step = AuditStep {
        step_number,
        rule_id: "direct_wage_cost".to_string(),
        rule_name: "Direct Wage Cost".to_string(),
        input: serde_json::json!({
            "average_annual_salary": scenario.average_annual_salary.to_string(),
            "effective_absence_percent": effective_absence_percent.to_string(),
            "employer_period_days": scenario.employer_period_days,
            "working_days_per_year": scenario.working_days_per_year,
            "employee_count": scenario.employee_count,
        }),
        output: serde_json::json!({
            "direct_wage_cost": direct_wage_cost.to_string(),
        }),
        reasoning: format!(
            "{} x {}% x ({}/{}) x {} employees = {}",
            scenario.average_annual_salary.normalize(),
            effective_absence_percent.normalize(),
            scenario.employer_period_days,
            scenario.working_days_per_year,
            scenario.employee_count,
            direct_wage_cost.normalize()
        ),
    };

    DirectWageResult {
        direct_wage_cost,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_direct_wage_cost_reference_scenario() {
        // 600000 * 0.05 * (16/260) * 50
        let scenario = AbsenceScenario::with_defaults(50, dec("600000"), dec("5.0"));
        let result = calculate_direct_wage_cost(&scenario, dec("5.0"), 1);

        assert_eq!(result.direct_wage_cost.round_dp(2), dec("92307.69"));
    }

    #[test]
    fn test_direct_wage_cost_exact_when_divisible() {
        // 520000 * 0.05 * (16/260) * 50 = 80000 exactly
        let scenario = AbsenceScenario::with_defaults(50, dec("520000"), dec("5.0"));
        let result = calculate_direct_wage_cost(&scenario, dec("5.0"), 1);

        assert_eq!(result.direct_wage_cost.normalize(), dec("80000"));
    }

    #[test]
    fn test_zero_absence_gives_zero_cost() {
        let scenario = AbsenceScenario::with_defaults(50, dec("600000"), dec("0"));
        let result = calculate_direct_wage_cost(&scenario, Decimal::ZERO, 1);

        assert_eq!(result.direct_wage_cost, Decimal::ZERO);
    }

    #[test]
    fn test_cost_scales_linearly_with_headcount() {
        let scenario_small = AbsenceScenario::with_defaults(10, dec("520000"), dec("5.0"));
        let scenario_large = AbsenceScenario::with_defaults(20, dec("520000"), dec("5.0"));

        let small = calculate_direct_wage_cost(&scenario_small, dec("5.0"), 1);
        let large = calculate_direct_wage_cost(&scenario_large, dec("5.0"), 1);

        assert_eq!(large.direct_wage_cost, small.direct_wage_cost * Decimal::from(2));
    }

    #[test]
    fn test_effective_percent_overrides_raw_percent() {
        // The caller passes the category-adjusted rate; the raw scenario
        // value must not leak in.
        let mut scenario = AbsenceScenario::with_defaults(50, dec("520000"), dec("10.0"));
        scenario.absence_percent = dec("10.0");
        let result = calculate_direct_wage_cost(&scenario, dec("5.0"), 1);

        assert_eq!(result.direct_wage_cost.normalize(), dec("80000"));
    }

    #[test]
    fn test_audit_step_records_operands() {
        let scenario = AbsenceScenario::with_defaults(50, dec("520000"), dec("5.0"));
        let result = calculate_direct_wage_cost(&scenario, dec("5.0"), 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(
            result.audit_step.input["employer_period_days"].as_u64().unwrap(),
            16
        );
        assert!(result.audit_step.reasoning.contains("50 employees"));
    }
}
