//! Scenario estimation.
//!
//! Chains the formula steps into the canonical `compute` operation and the
//! `compute_savings` comparison against a lower target absence rate. All
//! entry points validate the scenario first and are pure: same input, same
//! breakdown, no side effects.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceScenario, AuditStep, AuditWarning, CostBreakdown, Savings};

use super::daily_wage::calculate_daily_wage;
use super::direct_wage::calculate_direct_wage_cost;
use super::effective_absence::calculate_effective_absence;
use super::extra_staffing::{ExtraCostKind, calculate_extra_staffing_cost};
use super::indirect_cost::calculate_indirect_cost;
use super::reimbursement::calculate_reimbursement;
use super::social_surcharge::calculate_social_surcharge;
use super::validate::validate_scenario;

/// A cost breakdown together with the audit steps and warnings that
/// produced it.
#[derive(Debug, Clone)]
pub struct TracedBreakdown {
    /// The computed breakdown.
    pub breakdown: CostBreakdown,
    /// The formula steps, in execution order.
    pub steps: Vec<AuditStep>,
    /// Warnings raised during aggregation.
    pub warnings: Vec<AuditWarning>,
}

/// A savings comparison together with the audit steps and warnings for both
/// scenarios.
#[derive(Debug, Clone)]
pub struct TracedSavings {
    /// The computed savings.
    pub savings: Savings,
    /// The formula steps for the current scenario followed by the target.
    pub steps: Vec<AuditStep>,
    /// Warnings raised during aggregation of either scenario.
    pub warnings: Vec<AuditWarning>,
}

/// The raw category amounts before aggregation.
struct CostLines {
    daily_wage: Decimal,
    effective_absence_percent: Decimal,
    direct_wage_cost: Decimal,
    social_surcharge_cost: Decimal,
    indirect_cost: Decimal,
    substitute_cost: Decimal,
    overtime_cost: Decimal,
    reimbursement: Decimal,
}

fn compute_lines(
    scenario: &AbsenceScenario,
    steps: &mut Vec<AuditStep>,
    step_number: &mut u32,
) -> EngineResult<CostLines> {
    let mut next = || {
        let n = *step_number;
        *step_number += 1;
        n
    };

    let daily = calculate_daily_wage(scenario, next());
    let effective = calculate_effective_absence(scenario, next())?;
    let direct = calculate_direct_wage_cost(
        scenario,
        effective.effective_absence_percent,
        next(),
    );
    let surcharge = calculate_social_surcharge(
        direct.direct_wage_cost,
        scenario.social_surcharge_rate,
        next(),
    );
    let indirect = calculate_indirect_cost(
        direct.direct_wage_cost,
        scenario.indirect_cost_rate,
        next(),
    );
    let substitute = calculate_extra_staffing_cost(
        ExtraCostKind::Substitute,
        scenario,
        effective.effective_absence_percent,
        next(),
    )?;
    let overtime = calculate_extra_staffing_cost(
        ExtraCostKind::Overtime,
        scenario,
        effective.effective_absence_percent,
        next(),
    )?;
    let reimbursement = calculate_reimbursement(
        scenario,
        effective.effective_absence_percent,
        daily.daily_wage,
        next(),
    );

    let lines = CostLines {
        daily_wage: daily.daily_wage,
        effective_absence_percent: effective.effective_absence_percent,
        direct_wage_cost: direct.direct_wage_cost,
        social_surcharge_cost: surcharge.social_surcharge_cost,
        indirect_cost: indirect.indirect_cost,
        substitute_cost: substitute.cost,
        overtime_cost: overtime.cost,
        reimbursement: reimbursement.reimbursement,
    };

    steps.push(daily.audit_step);
    steps.push(effective.audit_step);
    steps.push(direct.audit_step);
    steps.push(surcharge.audit_step);
    steps.push(indirect.audit_step);
    steps.push(substitute.audit_step);
    steps.push(overtime.audit_step);
    steps.push(reimbursement.audit_step);

    Ok(lines)
}

/// Sums the category lines into period and annual totals.
///
/// The reimbursement is capped at the gross cost sum so the period total
/// never goes negative; a capped refund raises a warning. The annual total
/// is the period total scaled by `working_days_per_year / employer_period_days`,
/// computed here and nowhere else.
fn aggregate(
    scenario: &AbsenceScenario,
    lines: CostLines,
    warnings: &mut Vec<AuditWarning>,
) -> CostBreakdown {
    let gross_cost = lines.direct_wage_cost
        + lines.social_surcharge_cost
        + lines.indirect_cost
        + lines.substitute_cost
        + lines.overtime_cost;

    let (reimbursement, reimbursement_capped) = if lines.reimbursement > gross_cost {
        warnings.push(AuditWarning {
            code: "REIMBURSEMENT_CAPPED".to_string(),
            message: format!(
                "Reimbursement {} exceeds gross cost {} and was capped",
                lines.reimbursement.round_dp(2).normalize(),
                gross_cost.round_dp(2).normalize()
            ),
            severity: "medium".to_string(),
        });
        (gross_cost, true)
    } else {
        (lines.reimbursement, false)
    };

    let total_period_cost = gross_cost - reimbursement;
    let annualization_ratio = Decimal::from(scenario.working_days_per_year)
        / Decimal::from(scenario.employer_period_days);
    let total_annual_cost = total_period_cost * annualization_ratio;

    CostBreakdown {
        daily_wage: lines.daily_wage,
        effective_absence_percent: lines.effective_absence_percent,
        direct_wage_cost: lines.direct_wage_cost,
        social_surcharge_cost: lines.social_surcharge_cost,
        indirect_cost: lines.indirect_cost,
        substitute_cost: lines.substitute_cost,
        overtime_cost: lines.overtime_cost,
        reimbursement,
        reimbursement_capped,
        total_period_cost,
        total_annual_cost,
    }
}

/// Computes the cost breakdown for one scenario.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] or
/// [`EngineError::ConfigurationConflict`] when the scenario fails
/// validation; no partial result is returned.
///
/// # Examples
///
/// ```
/// use absence_engine::calculation::compute;
/// use absence_engine::models::AbsenceScenario;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let scenario = AbsenceScenario::with_defaults(50, Decimal::from(520_000), Decimal::from(5));
/// let breakdown = compute(&scenario).unwrap();
/// assert_eq!(
///     breakdown.direct_wage_cost.normalize(),
///     Decimal::from_str("80000").unwrap()
/// );
/// ```
pub fn compute(scenario: &AbsenceScenario) -> EngineResult<CostBreakdown> {
    Ok(compute_traced(scenario)?.breakdown)
}

/// Computes the cost breakdown together with its audit trace parts.
pub fn compute_traced(scenario: &AbsenceScenario) -> EngineResult<TracedBreakdown> {
    validate_scenario(scenario)?;

    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let lines = compute_lines(scenario, &mut steps, &mut step_number)?;
    let breakdown = aggregate(scenario, lines, &mut warnings);

    Ok(TracedBreakdown {
        breakdown,
        steps,
        warnings,
    })
}

/// Compares a scenario against a lower target absence rate.
///
/// The target breakdown is computed at `target_absence_percent` with the
/// substitute and overtime totals held at the current scenario's values
/// (the conservative hold-fixed policy: a lower absence rate is not assumed
/// to shrink cover staffing already in place).
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the scenario fails validation
/// or when `target_absence_percent` is negative or above the current
/// `absence_percent`.
pub fn compute_savings(
    scenario: &AbsenceScenario,
    target_absence_percent: Decimal,
) -> EngineResult<Savings> {
    Ok(compute_savings_traced(scenario, target_absence_percent)?.savings)
}

/// Computes the savings comparison together with its audit trace parts.
pub fn compute_savings_traced(
    scenario: &AbsenceScenario,
    target_absence_percent: Decimal,
) -> EngineResult<TracedSavings> {
    validate_scenario(scenario)?;

    if target_absence_percent < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "target_absence_percent".to_string(),
            constraint: "must be at least 0".to_string(),
        });
    }
    if target_absence_percent > scenario.absence_percent {
        return Err(EngineError::InvalidInput {
            field: "target_absence_percent".to_string(),
            constraint: "must not exceed the current absence_percent".to_string(),
        });
    }

    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let current_lines = compute_lines(scenario, &mut steps, &mut step_number)?;
    let current = aggregate(scenario, current_lines, &mut warnings);

    let mut target_scenario = scenario.clone();
    target_scenario.absence_percent = target_absence_percent;

    let mut target_lines = compute_lines(&target_scenario, &mut steps, &mut step_number)?;
    // Hold-fixed policy: cover staffing does not rescale with the target rate.
    target_lines.substitute_cost = current.substitute_cost;
    target_lines.overtime_cost = current.overtime_cost;
    let target = aggregate(&target_scenario, target_lines, &mut warnings);

    let period_savings = current.total_period_cost - target.total_period_cost;
    let annual_savings = current.total_annual_cost - target.total_annual_cost;

    Ok(TracedSavings {
        savings: Savings {
            current,
            target,
            period_savings,
            annual_savings,
        },
        steps,
        warnings,
    })
}
