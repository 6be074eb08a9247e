//! Substitute and overtime staffing cost calculation.
//!
//! Covering absent employees costs extra, either as hired substitutes or as
//! overtime for the remaining staff. Both lines share one formula shape and
//! differ only in the day rate, so a single function computes either kind.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceScenario, AuditStep, ExtraCostScaling};

/// Which extra-staffing line is being calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraCostKind {
    /// Hired substitute workers.
    Substitute,
    /// Overtime for remaining staff.
    Overtime,
}

impl ExtraCostKind {
    fn rule_id(self) -> &'static str {
        match self {
            ExtraCostKind::Substitute => "substitute_cost",
            ExtraCostKind::Overtime => "overtime_cost",
        }
    }

    fn rule_name(self) -> &'static str {
        match self {
            ExtraCostKind::Substitute => "Substitute Cost",
            ExtraCostKind::Overtime => "Overtime Cost",
        }
    }
}

/// The result of an extra-staffing cost calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ExtraStaffingResult {
    /// The substitute or overtime cost for the employer period.
    pub cost: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates substitute or overtime cost for the employer period.
///
/// With percent-of-time scaling:
/// `cost = day_rate * employer_period_days * (effective_absence_percent / 100) * employee_count`
///
/// With per-case scaling the absence-fraction term is replaced by
/// `cases_per_employee_per_year`, applied per employee:
/// `cost = day_rate * employer_period_days * cases_per_employee_per_year * employee_count`
///
/// A day rate of zero disables the line in either mode.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when per-case scaling is selected
/// without a case rate.
pub fn calculate_extra_staffing_cost(
    kind: ExtraCostKind,
    scenario: &AbsenceScenario,
    effective_absence_percent: Decimal,
    step_number: u32,
) -> EngineResult<ExtraStaffingResult> {
    let day_rate = match kind {
        ExtraCostKind::Substitute => scenario.substitute_cost_per_day,
        ExtraCostKind::Overtime => scenario.overtime_cost_per_day,
    };

    let (scaling_term, scaling_desc) = match scenario.extra_cost_scaling {
        ExtraCostScaling::PercentOfTime => {
            let fraction = effective_absence_percent / Decimal::ONE_HUNDRED;
            (fraction, format!("{}% of time", effective_absence_percent.normalize()))
        }
        ExtraCostScaling::PerCase => {
            let cases = scenario.cases_per_employee_per_year.ok_or_else(|| {
                EngineError::InvalidInput {
                    field: "cases_per_employee_per_year".to_string(),
                    constraint: "required when extra_cost_scaling is per_case".to_string(),
                }
            })?;
            (cases, format!("{} cases per employee", cases.normalize()))
        }
    };

    let cost = day_rate
        * Decimal::from(scenario.employer_period_days)
        * scaling_term
        * Decimal::from(scenario.employee_count);

    let audit_step = AuditStep {
        step_number,
        rule_id: kind.rule_id().to_string(),
        rule_name: kind.rule_name().to_string(),
        input: serde_json::json!({
            "day_rate": day_rate.to_string(),
            "employer_period_days": scenario.employer_period_days,
            "scaling": match scenario.extra_cost_scaling {
                ExtraCostScaling::PercentOfTime => "percent_of_time",
                ExtraCostScaling::PerCase => "per_case",
            },
            "scaling_term": scaling_term.to_string(),
            "employee_count": scenario.employee_count,
        }),
        output: serde_json::json!({
            "cost": cost.to_string(),
        }),
        reasoning: format!(
            "{} x {} days x {} x {} employees = {}",
            day_rate.normalize(),
            scenario.employer_period_days,
            scaling_desc,
            scenario.employee_count,
            cost.normalize()
        ),
    };

    Ok(ExtraStaffingResult { cost, audit_step })
}
