//! Scenario validation.
//!
//! Every estimation entry point runs the full precondition check before any
//! arithmetic; a violated precondition is reported with the offending field
//! and constraint, and no partial result is returned.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceCategory, AbsenceScenario, ExtraCostScaling};

fn invalid(field: &str, constraint: &str) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        constraint: constraint.to_string(),
    }
}

/// Validates every precondition of a scenario.
///
/// Checks, in order: counts and salary are positive, the absence percentage
/// is on the 0-100 scale, the employer period fits within the working year,
/// all rate fields are non-negative, fractional shares stay within [0, 1],
/// category refinement has the share it needs, and the extra-staffing
/// scaling mode is consistent with the supplied case rate.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] naming the first offending field,
/// or [`EngineError::ConfigurationConflict`] when percent-of-time scaling
/// and a per-case rate are supplied together.
pub fn validate_scenario(scenario: &AbsenceScenario) -> EngineResult<()> {
    if scenario.employee_count < 1 {
        return Err(invalid("employee_count", "must be at least 1"));
    }
    if scenario.average_annual_salary <= Decimal::ZERO {
        return Err(invalid("average_annual_salary", "must be greater than 0"));
    }
    if scenario.absence_percent < Decimal::ZERO
        || scenario.absence_percent > Decimal::ONE_HUNDRED
    {
        return Err(invalid("absence_percent", "must be between 0 and 100"));
    }
    if scenario.employer_period_days < 1 {
        return Err(invalid("employer_period_days", "must be at least 1"));
    }
    if scenario.working_days_per_year < scenario.employer_period_days {
        return Err(invalid(
            "working_days_per_year",
            "must be at least employer_period_days",
        ));
    }
    if scenario.social_surcharge_rate < Decimal::ZERO {
        return Err(invalid("social_surcharge_rate", "must not be negative"));
    }
    if scenario.indirect_cost_rate < Decimal::ZERO {
        return Err(invalid("indirect_cost_rate", "must not be negative"));
    }
    if scenario.substitute_cost_per_day < Decimal::ZERO {
        return Err(invalid("substitute_cost_per_day", "must not be negative"));
    }
    if scenario.overtime_cost_per_day < Decimal::ZERO {
        return Err(invalid("overtime_cost_per_day", "must not be negative"));
    }

    if let Some(share) = scenario.long_term_share {
        if share < Decimal::ZERO || share > Decimal::ONE {
            return Err(invalid("long_term_share", "must be between 0 and 1"));
        }
    }
    if let Some(share) = scenario.reimbursement_share {
        if share < Decimal::ZERO || share > Decimal::ONE {
            return Err(invalid("reimbursement_share", "must be between 0 and 1"));
        }
    }
    if let Some(cases) = scenario.cases_per_employee_per_year {
        if cases < Decimal::ZERO {
            return Err(invalid(
                "cases_per_employee_per_year",
                "must not be negative",
            ));
        }
    }

    // Short/Long describe a slice of the absence rate and need the share to
    // split it.
    if matches!(
        scenario.category,
        AbsenceCategory::Short | AbsenceCategory::Long
    ) && scenario.long_term_share.is_none()
    {
        return Err(invalid(
            "long_term_share",
            "required when category is short or long",
        ));
    }

    match scenario.extra_cost_scaling {
        ExtraCostScaling::PerCase if scenario.cases_per_employee_per_year.is_none() => {
            Err(invalid(
                "cases_per_employee_per_year",
                "required when extra_cost_scaling is per_case",
            ))
        }
        ExtraCostScaling::PercentOfTime
            if scenario.cases_per_employee_per_year.is_some() =>
        {
            Err(EngineError::ConfigurationConflict {
                message: "cases_per_employee_per_year supplied while extra_cost_scaling \
                          is percent_of_time; select per_case scaling or drop the case rate"
                    .to_string(),
            })
        }
        _ => Ok(()),
    }
}
