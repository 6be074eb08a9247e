//! Public insurance reimbursement calculation.
//!
//! For long-term absence, public insurance refunds part of the wage cost.
//! The refund only applies when the long-term refinement is active and the
//! scenario's category includes long-term absence.

use rust_decimal::Decimal;

use crate::models::{AbsenceCategory, AbsenceScenario, AuditStep};

/// The result of the reimbursement calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ReimbursementResult {
    /// The refund amount, non-negative; subtracted at aggregation.
    pub reimbursement: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the public insurance reimbursement.
///
/// `reimbursement = (effective_absence_percent / 100) * working_days_per_year
///   * employee_count * long_term_share * reimbursement_share * daily_wage`
///
/// The refund is zero for category `Short` and for scenarios without the
/// long-term refinement (`long_term_share` unset). When the refinement is
/// active but `reimbursement_share` is unset, the default two-thirds refund
/// applies.
pub fn calculate_reimbursement(
    scenario: &AbsenceScenario,
    effective_absence_percent: Decimal,
    daily_wage: Decimal,
    step_number: u32,
) -> ReimbursementResult {
    let eligible =
        scenario.category != AbsenceCategory::Short && scenario.refinement_active();

    if !eligible {
        let reasoning = if scenario.category == AbsenceCategory::Short {
            "Short-term absence ends within the employer period - no refund".to_string()
        } else {
            "Long-term refinement not active - no refund".to_string()
        };

        let audit_step = AuditStep {
            step_number,
            rule_id: "reimbursement".to_string(),
            rule_name: "Reimbursement".to_string(),
            input: serde_json::json!({
                "category": format!("{:?}", scenario.category).to_lowercase(),
                "long_term_share": scenario.long_term_share.map(|s| s.to_string()),
            }),
            output: serde_json::json!({
                "reimbursement": "0",
                "eligible": false,
            }),
            reasoning,
        };

        return ReimbursementResult {
            reimbursement: Decimal::ZERO,
            audit_step,
        };
    }

    // refinement_active() guarantees the share is present
    let long_term_share = scenario.long_term_share.unwrap_or(Decimal::ZERO);
    let reimbursement_share = scenario.reimbursement_share_or_default();

    let reimbursement = (effective_absence_percent / Decimal::ONE_HUNDRED)
        * Decimal::from(scenario.working_days_per_year)
        * Decimal::from(scenario.employee_count)
        * long_term_share
        * reimbursement_share
        * daily_wage;

    let audit_step = AuditStep {
        step_number,
        rule_id: "reimbursement".to_string(),
        rule_name: "Reimbursement".to_string(),
        input: serde_json::json!({
            "effective_absence_percent": effective_absence_percent.to_string(),
            "working_days_per_year": scenario.working_days_per_year,
            "employee_count": scenario.employee_count,
            "long_term_share": long_term_share.to_string(),
            "reimbursement_share": reimbursement_share.to_string(),
            "daily_wage": daily_wage.to_string(),
        }),
        output: serde_json::json!({
            "reimbursement": reimbursement.to_string(),
            "eligible": true,
        }),
        reasoning: format!(
            "{}% x {} days x {} employees x {} long-term x {} refunded x {} daily wage = {}",
            effective_absence_percent.normalize(),
            scenario.working_days_per_year,
            scenario.employee_count,
            long_term_share.normalize(),
            reimbursement_share.round_dp(4).normalize(),
            daily_wage.round_dp(2).normalize(),
            reimbursement.round_dp(2).normalize()
        ),
    };

    ReimbursementResult {
        reimbursement,
        audit_step,
    }
}
