//! Category adjustment of the absence rate.
//!
//! When the long-term refinement is active, the raw absence percentage is
//! split into its short-term or long-term slice before any cost is computed.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceCategory, AbsenceScenario, AuditStep};

/// The result of the category adjustment, including the audit step.
#[derive(Debug, Clone)]
pub struct EffectiveAbsenceResult {
    /// Absence percentage after the category adjustment.
    pub effective_absence_percent: Decimal,
    /// The audit step recording this adjustment.
    pub audit_step: AuditStep,
}

/// Adjusts the absence percentage by category.
///
/// - `Short`: `absence_percent * (1 - long_term_share)`
/// - `Long`: `absence_percent * long_term_share`
/// - `Total`: unchanged
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when `Short` or `Long` is selected
/// without a `long_term_share` to split by.
pub fn calculate_effective_absence(
    scenario: &AbsenceScenario,
    step_number: u32,
) -> EngineResult<EffectiveAbsenceResult> {
    let category_str = match scenario.category {
        AbsenceCategory::Short => "short",
        AbsenceCategory::Long => "long",
        AbsenceCategory::Total => "total",
    };

    let effective = match scenario.category {
        AbsenceCategory::Total => scenario.absence_percent,
        AbsenceCategory::Short | AbsenceCategory::Long => {
            let share = scenario.long_term_share.ok_or_else(|| {
                EngineError::InvalidInput {
                    field: "long_term_share".to_string(),
                    constraint: "required when category is short or long".to_string(),
                }
            })?;
            match scenario.category {
                AbsenceCategory::Short => scenario.absence_percent * (Decimal::ONE - share),
                _ => scenario.absence_percent * share,
            }
        }
    };

    let reasoning = match scenario.category {
        AbsenceCategory::Total => format!(
            "Category total - absence rate {}% used unchanged",
            scenario.absence_percent.normalize()
        ),
        AbsenceCategory::Short => format!(
            "{}% x (1 - {}) = {}% short-term slice",
            scenario.absence_percent.normalize(),
            scenario.long_term_share.unwrap_or_default().normalize(),
            effective.normalize()
        ),
        AbsenceCategory::Long => format!(
            "{}% x {} = {}% long-term slice",
            scenario.absence_percent.normalize(),
            scenario.long_term_share.unwrap_or_default().normalize(),
            effective.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "effective_absence".to_string(),
        rule_name: "Effective Absence Rate".to_string(),
        input: serde_json::json!({
            "absence_percent": scenario.absence_percent.to_string(),
            "category": category_str,
            "long_term_share": scenario.long_term_share.map(|s| s.to_string()),
        }),
        output: serde_json::json!({
            "effective_absence_percent": effective.to_string(),
        }),
        reasoning,
    };

    Ok(EffectiveAbsenceResult {
        effective_absence_percent: effective,
        audit_step,
    })
}
