//! Indirect cost calculation.
//!
//! Lost productivity and administration overhead, expressed as a fraction of
//! the direct wage cost. The base is the direct wage cost alone - applying
//! the rate to a sum that already contains surcharge, substitute or overtime
//! cost would double-count those categories.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of the indirect cost calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct IndirectCostResult {
    /// Indirect cost relative to the direct wage cost.
    pub indirect_cost: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the indirect cost from the direct wage cost.
///
/// `indirect_cost = direct_wage_cost * indirect_cost_rate`
pub fn calculate_indirect_cost(
    direct_wage_cost: Decimal,
    indirect_cost_rate: Decimal,
    step_number: u32,
) -> IndirectCostResult {
    let indirect_cost = direct_wage_cost * indirect_cost_rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "indirect_cost".to_string(),
        rule_name: "Indirect Cost".to_string(),
        input: serde_json::json!({
            "direct_wage_cost": direct_wage_cost.to_string(),
            "indirect_cost_rate": indirect_cost_rate.to_string(),
        }),
        output: serde_json::json!({
            "indirect_cost": indirect_cost.to_string(),
        }),
        reasoning: format!(
            "{} x {} = {}",
            direct_wage_cost.normalize(),
            indirect_cost_rate.normalize(),
            indirect_cost.normalize()
        ),
    };

    IndirectCostResult {
        indirect_cost,
        audit_step,
    }
}
