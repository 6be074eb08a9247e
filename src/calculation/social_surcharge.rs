//! Social surcharge calculation.
//!
//! The employer-side payroll contribution on top of the direct wage cost.
//! Always a separate additive line over the direct cost alone, never an
//! inline 1.14-style multiplier folded into the wage line.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of the social surcharge calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct SocialSurchargeResult {
    /// Payroll surcharge on the direct wage cost.
    pub social_surcharge_cost: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the payroll surcharge on the direct wage cost.
///
/// `social_surcharge_cost = direct_wage_cost * social_surcharge_rate`
pub fn calculate_social_surcharge(
    direct_wage_cost: Decimal,
    social_surcharge_rate: Decimal,
    step_number: u32,
) -> SocialSurchargeResult {
    let social_surcharge_cost = direct_wage_cost * social_surcharge_rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_surcharge".to_string(),
        rule_name: "Social Surcharge".to_string(),
        input: serde_json::json!({
            "direct_wage_cost": direct_wage_cost.to_string(),
            "social_surcharge_rate": social_surcharge_rate.to_string(),
        }),
        output: serde_json::json!({
            "social_surcharge_cost": social_surcharge_cost.to_string(),
        }),
        reasoning: format!(
            "{} x {} = {}",
            direct_wage_cost.normalize(),
            social_surcharge_rate.normalize(),
            social_surcharge_cost.normalize()
        ),
    };

    SocialSurchargeResult {
        social_surcharge_cost,
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
    fn test_surcharge_at_default_rate() {
        let result = calculate_social_surcharge(dec("80000"), dec("0.14"), 1);
        assert_eq!(result.social_surcharge_cost, dec("11200.00"));
    }

    #[test]
    fn test_surcharge_on_zero_cost() {
        let result = calculate_social_surcharge(Decimal::ZERO, dec("0.14"), 1);
        assert_eq!(result.social_surcharge_cost, Decimal::ZERO);
    }

    #[test]
    fn test_zero_rate_disables_surcharge() {
        let result = calculate_social_surcharge(dec("80000"), Decimal::ZERO, 1);
        assert_eq!(result.social_surcharge_cost, Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_records_rate() {
        let result = calculate_social_surcharge(dec("80000"), dec("0.14"), 4);

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(
            result.audit_step.input["social_surcharge_rate"].as_str().unwrap(),
            "0.14"
        );
        assert!(result.audit_step.reasoning.contains("11200"));
    }
}
