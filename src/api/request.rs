//! Request types for the absence cost engine API.
//!
//! This module defines the JSON request structures for the `/estimate`,
//! `/savings` and `/trend` endpoints. Policy fields may be omitted; they
//! are filled from the loaded policy defaults before the scenario reaches
//! the calculation core.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PolicyConfig;
use crate::models::{AbsenceCategory, AbsenceScenario, ExtraCostScaling};

/// Scenario fields in an API request.
///
/// The three user-facing inputs are required; every policy field is
/// optional and defaults from the loaded [`PolicyConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRequest {
    /// Number of employees represented.
    pub employee_count: u32,
    /// Average annual salary per employee.
    pub average_annual_salary: Decimal,
    /// Percentage of working time lost to absence, on a 0-100 scale.
    pub absence_percent: Decimal,
    /// Days the employer bears the cost; defaults from policy.
    #[serde(default)]
    pub employer_period_days: Option<u32>,
    /// Working days per year; defaults from policy.
    #[serde(default)]
    pub working_days_per_year: Option<u32>,
    /// Payroll surcharge rate; defaults from policy.
    #[serde(default)]
    pub social_surcharge_rate: Option<Decimal>,
    /// Indirect cost rate; defaults from policy.
    #[serde(default)]
    pub indirect_cost_rate: Option<Decimal>,
    /// Substitute day rate; defaults to zero (disabled).
    #[serde(default)]
    pub substitute_cost_per_day: Option<Decimal>,
    /// Overtime day rate; defaults to zero (disabled).
    #[serde(default)]
    pub overtime_cost_per_day: Option<Decimal>,
    /// Absence category; defaults to `total`.
    #[serde(default)]
    pub category: AbsenceCategory,
    /// Extra-staffing scaling mode; defaults to `percent_of_time`.
    #[serde(default)]
    pub extra_cost_scaling: ExtraCostScaling,
    /// Absence episodes per employee per year, for per-case scaling.
    #[serde(default)]
    pub cases_per_employee_per_year: Option<Decimal>,
    /// Fraction of absence classified long-term.
    #[serde(default)]
    pub long_term_share: Option<Decimal>,
    /// Refunded share of long-term cost; defaults from policy.
    #[serde(default)]
    pub reimbursement_share: Option<Decimal>,
}

impl ScenarioRequest {
    /// Builds the core scenario, filling omitted policy fields from the
    /// loaded defaults.
    pub fn resolve(self, policy: &PolicyConfig) -> AbsenceScenario {
        let defaults = &policy.defaults;

        AbsenceScenario {
            employee_count: self.employee_count,
            average_annual_salary: self.average_annual_salary,
            absence_percent: self.absence_percent,
            employer_period_days: self
                .employer_period_days
                .unwrap_or(defaults.employer_period_days),
            working_days_per_year: self
                .working_days_per_year
                .unwrap_or(defaults.working_days_per_year),
            social_surcharge_rate: self
                .social_surcharge_rate
                .unwrap_or(defaults.social_surcharge_rate),
            indirect_cost_rate: self
                .indirect_cost_rate
                .unwrap_or(defaults.indirect_cost_rate),
            substitute_cost_per_day: self.substitute_cost_per_day.unwrap_or(Decimal::ZERO),
            overtime_cost_per_day: self.overtime_cost_per_day.unwrap_or(Decimal::ZERO),
            category: self.category,
            extra_cost_scaling: self.extra_cost_scaling,
            cases_per_employee_per_year: self.cases_per_employee_per_year,
            long_term_share: self.long_term_share,
            reimbursement_share: self
                .reimbursement_share
                .or(Some(defaults.reimbursement_share)),
        }
    }
}

/// Request body for the `/estimate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// The scenario to estimate.
    pub scenario: ScenarioRequest,
}

/// Request body for the `/savings` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsRequest {
    /// The current scenario.
    pub scenario: ScenarioRequest,
    /// The target absence percentage to compare against.
    pub target_absence_percent: Decimal,
}

/// Request body for the `/trend` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendRequest {
    /// The base scenario.
    pub scenario: ScenarioRequest,
    /// One absence percentage per calendar month, January first.
    pub monthly_absence_percent: Vec<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_policy() -> PolicyConfig {
        serde_yaml::from_str(
            r#"
policy:
  name: "Test rules"
  jurisdiction: "NO"
  version: "2025-01-01"
  source_url: "https://example.com"
defaults:
  employer_period_days: 16
  working_days_per_year: 260
  social_surcharge_rate: "0.14"
  indirect_cost_rate: "0.50"
  reimbursement_share: "0.6667"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_minimal_request_resolves_with_policy_defaults() {
        let json = r#"{
            "employee_count": 50,
            "average_annual_salary": "600000",
            "absence_percent": "5.0"
        }"#;

        let request: ScenarioRequest = serde_json::from_str(json).unwrap();
        let scenario = request.resolve(&test_policy());

        assert_eq!(scenario.employer_period_days, 16);
        assert_eq!(scenario.working_days_per_year, 260);
        assert_eq!(scenario.social_surcharge_rate, dec("0.14"));
        assert_eq!(scenario.indirect_cost_rate, dec("0.50"));
        assert_eq!(scenario.substitute_cost_per_day, Decimal::ZERO);
        assert_eq!(scenario.overtime_cost_per_day, Decimal::ZERO);
        assert_eq!(scenario.category, AbsenceCategory::Total);
        assert_eq!(scenario.reimbursement_share, Some(dec("0.6667")));
    }

    #[test]
    fn test_supplied_fields_override_policy_defaults() {
        let json = r#"{
            "employee_count": 50,
            "average_annual_salary": "600000",
            "absence_percent": "5.0",
            "employer_period_days": 12,
            "social_surcharge_rate": "0.141",
            "substitute_cost_per_day": "2500"
        }"#;

        let request: ScenarioRequest = serde_json::from_str(json).unwrap();
        let scenario = request.resolve(&test_policy());

        assert_eq!(scenario.employer_period_days, 12);
        assert_eq!(scenario.social_surcharge_rate, dec("0.141"));
        assert_eq!(scenario.substitute_cost_per_day, dec("2500"));
        assert_eq!(scenario.working_days_per_year, 260);
    }

    #[test]
    fn test_savings_request_deserialization() {
        let json = r#"{
            "scenario": {
                "employee_count": 50,
                "average_annual_salary": "600000",
                "absence_percent": "5.0"
            },
            "target_absence_percent": "3.5"
        }"#;

        let request: SavingsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.target_absence_percent, dec("3.5"));
    }

    #[test]
    fn test_trend_request_deserialization() {
        let json = r#"{
            "scenario": {
                "employee_count": 50,
                "average_annual_salary": "600000",
                "absence_percent": "5.0"
            },
            "monthly_absence_percent": ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]
        }"#;

        let request: TrendRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.monthly_absence_percent.len(), 12);
    }
}
