//! Absence scenario model and related types.
//!
//! This module defines the [`AbsenceScenario`] input struct and the enums
//! that select category refinement and extra-staffing scaling behavior.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of days the employer bears the wage cost before public insurance
/// reimbursement applies (the employer period, folketrygdloven § 8-19).
pub const DEFAULT_EMPLOYER_PERIOD_DAYS: u32 = 16;

/// Working days per year used to convert annual amounts to daily amounts.
pub const DEFAULT_WORKING_DAYS_PER_YEAR: u32 = 260;

/// Returns the default employer-side payroll surcharge rate (14%).
pub fn default_social_surcharge_rate() -> Decimal {
    Decimal::new(14, 2)
}

/// Returns the default indirect cost rate (50% of direct wage cost).
pub fn default_indirect_cost_rate() -> Decimal {
    Decimal::new(50, 2)
}

/// Returns the default share of long-term wage cost refunded by public
/// insurance (two thirds).
pub fn default_reimbursement_share() -> Decimal {
    Decimal::from(2) / Decimal::from(3)
}

/// Which slice of the absence rate a scenario describes.
///
/// `Short` and `Long` split the absence rate by [`AbsenceScenario::long_term_share`];
/// `Total` uses the rate unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceCategory {
    /// Absence ending within the employer period.
    Short,
    /// Absence continuing beyond the employer period.
    Long,
    /// All absence regardless of duration.
    #[default]
    Total,
}

/// How substitute and overtime day rates scale to an organization-level cost.
///
/// The two modes are mutually exclusive: `PercentOfTime` scales by the
/// effective absence fraction, `PerCase` scales by
/// [`AbsenceScenario::cases_per_employee_per_year`]. Supplying a case rate
/// while `PercentOfTime` is selected is rejected as a configuration conflict
/// rather than silently picking one interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraCostScaling {
    /// Scale day rates by the effective absence fraction.
    #[default]
    PercentOfTime,
    /// Scale day rates by absence episodes per employee per year.
    PerCase,
}

/// One what-if scenario: the organization, its absence level, and the
/// applicable policy rates.
///
/// Immutable value object; a fresh instance is built per computation request
/// and validated before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenceScenario {
    /// Number of employees (or employee-equivalents) represented.
    pub employee_count: u32,
    /// Average annual salary per employee.
    pub average_annual_salary: Decimal,
    /// Percentage of working time lost to absence, on a 0-100 scale.
    pub absence_percent: Decimal,
    /// Calendar days during which the employer bears the cost.
    pub employer_period_days: u32,
    /// Working days per year, the denominator for per-day conversion.
    pub working_days_per_year: u32,
    /// Fractional surcharge on direct wage cost (e.g. 0.14 for 14%).
    pub social_surcharge_rate: Decimal,
    /// Fractional indirect cost multiplier relative to direct wage cost.
    pub indirect_cost_rate: Decimal,
    /// Substitute worker cost per absence day; zero disables.
    pub substitute_cost_per_day: Decimal,
    /// Overtime cost per absence day; zero disables.
    pub overtime_cost_per_day: Decimal,
    /// Which slice of the absence rate this scenario describes.
    #[serde(default)]
    pub category: AbsenceCategory,
    /// How substitute/overtime day rates scale to organization cost.
    #[serde(default)]
    pub extra_cost_scaling: ExtraCostScaling,
    /// Average absence episodes per employee per year, for `PerCase` scaling.
    #[serde(default)]
    pub cases_per_employee_per_year: Option<Decimal>,
    /// Fraction of absence classified long-term; enables the refinement.
    #[serde(default)]
    pub long_term_share: Option<Decimal>,
    /// Fraction of long-term cost refunded by public insurance.
    #[serde(default)]
    pub reimbursement_share: Option<Decimal>,
}

impl AbsenceScenario {
    /// Creates a scenario from the three user-facing inputs, filling every
    /// policy field with its documented default.
    ///
    /// Defaults: `employer_period_days=16`, `working_days_per_year=260`,
    /// `social_surcharge_rate=0.14`, `indirect_cost_rate=0.50`, substitute
    /// and overtime day rates zero, category `Total`, percent-of-time
    /// scaling, no refinement fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use absence_engine::models::AbsenceScenario;
    /// use rust_decimal::Decimal;
    ///
    /// let scenario = AbsenceScenario::with_defaults(
    ///     50,
    ///     Decimal::from(600_000),
    ///     Decimal::from(5),
    /// );
    /// assert_eq!(scenario.employer_period_days, 16);
    /// assert_eq!(scenario.working_days_per_year, 260);
    /// ```
    pub fn with_defaults(
        employee_count: u32,
        average_annual_salary: Decimal,
        absence_percent: Decimal,
    ) -> Self {
        Self {
            employee_count,
            average_annual_salary,
            absence_percent,
            employer_period_days: DEFAULT_EMPLOYER_PERIOD_DAYS,
            working_days_per_year: DEFAULT_WORKING_DAYS_PER_YEAR,
            social_surcharge_rate: default_social_surcharge_rate(),
            indirect_cost_rate: default_indirect_cost_rate(),
            substitute_cost_per_day: Decimal::ZERO,
            overtime_cost_per_day: Decimal::ZERO,
            category: AbsenceCategory::Total,
            extra_cost_scaling: ExtraCostScaling::PercentOfTime,
            cases_per_employee_per_year: None,
            long_term_share: None,
            reimbursement_share: None,
        }
    }

    /// Returns true if the long-term refinement is active for this scenario.
    pub fn refinement_active(&self) -> bool {
        self.long_term_share.is_some()
    }

    /// Returns the reimbursement share to use, falling back to the default
    /// two-thirds refund when the field is unset.
    pub fn reimbursement_share_or_default(&self) -> Decimal {
        self.reimbursement_share
            .unwrap_or_else(default_reimbursement_share)
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
    fn test_with_defaults_applies_documented_defaults() {
        let scenario = AbsenceScenario::with_defaults(50, dec("600000"), dec("5.0"));

        assert_eq!(scenario.employee_count, 50);
        assert_eq!(scenario.average_annual_salary, dec("600000"));
        assert_eq!(scenario.absence_percent, dec("5.0"));
        assert_eq!(scenario.employer_period_days, 16);
        assert_eq!(scenario.working_days_per_year, 260);
        assert_eq!(scenario.social_surcharge_rate, dec("0.14"));
        assert_eq!(scenario.indirect_cost_rate, dec("0.50"));
        assert_eq!(scenario.substitute_cost_per_day, Decimal::ZERO);
        assert_eq!(scenario.overtime_cost_per_day, Decimal::ZERO);
        assert_eq!(scenario.category, AbsenceCategory::Total);
        assert_eq!(scenario.extra_cost_scaling, ExtraCostScaling::PercentOfTime);
        assert_eq!(scenario.cases_per_employee_per_year, None);
        assert_eq!(scenario.long_term_share, None);
        assert_eq!(scenario.reimbursement_share, None);
    }

    #[test]
    fn test_refinement_active_follows_long_term_share() {
        let mut scenario = AbsenceScenario::with_defaults(10, dec("500000"), dec("4.0"));
        assert!(!scenario.refinement_active());

        scenario.long_term_share = Some(dec("0.6"));
        assert!(scenario.refinement_active());
    }

    #[test]
    fn test_reimbursement_share_defaults_to_two_thirds() {
        let scenario = AbsenceScenario::with_defaults(10, dec("500000"), dec("4.0"));
        let share = scenario.reimbursement_share_or_default();

        assert_eq!(share, Decimal::from(2) / Decimal::from(3));
    }

    #[test]
    fn test_reimbursement_share_override_wins() {
        let mut scenario = AbsenceScenario::with_defaults(10, dec("500000"), dec("4.0"));
        scenario.reimbursement_share = Some(dec("0.5"));

        assert_eq!(scenario.reimbursement_share_or_default(), dec("0.5"));
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&AbsenceCategory::Short).unwrap(),
            "\"short\""
        );
        assert_eq!(
            serde_json::to_string(&AbsenceCategory::Long).unwrap(),
            "\"long\""
        );
        assert_eq!(
            serde_json::to_string(&AbsenceCategory::Total).unwrap(),
            "\"total\""
        );
    }

    #[test]
    fn test_scaling_serialization() {
        assert_eq!(
            serde_json::to_string(&ExtraCostScaling::PercentOfTime).unwrap(),
            "\"percent_of_time\""
        );
        assert_eq!(
            serde_json::to_string(&ExtraCostScaling::PerCase).unwrap(),
            "\"per_case\""
        );
    }

    #[test]
    fn test_deserialize_scenario_with_omitted_optional_fields() {
        let json = r#"{
            "employee_count": 50,
            "average_annual_salary": "600000",
            "absence_percent": "5.0",
            "employer_period_days": 16,
            "working_days_per_year": 260,
            "social_surcharge_rate": "0.14",
            "indirect_cost_rate": "0.50",
            "substitute_cost_per_day": "0",
            "overtime_cost_per_day": "0"
        }"#;

        let scenario: AbsenceScenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.category, AbsenceCategory::Total);
        assert_eq!(scenario.extra_cost_scaling, ExtraCostScaling::PercentOfTime);
        assert_eq!(scenario.long_term_share, None);
    }

    #[test]
    fn test_scenario_round_trip() {
        let mut scenario = AbsenceScenario::with_defaults(25, dec("550000"), dec("6.2"));
        scenario.category = AbsenceCategory::Long;
        scenario.long_term_share = Some(dec("0.55"));

        let json = serde_json::to_string(&scenario).unwrap();
        let deserialized: AbsenceScenario = serde_json::from_str(&json).unwrap();
        assert_eq!(scenario, deserialized);
    }
}
