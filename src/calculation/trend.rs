//! Month-by-month cost trend.
//!
//! Re-runs the period-cost formula once per calendar month with that month's
//! absence rate, so a year of observed or projected rates becomes a cost
//! curve.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceScenario, Month, MonthlyCost, MonthlyTrend};

use super::estimate::compute;
use super::validate::validate_scenario;

/// Computes the employer-period cost for each of twelve monthly absence
/// rates.
///
/// Every month uses the scenario unchanged except for `absence_percent`,
/// including its scaling mode, refinement fields and day rates.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the scenario fails validation,
/// when the slice does not hold exactly twelve values, or when any monthly
/// rate falls outside the 0-100 scale.
pub fn compute_monthly_trend(
    scenario: &AbsenceScenario,
    monthly_absence_percent: &[Decimal],
) -> EngineResult<MonthlyTrend> {
    validate_scenario(scenario)?;

    if monthly_absence_percent.len() != 12 {
        return Err(EngineError::InvalidInput {
            field: "monthly_absence_percent".to_string(),
            constraint: "must contain exactly 12 values".to_string(),
        });
    }

    let mut months = Vec::with_capacity(12);
    for (month, &absence_percent) in Month::ALL.iter().zip(monthly_absence_percent) {
        if absence_percent < Decimal::ZERO || absence_percent > Decimal::ONE_HUNDRED {
            return Err(EngineError::InvalidInput {
                field: "monthly_absence_percent".to_string(),
                constraint: "every value must be between 0 and 100".to_string(),
            });
        }

        let mut month_scenario = scenario.clone();
        month_scenario.absence_percent = absence_percent;
        let breakdown = compute(&month_scenario)?;

        months.push(MonthlyCost {
            month: *month,
            absence_percent,
            period_cost: breakdown.total_period_cost,
        });
    }

    Ok(MonthlyTrend { months })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reference_scenario() -> AbsenceScenario {
        AbsenceScenario::with_defaults(50, dec("520000"), dec("5.0"))
    }

    #[test]
    fn test_trend_computes_one_cost_per_month() {
        let rates: Vec<Decimal> = (1..=12).map(Decimal::from).collect();
        let trend = compute_monthly_trend(&reference_scenario(), &rates).unwrap();

        assert_eq!(trend.months.len(), 12);
        assert_eq!(trend.months[0].month, Month::January);
        assert_eq!(trend.months[11].month, Month::December);
        assert_eq!(trend.months[0].absence_percent, dec("1"));
    }

    #[test]
    fn test_trend_month_matches_direct_compute() {
        let rates = vec![dec("5.0"); 12];
        let trend = compute_monthly_trend(&reference_scenario(), &rates).unwrap();
        let breakdown = compute(&reference_scenario()).unwrap();

        for month in &trend.months {
            assert_eq!(month.period_cost, breakdown.total_period_cost);
        }
    }

    #[test]
    fn test_trend_scales_with_monthly_rate() {
        let mut rates = vec![dec("2.0"); 12];
        rates[5] = dec("4.0");
        let trend = compute_monthly_trend(&reference_scenario(), &rates).unwrap();

        assert_eq!(
            trend.months[5].period_cost,
            trend.months[0].period_cost * Decimal::from(2)
        );
    }

    #[test]
    fn test_trend_rejects_wrong_length() {
        let rates = vec![dec("5.0"); 11];
        let result = compute_monthly_trend(&reference_scenario(), &rates);

        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => {
                assert_eq!(field, "monthly_absence_percent");
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_trend_rejects_out_of_range_month() {
        let mut rates = vec![dec("5.0"); 12];
        rates[7] = dec("120");
        let result = compute_monthly_trend(&reference_scenario(), &rates);

        assert!(result.is_err());
    }

    #[test]
    fn test_trend_total_sums_all_months() {
        let rates = vec![dec("5.0"); 12];
        let trend = compute_monthly_trend(&reference_scenario(), &rates).unwrap();
        let breakdown = compute(&reference_scenario()).unwrap();

        assert_eq!(
            trend.total(),
            breakdown.total_period_cost * Decimal::from(12)
        );
    }
}
