//! Month-by-month cost trend models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];
}

/// The employer-period cost for one month of the trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCost {
    /// The month this cost applies to.
    pub month: Month,
    /// The absence percentage supplied for this month.
    pub absence_percent: Decimal,
    /// The employer-period cost at that month's absence rate.
    pub period_cost: Decimal,
}

/// A year of monthly what-if costs computed from per-month absence rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// One cost entry per calendar month, January first.
    pub months: Vec<MonthlyCost>,
}

impl MonthlyTrend {
    /// Sums the period costs across all months.
    pub fn total(&self) -> Decimal {
        self.months.iter().map(|m| m.period_cost).sum()
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
    fn test_month_serialization() {
        assert_eq!(serde_json::to_string(&Month::January).unwrap(), "\"january\"");
        assert_eq!(
            serde_json::to_string(&Month::December).unwrap(),
            "\"december\""
        );
    }

    #[test]
    fn test_all_months_in_calendar_order() {
        assert_eq!(Month::ALL.len(), 12);
        assert_eq!(Month::ALL[0], Month::January);
        assert_eq!(Month::ALL[11], Month::December);
    }

    #[test]
    fn test_trend_total_sums_months() {
        let trend = MonthlyTrend {
            months: vec![
                MonthlyCost {
                    month: Month::January,
                    absence_percent: dec("5.0"),
                    period_cost: dec("100.50"),
                },
                MonthlyCost {
                    month: Month::February,
                    absence_percent: dec("4.0"),
                    period_cost: dec("80.25"),
                },
            ],
        };

        assert_eq!(trend.total(), dec("180.75"));
    }

    #[test]
    fn test_trend_round_trip() {
        let trend = MonthlyTrend {
            months: vec![MonthlyCost {
                month: Month::March,
                absence_percent: dec("6.5"),
                period_cost: dec("1234.56"),
            }],
        };

        let json = serde_json::to_string(&trend).unwrap();
        let deserialized: MonthlyTrend = serde_json::from_str(&json).unwrap();
        assert_eq!(trend, deserialized);
    }
}
