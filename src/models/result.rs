//! Result envelopes returned by the API layer.
//!
//! Each envelope pairs the computed payload with an id, timestamp, engine
//! version and the audit trace of the calculation that produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, CostBreakdown, ExportRow, MonthlyTrend, Savings};

/// The complete result of one cost estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Unique identifier for this estimation.
    pub calculation_id: Uuid,
    /// When the estimation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the estimation.
    pub engine_version: String,
    /// The computed cost breakdown.
    pub breakdown: CostBreakdown,
    /// The breakdown as ordered export rows for tabular consumers.
    pub export_rows: Vec<ExportRow>,
    /// Complete audit trace of formula steps.
    pub audit_trace: AuditTrace,
}

/// The complete result of one savings comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    /// Unique identifier for this estimation.
    pub calculation_id: Uuid,
    /// When the estimation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the estimation.
    pub engine_version: String,
    /// The savings comparison, including both breakdowns.
    pub savings: Savings,
    /// Complete audit trace of formula steps for both scenarios.
    pub audit_trace: AuditTrace,
}

/// The complete result of one monthly trend computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Unique identifier for this estimation.
    pub calculation_id: Uuid,
    /// When the estimation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the estimation.
    pub engine_version: String,
    /// The per-month costs.
    pub trend: MonthlyTrend,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, MonthlyCost};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_breakdown() -> CostBreakdown {
        CostBreakdown {
            daily_wage: dec("2000"),
            effective_absence_percent: dec("5"),
            direct_wage_cost: dec("1000"),
            social_surcharge_cost: dec("140"),
            indirect_cost: dec("500"),
            substitute_cost: dec("0"),
            overtime_cost: dec("0"),
            reimbursement: dec("0"),
            reimbursement_capped: false,
            total_period_cost: dec("1640"),
            total_annual_cost: dec("26650"),
        }
    }

    #[test]
    fn test_estimate_result_serialization() {
        let breakdown = sample_breakdown();
        let result = EstimateResult {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            export_rows: breakdown.export_rows(),
            breakdown,
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 0,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"engine_version\":\"0.1.0\""));
        assert!(json.contains("\"breakdown\":{"));
        assert!(json.contains("\"export_rows\":["));
        assert!(json.contains("\"audit_trace\":{"));
    }

    #[test]
    fn test_trend_result_serialization() {
        let result = TrendResult {
            calculation_id: Uuid::nil(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            trend: MonthlyTrend {
                months: vec![MonthlyCost {
                    month: Month::January,
                    absence_percent: dec("5"),
                    period_cost: dec("1640"),
                }],
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"trend\":{"));
        assert!(json.contains("\"january\""));
    }
}
