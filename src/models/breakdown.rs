//! Cost breakdown and savings models.
//!
//! This module contains the [`CostBreakdown`] output of an estimation, the
//! fixed-order export rows handed to tabular consumers, and the [`Savings`]
//! comparison between a current and a target scenario.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The cost category of one breakdown line.
///
/// The order of the variants is the fixed export order consumed by
/// spreadsheet serialization downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    /// Wage paid for absent time during the employer period.
    DirectWage,
    /// Employer-side payroll surcharge on the direct wage cost.
    SocialSurcharge,
    /// Lost productivity and administration, relative to direct wage cost.
    Indirect,
    /// Substitute worker cost for covered absence days.
    Substitute,
    /// Overtime cost for covered absence days.
    Overtime,
    /// Public insurance refund; reduces the total.
    Reimbursement,
}

/// One `(category, amount)` row of the exported breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    /// The cost category of this row.
    pub category: CostCategory,
    /// The amount, negative for the reimbursement row.
    pub amount: Decimal,
}

/// The complete cost breakdown for one scenario.
///
/// All monetary fields are for the whole organization. Per-period fields
/// cover the employer period; `total_annual_cost` scales the period total by
/// `working_days_per_year / employer_period_days`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Average wage per working day per employee.
    pub daily_wage: Decimal,
    /// Absence percentage after category adjustment.
    pub effective_absence_percent: Decimal,
    /// Wage paid for absent time during the employer period.
    pub direct_wage_cost: Decimal,
    /// Payroll surcharge on the direct wage cost.
    pub social_surcharge_cost: Decimal,
    /// Indirect cost, computed on the direct wage cost alone.
    pub indirect_cost: Decimal,
    /// Substitute worker cost.
    pub substitute_cost: Decimal,
    /// Overtime cost.
    pub overtime_cost: Decimal,
    /// Public insurance refund, stored as a non-negative amount and
    /// subtracted from the total.
    pub reimbursement: Decimal,
    /// True when the refund was capped at the gross cost sum to keep the
    /// period total from going negative.
    pub reimbursement_capped: bool,
    /// Sum of all categories with reimbursement subtracted, for the
    /// employer period.
    pub total_period_cost: Decimal,
    /// Period total scaled to a full year.
    pub total_annual_cost: Decimal,
}

impl CostBreakdown {
    /// Returns the breakdown as ordered export rows.
    ///
    /// Order is fixed: direct wage, social surcharge, indirect, substitute,
    /// overtime, reimbursement. The reimbursement row carries a negative
    /// amount so the rows sum to `total_period_cost`.
    pub fn export_rows(&self) -> Vec<ExportRow> {
        vec![
            ExportRow {
                category: CostCategory::DirectWage,
                amount: self.direct_wage_cost,
            },
            ExportRow {
                category: CostCategory::SocialSurcharge,
                amount: self.social_surcharge_cost,
            },
            ExportRow {
                category: CostCategory::Indirect,
                amount: self.indirect_cost,
            },
            ExportRow {
                category: CostCategory::Substitute,
                amount: self.substitute_cost,
            },
            ExportRow {
                category: CostCategory::Overtime,
                amount: self.overtime_cost,
            },
            ExportRow {
                category: CostCategory::Reimbursement,
                amount: -self.reimbursement,
            },
        ]
    }
}

/// The outcome of comparing a scenario against a lower target absence rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    /// Breakdown at the current absence rate.
    pub current: CostBreakdown,
    /// Breakdown at the target absence rate, with substitute and overtime
    /// totals held at the current scenario's values.
    pub target: CostBreakdown,
    /// Employer-period cost difference, current minus target.
    pub period_savings: Decimal,
    /// Annualized cost difference, current minus target.
    pub annual_savings: Decimal,
}
