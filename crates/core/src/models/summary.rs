use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// Absolute and relative gain/loss of the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLoss {
    /// current value − cost basis
    pub amount: f64,

    /// amount relative to the cost basis, in percent.
    /// Explicit `0.0` when the cost basis is zero — a position acquired at
    /// no cost has no meaningful return ratio.
    pub percentage: f64,
}

/// Portfolio-level valuation at the time of a quote refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Currency used for all monetary values
    pub currency: String,

    /// Number of distinct positions
    pub position_count: usize,

    /// Total amount originally paid for the current holdings
    pub cost_basis: f64,

    /// Holdings valued at the latest market price, cost basis where no
    /// quote resolved
    pub current_value: f64,

    /// Gain/loss derived from the two totals above
    pub profit_loss: ProfitLoss,

    /// The enriched holdings the totals were computed from
    pub holdings: Vec<Holding>,
}
