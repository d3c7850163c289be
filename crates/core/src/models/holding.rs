use serde::{Deserialize, Serialize};

/// Market enrichment of a holding, produced when a live quote resolves.
///
/// The four figures always travel together: a holding either carries the
/// full set or none of it. `percent_change` alone stays `None` when the
/// average unit price is zero and no meaningful ratio exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    /// Latest market price per unit
    pub current_price: f64,

    /// quantity × current price
    pub current_total_value: f64,

    /// current price − weighted-average unit price
    pub price_change: f64,

    /// price change relative to the average unit price, in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_change: Option<f64>,
}

/// The aggregated position in one instrument across all contributing
/// transactions.
///
/// Holdings are derived data: every aggregation pass builds them fresh from
/// the full transaction set, and enrichment produces new copies rather than
/// mutating in place. The serialized form carries a `market` object exactly
/// when a quote resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Instrument display name, from the first-seen contributing record
    pub name: String,

    /// ISIN, may be empty
    pub isin: String,

    /// Ticker symbol used for quote lookups, may be empty
    pub ticker: String,

    /// Instrument type label, from the first-seen contributing record
    pub asset_type: String,

    /// Sum of contributing transaction quantities
    pub quantity: f64,

    /// Weighted-average unit price: total value ÷ quantity
    pub unit_price: f64,

    /// Aggregate cost basis: sum of contributing statement total values
    pub total_value: f64,

    /// Live-market enrichment, absent until a quote resolves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketData>,
}

impl Holding {
    /// Value of this position for portfolio totals: the market value when
    /// a quote resolved, else the cost basis. Unresolved quotes must never
    /// zero out portfolio value.
    pub fn current_total_value(&self) -> f64 {
        self.market
            .as_ref()
            .map_or(self.total_value, |m| m.current_total_value)
    }
}
