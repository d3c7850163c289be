use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single buy/sell line from a parsed brokerage statement.
///
/// Records arrive as a JSON array from the statement-parsing backend
/// (camelCase field names) and are never mutated by the engine. Numeric
/// fields default to zero and instrument metadata to the empty string when
/// the statement omits them.
///
/// **Important**: `total_value` is supplied by the statement parser, not
/// recomputed as `quantity × unit_price`. The original statement's rounding
/// is preserved through aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Identifier of the client (depot owner) this record belongs to
    pub client_id: String,

    /// Statement-assigned identifier, unique within a client
    pub transaction_id: String,

    /// Trade date (no time component — daily granularity)
    pub date: NaiveDate,

    /// Instrument display name (e.g., "Apple Inc.")
    pub asset: String,

    /// ISIN, may be empty for instruments the statement left unidentified
    #[serde(default)]
    pub isin: String,

    /// Ticker symbol used for quote lookups, may be empty
    #[serde(default)]
    pub ticker: String,

    /// Instrument type label as printed on the statement (e.g., "Aktie")
    #[serde(default)]
    pub asset_type: String,

    /// Traded quantity
    #[serde(default)]
    pub quantity: f64,

    /// Price per unit in the currency of record
    #[serde(default)]
    pub unit_price: f64,

    /// Total value of the line as printed on the statement
    #[serde(default)]
    pub total_value: f64,
}

impl TransactionRecord {
    pub fn new(
        client_id: impl Into<String>,
        transaction_id: impl Into<String>,
        date: NaiveDate,
        asset: impl Into<String>,
        quantity: f64,
        unit_price: f64,
        total_value: f64,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            transaction_id: transaction_id.into(),
            date,
            asset: asset.into(),
            isin: String::new(),
            ticker: String::new(),
            asset_type: String::new(),
            quantity,
            unit_price,
            total_value,
        }
    }

    /// Attach instrument identification (ISIN, ticker, type label).
    pub fn with_instrument(
        mut self,
        isin: impl Into<String>,
        ticker: impl Into<String>,
        asset_type: impl Into<String>,
    ) -> Self {
        self.isin = isin.into();
        self.ticker = ticker.into();
        self.asset_type = asset_type.into();
        self
    }

    /// Identity key for position aggregation: ISIN when present, else the
    /// instrument display name. Two records belong to the same position
    /// iff their keys are equal.
    pub fn position_key(&self) -> &str {
        if self.isin.is_empty() {
            &self.asset
        } else {
            &self.isin
        }
    }
}

/// Sort order for transaction history listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionSortOrder {
    /// Newest trade date first (default for display)
    DateDesc,
    /// Oldest trade date first
    DateAsc,
    /// Largest total value first
    ValueDesc,
    /// Smallest total value first
    ValueAsc,
    /// Alphabetical by instrument name
    AssetAsc,
    /// Reverse alphabetical by instrument name
    AssetDesc,
}
