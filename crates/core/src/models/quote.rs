use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalized map of ticker symbol → latest market price.
///
/// This is the engine-facing shape of a quote feed: whatever the market-data
/// provider returns is translated into this map before the valuation layer
/// sees it. Tickers are uppercased on insert and lookup. A missing ticker,
/// an empty ticker, and a non-positive or non-finite stored price all read
/// as "no quote available" — never as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteMap {
    quotes: HashMap<String, f64>,
}

impl QuoteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the price for a ticker.
    pub fn set(&mut self, ticker: &str, price: f64) {
        self.quotes.insert(ticker.to_uppercase(), price);
    }

    /// Get a usable price for a ticker. Filters out entries the valuation
    /// layer must treat as unresolved.
    pub fn price(&self, ticker: &str) -> Option<f64> {
        if ticker.is_empty() {
            return None;
        }
        self.quotes
            .get(&ticker.to_uppercase())
            .copied()
            .filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Number of stored entries, including ones `price()` would filter.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Iterate over all stored entries, unfiltered.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.quotes.iter().map(|(t, p)| (t.as_str(), *p))
    }
}

impl From<HashMap<String, f64>> for QuoteMap {
    fn from(raw: HashMap<String, f64>) -> Self {
        raw.into_iter().collect()
    }
}

impl FromIterator<(String, f64)> for QuoteMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (ticker, price) in iter {
            map.set(&ticker, price);
        }
        map
    }
}
