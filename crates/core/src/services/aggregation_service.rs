use std::collections::HashMap;

use crate::models::holding::Holding;
use crate::models::transaction::TransactionRecord;

/// Folds raw transaction records into per-instrument holdings.
///
/// Pure business logic — no I/O, no API calls. Easy to test.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate transactions into one holding per instrument.
    ///
    /// Records are grouped by ISIN, falling back to the instrument display
    /// name when the statement carries no ISIN. The first-seen record for a
    /// key supplies name, ticker, and type; later records only contribute
    /// quantity and value. Output keeps the order in which each instrument
    /// first appears.
    ///
    /// The weighted-average unit price is recomputed on every contribution
    /// as cost basis ÷ quantity. A contribution that closes the position
    /// (running quantity zero) keeps the last computed average instead of
    /// dividing by zero.
    pub fn aggregate(&self, transactions: &[TransactionRecord]) -> Vec<Holding> {
        let mut holdings: Vec<Holding> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for tx in transactions {
            let quantity = finite_or_zero(tx.quantity);
            let total_value = finite_or_zero(tx.total_value);

            match index.get(tx.position_key()) {
                Some(&i) => {
                    let holding = &mut holdings[i];
                    holding.quantity += quantity;
                    holding.total_value += total_value;
                    if holding.quantity != 0.0 {
                        holding.unit_price = holding.total_value / holding.quantity;
                    }
                }
                None => {
                    index.insert(tx.position_key().to_string(), holdings.len());
                    holdings.push(Holding {
                        name: tx.asset.clone(),
                        isin: tx.isin.clone(),
                        ticker: tx.ticker.clone(),
                        asset_type: tx.asset_type.clone(),
                        quantity,
                        unit_price: finite_or_zero(tx.unit_price),
                        total_value,
                        market: None,
                    });
                }
            }
        }

        holdings
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Malformed statement cells can surface as NaN or ±inf after parsing;
/// they contribute nothing.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
