use crate::models::holding::{Holding, MarketData};
use crate::models::quote::QuoteMap;
use crate::models::summary::{PortfolioSummary, ProfitLoss};

/// Combines holdings with live quotes into enriched holdings and
/// portfolio-level totals.
///
/// All functions are pure and re-runnable with any quote map: a refresh
/// that fails, returns partial data, or never completes leaves the
/// cost-basis valuation intact.
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Merge live quotes into holdings, returning enriched copies.
    ///
    /// A holding whose ticker resolves to a positive price gains the full
    /// market-data set; every other holding passes through unchanged. The
    /// percent change stays `None` for a zero average unit price.
    pub fn enrich(&self, holdings: &[Holding], quotes: &QuoteMap) -> Vec<Holding> {
        holdings
            .iter()
            .map(|holding| match quotes.price(&holding.ticker) {
                Some(price) => {
                    let price_change = price - holding.unit_price;
                    let percent_change = if holding.unit_price != 0.0 {
                        Some(price_change / holding.unit_price * 100.0)
                    } else {
                        None
                    };
                    let mut enriched = holding.clone();
                    enriched.market = Some(MarketData {
                        current_price: price,
                        current_total_value: holding.quantity * price,
                        price_change,
                        percent_change,
                    });
                    enriched
                }
                None => holding.clone(),
            })
            .collect()
    }

    /// Total amount originally paid for the current holdings.
    pub fn cost_basis(&self, holdings: &[Holding]) -> f64 {
        holdings.iter().map(|h| h.total_value).sum()
    }

    /// Holdings valued at the latest market price, falling back to cost
    /// basis where no quote resolved. Equals `cost_basis` exactly when
    /// nothing is enriched.
    pub fn current_value(&self, holdings: &[Holding]) -> f64 {
        holdings.iter().map(Holding::current_total_value).sum()
    }

    /// Gain/loss between the two portfolio totals. The percentage is an
    /// explicit zero for a zero cost basis.
    pub fn profit_loss(&self, cost_basis: f64, current_value: f64) -> ProfitLoss {
        let amount = current_value - cost_basis;
        let percentage = if cost_basis > 0.0 {
            amount / cost_basis * 100.0
        } else {
            0.0
        };
        ProfitLoss { amount, percentage }
    }

    /// Enrich holdings and compute the portfolio totals in one pass.
    pub fn summarize(
        &self,
        holdings: &[Holding],
        quotes: &QuoteMap,
        currency: &str,
    ) -> PortfolioSummary {
        let enriched = self.enrich(holdings, quotes);
        let cost_basis = self.cost_basis(&enriched);
        let current_value = self.current_value(&enriched);
        let profit_loss = self.profit_loss(cost_basis, current_value);

        PortfolioSummary {
            currency: currency.to_string(),
            position_count: enriched.len(),
            cost_basis,
            current_value,
            profit_loss,
            holdings: enriched,
        }
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
