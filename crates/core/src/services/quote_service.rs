use log::{debug, warn};

use crate::errors::CoreError;
use crate::models::quote::QuoteMap;
use crate::providers::registry::QuoteProviderRegistry;

/// Fetches latest market quotes through the provider registry.
///
/// One batched request covers every requested ticker, so a refresh costs a
/// single API call regardless of portfolio size. Providers are tried in
/// registration order; the first that answers wins.
pub struct QuoteService {
    registry: QuoteProviderRegistry,
}

impl QuoteService {
    pub fn new(registry: QuoteProviderRegistry) -> Self {
        Self { registry }
    }

    /// Check if at least one quote provider is configured.
    pub fn has_provider(&self) -> bool {
        !self.registry.providers().is_empty()
    }

    /// Get the names of all configured providers, in fallback order.
    pub fn provider_names(&self) -> Vec<String> {
        self.registry
            .providers()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Fetch latest quotes for the given tickers in one batched call.
    ///
    /// An empty ticker list returns an empty map without touching the
    /// network. Prices that are non-finite or not strictly positive are
    /// dropped — the valuation layer treats those tickers as unquoted and
    /// falls back to cost basis.
    pub async fn fetch_quotes(&self, tickers: &[String]) -> Result<QuoteMap, CoreError> {
        if tickers.is_empty() {
            return Ok(QuoteMap::new());
        }

        let providers = self.registry.providers();
        if providers.is_empty() {
            return Err(CoreError::NoProvider);
        }

        let mut last_error = None;
        for provider in &providers {
            match provider.fetch_quotes(tickers).await {
                Ok(raw) => {
                    let mut quotes = QuoteMap::new();
                    for (ticker, price) in raw.iter() {
                        if price.is_finite() && price > 0.0 {
                            quotes.set(ticker, price);
                        } else {
                            warn!("Dropping unusable quote for {ticker}: {price}");
                        }
                    }
                    debug!(
                        "Resolved {} of {} quotes via {}",
                        quotes.len(),
                        tickers.len(),
                        provider.name()
                    );
                    return Ok(quotes);
                }
                Err(e) => {
                    warn!("Quote provider {} failed: {e}", provider.name());
                    last_error = Some(e);
                    // Try next provider
                }
            }
        }

        Err(last_error.unwrap_or(CoreError::NoProvider))
    }
}
