use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::quote::QuoteMap;

/// Trait abstraction for all market-quote providers.
///
/// Each market-data API implements this trait. If an API stops working or
/// changes, we replace only that one implementation — the rest of the
/// codebase is untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the latest price for every ticker in one batched request.
    ///
    /// Tickers the provider cannot quote are simply absent from the
    /// result; only transport and protocol failures are errors.
    async fn fetch_quotes(&self, tickers: &[String]) -> Result<QuoteMap, CoreError>;
}
