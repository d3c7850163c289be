use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::QuoteProvider;
use crate::errors::CoreError;
use crate::models::quote::QuoteMap;

const BASE_URL: &str = "https://api.marketstack.com/v1";

/// Marketstack API provider for end-of-day equity quotes.
///
/// - **Free tier**: 100 requests/month.
/// - **Requires**: API key (set via settings as "marketstack").
/// - **Batching**: `/eod/latest` accepts comma-joined symbols, so one call
///   covers the whole portfolio.
///
/// Invalid symbols come back with an empty or partial `data` array rather
/// than an error status; missing tickers are not failures.
pub struct MarketstackProvider {
    client: Client,
    access_key: String,
}

impl MarketstackProvider {
    pub fn new(access_key: String) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            access_key,
        }
    }
}

// ── Marketstack API response types ──────────────────────────────────

#[derive(Deserialize)]
struct EodLatestResponse {
    data: Option<Vec<EodBar>>,
}

#[derive(Deserialize)]
struct EodBar {
    symbol: String,
    close: Option<f64>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QuoteProvider for MarketstackProvider {
    fn name(&self) -> &str {
        "Marketstack"
    }

    async fn fetch_quotes(&self, tickers: &[String]) -> Result<QuoteMap, CoreError> {
        if tickers.is_empty() {
            return Ok(QuoteMap::new());
        }

        let symbols = tickers.join(",");
        let resp: EodLatestResponse = self
            .client
            .get(format!("{BASE_URL}/eod/latest"))
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("symbols", symbols.as_str()),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Marketstack".into(),
                message: format!("Failed to parse quote response: {e}"),
            })?;

        let bars = resp.data.ok_or_else(|| CoreError::Api {
            provider: "Marketstack".into(),
            message: "No quote data returned. API limit may be exceeded.".into(),
        })?;

        let mut quotes = QuoteMap::new();
        for bar in bars {
            if let Some(close) = bar.close {
                quotes.set(&bar.symbol, close);
            }
        }

        Ok(quotes)
    }
}
