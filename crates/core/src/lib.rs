pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::NaiveDate;
use models::{
    holding::Holding,
    quote::QuoteMap,
    settings::Settings,
    summary::PortfolioSummary,
    transaction::{TransactionRecord, TransactionSortOrder},
};
use providers::registry::QuoteProviderRegistry;
use services::{
    aggregation_service::AggregationService, format_service::FormatService,
    quote_service::QuoteService, valuation_service::ValuationService,
    view_service::{SortDirection, SortField, ViewService},
};

use errors::CoreError;

/// Main entry point for the Depot Tracker core library.
/// Holds the transaction history and all services needed to value it.
///
/// The services themselves are pure; this facade owns the state lifecycle
/// (transactions, settings) so the embedding UI does not have to.
#[must_use]
pub struct DepotTracker {
    transactions: Vec<TransactionRecord>,
    settings: Settings,
    aggregation_service: AggregationService,
    valuation_service: ValuationService,
    view_service: ViewService,
    format_service: FormatService,
    quote_service: QuoteService,
}

impl std::fmt::Debug for DepotTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepotTracker")
            .field("transactions", &self.transactions.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl DepotTracker {
    /// Create a tracker with no transaction history and default settings.
    pub fn create_new() -> Self {
        Self::build(Vec::new(), Settings::default())
    }

    /// Create a tracker from the transaction JSON array the statement
    /// backend serves (`GET /api/transactions/{clientId}`).
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let transactions: Vec<TransactionRecord> = serde_json::from_str(json)?;
        Ok(Self::build(transactions, Settings::default()))
    }

    // ── Transaction Management ──────────────────────────────────────

    /// Replace the transaction history with the records in a JSON array.
    /// Returns the number of records loaded.
    pub fn load_transactions_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let transactions: Vec<TransactionRecord> = serde_json::from_str(json)?;
        let count = transactions.len();
        self.transactions = transactions;
        Ok(count)
    }

    /// Append transactions (e.g., after another statement upload finished
    /// processing).
    pub fn add_transactions(&mut self, transactions: Vec<TransactionRecord>) {
        self.transactions.extend(transactions);
    }

    /// All transactions in load order.
    #[must_use]
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// Get the total number of transactions.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Distinct client identifiers present in the history, sorted.
    #[must_use]
    pub fn client_ids(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut ids: Vec<String> = self
            .transactions
            .iter()
            .filter_map(|tx| {
                if seen.insert(&tx.client_id) {
                    Some(tx.client_id.clone())
                } else {
                    None
                }
            })
            .collect();
        ids.sort();
        ids
    }

    /// Transactions belonging to one client, in load order.
    #[must_use]
    pub fn transactions_for_client(&self, client_id: &str) -> Vec<&TransactionRecord> {
        self.transactions
            .iter()
            .filter(|tx| tx.client_id == client_id)
            .collect()
    }

    /// Get transactions sorted for the history view.
    #[must_use]
    pub fn transactions_sorted(&self, order: &TransactionSortOrder) -> Vec<&TransactionRecord> {
        let mut transactions: Vec<&TransactionRecord> = self.transactions.iter().collect();
        match order {
            TransactionSortOrder::DateDesc => transactions.sort_by(|a, b| b.date.cmp(&a.date)),
            TransactionSortOrder::DateAsc => transactions.sort_by(|a, b| a.date.cmp(&b.date)),
            TransactionSortOrder::ValueDesc => transactions.sort_by(|a, b| {
                b.total_value
                    .partial_cmp(&a.total_value)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            TransactionSortOrder::ValueAsc => transactions.sort_by(|a, b| {
                a.total_value
                    .partial_cmp(&b.total_value)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            TransactionSortOrder::AssetAsc => transactions.sort_by(|a, b| a.asset.cmp(&b.asset)),
            TransactionSortOrder::AssetDesc => transactions.sort_by(|a, b| b.asset.cmp(&a.asset)),
        }
        transactions
    }

    /// Search transactions by matching the query against instrument name,
    /// ISIN, and ticker (case-insensitive).
    #[must_use]
    pub fn search_transactions(&self, query: &str) -> Vec<&TransactionRecord> {
        let q = query.to_lowercase();
        self.transactions
            .iter()
            .filter(|tx| {
                tx.asset.to_lowercase().contains(&q)
                    || tx.isin.to_lowercase().contains(&q)
                    || tx.ticker.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Get the date of the earliest transaction in the history.
    #[must_use]
    pub fn earliest_transaction_date(&self) -> Option<NaiveDate> {
        self.transactions.iter().map(|tx| tx.date).min()
    }

    /// Get the date of the most recent transaction in the history.
    #[must_use]
    pub fn latest_transaction_date(&self) -> Option<NaiveDate> {
        self.transactions.iter().map(|tx| tx.date).max()
    }

    // ── Holdings & Valuation ────────────────────────────────────────

    /// Aggregate the full transaction history into holdings (one per
    /// instrument, in order of first appearance).
    #[must_use]
    pub fn holdings(&self) -> Vec<Holding> {
        self.aggregation_service.aggregate(&self.transactions)
    }

    /// Holdings with live quotes merged in. Holdings whose ticker has no
    /// usable quote keep their cost-basis figures only.
    #[must_use]
    pub fn enriched_holdings(&self, quotes: &QuoteMap) -> Vec<Holding> {
        let holdings = self.holdings();
        self.valuation_service.enrich(&holdings, quotes)
    }

    /// Full portfolio summary: cost basis, current value, profit/loss, and
    /// the enriched holdings behind the totals.
    #[must_use]
    pub fn summary(&self, quotes: &QuoteMap) -> PortfolioSummary {
        let holdings = self.holdings();
        self.valuation_service
            .summarize(&holdings, quotes, &self.settings.display_currency)
    }

    // ── View Projection ─────────────────────────────────────────────

    /// The type-filter options for the current holdings: `"All"` first,
    /// then each distinct instrument type alphabetically.
    #[must_use]
    pub fn unique_asset_types(&self) -> Vec<String> {
        let holdings = self.holdings();
        self.view_service.unique_asset_types(&holdings)
    }

    /// Holdings as the portfolio table presents them: filtered by
    /// instrument type, then ordered by a column.
    #[must_use]
    pub fn holdings_view(
        &self,
        type_filter: &str,
        field: SortField,
        direction: SortDirection,
    ) -> Vec<Holding> {
        let holdings = self.holdings();
        let filtered = self.view_service.filter_by_type(&holdings, type_filter);
        self.view_service.sort(&filtered, field, direction)
    }

    // ── Quotes ──────────────────────────────────────────────────────

    /// Distinct non-empty tickers of the current holdings — the symbols a
    /// quote refresh has to cover.
    #[must_use]
    pub fn held_tickers(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.holdings()
            .into_iter()
            .filter(|h| !h.ticker.is_empty())
            .filter_map(|h| {
                if seen.insert(h.ticker.to_uppercase()) {
                    Some(h.ticker)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Fetch latest quotes for all held tickers in one batched call.
    ///
    /// The returned map can be handed to `enriched_holdings` / `summary`
    /// any number of times; a failed refresh leaves the cost-basis
    /// valuation usable.
    pub async fn refresh_quotes(&self) -> Result<QuoteMap, CoreError> {
        let tickers = self.held_tickers();
        self.quote_service.fetch_quotes(&tickers).await
    }

    /// Check if at least one quote provider is configured.
    #[must_use]
    pub fn has_quote_provider(&self) -> bool {
        self.quote_service.has_provider()
    }

    /// Get the names of configured quote providers, in fallback order.
    #[must_use]
    pub fn quote_provider_names(&self) -> Vec<String> {
        self.quote_service.provider_names()
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Set the display currency (e.g., "EUR", "USD").
    /// Currency code must be a 3-letter alphabetic string.
    pub fn set_display_currency(&mut self, currency: String) -> Result<(), CoreError> {
        let trimmed = currency.trim().to_uppercase();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid currency code '{currency}': must be exactly 3 ASCII letters (e.g., EUR, USD)"
            )));
        }
        self.settings.display_currency = trimmed;
        Ok(())
    }

    /// Get current settings.
    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    /// Set an API key for a quote provider (e.g., "marketstack").
    /// Rebuilds the provider registry so the new key takes effect immediately.
    pub fn set_api_key(&mut self, provider: String, key: String) {
        self.settings.api_keys.insert(provider, key);

        let registry = QuoteProviderRegistry::new_with_defaults(&self.settings.api_keys);
        self.quote_service = QuoteService::new(registry);
    }

    /// Remove an API key for a quote provider.
    /// Rebuilds the provider registry so the removal takes effect immediately.
    pub fn remove_api_key(&mut self, provider: &str) -> bool {
        let removed = self.settings.api_keys.remove(provider).is_some();
        if removed {
            let registry = QuoteProviderRegistry::new_with_defaults(&self.settings.api_keys);
            self.quote_service = QuoteService::new(registry);
        }
        removed
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export all transactions as a JSON string (the same shape
    /// `load_transactions_from_json` accepts).
    pub fn export_transactions_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.transactions).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize transactions to JSON: {e}"))
        })
    }

    /// Export all transactions as a CSV string.
    /// Columns: clientId,transactionId,date,asset,isin,ticker,assetType,quantity,unitPrice,totalValue
    #[must_use]
    pub fn export_transactions_to_csv(&self) -> String {
        let mut csv = String::from(
            "clientId,transactionId,date,asset,isin,ticker,assetType,quantity,unitPrice,totalValue\n",
        );
        for tx in &self.transactions {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{}\n",
                escape_csv(&tx.client_id),
                escape_csv(&tx.transaction_id),
                tx.date,
                escape_csv(&tx.asset),
                escape_csv(&tx.isin),
                escape_csv(&tx.ticker),
                escape_csv(&tx.asset_type),
                tx.quantity,
                tx.unit_price,
                tx.total_value,
            ));
        }
        csv
    }

    // ── Display Formatting ──────────────────────────────────────────

    /// Format a monetary value in the configured display currency.
    #[must_use]
    pub fn format_currency(&self, value: f64) -> String {
        self.format_service
            .format_currency(value, &self.settings.display_currency)
    }

    /// Format a percentage with an explicit sign: `+0.00%`, `-5.75%`.
    #[must_use]
    pub fn format_percentage(&self, value: f64) -> String {
        self.format_service.format_percentage(value)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(transactions: Vec<TransactionRecord>, settings: Settings) -> Self {
        let registry = QuoteProviderRegistry::new_with_defaults(&settings.api_keys);
        Self {
            transactions,
            settings,
            aggregation_service: AggregationService::new(),
            valuation_service: ValuationService::new(),
            view_service: ViewService::new(),
            format_service: FormatService::new(),
            quote_service: QuoteService::new(registry),
        }
    }
}

/// Quote fields containing commas, quotes, or newlines for CSV output.
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
