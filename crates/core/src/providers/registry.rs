use std::collections::HashMap;

use super::marketstack::MarketstackProvider;
use super::traits::QuoteProvider;

/// Registry of all available quote providers.
///
/// Registration order is fallback order: if the first provider fails, the
/// quote service tries the next one. New providers can be added without
/// modifying existing code.
pub struct QuoteProviderRegistry {
    providers: Vec<Box<dyn QuoteProvider>>,
}

impl QuoteProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a registry with all default providers whose API keys are
    /// configured.
    pub fn new_with_defaults(api_keys: &HashMap<String, String>) -> Self {
        let mut registry = Self::new();

        // Marketstack — batched end-of-day quotes, requires API key
        if let Some(key) = api_keys.get("marketstack") {
            registry.register(Box::new(MarketstackProvider::new(key.clone())));
        }

        registry
    }

    /// Register a new quote provider.
    pub fn register(&mut self, provider: Box<dyn QuoteProvider>) {
        self.providers.push(provider);
    }

    /// All registered providers, in fallback order.
    pub fn providers(&self) -> Vec<&dyn QuoteProvider> {
        self.providers.iter().map(|p| p.as_ref()).collect()
    }
}

impl Default for QuoteProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
