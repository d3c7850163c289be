use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User-configurable settings, owned by the embedding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// The currency in which all portfolio values are displayed (e.g., "EUR", "USD").
    pub display_currency: String,

    /// Optional API keys for quote providers that require them.
    /// Keys: provider name (e.g., "marketstack").
    /// Values: the API key string.
    pub api_keys: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_currency: "EUR".to_string(),
            api_keys: HashMap::new(),
        }
    }
}
