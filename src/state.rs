//! Application state management.

use crate::config::Config;
use crate::gex::{GeneratorParams, NamedLevels};
use crate::models::SymbolSnapshot;
use chrono::Utc;
use dashmap::DashMap;
use tracing::info;

/// Application state shared across all handlers.
#[derive(Debug)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Stored anchors keyed by upper-cased symbol.
    symbols: DashMap<String, SymbolSnapshot>,
}

impl AppState {
    /// Creates a new application state with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    /// Creates a new application state from configuration, registering the
    /// configured symbols.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        let state = Self {
            symbols: DashMap::new(),
            config: config.clone(),
        };

        for entry in &config.symbols {
            let snapshot =
                state.upsert_symbol(&entry.symbol, entry.reference_price, &entry.named_levels());
            info!(
                "Registered symbol {} with {} anchors",
                snapshot.symbol,
                snapshot.named_levels.count()
            );
        }

        state
    }

    /// Default generator parameters.
    #[must_use]
    pub fn params(&self) -> GeneratorParams {
        self.config.generator.params()
    }

    /// Baseline reference price.
    #[must_use]
    pub fn fallback_reference_price(&self) -> f64 {
        self.config.generator.fallback_reference_price
    }

    /// Normalizes a symbol for storage and lookup.
    #[must_use]
    pub fn normalize_symbol(symbol: &str) -> String {
        symbol.trim().to_uppercase()
    }

    /// Creates or replaces the anchors of a symbol.
    pub fn upsert_symbol(
        &self,
        symbol: &str,
        reference_price: Option<f64>,
        named: &NamedLevels,
    ) -> SymbolSnapshot {
        let symbol = Self::normalize_symbol(symbol);
        let snapshot = SymbolSnapshot {
            symbol: symbol.clone(),
            reference_price: reference_price.filter(|p| p.is_finite() && *p > 0.0),
            named_levels: named.sanitized(),
            updated_at: Utc::now(),
        };
        self.symbols.insert(symbol, snapshot.clone());
        snapshot
    }

    /// Gets the anchors of a symbol.
    #[must_use]
    pub fn get_symbol(&self, symbol: &str) -> Option<SymbolSnapshot> {
        self.symbols
            .get(&Self::normalize_symbol(symbol))
            .map(|entry| entry.value().clone())
    }

    /// Removes a symbol. Returns whether it existed.
    pub fn remove_symbol(&self, symbol: &str) -> bool {
        self.symbols
            .remove(&Self::normalize_symbol(symbol))
            .is_some()
    }

    /// All registered symbols, sorted alphabetically.
    #[must_use]
    pub fn list_symbols(&self) -> Vec<SymbolSnapshot> {
        let mut symbols: Vec<SymbolSnapshot> = self
            .symbols
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        symbols.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        symbols
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
