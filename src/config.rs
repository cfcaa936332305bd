//! Configuration module for loading and parsing TOML configuration files.

use crate::gex::{GeneratorParams, NamedLevels};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Level generator defaults.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Symbols registered at startup.
    #[serde(default)]
    pub symbols: Vec<SymbolConfig>,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port number to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Level generator defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Strike spacing.
    pub interval: f64,
    /// Half-width of the ladder.
    pub span: f64,
    /// Magnitude above which an unanchored strike is a wall.
    pub wall_threshold: f64,
    /// Magnitude above which an unanchored strike is a magnet.
    pub magnet_threshold: f64,
    /// Noise scale constant.
    pub noise_scale: f64,
    /// Distance over which magnitude fades.
    pub decay_width: f64,
    /// Baseline used when neither a reference price nor a flip is known.
    pub fallback_reference_price: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let params = GeneratorParams::default();
        Self {
            interval: params.interval,
            span: params.span,
            wall_threshold: params.wall_threshold,
            magnet_threshold: params.magnet_threshold,
            noise_scale: params.noise_scale,
            decay_width: params.decay_width,
            fallback_reference_price: 4500.0,
        }
    }
}

impl GeneratorConfig {
    /// Generator parameters described by this section.
    #[must_use]
    pub fn params(&self) -> GeneratorParams {
        GeneratorParams {
            interval: self.interval,
            span: self.span,
            wall_threshold: self.wall_threshold,
            magnet_threshold: self.magnet_threshold,
            noise_scale: self.noise_scale,
            decay_width: self.decay_width,
        }
    }
}

/// A symbol seeded at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolConfig {
    /// Symbol (e.g., "SPX").
    pub symbol: String,
    /// Live reference price, if known.
    #[serde(default)]
    pub reference_price: Option<f64>,
    /// Gamma flip price.
    #[serde(default)]
    pub gamma_flip: Option<f64>,
    /// Call wall price.
    #[serde(default)]
    pub call_wall: Option<f64>,
    /// Put wall price.
    #[serde(default)]
    pub put_wall: Option<f64>,
    /// High-volume level price.
    #[serde(default)]
    pub high_volume_level: Option<f64>,
    /// Max pain price.
    #[serde(default)]
    pub max_pain: Option<f64>,
}

impl SymbolConfig {
    /// Anchors described by this entry.
    #[must_use]
    pub fn named_levels(&self) -> NamedLevels {
        NamedLevels {
            gamma_flip: self.gamma_flip,
            call_wall: self.call_wall,
            put_wall: self.put_wall,
            high_volume_level: self.high_volume_level,
            max_pain: self.max_pain,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        self.generator
            .params()
            .validate()
            .map_err(|e| ConfigError::InvalidValue(format!("generator: {}", e)))?;

        let fallback = self.generator.fallback_reference_price;
        if !fallback.is_finite() || fallback <= 0.0 {
            return Err(ConfigError::InvalidValue(
                "generator fallback_reference_price must be positive".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &self.symbols {
            if entry.symbol.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "symbol cannot be empty".to_string(),
                ));
            }
            if !seen.insert(entry.symbol.trim().to_uppercase()) {
                return Err(ConfigError::InvalidValue(format!(
                    "symbol {} configured twice",
                    entry.symbol
                )));
            }
            if let Some(price) = entry.reference_price
                && (!price.is_finite() || price < 0.0)
            {
                return Err(ConfigError::InvalidValue(format!(
                    "symbol {} reference_price must be non-negative",
                    entry.symbol
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 3000

[generator]
interval = 5.0
span = 100.0
fallback_reference_price = 4200.0

[[symbols]]
symbol = "SPX"
reference_price = 4600.0
gamma_flip = 4600.0
call_wall = 4650.0
put_wall = 4550.0
high_volume_level = 4620.0
max_pain = 4580.0

[[symbols]]
symbol = "NDX"
gamma_flip = 15800.0
"#;

        let config = Config::parse(toml_content).expect("should parse");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.generator.interval, 5.0);
        assert_eq!(config.generator.span, 100.0);
        assert_eq!(config.generator.wall_threshold, 0.5);
        assert_eq!(config.generator.fallback_reference_price, 4200.0);
        assert_eq!(config.symbols.len(), 2);
        assert_eq!(config.symbols[0].named_levels().call_wall, Some(4650.0));
        assert_eq!(config.symbols[1].reference_price, None);
        assert_eq!(config.symbols[1].named_levels().count(), 1);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = Config::parse("").expect("should parse");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.generator.params(), GeneratorParams::default());
        assert!(config.symbols.is_empty());
    }

    #[test]
    fn test_validation_bad_interval() {
        let result = Config::parse("[generator]\ninterval = 0.0\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_validation_bad_fallback() {
        let result = Config::parse("[generator]\nfallback_reference_price = -1.0\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_validation_duplicate_symbol() {
        let toml_content = r#"
[[symbols]]
symbol = "SPX"

[[symbols]]
symbol = "spx"
"#;
        let result = Config::parse(toml_content);
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_validation_empty_symbol() {
        let config = Config {
            symbols: vec![SymbolConfig {
                symbol: " ".to_string(),
                reference_price: None,
                gamma_flip: None,
                call_wall: None,
                put_wall: None,
                high_volume_level: None,
                max_pain: None,
            }],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let result = Config::parse("[server\nport = 1");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_bundled_config() {
        let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml"))
            .expect("bundled config should load");
        assert_eq!(config.generator.params(), GeneratorParams::default());
        assert!(config.symbols.iter().any(|s| s.symbol == "SPX"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/gex-config.toml");
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
