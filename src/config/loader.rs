//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `planner.toml`, validating all parameters, and
//! providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::PlannerConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if the file can't be read, TOML parsing
/// fails, or validation rules are violated.
pub fn load_config(path: &str) -> Result<PlannerConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config: PlannerConfig = toml::from_str(&content)
    .with_context(|| "Failed to parse planner.toml")?;

  validate_config(&config)?;

  info!(
    price_decimals = config.display.price_decimals,
    wrapped_native = %config.tokens.wrapped_native_symbol,
    default_expiration = config.orders.default_expiration_seconds,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Validate all configuration parameters.
pub fn validate_config(config: &PlannerConfig) -> Result<()> {
  // Decimal can only round up to 28 fractional digits
  anyhow::ensure!(
    config.display.price_decimals <= 28,
    "display.price_decimals must be at most 28, got {}",
    config.display.price_decimals
  );
  anyhow::ensure!(
    !config.tokens.wrapped_native_symbol.is_empty(),
    "tokens.wrapped_native_symbol must not be empty"
  );
  anyhow::ensure!(
    config.orders.default_expiration_seconds > 0,
    "orders.default_expiration_seconds must be positive"
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_default_config_validates() {
    assert!(validate_config(&PlannerConfig::default()).is_ok());
  }

  #[test]
  fn test_empty_wrapped_symbol_rejected() {
    let mut config = PlannerConfig::default();
    config.tokens.wrapped_native_symbol = String::new();
    assert!(validate_config(&config).is_err());
  }

  #[test]
  fn test_excessive_precision_rejected() {
    let mut config = PlannerConfig::default();
    config.display.price_decimals = 40;
    assert!(validate_config(&config).is_err());
  }
}
