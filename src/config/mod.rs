//! Configuration Module - TOML-based Planner Configuration
//!
//! Loads and validates configuration from `planner.toml`. The display
//! rounding rule for book aggregation is deliberately a parameter, not
//! a constant: the precision depends on the UI the book feeds.

pub mod loader;

use rust_decimal::RoundingStrategy;
use serde::Deserialize;

/// Top-level planner configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerConfig {
  /// Book display parameters.
  #[serde(default)]
  pub display: DisplayConfig,
  /// Token identity parameters.
  #[serde(default)]
  pub tokens: TokenConfig,
  /// Order construction parameters.
  #[serde(default)]
  pub orders: OrderConfig,
}

/// Book display parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
  /// Decimals prices are rounded to when aggregating depth levels.
  #[serde(default = "default_price_decimals")]
  pub price_decimals: u32,
  /// Rounding rule applied at that precision.
  #[serde(default)]
  pub price_rounding: PriceRounding,
}

/// Rounding rule for display prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceRounding {
  /// Round half away from zero (conventional display rounding).
  #[default]
  HalfUp,
  /// Banker's rounding.
  HalfEven,
  /// Truncate toward zero.
  Truncate,
}

impl PriceRounding {
  /// The equivalent `rust_decimal` strategy.
  pub fn strategy(self) -> RoundingStrategy {
    match self {
      Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
      Self::HalfEven => RoundingStrategy::MidpointNearestEven,
      Self::Truncate => RoundingStrategy::ToZero,
    }
  }
}

/// Token identity parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
  /// Symbol of the wrapped-native token (compared case-insensitively).
  #[serde(default = "default_wrapped_native_symbol")]
  pub wrapped_native_symbol: String,
}

/// Order construction parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderConfig {
  /// Default expiration for new limit orders, in seconds from now.
  #[serde(default = "default_expiration_seconds")]
  pub default_expiration_seconds: u64,
}

// Default value functions for serde

fn default_price_decimals() -> u32 {
  7
}

fn default_wrapped_native_symbol() -> String {
  "WETH".to_string()
}

fn default_expiration_seconds() -> u64 {
  86_400
}

impl Default for DisplayConfig {
  fn default() -> Self {
    Self {
      price_decimals: default_price_decimals(),
      price_rounding: PriceRounding::default(),
    }
  }
}

impl Default for TokenConfig {
  fn default() -> Self {
    Self {
      wrapped_native_symbol: default_wrapped_native_symbol(),
    }
  }
}

impl Default for OrderConfig {
  fn default() -> Self {
    Self {
      default_expiration_seconds: default_expiration_seconds(),
    }
  }
}

impl Default for PlannerConfig {
  fn default() -> Self {
    Self {
      display: DisplayConfig::default(),
      tokens: TokenConfig::default(),
      orders: OrderConfig::default(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_match_display_convention() {
    let config = PlannerConfig::default();
    assert_eq!(config.display.price_decimals, 7);
    assert_eq!(config.display.price_rounding, PriceRounding::HalfUp);
    assert_eq!(config.tokens.wrapped_native_symbol, "WETH");
  }

  #[test]
  fn test_rounding_maps_to_decimal_strategy() {
    assert_eq!(
      PriceRounding::HalfEven.strategy(),
      RoundingStrategy::MidpointNearestEven
    );
    assert_eq!(PriceRounding::Truncate.strategy(), RoundingStrategy::ToZero);
  }

  #[test]
  fn test_toml_round_trip() {
    let raw = r#"
      [display]
      price_decimals = 5
      price_rounding = "half-even"

      [tokens]
      wrapped_native_symbol = "WMATIC"
    "#;
    let config: PlannerConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.display.price_decimals, 5);
    assert_eq!(config.display.price_rounding, PriceRounding::HalfEven);
    assert_eq!(config.tokens.wrapped_native_symbol, "WMATIC");
    // Unset sections fall back to defaults
    assert_eq!(config.orders.default_expiration_seconds, 86_400);
  }
}
