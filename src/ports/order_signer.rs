//! Order Signer Port - Limit Order Construction and Signing
//!
//! Builds a new limit order from trade parameters and has the user's
//! wallet sign it. Cryptographic signing lives entirely behind this
//! boundary.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::order::{OrderSide, SignedOrder};

/// Parameters for building a new limit order.
#[derive(Debug, Clone)]
pub struct LimitOrderParams {
  /// The trader's account address.
  pub account: String,
  /// Amount in base-token base units.
  pub amount: Decimal,
  /// Unit price, quote per base.
  pub price: Decimal,
  pub expiration_time_seconds: u64,
  pub base_token_address: String,
  pub quote_token_address: String,
  /// Exchange contract the order is addressed to.
  pub exchange_address: String,
  pub side: OrderSide,
}

/// Trait for external order signers.
#[async_trait]
pub trait OrderSigner: Send + Sync + 'static {
  /// Build and sign a limit order.
  ///
  /// # Errors
  /// Any failure (including the user rejecting the signature prompt)
  /// is wrapped by the planner as `PlannerError::SignedOrder` and not
  /// retried.
  async fn build_and_sign_order(&self, params: &LimitOrderParams) -> anyhow::Result<SignedOrder>;
}
