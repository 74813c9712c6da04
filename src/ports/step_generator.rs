//! Step Generator Port - Trade Sub-flow Construction Interface
//!
//! The planner decides which sub-flows a trade needs and in what
//! order; the generator decides what concrete steps each sub-flow
//! contains (unlocking allowances, wrapping ETH, the trade step
//! itself). Generation is synchronous and pure: it sees only the
//! already-resolved balances handed to it.

use rust_decimal::Decimal;

use crate::domain::order::{OrderFeeData, OrderSide};
use crate::domain::step::Step;
use crate::domain::token::{Token, TokenBalance};

/// Inputs for building the market-fill sub-flow.
#[derive(Debug)]
pub struct MarketStepArgs<'a> {
  pub base_token: &'a Token,
  pub quote_token: &'a Token,
  pub token_balances: &'a [TokenBalance],
  pub weth_token_balance: &'a TokenBalance,
  /// Native balance in base units.
  pub eth_balance: Decimal,
  /// Base-token base units the matcher will fill.
  pub filled_base_amount: Decimal,
  /// Matched size weighted by price (see `MarketFill`).
  pub filled_quote_amount: Decimal,
  pub side: OrderSide,
  /// Average fill price computed by the matcher, quote per base.
  pub avg_price: Decimal,
  /// The caller's limit bound, when one was supplied.
  pub limit_price: Option<Decimal>,
  pub fee_data: &'a OrderFeeData,
}

/// Inputs for building the residual limit-order sub-flow.
#[derive(Debug)]
pub struct LimitStepArgs<'a> {
  pub base_token: &'a Token,
  pub quote_token: &'a Token,
  pub token_balances: &'a [TokenBalance],
  pub weth_token_balance: &'a TokenBalance,
  /// Base-token base units left after the market fill.
  pub amount: Decimal,
  pub price: Decimal,
  pub expiration_time_seconds: u64,
  pub side: OrderSide,
  pub fee_data: &'a OrderFeeData,
  /// Whether a partial market fill precedes this sub-flow.
  /// Affects messaging and ordering only, not semantics.
  pub market_fill_happened: bool,
}

/// Trait for external step generators.
///
/// Implementors translate a sized trade into the ordered steps the
/// executor must run. The planner concatenates the returned lists.
pub trait StepGenerator: Send + Sync {
  /// Steps needed to fill resting counter-orders for the matched
  /// portion of a trade.
  fn buy_sell_market_steps(&self, args: &MarketStepArgs<'_>) -> Vec<Step>;

  /// Steps needed to place a new resting limit order for the
  /// unmatched remainder.
  fn buy_sell_limit_steps(&self, args: &LimitStepArgs<'_>) -> Vec<Step>;
}
