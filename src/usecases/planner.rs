//! Step-Flow Planner - Trade Flow Orchestration
//!
//! Decides which step sub-flows a trade intent needs and in what
//! order: validates balances, sizes the on-chain market fill against
//! resting counter-orders, appends a residual limit-order sub-flow
//! when a limit price was supplied and liquidity fell short, and hands
//! the combined flow to the step sequencer. Planning is synchronous
//! and consumes an already-resolved snapshot; the only observable
//! effect of a successful plan is the (re)initialized sequence.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use crate::config::PlannerConfig;
use crate::domain::balance::{check_balances, AccountBalances};
use crate::domain::book::merge_by_price;
use crate::domain::error::PlannerError;
use crate::domain::matcher::build_market_fill;
use crate::domain::order::{OrderBookItem, OrderFeeData, OrderSide, SignedOrder, UIOrder};
use crate::domain::step::{Step, StepContext};
use crate::domain::token::{Token, TokenBalance};
use crate::ports::order_signer::{LimitOrderParams, OrderSigner};
use crate::ports::step_generator::{LimitStepArgs, MarketStepArgs, StepGenerator};

use super::sequencer::StepSequence;

/// Already-resolved market state a plan is computed over.
///
/// The planner never performs I/O mid-computation: balances and order
/// lists are fetched by collaborators beforehand. Open orders must be
/// in book priority order - buys sorted by price descending, sells
/// ascending.
#[derive(Debug, Clone)]
pub struct TradeSnapshot {
  pub base_token: Token,
  pub quote_token: Token,
  pub token_balances: Vec<TokenBalance>,
  pub weth_token_balance: TokenBalance,
  /// Native balance in base units.
  pub eth_balance: Decimal,
  pub open_buy_orders: Vec<UIOrder>,
  pub open_sell_orders: Vec<UIOrder>,
}

impl TradeSnapshot {
  fn balance_of(&self, token: &Token) -> Decimal {
    self
      .token_balances
      .iter()
      .find(|tb| tb.token.symbol == token.symbol)
      .map(|tb| tb.balance)
      .unwrap_or_default()
  }

  /// Collapse the snapshot into the validator's view of the account.
  fn account_balances(&self, wrapped_native_symbol: &str) -> AccountBalances {
    let quote_balance = if self
      .quote_token
      .symbol
      .eq_ignore_ascii_case(wrapped_native_symbol)
    {
      self.weth_token_balance.balance
    } else {
      self.balance_of(&self.quote_token)
    };
    AccountBalances {
      base_balance: self.balance_of(&self.base_token),
      quote_balance,
      eth_balance: self.eth_balance,
      weth_balance: self.weth_token_balance.balance,
    }
  }

  /// Counter-side resting orders for a trade of `side`.
  fn counter_orders(&self, side: OrderSide) -> &[UIOrder] {
    match side {
      OrderSide::Buy => &self.open_sell_orders,
      OrderSide::Sell => &self.open_buy_orders,
    }
  }
}

/// Plans trade flows and standalone wallet flows.
pub struct TradePlanner<G: StepGenerator> {
  /// Step generation port.
  generator: Arc<G>,
  config: PlannerConfig,
}

impl<G: StepGenerator> TradePlanner<G> {
  /// Create a new planner over a step generator.
  pub fn new(generator: Arc<G>, config: PlannerConfig) -> Self {
    Self { generator, config }
  }

  /// Plan a limit order flow.
  ///
  /// If resting counter-orders can be matched immediately, a
  /// market-fill sub-flow is built first; when the matched amount
  /// falls short of `amount`, a limit-order sub-flow for the
  /// remainder at the caller's price is appended.
  ///
  /// # Errors
  /// `InsufficientTokenBalance` when the trader cannot cover the
  /// trade; the sequence stays reset.
  #[instrument(skip(self, snapshot, sequence, fee_data), fields(side = %side, amount = %amount, price = %price))]
  pub fn start_buy_sell_limit_steps(
    &self,
    snapshot: &TradeSnapshot,
    sequence: &mut StepSequence,
    amount: Decimal,
    price: Decimal,
    expiration_time_seconds: u64,
    side: OrderSide,
    fee_data: &OrderFeeData,
  ) -> Result<(), PlannerError> {
    sequence.reset();
    self.check(snapshot, side, amount, price)?;

    let (total_filled, mut flow) =
      self.market_steps(snapshot, side, amount, Some(price), fee_data)?;

    if total_filled < amount {
      let remaining = amount - total_filled;
      debug!(%remaining, "Appending residual limit sub-flow");
      flow.extend(self.generator.buy_sell_limit_steps(&LimitStepArgs {
        base_token: &snapshot.base_token,
        quote_token: &snapshot.quote_token,
        token_balances: &snapshot.token_balances,
        weth_token_balance: &snapshot.weth_token_balance,
        amount: remaining,
        price,
        expiration_time_seconds,
        side,
        fee_data,
        market_fill_happened: total_filled > Decimal::ZERO,
      }));
    }

    info!(steps = flow.len(), "Limit order flow planned");
    sequence.start(flow);
    Ok(())
  }

  /// Plan a pure market order flow.
  ///
  /// # Errors
  /// `InsufficientOrdersAmount` when the book cannot fill `amount`
  /// and no `limit_price` fallback was supplied;
  /// `InsufficientTokenBalance` when the trader cannot cover the
  /// matched average price. Either way the sequence stays reset.
  #[instrument(skip(self, snapshot, sequence, fee_data), fields(side = %side, amount = %amount))]
  pub fn start_buy_sell_market_steps(
    &self,
    snapshot: &TradeSnapshot,
    sequence: &mut StepSequence,
    amount: Decimal,
    side: OrderSide,
    fee_data: &OrderFeeData,
    limit_price: Option<Decimal>,
  ) -> Result<(), PlannerError> {
    sequence.reset();
    let (_, flow) = self.market_steps(snapshot, side, amount, limit_price, fee_data)?;

    info!(steps = flow.len(), "Market order flow planned");
    sequence.start(flow);
    Ok(())
  }

  /// Plan a standalone allowance toggle for one token.
  pub fn start_toggle_token_lock_steps(
    &self,
    sequence: &mut StepSequence,
    token: Token,
    is_unlocked: bool,
  ) {
    sequence.start(vec![Step::ToggleTokenLock {
      token,
      is_unlocked,
      context: StepContext::Standalone,
    }]);
  }

  /// Plan a standalone ETH wrap up to `new_weth_balance`.
  pub fn start_wrap_eth_steps(
    &self,
    snapshot: &TradeSnapshot,
    sequence: &mut StepSequence,
    new_weth_balance: Decimal,
  ) {
    sequence.start(vec![Step::WrapEth {
      current_weth_balance: snapshot.weth_token_balance.balance,
      new_weth_balance,
      context: StepContext::Standalone,
    }]);
  }

  /// Build and sign a new limit order through the signer port.
  ///
  /// # Errors
  /// Wraps any signer failure as `SignedOrder` with the underlying
  /// message; never retried here.
  pub async fn create_signed_order<S: OrderSigner>(
    &self,
    signer: &S,
    params: &LimitOrderParams,
  ) -> Result<SignedOrder, PlannerError> {
    signer
      .build_and_sign_order(params)
      .await
      .map_err(|err| PlannerError::SignedOrder(err.to_string()))
  }

  /// Aggregate normalized orders into display depth levels using the
  /// configured rounding rule.
  pub fn aggregate_book(&self, orders: &[UIOrder]) -> Vec<OrderBookItem> {
    merge_by_price(
      orders,
      self.config.display.price_decimals,
      self.config.display.price_rounding.strategy(),
    )
  }

  /// The configured default expiration for new limit orders.
  pub fn default_expiration_seconds(&self) -> u64 {
    self.config.orders.default_expiration_seconds
  }

  // Size the market fill and build its sub-flow. Returns the total
  // base amount the fill covers alongside the steps.
  fn market_steps(
    &self,
    snapshot: &TradeSnapshot,
    side: OrderSide,
    amount: Decimal,
    limit_price: Option<Decimal>,
    fee_data: &OrderFeeData,
  ) -> Result<(Decimal, Vec<Step>), PlannerError> {
    let fill = build_market_fill(side, amount, limit_price, snapshot.counter_orders(side));
    if !fill.fully_filled && limit_price.is_none() {
      return Err(PlannerError::InsufficientOrdersAmount);
    }

    // The average price is unknown until matching completes, so the
    // balance gate runs again with the computed value.
    let avg_price = fill.average_price();
    self.check(snapshot, side, amount, avg_price)?;

    debug!(
      total_base = %fill.total_base_filled,
      avg_price = %avg_price,
      orders = fill.per_order_filled.len(),
      "Market fill sized"
    );

    let flow = if fill.total_quote_filled > Decimal::ZERO {
      self.generator.buy_sell_market_steps(&MarketStepArgs {
        base_token: &snapshot.base_token,
        quote_token: &snapshot.quote_token,
        token_balances: &snapshot.token_balances,
        weth_token_balance: &snapshot.weth_token_balance,
        eth_balance: snapshot.eth_balance,
        filled_base_amount: fill.total_base_filled,
        filled_quote_amount: fill.total_quote_filled,
        side,
        avg_price,
        limit_price,
        fee_data,
      })
    } else {
      Vec::new()
    };

    Ok((fill.total_base_filled, flow))
  }

  fn check(
    &self,
    snapshot: &TradeSnapshot,
    side: OrderSide,
    amount: Decimal,
    price: Decimal,
  ) -> Result<(), PlannerError> {
    let wrapped = &self.config.tokens.wrapped_native_symbol;
    check_balances(
      side,
      amount,
      price,
      &snapshot.base_token,
      &snapshot.quote_token,
      &snapshot.account_balances(wrapped),
      wrapped,
    )
  }
}
