//! Reference step generator.
//!
//! Builds each trade sub-flow as: unlock the spent token if its
//! allowance is locked, wrap ETH if a WETH quote falls short, then
//! the trade step itself. Embedding applications with richer wallet
//! flows implement `StepGenerator` themselves.

use rust_decimal::Decimal;

use crate::domain::order::OrderSide;
use crate::domain::step::{Step, StepContext};
use crate::domain::token::{token_amount_in_units, units_in_token_amount, Token, TokenBalance};
use crate::ports::step_generator::{LimitStepArgs, MarketStepArgs, StepGenerator};

/// Unlock-if-locked, wrap-if-short, then trade.
#[derive(Debug, Default)]
pub struct BasicStepGenerator;

impl BasicStepGenerator {
    pub fn new() -> Self {
        Self
    }

    // The token a trade of `side` spends: base when selling, quote
    // when buying.
    fn spent_token<'a>(side: OrderSide, base: &'a Token, quote: &'a Token) -> &'a Token {
        match side {
            OrderSide::Sell => base,
            OrderSide::Buy => quote,
        }
    }

    fn unlock_step(
        token: &Token,
        token_balances: &[TokenBalance],
        weth_token_balance: &TokenBalance,
    ) -> Option<Step> {
        let entry = if token.symbol == weth_token_balance.token.symbol {
            Some(weth_token_balance)
        } else {
            token_balances.iter().find(|tb| tb.token.symbol == token.symbol)
        };
        match entry {
            Some(tb) if !tb.is_unlocked => Some(Step::ToggleTokenLock {
                token: token.clone(),
                is_unlocked: false,
                context: StepContext::Flow,
            }),
            _ => None,
        }
    }

    // WETH needed to cover a buy of `base_amount` base units at
    // `price`, in quote base units.
    fn quote_amount_needed(
        base_amount: Decimal,
        price: Decimal,
        base: &Token,
        quote: &Token,
    ) -> Decimal {
        let base_units = token_amount_in_units(base_amount, base.decimals);
        units_in_token_amount(base_units * price, quote.decimals)
    }

    fn wrap_step(
        side: OrderSide,
        base_amount: Decimal,
        price: Decimal,
        base: &Token,
        quote: &Token,
        weth_token_balance: &TokenBalance,
    ) -> Option<Step> {
        if side != OrderSide::Buy || quote.symbol != weth_token_balance.token.symbol {
            return None;
        }
        let needed = Self::quote_amount_needed(base_amount, price, base, quote);
        if weth_token_balance.balance >= needed {
            return None;
        }
        Some(Step::WrapEth {
            current_weth_balance: weth_token_balance.balance,
            new_weth_balance: needed,
            context: StepContext::Flow,
        })
    }
}

impl StepGenerator for BasicStepGenerator {
    fn buy_sell_market_steps(&self, args: &MarketStepArgs<'_>) -> Vec<Step> {
        let mut steps = Vec::new();

        let spent = Self::spent_token(args.side, args.base_token, args.quote_token);
        if let Some(step) =
            Self::unlock_step(spent, args.token_balances, args.weth_token_balance)
        {
            steps.push(step);
        }
        if let Some(step) = Self::wrap_step(
            args.side,
            args.filled_base_amount,
            args.avg_price,
            args.base_token,
            args.quote_token,
            args.weth_token_balance,
        ) {
            steps.push(step);
        }

        steps.push(Step::BuySellMarket {
            token: args.base_token.clone(),
            amount: args.filled_base_amount,
            side: args.side,
            price: args.avg_price,
            limit_price: args.limit_price,
            fee_data: args.fee_data.clone(),
        });
        steps
    }

    fn buy_sell_limit_steps(&self, args: &LimitStepArgs<'_>) -> Vec<Step> {
        let mut steps = Vec::new();

        let spent = Self::spent_token(args.side, args.base_token, args.quote_token);
        if let Some(step) =
            Self::unlock_step(spent, args.token_balances, args.weth_token_balance)
        {
            steps.push(step);
        }
        if let Some(step) = Self::wrap_step(
            args.side,
            args.amount,
            args.price,
            args.base_token,
            args.quote_token,
            args.weth_token_balance,
        ) {
            steps.push(step);
        }

        steps.push(Step::BuySellLimit {
            token: args.base_token.clone(),
            amount: args.amount,
            price: args.price,
            expiration_time_seconds: args.expiration_time_seconds,
            side: args.side,
            fee_data: args.fee_data.clone(),
            is_partial_fill_continuation: args.market_fill_happened,
        });
        steps
    }
}
