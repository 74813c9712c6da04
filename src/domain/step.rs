//! Step variants.
//!
//! A `Step` is one atomic, possibly wallet-interactive operation
//! required to complete a trade. The planner creates them once as
//! immutable values; the sequencer tracks position; the external
//! executor runs them. A closed sum type with one variant per kind,
//! each carrying exactly the fields that kind's executor needs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order::{OrderFeeData, OrderSide};
use super::token::Token;

/// Whether a step runs on its own or inside a larger trade flow.
/// Affects messaging only, never semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepContext {
    Standalone,
    Flow,
}

/// Discriminant of a [`Step`], for logging and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    ToggleTokenLock,
    WrapEth,
    BuySellLimit,
    BuySellMarket,
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToggleTokenLock => write!(f, "toggle-token-lock"),
            Self::WrapEth => write!(f, "wrap-eth"),
            Self::BuySellLimit => write!(f, "buy-sell-limit"),
            Self::BuySellMarket => write!(f, "buy-sell-market"),
        }
    }
}

/// One pending operation in a trade flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Step {
    /// Approve or revoke the exchange proxy's allowance for a token.
    ToggleTokenLock {
        token: Token,
        /// Lock state the token is in before the step runs.
        is_unlocked: bool,
        context: StepContext,
    },
    /// Wrap native currency into its wrapped form.
    WrapEth {
        current_weth_balance: Decimal,
        new_weth_balance: Decimal,
        context: StepContext,
    },
    /// Sign and submit a new resting limit order.
    BuySellLimit {
        token: Token,
        amount: Decimal,
        price: Decimal,
        expiration_time_seconds: u64,
        side: OrderSide,
        fee_data: OrderFeeData,
        /// A market fill for part of the amount already happened
        /// earlier in this flow.
        is_partial_fill_continuation: bool,
    },
    /// Fill resting counter-orders at the matched average price.
    BuySellMarket {
        token: Token,
        amount: Decimal,
        side: OrderSide,
        /// Average fill price computed by the matcher.
        price: Decimal,
        /// The caller's limit bound, when one was supplied.
        limit_price: Option<Decimal>,
        fee_data: OrderFeeData,
    },
}

impl Step {
    pub fn kind(&self) -> StepKind {
        match self {
            Self::ToggleTokenLock { .. } => StepKind::ToggleTokenLock,
            Self::WrapEth { .. } => StepKind::WrapEth,
            Self::BuySellLimit { .. } => StepKind::BuySellLimit,
            Self::BuySellMarket { .. } => StepKind::BuySellMarket,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_step_kind_dispatch() {
        let step = Step::WrapEth {
            current_weth_balance: dec!(0),
            new_weth_balance: dec!(10),
            context: StepContext::Standalone,
        };
        assert_eq!(step.kind(), StepKind::WrapEth);
        assert_eq!(step.kind().to_string(), "wrap-eth");
    }

    #[test]
    fn test_limit_step_carries_continuation_flag() {
        let step = Step::BuySellLimit {
            token: Token::new("ZRX", "0x01", 18),
            amount: dec!(400),
            price: dec!(0.5),
            expiration_time_seconds: 2_000_000_000,
            side: OrderSide::Sell,
            fee_data: OrderFeeData::none(),
            is_partial_fill_continuation: true,
        };
        assert_eq!(step.kind(), StepKind::BuySellLimit);
    }
}
