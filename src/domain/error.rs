//! Planner error taxonomy.
//!
//! Every error raised during planning is synchronous and must be
//! handled at the flow's entry point; none are swallowed.

use thiserror::Error;

/// Errors surfaced to the user by the planning flows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// The trader does not hold enough of the named asset;
    /// recoverable by topping up or approving.
    #[error("insufficient {symbol} balance for this trade")]
    InsufficientTokenBalance { symbol: String },

    /// A pure market order cannot be fully filled and no limit
    /// fallback price was supplied.
    #[error("there are not enough orders to fill the requested amount")]
    InsufficientOrdersAmount,

    /// Building or signing a new limit order failed in the external
    /// signing collaborator. Not retried; the underlying message is
    /// propagated verbatim.
    #[error("error signing the order: {0}")]
    SignedOrder(String),
}
