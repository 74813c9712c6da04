//! Domain layer - Core planning logic and models.
//!
//! This module contains the pure planning logic for the trade planner.
//! No I/O happens here (hexagonal architecture inner ring): every
//! function is synchronous and operates on already-resolved snapshots.
//! All types are serializable and testable in isolation.

pub mod balance;
pub mod book;
pub mod error;
pub mod matcher;
pub mod order;
pub mod step;
pub mod token;

// Re-export core types for convenience
pub use balance::{check_balances, AccountBalances};
pub use book::{merge_by_price, orders_to_ui_orders};
pub use error::PlannerError;
pub use matcher::{build_market_fill, MarketFill};
pub use order::{
    Notification, NotificationKind, OrderBookItem, OrderFeeData, OrderInfo, OrderSide,
    OrderStatus, SignedOrder, UIOrder,
};
pub use step::{Step, StepContext, StepKind};
pub use token::{token_amount_in_units, units_in_token_amount, AssetData, Token, TokenBalance};
