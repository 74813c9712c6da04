//! Core order domain types.
//!
//! Defines the raw signed order as it arrives from the relayer, the
//! on-chain fill info that may accompany it, the normalized `UIOrder`
//! view produced by the book module, and the notification records
//! emitted when a trade flow completes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::token::AssetData;

/// Trade side, shared by domain and ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// On-chain lifecycle status of a signed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Invalid,
    InvalidMakerAssetAmount,
    InvalidTakerAssetAmount,
    Fillable,
    Expired,
    FullyFilled,
    Cancelled,
}

/// An externally signed order resting in the book.
///
/// Immutable once created: the book snapshot that holds it owns it and
/// never mutates it. Amounts are integer base-unit quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedOrder {
    pub maker_address: String,
    pub maker_asset_amount: Decimal,
    pub taker_asset_amount: Decimal,
    pub maker_asset_data: AssetData,
    pub taker_asset_data: AssetData,
    pub expiration_time_seconds: u64,
    pub signature: String,
}

/// On-chain status and cumulative fill for an order.
///
/// Keyed 1:1 by position with the orders list it was fetched for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub order_status: OrderStatus,
    pub order_hash: String,
    /// Cumulative taker-asset amount already filled, in base units.
    pub order_taker_asset_filled_amount: Decimal,
}

/// Normalized, read-only view of a signed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UIOrder {
    pub raw_order: SignedOrder,
    pub side: OrderSide,
    /// Order size in base-token base units.
    pub size: Decimal,
    /// Portion of `size` already consumed, when known.
    pub filled: Option<Decimal>,
    /// Unit price, quote per base.
    pub price: Decimal,
    pub status: Option<OrderStatus>,
}

impl UIOrder {
    /// Size still available to be matched.
    pub fn remaining_size(&self) -> Decimal {
        self.size - self.filled.unwrap_or_default()
    }
}

/// One aggregated depth level of the order book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookItem {
    pub side: OrderSide,
    /// Price rounded to the configured display precision.
    pub price: Decimal,
    /// Remaining resting size at this price level.
    pub size: Decimal,
}

/// Opaque fee parameters forwarded unchanged to the step generators.
///
/// The planner never interprets the contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFeeData(pub serde_json::Value);

impl OrderFeeData {
    pub fn none() -> Self {
        Self(serde_json::Value::Null)
    }
}

/// Kind of a user-facing trade notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Market,
    Limit,
}

/// A user-facing record of a submitted trade flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub amount: Decimal,
    pub token_symbol: String,
    pub side: OrderSide,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        amount: Decimal,
        token_symbol: impl Into<String>,
        side: OrderSide,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            token_symbol: token_symbol.into(),
            side,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token::AssetData;
    use rust_decimal_macros::dec;

    fn order() -> SignedOrder {
        SignedOrder {
            maker_address: "0xmaker".to_string(),
            maker_asset_amount: dec!(100),
            taker_asset_amount: dec!(50),
            maker_asset_data: AssetData::erc20("0x01"),
            taker_asset_data: AssetData::erc20("0x02"),
            expiration_time_seconds: 1_700_000_000,
            signature: "0xsig".to_string(),
        }
    }

    #[test]
    fn test_remaining_size_without_fill() {
        let ui = UIOrder {
            raw_order: order(),
            side: OrderSide::Sell,
            size: dec!(100),
            filled: None,
            price: dec!(0.5),
            status: None,
        };
        assert_eq!(ui.remaining_size(), dec!(100));
    }

    #[test]
    fn test_remaining_size_with_fill() {
        let ui = UIOrder {
            raw_order: order(),
            side: OrderSide::Sell,
            size: dec!(100),
            filled: Some(dec!(40)),
            price: dec!(0.5),
            status: Some(OrderStatus::Fillable),
        };
        assert_eq!(ui.remaining_size(), dec!(60));
    }

    #[test]
    fn test_order_side_display() {
        assert_eq!(format!("{}", OrderSide::Buy), "BUY");
        assert_eq!(format!("{}", OrderSide::Sell), "SELL");
    }

    #[test]
    fn test_notification_carries_token_and_side() {
        let n = Notification::new(NotificationKind::Market, dec!(10), "DAI", OrderSide::Buy);
        assert_eq!(n.kind, NotificationKind::Market);
        assert_eq!(n.token_symbol, "DAI");
        assert_eq!(n.side, OrderSide::Buy);
    }
}
