//! Order normalizer and book aggregator.
//!
//! `orders_to_ui_orders` converts raw signed orders (optionally
//! enriched with on-chain fill info) into the canonical `UIOrder`
//! view; `merge_by_price` folds those into price-level depth for
//! display. Aggregation is strictly a display artifact - the matcher
//! walks the raw `UIOrder` list, never the aggregated book.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use super::order::{OrderBookItem, OrderInfo, OrderSide, SignedOrder, UIOrder};
use super::token::{token_amount_in_units, Token};

/// Normalize raw signed orders into `UIOrder`s.
///
/// When both `orders_info` and `quote_token` are supplied the with-info
/// path is used: amounts are unit-scaled per side and the on-chain fill
/// is resolved. Otherwise side, size and a raw-ratio price are derived
/// from the order alone and `filled`/`status` stay unknown.
///
/// Orders with a zero maker or taker amount carry no exchange ratio
/// and are skipped; the relayer marks them invalid anyway.
///
/// # Panics
/// Panics when `orders_info` is present but its length differs from
/// `orders` - a programming/integration error, never user-recoverable.
pub fn orders_to_ui_orders(
    orders: &[SignedOrder],
    base_token: &Token,
    orders_info: Option<&[OrderInfo]>,
    quote_token: Option<&Token>,
) -> Vec<UIOrder> {
    match (orders_info, quote_token) {
        (Some(infos), Some(quote)) => with_orders_info(orders, infos, base_token, quote),
        _ => without_orders_info(orders, base_token),
    }
}

// The order info could not be retrieved from the chain.
fn without_orders_info(orders: &[SignedOrder], base_token: &Token) -> Vec<UIOrder> {
    let base_encoded = base_token.asset_data();

    orders
        .iter()
        .filter(|order| has_nonzero_amounts(order))
        .map(|order| {
            let side = if order.taker_asset_data == base_encoded {
                OrderSide::Buy
            } else {
                OrderSide::Sell
            };
            let (size, price) = match side {
                OrderSide::Sell => (
                    order.maker_asset_amount,
                    order.taker_asset_amount / order.maker_asset_amount,
                ),
                OrderSide::Buy => (
                    order.taker_asset_amount,
                    order.maker_asset_amount / order.taker_asset_amount,
                ),
            };

            UIOrder {
                raw_order: order.clone(),
                side,
                size,
                filled: None,
                price,
                status: None,
            }
        })
        .collect()
}

// The order info was retrieved from the chain and is aligned
// positionally with the orders list.
fn with_orders_info(
    orders: &[SignedOrder],
    orders_info: &[OrderInfo],
    base_token: &Token,
    quote_token: &Token,
) -> Vec<UIOrder> {
    assert_eq!(
        orders_info.len(),
        orders.len(),
        "orders info length does not match orders length: {} != {}",
        orders_info.len(),
        orders.len(),
    );

    let base_encoded = base_token.asset_data();
    let base_address = base_token.address.to_lowercase();

    orders
        .iter()
        .zip(orders_info)
        .filter(|(order, _)| has_nonzero_amounts(order))
        .map(|(order, info)| {
            let side = if order.taker_asset_data == base_encoded {
                OrderSide::Buy
            } else {
                OrderSide::Sell
            };
            let is_sell = side == OrderSide::Sell;
            let size = if is_sell {
                order.maker_asset_amount
            } else {
                order.taker_asset_amount
            };

            // The maker side delivers either base or quote; pick each
            // side's decimals accordingly before unit scaling.
            let maker_is_base = order
                .maker_asset_data
                .token_address()
                .is_some_and(|addr| addr.to_lowercase() == base_address);
            let (maker_decimals, taker_decimals) = if maker_is_base {
                (base_token.decimals, quote_token.decimals)
            } else {
                (quote_token.decimals, base_token.decimals)
            };
            let maker_amount_in_units =
                token_amount_in_units(order.maker_asset_amount, maker_decimals);
            let taker_amount_in_units =
                token_amount_in_units(order.taker_asset_amount, taker_decimals);

            // Sell fills are reported in taker-asset terms on chain;
            // proportional scaling converts them into maker-asset size.
            let filled = if is_sell {
                info.order_taker_asset_filled_amount * order.maker_asset_amount
                    / order.taker_asset_amount
            } else {
                info.order_taker_asset_filled_amount
            };
            let price = if is_sell {
                taker_amount_in_units / maker_amount_in_units
            } else {
                maker_amount_in_units / taker_amount_in_units
            };

            UIOrder {
                raw_order: order.clone(),
                side,
                size,
                filled: Some(filled),
                price,
                status: Some(info.order_status),
            }
        })
        .collect()
}

// An order with a zero maker or taker amount has no defined price.
fn has_nonzero_amounts(order: &SignedOrder) -> bool {
    !order.maker_asset_amount.is_zero() && !order.taker_asset_amount.is_zero()
}

/// Aggregate normalized orders into price-level depth.
///
/// Orders are grouped by their price rounded to `price_decimals`.
/// `Decimal` hashes and compares by value, so prices that differ only
/// in scale (0.05 vs 0.0500000) land in one level. Sizes are summed
/// and the summed fill is netted out, yielding the remaining resting
/// liquidity per level. No ordering guarantee: consumers sort by
/// price themselves.
pub fn merge_by_price(
    orders: &[UIOrder],
    price_decimals: u32,
    rounding: RoundingStrategy,
) -> Vec<OrderBookItem> {
    let mut levels: HashMap<Decimal, (OrderSide, Decimal, Decimal)> = HashMap::new();

    for order in orders {
        let rounded = order.price.round_dp_with_strategy(price_decimals, rounding);
        let entry = levels
            .entry(rounded)
            .or_insert((order.side, Decimal::ZERO, Decimal::ZERO));
        entry.1 += order.size;
        entry.2 += order.filled.unwrap_or_default();
    }

    levels
        .into_iter()
        .map(|(price, (side, size, filled))| OrderBookItem {
            side,
            price: price.normalize(),
            size: size - filled,
        })
        .collect()
}
