//! Market matcher.
//!
//! Walks a pre-sorted list of counter-side orders consuming liquidity
//! up to a requested amount, optionally bounded by a limit price.
//! Callers supply the orders in book priority order (best price
//! first); no re-sorting happens here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order::{OrderSide, UIOrder};

/// Outcome of matching a requested amount against resting orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketFill {
    /// Amount consumed from each order walked, in walk order.
    pub per_order_filled: Vec<Decimal>,
    /// Total base-token base units consumed.
    pub total_base_filled: Decimal,
    /// Total consumed size weighted by each order's unit price.
    /// Divide by `total_base_filled` for the average fill price.
    pub total_quote_filled: Decimal,
    /// Whether the requested amount was fully satisfied.
    pub fully_filled: bool,
}

impl MarketFill {
    /// Average fill price, quote per base. Zero when nothing filled.
    pub fn average_price(&self) -> Decimal {
        if self.total_base_filled.is_zero() {
            Decimal::ZERO
        } else {
            self.total_quote_filled / self.total_base_filled
        }
    }
}

/// Match `amount` against `counter_orders`, stopping when the amount
/// is reached, the list is exhausted, or - with a `limit_price` - the
/// next order's price would exceed (Buy) or fall below (Sell) the
/// bound. The violating order is not consumed.
pub fn build_market_fill(
    side: OrderSide,
    amount: Decimal,
    limit_price: Option<Decimal>,
    counter_orders: &[UIOrder],
) -> MarketFill {
    let mut per_order_filled = Vec::new();
    let mut total_base_filled = Decimal::ZERO;
    let mut total_quote_filled = Decimal::ZERO;

    for order in counter_orders {
        if total_base_filled >= amount {
            break;
        }
        if let Some(bound) = limit_price {
            let beyond_bound = match side {
                OrderSide::Buy => order.price > bound,
                OrderSide::Sell => order.price < bound,
            };
            if beyond_bound {
                break;
            }
        }

        let take = order.remaining_size().min(amount - total_base_filled);
        per_order_filled.push(take);
        total_base_filled += take;
        total_quote_filled += take * order.price;
    }

    MarketFill {
        per_order_filled,
        total_base_filled,
        total_quote_filled,
        fully_filled: total_base_filled >= amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderSide, SignedOrder, UIOrder};
    use crate::domain::token::AssetData;
    use rust_decimal_macros::dec;

    fn resting(side: OrderSide, size: Decimal, filled: Option<Decimal>, price: Decimal) -> UIOrder {
        UIOrder {
            raw_order: SignedOrder {
                maker_address: "0xmaker".to_string(),
                maker_asset_amount: size,
                taker_asset_amount: size * price,
                maker_asset_data: AssetData::erc20("0x01"),
                taker_asset_data: AssetData::erc20("0x02"),
                expiration_time_seconds: 2_000_000_000,
                signature: "0xsig".to_string(),
            },
            side,
            size,
            filled,
            price,
            status: None,
        }
    }

    #[test]
    fn test_full_fill_within_single_order() {
        // Scenario A, unit-scaled: one resting sell of 100 at 0.5.
        let asks = vec![resting(OrderSide::Sell, dec!(100), None, dec!(0.5))];
        let fill = build_market_fill(OrderSide::Buy, dec!(40), None, &asks);

        assert!(fill.fully_filled);
        assert_eq!(fill.total_base_filled, dec!(40));
        assert_eq!(fill.average_price(), dec!(0.5));
        assert_eq!(fill.per_order_filled, vec![dec!(40)]);
    }

    #[test]
    fn test_walk_spans_multiple_orders() {
        let asks = vec![
            resting(OrderSide::Sell, dec!(30), None, dec!(0.5)),
            resting(OrderSide::Sell, dec!(30), None, dec!(0.6)),
            resting(OrderSide::Sell, dec!(30), None, dec!(0.7)),
        ];
        let fill = build_market_fill(OrderSide::Buy, dec!(70), None, &asks);

        assert!(fill.fully_filled);
        assert_eq!(fill.per_order_filled, vec![dec!(30), dec!(30), dec!(10)]);
        assert_eq!(fill.total_base_filled, dec!(70));
        // 30*0.5 + 30*0.6 + 10*0.7 = 40
        assert_eq!(fill.total_quote_filled, dec!(40));
    }

    #[test]
    fn test_exhausted_book_is_not_fully_filled() {
        let bids = vec![resting(OrderSide::Buy, dec!(600), None, dec!(0.5))];
        let fill = build_market_fill(OrderSide::Sell, dec!(1000), None, &bids);

        assert!(!fill.fully_filled);
        assert_eq!(fill.total_base_filled, dec!(600));
    }

    #[test]
    fn test_buy_stops_at_limit_price() {
        let asks = vec![
            resting(OrderSide::Sell, dec!(10), None, dec!(0.5)),
            resting(OrderSide::Sell, dec!(10), None, dec!(0.9)),
        ];
        let fill = build_market_fill(OrderSide::Buy, dec!(20), Some(dec!(0.6)), &asks);

        assert!(!fill.fully_filled);
        assert_eq!(fill.per_order_filled, vec![dec!(10)]);
        assert_eq!(fill.total_base_filled, dec!(10));
    }

    #[test]
    fn test_sell_stops_below_limit_price() {
        let bids = vec![
            resting(OrderSide::Buy, dec!(10), None, dec!(0.6)),
            resting(OrderSide::Buy, dec!(10), None, dec!(0.4)),
        ];
        let fill = build_market_fill(OrderSide::Sell, dec!(20), Some(dec!(0.5)), &bids);

        assert_eq!(fill.per_order_filled, vec![dec!(10)]);
        assert!(!fill.fully_filled);
    }

    #[test]
    fn test_partially_filled_orders_expose_remaining_only() {
        let asks = vec![resting(OrderSide::Sell, dec!(100), Some(dec!(80)), dec!(0.5))];
        let fill = build_market_fill(OrderSide::Buy, dec!(50), None, &asks);

        assert!(!fill.fully_filled);
        assert_eq!(fill.total_base_filled, dec!(20));
    }

    #[test]
    fn test_zero_fill_average_price_is_zero() {
        let fill = build_market_fill(OrderSide::Buy, dec!(10), None, &[]);
        assert_eq!(fill.average_price(), Decimal::ZERO);
        assert!(!fill.fully_filled);
        assert!(fill.per_order_filled.is_empty());
    }
}
