//! Matching and Aggregation Benchmarks — Hot-Path Performance Validation
//!
//! Benchmarks the domain functions that run on every book refresh and
//! every market-order preview.
//!
//! Run with: cargo bench --bench matcher_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use clob_trade_planner::domain::{
    build_market_fill, merge_by_price, orders_to_ui_orders, AssetData, OrderSide, SignedOrder,
    Token, UIOrder,
};

const BASE_ADDR: &str = "0x1d7022f5b17d2f8b695918fb48fa1089c9f85401";
const QUOTE_ADDR: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";

fn sell_order(maker_amount: Decimal, taker_amount: Decimal) -> SignedOrder {
    SignedOrder {
        maker_address: "0xmaker".to_string(),
        maker_asset_amount: maker_amount,
        taker_asset_amount: taker_amount,
        maker_asset_data: AssetData::erc20(BASE_ADDR),
        taker_asset_data: AssetData::erc20(QUOTE_ADDR),
        expiration_time_seconds: 2_000_000_000,
        signature: "0xsig".to_string(),
    }
}

fn ask_book(levels: usize) -> Vec<UIOrder> {
    let orders: Vec<SignedOrder> = (0..levels)
        .map(|i| {
            let price_bps = 5_000 + i as i64;
            sell_order(dec!(1000), Decimal::new(price_bps, 4) * dec!(1000))
        })
        .collect();
    orders_to_ui_orders(&orders, &Token::new("ZRX", BASE_ADDR, 18), None, None)
}

/// Benchmark normalizing a 500-order snapshot.
fn bench_normalize(c: &mut Criterion) {
    let orders: Vec<SignedOrder> = (0..500)
        .map(|i| sell_order(dec!(1000), dec!(500) + Decimal::from(i)))
        .collect();
    let base = Token::new("ZRX", BASE_ADDR, 18);

    c.bench_function("normalize_500_orders", |b| {
        b.iter(|| {
            let _ui = orders_to_ui_orders(black_box(&orders), black_box(&base), None, None);
        });
    });
}

/// Benchmark aggregating a 500-order book into price levels.
fn bench_merge_by_price(c: &mut Criterion) {
    let ui = ask_book(500);

    c.bench_function("merge_by_price_500_orders", |b| {
        b.iter(|| {
            let _book = merge_by_price(
                black_box(&ui),
                black_box(7),
                RoundingStrategy::MidpointAwayFromZero,
            );
        });
    });
}

/// Benchmark an unbounded market fill walking a deep book.
fn bench_market_fill(c: &mut Criterion) {
    let asks = ask_book(500);

    c.bench_function("market_fill_walk_500", |b| {
        b.iter(|| {
            let _fill = build_market_fill(
                OrderSide::Buy,
                black_box(dec!(400_000)),
                None,
                black_box(&asks),
            );
        });
    });
}

/// Benchmark a price-bounded fill that stops partway down the book.
fn bench_bounded_market_fill(c: &mut Criterion) {
    let asks = ask_book(500);

    c.bench_function("market_fill_bounded_500", |b| {
        b.iter(|| {
            let _fill = build_market_fill(
                OrderSide::Buy,
                black_box(dec!(400_000)),
                Some(black_box(dec!(0.52))),
                black_box(&asks),
            );
        });
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_merge_by_price,
    bench_market_fill,
    bench_bounded_market_fill,
);
criterion_main!(benches);
