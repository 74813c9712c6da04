//! Balance validator.
//!
//! Pre-trade gate run before any step is built. Selling requires
//! enough base token; buying requires enough quote token, where a
//! wrapped-native quote counts the native balance too since it can be
//! wrapped on demand mid-flow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PlannerError;
use super::order::OrderSide;
use super::token::{token_amount_in_units, units_in_token_amount, Token};

/// The trader's relevant balances, all in base units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountBalances {
    pub base_balance: Decimal,
    pub quote_balance: Decimal,
    pub eth_balance: Decimal,
    pub weth_balance: Decimal,
}

impl AccountBalances {
    /// Native plus wrapped-native, the spendable total for a WETH quote.
    pub fn total_eth_balance(&self) -> Decimal {
        self.eth_balance + self.weth_balance
    }
}

/// Check whether `balances` suffice for a trade of `amount` base units
/// at `price` (quote per base, unit terms).
///
/// # Errors
/// `InsufficientTokenBalance` naming the offending asset's symbol.
pub fn check_balances(
    side: OrderSide,
    amount: Decimal,
    price: Decimal,
    base_token: &Token,
    quote_token: &Token,
    balances: &AccountBalances,
    wrapped_native_symbol: &str,
) -> Result<(), PlannerError> {
    match side {
        OrderSide::Sell => {
            // When selling, the trader must hold enough base token.
            if balances.base_balance < amount {
                return Err(PlannerError::InsufficientTokenBalance {
                    symbol: base_token.symbol.clone(),
                });
            }
        }
        OrderSide::Buy => {
            let buy_amount = token_amount_in_units(amount, base_token.decimals);
            let total_amount = buy_amount * price;
            let total_amount_decimals =
                units_in_token_amount(total_amount, quote_token.decimals);

            // A wrapped-native quote can be covered by ETH + WETH;
            // any other quote needs the quote token itself.
            let quote_is_weth = is_wrapped_native(&quote_token.symbol, wrapped_native_symbol);
            let not_enough = if quote_is_weth {
                balances.total_eth_balance() < total_amount_decimals
            } else {
                balances.quote_balance < total_amount_decimals
            };
            if not_enough {
                return Err(PlannerError::InsufficientTokenBalance {
                    symbol: quote_token.symbol.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Whether `symbol` names the wrapped-native token.
pub fn is_wrapped_native(symbol: &str, wrapped_native_symbol: &str) -> bool {
    symbol.eq_ignore_ascii_case(wrapped_native_symbol)
}
