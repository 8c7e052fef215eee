//! # Price oracle gateway
//!
//! Converts native-currency amounts into a USD value scaled to 18 decimals
//! using an external price feed. The feed is reached only through the narrow
//! [`PriceFeed`] interface below; any contract exposing these two functions
//! can be wired in at `init`.

use soroban_sdk::{contractclient, contracttype, Env, I256};

use crate::types::LedgerConfig;
use crate::Error;

/// Decimal places of every USD value produced by [`convert`].
pub const USD_DECIMALS: u32 = 18;

/// Minimum USD value of a single donation: $5 at 18 decimals.
pub const MINIMUM_USD: i128 = 5 * 10i128.pow(USD_DECIMALS);

/// Latest quote published by the feed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// USD price of one whole native unit, scaled by `decimals()`.
    pub price: i128,
    /// Ledger timestamp of the quote.
    pub timestamp: u64,
}

/// Interface expected from the external price feed contract.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Decimal places of `PriceData::price`.
    fn decimals(env: Env) -> u32;

    /// Most recent quote, or `None` if the feed has none.
    fn latest_price(env: Env) -> Option<PriceData>;
}

/// Convert `amount` (native smallest units) into USD at 18 decimals.
///
/// Fails with `OracleUnavailable` when the feed cannot be invoked and with
/// `InvalidPrice` when it has no quote or quotes a non-positive price.
pub fn convert(env: &Env, config: &LedgerConfig, amount: i128) -> Result<i128, Error> {
    let feed = PriceFeedClient::new(env, &config.price_feed);

    let oracle_decimals = match feed.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => return Err(Error::OracleUnavailable),
    };

    let quote = match feed.try_latest_price() {
        Ok(Ok(Some(quote))) => quote,
        Ok(Ok(None)) => return Err(Error::InvalidPrice),
        _ => return Err(Error::OracleUnavailable),
    };

    if quote.price <= 0 {
        return Err(Error::InvalidPrice);
    }

    scale_to_usd(env, amount, quote.price, config.native_decimals, oracle_decimals)
        .ok_or(Error::Overflow)
}

/// `amount * price`, rescaled from `native_decimals + oracle_decimals`
/// decimal places to [`USD_DECIMALS`]. Returns `None` when the USD value
/// does not fit in an `i128`.
///
/// When scaling down, the product is formed in 256 bits so that large
/// amounts of high-precision tokens only fail if the result itself overflows.
pub fn scale_to_usd(
    env: &Env,
    amount: i128,
    price: i128,
    native_decimals: u32,
    oracle_decimals: u32,
) -> Option<i128> {
    let source_decimals = native_decimals.checked_add(oracle_decimals)?;

    if source_decimals <= USD_DECIMALS {
        let factor = 10i128.checked_pow(USD_DECIMALS - source_decimals)?;
        amount.checked_mul(price)?.checked_mul(factor)
    } else {
        let divisor = 10i128.checked_pow(source_decimals - USD_DECIMALS)?;
        I256::from_i128(env, amount)
            .mul(&I256::from_i128(env, price))
            .div(&I256::from_i128(env, divisor))
            .to_i128()
    }
}
