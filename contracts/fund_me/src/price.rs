// contracts/fund_me/src/price.rs
//
// Price oracle adapter: the consumed feed interface plus the fixed-point
// conversion of a raw token amount into its USD value.

use soroban_sdk::{contractclient, contracttype, Address, Env};

use crate::Error;

/// Decimal precision USD values are carried at, matching the funded
/// token's base unit.
pub const USD_DECIMALS: u32 = 7;

/// Feed answers older than this many ledger seconds are rejected.
pub const MAX_PRICE_AGE: u64 = 3600;

/// A single price feed answer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// Token price in USD, scaled by the feed's own decimals.
    pub price: i128,
    /// Ledger timestamp at which the answer was recorded.
    pub timestamp: u64,
}

/// External price feed contract interface.
///
/// Consumed, never implemented here; a settable mock lives behind the
/// `testutils` feature.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Decimal precision of `lastprice` answers.
    fn decimals(env: Env) -> u32;

    /// Most recent recorded price, or `None` if the feed has no answer.
    fn lastprice(env: Env) -> Option<PriceData>;
}

/// USD value of `amount` base units at the feed's current price.
///
/// Any feed failure (an unreachable contract, a missing answer, a
/// non-positive price, or an answer older than [`MAX_PRICE_AGE`]) is
/// reported as `OracleUnavailable` rather than converted into a
/// nonsense value.
pub fn conversion_rate(env: &Env, feed: &Address, amount: i128) -> Result<i128, Error> {
    let client = PriceFeedClient::new(env, feed);

    let decimals = match client.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => return Err(Error::OracleUnavailable),
    };
    let answer = match client.try_lastprice() {
        Ok(Ok(Some(answer))) => answer,
        _ => return Err(Error::OracleUnavailable),
    };

    if answer.price <= 0 {
        return Err(Error::OracleUnavailable);
    }
    let now = env.ledger().timestamp();
    if now.saturating_sub(answer.timestamp) > MAX_PRICE_AGE {
        return Err(Error::OracleUnavailable);
    }

    convert_to_usd(answer.price, decimals, amount)
}

/// Scale `price` from `feed_decimals` to [`USD_DECIMALS`], multiply by
/// `amount`, and divide out the base unit scale.
///
/// All arithmetic is checked; a would-be wrap is reported as
/// `ArithmeticOverflow`.
pub fn convert_to_usd(price: i128, feed_decimals: u32, amount: i128) -> Result<i128, Error> {
    let scaled_price = if feed_decimals >= USD_DECIMALS {
        let scale = 10i128
            .checked_pow(feed_decimals - USD_DECIMALS)
            .ok_or(Error::ArithmeticOverflow)?;
        price / scale
    } else {
        let scale = 10i128
            .checked_pow(USD_DECIMALS - feed_decimals)
            .ok_or(Error::ArithmeticOverflow)?;
        price.checked_mul(scale).ok_or(Error::ArithmeticOverflow)?
    };

    let unit = 10i128.pow(USD_DECIMALS);
    Ok(scaled_price
        .checked_mul(amount)
        .ok_or(Error::ArithmeticOverflow)?
        / unit)
}
