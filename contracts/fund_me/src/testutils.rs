// contracts/fund_me/src/testutils.rs
//
// Settable price feed implementing the `PriceFeed` interface, for unit
// tests and local deployments.

use soroban_sdk::{contract, contractimpl, symbol_short, Env, Symbol};

use crate::price::PriceData;

const DECIMALS: Symbol = symbol_short!("decimals");
const ANSWER: Symbol = symbol_short!("answer");

#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    /// Set the feed precision and an initial answer stamped with the
    /// current ledger time.
    pub fn init(env: Env, decimals: u32, price: i128) {
        env.storage().instance().set(&DECIMALS, &decimals);
        Self::set_price(env, price);
    }

    /// Replace the answer, stamped with the current ledger time.
    pub fn set_price(env: Env, price: i128) {
        let answer = PriceData {
            price,
            timestamp: env.ledger().timestamp(),
        };
        env.storage().instance().set(&ANSWER, &answer);
    }

    /// Replace the answer with an explicit timestamp, for staleness
    /// scenarios.
    pub fn set_answer(env: Env, price: i128, timestamp: u64) {
        let answer = PriceData { price, timestamp };
        env.storage().instance().set(&ANSWER, &answer);
    }

    /// Drop the stored answer so `lastprice` returns `None`.
    pub fn clear_answer(env: Env) {
        env.storage().instance().remove(&ANSWER);
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage().instance().get(&DECIMALS).unwrap_or(8)
    }

    pub fn lastprice(env: Env) -> Option<PriceData> {
        env.storage().instance().get(&ANSWER)
    }
}
