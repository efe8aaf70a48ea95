// contracts/fund_me/src/storage.rs
//
// Storage helpers for FundMe.
//
// Layout:
//   DataKey::Owner              → Address
//   DataKey::PriceFeed          → Address
//   DataKey::Token              → Address
//   DataKey::Funders            → Vec<Address>, one entry per fund call
//   DataKey::AmountFunded(addr) → i128, cumulative contribution

use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

use crate::Error;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    PriceFeed,
    Token,
    Funders,
    AmountFunded(Address),
}

// ─────────────────────────────────────────────────────────
// Instance configuration
// ─────────────────────────────────────────────────────────

/// Whether `init` has run. The owner entry doubles as the marker since
/// all three config entries are written together.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Owner)
}

pub fn save_owner(env: &Env, owner: &Address) {
    env.storage().persistent().set(&DataKey::Owner, owner);
}

/// Load the owner fixed at init. Panics with `Error::NotInitialized` if
/// `init` has not run.
pub fn load_owner(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn save_price_feed(env: &Env, feed: &Address) {
    env.storage().persistent().set(&DataKey::PriceFeed, feed);
}

pub fn load_price_feed(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::PriceFeed)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn save_token(env: &Env, token: &Address) {
    env.storage().persistent().set(&DataKey::Token, token);
}

pub fn load_token(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

// ─────────────────────────────────────────────────────────
// Funder list
// ─────────────────────────────────────────────────────────

/// The ordered funder list. Empty before the first fund call and after
/// every withdrawal.
pub fn load_funders(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Funders)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn funder_count(env: &Env) -> u32 {
    load_funders(env).len()
}

pub fn push_funder(env: &Env, funder: &Address) {
    let mut funders = load_funders(env);
    funders.push_back(funder.clone());
    env.storage().persistent().set(&DataKey::Funders, &funders);
}

/// Replace the funder list with an empty one.
pub fn clear_funders(env: &Env) {
    env.storage()
        .persistent()
        .set(&DataKey::Funders, &Vec::<Address>::new(env));
}

// ─────────────────────────────────────────────────────────
// Per-funder amounts
// ─────────────────────────────────────────────────────────

/// Cumulative amount contributed by `funder`. Returns 0 if no entry
/// exists; never-funded and withdrawn-away are indistinguishable.
pub fn amount_funded(env: &Env, funder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::AmountFunded(funder.clone()))
        .unwrap_or(0i128)
}

/// Add `amount` to `funder`'s cumulative record. Returns the new total.
pub fn add_amount_funded(env: &Env, funder: &Address, amount: i128) -> i128 {
    let new_total = amount_funded(env, funder) + amount;
    env.storage()
        .persistent()
        .set(&DataKey::AmountFunded(funder.clone()), &new_total);
    new_total
}

/// Drop `funder`'s record entirely; reads come back as 0 afterwards.
pub fn clear_amount_funded(env: &Env, funder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::AmountFunded(funder.clone()));
}
