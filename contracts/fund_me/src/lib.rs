#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env,
};

mod events;
mod price;
mod storage;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod invariants;

pub use price::{PriceData, PriceFeed, PriceFeedClient, MAX_PRICE_AGE, USD_DECIMALS};

/// Smallest accepted contribution value, in USD at [`USD_DECIMALS`]
/// precision.
pub const MINIMUM_USD: i128 = 50 * 10_000_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InsufficientFunding = 1,
    NotOwner = 2,
    OracleUnavailable = 3,
    TransferFailed = 4,
    IndexOutOfRange = 5,
    ArithmeticOverflow = 6,
    AlreadyInitialized = 7,
    NotInitialized = 8,
}

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    /// Fix the instance configuration.
    ///
    /// - `owner` is the only address allowed to withdraw; there is no
    ///   transfer-of-ownership operation.
    /// - `price_feed` is a contract implementing [`PriceFeed`].
    /// - `token` is the asset contributions are made in.
    ///
    /// None of the three can be changed afterwards; a second call fails
    /// with `AlreadyInitialized`.
    pub fn init(env: Env, owner: Address, price_feed: Address, token: Address) {
        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        storage::save_owner(&env, &owner);
        storage::save_price_feed(&env, &price_feed);
        storage::save_token(&env, &token);

        events::emit_initialized(&env, owner, price_feed, token);
    }

    /// Contribute `amount` of the configured token.
    ///
    /// The amount's USD value (per the configured price feed) must be at
    /// least [`MINIMUM_USD`], otherwise the call fails with
    /// `InsufficientFunding`. Validation happens before the token is
    /// moved and before any record is written.
    ///
    /// On success the contribution is added to the funder's cumulative
    /// record and the funder is appended to the funder list, one entry
    /// per call, so repeat funders appear more than once.
    pub fn fund(env: Env, funder: Address, amount: i128) {
        funder.require_auth();

        let feed = storage::load_price_feed(&env);
        let usd_value = price::conversion_rate(&env, &feed, amount)
            .unwrap_or_else(|err| panic_with_error!(&env, err));
        if usd_value < MINIMUM_USD {
            panic_with_error!(&env, Error::InsufficientFunding);
        }

        let token_client = token::Client::new(&env, &storage::load_token(&env));
        if token_client
            .try_transfer(&funder, &env.current_contract_address(), &amount)
            .is_err()
        {
            panic_with_error!(&env, Error::TransferFailed);
        }

        storage::add_amount_funded(&env, &funder, amount);
        storage::push_funder(&env, &funder);

        events::emit_funded(&env, funder, amount, usd_value);
    }

    /// Drain the whole held balance to the owner and reset the ledger.
    ///
    /// Only the owner may call this; anyone else fails with `NotOwner`.
    /// Zeroes every listed funder's record, clears the funder list, then
    /// transfers the contract's full token balance to the owner. A failed
    /// transfer aborts the invocation and the host reverts every write.
    pub fn withdraw(env: Env, caller: Address) {
        let owner = Self::require_owner(&env, caller);

        // Re-reads the stored list on every iteration.
        // `cheaper_withdraw` is the fee-conscious twin.
        let count = storage::funder_count(&env);
        for index in 0..count {
            let funder = storage::load_funders(&env).get_unchecked(index);
            storage::clear_amount_funded(&env, &funder);
        }
        storage::clear_funders(&env);

        let amount = Self::drain_balance_to(&env, &owner);

        events::emit_withdrawn(&env, owner, amount, count);
    }

    /// Identical to [`FundMe::withdraw`] in preconditions, effects and
    /// failure modes.
    ///
    /// Reads the funder list out of storage once, iterates the local
    /// copy, and writes the cleared list back once, instead of touching
    /// storage per entry.
    pub fn cheaper_withdraw(env: Env, caller: Address) {
        let owner = Self::require_owner(&env, caller);

        let funders = storage::load_funders(&env);
        for funder in funders.iter() {
            storage::clear_amount_funded(&env, &funder);
        }
        storage::clear_funders(&env);

        let amount = Self::drain_balance_to(&env, &owner);

        events::emit_withdrawn(&env, owner, amount, funders.len());
    }

    /// Price feed contract fixed at `init`.
    pub fn get_price_feed(env: Env) -> Address {
        storage::load_price_feed(&env)
    }

    /// Token contract fixed at `init`.
    pub fn get_token(env: Env) -> Address {
        storage::load_token(&env)
    }

    /// Owner fixed at `init`.
    pub fn get_owner(env: Env) -> Address {
        storage::load_owner(&env)
    }

    /// Funding threshold, in USD at [`USD_DECIMALS`] precision.
    pub fn get_minimum_usd(_env: Env) -> i128 {
        MINIMUM_USD
    }

    /// Cumulative amount contributed by `funder`. Zero for addresses
    /// that never funded, and for everyone after a withdrawal.
    pub fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        storage::amount_funded(&env, &funder)
    }

    /// Funder at `index` in the ordered list.
    ///
    /// Fails with `IndexOutOfRange` past the end. Callers probe index 0
    /// to tell an emptied ledger from a populated one, so this must not
    /// silently default.
    pub fn get_funder(env: Env, index: u32) -> Address {
        storage::load_funders(&env)
            .get(index)
            .unwrap_or_else(|| panic_with_error!(&env, Error::IndexOutOfRange))
    }
}

impl FundMe {
    fn require_owner(env: &Env, caller: Address) -> Address {
        caller.require_auth();
        let owner = storage::load_owner(env);
        if caller != owner {
            panic_with_error!(env, Error::NotOwner);
        }
        owner
    }

    /// Transfer the contract's whole token balance to `owner` and return
    /// the amount moved.
    fn drain_balance_to(env: &Env, owner: &Address) -> i128 {
        let token_client = token::Client::new(env, &storage::load_token(env));
        let balance = token_client.balance(&env.current_contract_address());
        if balance > 0
            && token_client
                .try_transfer(&env.current_contract_address(), owner, &balance)
                .is_err()
        {
            panic_with_error!(env, Error::TransferFailed);
        }
        balance
    }
}
