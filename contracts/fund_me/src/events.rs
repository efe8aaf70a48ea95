use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    pub owner: Address,
    pub price_feed: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Funded {
    pub funder: Address,
    pub amount: i128,
    pub usd_value: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub owner: Address,
    pub amount: i128,
    pub funder_entries: u32,
}

pub fn emit_initialized(env: &Env, owner: Address, price_feed: Address, token: Address) {
    let topics = (symbol_short!("init"),);
    let data = Initialized {
        owner,
        price_feed,
        token,
    };
    env.events().publish(topics, data);
}

pub fn emit_funded(env: &Env, funder: Address, amount: i128, usd_value: i128) {
    let topics = (symbol_short!("funded"), funder.clone());
    let data = Funded {
        funder,
        amount,
        usd_value,
    };
    env.events().publish(topics, data);
}

pub fn emit_withdrawn(env: &Env, owner: Address, amount: i128, funder_entries: u32) {
    let topics = (symbol_short!("withdrawn"),);
    let data = Withdrawn {
        owner,
        amount,
        funder_entries,
    };
    env.events().publish(topics, data);
}
