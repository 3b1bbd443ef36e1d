//! Test doubles for contracts the index talks to. Built for in-crate tests and
//! for dependents that enable the `testutils` feature.

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

/// Fund contract stand-in exposing only what the index reads.
#[contract]
pub struct MockFund;

#[derive(Clone)]
#[contracttype]
enum MockFundKey {
    Decimals,
}

#[contractimpl]
impl MockFund {
    pub fn init(env: Env, decimals: u32) {
        env.storage()
            .instance()
            .set(&MockFundKey::Decimals, &decimals);
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&MockFundKey::Decimals)
            .unwrap_or(0)
    }
}

/// Contract with no `decimals()` entry point.
#[contract]
pub struct NotAFund;

#[contractimpl]
impl NotAFund {
    pub fn ping(_env: Env) -> u32 {
        1
    }
}

/// Deploy a mock fund reporting `decimals`.
pub fn deploy_mock_fund(env: &Env, decimals: u32) -> Address {
    let id = env.register_contract(None, MockFund);
    MockFundClient::new(env, &id).init(&decimals);
    id
}

pub fn deploy_not_a_fund(env: &Env) -> Address {
    env.register_contract(None, NotAFund)
}
