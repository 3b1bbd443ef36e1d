use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

// ==================== Event Payload Structs ====================
// Published under the topic pair ("PINDEX", <action>) so indexers can follow a
// single index with one subscription.

const TOPIC: Symbol = symbol_short!("PINDEX");

#[derive(Clone)]
#[contracttype]
pub struct InitializedEvent {
    pub admin: Address,
    pub initial_price: u128,
    pub max_price_agents: u32,
    pub decimals: u32,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct AgentEvent {
    pub agent: Address,
    pub slot: u32,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct PriceReportedEvent {
    pub agent: Address,
    pub price: u128,
    pub source: String,
    /// Index price after the report was folded in.
    pub published_price: u128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct FundEvent {
    pub fund: Address,
    pub slot: u32,
    pub strike_price: u128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct FundEndEvent {
    pub fund: Address,
    pub strike_price: u128,
    pub end_price: u128,
    pub timestamp: u64,
}

// ==================== Emit Functions ====================

pub fn emit_initialized(
    env: &Env,
    admin: Address,
    initial_price: u128,
    max_price_agents: u32,
    decimals: u32,
) {
    env.events().publish(
        (TOPIC, symbol_short!("INIT")),
        InitializedEvent {
            admin,
            initial_price,
            max_price_agents,
            decimals,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_agent_registered(env: &Env, agent: Address, slot: u32) {
    env.events().publish(
        (TOPIC, symbol_short!("AGT_ADD")),
        AgentEvent {
            agent,
            slot,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_agent_removed(env: &Env, agent: Address, slot: u32) {
    env.events().publish(
        (TOPIC, symbol_short!("AGT_RMV")),
        AgentEvent {
            agent,
            slot,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_price_reported(
    env: &Env,
    agent: Address,
    price: u128,
    source: String,
    published_price: u128,
) {
    env.events().publish(
        (TOPIC, symbol_short!("PRICE")),
        PriceReportedEvent {
            agent,
            price,
            source,
            published_price,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_fund_connected(env: &Env, fund: Address, slot: u32, strike_price: u128) {
    env.events().publish(
        (TOPIC, symbol_short!("FND_ADD")),
        FundEvent {
            fund,
            slot,
            strike_price,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_fund_disconnected(env: &Env, fund: Address, slot: u32, strike_price: u128) {
    env.events().publish(
        (TOPIC, symbol_short!("FND_RMV")),
        FundEvent {
            fund,
            slot,
            strike_price,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_fund_ended(env: &Env, fund: Address, strike_price: u128, end_price: u128) {
    env.events().publish(
        (TOPIC, symbol_short!("FND_END")),
        FundEndEvent {
            fund,
            strike_price,
            end_price,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_end_price_extended(env: &Env, fund: Address, strike_price: u128, end_price: u128) {
    env.events().publish(
        (TOPIC, symbol_short!("FND_XTRM")),
        FundEndEvent {
            fund,
            strike_price,
            end_price,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_fund_reset(env: &Env, fund: Address, strike_price: u128) {
    env.events().publish(
        (TOPIC, symbol_short!("FND_RST")),
        FundEndEvent {
            fund,
            strike_price,
            end_price: 0,
            timestamp: env.ledger().timestamp(),
        },
    );
}
