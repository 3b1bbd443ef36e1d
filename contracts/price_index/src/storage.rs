use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::types::{Config, DataKey, FundInfo, PriceReport};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ==================== Slot sequences ====================

pub fn get_agent_slots(env: &Env) -> Vec<Option<Address>> {
    env.storage()
        .instance()
        .get(&DataKey::AgentSlots)
        .unwrap_or(Vec::new(env))
}

pub fn set_agent_slots(env: &Env, slots: &Vec<Option<Address>>) {
    env.storage().instance().set(&DataKey::AgentSlots, slots);
}

pub fn get_fund_slots(env: &Env) -> Vec<Option<Address>> {
    env.storage()
        .instance()
        .get(&DataKey::FundSlots)
        .unwrap_or(Vec::new(env))
}

pub fn set_fund_slots(env: &Env, slots: &Vec<Option<Address>>) {
    env.storage().instance().set(&DataKey::FundSlots, slots);
}

// ==================== Reports ====================

pub fn get_report(env: &Env, agent: &Address) -> Option<PriceReport> {
    env.storage()
        .persistent()
        .get(&DataKey::Report(agent.clone()))
}

pub fn set_report(env: &Env, agent: &Address, report: &PriceReport) {
    env.storage()
        .persistent()
        .set(&DataKey::Report(agent.clone()), report);
}

pub fn remove_report(env: &Env, agent: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Report(agent.clone()));
}

// ==================== Funds ====================

pub fn get_fund_info(env: &Env, fund: &Address) -> Option<FundInfo> {
    env.storage()
        .persistent()
        .get(&DataKey::FundInfo(fund.clone()))
}

pub fn set_fund_info(env: &Env, info: &FundInfo) {
    env.storage()
        .persistent()
        .set(&DataKey::FundInfo(info.fund.clone()), info);
}

pub fn remove_fund_info(env: &Env, fund: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::FundInfo(fund.clone()));
}
