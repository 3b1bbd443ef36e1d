use soroban_sdk::{Address, Env, String};

use crate::errors::Error;
use crate::slots;
use crate::storage;
use crate::types::{Config, PriceReport};

/// Longest accepted report source label, in bytes.
pub const MAX_SOURCE_LEN: u32 = 64;

pub fn validate_source(source: &String) -> Result<(), Error> {
    if source.len() > MAX_SOURCE_LEN {
        return Err(Error::InvalidSource);
    }
    Ok(())
}

/// Seats `agent` in the lowest free slot and returns its index.
pub fn register(env: &Env, config: &Config, agent: &Address) -> Result<u32, Error> {
    let mut seats = storage::get_agent_slots(env);
    if slots::position_of(&seats, agent).is_some() {
        return Err(Error::DuplicateAgent);
    }
    let index =
        slots::next_free(&seats, Some(config.max_price_agents)).ok_or(Error::CapacityExceeded)?;

    slots::occupy(&mut seats, index, agent.clone());
    storage::set_agent_slots(env, &seats);
    storage::set_report(env, agent, &PriceReport::empty(env));
    Ok(index)
}

/// Tombstones the slot held by `agent` and drops its report. Returns the
/// freed index.
pub fn remove(env: &Env, config: &Config, agent: &Address) -> Result<u32, Error> {
    if *agent == config.admin {
        return Err(Error::CannotRemoveAdministrator);
    }
    let mut seats = storage::get_agent_slots(env);
    let index = slots::position_of(&seats, agent).ok_or(Error::AgentNotFound)?;

    slots::vacate(&mut seats, index);
    storage::set_agent_slots(env, &seats);
    storage::remove_report(env, agent);
    Ok(index)
}

pub fn record_report(
    env: &Env,
    agent: &Address,
    price: u128,
    source: String,
) -> Result<(), Error> {
    if !is_registered(env, agent) {
        return Err(Error::AgentNotRegistered);
    }
    validate_source(&source)?;
    let report = PriceReport {
        price,
        timestamp: env.ledger().timestamp(),
        source,
    };
    storage::set_report(env, agent, &report);
    Ok(())
}

pub fn is_registered(env: &Env, agent: &Address) -> bool {
    slots::position_of(&storage::get_agent_slots(env), agent).is_some()
}

pub fn agent_at(env: &Env, index: u32) -> Option<Address> {
    slots::occupant_at(&storage::get_agent_slots(env), index)
}

pub fn count(env: &Env) -> u32 {
    slots::occupied_count(&storage::get_agent_slots(env))
}

pub fn report_of(env: &Env, agent: &Address) -> PriceReport {
    storage::get_report(env, agent).unwrap_or_else(|| PriceReport::empty(env))
}
