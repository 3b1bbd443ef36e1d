use soroban_sdk::{Address, Env};

use crate::aggregation;
use crate::barrier::{self, BarrierOutcome};
use crate::errors::Error;
use crate::events;
use crate::fund_interface;
use crate::slots;
use crate::storage;
use crate::types::{Config, FundInfo};

/// Validates and seats a fund, then runs the barrier check once so a fund
/// whose barrier is already behind it starts out ended.
///
/// `strike` defaults to the current published price. A zero strike can never
/// be crossed upward, so it is rejected.
pub fn connect(
    env: &Env,
    config: &Config,
    fund: Option<Address>,
    strike: Option<u128>,
) -> Result<FundInfo, Error> {
    let fund = fund.ok_or(Error::NullFund)?;
    if storage::get_fund_info(env, &fund).is_some() {
        return Err(Error::DuplicateFund);
    }
    if fund_interface::query_decimals(env, &fund)? != config.decimals {
        return Err(Error::DecimalMismatch);
    }
    let price = aggregation::compute_published_price(env)?;
    let strike_price = strike.unwrap_or(price);
    if strike_price == 0 {
        return Err(Error::InvalidStrike);
    }

    let mut seats = storage::get_fund_slots(env);
    let index = slots::next_free(&seats, None).unwrap_or(seats.len());
    slots::occupy(&mut seats, index, fund.clone());
    storage::set_fund_slots(env, &seats);

    let mut info = FundInfo {
        fund: fund.clone(),
        strike_price,
        end_price: 0,
        end_condition_reached: false,
    };
    let outcome = barrier::evaluate(&mut info, price);
    storage::set_fund_info(env, &info);

    events::emit_fund_connected(env, fund, index, info.strike_price);
    publish_outcome(env, &info, outcome);
    Ok(info)
}

pub fn disconnect(env: &Env, fund: &Address) -> Result<FundInfo, Error> {
    let info = storage::get_fund_info(env, fund).ok_or(Error::FundNotFound)?;
    let mut seats = storage::get_fund_slots(env);
    let index = slots::position_of(&seats, fund).ok_or(Error::FundNotFound)?;

    slots::vacate(&mut seats, index);
    storage::set_fund_slots(env, &seats);
    storage::remove_fund_info(env, fund);

    events::emit_fund_disconnected(env, fund.clone(), index, info.strike_price);
    Ok(info)
}

/// Un-latches a fund. The next sweep re-evaluates it against its original
/// strike.
pub fn reset(env: &Env, fund: &Address) -> Result<FundInfo, Error> {
    let mut info = storage::get_fund_info(env, fund).ok_or(Error::FundNotConnected)?;

    barrier::restart(&mut info);
    storage::set_fund_info(env, &info);

    events::emit_fund_reset(env, fund.clone(), info.strike_price);
    Ok(info)
}

/// Re-evaluates every connected fund against `price`.
pub fn sweep(env: &Env, price: u128) {
    let seats = storage::get_fund_slots(env);
    for fund in slots::occupants(&seats) {
        let Some(mut info) = storage::get_fund_info(env, &fund) else {
            continue;
        };
        let outcome = barrier::evaluate(&mut info, price);
        if outcome != BarrierOutcome::Unchanged {
            storage::set_fund_info(env, &info);
            publish_outcome(env, &info, outcome);
        }
    }
}

fn publish_outcome(env: &Env, info: &FundInfo, outcome: BarrierOutcome) {
    match outcome {
        BarrierOutcome::Unchanged => {}
        BarrierOutcome::Latched => {
            events::emit_fund_ended(env, info.fund.clone(), info.strike_price, info.end_price)
        }
        BarrierOutcome::Extended => events::emit_end_price_extended(
            env,
            info.fund.clone(),
            info.strike_price,
            info.end_price,
        ),
    }
}

pub fn info_of(env: &Env, fund: &Address) -> Result<FundInfo, Error> {
    storage::get_fund_info(env, fund).ok_or(Error::FundNotFound)
}

pub fn fund_at(env: &Env, index: u32) -> Option<Address> {
    slots::occupant_at(&storage::get_fund_slots(env), index)
}

pub fn count(env: &Env) -> u32 {
    slots::occupied_count(&storage::get_fund_slots(env))
}
