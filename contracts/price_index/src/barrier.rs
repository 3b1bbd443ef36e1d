//! Barrier detection for connected funds.
//!
//! A fund ends once the published price has halved or doubled relative to its
//! strike. The end condition latches; from then on `end_price` follows the
//! most extreme price seen on the side that triggered it.

use crate::types::FundInfo;

/// Factor the price must move by, in either direction, to cross the barrier.
pub const BARRIER_MULTIPLE: u128 = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BarrierSide {
    Below,
    Above,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BarrierOutcome {
    /// Nothing about the fund changed.
    Unchanged,
    /// The barrier was crossed for the first time.
    Latched,
    /// Already latched, and the price set a new extreme.
    Extended,
}

pub fn crossed(strike: u128, price: u128) -> Option<BarrierSide> {
    // price * k <= strike, without the multiplication
    if price <= strike / BARRIER_MULTIPLE {
        Some(BarrierSide::Below)
    } else if strike
        .checked_mul(BARRIER_MULTIPLE)
        .is_some_and(|upper| price >= upper)
    {
        Some(BarrierSide::Above)
    } else {
        None
    }
}

/// Side a latched fund ended on. A downward end price never exceeds the
/// strike and an upward one never falls below it.
pub fn latched_side(info: &FundInfo) -> BarrierSide {
    if info.end_price <= info.strike_price {
        BarrierSide::Below
    } else {
        BarrierSide::Above
    }
}

pub fn evaluate(info: &mut FundInfo, price: u128) -> BarrierOutcome {
    if !info.end_condition_reached {
        if crossed(info.strike_price, price).is_none() {
            return BarrierOutcome::Unchanged;
        }
        info.end_condition_reached = true;
        info.end_price = price;
        return BarrierOutcome::Latched;
    }

    let more_extreme = match latched_side(info) {
        BarrierSide::Below => price < info.end_price,
        BarrierSide::Above => price > info.end_price,
    };
    if !more_extreme {
        return BarrierOutcome::Unchanged;
    }
    info.end_price = price;
    BarrierOutcome::Extended
}

/// Clears the latch. The strike is left as captured at connection.
pub fn restart(info: &mut FundInfo) {
    info.end_price = 0;
    info.end_condition_reached = false;
}
