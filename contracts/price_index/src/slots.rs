//! Tombstoned slot sequences shared by the agent and fund registries.
//!
//! A slot holds `Some(address)` while occupied and `None` once vacated. Vacated
//! slots keep their index, and allocation always takes the lowest free index
//! before the sequence grows, so indices observed by callers stay stable.

use soroban_sdk::{Address, Vec};

pub fn position_of(slots: &Vec<Option<Address>>, who: &Address) -> Option<u32> {
    slots
        .iter()
        .position(|slot| slot.as_ref() == Some(who))
        .map(|i| i as u32)
}

pub fn occupant_at(slots: &Vec<Option<Address>>, index: u32) -> Option<Address> {
    slots.get(index).flatten()
}

pub fn occupied_count(slots: &Vec<Option<Address>>) -> u32 {
    slots.iter().filter(|slot| slot.is_some()).count() as u32
}

pub fn occupants(slots: &Vec<Option<Address>>) -> impl Iterator<Item = Address> + '_ {
    slots.iter().flatten()
}

/// Index the next occupant would land on, or `None` when `capacity` slots are
/// all taken.
pub fn next_free(slots: &Vec<Option<Address>>, capacity: Option<u32>) -> Option<u32> {
    if let Some(i) = slots.iter().position(|slot| slot.is_none()) {
        return Some(i as u32);
    }
    match capacity {
        Some(cap) if slots.len() >= cap => None,
        _ => Some(slots.len()),
    }
}

/// Puts `who` into the slot returned by [`next_free`].
pub fn occupy(slots: &mut Vec<Option<Address>>, index: u32, who: Address) {
    if index < slots.len() {
        slots.set(index, Some(who));
    } else {
        slots.push_back(Some(who));
    }
}

pub fn vacate(slots: &mut Vec<Option<Address>>, index: u32) {
    slots.set(index, None);
}
