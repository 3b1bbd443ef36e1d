use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::slots;
use crate::storage;
use crate::types::PriceReport;

/// Truncated mean over the reports that carry a timestamp.
pub fn average_reported(reports: impl Iterator<Item = PriceReport>) -> Result<u128, Error> {
    let mut sum: u128 = 0;
    let mut count: u128 = 0;
    for report in reports.filter(PriceReport::has_reported) {
        sum = sum
            .checked_add(report.price)
            .ok_or(Error::ArithmeticOverflow)?;
        count += 1;
    }
    if count == 0 {
        return Err(Error::NoPriceReports);
    }
    Ok(sum / count)
}

pub fn compute_published_price(env: &Env) -> Result<u128, Error> {
    let agents: Vec<Option<Address>> = storage::get_agent_slots(env);
    let reports = slots::occupants(&agents).filter_map(|agent| storage::get_report(env, &agent));
    average_reported(reports)
}
