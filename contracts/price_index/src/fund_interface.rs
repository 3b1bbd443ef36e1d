use soroban_sdk::{contractclient, Address, Env};

use crate::errors::Error;

/// Surface of a fund contract that the index reads when connecting it.
#[contractclient(name = "FundClient")]
pub trait FundInterface {
    /// Fractional digits the fund expects index prices in.
    fn decimals(env: Env) -> u32;
}

pub fn query_decimals(env: &Env, fund: &Address) -> Result<u32, Error> {
    match FundClient::new(env, fund).try_decimals() {
        Ok(Ok(decimals)) => Ok(decimals),
        _ => Err(Error::FundUnreachable),
    }
}
