#![no_std]

//! Price index oracle with barrier monitoring for connected funds.
//!
//! A bounded set of agents report prices; the index publishes their truncated
//! mean. Every connected fund records a strike price and ends, permanently
//! until reset, once the published price halves or doubles against it.

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

mod agents;
mod aggregation;
mod barrier;
mod errors;
mod events;
mod fund_interface;
mod funds;
mod slots;
mod storage;
mod types;

pub use barrier::BARRIER_MULTIPLE;
pub use errors::Error;
pub use fund_interface::{FundClient, FundInterface};
pub use types::{Config, FundInfo, PriceReport};

use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String, Vec};

contractmeta!(
    key = "Description",
    val = "Averaged price index with halving/doubling barrier monitoring"
);

#[contract]
pub struct PriceIndexContract;

#[contractimpl]
impl PriceIndexContract {
    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Initialise the index. The admin takes agent slot 0 and its first report
    /// is `initial_price`.
    pub fn initialize(
        env: Env,
        admin: Address,
        initial_price: u128,
        initial_source: String,
        max_price_agents: u32,
        decimals: u32,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if max_price_agents == 0 {
            return Err(Error::InvalidConfig);
        }
        agents::validate_source(&initial_source)?;
        admin.require_auth();

        let config = Config {
            admin: admin.clone(),
            max_price_agents,
            decimals,
        };
        storage::set_config(&env, &config);
        storage::set_fund_slots(&env, &Vec::new(&env));

        agents::register(&env, &config, &admin)?;
        agents::record_report(&env, &admin, initial_price, initial_source)?;

        events::emit_initialized(&env, admin, initial_price, max_price_agents, decimals);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        Ok(storage::get_config(&env)?.admin)
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        storage::get_config(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(storage::get_config(&env)?.decimals)
    }

    // ------------------------------------------------------------------
    // Price agents
    // ------------------------------------------------------------------

    pub fn register_price_agent(env: Env, admin: Address, agent: Address) -> Result<u32, Error> {
        let config = Self::require_admin(&env, &admin)?;
        let slot = agents::register(&env, &config, &agent)?;
        events::emit_agent_registered(&env, agent, slot);
        Ok(slot)
    }

    /// Frees the agent's slot for reuse. The published price drops the agent's
    /// report, so connected funds are re-evaluated.
    pub fn remove_price_agent(env: Env, admin: Address, agent: Address) -> Result<(), Error> {
        let config = Self::require_admin(&env, &admin)?;
        let slot = agents::remove(&env, &config, &agent)?;

        let price = aggregation::compute_published_price(&env)?;
        funds::sweep(&env, price);

        events::emit_agent_removed(&env, agent, slot);
        Ok(())
    }

    /// Overwrites the caller's report, then re-evaluates every connected fund
    /// against the new published price, which is returned.
    pub fn report_price(
        env: Env,
        agent: Address,
        price: u128,
        source: String,
    ) -> Result<u128, Error> {
        storage::get_config(&env)?;
        agent.require_auth();
        agents::record_report(&env, &agent, price, source.clone())?;

        let published = aggregation::compute_published_price(&env)?;
        funds::sweep(&env, published);

        events::emit_price_reported(&env, agent, price, source, published);
        Ok(published)
    }

    pub fn get_price(env: Env) -> Result<u128, Error> {
        storage::get_config(&env)?;
        aggregation::compute_published_price(&env)
    }

    pub fn number_of_price_agents(env: Env) -> u32 {
        agents::count(&env)
    }

    pub fn max_price_agents(env: Env) -> Result<u32, Error> {
        Ok(storage::get_config(&env)?.max_price_agents)
    }

    /// Agent seated at `index`, or `None` for a free or out-of-range slot.
    pub fn get_registered_price_agent(env: Env, index: u32) -> Option<Address> {
        agents::agent_at(&env, index)
    }

    /// Latest report of `agent`; zero-valued when the agent never reported or
    /// is not registered.
    pub fn get_price_agent_report(env: Env, agent: Address) -> PriceReport {
        agents::report_of(&env, &agent)
    }

    // ------------------------------------------------------------------
    // Funds
    // ------------------------------------------------------------------

    /// Connects `fund` with the current published price as its strike.
    pub fn connect_fund(env: Env, admin: Address, fund: Option<Address>) -> Result<FundInfo, Error> {
        let config = Self::require_admin(&env, &admin)?;
        funds::connect(&env, &config, fund, None)
    }

    /// Connects `fund` with an explicit strike, typically the price the fund
    /// opened at before it was connected.
    pub fn connect_fund_at_strike(
        env: Env,
        admin: Address,
        fund: Option<Address>,
        strike_price: u128,
    ) -> Result<FundInfo, Error> {
        let config = Self::require_admin(&env, &admin)?;
        funds::connect(&env, &config, fund, Some(strike_price))
    }

    pub fn disconnect_fund(env: Env, admin: Address, fund: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        funds::disconnect(&env, &fund)?;
        Ok(())
    }

    /// Clears the fund's end condition and end price; the strike is kept.
    pub fn reset_fund_status(env: Env, admin: Address, fund: Address) -> Result<FundInfo, Error> {
        Self::require_admin(&env, &admin)?;
        funds::reset(&env, &fund)
    }

    pub fn has_fund_ended(env: Env, fund: Address) -> Result<bool, Error> {
        Ok(funds::info_of(&env, &fund)?.end_condition_reached)
    }

    pub fn get_end_price(env: Env, fund: Address) -> Result<u128, Error> {
        Ok(funds::info_of(&env, &fund)?.end_price)
    }

    pub fn get_fund_info(env: Env, fund: Address) -> Option<FundInfo> {
        funds::info_of(&env, &fund).ok()
    }

    pub fn get_connected_fund_address(env: Env, index: u32) -> Option<Address> {
        funds::fund_at(&env, index)
    }

    pub fn number_of_connected_funds(env: Env) -> u32 {
        funds::count(&env)
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    fn require_admin(env: &Env, caller: &Address) -> Result<Config, Error> {
        let config = storage::get_config(env)?;
        caller.require_auth();
        if *caller != config.admin {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }
}
