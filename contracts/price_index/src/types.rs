use soroban_sdk::{contracttype, Address, Env, String};

/// Immutable parameters written once by `initialize`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Config {
    pub admin: Address,
    /// Capacity of the agent slot sequence, admin seat included.
    pub max_price_agents: u32,
    /// Fractional digits of every price handled by the index.
    pub decimals: u32,
}

/// Latest submission of a single price agent.
///
/// A zero `timestamp` means the agent is registered but has never reported,
/// and the report is left out of the published average.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PriceReport {
    pub price: u128,
    pub timestamp: u64,
    pub source: String,
}

impl PriceReport {
    pub fn empty(env: &Env) -> Self {
        PriceReport {
            price: 0,
            timestamp: 0,
            source: String::from_str(env, ""),
        }
    }

    pub fn has_reported(&self) -> bool {
        self.timestamp != 0
    }
}

/// Barrier state of a connected fund.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FundInfo {
    pub fund: Address,
    pub strike_price: u128,
    /// Most extreme published price seen since the barrier latched; 0 until then.
    pub end_price: u128,
    pub end_condition_reached: bool,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    // Instance storage
    Config,
    AgentSlots, // Vec<Option<Address>>, bounded by Config::max_price_agents
    FundSlots,  // Vec<Option<Address>>

    // Persistent storage
    Report(Address),   // PriceReport
    FundInfo(Address), // FundInfo
}
