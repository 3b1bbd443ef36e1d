/// Contract utilities for common testing operations
use price_index::testutils::deploy_mock_fund;
use price_index::{FundInfo, PriceIndexContract, PriceIndexContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

use super::constants::{DECIMALS, GENESIS_TIMESTAMP, INIT_PRICE};

/// Initialised index with every auth mocked
pub struct PriceIndexSetup {
    pub env: Env,
    pub client: PriceIndexContractClient<'static>,
    pub admin: Address,
}

impl PriceIndexSetup {
    pub fn new(max_price_agents: u32) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|l| l.timestamp = GENESIS_TIMESTAMP);

        let contract_id = env.register_contract(None, PriceIndexContract);
        let client = PriceIndexContractClient::new(&env, &contract_id);
        let admin = Address::generate(&env);
        client.initialize(
            &admin,
            &INIT_PRICE,
            &String::from_str(&env, "genesis"),
            &max_price_agents,
            &DECIMALS,
        );

        Self { env, client, admin }
    }

    pub fn generate_address(&self) -> Address {
        Address::generate(&self.env)
    }

    /// Register `count` fresh agents and return them in slot order
    pub fn register_agents(&self, count: usize) -> Vec<Address> {
        (0..count)
            .map(|_| {
                let agent = self.generate_address();
                self.client.register_price_agent(&self.admin, &agent);
                agent
            })
            .collect()
    }

    /// Report as `agent` one second after the previous ledger close
    pub fn report(&self, agent: &Address, price: u128) -> u128 {
        self.env.ledger().with_mut(|l| l.timestamp += 1);
        self.client
            .report_price(agent, &price, &String::from_str(&self.env, "suite"))
    }

    pub fn admin_report(&self, price: u128) -> u128 {
        self.report(&self.admin, price)
    }

    pub fn deploy_fund(&self) -> Address {
        deploy_mock_fund(&self.env, DECIMALS)
    }

    pub fn connect_new_fund(&self) -> (Address, FundInfo) {
        let fund = self.deploy_fund();
        let info = self.client.connect_fund(&self.admin, &Some(fund.clone()));
        (fund, info)
    }

    pub fn fund_info(&self, fund: &Address) -> FundInfo {
        self.client
            .get_fund_info(fund)
            .expect("fund should be connected")
    }
}
