//! Connection order versus price moves.
//!
//! A fund connected before a crash and a fund connected after it at the
//! pre-crash strike must end up in the same barrier state.

use price_index::Error;
use price_index_tests::utils::constants::{INIT_PRICE, MAX_AGENTS};
use price_index_tests::utils::PriceIndexSetup;
use price_index_tests::{assert_contract_error, assert_fund_state};

const CRASH: u128 = 12_345_678;

#[test]
fn test_connect_then_cross_matches_cross_then_connect() {
    let before = PriceIndexSetup::new(MAX_AGENTS);
    let (early_fund, _) = before.connect_new_fund();
    before.admin_report(CRASH);
    let connected_first = before.fund_info(&early_fund);

    let after = PriceIndexSetup::new(MAX_AGENTS);
    after.admin_report(CRASH);
    let late_fund = after.deploy_fund();
    let connected_last = after
        .client
        .connect_fund_at_strike(&after.admin, &Some(late_fund.clone()), &INIT_PRICE);

    assert_fund_state!(connected_first, ended: true, end_price: CRASH, strike: INIT_PRICE);
    assert_fund_state!(connected_last, ended: true, end_price: CRASH, strike: INIT_PRICE);

    // both keep evolving identically afterwards
    for price in [INIT_PRICE, 9_000_000, 11_000_000] {
        before.admin_report(price);
        after.admin_report(price);
    }
    let first = before.fund_info(&early_fund);
    let last = after.fund_info(&late_fund);
    assert_eq!(first.end_price, last.end_price);
    assert_eq!(first.end_condition_reached, last.end_condition_reached);
    assert_eq!(first.end_price, 9_000_000);
}

#[test]
fn test_plain_connect_after_move_restrikes() {
    let setup = PriceIndexSetup::new(MAX_AGENTS);
    setup.admin_report(CRASH);
    let (fund, info) = setup.connect_new_fund();

    assert_fund_state!(info, ended: false, end_price: 0, strike: CRASH);
    assert!(!setup.client.has_fund_ended(&fund));
}

#[test]
fn test_funds_with_different_strikes_latch_independently() {
    let setup = PriceIndexSetup::new(MAX_AGENTS);
    let (early, _) = setup.connect_new_fund();

    setup.admin_report(60_000_000);
    let (late, late_info) = setup.connect_new_fund();
    assert_eq!(late_info.strike_price, 60_000_000);

    // under half of the early strike only
    setup.admin_report(40_000_000);
    assert_fund_state!(setup.fund_info(&early), ended: true, end_price: 40_000_000, strike: INIT_PRICE);
    assert_fund_state!(setup.fund_info(&late), ended: false, end_price: 0, strike: 60_000_000);

    setup.admin_report(29_000_000);
    assert_fund_state!(setup.fund_info(&early), ended: true, end_price: 29_000_000, strike: INIT_PRICE);
    assert_fund_state!(setup.fund_info(&late), ended: true, end_price: 29_000_000, strike: 60_000_000);

    setup.admin_report(50_000_000);
    assert_eq!(setup.client.get_end_price(&early), 29_000_000);
    assert_eq!(setup.client.get_end_price(&late), 29_000_000);
}

#[test]
fn test_failed_connection_leaves_no_trace() {
    let setup = PriceIndexSetup::new(MAX_AGENTS);
    let (fund, _) = setup.connect_new_fund();
    setup.admin_report(CRASH);

    assert_contract_error!(
        setup.client.try_connect_fund(&setup.admin, &Some(fund.clone())),
        Error::DuplicateFund
    );
    assert_contract_error!(
        setup.client.try_connect_fund(&setup.admin, &None),
        Error::NullFund
    );

    assert_eq!(setup.client.number_of_connected_funds(), 1);
    assert_fund_state!(setup.fund_info(&fund), ended: true, end_price: CRASH, strike: INIT_PRICE);
}

#[test]
fn test_reporting_agents_share_the_sweep() {
    let setup = PriceIndexSetup::new(MAX_AGENTS);
    let agents = setup.register_agents(2);
    let (fund, _) = setup.connect_new_fund();

    setup.report(&agents[0], 10_000_000);
    // (90_010_000 + 10_000_000) / 2
    assert_eq!(setup.client.get_price(), 50_005_000);
    assert!(!setup.client.has_fund_ended(&fund));

    setup.report(&agents[1], 10_000_000);
    // 110_010_000 / 3
    assert_eq!(setup.client.get_price(), 36_670_000);
    assert_fund_state!(setup.fund_info(&fund), ended: true, end_price: 36_670_000, strike: INIT_PRICE);
}
