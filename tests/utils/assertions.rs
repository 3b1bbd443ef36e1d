/// Custom assertions for contract testing

/// Assert a `try_*` client call failed with a specific contract error
#[macro_export]
macro_rules! assert_contract_error {
    ($result:expr, $error:expr) => {
        match $result {
            Err(Ok(err)) => assert_eq!(err, $error, "Contract error mismatch"),
            other => panic!("Expected {:?}, got {:?}", $error, other),
        }
    };
}

/// Assert the barrier state of a fund in one go
#[macro_export]
macro_rules! assert_fund_state {
    ($info:expr, ended: $ended:expr, end_price: $end:expr, strike: $strike:expr) => {{
        let info = &$info;
        assert_eq!(info.end_condition_reached, $ended, "end condition mismatch");
        assert_eq!(info.end_price, $end, "end price mismatch");
        assert_eq!(info.strike_price, $strike, "strike price mismatch");
    }};
}
