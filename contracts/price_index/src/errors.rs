use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–3) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,

    // --- Authorization (4) ---
    Unauthorized = 4,

    // --- Agents (5–9) ---
    AgentNotRegistered = 5,
    AgentNotFound = 6,
    DuplicateAgent = 7,
    CapacityExceeded = 8,
    CannotRemoveAdministrator = 9,

    // --- Reports (10–12) ---
    InvalidSource = 10,
    NoPriceReports = 11,
    ArithmeticOverflow = 12,

    // --- Funds (13–19) ---
    NullFund = 13,
    DuplicateFund = 14,
    DecimalMismatch = 15,
    FundUnreachable = 16,
    InvalidStrike = 17,
    FundNotFound = 18,
    FundNotConnected = 19,
}
