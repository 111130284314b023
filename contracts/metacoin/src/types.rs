use soroban_sdk::{contracttype, Address};

/// Coins credited to the deploying account.
pub const INITIAL_SUPPLY: i128 = 10_000;

/// ETH units per coin reported by `get_balance_in_eth`.
pub const ETH_CONVERSION_RATE: i128 = 2;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MetaCoinConfig {
    pub owner: Address,
    pub conversion_rate: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    TotalSupply,
    Balance(Address),
}
