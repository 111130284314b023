use soroban_sdk::{Address, Env};

use crate::errors::MetaCoinError;
use crate::types::{DataKey, MetaCoinConfig};

const BALANCE_TTL_LEDGERS: u32 = 518_400;
const BALANCE_TTL_THRESHOLD: u32 = BALANCE_TTL_LEDGERS / 2;

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<MetaCoinConfig, MetaCoinError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(MetaCoinError::NotInitialized)
}

pub fn set_config(env: &Env, config: &MetaCoinConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_balance(env: &Env, owner: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, owner: &Address, amount: i128) {
    let key = DataKey::Balance(owner.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_TTL_THRESHOLD, BALANCE_TTL_LEDGERS);
}
