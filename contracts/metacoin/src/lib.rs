//! Toy currency ledger: a fixed supply minted to the deployer and moved
//! between accounts with `send_coin`.

#![no_std]

mod coin;
mod errors;
mod storage;
mod types;

pub use errors::MetaCoinError;
pub use types::{MetaCoinConfig, ETH_CONVERSION_RATE, INITIAL_SUPPLY};

use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct MetaCoinContract;

#[contractimpl]
impl MetaCoinContract {
    pub fn initialize(env: Env, owner: Address) -> Result<(), MetaCoinError> {
        owner.require_auth();
        if storage::has_config(&env) {
            return Err(MetaCoinError::AlreadyInitialized);
        }

        storage::set_config(
            &env,
            &MetaCoinConfig {
                owner: owner.clone(),
                conversion_rate: ETH_CONVERSION_RATE,
            },
        );
        coin::mint(&env, &owner, INITIAL_SUPPLY)
    }

    pub fn send_coin(
        env: Env,
        sender: Address,
        receiver: Address,
        amount: i128,
    ) -> Result<(), MetaCoinError> {
        sender.require_auth();
        storage::get_config(&env)?;
        coin::transfer(&env, &sender, &receiver, amount)
    }

    pub fn get_balance(env: Env, account: Address) -> i128 {
        storage::get_balance(&env, &account)
    }

    /// Balance expressed in ETH through the linked conversion library.
    pub fn get_balance_in_eth(env: Env, account: Address) -> Result<i128, MetaCoinError> {
        let config = storage::get_config(&env)?;
        let balance = storage::get_balance(&env, &account);
        convert_lib::convert(balance, config.conversion_rate).ok_or(MetaCoinError::Overflow)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn owner(env: Env) -> Result<Address, MetaCoinError> {
        Ok(storage::get_config(&env)?.owner)
    }
}
