use soroban_sdk::{Address, Env};

use crate::errors::BallotError;
use crate::types::{BallotConfig, DataKey, Proposal, Voter};

// Roughly 30 days of ledgers at ~5s per ledger.
const VOTER_TTL_LEDGERS: u32 = 518_400;
const VOTER_TTL_THRESHOLD: u32 = VOTER_TTL_LEDGERS / 2;

// ── Config ───────────────────────────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<BallotConfig, BallotError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(BallotError::NotInitialized)
}

pub fn set_config(env: &Env, config: &BallotConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal(env: &Env, index: u32) -> Result<Proposal, BallotError> {
    env.storage()
        .instance()
        .get(&DataKey::Proposal(index))
        .ok_or(BallotError::InvalidProposal)
}

pub fn set_proposal(env: &Env, index: u32, proposal: &Proposal) {
    env.storage()
        .instance()
        .set(&DataKey::Proposal(index), proposal);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, voter: &Address) -> Voter {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(voter.clone()))
        .unwrap_or_default()
}

/// Stores a voter record, counting it as known the first time it is written.
pub fn set_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    if !env.storage().persistent().has(&key) {
        let count = get_voter_count(env);
        env.storage()
            .instance()
            .set(&DataKey::VoterCount, &(count + 1));
    }
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, VOTER_TTL_THRESHOLD, VOTER_TTL_LEDGERS);
}

pub fn get_voter_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::VoterCount)
        .unwrap_or(0)
}
