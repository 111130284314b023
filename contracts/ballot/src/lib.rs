//! Single-chairperson ballot with transitive vote delegation.
//!
//! The chairperson named at initialization holds one vote and is the only
//! identity that may grant voting rights. Voters either cast their weight on
//! a proposal or hand it to another voter; delegation follows the delegate's
//! own delegation at call time and refuses to close a cycle.

#![no_std]

#[cfg(test)]
extern crate std;

mod delegation;
mod engine;
mod errors;
mod storage;
mod types;

pub use errors::BallotError;
pub use types::{BallotConfig, Proposal, Voter, VoterState};

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

#[contract]
pub struct BallotContract;

#[contractimpl]
impl BallotContract {
    /// Creates the ballot with `chairperson` as its only voter and one
    /// proposal per name, in the order given.
    ///
    /// Names are `Symbol`s: at most 32 characters from `[a-zA-Z0-9_]`, so
    /// spaces and punctuation are not accepted.
    pub fn initialize(
        env: Env,
        chairperson: Address,
        proposal_names: Vec<Symbol>,
    ) -> Result<(), BallotError> {
        chairperson.require_auth();
        engine::initialize(&env, &chairperson, &proposal_names)
    }

    // ── Voting ────────────────────────────────────────────────────────────────

    pub fn give_right_to_vote(env: Env, caller: Address, target: Address) -> Result<(), BallotError> {
        caller.require_auth();
        engine::give_right_to_vote(&env, &caller, &target)
    }

    pub fn delegate(env: Env, caller: Address, to: Address) -> Result<(), BallotError> {
        caller.require_auth();
        engine::delegate(&env, &caller, &to)
    }

    pub fn vote(env: Env, caller: Address, proposal: u32) -> Result<(), BallotError> {
        caller.require_auth();
        engine::vote(&env, &caller, proposal)
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn winning_proposal(env: Env) -> Result<u32, BallotError> {
        engine::winning_proposal(&env)
    }

    pub fn winner_name(env: Env) -> Result<Symbol, BallotError> {
        engine::winner_name(&env)
    }

    pub fn voters(env: Env, voter: Address) -> Voter {
        storage::get_voter(&env, &voter)
    }

    pub fn voter_state(env: Env, voter: Address) -> VoterState {
        storage::get_voter(&env, &voter).state()
    }

    pub fn proposals(env: Env, index: u32) -> Result<Proposal, BallotError> {
        let config = storage::get_config(&env)?;
        if index >= config.proposal_count {
            return Err(BallotError::InvalidProposal);
        }
        storage::get_proposal(&env, index)
    }

    pub fn proposal_count(env: Env) -> Result<u32, BallotError> {
        Ok(storage::get_config(&env)?.proposal_count)
    }

    pub fn chairperson(env: Env) -> Result<Address, BallotError> {
        Ok(storage::get_config(&env)?.chairperson)
    }
}
