use soroban_sdk::{contracttype, Address, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub name: Symbol,
    pub vote_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    /// Accumulated voting power; zero means no right to vote.
    pub weight: u32,
    pub voted: bool,
    pub delegate: Option<Address>,
    /// Index of the proposal voted for directly.
    pub vote: Option<u32>,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VoterState {
    NoRight,
    HasRight,
    Voted,
    Delegated,
}

impl Voter {
    pub fn state(&self) -> VoterState {
        if self.delegate.is_some() {
            VoterState::Delegated
        } else if self.voted {
            VoterState::Voted
        } else if self.weight > 0 {
            VoterState::HasRight
        } else {
            VoterState::NoRight
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BallotConfig {
    pub chairperson: Address,
    pub proposal_count: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Proposal(u32),
    Voter(Address),
    VoterCount,
}
