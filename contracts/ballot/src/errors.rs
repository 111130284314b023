use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum BallotError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Only the chairperson may grant voting rights.
    Unauthorized = 3,
    AlreadyVoted = 4,
    AlreadyHasRight = 5,
    SelfDelegation = 6,
    /// Delegation would loop back to the caller, or the chain is longer
    /// than the number of known voters.
    CircularDelegation = 7,
    NoRight = 8,
    InvalidProposal = 9,
    Overflow = 10,
}
