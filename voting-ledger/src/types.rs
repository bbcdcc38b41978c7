multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Length in bytes of a proposal name (a `bytes32` identifier).
pub const PROPOSAL_NAME_LEN: usize = 32;

pub type ProposalName<M> = ManagedByteArray<M, PROPOSAL_NAME_LEN>;

// ============================================================
// Proposal — fixed at deploy time, only vote_count ever moves
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub name: ProposalName<M>,
    pub vote_count: u64,
}

// ============================================================
// Voter — lazily materialized, see `VotingLedger::load_voter`
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Voter<M: ManagedTypeApi> {
    /// Accumulated voting power. 0 means no right to vote.
    pub weight: u64,
    /// Set by `vote` or `delegate`. Never reset.
    pub voted: bool,
    /// Final delegate resolved at delegation time.
    pub delegate: Option<ManagedAddress<M>>,
    /// Index of the proposal voted for directly.
    pub vote: Option<usize>,
}

impl<M: ManagedTypeApi> Default for Voter<M> {
    fn default() -> Self {
        Voter {
            weight: 0,
            voted: false,
            delegate: None,
            vote: None,
        }
    }
}
