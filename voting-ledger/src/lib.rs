#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod types;

use errors::*;
use types::{Proposal, ProposalName, Voter};

// ============================================================
// Contract
// ============================================================

/// Delegated-voting ballot. A single chairperson hands out voting
/// rights; every voter either votes once for a proposal or delegates
/// their whole weight to another voter.
#[multiversx_sc::contract]
pub trait VotingLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, proposal_names: MultiValueEncoded<ProposalName<Self::Api>>) {
        let chairperson = self.blockchain().get_caller();
        self.chairperson().set(&chairperson);
        self.voter(&chairperson).set(&Voter {
            weight: 1,
            ..Voter::default()
        });

        for name in proposal_names.into_iter() {
            self.proposals().push(&Proposal {
                name,
                vote_count: 0,
            });
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: giveRightToVote
    // Chairperson only. Never lowers weight already delegated to
    // the voter.
    // ========================================================

    #[endpoint(giveRightToVote)]
    fn give_right_to_vote(&self, voter_address: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.chairperson().get(), ERR_NOT_CHAIRPERSON);

        let mut voter = self.load_voter(&voter_address);
        require!(!voter.voted, ERR_VOTER_ALREADY_VOTED);

        if voter.weight == 0 {
            voter.weight = 1;
            self.voter(&voter_address).set(&voter);
        }

        self.right_granted_event(&voter_address);
    }

    // ========================================================
    // ENDPOINT: delegate
    // Hands the caller's weight to the end of the delegation
    // chain starting at `to`. Consumes the caller's vote.
    // ========================================================

    #[endpoint(delegate)]
    fn delegate(&self, to: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        let mut sender = self.load_voter(&caller);
        require!(!sender.voted, ERR_DELEGATOR_ALREADY_VOTED);
        require!(to != caller, ERR_SELF_DELEGATION);

        let target = self.resolve_delegate(&caller, to);

        sender.voted = true;
        sender.delegate = Some(target.clone());
        self.voter(&caller).set(&sender);
        self.delegators().insert(caller.clone());

        let mut final_voter = self.load_voter(&target);
        match final_voter.vote {
            // Delegate already voted: count the weight straight away.
            Some(index) => self.add_votes(index, sender.weight),
            None => {
                final_voter.weight = self.checked_add(final_voter.weight, sender.weight);
                self.voter(&target).set(&final_voter);
            },
        }

        self.delegated_event(&caller, &target, sender.weight);
    }

    // ========================================================
    // ENDPOINT: vote
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal: usize) {
        let caller = self.blockchain().get_caller();
        let mut sender = self.load_voter(&caller);
        require!(sender.weight != 0, ERR_NO_RIGHT_TO_VOTE);
        require!(!sender.voted, ERR_ALREADY_VOTED);
        require!(proposal < self.proposals().len(), ERR_INVALID_PROPOSAL);

        sender.voted = true;
        sender.vote = Some(proposal);
        self.voter(&caller).set(&sender);

        self.add_votes(proposal, sender.weight);

        self.voted_event(&caller, proposal, sender.weight);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Unknown addresses read as a default voter (no weight, not voted).
    fn load_voter(&self, address: &ManagedAddress) -> Voter<Self::Api> {
        let mapper = self.voter(address);
        if mapper.is_empty() {
            Voter::default()
        } else {
            mapper.get()
        }
    }

    /// Follows `delegate` links from `to` until an address without one.
    /// Every hop leaves an address in `delegators`, so an acyclic chain
    /// takes at most `delegators().len()` hops.
    fn resolve_delegate(&self, caller: &ManagedAddress, to: ManagedAddress) -> ManagedAddress {
        let population = self.delegators().len();
        let mut target = to;
        let mut hops = 0usize;

        while let Some(next) = self.load_voter(&target).delegate {
            require!(&next != caller, ERR_DELEGATION_LOOP);
            hops += 1;
            // Unreachable while delegation stays acyclic; guards the loop
            // against corrupted storage.
            require!(hops <= population, ERR_DELEGATION_LOOP);
            target = next;
        }

        target
    }

    fn add_votes(&self, index: usize, weight: u64) {
        require!(index < self.proposals().len(), ERR_INVALID_PROPOSAL);

        // VecMapper is 1-based
        let mut proposal = self.proposals().get(index + 1);
        proposal.vote_count = self.checked_add(proposal.vote_count, weight);
        self.proposals().set(index + 1, &proposal);
    }

    fn checked_add(&self, a: u64, b: u64) -> u64 {
        match a.checked_add(b) {
            Some(sum) => sum,
            None => sc_panic!(ERR_OVERFLOW),
        }
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    /// Lowest index holding the strictly greatest vote count.
    #[view(winningProposal)]
    fn winning_proposal(&self) -> usize {
        require!(!self.proposals().is_empty(), ERR_INVALID_PROPOSAL);

        let mut winning = 0usize;
        let mut winning_count = 0u64;
        for (index, proposal) in self.proposals().iter().enumerate() {
            if proposal.vote_count > winning_count {
                winning_count = proposal.vote_count;
                winning = index;
            }
        }
        winning
    }

    #[view(winnerName)]
    fn winner_name(&self) -> ProposalName<Self::Api> {
        let winning = self.winning_proposal();
        self.proposals().get(winning + 1).name
    }

    #[view(proposals)]
    fn get_proposal(&self, index: usize) -> Proposal<Self::Api> {
        require!(index < self.proposals().len(), ERR_INVALID_PROPOSAL);
        self.proposals().get(index + 1)
    }

    #[view(proposalCount)]
    fn proposal_count(&self) -> usize {
        self.proposals().len()
    }

    #[view(getAllProposals)]
    fn get_all_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for proposal in self.proposals().iter() {
            result.push(proposal);
        }
        result
    }

    #[view(voters)]
    fn get_voter(&self, address: ManagedAddress) -> Voter<Self::Api> {
        self.load_voter(&address)
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue2<ManagedAddress, usize> {
        (self.chairperson().get(), self.proposals().len()).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("rightGranted")]
    fn right_granted_event(&self, #[indexed] voter: &ManagedAddress);

    #[event("delegated")]
    fn delegated_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        weight: u64,
    );

    #[event("voted")]
    fn voted_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] proposal: usize,
        weight: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(chairperson)]
    #[storage_mapper("chairperson")]
    fn chairperson(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("proposals")]
    fn proposals(&self) -> VecMapper<Proposal<Self::Api>>;

    #[storage_mapper("voter")]
    fn voter(&self, address: &ManagedAddress) -> SingleValueMapper<Voter<Self::Api>>;

    /// Addresses holding a `delegate` link. Bounds delegation walks.
    #[storage_mapper("delegators")]
    fn delegators(&self) -> UnorderedSetMapper<ManagedAddress>;
}
