#![no_std]

multiversx_sc::imports!();

pub mod club_registry_proxy;
pub mod errors;
pub mod fund_ledger_proxy;
pub mod proposal_manager_proxy;
pub mod stake_ledger_proxy;
pub mod types;
pub mod validation;

use errors::{Failure, Outcome, ProposalError};
use types::{Proposal, ProposalStatus, VoteRecord};
use validation::ProposalTerms;

// ============================================================
// Constants
// ============================================================

/// Proposals a club may ever create, until the authority changes it
const DEFAULT_MAX_PROPOSALS_PER_CLUB: u64 = 100;

/// Voting window in blocks (~1 day of 10 minute blocks)
const DEFAULT_VOTING_PERIOD: u64 = 144;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait ProposalManager {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        club_registry_address: ManagedAddress,
        stake_ledger_address: ManagedAddress,
        fund_ledger_address: ManagedAddress,
    ) {
        self.club_registry_address().set(&club_registry_address);
        self.stake_ledger_address().set(&stake_ledger_address);
        self.fund_ledger_address().set(&fund_ledger_address);
        self.max_proposals_per_club().set(DEFAULT_MAX_PROPOSALS_PER_CLUB);
        self.voting_period().set(DEFAULT_VOTING_PERIOD);
        self.next_proposal_id().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setAuthorityContract
    // Write-once. Whoever calls first sets it.
    // ========================================================

    #[endpoint(setAuthorityContract)]
    fn set_authority_contract(&self, principal: ManagedAddress) -> bool {
        if !self.authority_contract().is_empty() {
            sc_panic!(ProposalError::NotAuthorized.message());
        }

        self.authority_contract().set(&principal);
        self.authority_contract_set_event(&principal);
        true
    }

    // ========================================================
    // ENDPOINT: setMaxProposalsPerClub / setVotingPeriod
    // Only require that an authority exists, not that the
    // caller is it.
    // ========================================================

    #[endpoint(setMaxProposalsPerClub)]
    fn set_max_proposals_per_club(&self, new_max: u64) -> bool {
        if let Err(failure) = self.check_tunable(new_max) {
            sc_panic!(failure.message());
        }

        self.max_proposals_per_club().set(new_max);
        self.max_proposals_per_club_changed_event(new_max);
        true
    }

    #[endpoint(setVotingPeriod)]
    fn set_voting_period(&self, new_period: u64) -> bool {
        if let Err(failure) = self.check_tunable(new_period) {
            sc_panic!(failure.message());
        }

        self.voting_period().set(new_period);
        self.voting_period_changed_event(new_period);
        true
    }

    // ========================================================
    // ENDPOINT: proposeInvestment
    // Any club member can ask to spend club funds on a target.
    // ========================================================

    #[endpoint(proposeInvestment)]
    fn propose_investment(
        &self,
        club_id: u64,
        amount: BigUint,
        target: ManagedAddress,
        duration: u64,
        description: ManagedBuffer,
        risk_level: u64,
        expected_return: u64,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        let terms = ProposalTerms {
            amount,
            target,
            duration,
            description,
            risk_level,
            expected_return,
        };
        if let Err(failure) = self.check_propose(club_id, &caller, &terms) {
            sc_panic!(failure.message());
        }

        // Ids come from one global counter, not per club
        let proposal_id = self.next_proposal_id().get();
        let start_time = self.blockchain().get_block_nonce();

        let proposal = Proposal {
            proposer: caller.clone(),
            amount: terms.amount,
            target: terms.target,
            duration: terms.duration,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            status: ProposalStatus::Open,
            start_time,
            description: terms.description,
            risk_level: terms.risk_level,
            expected_return: terms.expected_return,
        };

        self.proposals(club_id, proposal_id).set(&proposal);
        self.proposal_count_by_club(club_id).update(|count| *count += 1);
        self.next_proposal_id().set(proposal_id + 1);

        self.proposal_created_event(club_id, proposal_id, &caller, start_time);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: voteOnProposal
    // One ballot per member, weighted by their whole stake.
    // ========================================================

    #[endpoint(voteOnProposal)]
    fn vote_on_proposal(&self, club_id: u64, proposal_id: u64, ballot: bool) -> bool {
        let caller = self.blockchain().get_caller();
        let (mut proposal, weight) = match self.check_vote(club_id, proposal_id, &caller) {
            Ok(checked) => checked,
            Err(failure) => sc_panic!(failure.message()),
        };

        if ballot {
            proposal.votes_for += &weight;
        } else {
            proposal.votes_against += &weight;
        }

        let record = VoteRecord {
            voter: caller.clone(),
            ballot,
            weight: weight.clone(),
        };
        self.votes(club_id, proposal_id, &caller).set(&record);
        self.proposals(club_id, proposal_id).set(&proposal);

        self.vote_cast_event(club_id, proposal_id, &caller, ballot, &weight);
        true
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // After the voting window, if enough stake voted for it.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, club_id: u64, proposal_id: u64) -> bool {
        let mut proposal = match self.check_execute(club_id, proposal_id) {
            Ok(proposal) => proposal,
            Err(failure) => sc_panic!(failure.message()),
        };

        proposal.status = ProposalStatus::Executed;
        self.proposals(club_id, proposal_id).set(&proposal);

        // A refused transfer aborts the call, which also reverts the status
        if !self.request_transfer(club_id, &proposal.amount, &proposal.target) {
            sc_panic!(ProposalError::FundTransferFailed.message());
        }

        self.proposal_executed_event(club_id, proposal_id, &proposal.target, &proposal.amount);
        true
    }

    // ========================================================
    // ENDPOINT: closeProposal
    // Proposer can withdraw their own proposal while Open.
    // ========================================================

    #[endpoint(closeProposal)]
    fn close_proposal(&self, club_id: u64, proposal_id: u64) -> bool {
        let caller = self.blockchain().get_caller();
        let mut proposal = match self.check_close(club_id, proposal_id, &caller) {
            Ok(proposal) => proposal,
            Err(failure) => sc_panic!(failure.message()),
        };

        proposal.status = ProposalStatus::Closed;
        self.proposals(club_id, proposal_id).set(&proposal);

        self.proposal_closed_event(club_id, proposal_id, &caller);
        true
    }

    // ========================================================
    // INTERNAL: validation chains
    // Each runs its checks in a fixed order and reports the
    // first one that fails.
    // ========================================================

    fn check_tunable(&self, value: u64) -> Outcome<()> {
        if self.authority_contract().is_empty() || value == 0 {
            return Err(ProposalError::NotAuthorized.into());
        }
        Ok(())
    }

    fn check_propose(
        &self,
        club_id: u64,
        caller: &ManagedAddress,
        terms: &ProposalTerms<Self::Api>,
    ) -> Outcome<()> {
        if club_id == 0 {
            return Err(ProposalError::InvalidClubId.into());
        }
        if !self.club_is_active(club_id) {
            return Err(ProposalError::ClubNotActive.into());
        }
        if self.proposal_count_by_club(club_id).get() >= self.max_proposals_per_club().get() {
            return Err(ProposalError::MaxProposalsExceeded.into());
        }

        validation::check_terms(caller, terms)?;

        if !self.is_club_member(club_id, caller) {
            return Err(ProposalError::NotAuthorized.into());
        }
        // Funds shortfall reports INSUFFICIENT_STAKE
        if self.available_funds(club_id) < terms.amount {
            return Err(ProposalError::InsufficientStake.into());
        }
        Ok(())
    }

    fn check_vote(
        &self,
        club_id: u64,
        proposal_id: u64,
        caller: &ManagedAddress,
    ) -> Outcome<(Proposal<Self::Api>, BigUint)> {
        let proposal = self.load_proposal(club_id, proposal_id)?;

        if !self.club_is_active(club_id) {
            return Err(ProposalError::ClubNotActive.into());
        }
        if !self.is_club_member(club_id, caller) {
            return Err(ProposalError::NotAuthorized.into());
        }
        if !proposal.is_open() {
            return Err(ProposalError::ProposalNotOpen.into());
        }
        let now = self.blockchain().get_block_nonce();
        if !validation::voting_open(proposal.start_time, now, self.voting_period().get()) {
            return Err(ProposalError::VotingClosed.into());
        }
        if !self.votes(club_id, proposal_id, caller).is_empty() {
            return Err(ProposalError::AlreadyVoted.into());
        }
        let weight = self.stake_of(club_id, caller);
        if weight == 0u64 {
            return Err(ProposalError::InsufficientStake.into());
        }
        Ok((proposal, weight))
    }

    fn check_execute(&self, club_id: u64, proposal_id: u64) -> Outcome<Proposal<Self::Api>> {
        let proposal = self.load_proposal(club_id, proposal_id)?;

        if !self.club_is_active(club_id) {
            return Err(ProposalError::ClubNotActive.into());
        }
        if !proposal.is_open() {
            return Err(ProposalError::ProposalNotOpen.into());
        }
        let now = self.blockchain().get_block_nonce();
        if validation::voting_open(proposal.start_time, now, self.voting_period().get()) {
            return Err(ProposalError::VotingClosed.into());
        }
        if !validation::threshold_met(&proposal.votes_for) {
            return Err(ProposalError::VotingThresholdNotMet.into());
        }
        Ok(proposal)
    }

    fn check_close(
        &self,
        club_id: u64,
        proposal_id: u64,
        caller: &ManagedAddress,
    ) -> Outcome<Proposal<Self::Api>> {
        let proposal = self.load_proposal(club_id, proposal_id)?;

        if &proposal.proposer != caller {
            return Err(Failure::NotProposer);
        }
        if !proposal.is_open() {
            return Err(ProposalError::ProposalNotOpen.into());
        }
        Ok(proposal)
    }

    fn load_proposal(&self, club_id: u64, proposal_id: u64) -> Outcome<Proposal<Self::Api>> {
        let mapper = self.proposals(club_id, proposal_id);
        if mapper.is_empty() {
            return Err(Failure::ProposalMissing);
        }
        Ok(mapper.get())
    }

    // ========================================================
    // INTERNAL: club services
    // Registry, stake and fund reads are plain sync calls. The
    // collaborator views they hit do not write storage.
    // ========================================================

    fn club_is_active(&self, club_id: u64) -> bool {
        let registry = self.club_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(club_registry_proxy::ClubRegistryProxy)
            .is_active(club_id)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn is_club_member(&self, club_id: u64, member: &ManagedAddress) -> bool {
        let registry = self.club_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(club_registry_proxy::ClubRegistryProxy)
            .is_member(club_id, member.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn stake_of(&self, club_id: u64, member: &ManagedAddress) -> BigUint {
        let ledger = self.stake_ledger_address().get();
        self.tx()
            .to(&ledger)
            .typed(stake_ledger_proxy::StakeLedgerProxy)
            .get_stake(club_id, member.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn available_funds(&self, club_id: u64) -> BigUint {
        let ledger = self.fund_ledger_address().get();
        self.tx()
            .to(&ledger)
            .typed(fund_ledger_proxy::FundLedgerProxy)
            .get_available_funds(club_id)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn request_transfer(&self, club_id: u64, amount: &BigUint, target: &ManagedAddress) -> bool {
        let ledger = self.fund_ledger_address().get();
        self.tx()
            .to(&ledger)
            .typed(fund_ledger_proxy::FundLedgerProxy)
            .transfer(club_id, amount.clone(), target.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, club_id: u64, proposal_id: u64) -> Proposal<Self::Api> {
        match self.load_proposal(club_id, proposal_id) {
            Ok(proposal) => proposal,
            Err(failure) => sc_panic!(failure.message()),
        }
    }

    #[view(getVote)]
    fn get_vote(
        &self,
        club_id: u64,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> OptionalValue<bool> {
        let mapper = self.votes(club_id, proposal_id, voter);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get().ballot)
    }

    #[view(getAuthorityContract)]
    fn get_authority_contract(&self) -> OptionalValue<ManagedAddress> {
        if self.authority_contract().is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.authority_contract().get())
    }

    #[view(getClubServices)]
    fn get_club_services(&self) -> MultiValue3<ManagedAddress, ManagedAddress, ManagedAddress> {
        (
            self.club_registry_address().get(),
            self.stake_ledger_address().get(),
            self.fund_ledger_address().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("authorityContractSet")]
    fn authority_contract_set_event(&self, #[indexed] principal: &ManagedAddress);

    #[event("maxProposalsPerClubChanged")]
    fn max_proposals_per_club_changed_event(&self, #[indexed] new_max: u64);

    #[event("votingPeriodChanged")]
    fn voting_period_changed_event(&self, #[indexed] new_period: u64);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] club_id: u64,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        start_time: u64,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] club_id: u64,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] ballot: bool,
        weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] club_id: u64,
        #[indexed] proposal_id: u64,
        #[indexed] target: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("proposalClosed")]
    fn proposal_closed_event(
        &self,
        #[indexed] club_id: u64,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("clubRegistryAddress")]
    fn club_registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("stakeLedgerAddress")]
    fn stake_ledger_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("fundLedgerAddress")]
    fn fund_ledger_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("authorityContract")]
    fn authority_contract(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getMaxProposalsPerClub)]
    #[storage_mapper("maxProposalsPerClub")]
    fn max_proposals_per_club(&self) -> SingleValueMapper<u64>;

    #[view(getVotingPeriod)]
    #[storage_mapper("votingPeriod")]
    fn voting_period(&self) -> SingleValueMapper<u64>;

    // ── Proposals ──

    #[view(getNextProposalId)]
    #[storage_mapper("nextProposalId")]
    fn next_proposal_id(&self) -> SingleValueMapper<u64>;

    #[view(getProposalCountByClub)]
    #[storage_mapper("proposalCountByClub")]
    fn proposal_count_by_club(&self, club_id: u64) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, club_id: u64, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    // ── Votes ──

    #[storage_mapper("votes")]
    fn votes(
        &self,
        club_id: u64,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord<Self::Api>>;
}
