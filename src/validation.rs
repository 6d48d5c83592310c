use multiversx_sc::api::ManagedTypeApi;
use multiversx_sc::types::{BigUint, ManagedAddress, ManagedBuffer};

use crate::errors::ProposalError;

// ============================================================
// Proposal limits
// Pure checks with no storage access, shared by the contract
// and its tests.
// ============================================================

/// Description length bound, in UTF-8 characters
pub const MAX_DESCRIPTION_CHARS: usize = 256;

/// Worst case byte length of a description that still fits
const MAX_DESCRIPTION_BYTES: usize = MAX_DESCRIPTION_CHARS * 4;

pub const MAX_RISK_LEVEL: u64 = 10;

/// Absolute stake weight `votes_for` must reach before execution
pub const EXECUTION_THRESHOLD: u64 = 50;

// ============================================================
// Proposal terms
// ============================================================

/// Caller-supplied part of a new proposal.
pub struct ProposalTerms<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    pub target: ManagedAddress<M>,
    pub duration: u64,
    pub description: ManagedBuffer<M>,
    pub risk_level: u64,
    pub expected_return: u64,
}

/// Checks the proposal terms in order, first failure wins.
/// Club, quota, membership and funds checks happen around this in the contract.
pub fn check_terms<M: ManagedTypeApi>(
    caller: &ManagedAddress<M>,
    terms: &ProposalTerms<M>,
) -> Result<(), ProposalError> {
    if terms.amount == 0u64 {
        return Err(ProposalError::InvalidProposalAmount);
    }
    if &terms.target == caller {
        return Err(ProposalError::InvalidProposalTarget);
    }
    if terms.duration == 0 {
        return Err(ProposalError::InvalidProposalDuration);
    }
    if !description_fits(&terms.description) {
        return Err(ProposalError::InvalidProposalDescription);
    }
    if terms.risk_level > MAX_RISK_LEVEL {
        return Err(ProposalError::InvalidRiskLevel);
    }
    if terms.expected_return == 0 {
        return Err(ProposalError::InvalidExpectedReturn);
    }
    Ok(())
}

pub fn description_fits<M: ManagedTypeApi>(description: &ManagedBuffer<M>) -> bool {
    let len = description.len();
    if len == 0 || len > MAX_DESCRIPTION_BYTES {
        return false;
    }
    let mut buffer = [0u8; MAX_DESCRIPTION_BYTES];
    let bytes = description.load_to_byte_array(&mut buffer);
    match utf8_char_count(bytes) {
        Some(chars) => (1..=MAX_DESCRIPTION_CHARS).contains(&chars),
        None => false,
    }
}

/// `None` if the bytes are not valid UTF-8.
pub fn utf8_char_count(bytes: &[u8]) -> Option<usize> {
    core::str::from_utf8(bytes).ok().map(|s| s.chars().count())
}

// ============================================================
// Voting window / threshold
// ============================================================

/// Votes are accepted while fewer than `voting_period` blocks have passed.
/// Execution is allowed exactly when this is false.
pub fn voting_open(start_time: u64, now: u64, voting_period: u64) -> bool {
    now.saturating_sub(start_time) < voting_period
}

pub fn threshold_met<M: ManagedTypeApi>(votes_for: &BigUint<M>) -> bool {
    *votes_for >= EXECUTION_THRESHOLD
}
