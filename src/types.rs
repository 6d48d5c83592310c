multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status: lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Accepting votes until the voting window closes, then executable.
    Open,
    /// Funds transferred to the target. Terminal state.
    Executed,
    /// Withdrawn by its proposer. Terminal state.
    Closed,
}

// ============================================================
// Proposal: one per (club, proposal id)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub proposer: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub target: ManagedAddress<M>,
    /// Informational only, does not bound the voting window
    pub duration: u64,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
    pub status: ProposalStatus,
    /// Block nonce at creation
    pub start_time: u64,
    pub description: ManagedBuffer<M>,
    pub risk_level: u64,
    pub expected_return: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_open(&self) -> bool {
        self.status == ProposalStatus::Open
    }
}

// ============================================================
// Vote Record: presence is the exactly-once guard
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub ballot: bool,
    pub weight: BigUint<M>,
}
