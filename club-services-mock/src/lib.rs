#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod club_services_mock_proxy;

/// One payout requested through `transfer`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct TransferRecord<M: ManagedTypeApi> {
    pub club_id: u64,
    pub amount: BigUint<M>,
    pub target: ManagedAddress<M>,
}

/// Stands in for the club registry, the stake ledger and the fund ledger
/// at once. State is set directly by the test through the setters.
#[multiversx_sc::contract]
pub trait ClubServicesMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ── Setters ──

    #[endpoint(setClubActive)]
    fn set_club_active(&self, club_id: u64, active: bool) {
        self.club_active(club_id).set(active);
    }

    #[endpoint(setMember)]
    fn set_member(&self, club_id: u64, member: ManagedAddress, is_member: bool) {
        self.members(club_id, &member).set(is_member);
    }

    #[endpoint(setStake)]
    fn set_stake(&self, club_id: u64, member: ManagedAddress, stake: BigUint) {
        self.stakes(club_id, &member).set(&stake);
    }

    #[endpoint(setFunds)]
    fn set_funds(&self, club_id: u64, funds: BigUint) {
        self.funds(club_id).set(&funds);
    }

    #[endpoint(setRefuseTransfers)]
    fn set_refuse_transfers(&self, refuse: bool) {
        self.refuse_transfers().set(refuse);
    }

    // ── Club registry ──

    #[view(isActive)]
    fn is_active(&self, club_id: u64) -> bool {
        self.club_active(club_id).get()
    }

    #[view(isMember)]
    fn is_member(&self, club_id: u64, member: ManagedAddress) -> bool {
        self.members(club_id, &member).get()
    }

    // ── Stake ledger ──

    #[view(getStake)]
    fn get_stake(&self, club_id: u64, member: ManagedAddress) -> BigUint {
        self.stakes(club_id, &member).get()
    }

    // ── Fund ledger ──

    #[view(getAvailableFunds)]
    fn get_available_funds(&self, club_id: u64) -> BigUint {
        self.funds(club_id).get()
    }

    #[endpoint(transfer)]
    fn transfer(&self, club_id: u64, amount: BigUint, target: ManagedAddress) -> bool {
        if self.refuse_transfers().get() {
            return false;
        }
        let funds = self.funds(club_id).get();
        if funds < amount {
            return false;
        }

        self.funds(club_id).set(&(funds - &amount));
        self.transfers().push(&TransferRecord {
            club_id,
            amount,
            target,
        });
        true
    }

    #[view(getTransferCount)]
    fn get_transfer_count(&self) -> usize {
        self.transfers().len()
    }

    /// 1-based, like the underlying `VecMapper`.
    #[view(getTransfer)]
    fn get_transfer(&self, index: usize) -> MultiValue3<u64, BigUint, ManagedAddress> {
        let record = self.transfers().get(index);
        (record.club_id, record.amount, record.target).into()
    }

    // ── Storage ──

    #[storage_mapper("clubActive")]
    fn club_active(&self, club_id: u64) -> SingleValueMapper<bool>;

    #[storage_mapper("members")]
    fn members(&self, club_id: u64, member: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("stakes")]
    fn stakes(&self, club_id: u64, member: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("funds")]
    fn funds(&self, club_id: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("refuseTransfers")]
    fn refuse_transfers(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("transfers")]
    fn transfers(&self) -> VecMapper<TransferRecord<Self::Api>>;
}
