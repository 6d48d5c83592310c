use multiversx_sc::proxy_imports::*;

use crate::types::Proposal;

pub struct ProposalManagerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ProposalManagerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ProposalManagerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ProposalManagerProxyMethods { wrapped_tx: tx }
    }
}

pub struct ProposalManagerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> ProposalManagerProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        club_registry_address: Arg0,
        stake_ledger_address: Arg1,
        fund_ledger_address: Arg2,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&club_registry_address)
            .argument(&stake_ledger_address)
            .argument(&fund_ledger_address)
            .original_result()
    }
}

impl<Env, From, To, Gas> ProposalManagerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> ProposalManagerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_authority_contract<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        principal: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setAuthorityContract")
            .argument(&principal)
            .original_result()
    }

    pub fn set_max_proposals_per_club<Arg0: ProxyArg<u64>>(
        self,
        new_max: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMaxProposalsPerClub")
            .argument(&new_max)
            .original_result()
    }

    pub fn set_voting_period<Arg0: ProxyArg<u64>>(
        self,
        new_period: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setVotingPeriod")
            .argument(&new_period)
            .original_result()
    }

    #[allow(clippy::too_many_arguments)]
    #[allow(clippy::type_complexity)]
    pub fn propose_investment<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg5: ProxyArg<u64>,
        Arg6: ProxyArg<u64>,
    >(
        self,
        club_id: Arg0,
        amount: Arg1,
        target: Arg2,
        duration: Arg3,
        description: Arg4,
        risk_level: Arg5,
        expected_return: Arg6,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposeInvestment")
            .argument(&club_id)
            .argument(&amount)
            .argument(&target)
            .argument(&duration)
            .argument(&description)
            .argument(&risk_level)
            .argument(&expected_return)
            .original_result()
    }

    pub fn vote_on_proposal<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>, Arg2: ProxyArg<bool>>(
        self,
        club_id: Arg0,
        proposal_id: Arg1,
        ballot: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("voteOnProposal")
            .argument(&club_id)
            .argument(&proposal_id)
            .argument(&ballot)
            .original_result()
    }

    pub fn execute_proposal<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        club_id: Arg0,
        proposal_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("executeProposal")
            .argument(&club_id)
            .argument(&proposal_id)
            .original_result()
    }

    pub fn close_proposal<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        club_id: Arg0,
        proposal_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("closeProposal")
            .argument(&club_id)
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        club_id: Arg0,
        proposal_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&club_id)
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_vote<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        club_id: Arg0,
        proposal_id: Arg1,
        voter: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<bool>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVote")
            .argument(&club_id)
            .argument(&proposal_id)
            .argument(&voter)
            .original_result()
    }

    pub fn get_authority_contract(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAuthorityContract")
            .original_result()
    }

    pub fn get_club_services(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue3<ManagedAddress<Env::Api>, ManagedAddress<Env::Api>, ManagedAddress<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getClubServices")
            .original_result()
    }

    pub fn max_proposals_per_club(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMaxProposalsPerClub")
            .original_result()
    }

    pub fn voting_period(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotingPeriod")
            .original_result()
    }

    pub fn next_proposal_id(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNextProposalId")
            .original_result()
    }

    pub fn proposal_count_by_club<Arg0: ProxyArg<u64>>(
        self,
        club_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalCountByClub")
            .argument(&club_id)
            .original_result()
    }
}
