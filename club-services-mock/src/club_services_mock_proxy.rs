use multiversx_sc::proxy_imports::*;

pub struct ClubServicesMockProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ClubServicesMockProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ClubServicesMockProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ClubServicesMockProxyMethods { wrapped_tx: tx }
    }
}

pub struct ClubServicesMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> ClubServicesMockProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> ClubServicesMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_club_active<Arg0: ProxyArg<u64>, Arg1: ProxyArg<bool>>(
        self,
        club_id: Arg0,
        active: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setClubActive")
            .argument(&club_id)
            .argument(&active)
            .original_result()
    }

    pub fn set_member<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<bool>,
    >(
        self,
        club_id: Arg0,
        member: Arg1,
        is_member: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMember")
            .argument(&club_id)
            .argument(&member)
            .argument(&is_member)
            .original_result()
    }

    pub fn set_stake<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        club_id: Arg0,
        member: Arg1,
        stake: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setStake")
            .argument(&club_id)
            .argument(&member)
            .argument(&stake)
            .original_result()
    }

    pub fn set_funds<Arg0: ProxyArg<u64>, Arg1: ProxyArg<BigUint<Env::Api>>>(
        self,
        club_id: Arg0,
        funds: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setFunds")
            .argument(&club_id)
            .argument(&funds)
            .original_result()
    }

    pub fn set_refuse_transfers<Arg0: ProxyArg<bool>>(
        self,
        refuse: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRefuseTransfers")
            .argument(&refuse)
            .original_result()
    }

    pub fn is_active<Arg0: ProxyArg<u64>>(
        self,
        club_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isActive")
            .argument(&club_id)
            .original_result()
    }

    pub fn is_member<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        club_id: Arg0,
        member: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isMember")
            .argument(&club_id)
            .argument(&member)
            .original_result()
    }

    pub fn get_stake<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        club_id: Arg0,
        member: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStake")
            .argument(&club_id)
            .argument(&member)
            .original_result()
    }

    pub fn get_available_funds<Arg0: ProxyArg<u64>>(
        self,
        club_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAvailableFunds")
            .argument(&club_id)
            .original_result()
    }

    pub fn transfer<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        club_id: Arg0,
        amount: Arg1,
        target: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transfer")
            .argument(&club_id)
            .argument(&amount)
            .argument(&target)
            .original_result()
    }

    pub fn get_transfer_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTransferCount")
            .original_result()
    }

    pub fn get_transfer<Arg0: ProxyArg<usize>>(
        self,
        index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue3<u64, BigUint<Env::Api>, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTransfer")
            .argument(&index)
            .original_result()
    }
}
