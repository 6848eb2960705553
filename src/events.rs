multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Ledger ──

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("burn")]
    fn burn_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    // ── Exchange ──

    #[event("buy")]
    fn buy_event(
        &self,
        #[indexed] buyer: &ManagedAddress,
        #[indexed] payment: &BigUint,
        units: &BigUint,
    );

    #[event("sell")]
    fn sell_event(
        &self,
        #[indexed] seller: &ManagedAddress,
        #[indexed] amount: &BigUint,
        payout: &BigUint,
    );

    // ── Voting ──

    #[event("votingStarted")]
    fn voting_started_event(&self, #[indexed] round_id: u64, #[indexed] start_time: u64);

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] price: &BigUint,
        weight: &BigUint,
    );

    #[event("votingEnded")]
    fn voting_ended_event(&self, #[indexed] round_id: u64, price: &BigUint);
}
