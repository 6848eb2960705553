multiversx_sc::imports!();

use crate::types::{Ballot, PriceProposal};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration ──

    #[storage_mapper("votingDuration")]
    fn voting_duration(&self) -> SingleValueMapper<u64>;

    // ── Ledger ──

    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balance")]
    fn balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowances")]
    fn allowances(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    // ── Exchange ──

    #[storage_mapper("tokenPrice")]
    fn token_price(&self) -> SingleValueMapper<BigUint>;

    // ── Voting rounds ──

    #[storage_mapper("votingOpen")]
    fn voting_open(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("roundId")]
    fn round_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("roundStartTime")]
    fn round_start_time(&self) -> SingleValueMapper<u64>;

    /// Buckets in first-proposal order. Cleared when the next round opens.
    #[storage_mapper("roundProposals")]
    fn round_proposals(&self, round_id: u64) -> VecMapper<PriceProposal<Self::Api>>;

    /// 1-based position of a price inside `round_proposals`, 0 when absent.
    /// Cleared together with the buckets.
    #[storage_mapper("proposalIndex")]
    fn proposal_index(&self, round_id: u64, price: &BigUint) -> SingleValueMapper<usize>;

    /// Kept after the round closes; grows by one entry per ballot cast
    #[storage_mapper("ballots")]
    fn ballots(&self, round_id: u64, voter: &ManagedAddress) -> SingleValueMapper<Ballot<Self::Api>>;

    #[storage_mapper("ballotCount")]
    fn ballot_count(&self, round_id: u64) -> SingleValueMapper<u64>;
}
