multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Price Proposal — one bucket per distinct proposed price
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PriceProposal<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    /// Sum of the frozen weights of every ballot cast for this price
    pub weight: BigUint<M>,
}

// ============================================================
// Ballot — one per (round, voter), immutable once cast
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Ballot<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    /// Voter balance at cast time. Never re-derived from live balance.
    pub weight: BigUint<M>,
    pub cast_at: u64,
}
