multiversx_sc::imports!();

use crate::types::{Ballot, PriceProposal};
use crate::{events, storage};

/// Voters need at least 0.05% of the live total supply (5 basis points)
pub const ELIGIBILITY_BPS: u64 = 5;

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Round state machine: Closed --startVoting--> Open --endVoting--> Closed.
///
/// Ballots, buckets and counters are keyed by round id, so opening a round
/// starts from empty state. Opening a round also drops the previous round's
/// price buckets; its ballots stay (one entry per voter per round).
#[multiversx_sc::module]
pub trait VotingModule: storage::StorageModule + events::EventsModule {
    // ========================================================
    // ENDPOINT: startVoting
    // ========================================================

    #[endpoint(startVoting)]
    fn start_voting(&self) -> u64 {
        require!(!self.voting_open().get(), "Voting is already open");

        let previous_round = self.round_id().get();
        self.clear_buckets(previous_round);

        let round_id = previous_round + 1u64;
        let now = self.blockchain().get_block_timestamp();

        self.round_id().set(round_id);
        self.round_start_time().set(now);
        self.voting_open().set(true);

        self.voting_started_event(round_id, now);
        round_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Weight is the caller's balance right now, frozen into the ballot.
    // Referrer addresses are accepted and ignored.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, price: BigUint, _referrers: MultiValueEncoded<ManagedAddress>) {
        let caller = self.blockchain().get_caller();
        require!(self.voting_open().get(), "Voting is not open");

        let now = self.blockchain().get_block_timestamp();
        require!(now < self.voting_end_time(), "Voting period has expired");
        require!(price > 0u64, "Price must be greater than zero");

        let weight = self.balance(&caller).get();
        require!(
            self.is_eligible(&weight),
            "Voter must hold at least 0.05% of total supply"
        );

        let round_id = self.round_id().get();
        require!(
            self.ballots(round_id, &caller).is_empty(),
            "Already voted in this round"
        );

        self.add_to_bucket(round_id, &price, &weight);

        let ballot = Ballot {
            price: price.clone(),
            weight: weight.clone(),
            cast_at: now,
        };
        self.ballots(round_id, &caller).set(&ballot);
        self.ballot_count(round_id).update(|count| *count += 1);

        self.vote_event(&caller, &price, &weight);
    }

    // ========================================================
    // ENDPOINT: endVoting
    // Callable by anyone once the window has elapsed.
    // ========================================================

    #[endpoint(endVoting)]
    fn end_voting(&self) -> BigUint {
        require!(self.voting_open().get(), "Voting is not open");

        let now = self.blockchain().get_block_timestamp();
        require!(now >= self.voting_end_time(), "Voting period has not ended");

        let round_id = self.round_id().get();
        if let Some(winning_price) = self.resolve_winner(round_id) {
            self.token_price().set(&winning_price);
        }
        self.voting_open().set(false);

        let price = self.token_price().get();
        self.voting_ended_event(round_id, &price);
        price
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn voting_end_time(&self) -> u64 {
        self.round_start_time().get() + self.voting_duration().get()
    }

    /// `balance >= totalSupply * 0.05%`, compared without division.
    ///
    /// A zero balance is rejected before the ratio check. Against a zero
    /// supply the ratio alone would pass `0 >= 0` and admit a zero-weight
    /// ballot, which could then win resolution by default.
    fn is_eligible(&self, balance: &BigUint) -> bool {
        if *balance == 0u64 {
            return false;
        }
        let total_supply = self.total_supply().get();
        balance * BPS_DENOMINATOR >= total_supply * ELIGIBILITY_BPS
    }

    fn clear_buckets(&self, round_id: u64) {
        let mut proposals = self.round_proposals(round_id);
        for proposal in proposals.iter() {
            self.proposal_index(round_id, &proposal.price).clear();
        }
        proposals.clear();
    }

    fn add_to_bucket(&self, round_id: u64, price: &BigUint, weight: &BigUint) {
        let index_mapper = self.proposal_index(round_id, price);
        let index = index_mapper.get();

        if index == 0 {
            let proposal = PriceProposal {
                price: price.clone(),
                weight: weight.clone(),
            };
            let new_index = self.round_proposals(round_id).push(&proposal);
            index_mapper.set(new_index);
        } else {
            let mut proposal = self.round_proposals(round_id).get(index);
            proposal.weight += weight;
            self.round_proposals(round_id).set(index, &proposal);
        }
    }

    /// Strictly greatest cumulative weight wins. Buckets are visited in
    /// first-proposal order and only a strictly heavier bucket replaces the
    /// leader, so ties go to the earliest bucket.
    fn resolve_winner(&self, round_id: u64) -> Option<BigUint> {
        let mut leader: Option<PriceProposal<Self::Api>> = None;

        for proposal in self.round_proposals(round_id).iter() {
            let leads = match &leader {
                Some(best) => proposal.weight > best.weight,
                None => true,
            };
            if leads {
                leader = Some(proposal);
            }
        }

        leader.map(|proposal| proposal.price)
    }

    // ========================================================
    // VIEWS
    // Round-scoped views read the current or most recent round.
    // ========================================================

    #[view(votingPower)]
    fn voting_power(&self, account: &ManagedAddress) -> BigUint {
        self.balance(account).get()
    }

    #[view(getPricesList)]
    fn get_prices_list(&self) -> MultiValueEncoded<BigUint> {
        let mut result = MultiValueEncoded::new();
        let round_id = self.round_id().get();
        for proposal in self.round_proposals(round_id).iter() {
            result.push(proposal.price);
        }
        result
    }

    #[view(getPriceWeight)]
    fn get_price_weight(&self, price: &BigUint) -> BigUint {
        let round_id = self.round_id().get();
        let index = self.proposal_index(round_id, price).get();
        if index == 0 {
            return BigUint::zero();
        }
        self.round_proposals(round_id).get(index).weight
    }

    #[view(totalVotesCount)]
    fn total_votes_count(&self) -> u64 {
        self.ballot_count(self.round_id().get()).get()
    }

    #[view(hasVoted)]
    fn has_voted(&self, voter: &ManagedAddress) -> bool {
        !self.ballots(self.round_id().get(), voter).is_empty()
    }

    #[view(getBallot)]
    fn get_ballot(&self, voter: &ManagedAddress) -> Ballot<Self::Api> {
        let ballot_mapper = self.ballots(self.round_id().get(), voter);
        require!(!ballot_mapper.is_empty(), "No ballot for this voter");
        ballot_mapper.get()
    }

    #[view(getVotingStatus)]
    fn get_voting_status(&self) -> MultiValue4<bool, u64, u64, u64> {
        let round_id = self.round_id().get();
        if round_id == 0 {
            return (false, 0u64, 0u64, 0u64).into();
        }
        let is_open = self.voting_open().get();
        let start_time = self.round_start_time().get();
        (is_open, round_id, start_time, self.voting_end_time()).into()
    }

    /// Smallest whole-unit balance that passes the eligibility gate
    #[view(getEligibilityThreshold)]
    fn get_eligibility_threshold(&self) -> BigUint {
        let scaled =
            self.total_supply().get() * ELIGIBILITY_BPS + BigUint::from(BPS_DENOMINATOR - 1);
        let threshold = scaled / BPS_DENOMINATOR;
        if threshold == 0u64 {
            BigUint::from(1u64)
        } else {
            threshold
        }
    }
}
