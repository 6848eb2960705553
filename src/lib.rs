#![no_std]

multiversx_sc::imports!();

pub mod events;
pub mod exchange;
pub mod ledger;
pub mod storage;
pub mod types;
pub mod votable_token_proxy;
pub mod voting;

// ============================================================
// Constants
// ============================================================

/// Units minted to the deployer at genesis
const GENESIS_SUPPLY: u64 = 999;

// ============================================================
// Contract
// ============================================================

/// Single-asset ledger with an EGLD exchange whose unit price is set by
/// balance-weighted voting rounds.
#[multiversx_sc::contract]
pub trait VotableToken:
    ledger::LedgerModule
    + exchange::ExchangeModule
    + voting::VotingModule
    + storage::StorageModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, initial_price: BigUint, voting_duration: u64) {
        require!(initial_price > 0u64, "Price must be greater than zero");
        require!(voting_duration > 0, "Voting duration must be greater than zero");

        self.token_price().set(&initial_price);
        self.voting_duration().set(voting_duration);
        self.voting_open().set(false);
        self.round_id().set(0u64);
        self.total_supply().set(BigUint::zero());

        let deployer = self.blockchain().get_caller();
        let genesis = BigUint::from(GENESIS_SUPPLY);
        self.mint(&deployer, &genesis);
        self.transfer_event(&ManagedAddress::zero(), &deployer, &genesis);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<u64, u64, u64> {
        let duration = self.voting_duration().get();
        (duration, voting::ELIGIBILITY_BPS, voting::BPS_DENOMINATOR).into()
    }
}
