// Shared scenario harness for the Votable Token blackbox tests.
//
// Drives the contract through its typed proxy on the Rust VM, so no
// compiled .wasm is needed to run these tests.

#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;
use votable_token::votable_token_proxy::VotableTokenProxy;

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const ALICE: TestAddress = TestAddress::new("alice");
pub const BOB: TestAddress = TestAddress::new("bob");
pub const CAROL: TestAddress = TestAddress::new("carol");
pub const TOKEN: TestSCAddress = TestSCAddress::new("votable-token");
pub const CODE_PATH: MxscPath = MxscPath::new("output/votable-token.mxsc.json");

pub const VOTING_DURATION: u64 = 86_400;
pub const START_TIME: u64 = 1_000;
pub const INITIAL_EGLD: u64 = 10_000;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, votable_token::ContractBuilder);
    blockchain
}

pub fn no_referrers() -> MultiValueEncoded<StaticApi, ManagedAddress<StaticApi>> {
    MultiValueEncoded::new()
}

pub struct TokenTestState {
    pub world: ScenarioWorld,
}

impl TokenTestState {
    pub fn new() -> Self {
        Self::with_price(1)
    }

    pub fn with_price(initial_price: u64) -> Self {
        let mut world = world();

        for account in [OWNER, ALICE, BOB, CAROL] {
            world.account(account).nonce(1).balance(INITIAL_EGLD);
        }
        world.current_block().block_timestamp(START_TIME);

        world
            .tx()
            .from(OWNER)
            .typed(VotableTokenProxy)
            .init(initial_price, VOTING_DURATION)
            .code(CODE_PATH)
            .new_address(TOKEN)
            .run();

        Self { world }
    }

    // ── Ledger ──

    pub fn transfer(&mut self, from: TestAddress, to: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .transfer(to, amount)
            .run();
    }

    pub fn approve(&mut self, owner: TestAddress, spender: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(owner)
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .approve(spender, amount)
            .run();
    }

    pub fn check_balance(&mut self, account: TestAddress, expected: u64) {
        self.world
            .query()
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .balance_of(account)
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_total_supply(&mut self, expected: u64) {
        self.world
            .query()
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .get_total_supply()
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_allowance(&mut self, owner: TestAddress, spender: TestAddress, expected: u64) {
        self.world
            .query()
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .get_allowance(owner, spender)
            .returns(ExpectValue(expected))
            .run();
    }

    /// Sums the ledger over every account the tests touch and checks it
    /// against the reported supply.
    pub fn check_conservation(&mut self) {
        let mut sum = 0u64;
        for account in [OWNER, ALICE, BOB, CAROL] {
            let balance = self
                .world
                .query()
                .to(TOKEN)
                .typed(VotableTokenProxy)
                .balance_of(account)
                .returns(ReturnsResult)
                .run();
            sum += balance.to_u64().unwrap();
        }
        self.check_total_supply(sum);
    }

    // ── Exchange ──

    pub fn buy(&mut self, buyer: TestAddress, payment: u64) {
        self.world
            .tx()
            .from(buyer)
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .buy(no_referrers())
            .egld(payment)
            .run();
    }

    pub fn sell(&mut self, seller: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(seller)
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .sell(amount)
            .run();
    }

    pub fn check_token_price(&mut self, expected: u64) {
        self.world
            .query()
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .get_token_price()
            .returns(ExpectValue(expected))
            .run();
    }

    // ── Voting ──

    pub fn set_time(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn start_voting(&mut self) {
        self.world
            .tx()
            .from(OWNER)
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .start_voting()
            .run();
    }

    pub fn vote(&mut self, voter: TestAddress, price: u64) {
        self.world
            .tx()
            .from(voter)
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .vote(price, no_referrers())
            .run();
    }

    pub fn vote_expect_err(&mut self, voter: TestAddress, price: u64, message: &str) {
        self.world
            .tx()
            .from(voter)
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .vote(price, no_referrers())
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn end_voting(&mut self) {
        self.world
            .tx()
            .from(OWNER)
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .end_voting()
            .run();
    }

    pub fn end_voting_expect_err(&mut self, message: &str) {
        self.world
            .tx()
            .from(OWNER)
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .end_voting()
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn check_price_weight(&mut self, price: u64, expected: u64) {
        self.world
            .query()
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .get_price_weight(price)
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn prices_list(&mut self) -> Vec<u64> {
        let prices = self
            .world
            .query()
            .to(TOKEN)
            .typed(VotableTokenProxy)
            .get_prices_list()
            .returns(ReturnsResult)
            .run();
        prices
            .into_iter()
            .map(|price| price.to_u64().unwrap())
            .collect()
    }
}
