multiversx_sc::imports!();

use crate::{events, ledger, storage};

/// Fixed-price mint/burn against EGLD. The price only moves through
/// voting resolution, never through trade volume.
#[multiversx_sc::module]
pub trait ExchangeModule:
    ledger::LedgerModule + storage::StorageModule + events::EventsModule
{
    // ========================================================
    // ENDPOINT: buy
    // Referrer addresses are accepted and ignored.
    // ========================================================

    #[endpoint(buy)]
    #[payable("EGLD")]
    fn buy(&self, _referrers: MultiValueEncoded<ManagedAddress>) -> BigUint {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, "Insufficient payment to buy tokens");

        // Truncates: a payment below one unit's price mints nothing.
        let units = &payment / &self.token_price().get();
        self.mint(&caller, &units);

        self.buy_event(&caller, &payment, &units);
        units
    }

    // ========================================================
    // ENDPOINT: sell
    // Debits before the payout leaves the contract.
    // ========================================================

    #[endpoint(sell)]
    fn sell(&self, amount: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, "Amount must be greater than zero");
        require!(
            self.balance(&caller).get() >= amount,
            "Insufficient balance"
        );

        let payout = &amount * &self.token_price().get();
        let reserve = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(reserve >= payout, "Insufficient reserve for payout");

        self.destroy(&caller, &amount);

        self.send().direct_egld(&caller, &payout);
        self.sell_event(&caller, &amount, &payout);
        payout
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTokenPrice)]
    fn get_token_price(&self) -> BigUint {
        self.token_price().get()
    }

    #[view(getReserve)]
    fn get_reserve(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }
}
