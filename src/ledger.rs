multiversx_sc::imports!();

use crate::{events, storage};

#[multiversx_sc::module]
pub trait LedgerModule: storage::StorageModule + events::EventsModule {
    // ========================================================
    // ENDPOINT: transfer
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.move_balance(&caller, &to, &amount);
    }

    // ========================================================
    // ENDPOINT: approve
    // Overwrites the allowance, never adds to it.
    // ========================================================

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(!spender.is_zero(), "Spender address cannot be zero");

        self.allowances(&caller, &spender).set(&amount);
        self.approval_event(&caller, &spender, &amount);
    }

    // ========================================================
    // ENDPOINT: transferFrom
    // Caller spends from the owner's balance within its allowance.
    // ========================================================

    #[endpoint(transferFrom)]
    fn transfer_from(&self, owner: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let spender = self.blockchain().get_caller();
        let allowance = self.allowances(&owner, &spender).get();
        require!(allowance >= amount, "Insufficient allowance");
        require!(
            self.balance(&owner).get() >= amount,
            "Insufficient balance"
        );

        self.allowances(&owner, &spender).set(&(allowance - &amount));
        self.move_balance(&owner, &to, &amount);
    }

    // ========================================================
    // ENDPOINT: burnFromOwner
    // Destroys units held by the contract owner.
    // ========================================================

    #[only_owner]
    #[endpoint(burnFromOwner)]
    fn burn_from_owner(&self, amount: BigUint) {
        let owner = self.blockchain().get_caller();
        let balance = self.balance(&owner).get();
        require!(balance >= amount, "Insufficient balance");

        self.destroy(&owner, &amount);
        self.burn_event(&owner, &amount);
    }

    // ========================================================
    // INTERNAL: balance movement shared by transfer/transferFrom
    // ========================================================

    fn move_balance(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        require!(!from.is_zero(), "Sender cannot be the zero address");
        require!(!to.is_zero(), "Receiver cannot be the zero address");

        let from_balance = self.balance(from).get();
        require!(&from_balance >= amount, "Insufficient balance");

        self.balance(from).set(&(from_balance - amount));
        self.balance(to).update(|balance| *balance += amount);

        self.transfer_event(from, to, amount);
    }

    fn mint(&self, to: &ManagedAddress, amount: &BigUint) {
        self.balance(to).update(|balance| *balance += amount);
        self.total_supply().update(|supply| *supply += amount);
    }

    /// Balance must already be checked by the caller.
    fn destroy(&self, from: &ManagedAddress, amount: &BigUint) {
        self.balance(from).update(|balance| *balance -= amount);
        self.total_supply().update(|supply| *supply -= amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, account: &ManagedAddress) -> BigUint {
        self.balance(account).get()
    }

    #[view(totalSupply)]
    fn get_total_supply(&self) -> BigUint {
        self.total_supply().get()
    }

    #[view(allowance)]
    fn get_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress) -> BigUint {
        require!(!owner.is_zero(), "Owner address cannot be zero");
        require!(!spender.is_zero(), "Spender address cannot be zero");
        self.allowances(owner, spender).get()
    }
}
