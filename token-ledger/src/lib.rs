#![no_std]

multiversx_sc::imports!();

pub mod errors;

use errors::*;

// ============================================================
// Contract
// ============================================================

/// Fungible balance ledger. Only the deployer may mint.
///
/// Transfers are gated by an allowance the *sender* grants to the
/// *recipient* through `approve`: every transfer to an address consumes
/// that much of the sender's allowance towards it. This is not the usual
/// third-party spender model and is intentional.
#[multiversx_sc::contract]
pub trait TokenLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, symbol: ManagedBuffer, name: ManagedBuffer) {
        self.symbol().set(&symbol);
        self.name().set(&name);
        self.owner().set(self.blockchain().get_caller());
        self.total_supply().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: mint
    // ========================================================

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_NOT_OWNER);
        require!(!to.is_zero(), ERR_MINT_TO_ZERO);

        self.balance_of(&to).update(|balance| *balance += &amount);
        self.total_supply().update(|supply| *supply += &amount);

        self.mint_event(&to, &amount);
    }

    // ========================================================
    // ENDPOINT: transfer
    // Check order matters: zero address, balance, then allowance.
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(!to.is_zero(), ERR_TRANSFER_TO_ZERO);

        let balance = self.balance_of(&caller).get();
        require!(balance >= amount, ERR_INSUFFICIENT_BALANCE);

        let allowance = self.allowances(&caller, &to).get();
        require!(allowance >= amount, ERR_INSUFFICIENT_ALLOWANCE);

        // Read-modify-write per key so that a transfer to oneself nets out.
        self.balance_of(&caller).update(|b| *b -= &amount);
        self.balance_of(&to).update(|b| *b += &amount);
        self.allowances(&caller, &to).set(allowance - &amount);

        self.transfer_event(&caller, &to, &amount);
    }

    // ========================================================
    // ENDPOINT: approve
    // Overwrites, never adds.
    // ========================================================

    #[endpoint(approve)]
    fn approve(&self, grantee: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowances(&caller, &grantee).set(&amount);

        self.approval_event(&caller, &grantee, &amount);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<ManagedBuffer, ManagedBuffer, ManagedAddress> {
        (self.symbol().get(), self.name().get(), self.owner().get()).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("mint")]
    fn mint_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

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
        #[indexed] grantee: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(symbol)]
    #[storage_mapper("symbol")]
    fn symbol(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(name)]
    #[storage_mapper("name")]
    fn name(&self) -> SingleValueMapper<ManagedBuffer>;

    /// The only address allowed to mint.
    #[view(owner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(balanceOf)]
    #[storage_mapper("balance")]
    fn balance_of(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Keyed by (owner, grantee).
    #[view(allowances)]
    #[storage_mapper("allowance")]
    fn allowances(
        &self,
        owner: &ManagedAddress,
        grantee: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
