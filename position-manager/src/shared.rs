multiversx_sc::imports!();

use super::{constants::*, errors::*, events, proxies, storage};
use crate::storage::Status;

#[multiversx_sc::module]
pub trait SharedModule: events::EventModule + proxies::ProxyModule + storage::StorageModule {
    // Checks

    /// A utility function to highlight that this smart contract is a Position Manager.
    ///
    #[view(isPositionManager)]
    fn is_position_manager(&self) -> bool {
        true
    }

    /// Checks whether the specified smart contract address is a money market.
    ///
    /// # Arguments:
    ///
    /// - `sc_address` - The address of the smart contract to check.
    ///
    fn is_money_market_sc(&self, sc_address: &ManagedAddress) -> bool {
        self.blockchain().is_smart_contract(sc_address) && self.is_money_market(sc_address)
    }

    /// Checks whether the specified smart contract address is a price oracle.
    ///
    fn is_price_oracle_sc(&self, sc_address: &ManagedAddress) -> bool {
        self.blockchain().is_smart_contract(sc_address) && self.is_price_oracle(sc_address)
    }

    /// Checks whether the specified money market has been listed.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market to check.
    ///
    #[view(checkListedToken)]
    fn check_listed_token(&self, money_market: &ManagedAddress) -> bool {
        self.listed_pools().contains(money_market)
    }

    /// Checks whether an account is a member of the specified money market.
    ///
    /// # Arguments:
    ///
    /// - `account` - The account address.
    /// - `money_market` - The address of the money market.
    ///
    #[view(checkMembership)]
    fn check_membership(&self, account: &ManagedAddress, money_market: &ManagedAddress) -> bool {
        self.account_pools(account).contains(money_market)
    }

    /// Checks whether borrowing has been paused by the guardian at the specified money market.
    ///
    #[view(borrowGuardianPaused)]
    fn borrow_guardian_paused(&self, money_market: &ManagedAddress) -> bool {
        let status = self.borrow_status(money_market);
        !status.is_empty() && status.get() == Status::Paused
    }

    // Requires

    /// Requires that the caller is the owner of the contract.
    ///
    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.blockchain().get_owner_address(), ERROR_NOT_OWNER);
    }

    /// Requires that the given money market has been listed.
    ///
    fn require_listed(&self, money_market: &ManagedAddress) {
        require!(self.check_listed_token(money_market), ERROR_NOT_LISTED);
    }

    /// Requires a value in basis points, i.e. at most 100%.
    ///
    fn require_valid_bps(&self, value: u64, error: &str) {
        require!(value <= BPS, error);
    }

    // Gets

    /// Returns the price oracle, if set.
    ///
    fn get_price_oracle(&self) -> Option<ManagedAddress> {
        if self.price_oracle().is_empty() {
            None
        } else {
            Some(self.price_oracle().get())
        }
    }

    // Sets

    /// Sets the price oracle iff not already set.
    ///
    fn try_set_price_oracle(&self, price_oracle: &ManagedAddress) {
        if self.price_oracle().is_empty() {
            self.set_price_oracle_internal(price_oracle);
        }
    }

    fn set_price_oracle_internal(&self, price_oracle: &ManagedAddress) {
        require!(self.is_price_oracle_sc(price_oracle), ERROR_INVALID_PRICE_ORACLE);
        let old_price_oracle = self.get_price_oracle();
        self.price_oracle().set(price_oracle);
        self.new_price_oracle_event(&old_price_oracle, price_oracle);
    }
}
