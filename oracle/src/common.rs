multiversx_sc::imports!();

use crate::{constants::*, errors::*, events, proxies, storage};

#[multiversx_sc::module]
pub trait CommonModule: events::EventsModule + proxies::ProxyModule + storage::StorageModule {
    // Checks

    /// A utility function to highlight that this smart contract is a Price Oracle.
    ///
    #[view(isPriceOracle)]
    fn is_price_oracle(&self) -> bool {
        true
    }

    /// Checks whether the number of decimals for the given token is known.
    ///
    /// # Arguments:
    ///
    /// - `token_id` - The token identifier.
    ///
    #[inline]
    fn has_known_decimals(&self, token_id: &EgldOrEsdtTokenIdentifier) -> bool {
        token_id.is_egld() || !self.token_decimals(token_id).is_empty()
    }

    // Requires

    /// Requires that the caller is the owner of the contract.
    ///
    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.blockchain().get_owner_address(), ERROR_NOT_OWNER);
    }

    /// Requires a valid asset identifier, i.e. EGLD or a well formed ESDT identifier.
    ///
    #[inline]
    fn require_valid_asset(&self, token_id: &EgldOrEsdtTokenIdentifier) {
        require!(token_id.is_valid(), ERROR_INVALID_ASSET);
    }

    /// Requires the number of decimals of the given token to be known.
    ///
    #[inline]
    fn require_known_decimals(&self, token_id: &EgldOrEsdtTokenIdentifier) {
        require!(self.has_known_decimals(token_id), ERROR_UNKNOWN_DECIMALS);
    }

    // Gets

    /// Returns the number of decimals of the given token.
    ///
    /// # Arguments:
    ///
    /// - `token_id` - The token identifier.
    ///
    /// # Notes:
    ///
    /// - EGLD has 18 decimals unless overridden.
    ///
    #[view(getTokenDecimals)]
    fn get_token_decimals(&self, token_id: &EgldOrEsdtTokenIdentifier) -> u8 {
        self.require_known_decimals(token_id);
        let decimals = self.token_decimals(token_id);
        if decimals.is_empty() {
            return EGLD_DECIMALS;
        }
        decimals.get()
    }

    /// Returns `10^decimals` for the given token, i.e. the amount of base units in one whole token.
    ///
    fn get_token_unit(&self, token_id: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let decimals = self.get_token_decimals(token_id);
        BigUint::from(10u64).pow(decimals as u32)
    }

    /// Returns the current base token, if any.
    ///
    fn get_base_token(&self) -> Option<EgldOrEsdtTokenIdentifier> {
        if self.base_token().is_empty() {
            None
        } else {
            Some(self.base_token().get())
        }
    }

    /// Returns the current price source, if any.
    ///
    fn get_price_source(&self) -> Option<ManagedAddress> {
        if self.price_source().is_empty() {
            None
        } else {
            Some(self.price_source().get())
        }
    }

    // Sets

    /// Stores the number of decimals of a given token.
    ///
    /// # Arguments:
    ///
    /// - `token_id` - The token identifier.
    /// - `decimals` - The number of decimals.
    ///
    fn set_token_decimals_internal(&self, token_id: &EgldOrEsdtTokenIdentifier, decimals: u8) {
        self.require_valid_asset(token_id);
        require!(decimals <= MAX_DECIMALS, ERROR_INVALID_DECIMALS);
        self.token_decimals(token_id).set(decimals);
        self.set_token_decimals_event(token_id, decimals);
    }

    /// Sets the base token iff not already set.
    ///
    fn try_set_base_token(&self, base_token: &EgldOrEsdtTokenIdentifier, base_decimals: u8) {
        if self.base_token().is_empty() {
            self.set_token_decimals_internal(base_token, base_decimals);
            self.set_base_token_internal(base_token);
        }
    }

    fn set_base_token_internal(&self, base_token: &EgldOrEsdtTokenIdentifier) {
        self.require_valid_asset(base_token);
        self.require_known_decimals(base_token);
        let old_base_token = self.get_base_token();
        self.base_token().set(base_token);
        self.new_base_token_event(&old_base_token, base_token);
    }

    /// Sets the price source iff not already set.
    ///
    fn try_set_price_source(&self, price_source: &ManagedAddress) {
        if self.price_source().is_empty() {
            self.set_price_source_internal(price_source);
        }
    }

    fn set_price_source_internal(&self, price_source: &ManagedAddress) {
        require!(self.blockchain().is_smart_contract(price_source), ERROR_INVALID_PRICE_SOURCE);
        let old_price_source = self.get_price_source();
        self.price_source().set(price_source);
        self.new_price_source_event(&old_price_source, price_source);
    }
}
