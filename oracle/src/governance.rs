multiversx_sc::imports!();

use crate::{common, events, proxies, storage};

#[multiversx_sc::module]
pub trait GovernanceModule: common::CommonModule + events::EventsModule + proxies::ProxyModule + storage::StorageModule {
    /// Updates the token in which prices are expressed.
    ///
    /// # Arguments:
    ///
    /// - `base_token` - The new base token.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    /// - The number of decimals of the new base token must have been set.
    ///
    #[endpoint(updateBaseToken)]
    fn update_base_token(&self, base_token: EgldOrEsdtTokenIdentifier) {
        self.require_owner();
        self.set_base_token_internal(&base_token);
    }

    /// Sets the number of decimals of a given token.
    ///
    /// # Arguments:
    ///
    /// - `token_id` - The token identifier.
    /// - `decimals` - The number of decimals, at most 18.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    ///
    #[endpoint(setTokenDecimals)]
    fn set_token_decimals(&self, token_id: EgldOrEsdtTokenIdentifier, decimals: u8) {
        self.require_owner();
        self.set_token_decimals_internal(&token_id, decimals);
    }

    /// Sets the external price source.
    ///
    /// # Arguments:
    ///
    /// - `price_source` - The address of the price source smart contract.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    ///
    #[endpoint(setPriceSource)]
    fn set_price_source(&self, price_source: ManagedAddress) {
        self.require_owner();
        self.set_price_source_internal(&price_source);
    }
}
