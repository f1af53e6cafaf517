multiversx_sc::imports!();

use super::{common, constants::*, errors::*, events, proxies, storage};

#[multiversx_sc::module]
pub trait PriceModule: common::CommonModule + events::EventsModule + proxies::ProxyModule + storage::StorageModule {
    /// Returns the price of one whole unit of the given token, in base token units and in WAD.
    ///
    /// # Arguments:
    ///
    /// - `token_id` - The identifier of the token to retrieve the price of.
    ///
    /// # Notes:
    ///
    /// - The base token price always equals to one.
    /// - Any other token is quoted against the base token at the price source, which fails if there is no market for
    ///   the pair.
    ///
    #[view(getTokenPrice)]
    fn get_token_price(&self, token_id: &EgldOrEsdtTokenIdentifier) -> BigUint {
        self.require_valid_asset(token_id);

        let base_token = match self.get_base_token() {
            Some(base_token) => base_token,
            None => sc_panic!(ERROR_INVALID_ASSET),
        };

        let wad = BigUint::from(WAD);
        if *token_id == base_token {
            return wad;
        }

        let token_unit = self.get_token_unit(token_id);
        let base_unit = self.get_token_unit(&base_token);

        // quote one whole token and rescale from base token decimals to wad
        let amount_out = self.quote(token_id, &base_token, &token_unit);
        let price = amount_out * &wad / &base_unit;
        require!(price > BigUint::zero(), ERROR_ZERO_PRICE);

        price
    }

    /// Returns the value of an amount of the given token, in base token units and in WAD.
    ///
    /// # Arguments:
    ///
    /// - `token_id` - The token identifier.
    /// - `amount` - The amount of the token, in its own base units.
    ///
    #[view(getTokenValue)]
    fn get_token_value(&self, token_id: &EgldOrEsdtTokenIdentifier, amount: &BigUint) -> BigUint {
        let price = self.get_token_price(token_id);
        let token_unit = self.get_token_unit(token_id);
        amount * &price / &token_unit
    }
}
