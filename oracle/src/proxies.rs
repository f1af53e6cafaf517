multiversx_sc::imports!();

use crate::{errors::*, storage};

#[multiversx_sc::module]
pub trait ProxyModule: storage::StorageModule {
    /// Quotes an amount of `token_in` in terms of `token_out` at the external price source.
    ///
    fn quote(&self, token_in: &EgldOrEsdtTokenIdentifier, token_out: &EgldOrEsdtTokenIdentifier, amount_in: &BigUint) -> BigUint {
        self.get_price_source_proxy().quote(token_in, token_out, amount_in).execute_on_dest_context()
    }

    // Proxies

    #[proxy]
    fn price_source_proxy(&self, sc_address: ManagedAddress) -> price_source_mod::ProxyTo<Self::Api>;

    fn get_price_source_proxy(&self) -> price_source_mod::ProxyTo<Self::Api> {
        require!(!self.price_source().is_empty(), ERROR_PRICE_SOURCE_NOT_SET);
        self.price_source_proxy(self.price_source().get())
    }
}

pub mod price_source_mod {
    multiversx_sc::imports!();

    #[multiversx_sc::proxy]
    pub trait PriceSource {
        #[view(quote)]
        fn quote(&self, token_in: &EgldOrEsdtTokenIdentifier, token_out: &EgldOrEsdtTokenIdentifier, amount_in: &BigUint) -> BigUint;
    }
}
