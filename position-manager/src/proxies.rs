multiversx_sc::imports!();

use super::{errors::*, storage};
use oracle::{common::ProxyTrait as _, prices::ProxyTrait as _};

#[multiversx_sc::module]
pub trait ProxyModule: storage::StorageModule {
    // Money Market calls

    fn is_money_market(&self, sc_address: &ManagedAddress) -> bool {
        self.get_money_market_proxy(sc_address).is_money_market().execute_on_dest_context()
    }

    fn get_money_market_underlying(&self, money_market: &ManagedAddress) -> (EgldOrEsdtTokenIdentifier, u8) {
        let underlying_id = self.get_money_market_proxy(money_market).underlying_id().execute_on_dest_context();
        let decimals = self.get_money_market_proxy(money_market).underlying_decimals().execute_on_dest_context();
        (underlying_id, decimals)
    }

    fn get_account_underlying(&self, money_market: &ManagedAddress, account: &ManagedAddress) -> (BigUint, BigUint) {
        let result: MultiValue2<BigUint, BigUint> = self.get_money_market_proxy(money_market).get_account_underlying(account).execute_on_dest_context();
        result.into_tuple()
    }

    // Price Oracle calls

    fn is_price_oracle(&self, sc_address: &ManagedAddress) -> bool {
        self.price_oracle_proxy(sc_address.clone()).is_price_oracle().execute_on_dest_context()
    }

    fn get_token_price(&self, token_id: &EgldOrEsdtTokenIdentifier) -> BigUint {
        self.get_price_oracle_proxy().get_token_price(token_id).execute_on_dest_context()
    }

    // Proxies

    #[proxy]
    fn money_market_proxy(&self, sc_address: ManagedAddress) -> money_market_mod::ProxyTo<Self::Api>;

    fn get_money_market_proxy(&self, sc_address: &ManagedAddress) -> money_market_mod::ProxyTo<Self::Api> {
        self.money_market_proxy(sc_address.clone())
    }

    #[proxy]
    fn price_oracle_proxy(&self, sc_address: ManagedAddress) -> oracle::ProxyTo<Self::Api>;

    fn get_price_oracle_proxy(&self) -> oracle::ProxyTo<Self::Api> {
        require!(!self.price_oracle().is_empty(), ERROR_ORACLE_NOT_INITIALIZED);
        self.price_oracle_proxy(self.price_oracle().get())
    }
}

// Can't simply import money market, circular dependency
mod money_market_mod {
    multiversx_sc::imports!();

    #[multiversx_sc::proxy]
    pub trait MoneyMarket {
        #[view(isMoneyMarket)]
        fn is_money_market(&self) -> bool;

        #[view(getUnderlyingId)]
        fn underlying_id(&self) -> EgldOrEsdtTokenIdentifier;

        #[view(getUnderlyingDecimals)]
        fn underlying_decimals(&self) -> u8;

        #[view(getAccountUnderlying)]
        fn get_account_underlying(&self, account: &ManagedAddress) -> MultiValue2<BigUint, BigUint>;
    }
}
