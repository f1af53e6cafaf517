multiversx_sc::imports!();

use super::{errors::*, events, proxies, shared, storage};

#[multiversx_sc::module]
pub trait MarketModule: events::EventModule + proxies::ProxyModule + shared::SharedModule + storage::StorageModule {
    /// Lists a money market, allowing supplies and borrows in it.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    /// - A money market can only be listed once and cannot be removed.
    /// - The borrow cap of a newly listed money market is zero.
    ///
    #[endpoint(addToMarket)]
    fn add_to_market(&self, money_market: ManagedAddress) {
        self.require_owner();
        require!(!self.check_listed_token(&money_market), ERROR_ALREADY_LISTED);
        require!(self.is_money_market_sc(&money_market), ERROR_INVALID_MONEY_MARKET);

        let (underlying_id, decimals) = self.get_money_market_underlying(&money_market);
        let unit = BigUint::from(10u64).pow(decimals as u32);

        self.listed_pools().insert(money_market.clone());
        self.market_underlying(&money_market).set(&underlying_id);
        self.market_unit(&money_market).set(&unit);

        self.add_to_market_event(&money_market, &underlying_id);
    }

    /// Makes an account member of the calling money market, so that its positions there account for its borrowing
    /// capacity.
    ///
    /// # Arguments:
    ///
    /// - `account` - The account address.
    ///
    /// # Notes:
    ///
    /// - Can only be called by a listed money market.
    /// - Entering a market twice has no effect.
    ///
    #[endpoint(enterMarket)]
    fn enter_market(&self, account: ManagedAddress) {
        let money_market = self.blockchain().get_caller();
        self.require_listed(&money_market);

        if self.account_pools(&account).insert(money_market.clone()) {
            self.enter_market_event(&money_market, &account);
        }
    }
}
