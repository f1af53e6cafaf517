multiversx_sc::imports!();

use super::{events, proxies, risk_profile, shared, storage};

#[multiversx_sc::module]
pub trait PolicyModule: events::EventModule + proxies::ProxyModule + risk_profile::RiskProfileModule + shared::SharedModule + storage::StorageModule {
    /// Checks whether an account may withdraw an amount of underlying from the calling money market, i.e. whether its
    /// remaining collateral still covers its outstanding borrows.
    ///
    /// # Arguments:
    ///
    /// - `account` - The account withdrawing underlying.
    /// - `underlying_amount` - The amount of underlying to be withdrawn.
    ///
    /// # Notes:
    ///
    /// - Can only be called by a listed money market.
    /// - An account that has never borrowed can always withdraw.
    ///
    #[view(redeemAllowed)]
    fn redeem_allowed(&self, account: &ManagedAddress, underlying_amount: &BigUint) -> bool {
        let money_market = self.blockchain().get_caller();
        self.require_listed(&money_market);

        if self.account_pools(account).is_empty() {
            return true;
        }

        let liquidity = self.simulate_account_liquidity(account, &money_market, underlying_amount);
        liquidity.is_solvent()
    }
}
