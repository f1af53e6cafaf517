multiversx_sc::imports!();

use super::{common, errors::*, events, proxies, storage, transfers};

#[multiversx_sc::module]
pub trait MintModule: common::CommonModule + events::EventsModule + proxies::ProxyModule + storage::StorageModule + transfers::TransfersModule {
    /// Supplies underlying to the money market, providing liquidity and accruing interest in exchange. Shares are minted
    /// to the caller at the exchange rate prior to the deposit, which can be redeemed for underlying at a given point in
    /// the future.
    ///
    /// # Notes:
    ///
    /// - Must be paid with the underlying asset.
    /// - The money market must be listed and active.
    ///
    #[payable("*")]
    #[endpoint(supplyUnderlying)]
    fn supply_underlying(&self) -> BigUint {
        let underlying_amount = self.receive_underlying();
        self.require_listed();
        self.require_active();

        self.accrue_interest();

        let supplier = self.blockchain().get_caller();
        self.supply_internal(&supplier, &underlying_amount)
    }

    fn supply_internal(&self, supplier: &ManagedAddress, underlying_amount: &BigUint) -> BigUint {
        // the exchange rate used here does not include the deposit
        let shares = self.underlying_amount_to_shares(underlying_amount);
        require!(shares > BigUint::zero(), ERROR_INVALID_AMOUNT);

        self.require_market_fresh();

        self.cash().update(|amount| *amount += underlying_amount);
        self.total_shares().update(|total| *total += &shares);
        self.account_shares(supplier).update(|balance| *balance += &shares);
        self.account_supplied(supplier).update(|amount| *amount += underlying_amount);

        self.emit_updated_rates();
        self.supply_event(supplier, underlying_amount, &shares);

        shares
    }
}
