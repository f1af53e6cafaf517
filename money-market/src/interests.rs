multiversx_sc::imports!();

use super::{common, errors::*, events, proxies, storage, transfers};

#[multiversx_sc::module]
pub trait InterestsModule: common::CommonModule + events::EventsModule + proxies::ProxyModule + storage::StorageModule + transfers::TransfersModule {
    /// Withdraws protocol interests accumulated as reserves to the treasury.
    ///
    /// # Arguments:
    ///
    /// - `amount` - The amount of underlying to claim.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    /// - Does not change the exchange rate, as both cash and reserves decrease by the same amount.
    /// - No claiming fee is charged here. The claiming fee rate applies to `claimSupplierInterests`, which pays out the
    ///   interests earned by suppliers.
    ///
    #[endpoint(claimInterests)]
    fn claim_interests(&self, amount: BigUint) {
        self.require_owner();
        self.require_positive_amount(&amount);

        self.accrue_interest();
        self.require_market_fresh();

        let total_reserves = self.total_reserves().get();
        require!(amount <= total_reserves, ERROR_CLAIM_EXCEEDS_RESERVES);
        self.require_sufficient_cash(&amount);

        let new_total_reserves = total_reserves - &amount;
        self.total_reserves().set(&new_total_reserves);
        self.cash().update(|cash| *cash -= &amount);

        let treasury = self.blockchain().get_caller();
        self.send_underlying(&treasury, &amount);

        self.emit_updated_rates();
        self.claim_interests_event(&treasury, &amount, &new_total_reserves);
    }

    /// Withdraws part of the interests accrued on the caller's supply, leaving its supplied principal untouched. A claiming
    /// fee is deducted and sent to the treasury.
    ///
    /// # Arguments:
    ///
    /// - `amount` - The amount of underlying interests to claim.
    ///
    /// # Notes:
    ///
    /// - Shares backing the claimed amount are burned, rounding up.
    /// - Blocked while the market is paused, like any other redemption.
    /// - Returns the amount of underlying received by the caller.
    ///
    #[endpoint(claimSupplierInterests)]
    fn claim_supplier_interests(&self, amount: BigUint) -> BigUint {
        self.require_positive_amount(&amount);
        self.require_active();

        self.accrue_interest();
        self.require_market_fresh();

        let supplier = self.blockchain().get_caller();
        let claimable = self.get_claimable_interests(&supplier);
        require!(amount <= claimable, ERROR_CLAIM_EXCEEDS_INTERESTS);
        self.require_sufficient_cash(&amount);

        let shares = self.underlying_amount_to_shares_up(&amount);
        let balance = self.account_shares(&supplier).get();
        require!(shares <= balance, ERROR_INVALID_AMOUNT);

        let claim_allowed = self.redeem_allowed(&supplier, &amount);
        require!(claim_allowed, ERROR_UNDER_COLLATERALIZED);

        let fee_rate = self.fee_rate().get();
        let fee = self.compute_fee(&amount, fee_rate.claiming_fee_rate);
        let amount_out = &amount - &fee;

        // principal is kept, only the shares backing the interests are burned
        self.account_shares(&supplier).set(&balance - &shares);
        self.total_shares().update(|total| *total -= &shares);
        self.cash().update(|cash| *cash -= &amount);

        self.send_underlying(&supplier, &amount_out);
        self.send_fee_to_treasury(&fee);

        self.emit_updated_rates();
        self.claim_supplier_interests_event(&supplier, &amount, &shares, &fee);

        amount_out
    }
}
