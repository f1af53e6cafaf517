multiversx_sc::imports!();

use super::{common, errors::*, events, proxies, storage, transfers};

pub type RedeemResultType<M> = MultiValue2<BigUint<M>, BigUint<M>>;

#[multiversx_sc::module]
pub trait RedeemModule: common::CommonModule + events::EventsModule + proxies::ProxyModule + storage::StorageModule + transfers::TransfersModule {
    /// Exchanges caller shares back for the underlying asset. A redeeming fee is deducted from the underlying amount and
    /// sent to the treasury.
    ///
    /// # Arguments:
    ///
    /// - `shares` - The amount of shares to redeem.
    ///
    /// # Notes:
    ///
    /// - Returns the amount of underlying received by the caller and the amount of shares burned.
    ///
    #[endpoint(redeem)]
    fn redeem(&self, shares: BigUint) -> RedeemResultType<Self::Api> {
        self.require_positive_amount(&shares);
        let redeemer = self.blockchain().get_caller();
        require!(shares <= self.account_shares(&redeemer).get(), ERROR_INVALID_AMOUNT);
        self.require_active();

        self.accrue_interest();
        self.require_market_fresh();

        let underlying_amount = self.shares_to_underlying_amount(&shares);
        self.redeem_internal(&redeemer, &shares, &underlying_amount)
    }

    /// Exchanges caller shares for an exact amount of underlying. The amount of shares burned is rounded up, and the
    /// redeeming fee is deducted from the given underlying amount.
    ///
    /// # Arguments:
    ///
    /// - `underlying_amount` - The amount of underlying to redeem.
    ///
    #[endpoint(redeemExactUnderlying)]
    fn redeem_exact_underlying(&self, underlying_amount: BigUint) -> RedeemResultType<Self::Api> {
        self.require_positive_amount(&underlying_amount);
        self.require_active();

        self.accrue_interest();
        self.require_market_fresh();

        let redeemer = self.blockchain().get_caller();
        let shares = self.underlying_amount_to_shares_up(&underlying_amount);
        require!(shares <= self.account_shares(&redeemer).get(), ERROR_INVALID_AMOUNT);

        self.redeem_internal(&redeemer, &shares, &underlying_amount)
    }

    fn redeem_internal(&self, redeemer: &ManagedAddress, shares: &BigUint, underlying_amount: &BigUint) -> RedeemResultType<Self::Api> {
        self.require_positive_amount(underlying_amount);
        self.require_sufficient_cash(underlying_amount);

        // the remaining collateral must still cover outstanding debt
        let redeem_allowed = self.redeem_allowed(redeemer, underlying_amount);
        require!(redeem_allowed, ERROR_UNDER_COLLATERALIZED);

        let fee_rate = self.fee_rate().get();
        let fee = self.compute_fee(underlying_amount, fee_rate.redeeming_fee_rate);
        let amount_out = underlying_amount - &fee;

        self.burn_shares(redeemer, shares);
        self.cash().update(|amount| *amount -= underlying_amount);

        self.send_underlying(redeemer, &amount_out);
        self.send_fee_to_treasury(&fee);

        self.emit_updated_rates();
        self.redeem_event(redeemer, underlying_amount, shares, &fee);

        (amount_out, shares.clone()).into()
    }
}
