multiversx_sc::imports!();

use super::{common, constants::*, errors::*, events, proxies, storage};
use crate::storage::{FeeRate, State};

#[multiversx_sc::module]
pub trait GovernanceModule: common::CommonModule + events::EventsModule + storage::StorageModule + proxies::ProxyModule {
    /// Pauses supplies, redemptions and borrows. Repayments and accruals keep working.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    /// - Fails if the money market is already paused.
    ///
    #[endpoint(pause)]
    fn pause(&self) {
        self.require_owner();
        self.set_market_state_internal(&State::Paused);
    }

    /// Resumes a paused money market.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    /// - Fails if the money market is already active.
    ///
    #[endpoint(unpause)]
    fn unpause(&self) {
        self.require_owner();
        self.set_market_state_internal(&State::Active);
    }

    /// Associates a token with the money market, which is required before the money market can receive it.
    ///
    /// # Arguments:
    ///
    /// - `token_id` - The token identifier.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    /// - Fails if the token has already been associated.
    ///
    #[endpoint(tokenAssociate)]
    fn token_associate(&self, token_id: EgldOrEsdtTokenIdentifier) {
        self.require_owner();
        require!(token_id.is_valid(), ERROR_INVALID_ASSET);
        require!(self.associated_tokens().insert(token_id.clone()), ERROR_ALREADY_ASSOCIATED);
        self.token_associate_event(&token_id);
    }

    /// Sets the borrowing, redeeming and claiming fee rates.
    ///
    /// # Arguments:
    ///
    /// - `borrowing_fee_rate` - The fee retained on borrows, in basis points.
    /// - `redeeming_fee_rate` - The fee charged on redemptions, in basis points.
    /// - `claiming_fee_rate` - The fee charged on supplier interest claims, in basis points.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    ///
    #[endpoint(setFeeRate)]
    fn set_fee_rate(&self, borrowing_fee_rate: u64, redeeming_fee_rate: u64, claiming_fee_rate: u64) {
        self.require_owner();
        let fee_rate = FeeRate {
            borrowing_fee_rate,
            redeeming_fee_rate,
            claiming_fee_rate,
        };
        self.set_fee_rate_internal(&fee_rate);
    }

    /// Sets a new reserve factor.
    ///
    /// # Arguments:
    ///
    /// - `new_reserve_factor` - The new reserve factor in wad.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    /// - Interest is accrued with the old reserve factor first.
    ///
    #[endpoint(setReserveFactor)]
    fn set_reserve_factor(&self, new_reserve_factor: BigUint) {
        self.require_owner();

        require!(new_reserve_factor <= BigUint::from(WAD), ERROR_RESERVE_FACTOR_TOO_HIGH);

        self.accrue_interest();
        self.require_market_fresh();

        let old_reserve_factor = self.reserve_factor().get();
        self.reserve_factor().set(&new_reserve_factor);

        self.emit_updated_rates();
        self.new_reserve_factor_event(&old_reserve_factor, &new_reserve_factor);
    }

    /// Sets a new interest rate model.
    ///
    /// # Arguments:
    ///
    /// - `new_interest_rate_model` - The address of the new interest rate model.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    ///
    #[endpoint(setInterestRateModel)]
    fn set_interest_rate_model(&self, new_interest_rate_model: ManagedAddress) {
        self.require_owner();
        self.set_interest_rate_model_internal(&new_interest_rate_model);
    }
}
