multiversx_sc::imports!();

use crate::storage::{FeeRate, State};

#[multiversx_sc::module]
pub trait EventsModule {
    /// Event emitted when the market state is updated.
    #[event("set_market_state_event")]
    fn set_market_state_event(&self, #[indexed] old_state: &Option<State>, #[indexed] new_state: &State);

    /// Event emitted when underlying is supplied and shares are minted.
    #[event("supply_event")]
    fn supply_event(&self, #[indexed] supplier: &ManagedAddress, #[indexed] amount: &BigUint, #[indexed] shares: &BigUint);

    /// Event emitted when shares are redeemed.
    #[event("redeem_event")]
    fn redeem_event(&self, #[indexed] redeemer: &ManagedAddress, #[indexed] amount: &BigUint, #[indexed] shares: &BigUint, #[indexed] fee: &BigUint);

    /// Event emitted when a user borrows underlying.
    #[event("borrow_event")]
    fn borrow_event(&self, #[indexed] borrower: &ManagedAddress, #[indexed] amount: &BigUint, #[indexed] fee: &BigUint, #[indexed] new_account_borrow: &BigUint, #[indexed] new_total_borrows: &BigUint);

    /// Event emitted when a borrower repays some borrowed underlying.
    #[event("repay_borrow_event")]
    fn repay_borrow_event(&self, #[indexed] payer: &ManagedAddress, #[indexed] borrower: &ManagedAddress, #[indexed] amount: &BigUint, #[indexed] new_account_borrow: &BigUint, #[indexed] new_total_borrows: &BigUint);

    /// Event emitted when interest is accrued on the money market.
    #[event("accrue_interest_event")]
    fn accrue_interest_event(&self, #[indexed] prev_cash: &BigUint, #[indexed] accumulated_interest: &BigUint, #[indexed] new_borrow_index: &BigUint, #[indexed] new_total_borrows: &BigUint);

    /// Event emitted when market borrow and supply rates are updated.
    #[event("updated_rates_event")]
    fn updated_rates_event(&self, #[indexed] borrow_rate: &BigUint, #[indexed] supply_rate: &BigUint);

    /// Event emitted when the owner claims protocol interests out of the reserves.
    #[event("claim_interests_event")]
    fn claim_interests_event(&self, #[indexed] treasury: &ManagedAddress, #[indexed] amount: &BigUint, #[indexed] new_total_reserves: &BigUint);

    /// Event emitted when a supplier claims interests accrued on its supply.
    #[event("claim_supplier_interests_event")]
    fn claim_supplier_interests_event(&self, #[indexed] supplier: &ManagedAddress, #[indexed] amount: &BigUint, #[indexed] shares: &BigUint, #[indexed] fee: &BigUint);

    /// Event emitted when a token is associated with the money market.
    #[event("token_associate_event")]
    fn token_associate_event(&self, #[indexed] token_id: &EgldOrEsdtTokenIdentifier);

    /// Event emitted when the fee rates are updated.
    #[event("new_fee_rate_event")]
    fn new_fee_rate_event(&self, #[indexed] old_fee_rate: &Option<FeeRate>, #[indexed] new_fee_rate: &FeeRate);

    /// Event emitted when the reserve factor is updated.
    #[event("new_reserve_factor_event")]
    fn new_reserve_factor_event(&self, #[indexed] old_reserve_factor: &BigUint, #[indexed] new_reserve_factor: &BigUint);

    /// Event emitted when the position manager address is set.
    #[event("new_position_manager_event")]
    fn new_position_manager_event(&self, #[indexed] position_manager: &ManagedAddress);

    /// Event emitted when the interest rate model contract address is updated.
    #[event("new_interest_rate_model_event")]
    fn new_interest_rate_model_event(&self, #[indexed] old_address: &Option<ManagedAddress>, #[indexed] new_address: &ManagedAddress);

    /// Event emitted when the underlying identifier is set.
    #[event("set_underlying_id_event")]
    fn set_underlying_id_event(&self, #[indexed] underlying_id: &EgldOrEsdtTokenIdentifier, #[indexed] decimals: u8);

    /// Event emitted when the initial exchange rate is set.
    #[event("set_initial_exchange_rate_event")]
    fn set_initial_exchange_rate_event(&self, #[indexed] initial_exchange_rate: &BigUint);
}
