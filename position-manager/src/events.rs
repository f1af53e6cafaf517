multiversx_sc::imports!();

use crate::storage::RiskParameters;

#[multiversx_sc::module]
pub trait EventModule {
    /// Event emitted when a money market is listed.
    #[event("add_to_market_event")]
    fn add_to_market_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] underlying_id: &EgldOrEsdtTokenIdentifier);

    /// Event emitted when an account becomes a member of a money market.
    #[event("enter_market_event")]
    fn enter_market_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] account: &ManagedAddress);

    /// Event emitted when the borrow cap of a money market is updated.
    #[event("new_borrow_cap_event")]
    fn new_borrow_cap_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] borrow_cap: u64);

    /// Event emitted when the risk parameters are updated.
    #[event("new_risk_parameters_event")]
    fn new_risk_parameters_event(&self, #[indexed] old: &Option<RiskParameters>, #[indexed] new: &RiskParameters);

    /// Event emitted when the borrowing status of a money market is updated.
    #[event("borrow_paused_event")]
    fn borrow_paused_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] paused: bool);

    /// Event emitted when the price oracle is updated.
    #[event("new_price_oracle_event")]
    fn new_price_oracle_event(&self, #[indexed] old: &Option<ManagedAddress>, #[indexed] new: &ManagedAddress);
}
