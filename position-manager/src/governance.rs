multiversx_sc::imports!();

use super::{errors::*, events, proxies, shared, storage};
use crate::storage::RiskParameters;

#[multiversx_sc::module]
pub trait GovernanceModule: events::EventModule + proxies::ProxyModule + shared::SharedModule + storage::StorageModule {
    /// Sets the borrow caps (loan to values) of a list of money markets.
    ///
    /// # Arguments:
    ///
    /// - `money_markets` - The addresses of the money markets.
    /// - `borrow_caps` - The borrow caps in basis points, one per money market.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    /// - Every money market must have been listed.
    ///
    #[endpoint(setBorrowCaps)]
    fn set_borrow_caps(&self, money_markets: ManagedVec<ManagedAddress>, borrow_caps: ManagedVec<u64>) {
        self.require_owner();
        require!(money_markets.len() == borrow_caps.len(), ERROR_ARRAY_LENGTH_MISMATCH);

        for (money_market, borrow_cap) in money_markets.iter().zip(borrow_caps.iter()) {
            self.require_listed(&money_market);
            self.require_valid_bps(borrow_cap, ERROR_INVALID_BORROW_CAP);
            self.borrow_caps(&money_market).set(borrow_cap);
            self.new_borrow_cap_event(&money_market, borrow_cap);
        }
    }

    /// Sets the maximum portion of a position that can be liquidated at once, in basis points.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    ///
    #[endpoint(setMaxLiquidateRate)]
    fn set_max_liquidate_rate(&self, max_liquidate_rate: u64) {
        self.require_owner();
        let mut risk_parameters = self.risk_parameters().get();
        risk_parameters.max_liquidate_rate = max_liquidate_rate;
        self.set_risk_parameters_internal(&risk_parameters);
    }

    /// Sets the debt to collateral ratio, in basis points, at which a position becomes eligible for liquidation.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    ///
    #[endpoint(setHealthcareThreshold)]
    fn set_healthcare_threshold(&self, health_threshold: u64) {
        self.require_owner();
        let mut risk_parameters = self.risk_parameters().get();
        risk_parameters.health_threshold = health_threshold;
        self.set_risk_parameters_internal(&risk_parameters);
    }

    /// Sets the price oracle.
    ///
    /// # Arguments:
    ///
    /// - `price_oracle` - The address of the price oracle smart contract.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    ///
    #[endpoint(setPriceOracle)]
    fn set_price_oracle(&self, price_oracle: ManagedAddress) {
        self.require_owner();
        self.set_price_oracle_internal(&price_oracle);
    }

    #[view(getMaxLiquidateRate)]
    fn get_max_liquidate_rate(&self) -> u64 {
        self.risk_parameters().get().max_liquidate_rate
    }

    #[view(getHealthcareThreshold)]
    fn get_healthcare_threshold(&self) -> u64 {
        self.risk_parameters().get().health_threshold
    }

    /// Sets the risk parameters iff not already set.
    ///
    fn try_set_risk_parameters(&self, risk_parameters: &RiskParameters) {
        if self.risk_parameters().is_empty() {
            self.set_risk_parameters_internal(risk_parameters);
        }
    }

    fn set_risk_parameters_internal(&self, new_risk_parameters: &RiskParameters) {
        self.require_valid_bps(new_risk_parameters.max_liquidate_rate, ERROR_INVALID_RISK_PARAMETER);
        self.require_valid_bps(new_risk_parameters.health_threshold, ERROR_INVALID_RISK_PARAMETER);

        let old_risk_parameters = if self.risk_parameters().is_empty() { None } else { Some(self.risk_parameters().get()) };
        self.risk_parameters().set(new_risk_parameters);
        self.new_risk_parameters_event(&old_risk_parameters, new_risk_parameters);
    }
}
