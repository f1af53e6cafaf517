#![no_std]

multiversx_sc::imports!();

pub mod constants;
pub mod errors;
pub mod events;
pub mod governance;
pub mod guardian;
pub mod market;
pub mod policies;
pub mod proxies;
pub mod risk_profile;
pub mod shared;
pub mod storage;

use crate::storage::RiskParameters;

/// Position Manager Smart Contract
///
/// Registry of listed money markets and risk engine. Values the positions of every account across money markets and
/// decides how much it can borrow or withdraw.
///
#[multiversx_sc::contract]
pub trait PositionManager: events::EventModule + governance::GovernanceModule + guardian::GuardianModule + market::MarketModule + policies::PolicyModule + proxies::ProxyModule + risk_profile::RiskProfileModule + shared::SharedModule + storage::StorageModule {
    /// Initializes the contract.
    ///
    /// # Arguments:
    ///
    /// - `price_oracle` - The address of the price oracle.
    /// - `max_liquidate_rate` - The maximum portion of a position that can be liquidated at once, in basis points.
    /// - `health_threshold` - The debt to collateral ratio at which positions can be liquidated, in basis points.
    ///
    #[init]
    fn init(&self, price_oracle: ManagedAddress, max_liquidate_rate: u64, health_threshold: u64) {
        self.try_set_price_oracle(&price_oracle);
        self.try_set_risk_parameters(&RiskParameters { max_liquidate_rate, health_threshold });
    }

    #[upgrade]
    fn upgrade(&self) {}
}
