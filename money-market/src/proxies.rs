multiversx_sc::imports!();

use super::{errors::*, storage};
use interest_rate_model::ProxyTrait as _;
use position_manager::{market::ProxyTrait as _, policies::ProxyTrait as _, risk_profile::ProxyTrait as _, shared::ProxyTrait as _};

#[multiversx_sc::module]
pub trait ProxyModule: storage::StorageModule {
    // Position Manager calls

    fn is_position_manager(&self, sc_address: &ManagedAddress) -> bool {
        self.position_manager_proxy(sc_address.clone()).is_position_manager().execute_on_dest_context()
    }

    fn is_listed(&self, pool: &ManagedAddress) -> bool {
        self.get_position_manager_proxy().check_listed_token(pool).execute_on_dest_context()
    }

    fn is_borrow_guardian_paused(&self, pool: &ManagedAddress) -> bool {
        self.get_position_manager_proxy().borrow_guardian_paused(pool).execute_on_dest_context()
    }

    fn get_borrowable_amount(&self, account: &ManagedAddress, pool: &ManagedAddress) -> BigUint {
        self.get_position_manager_proxy().get_borrowable_amount(account, pool).execute_on_dest_context()
    }

    fn redeem_allowed(&self, account: &ManagedAddress, underlying_amount: &BigUint) -> bool {
        self.get_position_manager_proxy().redeem_allowed(account, underlying_amount).execute_on_dest_context()
    }

    fn enter_market(&self, account: &ManagedAddress) {
        self.get_position_manager_proxy().enter_market(account).execute_on_dest_context()
    }

    // Interest Rate Model calls

    fn is_interest_rate_model(&self, sc_address: &ManagedAddress) -> bool {
        self.interest_rate_model_proxy(sc_address.clone()).is_interest_rate_model().execute_on_dest_context()
    }

    fn get_borrow_rate(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint) -> BigUint {
        self.get_interest_rate_model_proxy().get_borrow_rate(cash, borrows, reserves).execute_on_dest_context()
    }

    fn get_rates(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint, reserve_factor: &BigUint) -> (BigUint, BigUint) {
        self.get_interest_rate_model_proxy().get_rates(cash, borrows, reserves, reserve_factor).execute_on_dest_context()
    }

    // Proxies

    #[proxy]
    fn position_manager_proxy(&self, sc_address: ManagedAddress) -> position_manager::ProxyTo<Self::Api>;

    fn get_position_manager_proxy(&self) -> position_manager::ProxyTo<Self::Api> {
        require!(!self.position_manager().is_empty(), ERROR_NON_VALID_POSITION_MANAGER_SC);
        self.position_manager_proxy(self.position_manager().get())
    }

    #[proxy]
    fn interest_rate_model_proxy(&self, sc_address: ManagedAddress) -> interest_rate_model::ProxyTo<Self::Api>;

    fn get_interest_rate_model_proxy(&self) -> interest_rate_model::ProxyTo<Self::Api> {
        require!(!self.interest_rate_model().is_empty(), ERROR_NON_VALID_INTEREST_RATE_MODEL_SC);
        self.interest_rate_model_proxy(self.interest_rate_model().get())
    }
}
