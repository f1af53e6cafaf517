multiversx_sc::imports!();

use super::{events, proxies, shared, storage};
use crate::storage::Status;

#[multiversx_sc::module]
pub trait GuardianModule: events::EventModule + proxies::ProxyModule + shared::SharedModule + storage::StorageModule {
    /// Changes the borrowing status for a specific money market.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `paused` - A boolean that indicates whether borrowing must be or not paused.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    ///
    #[endpoint(setBorrowPaused)]
    fn set_borrow_paused(&self, money_market: ManagedAddress, paused: bool) {
        self.require_owner();
        self.require_listed(&money_market);

        if paused {
            self.borrow_status(&money_market).set(Status::Paused);
        } else {
            self.borrow_status(&money_market).set(Status::Active);
        }

        self.borrow_paused_event(&money_market, paused);
    }
}
