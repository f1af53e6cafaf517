multiversx_sc::imports!();

use super::{common, errors::*, events, proxies, storage, transfers};

#[multiversx_sc::module]
pub trait BorrowModule: common::CommonModule + events::EventsModule + proxies::ProxyModule + storage::StorageModule + transfers::TransfersModule {
    /// Borrows an amount of underlying from the money market against the caller's collateral. A borrowing fee is retained
    /// by the money market as reserves, while the full amount is recorded as debt.
    ///
    /// # Arguments:
    ///
    /// - `amount` - The amount of underlying to borrow.
    ///
    /// # Notes:
    ///
    /// - The money market must be listed, active and its borrows not paused by the guardian.
    /// - The borrower becomes a member of this money market at the position manager.
    /// - Returns the amount of underlying received by the borrower.
    ///
    #[endpoint(borrow)]
    fn borrow(&self, amount: BigUint) -> BigUint {
        self.require_positive_amount(&amount);
        self.require_listed();
        self.require_active();

        let money_market = self.blockchain().get_sc_address();
        require!(!self.is_borrow_guardian_paused(&money_market), ERROR_BORROW_PAUSED);

        self.accrue_interest();
        self.require_market_fresh();

        let borrower = self.blockchain().get_caller();
        let borrowable_amount = self.get_borrowable_amount(&borrower, &money_market);
        require!(amount <= borrowable_amount, ERROR_UNDER_COLLATERALIZED);

        self.require_sufficient_cash(&amount);

        self.borrow_internal(&borrower, &amount)
    }

    fn borrow_internal(&self, borrower: &ManagedAddress, amount: &BigUint) -> BigUint {
        let fee_rate = self.fee_rate().get();
        let fee = self.compute_fee(amount, fee_rate.borrowing_fee_rate);
        let amount_out = amount - &fee;

        // the debt includes the fee, which never leaves the money market
        let account_borrow = self.get_account_borrow_amount(borrower);
        let new_account_borrow = account_borrow + amount;
        self.set_account_borrow_snapshot(borrower, &new_account_borrow);

        self.total_borrows().update(|borrows| *borrows += amount);
        let new_total_borrows = self.total_borrows().get();

        self.total_reserves().update(|reserves| *reserves += &fee);
        self.cash().update(|cash| *cash -= &amount_out);

        self.enter_market(borrower);
        self.send_underlying(borrower, &amount_out);

        self.emit_updated_rates();
        self.borrow_event(borrower, amount, &fee, &new_account_borrow, &new_total_borrows);

        amount_out
    }
}
