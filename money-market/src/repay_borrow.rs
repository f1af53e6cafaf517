multiversx_sc::imports!();

use super::{common, errors::*, events, proxies, storage, transfers};

#[multiversx_sc::module]
pub trait RepayBorrowModule: common::CommonModule + events::EventsModule + proxies::ProxyModule + storage::StorageModule + transfers::TransfersModule {
    /// Repays an outstanding borrow with the paid underlying.
    ///
    /// # Arguments:
    ///
    /// - `opt_borrower` - The borrower whose debt is repaid. If not given, the caller's debt is repaid.
    ///
    /// # Notes:
    ///
    /// - Must be paid with the underlying asset.
    /// - The paid amount cannot exceed the outstanding debt.
    /// - Repayments are allowed while the money market is paused.
    ///
    #[payable("*")]
    #[endpoint(repayBorrow)]
    fn repay_borrow(&self, opt_borrower: OptionalValue<ManagedAddress>) -> BigUint {
        let amount = self.receive_underlying();

        let payer = self.blockchain().get_caller();
        let borrower = match opt_borrower {
            OptionalValue::Some(borrower) => borrower,
            OptionalValue::None => payer.clone(),
        };

        self.accrue_interest();
        self.require_market_fresh();

        self.repay_borrow_internal(&payer, &borrower, &amount)
    }

    fn repay_borrow_internal(&self, payer: &ManagedAddress, borrower: &ManagedAddress, amount: &BigUint) -> BigUint {
        let account_borrow = self.get_account_borrow_amount(borrower);
        require!(*amount <= account_borrow, ERROR_REPAY_EXCEEDS_DEBT);

        let new_account_borrow = account_borrow - amount;
        self.set_account_borrow_snapshot(borrower, &new_account_borrow);

        // rounding might leave the sum of debts slightly above total borrows
        let total_borrows = self.total_borrows().get();
        let new_total_borrows = if *amount >= total_borrows { BigUint::zero() } else { total_borrows - amount };
        self.total_borrows().set(&new_total_borrows);

        self.cash().update(|cash| *cash += amount);

        self.emit_updated_rates();
        self.repay_borrow_event(payer, borrower, amount, &new_account_borrow, &new_total_borrows);

        new_account_borrow
    }
}
