multiversx_sc::imports!();

use super::{constants::*, errors::*, events, proxies, storage};
use crate::storage::{AccountSnapshot, FeeRate, State};

#[multiversx_sc::module]
pub trait CommonModule: events::EventsModule + proxies::ProxyModule + storage::StorageModule {
    // Checks

    /// A utility function to highlight that this smart contract is a Money Market.
    ///
    #[view(isMoneyMarket)]
    fn is_money_market(&self) -> bool {
        true
    }

    /// Checks whether the specified smart contract address is a position manager.
    ///
    /// # Arguments:
    ///
    /// - `sc_address` - The address of the smart contract to check.
    ///
    fn is_position_manager_sc(&self, sc_address: &ManagedAddress) -> bool {
        self.blockchain().is_smart_contract(sc_address) && self.is_position_manager(sc_address)
    }

    /// Checks whether the specified smart contract address is an interest rate model.
    ///
    /// # Arguments:
    ///
    /// - `sc_address` - The address of the smart contract to check.
    ///
    fn is_interest_rate_model_sc(&self, sc_address: &ManagedAddress) -> bool {
        self.blockchain().is_smart_contract(sc_address) && self.is_interest_rate_model(sc_address)
    }

    // Requires

    /// Requires that the caller is the owner of the money market.
    ///
    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.blockchain().get_owner_address(), ERROR_NOT_OWNER);
    }

    /// Requires that the money market has already accrued interest.
    ///
    fn require_market_fresh(&self) {
        require!(self.blockchain().get_block_nonce() == self.accrual_block().get(), ERROR_MARKET_NOT_FRESH);
    }

    /// Requires that the money market is not paused.
    ///
    fn require_active(&self) {
        require!(self.market_state().get() == State::Active, ERROR_MARKET_PAUSED);
    }

    /// Requires that this money market is listed at the position manager.
    ///
    fn require_listed(&self) {
        let money_market = self.blockchain().get_sc_address();
        require!(self.is_listed(&money_market), ERROR_NOT_LISTED);
    }

    /// Requires a positive amount.
    ///
    #[inline]
    fn require_positive_amount(&self, amount: &BigUint) {
        require!(*amount > BigUint::zero(), ERROR_INVALID_AMOUNT);
    }

    /// Requires the money market to hold at least the given amount of underlying.
    ///
    fn require_sufficient_cash(&self, amount: &BigUint) {
        require!(*amount <= self.cash().get(), ERROR_INSUFFICIENT_CASH);
    }

    // Accrue Interest

    /// Accrues the borrows interest since the last accrual and distributes a fraction of it into reserves. Interest is
    /// simple within the elapsed blocks and compounds at every accrual.
    ///
    /// # Notes:
    ///
    /// - It is a no-op if interest has already been accrued in the current block.
    ///
    #[endpoint(accrueInterest)]
    fn accrue_interest(&self) {
        let wad = BigUint::from(WAD);

        let n = self.blockchain().get_block_nonce();
        let n_prev = self.accrual_block().get();

        // no need to update, zero interest accumulated
        if n == n_prev {
            return;
        }

        // get borrow rate from interest rate model
        let cash_prev = self.cash().get();
        let borrows_prev = self.total_borrows().get();
        let reserves_prev = self.total_reserves().get();
        let borrow_rate_prev = self.get_borrow_rate(&cash_prev, &borrows_prev, &reserves_prev);
        let index_prev = self.borrow_index().get();

        // update total borrows
        let dn = n - n_prev;
        let borrow_rate_dn = &borrow_rate_prev * dn;
        let delta_borrows = &borrow_rate_dn * &borrows_prev / &wad;
        let new_borrows = &borrows_prev + &delta_borrows;
        self.total_borrows().set(&new_borrows);

        // a fraction of the accumulated interest go to the reserves
        let fr = self.reserve_factor().get();
        let delta_reserves = &fr * &delta_borrows / &wad;
        self.total_reserves().set(reserves_prev + delta_reserves);

        // update borrow index
        let new_index = borrow_rate_dn * &index_prev / &wad + &index_prev;
        self.borrow_index().set(&new_index);

        // update block
        self.accrual_block().set(n);

        self.accrue_interest_event(&cash_prev, &delta_borrows, &new_index, &new_borrows);
    }

    // Rates

    /// Interacts with the Interest Rate Model, computes current rates and emits the updated rates event.
    ///
    fn emit_updated_rates(&self) {
        let (borrow_rate, supply_rate) = self.get_current_rates();
        self.updated_rates_event(&borrow_rate, &supply_rate)
    }

    fn get_current_rates(&self) -> (BigUint, BigUint) {
        let cash = self.cash().get();
        let borrows = self.total_borrows().get();
        let reserves = self.total_reserves().get();
        let reserve_factor = self.reserve_factor().get();
        self.get_rates(&cash, &borrows, &reserves, &reserve_factor)
    }

    /// Returns the current borrow rate per block.
    ///
    #[view(borrowRatePerBlock)]
    fn borrow_rate_per_block(&self) -> BigUint {
        let (borrow_rate, _) = self.get_current_rates();
        borrow_rate
    }

    /// Returns the current supply rate per block.
    ///
    #[view(supplyRatePerBlock)]
    fn supply_rate_per_block(&self) -> BigUint {
        let (_, supply_rate) = self.get_current_rates();
        supply_rate
    }

    // Exchange Rate

    /// Returns the liquidity backing the outstanding shares, i.e. `cash + borrows - reserves`.
    ///
    #[view(getLiquidity)]
    fn get_liquidity(&self) -> BigUint {
        let cash = self.cash().get();
        let borrows = self.total_borrows().get();
        let reserves = self.total_reserves().get();
        let gross = cash + borrows;
        if gross <= reserves {
            return BigUint::zero();
        }
        gross - reserves
    }

    /// Returns the stored exchange rate in wad, i.e. the amount of underlying per share scaled to 18 decimals.
    ///
    /// # Notes:
    ///
    /// - Before any share exists, equals the initial exchange rate.
    ///
    #[view(getExchangeRate)]
    fn get_exchange_rate(&self) -> BigUint {
        let total_shares = self.total_shares().get();
        if total_shares == BigUint::zero() {
            return self.initial_exchange_rate().get();
        }

        let wad = BigUint::from(WAD);
        let scale = self.decimals_scale().get();
        self.get_liquidity() * scale * wad / total_shares
    }

    /// Returns the exchange rate after accruing interest.
    ///
    #[endpoint(getCurrentExchangeRate)]
    fn get_current_exchange_rate(&self) -> BigUint {
        self.accrue_interest();
        self.get_exchange_rate()
    }

    // Conversions

    /// Translates an underlying amount to shares, rounding down.
    ///
    /// # Arguments:
    ///
    /// - `underlying_amount` - the amount of underlying to be converted to shares.
    ///
    #[view(underlyingAmountToShares)]
    fn underlying_amount_to_shares(&self, underlying_amount: &BigUint) -> BigUint {
        let wad = BigUint::from(WAD);
        let scale = self.decimals_scale().get();
        let fx = self.get_exchange_rate();
        underlying_amount * &scale * &wad / &fx
    }

    /// Translates an underlying amount to shares, rounding up. Used whenever shares are burned for an exact amount of
    /// underlying.
    ///
    fn underlying_amount_to_shares_up(&self, underlying_amount: &BigUint) -> BigUint {
        let wad = BigUint::from(WAD);
        let scale = self.decimals_scale().get();
        let fx = self.get_exchange_rate();
        (underlying_amount * &scale * &wad + &fx - 1u64) / &fx
    }

    /// Translates shares to an underlying amount, rounding down.
    ///
    /// # Arguments:
    ///
    /// - `shares` - the amount of shares to be converted to underlying.
    ///
    #[view(sharesToUnderlyingAmount)]
    fn shares_to_underlying_amount(&self, shares: &BigUint) -> BigUint {
        let wad = BigUint::from(WAD);
        let scale = self.decimals_scale().get();
        let fx = self.get_exchange_rate();
        shares * &fx / &wad / &scale
    }

    /// Computes a fee in basis points over the given amount, rounding down.
    ///
    fn compute_fee(&self, amount: &BigUint, fee_rate: u64) -> BigUint {
        amount * fee_rate / BPS
    }

    // Accounts

    /// Returns the live borrow amount of an account, using the stored borrow index.
    ///
    /// # Arguments:
    ///
    /// - `account` - The account address.
    ///
    #[view(getAccountBorrowAmount)]
    fn get_account_borrow_amount(&self, account: &ManagedAddress) -> BigUint {
        let snapshot_mapper = self.account_borrow_snapshot(account);
        if snapshot_mapper.is_empty() {
            return BigUint::zero();
        }

        let snapshot = snapshot_mapper.get();
        if snapshot.borrow_amount == BigUint::zero() {
            return BigUint::zero();
        }

        let borrow_index = self.borrow_index().get();
        snapshot.borrow_amount * borrow_index / snapshot.borrow_index
    }

    /// Returns the underlying value of the shares held by an account, at the stored exchange rate.
    ///
    #[view(getAccountSuppliedUnderlying)]
    fn get_account_supplied_underlying(&self, account: &ManagedAddress) -> BigUint {
        let shares = self.account_shares(account).get();
        self.shares_to_underlying_amount(&shares)
    }

    /// Returns a snapshot of the account as a tuple of share balance, borrowed amount and exchange rate.
    ///
    /// # Arguments:
    ///
    /// - `account` - The account address.
    ///
    #[view(getAccountSnapshot)]
    fn get_account_snapshot(&self, account: &ManagedAddress) -> MultiValue3<BigUint, BigUint, BigUint> {
        let shares = self.account_shares(account).get();
        let borrow_amount = self.get_account_borrow_amount(account);
        let fx = self.get_exchange_rate();
        (shares, borrow_amount, fx).into()
    }

    /// Returns the supplied underlying and the borrowed amount of an account.
    ///
    /// # Arguments:
    ///
    /// - `account` - The account address.
    ///
    #[view(getAccountUnderlying)]
    fn get_account_underlying(&self, account: &ManagedAddress) -> MultiValue2<BigUint, BigUint> {
        let supplied = self.get_account_supplied_underlying(account);
        let borrow_amount = self.get_account_borrow_amount(account);
        (supplied, borrow_amount).into()
    }

    /// Returns the interests accrued by a supplier that can be claimed, i.e. the value of its shares in excess of its
    /// supplied principal.
    ///
    #[view(getClaimableInterests)]
    fn get_claimable_interests(&self, account: &ManagedAddress) -> BigUint {
        let value = self.get_account_supplied_underlying(account);
        let supplied = self.account_supplied(account).get();
        if value <= supplied {
            return BigUint::zero();
        }
        value - supplied
    }

    /// Returns the amount of underlying held by the money market.
    ///
    #[view(getUnderlyingBalance)]
    fn get_underlying_balance(&self) -> BigUint {
        self.cash().get()
    }

    /// Sets the account borrow snapshot for a given borrower, which includes the borrow amount and the borrow index at the
    /// time of the snapshot.
    ///
    fn set_account_borrow_snapshot(&self, borrower: &ManagedAddress, borrow_amount: &BigUint) {
        let snapshot = AccountSnapshot {
            borrow_amount: borrow_amount.clone(),
            borrow_index: self.borrow_index().get(),
        };
        self.account_borrow_snapshot(borrower).set(snapshot);
    }

    /// Burns shares from an account and reduces its supplied principal pro rata.
    ///
    fn burn_shares(&self, account: &ManagedAddress, shares: &BigUint) {
        let balance = self.account_shares(account).get();
        require!(*shares <= balance, ERROR_INVALID_AMOUNT);

        let supplied = self.account_supplied(account).get();
        let supplied_left = if *shares == balance { BigUint::zero() } else { &supplied - &(&supplied * shares / &balance) };

        self.account_shares(account).set(&balance - shares);
        self.account_supplied(account).set(supplied_left);
        self.total_shares().update(|total| *total -= shares);
    }

    // Sets

    /// Sets the underlying identifier and its decimals iff not already set.
    ///
    /// # Arguments:
    ///
    /// - `underlying_id` - the underlying identifier.
    /// - `decimals` - the number of decimals of the underlying.
    ///
    fn try_set_underlying_id(&self, underlying_id: &EgldOrEsdtTokenIdentifier, decimals: u8) {
        require!(underlying_id.is_valid(), ERROR_INVALID_ASSET);
        require!(decimals <= SHARE_DECIMALS, ERROR_INVALID_DECIMALS);
        if self.underlying_id().is_empty() {
            let scale = BigUint::from(10u64).pow((SHARE_DECIMALS - decimals) as u32);
            self.underlying_id().set(underlying_id);
            self.underlying_decimals().set(decimals);
            self.decimals_scale().set(scale);
            self.set_underlying_id_event(underlying_id, decimals);
        }
    }

    /// Sets the initial exchange rate iff not already set.
    ///
    /// # Arguments:
    ///
    /// - `initial_exchange_rate` - the initial exchange rate.
    ///
    fn try_set_initial_exchange_rate(&self, initial_exchange_rate: &BigUint) {
        require!(*initial_exchange_rate > BigUint::zero(), ERROR_INITIAL_FX_MUST_BE_GREATER_THAN_ZERO);
        if self.initial_exchange_rate().is_empty() {
            self.initial_exchange_rate().set(initial_exchange_rate);
            self.set_initial_exchange_rate_event(initial_exchange_rate);
        }
    }

    /// Sets the borrow index to one and the accrual block to the current block iff not already set.
    ///
    fn try_set_accrual_state(&self) {
        self.borrow_index().set_if_empty(BigUint::from(WAD));
        self.accrual_block().set_if_empty(self.blockchain().get_block_nonce());
    }

    /// Tries to set the position manager iff not already set.
    ///
    /// # Arguments:
    ///
    /// - `position_manager` - The address of the position manager.
    ///
    fn try_set_position_manager(&self, position_manager: &ManagedAddress) {
        if self.position_manager().is_empty() {
            require!(self.is_position_manager_sc(position_manager), ERROR_NON_VALID_POSITION_MANAGER_SC);
            self.position_manager().set(position_manager);
            self.new_position_manager_event(position_manager);
        }
    }

    /// Tries to set the interest rate model iff not already set.
    ///
    /// # Arguments:
    ///
    /// - `interest_rate_model` - The address of the interest rate model.
    ///
    fn try_set_interest_rate_model(&self, interest_rate_model: &ManagedAddress) {
        if self.interest_rate_model().is_empty() {
            self.set_interest_rate_model_internal(interest_rate_model);
        }
    }

    fn set_interest_rate_model_internal(&self, new_interest_rate_model: &ManagedAddress) {
        require!(self.is_interest_rate_model_sc(new_interest_rate_model), ERROR_NON_VALID_INTEREST_RATE_MODEL_SC);

        let old_interest_rate_model = if self.interest_rate_model().is_empty() {
            None
        } else {
            // settle interest with the old model first
            self.accrue_interest();
            self.require_market_fresh();
            Some(self.interest_rate_model().get())
        };

        self.interest_rate_model().set(new_interest_rate_model);

        self.emit_updated_rates();
        self.new_interest_rate_model_event(&old_interest_rate_model, new_interest_rate_model);
    }

    /// Tries to set the market state iff not already set.
    ///
    fn try_set_market_state(&self, market_state: &State) {
        if self.market_state().is_empty() {
            self.set_market_state_internal(market_state);
        }
    }

    fn set_market_state_internal(&self, new_market_state: &State) {
        let old_market_state = if self.market_state().is_empty() { None } else { Some(self.market_state().get()) };
        require!(old_market_state.as_ref() != Some(new_market_state), ERROR_ALREADY_IN_STATE);
        self.market_state().set(new_market_state);
        self.set_market_state_event(&old_market_state, new_market_state);
    }

    /// Sets the reserve factor iff not already set.
    ///
    fn try_set_reserve_factor(&self, reserve_factor: &BigUint) {
        require!(*reserve_factor <= BigUint::from(WAD), ERROR_RESERVE_FACTOR_TOO_HIGH);
        if self.reserve_factor().is_empty() {
            self.reserve_factor().set(reserve_factor);
            self.new_reserve_factor_event(&BigUint::zero(), reserve_factor);
        }
    }

    /// Sets the fee rates iff not already set.
    ///
    fn try_set_fee_rate(&self, fee_rate: &FeeRate) {
        if self.fee_rate().is_empty() {
            self.set_fee_rate_internal(fee_rate);
        }
    }

    fn set_fee_rate_internal(&self, new_fee_rate: &FeeRate) {
        require!(new_fee_rate.borrowing_fee_rate <= BPS, ERROR_INVALID_FEE_RATE);
        require!(new_fee_rate.redeeming_fee_rate <= BPS, ERROR_INVALID_FEE_RATE);
        require!(new_fee_rate.claiming_fee_rate <= BPS, ERROR_INVALID_FEE_RATE);

        let old_fee_rate = if self.fee_rate().is_empty() { None } else { Some(self.fee_rate().get()) };
        self.fee_rate().set(new_fee_rate);
        self.new_fee_rate_event(&old_fee_rate, new_fee_rate);
    }
}
