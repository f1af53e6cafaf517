multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// The money market state.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum State {
    Active,
    Paused,
}

/// Represents a snapshot of an account's borrow balance.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AccountSnapshot<M>
where
    M: ManagedTypeApi,
{
    pub borrow_amount: BigUint<M>,
    pub borrow_index: BigUint<M>,
}

/// Fee rates in basis points.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct FeeRate {
    pub borrowing_fee_rate: u64,
    pub redeeming_fee_rate: u64,
    pub claiming_fee_rate: u64,
}

#[multiversx_sc::module]
pub trait StorageModule {
    /// Stores the money market state.
    #[view(getState)]
    #[storage_mapper("market_state")]
    fn market_state(&self) -> SingleValueMapper<State>;

    /// Stores the underlying identifier.
    #[view(getUnderlyingId)]
    #[storage_mapper("underlying_id")]
    fn underlying_id(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Stores the number of decimals of the underlying.
    #[view(getUnderlyingDecimals)]
    #[storage_mapper("underlying_decimals")]
    fn underlying_decimals(&self) -> SingleValueMapper<u8>;

    /// Stores `10^(18 - underlying_decimals)`, which scales underlying amounts to the 18 decimals of shares.
    #[view(getDecimalsScale)]
    #[storage_mapper("decimals_scale")]
    fn decimals_scale(&self) -> SingleValueMapper<BigUint>;

    /// Stores the set of tokens associated with the money market.
    #[view(getAssociatedTokens)]
    #[storage_mapper("associated_tokens")]
    fn associated_tokens(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    /// Stores the share balance of a given account.
    #[view(getShareBalance)]
    #[storage_mapper("account_shares")]
    fn account_shares(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Stores the underlying principal supplied by a given account, net of redemptions.
    #[view(getSuppliedAmount)]
    #[storage_mapper("account_supplied")]
    fn account_supplied(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Stores the borrow snapshot for a given borrower account.
    #[view(getAccountBorrowSnapshot)]
    #[storage_mapper("account_borrow_snapshot")]
    fn account_borrow_snapshot(&self, borrower: &ManagedAddress) -> SingleValueMapper<AccountSnapshot<Self::Api>>;

    /// Stores the current balance of the underlying asset.
    #[view(getCash)]
    #[storage_mapper("cash")]
    fn cash(&self) -> SingleValueMapper<BigUint>;

    /// Stores the total amount of outstanding borrows up to the last accrue of interest.
    #[view(getTotalBorrows)]
    #[storage_mapper("total_borrows")]
    fn total_borrows(&self) -> SingleValueMapper<BigUint>;

    /// Stores the current amount of reserves.
    #[view(getTotalReserves)]
    #[storage_mapper("total_reserves")]
    fn total_reserves(&self) -> SingleValueMapper<BigUint>;

    /// Stores the total amount of shares.
    #[view(getTotalShares)]
    #[storage_mapper("total_shares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    /// Stores the initial exchange rate.
    #[view(getInitialExchangeRate)]
    #[storage_mapper("initial_exchange_rate")]
    fn initial_exchange_rate(&self) -> SingleValueMapper<BigUint>;

    /// Stores the borrow index.
    #[view(getBorrowIndex)]
    #[storage_mapper("borrow_index")]
    fn borrow_index(&self) -> SingleValueMapper<BigUint>;

    /// Stores the block nonce of the last accrual of interest.
    #[view(getAccrualBlock)]
    #[storage_mapper("accrual_block")]
    fn accrual_block(&self) -> SingleValueMapper<u64>;

    /// Stores the reserve factor.
    #[view(getReserveFactor)]
    #[storage_mapper("reserve_factor")]
    fn reserve_factor(&self) -> SingleValueMapper<BigUint>;

    /// Stores the borrowing, redeeming and claiming fee rates.
    #[view(getFeeRate)]
    #[storage_mapper("fee_rate")]
    fn fee_rate(&self) -> SingleValueMapper<FeeRate>;

    /// Stores the position manager address.
    #[view(getPositionManager)]
    #[storage_mapper("position_manager")]
    fn position_manager(&self) -> SingleValueMapper<ManagedAddress>;

    /// Stores the interest rate model address.
    #[view(getInterestRateModel)]
    #[storage_mapper("interest_rate_model")]
    fn interest_rate_model(&self) -> SingleValueMapper<ManagedAddress>;
}
