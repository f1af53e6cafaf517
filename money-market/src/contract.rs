#![no_std]

multiversx_sc::imports!();

pub mod borrow;
pub mod common;
pub mod constants;
pub mod errors;
pub mod events;
pub mod governance;
pub mod interests;
pub mod mint;
pub mod proxies;
pub mod redeem;
pub mod repay_borrow;
pub mod storage;
pub mod transfers;

use crate::storage::{FeeRate, State};

/// Money Market Smart Contract
///
/// Holds the ledger of a single underlying asset, which is either EGLD or a fungible ESDT.
///
#[multiversx_sc::contract]
pub trait MoneyMarket: borrow::BorrowModule + common::CommonModule + events::EventsModule + governance::GovernanceModule + interests::InterestsModule + mint::MintModule + proxies::ProxyModule + redeem::RedeemModule + repay_borrow::RepayBorrowModule + storage::StorageModule + transfers::TransfersModule {
    /// Initialize the Money Market.
    ///
    /// # Arguments:
    ///
    /// - `underlying_id` - The underlying identifier, `EGLD` for a native money market.
    /// - `underlying_decimals` - The number of decimals of the underlying.
    /// - `position_manager` - The address of the Position Manager.
    /// - `interest_rate_model` - The address of the Interest Rate Model.
    /// - `initial_exchange_rate` - The initial exchange rate in wad.
    /// - `reserve_factor` - The reserve factor in wad.
    /// - `fee_rate` - The borrowing, redeeming and claiming fee rates in basis points.
    ///
    /// Notes:
    ///
    /// - The money market starts active, but it cannot be used until listed at the Position Manager.
    ///
    #[init]
    fn init(&self, underlying_id: EgldOrEsdtTokenIdentifier, underlying_decimals: u8, position_manager: ManagedAddress, interest_rate_model: ManagedAddress, initial_exchange_rate: BigUint, reserve_factor: BigUint, fee_rate: FeeRate) {
        self.try_set_underlying_id(&underlying_id, underlying_decimals);
        self.try_set_initial_exchange_rate(&initial_exchange_rate);
        self.try_set_accrual_state();
        self.try_set_reserve_factor(&reserve_factor);
        self.try_set_fee_rate(&fee_rate);
        self.try_set_market_state(&State::Active);
        self.try_set_position_manager(&position_manager);
        self.try_set_interest_rate_model(&interest_rate_model);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
