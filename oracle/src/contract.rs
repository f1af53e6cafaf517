#![no_std]

multiversx_sc::imports!();

pub mod common;
pub mod constants;
pub mod errors;
pub mod events;
pub mod governance;
pub mod prices;
pub mod proxies;
pub mod storage;

/// Price Oracle Smart Contract
///
/// Prices every supported asset in terms of a configurable base token, using an external price source for the quotes.
///
#[multiversx_sc::contract]
pub trait Oracle: common::CommonModule + events::EventsModule + governance::GovernanceModule + prices::PriceModule + proxies::ProxyModule + storage::StorageModule {
    /// Initializes the Oracle.
    ///
    /// # Arguments:
    ///
    /// - `base_token` - The token in which prices are expressed.
    /// - `base_decimals` - The number of decimals of the base token.
    /// - `price_source` - The smart contract used to quote tokens against the base token.
    ///
    #[init]
    fn init(&self, base_token: EgldOrEsdtTokenIdentifier, base_decimals: u8, price_source: ManagedAddress) {
        self.try_set_price_source(&price_source);
        self.try_set_base_token(&base_token, base_decimals);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
