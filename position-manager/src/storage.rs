multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[type_abi]
#[derive(TopEncode, TopDecode, PartialEq, Clone, Copy, Debug)]
pub enum Status {
    Active,
    Paused,
}

/// Global risk parameters, in basis points.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, PartialEq, Clone, Debug)]
pub struct RiskParameters {
    pub max_liquidate_rate: u64,
    pub health_threshold: u64,
}

#[multiversx_sc::module]
pub trait StorageModule {
    /// Stores the set of listed money markets.
    #[view(getListedPools)]
    #[storage_mapper("listed_pools")]
    fn listed_pools(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Stores the underlying identifier of a listed money market.
    #[view(getMarketUnderlying)]
    #[storage_mapper("market_underlying")]
    fn market_underlying(&self, money_market: &ManagedAddress) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Stores `10^decimals` of the underlying of a listed money market.
    #[view(getMarketUnit)]
    #[storage_mapper("market_unit")]
    fn market_unit(&self, money_market: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Stores the borrow cap (loan to value) of a money market, in basis points.
    #[view(getBorrowCap)]
    #[storage_mapper("borrow_caps")]
    fn borrow_caps(&self, money_market: &ManagedAddress) -> SingleValueMapper<u64>;

    /// Stores the money markets an account is a member of.
    #[view(getAccountPools)]
    #[storage_mapper("account_pools")]
    fn account_pools(&self, account: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    /// Stores the borrowing status of a money market.
    #[view(getBorrowStatus)]
    #[storage_mapper("borrow_status")]
    fn borrow_status(&self, money_market: &ManagedAddress) -> SingleValueMapper<Status>;

    /// Stores the global risk parameters.
    #[view(getRiskParameters)]
    #[storage_mapper("risk_parameters")]
    fn risk_parameters(&self) -> SingleValueMapper<RiskParameters>;

    /// Stores the price oracle address.
    #[view(getPriceOracle)]
    #[storage_mapper("price_oracle")]
    fn price_oracle(&self) -> SingleValueMapper<ManagedAddress>;
}
