multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    /// Stores the token in which all prices are expressed.
    #[view(getBaseToken)]
    #[storage_mapper("base_token")]
    fn base_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Stores the address of the external price source.
    #[view(getPriceSource)]
    #[storage_mapper("price_source")]
    fn price_source(&self) -> SingleValueMapper<ManagedAddress>;

    /// Stores the number of decimals of a given token.
    #[storage_mapper("token_decimals")]
    fn token_decimals(&self, token_id: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<u8>;
}
