multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    /// Event emitted when the base token is updated.
    #[event("new_base_token_event")]
    fn new_base_token_event(&self, #[indexed] old: &Option<EgldOrEsdtTokenIdentifier>, #[indexed] new: &EgldOrEsdtTokenIdentifier);

    /// Event emitted when the number of decimals of a token is set.
    #[event("set_token_decimals_event")]
    fn set_token_decimals_event(&self, #[indexed] token_id: &EgldOrEsdtTokenIdentifier, #[indexed] decimals: u8);

    /// Event emitted when the price source is updated.
    #[event("new_price_source_event")]
    fn new_price_source_event(&self, #[indexed] old: &Option<ManagedAddress>, #[indexed] new: &ManagedAddress);
}
