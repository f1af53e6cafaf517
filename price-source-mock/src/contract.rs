#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A quote reference: `amount_in` of the input token trades for `amount_out` of the output token.
#[type_abi]
#[derive(TopEncode, TopDecode, Clone)]
pub struct QuoteRef<M: ManagedTypeApi> {
    pub amount_in: BigUint<M>,
    pub amount_out: BigUint<M>,
}

/// Price Source Mock
///
/// A fixed-ratio price source used in tests instead of a DEX.
///
#[multiversx_sc::contract]
pub trait PriceSourceMock {
    #[init]
    fn init(&self) {}

    /// Sets the reference quote for a token pair.
    ///
    #[endpoint(setQuote)]
    fn set_quote(&self, token_in: EgldOrEsdtTokenIdentifier, token_out: EgldOrEsdtTokenIdentifier, amount_in: BigUint, amount_out: BigUint) {
        require!(amount_in > BigUint::zero(), "amount in must be greater than zero");
        self.quote_ref(&token_in, &token_out).set(QuoteRef { amount_in, amount_out });
    }

    /// Quotes `amount_in` of `token_in` in terms of `token_out`.
    ///
    #[view(quote)]
    fn quote(&self, token_in: &EgldOrEsdtTokenIdentifier, token_out: &EgldOrEsdtTokenIdentifier, amount_in: &BigUint) -> BigUint {
        let quote_ref = self.quote_ref(token_in, token_out);
        require!(!quote_ref.is_empty(), "no market");
        let quote_ref = quote_ref.get();
        amount_in * &quote_ref.amount_out / &quote_ref.amount_in
    }

    #[storage_mapper("quote_ref")]
    fn quote_ref(&self, token_in: &EgldOrEsdtTokenIdentifier, token_out: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<QuoteRef<Self::Api>>;
}
