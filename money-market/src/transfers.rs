multiversx_sc::imports!();

use super::{errors::*, events, storage};

#[multiversx_sc::module]
pub trait TransfersModule: events::EventsModule + storage::StorageModule {
    /// Returns the amount of underlying paid to the current call. Native money markets receive EGLD as call value while
    /// token money markets receive a single fungible ESDT, which must have been associated first.
    ///
    fn receive_underlying(&self) -> BigUint {
        let (payment_id, payment_amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(payment_amount > BigUint::zero(), ERROR_INVALID_AMOUNT);

        let underlying_id = self.underlying_id().get();
        require!(payment_id == underlying_id, ERROR_INVALID_ASSET);

        if !underlying_id.is_egld() {
            require!(self.associated_tokens().contains(&underlying_id), ERROR_TOKEN_NOT_ASSOCIATED);
        }

        payment_amount
    }

    /// Sends an amount of underlying to the given address, either as EGLD or as ESDT.
    ///
    fn send_underlying(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount == BigUint::zero() {
            return;
        }

        let underlying_id = self.underlying_id().get();
        self.send().direct(to, &underlying_id, 0, amount);
    }

    /// Sends a fee to the owner of the money market, which acts as treasury.
    ///
    fn send_fee_to_treasury(&self, fee: &BigUint) {
        let treasury = self.blockchain().get_owner_address();
        self.send_underlying(&treasury, fee);
    }
}
