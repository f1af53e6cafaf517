multiversx_sc::imports!();

use super::{constants::*, events, proxies, shared, storage};

/// The positions of an account valued in base token units and in wad.
#[derive(Clone)]
pub struct AccountLiquidity<M: ManagedTypeApi> {
    pub collateral: BigUint<M>,
    pub weighted_collateral: BigUint<M>,
    pub debt: BigUint<M>,
}

impl<M: ManagedTypeApi> AccountLiquidity<M> {
    pub fn is_solvent(&self) -> bool {
        self.weighted_collateral >= self.debt
    }

    /// The collateral value left for new borrows, zero if the account is at or over its limit.
    pub fn available(&self) -> BigUint<M> {
        if self.weighted_collateral <= self.debt {
            return BigUint::zero();
        }
        &self.weighted_collateral - &self.debt
    }

    /// Whether the debt to collateral ratio reaches the given threshold in basis points.
    pub fn reaches_threshold(&self, threshold: u64) -> bool {
        if self.debt == BigUint::zero() {
            return false;
        }
        &self.debt * BPS >= &self.collateral * threshold
    }
}

#[multiversx_sc::module]
pub trait RiskProfileModule: events::EventModule + proxies::ProxyModule + shared::SharedModule + storage::StorageModule {
    /// Returns the amount of underlying an account can still borrow from a given money market, considering its collateral
    /// in every money market weighted by their borrow caps and its outstanding borrows in all of them.
    ///
    /// # Arguments:
    ///
    /// - `account` - The account address.
    /// - `money_market` - The money market to borrow from.
    ///
    /// # Notes:
    ///
    /// - Only money markets where the account is a member or has supplied count.
    /// - Returns zero if the account is at or over its limit.
    ///
    #[view(getBorrowableAmount)]
    fn get_borrowable_amount(&self, account: &ManagedAddress, money_market: &ManagedAddress) -> BigUint {
        self.require_listed(money_market);

        let liquidity = self.simulate_account_liquidity(account, &ManagedAddress::zero(), &BigUint::zero());
        let available = liquidity.available();
        if available == BigUint::zero() {
            return available;
        }

        let underlying_id = self.market_underlying(money_market).get();
        let price = self.get_token_price(&underlying_id);
        let unit = self.market_unit(money_market).get();
        available * unit / price
    }

    /// Returns the raw collateral and debt values of an account, in base token units and in wad.
    ///
    /// # Arguments:
    ///
    /// - `account` - The account address.
    ///
    #[view(getAccountHealth)]
    fn get_account_health(&self, account: &ManagedAddress) -> MultiValue2<BigUint, BigUint> {
        let liquidity = self.simulate_account_liquidity(account, &ManagedAddress::zero(), &BigUint::zero());
        (liquidity.collateral, liquidity.debt).into()
    }

    /// Checks whether an account position is eligible for liquidation, i.e. whether its debt to collateral ratio is at or
    /// above the health threshold.
    ///
    /// # Arguments:
    ///
    /// - `account` - The account address.
    ///
    #[view(isLiquidatable)]
    fn is_liquidatable(&self, account: &ManagedAddress) -> bool {
        let liquidity = self.simulate_account_liquidity(account, &ManagedAddress::zero(), &BigUint::zero());
        let health_threshold = self.risk_parameters().get().health_threshold;
        liquidity.reaches_threshold(health_threshold)
    }

    /// Values the positions of an account across every listed money market, simulating a withdrawal of underlying from a
    /// given money market.
    ///
    /// # Arguments:
    ///
    /// - `account` - The account we wish to analyze.
    /// - `this_money_market` - The money market used for the withdrawal simulation.
    /// - `redeem_amount` - The amount of underlying withdrawn from `this_money_market`.
    ///
    fn simulate_account_liquidity(&self, account: &ManagedAddress, this_money_market: &ManagedAddress, redeem_amount: &BigUint) -> AccountLiquidity<Self::Api> {
        let mut collateral = BigUint::zero();
        let mut weighted_collateral = BigUint::zero();
        let mut debt = BigUint::zero();

        let account_pools = self.account_pools(account);
        for money_market in self.listed_pools().iter() {
            let (mut supplied, borrowed) = self.get_account_underlying(&money_market, account);

            if !account_pools.contains(&money_market) && supplied == BigUint::zero() {
                continue;
            }

            if money_market == *this_money_market {
                supplied = if supplied > *redeem_amount { supplied - redeem_amount } else { BigUint::zero() };
            }

            if supplied == BigUint::zero() && borrowed == BigUint::zero() {
                continue;
            }

            let underlying_id = self.market_underlying(&money_market).get();
            let price = self.get_token_price(&underlying_id);
            let unit = self.market_unit(&money_market).get();
            let borrow_cap = self.borrow_caps(&money_market).get();

            let supplied_value = supplied * &price / &unit;
            weighted_collateral += &supplied_value * borrow_cap / BPS;
            collateral += supplied_value;
            debt += borrowed * &price / &unit;
        }

        AccountLiquidity { collateral, weighted_collateral, debt }
    }
}
