#![no_std]

multiversx_sc::imports!();

pub mod errors;

use errors::*;

pub const WAD: u64 = 1_000_000_000_000_000_000;

// Jump Rate Model
//
// borrow_rate(u) ^
//                │                                   .
//                │                                 .
//                │                               .   jm
//                │                             .
//  m * k + r0    +───────────────────────────+
//                │                        .  │
//                │                     .     │
//                │                  .        │
//                │               .  m        │
//                │            .              │
//                │         .                 │
//                │      .                    │
//             r0 _.                          │
//                │                           │
//               0└───────────────────────────+───────────────>
//                0                           k       1       u
//

#[multiversx_sc::contract]
pub trait InterestRateModel {
    /// Initializes the Interest Rate Model smart contract with the given parameters.
    ///
    /// The `r0_y`, `m_y` and `jm_y` parameters describe the piecewise linear function that determines the borrow rate.
    /// They are provided in per year term basis and are translated to a per block term basis using `blocks_per_year`.
    ///
    /// # Arguments:
    ///
    /// - `blocks_per_year` - The number of blocks produced per year.
    /// - `r0_y` - The base borrow rate per year.
    /// - `m_y` - The borrow rate per year reached at the kink, on top of the base rate.
    /// - `jm_y` - The slope per year applied to the utilization excess over the kink.
    /// - `kink` - The utilization at which the jump multiplier kicks in.
    ///
    #[init]
    fn init(&self, blocks_per_year: u64, r0_y: BigUint, m_y: BigUint, jm_y: BigUint, kink: BigUint) {
        require!(blocks_per_year > 0, ERROR_INVALID_BLOCKS_PER_YEAR);
        self.blocks_per_year().set_if_empty(blocks_per_year);
        self.update_jump_rate_model_internal(r0_y, m_y, jm_y, kink);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Updates the model parameters. Rates are given per year.
    ///
    /// # Arguments:
    ///
    /// - `r0_y` - The base borrow rate per year.
    /// - `m_y` - The borrow rate per year reached at the kink, on top of the base rate.
    /// - `jm_y` - The slope per year applied to the utilization excess over the kink.
    /// - `kink` - The utilization at which the jump multiplier kicks in.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the owner.
    ///
    #[endpoint(updateJumpRateModel)]
    fn update_jump_rate_model(&self, r0_y: BigUint, m_y: BigUint, jm_y: BigUint, kink: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.blockchain().get_owner_address(), ERROR_NOT_OWNER);
        self.update_jump_rate_model_internal(r0_y, m_y, jm_y, kink);
    }

    fn update_jump_rate_model_internal(&self, r0_y: BigUint, m_y: BigUint, jm_y: BigUint, kink: BigUint) {
        let wad = BigUint::from(WAD);
        require!(kink > BigUint::zero() && kink <= wad, ERROR_INVALID_KINK);

        let bpy = BigUint::from(self.blocks_per_year().get());
        let r0 = r0_y / &bpy;
        let m = m_y * &wad / (&bpy * &kink);
        let jm = jm_y / &bpy;

        self.base_rate().set(&r0);
        self.multiplier().set(&m);
        self.jump_multiplier().set(&jm);
        self.kink().set(&kink);

        self.new_interest_params_event(&r0, &m, &jm, &kink);
    }

    /// Returns true to indicate that this contract is an interest rate model.
    #[view(isInterestRateModel)]
    fn is_interest_rate_model(&self) -> bool {
        true
    }

    /// Returns the utilization rate, calculated as borrows divided by `cash + borrows - reserves`. If borrows are zero,
    /// returns zero. If the denominator vanishes, the market is fully utilized.
    ///
    /// # Arguments:
    ///
    /// - `cash` - The amount of underlying held by the market.
    /// - `borrows` - The total amount borrowed.
    /// - `reserves` - The amount of reserves held by the market.
    ///
    #[view(getUtilization)]
    fn get_utilization(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint) -> BigUint {
        let zero = BigUint::zero();
        if *borrows == zero {
            return zero;
        }

        let wad = BigUint::from(WAD);
        let gross = cash + borrows;
        if gross <= *reserves {
            return wad;
        }

        borrows * &wad / (gross - reserves)
    }

    /// Returns the current model parameters as a tuple of base rate, multiplier, jump multiplier (all of them per block)
    /// and kink.
    ///
    #[view(getModelParameters)]
    fn get_model_parameters(&self) -> (BigUint, BigUint, BigUint, BigUint) {
        let r0 = self.base_rate().get();
        let m = self.multiplier().get();
        let jm = self.jump_multiplier().get();
        let kink = self.kink().get();
        (r0, m, jm, kink)
    }

    /// Computes the borrow rate per block.
    ///
    /// # Arguments:
    ///
    /// - `cash` - The amount of underlying held by the market.
    /// - `borrows` - The total amount borrowed.
    /// - `reserves` - The amount of reserves held by the market.
    ///
    #[view(getBorrowRate)]
    fn get_borrow_rate(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint) -> BigUint {
        let wad = BigUint::from(WAD);
        let u = self.get_utilization(cash, borrows, reserves);
        let r0 = self.base_rate().get();
        let m = self.multiplier().get();
        let kink = self.kink().get();

        if u <= kink {
            return u * &m / &wad + r0;
        }

        let jm = self.jump_multiplier().get();
        let normal_rate = &kink * &m / &wad + r0;
        let excess = u - kink;
        excess * jm / &wad + normal_rate
    }

    /// Computes the supply rate per block, as the borrow rate weighted by utilization and net of the reserve factor.
    ///
    /// # Arguments:
    ///
    /// - `cash` - The amount of underlying held by the market.
    /// - `borrows` - The total amount borrowed.
    /// - `reserves` - The amount of reserves held by the market.
    /// - `reserve_factor` - The reserve factor of the market, in wad.
    ///
    #[view(getSupplyRate)]
    fn get_supply_rate(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint, reserve_factor: &BigUint) -> BigUint {
        let borrow_rate = self.get_borrow_rate(cash, borrows, reserves);
        self.get_supply_rate_internal(cash, borrows, reserves, &borrow_rate, reserve_factor)
    }

    fn get_supply_rate_internal(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint, borrow_rate: &BigUint, reserve_factor: &BigUint) -> BigUint {
        let wad = BigUint::from(WAD);
        let utilization = self.get_utilization(cash, borrows, reserves);
        utilization * borrow_rate / &wad * (&wad - reserve_factor) / &wad
    }

    /// Computes the borrow and supply rates per block.
    ///
    #[view(getRates)]
    fn get_rates(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint, reserve_factor: &BigUint) -> (BigUint, BigUint) {
        let borrow_rate = self.get_borrow_rate(cash, borrows, reserves);
        let supply_rate = self.get_supply_rate_internal(cash, borrows, reserves, &borrow_rate, reserve_factor);
        (borrow_rate, supply_rate)
    }

    /// Annualized borrow rate, for reporting purposes only.
    #[view(getBorrowRatePerYear)]
    fn get_borrow_rate_per_year(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint) -> BigUint {
        self.get_borrow_rate(cash, borrows, reserves) * self.blocks_per_year().get()
    }

    /// Annualized supply rate, for reporting purposes only.
    #[view(getSupplyRatePerYear)]
    fn get_supply_rate_per_year(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint, reserve_factor: &BigUint) -> BigUint {
        self.get_supply_rate(cash, borrows, reserves, reserve_factor) * self.blocks_per_year().get()
    }

    /// Stores the number of blocks per year used to translate yearly rates.
    #[view(getBlocksPerYear)]
    #[storage_mapper("blocks_per_year")]
    fn blocks_per_year(&self) -> SingleValueMapper<u64>;

    /// Stores the base rate per block.
    #[view(getBaseRate)]
    #[storage_mapper("base_rate")]
    fn base_rate(&self) -> SingleValueMapper<BigUint>;

    /// Stores the slope of the borrow rate up to the kink.
    #[view(getMultiplier)]
    #[storage_mapper("multiplier")]
    fn multiplier(&self) -> SingleValueMapper<BigUint>;

    /// Stores the slope of the borrow rate after the kink.
    #[view(getJumpMultiplier)]
    #[storage_mapper("jump_multiplier")]
    fn jump_multiplier(&self) -> SingleValueMapper<BigUint>;

    /// Stores the utilization point at which the jump multiplier is applied.
    #[view(getKink)]
    #[storage_mapper("kink")]
    fn kink(&self) -> SingleValueMapper<BigUint>;

    /// Emitted when model parameters are set.
    #[event("new_interest_params_event")]
    fn new_interest_params_event(&self, #[indexed] base_rate: &BigUint, #[indexed] multiplier: &BigUint, #[indexed] jump_multiplier: &BigUint, #[indexed] kink: &BigUint);
}
