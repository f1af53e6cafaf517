#![allow(dead_code)]

use interest_rate_model::InterestRateModel as _;
use money_market::{governance::GovernanceModule as _, storage::FeeRate, MoneyMarket as _};
use multiversx_sc_scenario::imports::*;
use oracle::{governance::GovernanceModule as _, Oracle as _};
use position_manager::{governance::GovernanceModule as _, market::MarketModule as _, PositionManager as _};
use price_source_mock::PriceSourceMock as _;

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const SUPPLIER: TestAddress = TestAddress::new("supplier");
pub const BORROWER: TestAddress = TestAddress::new("borrower");

pub const PRICE_SOURCE: TestSCAddress = TestSCAddress::new("price-source");
pub const ORACLE: TestSCAddress = TestSCAddress::new("oracle");
pub const INTEREST_RATE_MODEL: TestSCAddress = TestSCAddress::new("interest-rate-model");
pub const POSITION_MANAGER: TestSCAddress = TestSCAddress::new("position-manager");
pub const USDC_MARKET: TestSCAddress = TestSCAddress::new("usdc-market");
pub const WSOL_MARKET: TestSCAddress = TestSCAddress::new("wsol-market");
pub const EGLD_MARKET: TestSCAddress = TestSCAddress::new("egld-market");

pub const PRICE_SOURCE_PATH: MxscPath = MxscPath::new("price-source-mock/output/price-source-mock.mxsc.json");
pub const ORACLE_PATH: MxscPath = MxscPath::new("oracle/output/oracle.mxsc.json");
pub const INTEREST_RATE_MODEL_PATH: MxscPath = MxscPath::new("interest-rate-model/output/interest-rate-model.mxsc.json");
pub const POSITION_MANAGER_PATH: MxscPath = MxscPath::new("position-manager/output/position-manager.mxsc.json");
pub const MONEY_MARKET_PATH: MxscPath = MxscPath::new("money-market/output/money-market.mxsc.json");

pub const USDC_ID: &str = "USDC-123456";
pub const WSOL_ID: &str = "WSOL-abcdef";
pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new(USDC_ID);
pub const WSOL_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new(WSOL_ID);

pub const USDC_DECIMALS: u8 = 6;
pub const WSOL_DECIMALS: u8 = 9;
pub const EGLD_DECIMALS: u8 = 18;

pub const WAD: u64 = 1_000_000_000_000_000_000;
pub const USDC_UNIT: u64 = 1_000_000;
pub const WSOL_UNIT: u64 = 1_000_000_000;

// jump rate model, per year
pub const BLOCKS_PER_YEAR: u64 = 1_000;
pub const BASE_RATE_PER_YEAR: u64 = 20_000_000_000_000_000;
pub const MULTIPLIER_PER_YEAR: u64 = 100_000_000_000_000_000;
pub const JUMP_MULTIPLIER_PER_YEAR: u64 = WAD;
pub const KINK: u64 = 800_000_000_000_000_000;

pub const INITIAL_EXCHANGE_RATE: u64 = 20_000_000_000_000_000;
pub const RESERVE_FACTOR: u64 = 100_000_000_000_000_000;
pub const BORROWING_FEE_RATE: u64 = 100;
pub const REDEEMING_FEE_RATE: u64 = 200;
pub const CLAIMING_FEE_RATE: u64 = 500;

pub const BORROW_CAP: u64 = 7_000;
pub const MAX_LIQUIDATE_RATE: u64 = 5_000;
pub const HEALTH_THRESHOLD: u64 = 9_500;

// prices in base token (USDC) units per whole token
pub const WSOL_PRICE: u64 = 100;
pub const EGLD_PRICE: u64 = 40;

pub const INITIAL_USDC_BALANCE: u64 = 10_000 * USDC_UNIT;
pub const INITIAL_WSOL_BALANCE: u64 = 100 * WSOL_UNIT;
pub const INITIAL_EGLD_BALANCE: u64 = 5 * WAD;

pub fn managed_address<M: ManagedTypeApi>(address: &Address) -> ManagedAddress<M> {
    ManagedAddress::from_address(address)
}

pub fn esdt_id<M: ManagedTypeApi>(token_id: &str) -> EgldOrEsdtTokenIdentifier<M> {
    EgldOrEsdtTokenIdentifier::esdt(TokenIdentifier::from(token_id))
}

pub fn esdt_payment(token_id: &str, amount: u64) -> EsdtTokenPayment<StaticApi> {
    EsdtTokenPayment::new(TokenIdentifier::from(token_id), 0, BigUint::from(amount))
}

pub fn to_managed<M: ManagedTypeApi>(value: &num_bigint::BigUint) -> BigUint<M> {
    BigUint::from_bytes_be(&value.to_bytes_be())
}

pub fn world() -> ScenarioWorld {
    let mut world = ScenarioWorld::new();

    world.register_contract(PRICE_SOURCE_PATH, price_source_mock::ContractBuilder);
    world.register_contract(ORACLE_PATH, oracle::ContractBuilder);
    world.register_contract(INTEREST_RATE_MODEL_PATH, interest_rate_model::ContractBuilder);
    world.register_contract(POSITION_MANAGER_PATH, position_manager::ContractBuilder);
    world.register_contract(MONEY_MARKET_PATH, money_market::ContractBuilder);

    world.account(OWNER).nonce(1);
    for account in [SUPPLIER, BORROWER] {
        world
            .account(account)
            .nonce(1)
            .balance(INITIAL_EGLD_BALANCE)
            .esdt_balance(USDC_TOKEN, INITIAL_USDC_BALANCE)
            .esdt_balance(WSOL_TOKEN, INITIAL_WSOL_BALANCE);
    }

    world
}

/// Deploys the price source, the oracle, the interest rate model and the position manager.
pub fn deploy_protocol(world: &mut ScenarioWorld) {
    world.tx().from(OWNER).raw_deploy().code(PRICE_SOURCE_PATH).new_address(PRICE_SOURCE).whitebox(price_source_mock::contract_obj, |sc| {
        sc.init();
    });

    set_price(world, Some(WSOL_ID), WSOL_UNIT, WSOL_PRICE * USDC_UNIT);
    set_price(world, None, WAD, EGLD_PRICE * USDC_UNIT);

    world.tx().from(OWNER).raw_deploy().code(ORACLE_PATH).new_address(ORACLE).whitebox(oracle::contract_obj, |sc| {
        sc.init(esdt_id(USDC_ID), USDC_DECIMALS, managed_address(&PRICE_SOURCE.to_address()));
    });

    world.tx().from(OWNER).to(ORACLE).whitebox(oracle::contract_obj, |sc| {
        sc.set_token_decimals(esdt_id(WSOL_ID), WSOL_DECIMALS);
    });

    world.tx().from(OWNER).raw_deploy().code(INTEREST_RATE_MODEL_PATH).new_address(INTEREST_RATE_MODEL).whitebox(interest_rate_model::contract_obj, |sc| {
        sc.init(BLOCKS_PER_YEAR, BigUint::from(BASE_RATE_PER_YEAR), BigUint::from(MULTIPLIER_PER_YEAR), BigUint::from(JUMP_MULTIPLIER_PER_YEAR), BigUint::from(KINK));
    });

    world.tx().from(OWNER).raw_deploy().code(POSITION_MANAGER_PATH).new_address(POSITION_MANAGER).whitebox(position_manager::contract_obj, |sc| {
        sc.init(managed_address(&ORACLE.to_address()), MAX_LIQUIDATE_RATE, HEALTH_THRESHOLD);
    });
}

/// Sets the quote of `amount_in` units of a token, EGLD if `None`, into `amount_out` units of the base token.
pub fn set_price(world: &mut ScenarioWorld, token_id: Option<&str>, amount_in: u64, amount_out: u64) {
    world.tx().from(OWNER).to(PRICE_SOURCE).whitebox(price_source_mock::contract_obj, |sc| {
        let token_in = match token_id {
            Some(token_id) => esdt_id(token_id),
            None => EgldOrEsdtTokenIdentifier::egld(),
        };
        sc.set_quote(token_in, esdt_id(USDC_ID), BigUint::from(amount_in), BigUint::from(amount_out));
    });
}

/// Deploys a money market without listing it.
pub fn deploy_market(world: &mut ScenarioWorld, market: TestSCAddress, token_id: Option<&str>, decimals: u8) {
    world.tx().from(OWNER).raw_deploy().code(MONEY_MARKET_PATH).new_address(market).whitebox(money_market::contract_obj, |sc| {
        let underlying_id = match token_id {
            Some(token_id) => esdt_id(token_id),
            None => EgldOrEsdtTokenIdentifier::egld(),
        };
        let fee_rate = FeeRate {
            borrowing_fee_rate: BORROWING_FEE_RATE,
            redeeming_fee_rate: REDEEMING_FEE_RATE,
            claiming_fee_rate: CLAIMING_FEE_RATE,
        };
        sc.init(
            underlying_id,
            decimals,
            managed_address(&POSITION_MANAGER.to_address()),
            managed_address(&INTEREST_RATE_MODEL.to_address()),
            BigUint::from(INITIAL_EXCHANGE_RATE),
            BigUint::from(RESERVE_FACTOR),
            fee_rate,
        );
    });
}

/// Lists a money market at the position manager and sets its borrow cap.
pub fn list_market(world: &mut ScenarioWorld, market: TestSCAddress, borrow_cap: u64) {
    world.tx().from(OWNER).to(POSITION_MANAGER).whitebox(position_manager::contract_obj, |sc| {
        sc.add_to_market(managed_address(&market.to_address()));

        let mut money_markets = ManagedVec::new();
        money_markets.push(managed_address(&market.to_address()));
        let mut borrow_caps = ManagedVec::new();
        borrow_caps.push(borrow_cap);
        sc.set_borrow_caps(money_markets, borrow_caps);
    });
}

pub fn associate_token(world: &mut ScenarioWorld, market: TestSCAddress, token_id: &str) {
    world.tx().from(OWNER).to(market).whitebox(money_market::contract_obj, |sc| {
        sc.token_associate(esdt_id(token_id));
    });
}

/// A protocol with a USDC, a WSOL and an EGLD money market, all listed and ready to be used.
pub fn setup() -> ScenarioWorld {
    let mut world = world();
    deploy_protocol(&mut world);

    deploy_market(&mut world, USDC_MARKET, Some(USDC_ID), USDC_DECIMALS);
    deploy_market(&mut world, WSOL_MARKET, Some(WSOL_ID), WSOL_DECIMALS);
    deploy_market(&mut world, EGLD_MARKET, None, EGLD_DECIMALS);

    for market in [USDC_MARKET, WSOL_MARKET, EGLD_MARKET] {
        list_market(&mut world, market, BORROW_CAP);
    }

    associate_token(&mut world, USDC_MARKET, USDC_ID);
    associate_token(&mut world, WSOL_MARKET, WSOL_ID);

    world
}

pub fn supply(world: &mut ScenarioWorld, from: TestAddress, market: TestSCAddress, token_id: &str, amount: u64) {
    use money_market::mint::MintModule as _;

    world.tx().from(from).to(market).payment(esdt_payment(token_id, amount)).whitebox(money_market::contract_obj, |sc| {
        sc.supply_underlying();
    });
}

pub fn borrow(world: &mut ScenarioWorld, from: TestAddress, market: TestSCAddress, amount: u64) {
    use money_market::borrow::BorrowModule as _;

    world.tx().from(from).to(market).whitebox(money_market::contract_obj, |sc| {
        sc.borrow(BigUint::from(amount));
    });
}
