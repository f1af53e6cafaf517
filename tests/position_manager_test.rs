mod common;

use common::*;
use multiversx_sc_scenario::imports::*;
use position_manager::{
    errors::*, governance::GovernanceModule as _, guardian::GuardianModule as _, market::MarketModule as _, policies::PolicyModule as _, risk_profile::RiskProfileModule as _, shared::SharedModule as _,
    storage::StorageModule as _,
};

fn setup_with_position() -> ScenarioWorld {
    let mut world = setup();
    supply(&mut world, SUPPLIER, USDC_MARKET, USDC_ID, 1_000 * USDC_UNIT);
    supply(&mut world, BORROWER, WSOL_MARKET, WSOL_ID, 10 * WSOL_UNIT);
    world
}

#[test]
fn markets_are_listed_once() {
    let mut world = setup();

    world.query().to(POSITION_MANAGER).whitebox(position_manager::contract_obj, |sc| {
        assert!(sc.check_listed_token(&managed_address(&USDC_MARKET.to_address())));
        assert!(!sc.check_listed_token(&managed_address(&ORACLE.to_address())));
        assert_eq!(sc.listed_pools().len(), 3);
        assert_eq!(sc.market_underlying(&managed_address(&WSOL_MARKET.to_address())).get(), esdt_id(WSOL_ID));
        assert_eq!(sc.market_unit(&managed_address(&WSOL_MARKET.to_address())).get(), BigUint::from(WSOL_UNIT));
        assert_eq!(sc.borrow_caps(&managed_address(&EGLD_MARKET.to_address())).get(), BORROW_CAP);
    });

    world.tx().from(OWNER).to(POSITION_MANAGER).returns(ExpectError(4, ERROR_ALREADY_LISTED)).whitebox(position_manager::contract_obj, |sc| {
        sc.add_to_market(managed_address(&USDC_MARKET.to_address()));
    });
}

#[test]
fn add_to_market_requires_owner() {
    let mut world = world();
    deploy_protocol(&mut world);
    deploy_market(&mut world, USDC_MARKET, Some(USDC_ID), USDC_DECIMALS);

    world.tx().from(SUPPLIER).to(POSITION_MANAGER).returns(ExpectError(4, ERROR_NOT_OWNER)).whitebox(position_manager::contract_obj, |sc| {
        sc.add_to_market(managed_address(&USDC_MARKET.to_address()));
    });
}

#[test]
fn set_borrow_caps_validation() {
    let mut world = setup();

    world.tx().from(OWNER).to(POSITION_MANAGER).returns(ExpectError(4, ERROR_ARRAY_LENGTH_MISMATCH)).whitebox(position_manager::contract_obj, |sc| {
        let mut money_markets = ManagedVec::new();
        money_markets.push(managed_address(&USDC_MARKET.to_address()));
        money_markets.push(managed_address(&WSOL_MARKET.to_address()));
        let mut borrow_caps = ManagedVec::new();
        borrow_caps.push(5_000u64);
        sc.set_borrow_caps(money_markets, borrow_caps);
    });

    world.tx().from(OWNER).to(POSITION_MANAGER).returns(ExpectError(4, ERROR_INVALID_BORROW_CAP)).whitebox(position_manager::contract_obj, |sc| {
        let mut money_markets = ManagedVec::new();
        money_markets.push(managed_address(&USDC_MARKET.to_address()));
        let mut borrow_caps = ManagedVec::new();
        borrow_caps.push(10_001u64);
        sc.set_borrow_caps(money_markets, borrow_caps);
    });

    world.tx().from(OWNER).to(POSITION_MANAGER).returns(ExpectError(4, ERROR_NOT_LISTED)).whitebox(position_manager::contract_obj, |sc| {
        let mut money_markets = ManagedVec::new();
        money_markets.push(managed_address(&ORACLE.to_address()));
        let mut borrow_caps = ManagedVec::new();
        borrow_caps.push(5_000u64);
        sc.set_borrow_caps(money_markets, borrow_caps);
    });

    world.tx().from(SUPPLIER).to(POSITION_MANAGER).returns(ExpectError(4, ERROR_NOT_OWNER)).whitebox(position_manager::contract_obj, |sc| {
        sc.set_borrow_caps(ManagedVec::new(), ManagedVec::new());
    });
}

#[test]
fn borrowable_amount_in_each_market() {
    let mut world = setup_with_position();

    // 10 WSOL at 100, weighted by a 70% borrow cap, is worth 700 USDC
    world.tx().from(BORROWER).to(POSITION_MANAGER).whitebox(position_manager::contract_obj, |sc| {
        let borrower = managed_address(&BORROWER.to_address());
        assert_eq!(sc.get_borrowable_amount(&borrower, &managed_address(&USDC_MARKET.to_address())), BigUint::from(700 * USDC_UNIT));
        assert_eq!(sc.get_borrowable_amount(&borrower, &managed_address(&WSOL_MARKET.to_address())), BigUint::from(7 * WSOL_UNIT));
        assert_eq!(sc.get_borrowable_amount(&borrower, &managed_address(&EGLD_MARKET.to_address())), BigUint::from(35u64) * BigUint::from(WAD / 2));
    });

    borrow(&mut world, BORROWER, USDC_MARKET, 300 * USDC_UNIT);

    world.tx().from(BORROWER).to(POSITION_MANAGER).whitebox(position_manager::contract_obj, |sc| {
        let borrower = managed_address(&BORROWER.to_address());
        assert_eq!(sc.get_borrowable_amount(&borrower, &managed_address(&USDC_MARKET.to_address())), BigUint::from(400 * USDC_UNIT));
    });
}

#[test]
fn borrowable_amount_requires_listed_market() {
    let mut world = setup_with_position();

    world.tx().from(BORROWER).to(POSITION_MANAGER).returns(ExpectError(4, ERROR_NOT_LISTED)).whitebox(position_manager::contract_obj, |sc| {
        sc.get_borrowable_amount(&managed_address(&BORROWER.to_address()), &managed_address(&ORACLE.to_address()));
    });
}

#[test]
fn borrowing_enters_the_market() {
    let mut world = setup_with_position();

    world.query().to(POSITION_MANAGER).whitebox(position_manager::contract_obj, |sc| {
        let borrower = managed_address(&BORROWER.to_address());
        assert!(!sc.check_membership(&borrower, &managed_address(&USDC_MARKET.to_address())));
        assert!(!sc.check_membership(&borrower, &managed_address(&WSOL_MARKET.to_address())));
    });

    borrow(&mut world, BORROWER, USDC_MARKET, 100 * USDC_UNIT);

    world.query().to(POSITION_MANAGER).whitebox(position_manager::contract_obj, |sc| {
        let borrower = managed_address(&BORROWER.to_address());
        assert!(sc.check_membership(&borrower, &managed_address(&USDC_MARKET.to_address())));
        assert!(!sc.check_membership(&borrower, &managed_address(&WSOL_MARKET.to_address())));
    });
}

#[test]
fn only_listed_markets_enter_accounts() {
    let mut world = setup();

    world.tx().from(SUPPLIER).to(POSITION_MANAGER).returns(ExpectError(4, ERROR_NOT_LISTED)).whitebox(position_manager::contract_obj, |sc| {
        sc.enter_market(managed_address(&SUPPLIER.to_address()));
    });

    world.tx().from(SUPPLIER).to(POSITION_MANAGER).returns(ExpectError(4, ERROR_NOT_LISTED)).whitebox(position_manager::contract_obj, |sc| {
        sc.redeem_allowed(&managed_address(&SUPPLIER.to_address()), &BigUint::from(1u64));
    });
}

#[test]
fn borrow_guardian() {
    let mut world = setup();

    world.tx().from(OWNER).to(POSITION_MANAGER).whitebox(position_manager::contract_obj, |sc| {
        let usdc_market = managed_address(&USDC_MARKET.to_address());
        assert!(!sc.borrow_guardian_paused(&usdc_market));

        sc.set_borrow_paused(usdc_market.clone(), true);
        assert!(sc.borrow_guardian_paused(&usdc_market));

        sc.set_borrow_paused(usdc_market.clone(), false);
        assert!(!sc.borrow_guardian_paused(&usdc_market));
    });

    world.tx().from(SUPPLIER).to(POSITION_MANAGER).returns(ExpectError(4, ERROR_NOT_OWNER)).whitebox(position_manager::contract_obj, |sc| {
        sc.set_borrow_paused(managed_address(&USDC_MARKET.to_address()), true);
    });
}

#[test]
fn risk_parameters() {
    let mut world = setup();

    world.tx().from(OWNER).to(POSITION_MANAGER).whitebox(position_manager::contract_obj, |sc| {
        assert_eq!(sc.get_max_liquidate_rate(), MAX_LIQUIDATE_RATE);
        assert_eq!(sc.get_healthcare_threshold(), HEALTH_THRESHOLD);

        sc.set_max_liquidate_rate(4_000);
        sc.set_healthcare_threshold(9_000);
        assert_eq!(sc.get_max_liquidate_rate(), 4_000);
        assert_eq!(sc.get_healthcare_threshold(), 9_000);
    });

    world.tx().from(OWNER).to(POSITION_MANAGER).returns(ExpectError(4, ERROR_INVALID_RISK_PARAMETER)).whitebox(position_manager::contract_obj, |sc| {
        sc.set_max_liquidate_rate(10_001);
    });

    world.tx().from(OWNER).to(POSITION_MANAGER).returns(ExpectError(4, ERROR_INVALID_RISK_PARAMETER)).whitebox(position_manager::contract_obj, |sc| {
        sc.set_healthcare_threshold(10_001);
    });

    world.tx().from(SUPPLIER).to(POSITION_MANAGER).returns(ExpectError(4, ERROR_NOT_OWNER)).whitebox(position_manager::contract_obj, |sc| {
        sc.set_max_liquidate_rate(1_000);
    });
}

#[test]
fn account_becomes_liquidatable_when_collateral_drops() {
    let mut world = setup_with_position();
    borrow(&mut world, BORROWER, USDC_MARKET, 600 * USDC_UNIT);

    world.tx().from(BORROWER).to(POSITION_MANAGER).whitebox(position_manager::contract_obj, |sc| {
        let borrower = managed_address(&BORROWER.to_address());
        let (collateral, debt) = sc.get_account_health(&borrower).into_tuple();
        assert_eq!(collateral, BigUint::from(1_000u64) * WAD);
        assert_eq!(debt, BigUint::from(600u64) * WAD);
        assert!(!sc.is_liquidatable(&borrower));
    });

    // debt over collateral goes from 60% to 96.7%, above the 95% threshold
    set_price(&mut world, Some(WSOL_ID), WSOL_UNIT, 62 * USDC_UNIT);

    world.tx().from(BORROWER).to(POSITION_MANAGER).whitebox(position_manager::contract_obj, |sc| {
        let borrower = managed_address(&BORROWER.to_address());
        let (collateral, _) = sc.get_account_health(&borrower).into_tuple();
        assert_eq!(collateral, BigUint::from(620u64) * WAD);
        assert!(sc.is_liquidatable(&borrower));
        assert_eq!(sc.get_borrowable_amount(&borrower, &managed_address(&USDC_MARKET.to_address())), BigUint::zero());
    });
}

#[test]
fn accounts_without_debt_are_never_liquidatable() {
    let mut world = setup_with_position();

    world.tx().from(OWNER).to(POSITION_MANAGER).whitebox(position_manager::contract_obj, |sc| {
        sc.set_healthcare_threshold(0);
        assert!(!sc.is_liquidatable(&managed_address(&BORROWER.to_address())));
    });
}
