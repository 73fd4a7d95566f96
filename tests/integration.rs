//! Integration tests exercising the full engine through the public API:
//! bootstrap, pool lifecycle, trading, fee administration, freezing,
//! capability rotation, and version migration.

#![allow(clippy::panic)]

use cerberus_amm::auth::{AdminCap, CapabilityRegistry, PoolManagerCap};
use cerberus_amm::config::PoolConfig;
use cerberus_amm::domain::{Amount, BasisPoints, Liquidity, SwapDirection, Version};
use cerberus_amm::error::PoolError;
use cerberus_amm::pool::{Pool, PoolEvent};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn bootstrap() -> (CapabilityRegistry, AdminCap) {
    let mut registry = CapabilityRegistry::new();
    let Ok(admin) = registry.issue_admin_cap() else {
        panic!("bootstrap issuance succeeds");
    };
    (registry, admin)
}

fn reference_config() -> PoolConfig {
    let Ok(cfg) = PoolConfig::new(
        Amount::new(1_000_000),
        Amount::new(2_000_000),
        BasisPoints::new(30),
    ) else {
        panic!("valid config");
    };
    cfg
}

fn create_pool(
    registry: &mut CapabilityRegistry,
    admin: &AdminCap,
) -> (Pool, PoolManagerCap) {
    let Ok((pool, manager, _created)) = Pool::create(registry, admin, &reference_config())
    else {
        panic!("pool created");
    };
    (pool, manager)
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[test]
fn admin_cap_is_a_singleton() {
    let (mut registry, _admin) = bootstrap();
    assert_eq!(
        registry.issue_admin_cap().map(|c| c.id()),
        Err(PoolError::AlreadyInitialized)
    );
}

// ---------------------------------------------------------------------------
// Full trading lifecycle
// ---------------------------------------------------------------------------

#[test]
fn lifecycle_create_trade_withdraw() {
    let (mut registry, admin) = bootstrap();
    let (mut pool, manager) = create_pool(&mut registry, &admin);

    // The reference scenario: 100_000 A in at 30 bps.
    let Ok(swap) = pool.swap(SwapDirection::AToB, Amount::new(100_000), Version::INITIAL)
    else {
        panic!("swap succeeds");
    };
    assert_eq!(swap.fee, Amount::new(300));
    assert_eq!(swap.amount_out, Amount::new(181_322));

    // A second trade in the opposite direction accrues fees in B.
    let Ok(back) = pool.swap(SwapDirection::BToA, Amount::new(500_000), Version::INITIAL)
    else {
        panic!("reverse swap succeeds");
    };
    assert_eq!(back.fee, Amount::new(1_500));

    // The manager drains both treasuries in one call.
    let Ok(withdrawn) = pool.withdraw_fees(&manager, Version::INITIAL) else {
        panic!("withdrawal succeeds");
    };
    assert_eq!(withdrawn.amount_a, Amount::new(300));
    assert_eq!(withdrawn.amount_b, Amount::new(1_500));

    // A second withdrawal finds nothing and still succeeds.
    let Ok(empty) = pool.withdraw_fees(&manager, Version::INITIAL) else {
        panic!("empty withdrawal succeeds");
    };
    assert_eq!(empty.amount_a, Amount::ZERO);
    assert_eq!(empty.amount_b, Amount::ZERO);
}

#[test]
fn lifecycle_liquidity_round_trip() {
    let (mut registry, admin) = bootstrap();
    let (mut pool, _manager) = create_pool(&mut registry, &admin);

    let Ok(added) = pool.add_liquidity(
        Amount::new(500_000),
        Amount::new(1_000_000),
        Version::INITIAL,
    ) else {
        panic!("deposit succeeds");
    };
    assert!(added.minted.get() > 0);

    let Ok(removed) = pool.remove_liquidity(added.minted, Version::INITIAL) else {
        panic!("withdrawal succeeds");
    };
    // Flooring means the round trip never returns more than went in.
    assert!(removed.amount_a <= Amount::new(500_000));
    assert!(removed.amount_b <= Amount::new(1_000_000));
}

// ---------------------------------------------------------------------------
// Capability isolation across pools
// ---------------------------------------------------------------------------

#[test]
fn manager_caps_do_not_cross_pools() {
    let (mut registry, admin) = bootstrap();
    let (mut pool_x, manager_x) = create_pool(&mut registry, &admin);
    let (mut pool_y, manager_y) = create_pool(&mut registry, &admin);

    assert_eq!(
        pool_x
            .update_fee(&manager_y, BasisPoints::new(50), Version::INITIAL)
            .map(|e| e.new_fee_bps),
        Err(PoolError::CapabilityMismatch)
    );
    assert_eq!(
        pool_y.withdraw_fees(&manager_x, Version::INITIAL).map(|e| e.amount_a),
        Err(PoolError::CapabilityMismatch)
    );

    // Each cap still works on its own pool.
    assert!(pool_x
        .update_fee(&manager_x, BasisPoints::new(50), Version::INITIAL)
        .is_ok());
    assert!(pool_y
        .update_fee(&manager_y, BasisPoints::new(50), Version::INITIAL)
        .is_ok());
}

#[test]
fn rotation_invalidates_the_old_cap_only_for_its_pool() {
    let (mut registry, admin) = bootstrap();
    let (mut pool_x, old_x) = create_pool(&mut registry, &admin);
    let (mut pool_y, manager_y) = create_pool(&mut registry, &admin);

    let Ok((new_x, _rotated)) = pool_x.rotate_manager_cap(&mut registry, &admin, Version::INITIAL)
    else {
        panic!("rotation succeeds");
    };

    assert_eq!(
        pool_x.withdraw_fees(&old_x, Version::INITIAL).map(|e| e.amount_a),
        Err(PoolError::InvalidCapability)
    );
    assert!(pool_x.withdraw_fees(&new_x, Version::INITIAL).is_ok());
    // Pool Y's manager is untouched by X's rotation.
    assert!(pool_y.withdraw_fees(&manager_y, Version::INITIAL).is_ok());
}

// ---------------------------------------------------------------------------
// Freeze lifecycle
// ---------------------------------------------------------------------------

#[test]
fn freeze_blocks_trading_but_not_administration() {
    let (mut registry, admin) = bootstrap();
    let (mut pool, manager) = create_pool(&mut registry, &admin);

    let Ok(_frozen) = pool.freeze(&admin, Version::INITIAL) else {
        panic!("freeze succeeds");
    };

    assert_eq!(
        pool.swap(SwapDirection::AToB, Amount::new(1_000), Version::INITIAL)
            .map(|e| e.amount_out),
        Err(PoolError::PoolFrozen)
    );

    // Fee administration and migration remain available while frozen.
    assert!(pool
        .update_fee(&manager, BasisPoints::new(10), Version::INITIAL)
        .is_ok());
    assert!(pool.withdraw_fees(&manager, Version::INITIAL).is_ok());
    assert!(pool.migrate(&admin, Version::new(2)).is_ok());

    let Ok(_thawed) = pool.unfreeze(&admin, Version::INITIAL) else {
        panic!("unfreeze succeeds");
    };
    assert!(pool
        .swap(SwapDirection::AToB, Amount::new(1_000), Version::INITIAL)
        .is_ok());
}

#[test]
fn double_freeze_equals_single_freeze() {
    let (mut registry, admin) = bootstrap();
    let (mut pool, _manager) = create_pool(&mut registry, &admin);

    let Ok(first) = pool.freeze(&admin, Version::INITIAL) else {
        panic!("freeze succeeds");
    };
    let Ok(second) = pool.freeze(&admin, Version::INITIAL) else {
        panic!("second freeze is a no-op success");
    };
    assert_eq!(first, second);
    assert!(pool.is_frozen());
}

// ---------------------------------------------------------------------------
// Version migration flow
// ---------------------------------------------------------------------------

#[test]
fn breaking_callers_gate_on_min_version() {
    let (mut registry, admin) = bootstrap();
    let (mut pool, _manager) = create_pool(&mut registry, &admin);

    // A caller built against schema v2 is rejected pre-migration...
    assert_eq!(
        pool.swap(SwapDirection::AToB, Amount::new(1_000), Version::new(2))
            .map(|e| e.amount_out),
        Err(PoolError::UnsupportedVersion)
    );

    let Ok(migrated) = pool.migrate(&admin, Version::new(2)) else {
        panic!("migration succeeds");
    };
    assert_eq!(migrated.old_version, Version::INITIAL);
    assert_eq!(migrated.new_version, Version::new(2));

    // ...and accepted post-migration, while stale callers keep working.
    assert!(pool
        .swap(SwapDirection::AToB, Amount::new(1_000), Version::new(2))
        .is_ok());
    assert!(pool
        .swap(SwapDirection::AToB, Amount::new(1_000), Version::INITIAL)
        .is_ok());
}

#[test]
fn migration_never_goes_backwards() {
    let (mut registry, admin) = bootstrap();
    let (mut pool, _manager) = create_pool(&mut registry, &admin);

    let Ok(_m) = pool.migrate(&admin, Version::new(5)) else {
        panic!("migration succeeds");
    };
    for target in [1u64, 4, 5] {
        assert_eq!(
            pool.migrate(&admin, Version::new(target)).map(|e| e.new_version),
            Err(PoolError::NonMonotonicVersion)
        );
    }
    assert_eq!(pool.version(), Version::new(5));
}

// ---------------------------------------------------------------------------
// Event stream
// ---------------------------------------------------------------------------

#[test]
fn records_collect_into_a_uniform_stream() {
    let (mut registry, admin) = bootstrap();
    let Ok((mut pool, manager, created)) =
        Pool::create(&mut registry, &admin, &reference_config())
    else {
        panic!("pool created");
    };

    let mut stream: Vec<PoolEvent> = vec![created.into()];
    let Ok(swap) = pool.swap(SwapDirection::AToB, Amount::new(100_000), Version::INITIAL)
    else {
        panic!("swap succeeds");
    };
    stream.push(swap.into());
    let Ok(withdrawn) = pool.withdraw_fees(&manager, Version::INITIAL) else {
        panic!("withdrawal succeeds");
    };
    stream.push(withdrawn.into());

    assert_eq!(stream.len(), 3);
    assert!(matches!(stream[0], PoolEvent::Created(_)));
    assert!(matches!(stream[1], PoolEvent::Swap(_)));
    assert!(matches!(stream[2], PoolEvent::FeesWithdrawn(_)));
}

// ---------------------------------------------------------------------------
// Independence of pool instances
// ---------------------------------------------------------------------------

#[test]
fn pools_do_not_share_state() {
    let (mut registry, admin) = bootstrap();
    let (mut pool_x, _mx) = create_pool(&mut registry, &admin);
    let (pool_y, _my) = create_pool(&mut registry, &admin);

    let Ok(_f) = pool_x.freeze(&admin, Version::INITIAL) else {
        panic!("freeze succeeds");
    };
    let Ok(_swap) = pool_x
        .unfreeze(&admin, Version::INITIAL)
        .and_then(|_| pool_x.swap(SwapDirection::AToB, Amount::new(10_000), Version::INITIAL))
    else {
        panic!("swap succeeds after thaw");
    };

    // Pool Y never moved.
    assert_eq!(pool_y.reserve_a(), Amount::new(1_000_000));
    assert_eq!(pool_y.reserve_b(), Amount::new(2_000_000));
    assert!(!pool_y.is_frozen());
    assert_eq!(pool_y.total_shares(), Liquidity::new(1_414_213));
}
