//! Property-based tests using `proptest` for engine invariants.
//!
//! Covers the properties every committed operation must uphold:
//!
//! 1. **Conservation** — `reserve_a × reserve_b` never decreases across
//!    a swap. The fee lives in the treasury, not the reserves, so the
//!    strict-increase claim belongs to the accounting property below.
//! 2. **Exact fee accounting** — `fee + net_input == amount_in` on the
//!    same integers; no value appears or vanishes.
//! 3. **Failure atomicity** — a rejected swap leaves every observable
//!    field untouched.
//! 4. **Capability isolation** — a manager cap never works on a foreign
//!    pool, whatever the parameters.
//! 5. **Round trips lose** — swapping A→B→A never returns more than the
//!    original input.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::auth::{AdminCap, CapabilityRegistry, PoolManagerCap};
use crate::config::PoolConfig;
use crate::domain::{Amount, BasisPoints, SwapDirection, Version};
use crate::pool::Pool;

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

fn make_pool(ra: u128, rb: u128, fee_bps: u32) -> (Pool, PoolManagerCap) {
    let (mut registry, admin) = bootstrap();
    let Ok(cfg) = PoolConfig::new(Amount::new(ra), Amount::new(rb), BasisPoints::new(fee_bps))
    else {
        panic!("valid config");
    };
    let Ok((pool, manager, _created)) = Pool::create(&mut registry, &admin, &cfg) else {
        panic!("pool created");
    };
    (pool, manager)
}

// Reserve and input ranges chosen so intermediates stay far from u128
// overflow while still exercising the flooring behaviour.
const RESERVE_RANGE: std::ops::RangeInclusive<u128> = 1_000..=1_000_000_000_000;
const INPUT_RANGE: std::ops::RangeInclusive<u128> = 1..=1_000_000_000;
const FEE_RANGE: std::ops::RangeInclusive<u32> = 0..=9_999;

proptest! {
    // -- Conservation -------------------------------------------------------

    #[test]
    fn swap_never_decreases_the_invariant(
        ra in RESERVE_RANGE,
        rb in RESERVE_RANGE,
        input in INPUT_RANGE,
        fee_bps in FEE_RANGE,
    ) {
        let (mut pool, _manager) = make_pool(ra, rb, fee_bps);
        let k_before = ra * rb;
        if pool.swap(SwapDirection::AToB, Amount::new(input), Version::INITIAL).is_ok() {
            let k_after = pool.reserve_a().get() * pool.reserve_b().get();
            prop_assert!(k_after >= k_before);
        }
    }

    // -- Exact fee accounting -----------------------------------------------

    #[test]
    fn every_input_unit_is_accounted(
        ra in RESERVE_RANGE,
        rb in RESERVE_RANGE,
        input in INPUT_RANGE,
        fee_bps in FEE_RANGE,
    ) {
        let (mut pool, _manager) = make_pool(ra, rb, fee_bps);
        if let Ok(swap) = pool.swap(SwapDirection::AToB, Amount::new(input), Version::INITIAL) {
            let reserve_delta = pool.reserve_a().get() - ra;
            prop_assert_eq!(swap.fee.get() + reserve_delta, input);
            prop_assert_eq!(pool.fee_treasury_a().get(), swap.fee.get());
            prop_assert_eq!(rb - pool.reserve_b().get(), swap.amount_out.get());
        }
    }

    // -- Failure atomicity --------------------------------------------------

    #[test]
    fn rejected_swap_changes_nothing(
        ra in 1_000_000u128..=1_000_000_000,
        input in INPUT_RANGE,
    ) {
        // Shallow opposite reserve forces frequent zero-output rejections.
        let (mut pool, _manager) = make_pool(ra, 10, 30);
        let before = (
            pool.reserve_a(),
            pool.reserve_b(),
            pool.fee_treasury_a(),
            pool.fee_treasury_b(),
        );
        if pool.swap(SwapDirection::AToB, Amount::new(input), Version::INITIAL).is_err() {
            let after = (
                pool.reserve_a(),
                pool.reserve_b(),
                pool.fee_treasury_a(),
                pool.fee_treasury_b(),
            );
            prop_assert_eq!(before, after);
        }
    }

    // -- Capability isolation -----------------------------------------------

    #[test]
    fn foreign_manager_cap_always_rejected(
        ra in RESERVE_RANGE,
        rb in RESERVE_RANGE,
        new_fee in FEE_RANGE,
    ) {
        let (mut registry, admin) = bootstrap();
        let Ok(cfg) = PoolConfig::new(Amount::new(ra), Amount::new(rb), BasisPoints::new(30))
        else {
            panic!("valid config");
        };
        let Ok((mut pool_x, _mx, _cx)) = Pool::create(&mut registry, &admin, &cfg) else {
            panic!("pool created");
        };
        let Ok((_pool_y, manager_y, _cy)) = Pool::create(&mut registry, &admin, &cfg) else {
            panic!("pool created");
        };
        prop_assert!(pool_x
            .update_fee(&manager_y, BasisPoints::new(new_fee), Version::INITIAL)
            .is_err());
        prop_assert!(pool_x.withdraw_fees(&manager_y, Version::INITIAL).is_err());
    }

    // -- Round trips --------------------------------------------------------

    #[test]
    fn round_trip_never_profits(
        ra in 1_000_000u128..=1_000_000_000_000,
        rb in 1_000_000u128..=1_000_000_000_000,
        input in 1_000u128..=100_000,
    ) {
        let (mut pool, _manager) = make_pool(ra, rb, 30);
        let Ok(forward) =
            pool.swap(SwapDirection::AToB, Amount::new(input), Version::INITIAL)
        else {
            return Ok(());
        };
        let Ok(back) =
            pool.swap(SwapDirection::BToA, forward.amount_out, Version::INITIAL)
        else {
            return Ok(());
        };
        prop_assert!(back.amount_out.get() <= input);
    }
}
