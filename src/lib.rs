//! # Cerberus AMM
//!
//! A capability-gated constant-product liquidity pool engine.
//!
//! Each pool is a self-contained ledger object: two asset reserves, a
//! fee treasury per asset, a frozen flag, a monotonically increasing
//! schema version, and the identifier of the one manager capability
//! authorized against it. Privileged operations are gated by
//! unforgeable capability values rather than caller identity, every
//! state-mutating call carries a caller-declared minimum version, and
//! all pricing is integer-only constant-product math with basis-point
//! fees.
//!
//! # Guarantees
//!
//! - Swaps respect `reserve_a × reserve_b = k` net of fees: the
//!   committed invariant never decreases.
//! - Privileged operations require possession of the matching
//!   capability; identifiers alone authorize nothing.
//! - Operations fail deterministically once a pool is frozen or once a
//!   caller's declared minimum version is unmet, and a failed operation
//!   has no observable effect.
//! - Fee accounting is exact: `fee + net_input == amount_in` on the same
//!   integers, and the treasury is disjoint from the tradable reserves.
//!
//! # Quick Start
//!
//! ```rust
//! use cerberus_amm::auth::CapabilityRegistry;
//! use cerberus_amm::config::PoolConfig;
//! use cerberus_amm::domain::{Amount, BasisPoints, SwapDirection, Version};
//! use cerberus_amm::pool::Pool;
//!
//! // 1. Bootstrap: one registry, one admin capability, ever.
//! let mut registry = CapabilityRegistry::new();
//! let admin = registry.issue_admin_cap().expect("first issuance");
//!
//! // 2. Create a pool from an initial deposit of both assets.
//! let config = PoolConfig::new(
//!     Amount::new(1_000_000),
//!     Amount::new(2_000_000),
//!     BasisPoints::new(30), // 0.30%
//! )
//! .expect("valid config");
//! let (mut pool, manager, _created) =
//!     Pool::create(&mut registry, &admin, &config).expect("pool created");
//!
//! // 3. Swap 100_000 units of asset A for asset B.
//! let swap = pool
//!     .swap(SwapDirection::AToB, Amount::new(100_000), Version::INITIAL)
//!     .expect("swap committed");
//! assert_eq!(swap.fee, Amount::new(300));
//! assert_eq!(swap.amount_out, Amount::new(181_322));
//!
//! // 4. The manager drains the accrued fees.
//! let withdrawn = pool
//!     .withdraw_fees(&manager, Version::INITIAL)
//!     .expect("withdrawal committed");
//! assert_eq!(withdrawn.amount_a, Amount::new(300));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │     Host      │  owns registry + pools, supplies capabilities
//! └──────┬───────┘
//!        │ &mut Pool + capability + min_version
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  version guard → capability check → atomic commit
//! └──────┬───────┘
//!        │
//!   ┌────┴─────┬───────────────┐
//!   ▼          ▼               ▼
//! ┌──────┐ ┌─────────┐ ┌─────────────┐
//! │ math │ │  auth   │ │   domain    │
//! │ x·y=k│ │ caps &  │ │ Amount, bps,│
//! │ fees │ │ registry│ │ Version, …  │
//! └──────┘ └─────────┘ └─────────────┘
//! ```
//!
//! # Concurrency
//!
//! The engine is a single logical state machine per pool with no
//! internal locking: mutation goes through `&mut self`, making exclusive
//! ownership the mutual-exclusion boundary. A multi-threaded host wraps
//! each pool in its own lock; because every operation re-verifies its
//! capability internally, the check and the guarded mutation form one
//! critical section. No operation blocks, suspends, or performs I/O.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`BasisPoints`](domain::BasisPoints), [`Version`](domain::Version), identifiers |
//! | [`math`]   | Integer constant-product pricing and LP-share math |
//! | [`auth`]   | [`CapabilityRegistry`](auth::CapabilityRegistry), [`AdminCap`](auth::AdminCap), [`PoolManagerCap`](auth::PoolManagerCap) |
//! | [`config`] | Validated [`PoolConfig`](config::PoolConfig) creation parameters |
//! | [`pool`]   | The [`Pool`](pool::Pool) aggregate and its event records |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |

pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
