//! Unified error types for the pool engine.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type. Every failure is a local, synchronous, typed outcome of
//! invalid input or invalid authorization — the engine never panics and
//! never retries internally, and a rejected operation leaves pool state
//! exactly as it found it.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Every way a pool engine operation can fail.
///
/// Arithmetic variants carry a static context string naming the
/// computation that overflowed, in the style of checked domain math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Pool creation requires strictly positive deposits of both assets.
    #[error("pool creation requires non-zero initial deposits of both assets")]
    ZeroInitialLiquidity,

    /// A fee rate outside the valid basis-point range `0..=10_000`.
    #[error("fee must be between 0 and 10,000 basis points")]
    InvalidFeeBps,

    /// A swap was submitted with a zero input amount.
    #[error("swap input amount must be non-zero")]
    ZeroInput,

    /// The pool is frozen; swaps and liquidity changes are rejected.
    #[error("pool is frozen")]
    PoolFrozen,

    /// The pool cannot satisfy the requested trade or withdrawal without
    /// draining a reserve to zero.
    #[error("insufficient liquidity to satisfy the operation")]
    InsufficientLiquidity,

    /// A liquidity operation was given inconsistent or degenerate amounts.
    #[error("invalid liquidity operation: {0}")]
    InvalidLiquidity(&'static str),

    /// An intermediate computation exceeded the `u128` range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// Division by zero. Unreachable under pool invariants but checked
    /// defensively at every division site.
    #[error("division by zero")]
    DivisionByZero,

    /// A capability was presented against a pool it is not bound to.
    #[error("capability is bound to a different pool")]
    CapabilityMismatch,

    /// A capability's identifier is not the one currently authoritative
    /// for its pool (e.g. it was superseded by rotation).
    #[error("capability is not the authoritative one for this pool")]
    InvalidCapability,

    /// A one-time issuance was attempted a second time.
    #[error("capability already issued")]
    AlreadyInitialized,

    /// The caller declared a minimum version the pool does not meet.
    #[error("pool version is below the caller's required minimum")]
    UnsupportedVersion,

    /// A migration target that does not strictly increase the version.
    #[error("migration target version must exceed the current version")]
    NonMonotonicVersion,
}
