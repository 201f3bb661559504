//! Collatz stepping policies and recursion.
//!
//! ## Purpose
//!
//! This module defines how a trajectory advances by one Collatz step under
//! a configurable overflow policy, and provides the reference recursive
//! step counter with unguarded fixed-width semantics.
//!
//! ## Design notes
//!
//! * **Policy-driven**: `OverflowPolicy` selects between checked and
//!   wrapping `3n+1` arithmetic; the step functions themselves live in the
//!   math layer.
//! * **Guarded advancing**: `advance` converts arithmetic edge cases into
//!   typed errors so the engine's loop stays total.
//! * **Reference recursion**: `steps_recursive` preserves the classic
//!   recursive shape, including its unbounded call depth.
//!
//! ## Key concepts
//!
//! * **Checked policy**: an overflowing `3n+1` is an error, never a wrap.
//! * **Wrapping policy**: `3n+1` wraps modulo the integer width; a wrapped
//!   value below 1 can never reach 1 and is reported as divergence.
//!
//! ## Invariants
//!
//! * `advance` returns a value `>= 1` whenever it returns `Ok`.
//! * Under the `Checked` policy, `advance` never wraps.
//!
//! ## Non-goals
//!
//! * This module does not count steps or enforce step limits (engine layer).
//! * This module does not validate starting values (engine layer).

// External dependencies
use num_traits::{CheckedAdd, CheckedMul, PrimInt, WrappingAdd, WrappingMul};

// Internal dependencies
use crate::math::wrapping::{checked_step, wrapping_step};
use crate::primitives::errors::HailstoneError;

// ============================================================================
// Overflow Policy
// ============================================================================

/// Arithmetic policy for the `3n+1` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Reject an overflowing `3n+1` with [`HailstoneError::ValueOverflow`].
    ///
    /// This is the default and recommended policy.
    #[default]
    Checked,

    /// Wrap `3n+1` modulo the integer width, matching unguarded fixed-width
    /// arithmetic. Divergence of the wrapped trajectory is still detected.
    Wrapping,
}

impl OverflowPolicy {
    /// Get the name of the overflow policy.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            OverflowPolicy::Checked => "Checked",
            OverflowPolicy::Wrapping => "Wrapping",
        }
    }
}

// ============================================================================
// Guarded Stepping
// ============================================================================

/// Advance a trajectory by one Collatz step under the given policy.
///
/// The caller guarantees `value >= 1`; the engine validates starts before
/// looping. On success the returned value is again `>= 1`.
pub fn advance<T>(policy: OverflowPolicy, value: T) -> Result<T, HailstoneError>
where
    T: PrimInt + CheckedAdd + CheckedMul + WrappingAdd + WrappingMul,
{
    match policy {
        OverflowPolicy::Checked => {
            checked_step(value).ok_or_else(|| HailstoneError::ValueOverflow {
                value: value.to_i64().unwrap_or(i64::MAX),
            })
        }
        OverflowPolicy::Wrapping => {
            let next = wrapping_step(value);
            if next < T::one() {
                return Err(HailstoneError::TrajectoryDiverged {
                    value: next.to_i64().unwrap_or(i64::MIN),
                });
            }
            Ok(next)
        }
    }
}

// ============================================================================
// Reference Recursion
// ============================================================================

/// Count Collatz steps by unbounded recursion with wrapping `3n+1`.
///
/// This is the reference rendition of the step counter: call depth grows
/// linearly with the step count, `3n+1` wraps on overflow, and `n <= 0` is
/// outside the contract (the recursion does not terminate for such inputs).
///
/// # Preconditions
///
/// * `n >= 1`
/// * The trajectory of `n` stays within the `i32` range.
///
/// Prefer the guarded engine via the public API; this function exists to
/// pin the baseline semantics and serves as the oracle in tests.
pub fn steps_recursive(n: i32) -> u32 {
    if n == 1 {
        return 0;
    }
    if n % 2 == 0 {
        1 + steps_recursive(n / 2)
    } else {
        1 + steps_recursive(n.wrapping_mul(3).wrapping_add(1))
    }
}
