//! Wrapping and checked fixed-width arithmetic.
//!
//! ## Purpose
//!
//! This module provides the two arithmetic primitives of the crate: modular
//! (wrapping) addition on fixed-width integers, and the single-step Collatz
//! map n → n/2 (even) or n → 3n+1 (odd) in both wrapping and checked
//! flavors.
//!
//! ## Design notes
//!
//! * **Generics**: Functions are generic over `PrimInt` plus the relevant
//!   `num_traits` op traits, with concrete widths fixed at the call site.
//! * **Purity**: Every function is a total, side-effect-free computation
//!   (the checked step is total over `Option`).
//! * **Truncation**: Division by 2 truncates toward zero, matching
//!   fixed-width integer division.
//!
//! ## Key concepts
//!
//! * **Wraparound**: Results exceeding the representable range are reduced
//!   modulo the range size rather than signaling an error.
//! * **Checked stepping**: The `3n+1` product is the only operation in the
//!   Collatz map that can overflow; `checked_step` surfaces it as `None`.
//!
//! ## Invariants
//!
//! * `byte_add(a, b)` equals `(a + b) mod 256` reinterpreted as signed.
//! * For inputs where `3n+1` is representable, `wrapping_step` and
//!   `checked_step` agree.
//!
//! ## Non-goals
//!
//! * This module does not iterate the Collatz map (see the algorithms layer).
//! * This module does not validate inputs (see the engine layer).

// External dependencies
use num_traits::{CheckedAdd, CheckedMul, PrimInt, WrappingAdd, WrappingMul};

// ============================================================================
// Wrapping Addition
// ============================================================================

/// Add two fixed-width integers with wraparound on overflow.
#[inline]
pub fn wrapping_add<T: WrappingAdd>(a: T, b: T) -> T {
    a.wrapping_add(&b)
}

/// Add two 8-bit signed integers with two's-complement wraparound.
///
/// The sum is reduced modulo 256 and reinterpreted as signed; overflow is
/// silent by contract.
///
/// # Examples
///
/// ```rust
/// use hailstone::prelude::*;
///
/// assert_eq!(byte_add(3, 4), 7);
/// assert_eq!(byte_add(100, 100), -56); // 200 wraps past i8::MAX
/// assert_eq!(byte_add(-100, -100), 56);
/// ```
#[inline]
pub fn byte_add(a: i8, b: i8) -> i8 {
    wrapping_add(a, b)
}

// ============================================================================
// Collatz Steps
// ============================================================================

/// Apply one Collatz step with wrapping `3n+1` arithmetic.
///
/// Mirrors unguarded fixed-width semantics: an overflowing `3n+1` wraps
/// modulo the integer width and may leave the positive range.
#[inline]
pub fn wrapping_step<T>(n: T) -> T
where
    T: PrimInt + WrappingAdd + WrappingMul,
{
    let two = T::one() + T::one();
    if n % two == T::zero() {
        n / two
    } else {
        let three = two + T::one();
        n.wrapping_mul(&three).wrapping_add(&T::one())
    }
}

/// Apply one Collatz step, returning `None` when `3n+1` overflows.
///
/// The halving branch cannot overflow, so `Some` is always returned for
/// even inputs.
#[inline]
pub fn checked_step<T>(n: T) -> Option<T>
where
    T: PrimInt + CheckedAdd + CheckedMul,
{
    let two = T::one() + T::one();
    if n % two == T::zero() {
        Some(n / two)
    } else {
        let three = two + T::one();
        n.checked_mul(&three)?.checked_add(&T::one())
    }
}
