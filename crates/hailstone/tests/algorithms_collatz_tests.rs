#![cfg(feature = "dev")]
//! Tests for Collatz stepping policies and the reference recursion.
//!
//! These tests verify the algorithms layer:
//! - Policy metadata and defaults
//! - Guarded advancing under both overflow policies
//! - The reference recursive counter and its agreement with the engine
//!
//! ## Test Organization
//!
//! 1. **Policy Metadata** - Names and default selection
//! 2. **Guarded Advancing** - Checked and wrapping edge behavior
//! 3. **Reference Recursion** - Known values and oracle agreement

use hailstone::internals::algorithms::collatz::{advance, steps_recursive, OverflowPolicy};
use hailstone::internals::engine::executor::CollatzExecutor;
use hailstone::internals::primitives::errors::HailstoneError;

// ============================================================================
// Policy Metadata Tests
// ============================================================================

/// Test policy names and the default policy.
#[test]
fn test_policy_metadata() {
    assert_eq!(OverflowPolicy::Checked.name(), "Checked");
    assert_eq!(OverflowPolicy::Wrapping.name(), "Wrapping");
    assert_eq!(OverflowPolicy::default(), OverflowPolicy::Checked);
}

// ============================================================================
// Guarded Advancing Tests
// ============================================================================

/// Test that both policies take identical even/odd branches in range.
#[test]
fn test_advance_in_range() {
    for policy in [OverflowPolicy::Checked, OverflowPolicy::Wrapping] {
        assert_eq!(advance(policy, 6i32), Ok(3));
        assert_eq!(advance(policy, 3i32), Ok(10));
        assert_eq!(advance(policy, 16i32), Ok(8));
    }
}

/// Test the checked policy rejects an overflowing 3n+1 with context.
#[test]
fn test_advance_checked_overflow() {
    assert_eq!(
        advance(OverflowPolicy::Checked, 715_827_883i32),
        Err(HailstoneError::ValueOverflow {
            value: 715_827_883
        })
    );
}

/// Test the wrapping policy reports the wrapped value on divergence.
#[test]
fn test_advance_wrapping_divergence() {
    assert_eq!(
        advance(OverflowPolicy::Wrapping, 715_827_883i32),
        Err(HailstoneError::TrajectoryDiverged {
            value: -2_147_483_646
        })
    );
}

/// Test that advancing from 1 stays positive under both policies.
///
/// 1 is odd, so one step yields 4; the loop in the engine never advances
/// from 1, but the algorithm itself must remain well-defined there.
#[test]
fn test_advance_from_one() {
    assert_eq!(advance(OverflowPolicy::Checked, 1i32), Ok(4));
    assert_eq!(advance(OverflowPolicy::Wrapping, 1i32), Ok(4));
}

// ============================================================================
// Reference Recursion Tests
// ============================================================================

/// Test known values of the reference recursive counter.
#[test]
fn test_steps_recursive_known_values() {
    assert_eq!(steps_recursive(1), 0);
    assert_eq!(steps_recursive(2), 1);
    assert_eq!(steps_recursive(6), 8);
    assert_eq!(steps_recursive(7), 16);
    assert_eq!(steps_recursive(27), 111);
    assert_eq!(steps_recursive(1024), 10);
}

/// Test the even/odd recurrences directly on the recursion.
#[test]
fn test_steps_recursive_recurrences() {
    for n in 2..=500i32 {
        if n % 2 == 0 {
            assert_eq!(steps_recursive(n), 1 + steps_recursive(n / 2));
        } else {
            assert_eq!(steps_recursive(n), 1 + steps_recursive(3 * n + 1));
        }
    }
}

/// Test that the recursion agrees with the guarded iterative engine.
///
/// The recursion is the behavioral oracle; the engine must match it on
/// every in-range input.
#[test]
fn test_steps_recursive_matches_engine() {
    let executor = CollatzExecutor::default();

    for n in 1..=2000i32 {
        assert_eq!(
            executor.count(n),
            Ok(steps_recursive(n)),
            "engine diverges from recursion at n={n}"
        );
    }
}
