#![cfg(feature = "dev")]
//! Tests for the validation and execution engine.
//!
//! These tests verify the engine layer:
//! - Start and parameter validation
//! - The guarded counting loop, including limits and trivial starts
//!
//! ## Test Organization
//!
//! 1. **Start Validation** - Positivity across widths
//! 2. **Parameter Validation** - Step limits and duplicate detection
//! 3. **Executor** - Counting, limits, and guard interplay

use hailstone::internals::algorithms::collatz::OverflowPolicy;
use hailstone::internals::engine::executor::CollatzExecutor;
use hailstone::internals::engine::validator::Validator;
use hailstone::internals::primitives::errors::HailstoneError;

// ============================================================================
// Start Validation Tests
// ============================================================================

/// Test that positive starts validate across integer widths.
#[test]
fn test_validate_start_accepts_positive() {
    assert_eq!(Validator::validate_start(1i32), Ok(()));
    assert_eq!(Validator::validate_start(27i64), Ok(()));
    assert_eq!(Validator::validate_start(1u8), Ok(()));
    assert_eq!(Validator::validate_start(u64::MAX), Ok(()));
}

/// Test that non-positive starts are rejected with context.
#[test]
fn test_validate_start_rejects_non_positive() {
    assert_eq!(
        Validator::validate_start(0i32),
        Err(HailstoneError::NonPositiveStart(0))
    );
    assert_eq!(
        Validator::validate_start(-17i32),
        Err(HailstoneError::NonPositiveStart(-17))
    );
    assert_eq!(
        Validator::validate_start(0u32),
        Err(HailstoneError::NonPositiveStart(0))
    );
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test step-limit validation bounds.
#[test]
fn test_validate_step_limit() {
    assert_eq!(Validator::validate_step_limit(1), Ok(()));
    assert_eq!(Validator::validate_step_limit(u32::MAX), Ok(()));
    assert_eq!(
        Validator::validate_step_limit(0),
        Err(HailstoneError::InvalidStepLimit(0))
    );
}

/// Test duplicate-parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert_eq!(Validator::validate_no_duplicates(None), Ok(()));
    assert_eq!(
        Validator::validate_no_duplicates(Some("max_steps")),
        Err(HailstoneError::DuplicateParameter {
            parameter: "max_steps"
        })
    );
}

// ============================================================================
// Executor Tests
// ============================================================================

/// Test the default executor configuration.
#[test]
fn test_executor_defaults() {
    let executor = CollatzExecutor::default();

    assert_eq!(executor.overflow_policy, OverflowPolicy::Checked);
    assert_eq!(executor.max_steps, None);
}

/// Test counting on known trajectories.
#[test]
fn test_executor_counts() {
    let executor = CollatzExecutor::default();

    assert_eq!(executor.count(1i32), Ok(0));
    assert_eq!(executor.count(6i32), Ok(8));
    assert_eq!(executor.count(27i32), Ok(111));
}

/// Test that the executor validates the start before stepping.
#[test]
fn test_executor_validates_start() {
    let executor = CollatzExecutor::default();

    assert_eq!(
        executor.count(-1i32),
        Err(HailstoneError::NonPositiveStart(-1))
    );
}

/// Test step-limit interplay: the trivial start consumes no budget.
#[test]
fn test_executor_step_limit() {
    let executor = CollatzExecutor {
        overflow_policy: OverflowPolicy::Checked,
        max_steps: Some(1),
    };

    assert_eq!(executor.count(1i32), Ok(0));
    assert_eq!(executor.count(2i32), Ok(1));
    assert_eq!(
        executor.count(3i32),
        Err(HailstoneError::StepLimitExceeded { limit: 1 })
    );
}

/// Test that an arithmetic guard still fires inside the step budget.
#[test]
fn test_executor_overflow_within_budget() {
    let executor = CollatzExecutor {
        overflow_policy: OverflowPolicy::Checked,
        max_steps: Some(1),
    };

    // 715_827_883 is odd and its 3n+1 overflows i32, but the first step
    // is still within budget, so overflow is what gets reported.
    assert_eq!(
        executor.count(715_827_883i32),
        Err(HailstoneError::ValueOverflow {
            value: 715_827_883
        })
    );
}
