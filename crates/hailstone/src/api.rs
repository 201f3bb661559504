//! High-level API for hailstone arithmetic.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder pattern for configuring the step counter
//! and re-exports the byte-addition primitive.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `build()` is called;
//!   misconfiguration during chaining is deferred, never panicked on.
//! * **Type-Safe**: `count_steps` is generic over `PrimInt` widths.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Hailstone::new()` → chained setters →
//!   `.build()` → [`HailstoneModel`].
//! * **Duplicate Detection**: Setting the same parameter twice is recorded
//!   and reported as an error by `build()`.

// External dependencies
use num_traits::{CheckedAdd, CheckedMul, PrimInt, WrappingAdd, WrappingMul};

// Internal dependencies
use crate::engine::executor::CollatzExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::collatz::OverflowPolicy;
pub use crate::math::wrapping::byte_add;
pub use crate::primitives::errors::HailstoneError;

// ============================================================================
// Hailstone Builder
// ============================================================================

/// Fluent builder for configuring Collatz step counting.
#[derive(Debug, Clone, Copy, Default)]
pub struct HailstoneBuilder {
    /// Arithmetic policy for the `3n+1` step.
    pub overflow_policy: Option<OverflowPolicy>,

    /// Upper bound on counted steps.
    pub max_steps: Option<u32>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl HailstoneBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            overflow_policy: None,
            max_steps: None,
            duplicate_param: None,
        }
    }

    /// Set the arithmetic policy for the `3n+1` step.
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        if self.overflow_policy.is_some() {
            self.duplicate_param = Some("overflow_policy");
        }
        self.overflow_policy = Some(policy);
        self
    }

    /// Set an upper bound on counted steps (must be at least 1).
    pub fn max_steps(mut self, limit: u32) -> Self {
        if self.max_steps.is_some() {
            self.duplicate_param = Some("max_steps");
        }
        self.max_steps = Some(limit);
        self
    }

    /// Validate the configuration and build a [`HailstoneModel`].
    pub fn build(self) -> Result<HailstoneModel, HailstoneError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(limit) = self.max_steps {
            Validator::validate_step_limit(limit)?;
        }

        Ok(HailstoneModel {
            executor: CollatzExecutor {
                overflow_policy: self.overflow_policy.unwrap_or_default(),
                max_steps: self.max_steps,
            },
        })
    }
}

// ============================================================================
// Hailstone Model
// ============================================================================

/// Validated step-counting model produced by [`HailstoneBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HailstoneModel {
    /// The configured execution engine.
    executor: CollatzExecutor,
}

impl HailstoneModel {
    // ========================================================================
    // Step Counting
    // ========================================================================

    /// Count the Collatz steps from `n` down to 1.
    ///
    /// Returns 0 for `n == 1`; otherwise one plus the count of the next
    /// value under the map n → n/2 (even) or n → 3n+1 (odd).
    ///
    /// # Errors
    ///
    /// * [`HailstoneError::NonPositiveStart`] for `n < 1`.
    /// * [`HailstoneError::ValueOverflow`] when `3n+1` overflows under the
    ///   `Checked` policy.
    /// * [`HailstoneError::TrajectoryDiverged`] when a wrapped trajectory
    ///   leaves the positive range under the `Wrapping` policy.
    /// * [`HailstoneError::StepLimitExceeded`] when a configured `max_steps`
    ///   is exhausted.
    pub fn count_steps<T>(&self, n: T) -> Result<u32, HailstoneError>
    where
        T: PrimInt + CheckedAdd + CheckedMul + WrappingAdd + WrappingMul,
    {
        self.executor.count(n)
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Get the configured overflow policy.
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.executor.overflow_policy
    }

    /// Get the configured step limit, if any.
    pub fn max_steps(&self) -> Option<u32> {
        self.executor.max_steps
    }
}
