//! Guarded execution of the step-counting loop.
//!
//! ## Purpose
//!
//! This module provides the executor that iterates the Collatz map from a
//! validated start down to 1, counting steps under the configured overflow
//! policy and optional step limit.
//!
//! ## Design notes
//!
//! * **Iterative**: The loop allocates nothing and uses constant stack,
//!   unlike the reference recursion whose depth grows with the step count.
//! * **Total**: Every non-terminating condition (overflow, divergence,
//!   limit exhaustion) is converted into a typed error.
//! * **Generics**: Counting is generic over `PrimInt` widths; `i32` is the
//!   reference width.
//!
//! ## Invariants
//!
//! * The loop variable stays `>= 1` between iterations.
//! * On success, the returned count equals the number of map applications.
//!
//! ## Non-goals
//!
//! * This module does not configure policies or limits (API layer).
//! * This module does not define the stepping arithmetic (math layer).

// External dependencies
use num_traits::{CheckedAdd, CheckedMul, PrimInt, WrappingAdd, WrappingMul};

// Internal dependencies
use crate::algorithms::collatz::{advance, OverflowPolicy};
use crate::engine::validator::Validator;
use crate::primitives::errors::HailstoneError;

// ============================================================================
// Collatz Executor
// ============================================================================

/// Executor for guarded Collatz step counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollatzExecutor {
    /// Arithmetic policy for the `3n+1` step.
    pub overflow_policy: OverflowPolicy,

    /// Upper bound on counted steps, if any.
    pub max_steps: Option<u32>,
}

impl CollatzExecutor {
    /// Count the Collatz steps from `start` down to 1.
    ///
    /// Validates the start, then iterates `advance` until the trajectory
    /// reaches 1 or a guard fires.
    pub fn count<T>(&self, start: T) -> Result<u32, HailstoneError>
    where
        T: PrimInt + CheckedAdd + CheckedMul + WrappingAdd + WrappingMul,
    {
        Validator::validate_start(start)?;

        let mut value = start;
        let mut steps: u32 = 0;

        while value != T::one() {
            if let Some(limit) = self.max_steps {
                if steps >= limit {
                    return Err(HailstoneError::StepLimitExceeded { limit });
                }
            }

            value = advance(self.overflow_policy, value)?;
            steps += 1;
        }

        Ok(steps)
    }
}
