//! Input validation for step-counting configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for step-counting inputs and
//! builder parameters. It checks the positivity precondition of the Collatz
//! map and the bounds of configuration values.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Start validation is generic over `PrimInt` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not step or count trajectories.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::HailstoneError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for step-counting configuration and input data.
///
/// Provides static methods returning `Result<(), HailstoneError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the starting value for step counting.
    ///
    /// The Collatz map only reaches 1 from positive starts; anything below 1
    /// is rejected up front instead of looping forever.
    pub fn validate_start<T: PrimInt>(n: T) -> Result<(), HailstoneError> {
        if n < T::one() {
            return Err(HailstoneError::NonPositiveStart(
                n.to_i64().unwrap_or(i64::MIN),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the optional step limit.
    ///
    /// A limit of 0 could never admit any trajectory except the trivial
    /// `n == 1` and is treated as a configuration error.
    pub fn validate_step_limit(limit: u32) -> Result<(), HailstoneError> {
        if limit < 1 {
            return Err(HailstoneError::InvalidStepLimit(limit));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), HailstoneError> {
        if let Some(parameter) = duplicate_param {
            return Err(HailstoneError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
