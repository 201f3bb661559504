//! Error types for hailstone operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur during step
//! counting and builder configuration: invalid starts, overflow of the
//! `3n+1` step, diverged wrapped trajectories, and step-limit violations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending
//!   start or the configured limit).
//! * **Deferred**: Builder misconfiguration is caught and stored during
//!   configuration, then reported by `build()`.
//! * **No-std**: All variants carry scalars only, so no allocation is
//!   required in `no_std` environments.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Non-positive starting values.
//! 2. **Arithmetic guards**: Overflow and divergence of the Collatz map.
//! 3. **Configuration**: Invalid or duplicated builder parameters.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Out-of-range context values saturate to the `i64` bounds rather than
//!   being dropped.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for hailstone operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HailstoneError {
    /// Step counting requires a starting value of at least 1.
    NonPositiveStart(i64),

    /// The `3n+1` step exceeded the representable range of the integer width.
    ValueOverflow {
        /// The odd value whose `3n+1` overflowed.
        value: i64,
    },

    /// A wrapped trajectory left the positive range and cannot reach 1.
    TrajectoryDiverged {
        /// The wrapped, non-positive value the trajectory produced.
        value: i64,
    },

    /// The trajectory did not reach 1 within the configured step limit.
    StepLimitExceeded {
        /// The configured limit that was exhausted.
        limit: u32,
    },

    /// The step limit must be at least 1.
    InvalidStepLimit(u32),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for HailstoneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NonPositiveStart(n) => {
                write!(f, "Invalid start: {n} (must be >= 1)")
            }
            Self::ValueOverflow { value } => {
                write!(f, "Value overflow: 3*{value}+1 exceeds the integer range")
            }
            Self::TrajectoryDiverged { value } => {
                write!(
                    f,
                    "Trajectory diverged: wrapped to {value}, which cannot reach 1"
                )
            }
            Self::StepLimitExceeded { limit } => {
                write!(f, "Step limit exceeded: no convergence within {limit} steps")
            }
            Self::InvalidStepLimit(limit) => {
                write!(f, "Invalid step limit: {limit} (must be >= 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for HailstoneError {}
