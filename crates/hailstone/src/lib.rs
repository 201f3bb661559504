//! # Hailstone — guarded fixed-width arithmetic for Rust
//!
//! Two small, pure integer operations with explicit overflow semantics:
//!
//! * **Byte addition** — 8-bit signed addition with two's-complement
//!   wraparound (modular arithmetic mod 256, reinterpreted as signed).
//!   Overflow is silent by contract; no error is signaled.
//! * **Hailstone step count** — the number of Collatz steps from a positive
//!   integer down to 1 under the map n → n/2 (even) or n → 3n+1 (odd).
//!
//! The step counter is where the interesting semantics live: `3n+1` can
//! overflow the integer width, and non-positive starts never reach 1. The
//! public API makes both conditions explicit errors instead of inheriting
//! the undefined behavior of a naive rendition.
//!
//! ## Quick Start
//!
//! ```rust
//! use hailstone::prelude::*;
//!
//! // Build the model
//! let model = Hailstone::new()
//!     .overflow_policy(Checked)   // Error on 3n+1 overflow (default)
//!     .build()?;
//!
//! // Count Collatz steps
//! assert_eq!(model.count_steps(1)?, 0);
//! assert_eq!(model.count_steps(6)?, 8);    // 6→3→10→5→16→8→4→2→1
//! assert_eq!(model.count_steps(27)?, 111);
//!
//! // Wrapping byte addition
//! assert_eq!(byte_add(100, 100), -56);
//! # Result::<(), HailstoneError>::Ok(())
//! ```
//!
//! ## Overflow Policies
//!
//! * `Checked` (default): an odd value whose `3n+1` exceeds the integer
//!   width yields [`HailstoneError::ValueOverflow`].
//! * `Wrapping`: `3n+1` wraps modulo the integer width, matching unguarded
//!   fixed-width arithmetic. A wrapped trajectory that leaves the positive
//!   range can no longer reach 1 and is reported as
//!   [`HailstoneError::TrajectoryDiverged`].
//!
//! A step limit can be configured to bound long trajectories:
//!
//! ```rust
//! use hailstone::prelude::*;
//!
//! let model = Hailstone::new().max_steps(10).build()?;
//! assert!(model.count_steps(27).is_err()); // 27 needs 111 steps
//! # Result::<(), HailstoneError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! [`HailstoneModel::count_steps`] returns `Result<u32, HailstoneError>`,
//! and the `?` operator is idiomatic:
//!
//! ```rust
//! use hailstone::prelude::*;
//!
//! let model = Hailstone::new().build()?;
//!
//! match model.count_steps(-5) {
//!     Ok(steps) => println!("reached 1 in {steps} steps"),
//!     Err(e) => eprintln!("step counting failed: {e}"),
//! }
//! # Result::<(), HailstoneError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! hailstone = { version = "0.1", default-features = false }
//! ```
//!
//! No allocation is performed anywhere in the crate.
//!
//! [`HailstoneError::ValueOverflow`]: crate::prelude::HailstoneError::ValueOverflow
//! [`HailstoneError::TrajectoryDiverged`]: crate::prelude::HailstoneError::TrajectoryDiverged
//! [`HailstoneModel::count_steps`]: crate::prelude::HailstoneModel::count_steps

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure wrapping/checked arithmetic.
mod math;

// Layer 3: Algorithms - Collatz stepping and recursion.
mod algorithms;

// Layer 4: Engine - validation and guarded execution.
mod engine;

// High-level fluent API for step counting.
mod api;

// Standard hailstone prelude.
pub mod prelude {
    pub use crate::api::{
        byte_add, HailstoneBuilder as Hailstone, HailstoneError, HailstoneModel,
        OverflowPolicy::{Checked, Wrapping},
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
