//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure arithmetic functions used throughout the crate:
//! - Wrapping fixed-width addition
//! - Single Collatz steps in wrapping and checked flavors
//!
//! These are reusable building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Wrapping and checked fixed-width arithmetic.
pub mod wrapping;
