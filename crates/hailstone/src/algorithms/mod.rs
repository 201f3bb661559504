//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core Collatz algorithms: policy-driven stepping
//! and the reference recursive step counter.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Collatz stepping policies and recursion.
pub mod collatz;
