//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates step counting by coordinating validation and the
//! policy-driven stepping from the algorithms layer. It provides the main
//! counting loop and its termination guards.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Guarded execution of the step-counting loop.
pub mod executor;

/// Validation utilities.
pub mod validator;
