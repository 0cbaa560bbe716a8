//! Domain model for the task matrix.
//!
//! # Responsibility
//! - Define the persisted task record and its request-side shapes.
//! - Derive the priority quadrant from the importance/urgency axes.
//!
//! # Invariants
//! - Every persisted task carries non-null importance and urgency, so its
//!   quadrant is always well defined.
//! - The quadrant is never stored; it is recomputed on every read.

pub mod quadrant;
pub mod task;
