//! Query-side value types: filter criteria, predicate tree, sort resolution.
//!
//! # Responsibility
//! - Compose caller-supplied filters into a backend-neutral predicate.
//! - Resolve requested sort input against the field allow-list.
//!
//! # Invariants
//! - Everything here is transient per-request state; nothing is persisted.

pub mod criteria;
pub mod sort;
