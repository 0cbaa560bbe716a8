//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate criteria composition, sort resolution and repository calls
//!   into use-case level APIs.
//! - Keep callers decoupled from storage details.

pub mod task_service;
