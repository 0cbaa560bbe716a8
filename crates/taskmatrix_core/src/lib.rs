//! Core domain logic for the task matrix.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::quadrant::Quadrant;
pub use model::task::{
    Importance, Task, TaskDraft, TaskId, TaskPatch, TaskValidationError, Urgency,
};
pub use query::criteria::{Constraint, Field, FieldValue, FilterCriteria, Op, Predicate};
pub use query::sort::{SortDirection, SortField, SortSpec};
pub use repo::task_repo::{RepoError, RepoResult, SqliteTaskRepository, TaskRepository};
pub use service::task_service::{ServiceError, ServiceResult, TaskService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
