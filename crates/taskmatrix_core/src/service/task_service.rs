//! Task use-case service.
//!
//! # Responsibility
//! - Own create/update field-validation rules and patch semantics.
//! - Compose filter and sort input into storage-ready values, then delegate
//!   execution to the repository.
//!
//! # Invariants
//! - Absence in `get` and an empty `list` result are normal outcomes, never
//!   errors; `update`/`delete` on a missing id is `NotFound`.
//! - Unrecognized sort input degrades to defaults instead of failing.
//! - Operations are all-or-nothing; no partial-success states exist.

use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch, TaskValidationError};
use crate::query::criteria::{FilterCriteria, Predicate};
use crate::query::sort::SortSpec;
use crate::repo::task_repo::{RepoError, TaskRepository};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error surface of the task service.
///
/// `Validation` and `NotFound` are the recoverable caller-facing kinds; the
/// API layer maps them to transport responses. `Repo` carries storage
/// failures through unchanged.
#[derive(Debug)]
pub enum ServiceError {
    Validation(TaskValidationError),
    NotFound(TaskId),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for ServiceError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service for task CRUD and filtered queries.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new task from a validated draft.
    ///
    /// # Errors
    /// `Validation` when the title is blank/overlong or either priority axis
    /// is missing.
    pub fn create(&self, draft: &TaskDraft) -> ServiceResult<Task> {
        draft.validate()?;
        let task = self.repo.create(draft)?;
        info!(
            "event=task_create module=service status=ok id={} quadrant={:?}",
            task.id,
            task.quadrant()
        );
        Ok(task)
    }

    /// Gets one task by id. Absence is `Ok(None)`, not an error.
    pub fn get(&self, id: TaskId) -> ServiceResult<Option<Task>> {
        Ok(self.repo.find_by_id(id)?)
    }

    /// Lists tasks matching the criteria, in the requested order.
    ///
    /// Composes the predicate and sort spec, then delegates execution to the
    /// storage collaborator. An empty result set is a normal outcome.
    pub fn list(
        &self,
        criteria: &FilterCriteria,
        sort_by: Option<&str>,
        sort_dir: Option<&str>,
    ) -> ServiceResult<Vec<Task>> {
        let predicate = Predicate::from_criteria(criteria);
        let sort = SortSpec::resolve(sort_by, sort_dir);
        let tasks = self.repo.find_all(&predicate, sort)?;
        debug!(
            "event=task_list module=service status=ok constraints={} matches={}",
            predicate.constraints().len(),
            tasks.len()
        );
        Ok(tasks)
    }

    /// Applies a partial update to an existing task and returns the stored
    /// result.
    ///
    /// An absent patch title/importance/urgency keeps the stored value;
    /// details, label and due date are overwritten with whatever the patch
    /// carries, including `None`.
    ///
    /// # Errors
    /// - `NotFound` when no task with `id` exists.
    /// - `Validation` when a supplied title is blank or a bounded field is
    ///   overlong.
    pub fn update(&self, id: TaskId, patch: &TaskPatch) -> ServiceResult<Task> {
        patch.validate()?;
        let Some(stored) = self.repo.find_by_id(id)? else {
            return Err(ServiceError::NotFound(id));
        };

        let next = patch.apply_to(&stored);
        self.repo.update(&next)?;
        info!("event=task_update module=service status=ok id={id}");
        Ok(next)
    }

    /// Deletes a task by id.
    ///
    /// # Errors
    /// `NotFound` when no task with `id` exists.
    pub fn delete(&self, id: TaskId) -> ServiceResult<()> {
        if !self.repo.exists_by_id(id)? {
            return Err(ServiceError::NotFound(id));
        }
        self.repo.delete_by_id(id)?;
        info!("event=task_delete module=service status=ok id={id}");
        Ok(())
    }
}
