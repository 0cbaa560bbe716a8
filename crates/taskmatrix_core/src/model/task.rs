//! Task record, request shapes and field validation.
//!
//! # Responsibility
//! - Define the canonical task record persisted by the repository.
//! - Define create/update request shapes and the validation rules shared by
//!   both write paths.
//!
//! # Invariants
//! - `id` is assigned by storage on first save and never changes.
//! - `importance` and `urgency` are required on every persisted task.
//! - `title` is non-blank and at most [`MAX_TITLE_CHARS`] characters.

use crate::model::quadrant::Quadrant;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned numeric identity for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// Maximum title length in characters.
pub const MAX_TITLE_CHARS: usize = 255;
/// Maximum label length in characters.
pub const MAX_LABEL_CHARS: usize = 100;

/// Importance axis of the priority matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Important,
    NotImportant,
}

/// Urgency axis of the priority matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Urgent,
    NotUrgent,
}

/// Canonical persisted task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by storage on insert.
    pub id: TaskId,
    /// Required, non-blank.
    pub title: String,
    /// Free-form body text, unbounded.
    pub details: Option<String>,
    /// Short tag used for substring filtering.
    pub label: Option<String>,
    /// Calendar date without a time component.
    pub due_date: Option<NaiveDate>,
    pub importance: Importance,
    pub urgency: Urgency,
}

impl Task {
    /// Derives the priority quadrant from the stored axes.
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::classify(self.importance, self.urgency)
    }

    /// Checks field-level constraints before a write.
    ///
    /// # Errors
    /// - [`TaskValidationError::TitleMissing`] when the title is blank.
    /// - [`TaskValidationError::TitleTooLong`] / [`TaskValidationError::LabelTooLong`]
    ///   when a bounded field exceeds its limit.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_title(&self.title)?;
        validate_label(self.label.as_deref())?;
        Ok(())
    }
}

/// Create request for a new task.
///
/// Importance and urgency are optional here so validation can report the
/// missing field instead of the request shape being unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub details: Option<String>,
    pub label: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub importance: Option<Importance>,
    pub urgency: Option<Urgency>,
}

impl TaskDraft {
    /// Checks the create-path constraints.
    ///
    /// # Errors
    /// Returns the first violated rule: blank/overlong title, overlong label,
    /// or a missing importance/urgency axis.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_title(&self.title)?;
        validate_label(self.label.as_deref())?;
        if self.importance.is_none() {
            return Err(TaskValidationError::ImportanceMissing);
        }
        if self.urgency.is_none() {
            return Err(TaskValidationError::UrgencyMissing);
        }
        Ok(())
    }
}

/// Partial update for an existing task.
///
/// Field semantics differ by group:
/// - `title`, `importance`, `urgency`: `None` keeps the stored value.
/// - `details`, `label`, `due_date`: always overwrite, so `None` clears the
///   stored value. These fields carry no required-non-null invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub details: Option<String>,
    pub label: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub importance: Option<Importance>,
    pub urgency: Option<Urgency>,
}

impl TaskPatch {
    /// Checks the update-path constraints.
    ///
    /// A supplied title must be non-blank; an absent title is fine because it
    /// means "keep the stored one".
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if let Some(title) = self.title.as_deref() {
            validate_title(title)?;
        }
        validate_label(self.label.as_deref())?;
        Ok(())
    }

    /// Folds this patch into a stored task, yielding the next persisted state.
    pub fn apply_to(&self, task: &Task) -> Task {
        Task {
            id: task.id,
            title: self
                .title
                .clone()
                .unwrap_or_else(|| task.title.clone()),
            details: self.details.clone(),
            label: self.label.clone(),
            due_date: self.due_date,
            importance: self.importance.unwrap_or(task.importance),
            urgency: self.urgency.unwrap_or(task.urgency),
        }
    }
}

/// Field-level validation failure for create/update requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    TitleMissing,
    TitleTooLong { chars: usize },
    LabelTooLong { chars: usize },
    ImportanceMissing,
    UrgencyMissing,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleMissing => write!(f, "task title cannot be null or blank"),
            Self::TitleTooLong { chars } => write!(
                f,
                "task title is {chars} characters, maximum is {MAX_TITLE_CHARS}"
            ),
            Self::LabelTooLong { chars } => write!(
                f,
                "task label is {chars} characters, maximum is {MAX_LABEL_CHARS}"
            ),
            Self::ImportanceMissing => write!(f, "task importance cannot be null"),
            Self::UrgencyMissing => write!(f, "task urgency cannot be null"),
        }
    }
}

impl Error for TaskValidationError {}

fn validate_title(title: &str) -> Result<(), TaskValidationError> {
    if title.trim().is_empty() {
        return Err(TaskValidationError::TitleMissing);
    }
    let chars = title.chars().count();
    if chars > MAX_TITLE_CHARS {
        return Err(TaskValidationError::TitleTooLong { chars });
    }
    Ok(())
}

fn validate_label(label: Option<&str>) -> Result<(), TaskValidationError> {
    if let Some(label) = label {
        let chars = label.chars().count();
        if chars > MAX_LABEL_CHARS {
            return Err(TaskValidationError::LabelTooLong { chars });
        }
    }
    Ok(())
}
