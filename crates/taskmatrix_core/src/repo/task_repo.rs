//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and query APIs over the `tasks` table.
//! - Translate the backend-neutral predicate tree and sort spec into
//!   parameterized SQL.
//!
//! # Invariants
//! - Write paths must validate the model before SQL mutations.
//! - Only allow-listed `SortField` variants map to column names; no
//!   caller-supplied string ever reaches the SQL text.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::task::{
    Importance, Task, TaskDraft, TaskId, TaskValidationError, Urgency,
};
use crate::query::criteria::{Field, FieldValue, Op, Predicate};
use crate::query::sort::{SortDirection, SortField, SortSpec};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    details,
    label,
    due_date,
    importance,
    urgency
FROM tasks";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for task persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Db(DbError),
    NotFound(TaskId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage collaborator contract for task CRUD and queries.
pub trait TaskRepository {
    /// Persists a validated draft; storage assigns the identity.
    fn create(&self, draft: &TaskDraft) -> RepoResult<Task>;
    /// Persists mutations of an already-identified task.
    fn update(&self, task: &Task) -> RepoResult<()>;
    fn find_by_id(&self, id: TaskId) -> RepoResult<Option<Task>>;
    fn exists_by_id(&self, id: TaskId) -> RepoResult<bool>;
    fn delete_by_id(&self, id: TaskId) -> RepoResult<()>;
    /// Returns tasks matching the predicate, in the requested order.
    fn find_all(&self, predicate: &Predicate, sort: SortSpec) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create(&self, draft: &TaskDraft) -> RepoResult<Task> {
        draft.validate()?;
        let (Some(importance), Some(urgency)) = (draft.importance, draft.urgency) else {
            // validate() already rejects this; kept total for direct callers.
            return Err(TaskValidationError::ImportanceMissing.into());
        };

        self.conn.execute(
            "INSERT INTO tasks (
                title,
                details,
                label,
                due_date,
                importance,
                urgency
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                draft.title.as_str(),
                draft.details.as_deref(),
                draft.label.as_deref(),
                draft.due_date.map(date_to_db),
                importance_to_db(importance),
                urgency_to_db(urgency),
            ],
        )?;

        Ok(Task {
            id: self.conn.last_insert_rowid(),
            title: draft.title.clone(),
            details: draft.details.clone(),
            label: draft.label.clone(),
            due_date: draft.due_date,
            importance,
            urgency,
        })
    }

    fn update(&self, task: &Task) -> RepoResult<()> {
        task.validate()?;

        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                title = ?1,
                details = ?2,
                label = ?3,
                due_date = ?4,
                importance = ?5,
                urgency = ?6,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?7;",
            params![
                task.title.as_str(),
                task.details.as_deref(),
                task.label.as_deref(),
                task.due_date.map(date_to_db),
                importance_to_db(task.importance),
                urgency_to_db(task.urgency),
                task.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(task.id));
        }

        Ok(())
    }

    fn find_by_id(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn exists_by_id(&self, id: TaskId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM tasks WHERE id = ?1);",
            params![id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn delete_by_id(&self, id: TaskId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn find_all(&self, predicate: &Predicate, sort: SortSpec) -> RepoResult<Vec<Task>> {
        let mut sql = String::from(TASK_SELECT_SQL);
        let mut bind_values: Vec<Value> = Vec::new();

        for constraint in predicate.constraints() {
            sql.push_str(if bind_values.is_empty() {
                " WHERE "
            } else {
                " AND "
            });
            let column = column_name(constraint.field);
            match constraint.op {
                Op::ContainsIgnoreCase => {
                    sql.push_str(&format!("lower({column}) LIKE ?{} ESCAPE '\\'", bind_values.len() + 1));
                    bind_values.push(Value::Text(contains_pattern(&constraint.value)));
                }
                Op::OnOrBefore => {
                    sql.push_str(&format!("{column} <= ?{}", bind_values.len() + 1));
                    bind_values.push(bind_value(&constraint.value));
                }
                Op::OnOrAfter => {
                    sql.push_str(&format!("{column} >= ?{}", bind_values.len() + 1));
                    bind_values.push(bind_value(&constraint.value));
                }
                Op::Equals => {
                    sql.push_str(&format!("{column} = ?{}", bind_values.len() + 1));
                    bind_values.push(bind_value(&constraint.value));
                }
            }
        }

        sql.push_str(&order_by_clause(sort));

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }
}

/// Maps a predicate field to its column. Total over the closed enum, so the
/// query text can only ever contain these fixed names.
fn column_name(field: Field) -> &'static str {
    match field {
        Field::Id => "id",
        Field::Title => "title",
        Field::DueDate => "due_date",
        Field::Label => "label",
        Field::Importance => "importance",
        Field::Urgency => "urgency",
    }
}

fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::Id => "id",
        SortField::Title => "title",
        SortField::DueDate => "due_date",
        SortField::Label => "label",
        SortField::Importance => "importance",
        SortField::Urgency => "urgency",
    }
}

fn order_by_clause(sort: SortSpec) -> String {
    let column = sort_column(sort.field);
    let direction = match sort.direction {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
    };
    if sort.field == SortField::Id {
        format!(" ORDER BY id {direction}")
    } else {
        // Secondary id key keeps ordering deterministic across equal values.
        format!(" ORDER BY {column} {direction}, id ASC")
    }
}

fn bind_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(text) => Value::Text(text.clone()),
        FieldValue::Date(date) => Value::Text(date_to_db(*date)),
        FieldValue::Importance(importance) => {
            Value::Text(importance_to_db(*importance).to_string())
        }
        FieldValue::Urgency(urgency) => Value::Text(urgency_to_db(*urgency).to_string()),
    }
}

/// Builds the lowered `%...%` LIKE pattern, escaping LIKE metacharacters so
/// the filter means containment, not wildcard matching.
fn contains_pattern(value: &FieldValue) -> String {
    let raw = match value {
        FieldValue::Text(text) => text.as_str(),
        _ => "",
    };
    let mut escaped = String::with_capacity(raw.len() + 2);
    for ch in raw.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    format!("%{escaped}%")
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let due_date = match row.get::<_, Option<String>>("due_date")? {
        Some(text) => Some(NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|_| {
            RepoError::InvalidData(format!("invalid date value `{text}` in tasks.due_date"))
        })?),
        None => None,
    };

    let importance_text: String = row.get("importance")?;
    let importance = parse_importance(&importance_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid importance value `{importance_text}` in tasks.importance"
        ))
    })?;

    let urgency_text: String = row.get("urgency")?;
    let urgency = parse_urgency(&urgency_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid urgency value `{urgency_text}` in tasks.urgency"
        ))
    })?;

    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        details: row.get("details")?,
        label: row.get("label")?,
        due_date,
        importance,
        urgency,
    })
}

fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn importance_to_db(importance: Importance) -> &'static str {
    match importance {
        Importance::Important => "important",
        Importance::NotImportant => "not_important",
    }
}

fn parse_importance(value: &str) -> Option<Importance> {
    match value {
        "important" => Some(Importance::Important),
        "not_important" => Some(Importance::NotImportant),
        _ => None,
    }
}

fn urgency_to_db(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Urgent => "urgent",
        Urgency::NotUrgent => "not_urgent",
    }
}

fn parse_urgency(value: &str) -> Option<Urgency> {
    match value {
        "urgent" => Some(Urgency::Urgent),
        "not_urgent" => Some(Urgency::NotUrgent),
        _ => None,
    }
}
