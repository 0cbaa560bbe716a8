//! Filter criteria and backend-neutral predicate composition.
//!
//! # Responsibility
//! - Model the caller-supplied filter set for one list query.
//! - Compose it into a conjunction of `{field, operator, value}` constraints
//!   the storage layer can translate without re-deciding precedence.
//!
//! # Invariants
//! - A supplied quadrant filter fully replaces independent importance and
//!   urgency filters; the composer never emits a contradictory axis pair.
//! - An empty criteria set composes to the empty conjunction (match all).
//! - `due_after <= due_before` is not checked here; an empty range is a
//!   valid predicate that simply matches nothing.

use crate::model::quadrant::Quadrant;
use crate::model::task::{Importance, Urgency};
use chrono::NaiveDate;

/// Caller-supplied filters for one list query.
///
/// All fields are optional; an absent field leaves the query unconstrained
/// in that dimension. Built fresh per request and discarded after use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match on the label.
    pub label: Option<String>,
    /// Inclusive upper bound on the due date.
    pub due_before: Option<NaiveDate>,
    /// Inclusive lower bound on the due date.
    pub due_after: Option<NaiveDate>,
    pub importance: Option<Importance>,
    pub urgency: Option<Urgency>,
    /// Takes exclusive precedence over `importance`/`urgency` when set.
    pub quadrant: Option<Quadrant>,
}

/// Task field a constraint may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Title,
    DueDate,
    Label,
    Importance,
    Urgency,
}

/// Typed operand of a constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Importance(Importance),
    Urgency(Urgency),
}

/// Comparison operator of a single constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Case-insensitive substring containment.
    ContainsIgnoreCase,
    /// `field <= value`, inclusive.
    OnOrBefore,
    /// `field >= value`, inclusive.
    OnOrAfter,
    Equals,
}

/// One `{field, operator, value}` node of the conjunction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub field: Field,
    pub op: Op,
    pub value: FieldValue,
}

/// Ordered conjunction of field constraints.
///
/// Backend-independent by design: the storage collaborator translates this
/// tree into its native query form. The empty conjunction matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    constraints: Vec<Constraint>,
}

impl Predicate {
    /// Composes the predicate for a filter set.
    ///
    /// Rules, applied independently and conjunctively:
    /// - a present, non-empty label adds a case-insensitive containment
    ///   constraint;
    /// - each present due-date bound adds an inclusive comparison;
    /// - a present quadrant expands to both axis equality constraints and
    ///   suppresses independent importance/urgency filters entirely;
    ///   otherwise either axis filter is applied on its own.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut constraints = Vec::new();

        if let Some(label) = criteria.label.as_deref() {
            if !label.is_empty() {
                constraints.push(Constraint {
                    field: Field::Label,
                    op: Op::ContainsIgnoreCase,
                    value: FieldValue::Text(label.to_string()),
                });
            }
        }

        if let Some(before) = criteria.due_before {
            constraints.push(Constraint {
                field: Field::DueDate,
                op: Op::OnOrBefore,
                value: FieldValue::Date(before),
            });
        }
        if let Some(after) = criteria.due_after {
            constraints.push(Constraint {
                field: Field::DueDate,
                op: Op::OnOrAfter,
                value: FieldValue::Date(after),
            });
        }

        // Quadrant wins outright. Expanding it into both axis constraints
        // and then also honoring an independent importance/urgency filter
        // could build a conjunction no task satisfies.
        if let Some(quadrant) = criteria.quadrant {
            let (importance, urgency) = quadrant.axes();
            constraints.push(equals_importance(importance));
            constraints.push(equals_urgency(urgency));
        } else {
            if let Some(importance) = criteria.importance {
                constraints.push(equals_importance(importance));
            }
            if let Some(urgency) = criteria.urgency {
                constraints.push(equals_urgency(urgency));
            }
        }

        Self { constraints }
    }

    /// Constraint nodes in composition order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Whether this predicate matches every task.
    pub fn is_match_all(&self) -> bool {
        self.constraints.is_empty()
    }
}

fn equals_importance(importance: Importance) -> Constraint {
    Constraint {
        field: Field::Importance,
        op: Op::Equals,
        value: FieldValue::Importance(importance),
    }
}

fn equals_urgency(urgency: Urgency) -> Constraint {
    Constraint {
        field: Field::Urgency,
        op: Op::Equals,
        value: FieldValue::Urgency(urgency),
    }
}
