//! Eisenhower-matrix quadrant classification.
//!
//! # Responsibility
//! - Map the (importance, urgency) pair to its priority quadrant.
//! - Expose the exact inverse mapping for filter expansion.
//!
//! # Invariants
//! - `classify` and `axes` are total over the closed enums and inverse to
//!   each other; there is no "undefined quadrant" state for a valid task.

use crate::model::task::{Importance, Urgency};
use serde::{Deserialize, Serialize};

/// Derived priority category of a task.
///
/// Never stored: recomputed from the two axes on every read, so it cannot
/// drift out of sync with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Do first.
    ImportantUrgent,
    /// Schedule.
    ImportantNotUrgent,
    /// Delegate.
    NotImportantUrgent,
    /// Drop.
    NotImportantNotUrgent,
}

impl Quadrant {
    /// All four quadrants, in matrix order.
    pub const ALL: [Self; 4] = [
        Self::ImportantUrgent,
        Self::ImportantNotUrgent,
        Self::NotImportantUrgent,
        Self::NotImportantNotUrgent,
    ];

    /// Total mapping from the two axes to the quadrant.
    pub fn classify(importance: Importance, urgency: Urgency) -> Self {
        match (importance, urgency) {
            (Importance::Important, Urgency::Urgent) => Self::ImportantUrgent,
            (Importance::Important, Urgency::NotUrgent) => Self::ImportantNotUrgent,
            (Importance::NotImportant, Urgency::Urgent) => Self::NotImportantUrgent,
            (Importance::NotImportant, Urgency::NotUrgent) => Self::NotImportantNotUrgent,
        }
    }

    /// Classifies a pair that may not have passed required-field validation
    /// yet. Returns `None` (indeterminate) when either axis is absent.
    pub fn try_classify(
        importance: Option<Importance>,
        urgency: Option<Urgency>,
    ) -> Option<Self> {
        Some(Self::classify(importance?, urgency?))
    }

    /// Exact inverse of [`Quadrant::classify`].
    ///
    /// The criteria composer uses this to expand a quadrant filter into the
    /// fixed pair of axis equality constraints.
    pub fn axes(self) -> (Importance, Urgency) {
        match self {
            Self::ImportantUrgent => (Importance::Important, Urgency::Urgent),
            Self::ImportantNotUrgent => (Importance::Important, Urgency::NotUrgent),
            Self::NotImportantUrgent => (Importance::NotImportant, Urgency::Urgent),
            Self::NotImportantNotUrgent => (Importance::NotImportant, Urgency::NotUrgent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Quadrant;
    use crate::model::task::{Importance, Urgency};

    #[test]
    fn classify_covers_all_four_pairs() {
        assert_eq!(
            Quadrant::classify(Importance::Important, Urgency::Urgent),
            Quadrant::ImportantUrgent
        );
        assert_eq!(
            Quadrant::classify(Importance::Important, Urgency::NotUrgent),
            Quadrant::ImportantNotUrgent
        );
        assert_eq!(
            Quadrant::classify(Importance::NotImportant, Urgency::Urgent),
            Quadrant::NotImportantUrgent
        );
        assert_eq!(
            Quadrant::classify(Importance::NotImportant, Urgency::NotUrgent),
            Quadrant::NotImportantNotUrgent
        );
    }

    #[test]
    fn axes_is_the_exact_inverse_of_classify() {
        for quadrant in Quadrant::ALL {
            let (importance, urgency) = quadrant.axes();
            assert_eq!(Quadrant::classify(importance, urgency), quadrant);
        }
    }

    #[test]
    fn try_classify_is_indeterminate_when_an_axis_is_absent() {
        assert_eq!(Quadrant::try_classify(None, Some(Urgency::Urgent)), None);
        assert_eq!(
            Quadrant::try_classify(Some(Importance::Important), None),
            None
        );
        assert_eq!(Quadrant::try_classify(None, None), None);
        assert_eq!(
            Quadrant::try_classify(Some(Importance::Important), Some(Urgency::Urgent)),
            Some(Quadrant::ImportantUrgent)
        );
    }
}
