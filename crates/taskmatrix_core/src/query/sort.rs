//! Sort-field allow-listing and direction normalization.
//!
//! # Responsibility
//! - Resolve raw sort parameters into a validated `(field, direction)` pair.
//!
//! # Invariants
//! - Resolution never fails: unrecognized input degrades to the defaults
//!   (`id`, ascending) instead of raising an error.
//! - Only allow-listed fields exist as variants, so no caller-supplied
//!   string can ever reach the storage layer as an order-by target.

/// Sortable task field. The enum is the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Title,
    DueDate,
    Label,
    Importance,
    Urgency,
}

impl SortField {
    /// All sortable fields, kept explicit rather than discovered via
    /// reflection so the contract stays stable and type-checked.
    pub const ALLOWED: [Self; 6] = [
        Self::Id,
        Self::Title,
        Self::DueDate,
        Self::Label,
        Self::Importance,
        Self::Urgency,
    ];

    /// Resolves a requested field name.
    ///
    /// Anything outside the allow-list (absent, empty or unknown) falls back
    /// to `Id`, which guarantees a deterministic default ordering.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("id") => Self::Id,
            Some("title") => Self::Title,
            Some("dueDate") => Self::DueDate,
            Some("label") => Self::Label,
            Some("importance") => Self::Importance,
            Some("urgency") => Self::Urgency,
            _ => Self::Id,
        }
    }

    /// External name of the field, matching what [`SortField::parse`] accepts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::DueDate => "dueDate",
            Self::Label => "label",
            Self::Importance => "importance",
            Self::Urgency => "urgency",
        }
    }
}

/// Result ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Exactly a case-insensitive `"desc"` sorts descending; everything else
    /// (absent, empty, garbage) sorts ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("desc") => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

/// Validated (field, direction) pair governing result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Resolves raw sort parameters, degrading silently to the defaults.
    pub fn resolve(sort_by: Option<&str>, sort_dir: Option<&str>) -> Self {
        Self {
            field: SortField::parse(sort_by),
            direction: SortDirection::parse(sort_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SortDirection, SortField, SortSpec};

    #[test]
    fn known_field_names_resolve_to_their_variant() {
        for field in SortField::ALLOWED {
            assert_eq!(SortField::parse(Some(field.as_str())), field);
        }
    }

    #[test]
    fn unknown_field_names_fall_back_to_id() {
        assert_eq!(SortField::parse(None), SortField::Id);
        assert_eq!(SortField::parse(Some("")), SortField::Id);
        assert_eq!(SortField::parse(Some("details")), SortField::Id);
        assert_eq!(SortField::parse(Some("id; DROP TABLE tasks")), SortField::Id);
        // Exact-match only: casing and padding are not forgiven.
        assert_eq!(SortField::parse(Some("DueDate")), SortField::Id);
        assert_eq!(SortField::parse(Some(" title ")), SortField::Id);
    }

    #[test]
    fn only_desc_sorts_descending() {
        assert_eq!(SortDirection::parse(Some("desc")), SortDirection::Descending);
        assert_eq!(SortDirection::parse(Some("DESC")), SortDirection::Descending);
        assert_eq!(SortDirection::parse(Some("DeSc")), SortDirection::Descending);
        assert_eq!(SortDirection::parse(Some("asc")), SortDirection::Ascending);
        assert_eq!(SortDirection::parse(Some("descending")), SortDirection::Ascending);
        assert_eq!(SortDirection::parse(Some("")), SortDirection::Ascending);
        assert_eq!(SortDirection::parse(None), SortDirection::Ascending);
    }

    #[test]
    fn resolve_combines_both_fallbacks() {
        let spec = SortSpec::resolve(Some("title"), Some("DESC"));
        assert_eq!(spec.field, SortField::Title);
        assert_eq!(spec.direction, SortDirection::Descending);

        assert_eq!(SortSpec::resolve(None, None), SortSpec::default());
        assert_eq!(
            SortSpec::resolve(Some("nope"), Some("sideways")),
            SortSpec::default()
        );
    }
}
