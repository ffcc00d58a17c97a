//! Guarded query-string parameters.
//!
//! The API rejects filters outside its validation rules, so every filter
//! passes through the guard table in [`QueryField::guard`] before it is
//! added. Values that fail their guard are omitted.
//!
//! ```rust
//! use royale_cr_client::{QueryField, QueryParams};
//!
//! let params = QueryParams::new()
//!     .number(QueryField::MinMembers, Some(1)) // below the floor of 2, dropped
//!     .number(QueryField::MinMembers, Some(2))
//!     .text(QueryField::Name, Some("ab"));     // shorter than 3 chars, dropped
//!
//! assert_eq!(params.pairs(), &[("minMembers".to_string(), "2".to_string())]);
//! ```

/// Validation rule for a single query field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryGuard {
    /// Integer must be at least this value.
    AtLeast(i64),
    /// Integer must lie in this inclusive range.
    Between(i64, i64),
    /// Text must have at least this many characters.
    MinChars(usize),
}

impl QueryGuard {
    /// Whether an integer value passes this guard.
    pub fn admits_number(&self, value: i64) -> bool {
        match *self {
            QueryGuard::AtLeast(floor) => value >= floor,
            QueryGuard::Between(low, high) => (low..=high).contains(&value),
            QueryGuard::MinChars(_) => false,
        }
    }

    /// Whether a text value passes this guard.
    pub fn admits_text(&self, value: &str) -> bool {
        match *self {
            QueryGuard::MinChars(min) => value.chars().count() >= min,
            _ => false,
        }
    }
}

/// Query fields accepted by the API's list and search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryField {
    LocationId,
    MinScore,
    MinMembers,
    MaxMembers,
    Limit,
    Name,
    After,
    Before,
}

impl QueryField {
    /// Name of the parameter on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            QueryField::LocationId => "locationId",
            QueryField::MinScore => "minScore",
            QueryField::MinMembers => "minMembers",
            QueryField::MaxMembers => "maxMembers",
            QueryField::Limit => "limit",
            QueryField::Name => "name",
            QueryField::After => "after",
            QueryField::Before => "before",
        }
    }

    /// The guard this field must pass, mirroring the API's validation rules.
    pub fn guard(&self) -> QueryGuard {
        match self {
            QueryField::LocationId => QueryGuard::AtLeast(1),
            QueryField::MinScore => QueryGuard::AtLeast(1),
            QueryField::MinMembers => QueryGuard::AtLeast(2),
            QueryField::MaxMembers => QueryGuard::Between(1, 50),
            QueryField::Limit => QueryGuard::AtLeast(1),
            QueryField::Name => QueryGuard::MinChars(3),
            QueryField::After | QueryField::Before => QueryGuard::MinChars(1),
        }
    }
}

/// Ordered list of query pairs that passed their guards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an integer filter if present and admitted by the field's guard.
    pub fn number(mut self, field: QueryField, value: Option<i64>) -> Self {
        if let Some(value) = value {
            if field.guard().admits_number(value) {
                self.pairs
                    .push((field.wire_name().to_string(), value.to_string()));
            }
        }
        self
    }

    /// Add a text filter if present and admitted by the field's guard.
    pub fn text(mut self, field: QueryField, value: Option<&str>) -> Self {
        if let Some(value) = value {
            if field.guard().admits_text(value) {
                self.pairs
                    .push((field.wire_name().to_string(), value.to_string()));
            }
        }
        self
    }

    /// Returns true if no parameter passed its guard.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Look up the value of a field, if it was added.
    pub fn get(&self, field: QueryField) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == field.wire_name())
            .map(|(_, value)| value.as_str())
    }

    /// The admitted pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Consume into the admitted pairs.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}
