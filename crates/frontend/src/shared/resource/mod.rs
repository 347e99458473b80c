//! Generic list + CRUD machinery shared by every management page.
//!
//! A page is one `Resource` implementation: the entity and draft types, the
//! REST base path, table columns and form fields. `ListState` holds the pure
//! state machine, `ResourceController` drives it against the API and
//! `list_page` / `form` render it.

pub mod controller;
pub mod field;
pub mod form;
pub mod list_page;
pub mod state;

use contracts::domain::entity_ref::EntityRef;
use contracts::enums::status::{EntityStatus, Toggle};
use serde::de::DeserializeOwned;
use serde::Serialize;

use field::FieldSpec;

/// What happens to the table after a successful delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovePolicy {
    /// Drop the row locally, no refetch
    FilterLocal,
    /// Refetch the current page
    Reload,
}

/// How a column value is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    /// Right-aligned amount
    Money,
    /// Muted secondary text
    Muted,
}

pub struct Column<T> {
    pub header: &'static str,
    pub kind: ColumnKind,
    pub render: fn(&T) -> String,
}

impl<T> Column<T> {
    pub fn text(header: &'static str, render: fn(&T) -> String) -> Self {
        Self {
            header,
            kind: ColumnKind::Text,
            render,
        }
    }

    pub fn money(header: &'static str, render: fn(&T) -> String) -> Self {
        Self {
            header,
            kind: ColumnKind::Money,
            render,
        }
    }

    pub fn muted(header: &'static str, render: fn(&T) -> String) -> Self {
        Self {
            header,
            kind: ColumnKind::Muted,
            render,
        }
    }
}

/// One backend-managed entity type exposed under its own REST base path.
pub trait Resource: 'static {
    type Item: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static;
    type Draft: Clone + PartialEq + Default + Serialize + Send + Sync + 'static;
    type Status: Toggle + Send + Sync;

    /// Page id, also used as log prefix
    const KEY: &'static str;
    /// Plural title of the page ("Categories")
    const TITLE: &'static str;
    /// Singular, lower-case element name ("category")
    const ELEMENT: &'static str;

    fn base_path() -> &'static str;

    fn id(item: &Self::Item) -> &str;

    /// Draft for the edit modal, copied from the row
    fn draft_from(item: &Self::Item) -> Self::Draft;

    fn draft_id(draft: &Self::Draft) -> Option<String>;

    fn validate(draft: &Self::Draft) -> Result<(), String>;

    /// Last adjustments before the draft is sent
    fn prepare(_draft: &mut Self::Draft) {}

    /// `needle` is already lower-cased and trimmed
    fn matches_search(item: &Self::Item, needle: &str) -> bool;

    fn columns() -> Vec<Column<Self::Item>>;

    fn fields() -> Vec<FieldSpec<Self::Draft>>;

    /// Short label of the row used in confirmation dialogs
    fn label(item: &Self::Item) -> String {
        Self::id(item).to_string()
    }

    fn can_create() -> bool {
        true
    }

    fn can_edit() -> bool {
        true
    }

    fn can_delete() -> bool {
        true
    }

    fn remove_policy() -> RemovePolicy {
        RemovePolicy::FilterLocal
    }

    fn status(_item: &Self::Item) -> Option<Self::Status> {
        None
    }

    fn set_status(_item: &mut Self::Item, _status: Self::Status) {}

    /// `(code, label)` pairs of the server-side status filter (`?status=`).
    /// Empty means the page has no status dropdown.
    fn status_options() -> Vec<(&'static str, &'static str)> {
        <Self::Status as EntityStatus>::all()
            .iter()
            .map(|s| (s.code(), s.display_name()))
            .collect()
    }

    /// Vendor of the row, for the vendor filter dropdown
    fn vendor_of(_item: &Self::Item) -> Option<EntityRef> {
        None
    }
}

/// Case-insensitive "contains" over several fields of a row
pub fn any_contains(needle: &str, haystacks: &[&str]) -> bool {
    haystacks.iter().any(|h| h.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_contains() {
        assert!(any_contains("lamp", &["Desk Lamp", "Home"]));
        assert!(any_contains("home", &["Desk Lamp", "Home"]));
        assert!(!any_contains("toy", &["Desk Lamp", "Home"]));
    }
}
