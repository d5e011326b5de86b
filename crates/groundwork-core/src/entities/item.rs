//! Item entity - the example identity-bearing domain object
//!
//! Identity is assigned at construction and never changes; the name is the
//! only mutable attribute and is re-validated on every write.

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::ItemId;

/// Item entity
///
/// Fields are private so the validating constructor and `rename` are the
/// only paths that produce or change state. A failed construction or
/// mutation leaves nothing behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    created_at: DateTime<Utc>,
}

impl Item {
    /// Create a new Item
    ///
    /// Fails if the id is nil or the name is empty/whitespace-only. The
    /// name is stored exactly as given; trimming is applied only for the
    /// emptiness check.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if id.is_nil() {
            return Err(DomainError::ValidationError(
                "item must have an id".to_string(),
            ));
        }
        let name = name.into();
        Self::validate_name(&name)?;
        Ok(Self {
            id,
            name,
            created_at,
        })
    }

    /// Get the item id
    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Get the item name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the creation timestamp
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Change the name, re-validating it
    ///
    /// On failure the previous name is untouched.
    pub fn rename(&mut self, new_name: impl Into<String>) -> Result<(), DomainError> {
        let new_name = new_name.into();
        Self::validate_name(&new_name)?;
        self.name = new_name;
        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_id() -> ItemId {
        ItemId::new(42)
    }

    #[test]
    fn test_new_item_with_valid_fields() {
        let now = Utc::now();
        let item = Item::new(test_id(), "Widget", now).unwrap();
        assert_eq!(item.id(), test_id());
        assert_eq!(item.name(), "Widget");
        assert_eq!(item.created_at(), now);
    }

    #[test]
    fn test_name_is_stored_literally() {
        // Validation trims, storage does not.
        let item = Item::new(test_id(), "  Widget  ", Utc::now()).unwrap();
        assert_eq!(item.name(), "  Widget  ");
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let err = Item::new(test_id(), "", Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[test]
    fn test_new_rejects_whitespace_only_name() {
        let err = Item::new(test_id(), "   \t ", Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[test]
    fn test_new_rejects_nil_id() {
        let err = Item::new(ItemId::new(0), "Widget", Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[test]
    fn test_rename_with_valid_name() {
        let mut item = Item::new(test_id(), "Widget", Utc::now()).unwrap();
        item.rename("Gadget").unwrap();
        assert_eq!(item.name(), "Gadget");
    }

    #[test]
    fn test_rename_rejects_blank_name_and_keeps_state() {
        let mut item = Item::new(test_id(), "Widget", Utc::now()).unwrap();

        let err = item.rename("  ").unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
        assert_eq!(item.name(), "Widget");
    }

    #[test]
    fn test_id_is_immutable_across_rename() {
        let mut item = Item::new(test_id(), "Widget", Utc::now()).unwrap();
        item.rename("Gadget").unwrap();
        assert_eq!(item.id(), test_id());
    }
}
