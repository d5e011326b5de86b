//! Request DTOs for the item use cases
//!
//! All request DTOs implement `Deserialize` and `Validate` so an outer
//! caller (API layer, CLI, test harness) can screen input early. The
//! services themselves rely on entity construction for enforcement.

use serde::Deserialize;
use validator::Validate;

/// Create item request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
}

/// Rename item request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenameItemRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
}
