//! Data transfer objects carrying input into the use cases

pub mod requests;

// Re-export commonly used request types
pub use requests::{CreateItemRequest, RenameItemRequest};
