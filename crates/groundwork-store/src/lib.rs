//! # groundwork-store
//!
//! Infrastructure layer implementing the repository traits from
//! `groundwork-core` with a process-local in-memory store.
//!
//! ## Overview
//!
//! The in-memory implementation is a stand-in for a real persistence
//! backend: contents vanish with the process, there is no versioning and
//! no optimistic concurrency. Swap it for a SQL/ORM-backed implementation
//! by implementing the same trait in a sibling crate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use groundwork_core::traits::ItemRepository;
//! use groundwork_store::InMemoryItemRepository;
//!
//! async fn example() {
//!     let repo = InMemoryItemRepository::new();
//!     let items = repo.find_all().await.unwrap();
//!     assert!(items.is_empty());
//! }
//! ```

pub mod repositories;

// Re-export commonly used types
pub use repositories::InMemoryItemRepository;
