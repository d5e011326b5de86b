//! Test helpers for integration tests
//!
//! Wires the in-memory store and the service layer together the way a
//! composition root would, without any transport in between.

use std::sync::Arc;

use groundwork_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use groundwork_core::value_objects::IdGenerator;
use groundwork_service::ServiceContext;
use groundwork_store::InMemoryItemRepository;

/// An assembled application: context plus direct handles to its parts
pub struct TestApp {
    pub ctx: ServiceContext,
    pub repo: Arc<InMemoryItemRepository>,
}

/// Assemble a fresh application against an empty in-memory store
pub fn test_app() -> TestApp {
    let repo = Arc::new(InMemoryItemRepository::new());
    let generator = Arc::new(IdGenerator::new(7));
    let ctx = ServiceContext::new(repo.clone(), generator);
    TestApp { ctx, repo }
}

/// Assemble an application honoring the loaded configuration
pub fn test_app_from_config(config: &AppConfig) -> TestApp {
    let repo = Arc::new(InMemoryItemRepository::new());
    let generator = Arc::new(match config.id.node {
        Some(node) => IdGenerator::new(node),
        None => IdGenerator::from_entropy(),
    });
    let ctx = ServiceContext::new(repo.clone(), generator);
    TestApp { ctx, repo }
}

/// Install a quiet tracing subscriber for tests (idempotent)
pub fn init_test_tracing() {
    let _ = try_init_tracing_with_config(TracingConfig::development());
}
