//! Service context - dependency container for services
//!
//! Holds the repository and id generator the services need. Concrete
//! implementations are chosen by the composition root and injected here.

use std::sync::Arc;

use groundwork_core::traits::ItemRepository;
use groundwork_core::value_objects::{IdGenerator, ItemId};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    item_repo: Arc<dyn ItemRepository>,
    id_generator: Arc<IdGenerator>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(item_repo: Arc<dyn ItemRepository>, id_generator: Arc<IdGenerator>) -> Self {
        Self {
            item_repo,
            id_generator,
        }
    }

    /// Get the item repository
    pub fn item_repo(&self) -> &dyn ItemRepository {
        self.item_repo.as_ref()
    }

    /// Get the id generator
    pub fn id_generator(&self) -> &IdGenerator {
        self.id_generator.as_ref()
    }

    /// Generate a new ItemId
    pub fn generate_id(&self) -> ItemId {
        self.id_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("item_repo", &"dyn ItemRepository")
            .field("id_generator_node", &self.id_generator.node())
            .finish()
    }
}
