//! Repository traits (ports) - interfaces the infrastructure layer implements

mod repositories;

pub use repositories::{ItemRepository, RepoResult};
