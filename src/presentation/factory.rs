//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CheckUseCase, IndexUseCase};
use crate::config::Config;
use crate::infrastructure::InMemoryEntityStore;

/// Type alias for the concrete CheckUseCase with all dependencies
pub type ConcreteCheckUseCase = CheckUseCase<InMemoryEntityStore>;

/// Type alias for the concrete IndexUseCase with all dependencies
pub type ConcreteIndexUseCase = IndexUseCase<InMemoryEntityStore>;

/// Create a check use case backed by a fresh in-memory store
pub fn create_check_use_case(config: Config) -> ConcreteCheckUseCase {
    CheckUseCase::new(config, InMemoryEntityStore::new())
}

/// Create an index use case backed by a fresh in-memory store
pub fn create_index_use_case(config: Config) -> ConcreteIndexUseCase {
    IndexUseCase::new(config, InMemoryEntityStore::new())
}
