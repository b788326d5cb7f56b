//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Extension for repositories whose rows form an ordered collection
///
/// `Scope` partitions the table into independent sequences (owner id for
/// boards, (board, status) for cards, card id for checklist items).
#[async_trait]
pub trait OrderedRepository<T: Entity>: Repository<T> {
    type Scope: Send + Sync;

    /// Items of one scope, position ascending, creation time breaking ties
    async fn list_by_scope(&self, scope: &Self::Scope) -> DomainResult<Vec<T>>;

    /// Next free position within a scope (used in create)
    async fn next_position(&self, scope: &Self::Scope) -> DomainResult<i32>;

    /// Persist a full new order for a scope.
    ///
    /// `order` must contain exactly the ids currently in the scope; each id
    /// is assigned its 0-based index as position. Only rows whose position
    /// actually changes are written, so re-committing the same order is a
    /// no-op. Returns the number of rows written.
    async fn reorder(&self, scope: &Self::Scope, order: &[u32]) -> DomainResult<u32>;

    /// Rewrite positions in a scope to be sequential (0, 1, 2, ...)
    async fn reindex(&self, scope: &Self::Scope) -> DomainResult<()>;
}

/// Extension for repositories that support paged text search
#[async_trait]
pub trait SearchableRepository<T: Entity>: Repository<T> {
    /// Search entities by text query, returning one page and the total
    /// match count (for the pagination window)
    async fn search_page(&self, query: &str, limit: u32, offset: u32) -> DomainResult<(Vec<T>, u32)>;
}
