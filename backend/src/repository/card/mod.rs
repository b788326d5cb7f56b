//! Card Repository Module
//!
//! Split into focused operation sets:
//! - card_repo: Core CRUD operations
//! - card_positioning: Column ordering (the synchronizer's store side)

mod card_repo;
mod card_positioning;

pub use card_repo::CardRepository;
pub use card_positioning::{CardColumnOperations, ColumnScope};
