//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod board_repo;
mod card;
mod checklist_repo;
mod user_repo;
mod event_repo;

#[cfg(test)]
mod tests;

pub use traits::{OrderedRepository, Repository, SearchableRepository};
pub use db::{init_db, DbState, SharedConn};
pub use board_repo::BoardRepository;
pub use card::{CardColumnOperations, CardRepository, ColumnScope};
pub use checklist_repo::ChecklistRepository;
pub use user_repo::UserRepository;
pub use event_repo::EventRepository;
