//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde/chrono for data).

mod entity;
mod board;
mod card;
mod checklist_item;
mod user;
mod event;

pub use entity::{Entity, DomainError, DomainResult};
pub use board::Board;
pub use card::{Card, CardStatus};
pub use checklist_item::ChecklistItem;
pub use user::{User, UserRole};
pub use event::AgendaEvent;
