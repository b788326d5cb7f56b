//! Finboard Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Async handlers the hosted platform mounts as functions

use std::path::Path;

mod domain;
mod repository;
pub mod commands;

pub use domain::{AgendaEvent, Board, Card, CardStatus, ChecklistItem, DomainError, DomainResult, User, UserRole};
pub use repository::{
    init_db, BoardRepository, CardRepository, ChecklistRepository, DbState, EventRepository,
    OrderedRepository, Repository, SearchableRepository, UserRepository,
};

/// Application state shared across command handlers.
/// All repositories share one connection handle.
pub struct AppState {
    pub db_state: DbState,
    pub board_repo: BoardRepository,
    pub card_repo: CardRepository,
    pub checklist_repo: ChecklistRepository,
    pub user_repo: UserRepository,
    pub event_repo: EventRepository,
}

impl AppState {
    fn from_db(db_state: DbState) -> Self {
        let conn = db_state.conn.clone();
        Self {
            board_repo: BoardRepository::new(conn.clone()),
            card_repo: CardRepository::new(conn.clone()),
            checklist_repo: ChecklistRepository::new(conn.clone()),
            user_repo: UserRepository::new(conn.clone()),
            event_repo: EventRepository::new(conn),
            db_state,
        }
    }
}

/// Open the database, run migrations, and build the shared state.
///
/// `log_dir` is where the rolling logger writes; logging failures are not
/// fatal, a backend without a log file still serves requests.
pub async fn init(db_path: &Path, log_dir: &Path) -> DomainResult<AppState> {
    if let Err(e) = rolling_logger::init_logger(log_dir.to_path_buf(), "Finboard") {
        eprintln!("Failed to init rolling logger: {}", e);
    }

    match init_db(db_path).await {
        Ok(db_state) => {
            let _ = rolling_logger::info(&format!("DB initialized at {}", db_path.display()));
            Ok(AppState::from_db(db_state))
        }
        Err(e) => {
            let _ = rolling_logger::error(&format!("DB init failed: {}", e));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_init_builds_working_state() {
        let log_dir = std::env::temp_dir().join("finboard-test-logs");
        let state = init(&PathBuf::from(":memory:"), &log_dir)
            .await
            .expect("init failed");

        let board = commands::create_board(&state, 1, "First".to_string())
            .await
            .expect("create failed");
        let boards = commands::list_boards(&state, 1).await.expect("list failed");
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].id, board.id);
    }
}
