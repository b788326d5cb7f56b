//! Board Commands
//!
//! Tab-bar board operations: list per owner, create, rename, delete, and
//! the batched tab reorder.

use crate::domain::Board;
use crate::repository::{OrderedRepository, Repository};
use crate::AppState;

/// List the owner's boards in tab order
pub async fn list_boards(state: &AppState, owner_id: u32) -> Result<Vec<Board>, String> {
    state
        .board_repo
        .list_by_scope(&owner_id)
        .await
        .map_err(|e| e.to_string())
}

/// Create a board at the end of the owner's tab bar
pub async fn create_board(state: &AppState, owner_id: u32, name: String) -> Result<Board, String> {
    state
        .board_repo
        .create(&Board::new(0, owner_id, name, 0))
        .await
        .map_err(|e| e.to_string())
}

/// Rename a board
pub async fn rename_board(state: &AppState, id: u32, name: String) -> Result<Board, String> {
    let mut board = state
        .board_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Board {} not found", id))?;
    board.name = name;
    state.board_repo.update(&board).await.map_err(|e| e.to_string())
}

/// Delete a board and everything on it
pub async fn delete_board(state: &AppState, id: u32) -> Result<(), String> {
    let board = state
        .board_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Board {} not found", id))?;

    state.board_repo.delete(id).await.map_err(|e| e.to_string())?;
    // Close the gap the deleted tab left
    state
        .board_repo
        .reindex(&board.owner_id)
        .await
        .map_err(|e| e.to_string())
}

/// Persist a new tab order; returns the number of rows written
pub async fn reorder_boards(state: &AppState, owner_id: u32, order: Vec<u32>) -> Result<u32, String> {
    state
        .board_repo
        .reorder(&owner_id, &order)
        .await
        .map_err(|e| e.to_string())
}
