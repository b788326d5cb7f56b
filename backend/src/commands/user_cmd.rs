//! User Commands
//!
//! Admin-view operations: paged search, invite, role change, delete.

use serde::{Deserialize, Serialize};

use crate::domain::{User, UserRole};
use crate::repository::{Repository, SearchableRepository};
use crate::AppState;

/// One page of users plus the total match count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: u32,
}

/// Search users by name or email, one page at a time.
/// An empty query lists everyone.
pub async fn search_users(
    state: &AppState,
    query: String,
    page: u32,
    page_size: u32,
) -> Result<UserPage, String> {
    if page == 0 {
        return Err("Page numbers start at 1".to_string());
    }
    let offset = (page - 1) * page_size;
    let (users, total) = state
        .user_repo
        .search_page(&query, page_size, offset)
        .await
        .map_err(|e| e.to_string())?;
    Ok(UserPage { users, total })
}

/// Create a user record (the platform sends the actual invite email)
pub async fn invite_user(state: &AppState, name: String, email: String) -> Result<User, String> {
    state
        .user_repo
        .create(&User::new(0, name, email, UserRole::Member))
        .await
        .map_err(|e| e.to_string())
}

/// Change a user's role
pub async fn set_user_role(state: &AppState, id: u32, role: String) -> Result<User, String> {
    state
        .user_repo
        .set_role(id, UserRole::from_str(&role))
        .await
        .map_err(|e| e.to_string())
}

/// Remove a user record
pub async fn delete_user(state: &AppState, id: u32) -> Result<(), String> {
    state.user_repo.delete(id).await.map_err(|e| e.to_string())
}
