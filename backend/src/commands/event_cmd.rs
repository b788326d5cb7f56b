//! Agenda Commands

use chrono::NaiveDate;

use crate::domain::AgendaEvent;
use crate::repository::Repository;
use crate::AppState;

/// Owner's events between two days inclusive (typically one rendered month)
pub async fn list_events(
    state: &AppState,
    owner_id: u32,
    from: String,
    to: String,
) -> Result<Vec<AgendaEvent>, String> {
    let from: NaiveDate = from.parse().map_err(|_| format!("Invalid date: {}", from))?;
    let to: NaiveDate = to.parse().map_err(|_| format!("Invalid date: {}", to))?;
    state
        .event_repo
        .list_by_range(owner_id, from, to)
        .await
        .map_err(|e| e.to_string())
}

/// Add an event on a day
pub async fn create_event(
    state: &AppState,
    owner_id: u32,
    title: String,
    date: String,
) -> Result<AgendaEvent, String> {
    let date: NaiveDate = date.parse().map_err(|_| format!("Invalid date: {}", date))?;
    state
        .event_repo
        .create(&AgendaEvent::new(0, owner_id, title, date))
        .await
        .map_err(|e| e.to_string())
}

/// Remove an event
pub async fn delete_event(state: &AppState, id: u32) -> Result<(), String> {
    state.event_repo.delete(id).await.map_err(|e| e.to_string())
}
