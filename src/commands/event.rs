//! Agenda Commands
//!
//! Frontend bindings for agenda events.

use serde::Serialize;
use crate::models::AgendaEvent;
use super::{invoke, invoke_error};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ListEventsArgs<'a> {
    #[serde(rename = "ownerId")]
    owner_id: u32,
    from: &'a str,
    to: &'a str,
}

#[derive(Serialize)]
struct CreateEventArgs<'a> {
    #[serde(rename = "ownerId")]
    owner_id: u32,
    title: &'a str,
    date: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

// ========================
// Commands
// ========================

pub async fn list_events(owner_id: u32, from: &str, to: &str) -> Result<Vec<AgendaEvent>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ListEventsArgs { owner_id, from, to }).map_err(|e| e.to_string())?;
    let result = invoke("list_events", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_event(owner_id: u32, title: &str, date: &str) -> Result<AgendaEvent, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateEventArgs { owner_id, title, date }).map_err(|e| e.to_string())?;
    let result = invoke("create_event", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_event(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_event", js_args).await.map_err(invoke_error)?;
    Ok(())
}
