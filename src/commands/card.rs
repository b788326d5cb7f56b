//! Card and Checklist Commands
//!
//! Frontend bindings for card-related backend commands.

use serde::Serialize;
use crate::models::{Card, ChecklistItem, MonthSummary};
use super::{invoke, invoke_error};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct BoardIdArgs {
    #[serde(rename = "boardId")]
    board_id: u32,
}

#[derive(Serialize)]
pub struct CreateCardArgs<'a> {
    #[serde(rename = "boardId")]
    pub board_id: u32,
    pub title: &'a str,
    pub status: &'a str,
    #[serde(rename = "amountCents")]
    pub amount_cents: Option<i64>,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct UpdateCardArgs<'a> {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(rename = "amountCents", skip_serializing_if = "Option::is_none")]
    amount_cents: Option<i64>,
}

#[derive(Serialize)]
struct ReorderCardsArgs<'a> {
    #[serde(rename = "boardId")]
    board_id: u32,
    status: &'a str,
    order: &'a [u32],
}

#[derive(Serialize)]
struct MoveCardArgs<'a> {
    id: u32,
    #[serde(rename = "newStatus")]
    new_status: &'a str,
    position: i32,
}

#[derive(Serialize)]
struct CardIdArgs {
    #[serde(rename = "cardId")]
    card_id: u32,
}

#[derive(Serialize)]
struct CreateChecklistItemArgs<'a> {
    #[serde(rename = "cardId")]
    card_id: u32,
    text: &'a str,
}

#[derive(Serialize)]
struct ReorderChecklistArgs<'a> {
    #[serde(rename = "cardId")]
    card_id: u32,
    order: &'a [u32],
}

#[derive(Serialize)]
struct MonthArgs {
    year: i32,
    month: u32,
}

// ========================
// Card Commands
// ========================

pub async fn list_cards(board_id: u32) -> Result<Vec<Card>, String> {
    let js_args = serde_wasm_bindgen::to_value(&BoardIdArgs { board_id }).map_err(|e| e.to_string())?;
    let result = invoke("list_cards", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_card(args: &CreateCardArgs<'_>) -> Result<Card, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_card", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_card(id: u32, title: Option<&str>, amount_cents: Option<i64>) -> Result<Card, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateCardArgs { id, title, amount_cents }).map_err(|e| e.to_string())?;
    let result = invoke("update_card", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_card(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_card", js_args).await.map_err(invoke_error)?;
    Ok(())
}

/// Persist a new order within one column. Returns how many rows changed.
pub async fn reorder_cards(board_id: u32, status: &str, order: &[u32]) -> Result<u32, String> {
    let js_args = serde_wasm_bindgen::to_value(&ReorderCardsArgs { board_id, status, order }).map_err(|e| e.to_string())?;
    let result = invoke("reorder_cards", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn move_card(id: u32, new_status: &str, position: i32) -> Result<Card, String> {
    let js_args = serde_wasm_bindgen::to_value(&MoveCardArgs { id, new_status, position }).map_err(|e| e.to_string())?;
    let result = invoke("move_card", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn month_summary(year: i32, month: u32) -> Result<MonthSummary, String> {
    let js_args = serde_wasm_bindgen::to_value(&MonthArgs { year, month }).map_err(|e| e.to_string())?;
    let result = invoke("month_summary", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// ========================
// Checklist Commands
// ========================

pub async fn list_checklist(card_id: u32) -> Result<Vec<ChecklistItem>, String> {
    let js_args = serde_wasm_bindgen::to_value(&CardIdArgs { card_id }).map_err(|e| e.to_string())?;
    let result = invoke("list_checklist", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_checklist_item(card_id: u32, text: &str) -> Result<ChecklistItem, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateChecklistItemArgs { card_id, text }).map_err(|e| e.to_string())?;
    let result = invoke("create_checklist_item", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn toggle_checklist_item(id: u32) -> Result<ChecklistItem, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("toggle_checklist_item", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_checklist_item(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_checklist_item", js_args).await.map_err(invoke_error)?;
    Ok(())
}

/// Persist a new checklist order. Returns how many rows changed.
pub async fn reorder_checklist(card_id: u32, order: &[u32]) -> Result<u32, String> {
    let js_args = serde_wasm_bindgen::to_value(&ReorderChecklistArgs { card_id, order }).map_err(|e| e.to_string())?;
    let result = invoke("reorder_checklist", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
