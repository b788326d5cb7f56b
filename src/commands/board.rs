//! Board Commands
//!
//! Frontend bindings for board-related backend commands.

use serde::Serialize;
use crate::models::Board;
use super::{invoke, invoke_error};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct OwnerIdArgs {
    #[serde(rename = "ownerId")]
    owner_id: u32,
}

#[derive(Serialize)]
struct CreateBoardArgs<'a> {
    #[serde(rename = "ownerId")]
    owner_id: u32,
    name: &'a str,
}

#[derive(Serialize)]
struct RenameBoardArgs<'a> {
    id: u32,
    name: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct ReorderBoardsArgs<'a> {
    #[serde(rename = "ownerId")]
    owner_id: u32,
    order: &'a [u32],
}

// ========================
// Commands
// ========================

pub async fn list_boards(owner_id: u32) -> Result<Vec<Board>, String> {
    let js_args = serde_wasm_bindgen::to_value(&OwnerIdArgs { owner_id }).map_err(|e| e.to_string())?;
    let result = invoke("list_boards", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_board(owner_id: u32, name: &str) -> Result<Board, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateBoardArgs { owner_id, name }).map_err(|e| e.to_string())?;
    let result = invoke("create_board", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn rename_board(id: u32, name: &str) -> Result<Board, String> {
    let js_args = serde_wasm_bindgen::to_value(&RenameBoardArgs { id, name }).map_err(|e| e.to_string())?;
    let result = invoke("rename_board", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_board(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_board", js_args).await.map_err(invoke_error)?;
    Ok(())
}

/// Persist a new tab order. Returns how many rows changed.
pub async fn reorder_boards(owner_id: u32, order: &[u32]) -> Result<u32, String> {
    let js_args = serde_wasm_bindgen::to_value(&ReorderBoardsArgs { owner_id, order }).map_err(|e| e.to_string())?;
    let result = invoke("reorder_boards", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
