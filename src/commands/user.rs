//! User Commands
//!
//! Frontend bindings for the admin user directory.

use serde::Serialize;
use crate::models::{User, UserPage};
use super::{invoke, invoke_error};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct SearchUsersArgs<'a> {
    query: &'a str,
    page: u32,
    #[serde(rename = "pageSize")]
    page_size: u32,
}

#[derive(Serialize)]
struct InviteUserArgs<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct SetUserRoleArgs<'a> {
    id: u32,
    role: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

// ========================
// Commands
// ========================

pub async fn search_users(query: &str, page: u32, page_size: u32) -> Result<UserPage, String> {
    let js_args = serde_wasm_bindgen::to_value(&SearchUsersArgs { query, page, page_size }).map_err(|e| e.to_string())?;
    let result = invoke("search_users", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn invite_user(name: &str, email: &str) -> Result<User, String> {
    let js_args = serde_wasm_bindgen::to_value(&InviteUserArgs { name, email }).map_err(|e| e.to_string())?;
    let result = invoke("invite_user", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_user_role(id: u32, role: &str) -> Result<User, String> {
    let js_args = serde_wasm_bindgen::to_value(&SetUserRoleArgs { id, role }).map_err(|e| e.to_string())?;
    let result = invoke("set_user_role", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_user(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_user", js_args).await.map_err(invoke_error)?;
    Ok(())
}
