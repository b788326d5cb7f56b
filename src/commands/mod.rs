//! Backend Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod board;
mod card;
mod user;
mod event;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__BACKEND__"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Turn a rejected invoke promise into the backend's error string
fn invoke_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use board::*;
pub use card::*;
pub use user::*;
pub use event::*;
