#![allow(warnings)]
//! Finboard Frontend Entry Point

mod app;
mod calendar;
mod commands;
mod components;
mod context;
mod debounce;
mod models;
mod pagination;
mod store;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
