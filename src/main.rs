//! Item Board Frontend Entry Point

mod app;
mod cell;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod filter;
mod models;
mod notify;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
