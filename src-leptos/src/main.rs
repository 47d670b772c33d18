//! Support Desk - Leptos Frontend
//!
//! Client-side rendered entry point; mounts the router onto `<body>`.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use gloo_timers as _;
use js_sys as _;
use leptos_meta as _;
use leptos_router as _;
use url as _;
use wasm_bindgen as _;
use web_sys as _;

use helpdesk_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Support desk frontend starting...");

    mount_to_body(App);
}
