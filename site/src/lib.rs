//! ==============================================================================
//! lib.rs - site front-end
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front-end for the site. renders the site header above
//!     the page body.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser (built with trunk, see index.html)
//!     - header content comes from the shared crate
//!     - navigation links go through leptos_router, so the app sits in a Router
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet};
use leptos_router::components::Router;
use wasm_bindgen::prelude::*;

pub mod components;

use components::SiteHeader;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    log::info!("mounting site v{}", env!("CARGO_PKG_VERSION"));
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

/// page layout: header on top, page body below
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="site-header" href="/style/site_header.css" />
        <Router>
            <SiteHeader />
            <main></main>
        </Router>
    }
}
