/// TabStack - new tab dashboard for tabs, bookmarks, reminders and notes
/// Built with Rust + WASM + Yew

pub mod api;
pub mod board;
pub mod bookmark;
pub mod bridge;
pub mod commands;
pub mod countdown;
pub mod dashboard;
pub mod dnd;
pub mod domain;
pub mod error;
pub mod form;
pub mod metadata;
pub mod projection;
pub mod storage;
pub mod tab_data;
pub mod tree;
pub mod ui;

#[cfg(test)]
mod memory;

pub use api::BrowserApi;
pub use dashboard::Dashboard;
pub use error::{ApiError, DashboardError, FormError};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-exported for the page script
#[wasm_bindgen]
pub fn favicon_url(url: &str) -> Option<String> {
    domain::favicon_url(url)
}

// Start the Yew app for the new tab page
#[wasm_bindgen]
pub fn start_newtab() {
    yew::Renderer::<ui::newtab::App>::new().render();
}
