//! Browser bindings for the calendar page utilities.
//!
//! Page scripts call the exported functions directly; everything they need
//! from the page (window, location, the alert container, the calendar's
//! jQuery object) is resolved here and handed to `calpage_core`.

pub mod alerts;
pub mod fullcalendar;
pub mod messages;
pub mod page;
pub mod query;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "calendar page utilities loaded"
  );
}
