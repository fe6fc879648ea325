use calpage_core::QueryParams;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::page::location_search;

/// The current page's query string, or an empty one outside a page.
pub fn current_query() -> QueryParams {
  QueryParams::new(
    location_search().unwrap_or_default()
  )
}

/// Decoded value of `name` in the current page's query string, or `""`.
#[wasm_bindgen]
pub fn get_parameter_by_name(
  name: &str
) -> String {
  current_query().get(name)
}
