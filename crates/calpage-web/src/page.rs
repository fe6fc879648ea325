use calpage_core::{
  PageConfig,
  load_page_config
};
use wasm_bindgen::JsValue;
use web_sys::{
  Document,
  Element,
  Window
};

const PAGE_CONFIG_TOML: &str =
  include_str!("../assets/page.toml");

thread_local! {
  static PAGE_CONFIG: PageConfig =
    load_page_config(PAGE_CONFIG_TOML);
}

pub fn page_config() -> PageConfig {
  PAGE_CONFIG.with(Clone::clone)
}

pub fn window()
-> Result<Window, JsValue> {
  web_sys::window().ok_or_else(|| {
    js_sys::Error::new(
      "no global window"
    )
    .into()
  })
}

pub fn document()
-> Result<Document, JsValue> {
  window()?.document().ok_or_else(
    || {
      js_sys::Error::new(
        "window has no document"
      )
      .into()
    }
  )
}

pub fn element_by_id(
  id: &str
) -> Result<Option<Element>, JsValue> {
  Ok(document()?.get_element_by_id(id))
}

/// `location.search`, or `None` outside a page.
pub fn location_search()
-> Option<String> {
  web_sys::window()
    .and_then(|window| {
      window.location().search().ok()
    })
}
