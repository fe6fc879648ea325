use calpage_core::{
  Alert,
  AlertContainer,
  Severity,
  prepend_alert
};
use tracing::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

use crate::page::{
  element_by_id,
  page_config
};

/// The element banners are stacked into.
pub struct AlertRegion(Element);

impl AlertRegion {
  /// The configured container, or `None` when the page lacks it.
  pub fn locate()
  -> Result<Option<Self>, JsValue> {
    let config = page_config();
    let element = element_by_id(
      &config.alert_container_id
    )?;
    if element.is_none() {
      warn!(
        container = %config.alert_container_id,
        "alert container missing; \
         dropping banner"
      );
    }
    Ok(element.map(Self))
  }
}

impl AlertContainer for AlertRegion {
  type Error = JsValue;

  fn prepend_html(
    &self,
    html: &str
  ) -> Result<(), JsValue> {
    self
      .0
      .insert_adjacent_html(
        "afterbegin",
        html
      )
  }
}

fn parse_level(level: &str) -> Severity {
  level
    .parse::<Severity>()
    .unwrap_or_else(
      |error: anyhow::Error| {
        warn!(
          %error,
          "falling back to info alert"
        );
        Severity::Info
      }
    )
}

fn show(alert: &Alert) -> Result<(), JsValue> {
  match AlertRegion::locate()? {
    | Some(region) => {
      prepend_alert(&region, alert)
    }
    | None => Ok(())
  }
}

/// Shows `message` as plain text in a dismissible banner.
#[wasm_bindgen]
pub fn display_message(
  message: &str,
  level: &str
) -> Result<(), JsValue> {
  show(&Alert::text(
    message,
    parse_level(level)
  ))
}

/// Like [`display_message`], but `html` is inserted as markup.
#[wasm_bindgen]
pub fn display_message_html(
  html: &str,
  level: &str
) -> Result<(), JsValue> {
  show(&Alert::trusted_html(
    html,
    parse_level(level)
  ))
}
