//! The jQuery FullCalendar plugin as a [`CalendarWidget`].

use calpage_core::{
  CalendarWidget,
  refresh_calendar
};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{
  JsCast,
  JsValue
};

use crate::page::page_config;

#[wasm_bindgen]
extern "C" {
  /// A jQuery selection.
  #[derive(Debug, Clone)]
  pub type JQuery;

  #[wasm_bindgen(
    catch,
    js_name = jQuery
  )]
  fn jquery(
    selector: &str
  ) -> Result<JQuery, JsValue>;

  #[wasm_bindgen(
    method,
    catch,
    js_name = fullCalendar
  )]
  fn full_calendar(
    this: &JQuery,
    command: &str
  ) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone)]
pub struct FullCalendar {
  selection: JQuery
}

impl FullCalendar {
  /// Wraps a selection the caller already holds, e.g. `$('#calendar')`.
  pub fn from_selection(
    selection: JsValue
  ) -> Self {
    Self {
      selection: selection
        .unchecked_into()
    }
  }

  pub fn select(
    selector: &str
  ) -> Result<Self, JsValue> {
    Ok(Self {
      selection: jquery(selector)?
    })
  }

  fn command(
    &self,
    command: &str
  ) -> Result<(), JsValue> {
    self
      .selection
      .full_calendar(command)
      .map(|_| ())
  }
}

impl CalendarWidget for FullCalendar {
  type Error = JsValue;

  fn unselect(
    &self
  ) -> Result<(), JsValue> {
    self.command("unselect")
  }

  fn refetch_events(
    &self
  ) -> Result<(), JsValue> {
    self.command("refetchEvents")
  }

  fn rerender_events(
    &self
  ) -> Result<(), JsValue> {
    self.command("rerenderEvents")
  }
}

/// Refreshes the calendar behind `fc`, a jQuery selection. Plugin errors are
/// rethrown to the caller.
#[wasm_bindgen]
pub fn fullcalendar_refresh(
  fc: JsValue
) -> Result<(), JsValue> {
  refresh_calendar(
    &FullCalendar::from_selection(fc)
  )
}

#[wasm_bindgen]
pub fn fullcalendar_refresh_default()
-> Result<(), JsValue> {
  let config = page_config();
  let calendar = FullCalendar::select(
    &config.calendar_selector
  )?;
  refresh_calendar(&calendar)
}
