pub mod alert;
pub mod calendar;
pub mod config;
pub mod messages;
pub mod query;

pub use alert::{
  Alert,
  AlertBody,
  AlertContainer,
  Severity,
  prepend_alert
};
pub use calendar::{
  CalendarWidget,
  refresh_calendar
};
pub use config::{
  PageConfig,
  load_page_config
};
pub use messages::{
  MessageAction,
  MessageSource,
  MessagesPayload,
  poll_messages
};
pub use query::{
  QueryParams,
  query_param
};
