use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  error,
  info
};

fn page_default_version() -> u32 {
  1
}

fn page_default_messages_endpoint()
-> String {
  "/ajax_messages".to_string()
}

fn page_default_alert_container_id()
-> String {
  "main-page".to_string()
}

fn page_default_calendar_selector()
-> String {
  "#calendar".to_string()
}

/// Where the page utilities find their endpoints and elements.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct PageConfig {
  #[serde(
    default = "page_default_version"
  )]
  pub version:            u32,
  #[serde(
    default = "page_default_messages_endpoint"
  )]
  pub messages_endpoint:  String,
  /// Element id, without the `#`.
  #[serde(
    default = "page_default_alert_container_id"
  )]
  pub alert_container_id: String,
  /// jQuery selector for the calendar element.
  #[serde(
    default = "page_default_calendar_selector"
  )]
  pub calendar_selector:  String
}

impl Default for PageConfig {
  fn default() -> Self {
    Self {
      version:
        page_default_version(),
      messages_endpoint:
        page_default_messages_endpoint(),
      alert_container_id:
        page_default_alert_container_id(),
      calendar_selector:
        page_default_calendar_selector()
    }
  }
}

impl PageConfig {
  pub fn from_toml(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<PageConfig>(raw)
        .context(
          "failed to parse page config"
        )?;
    sanitize_page_config(&mut config);
    Ok(config)
  }
}

/// Parses the page config, falling back to defaults when it is unreadable.
pub fn load_page_config(
  raw: &str
) -> PageConfig {
  match PageConfig::from_toml(raw) {
    | Ok(config) => {
      info!(
        version = config.version,
        endpoint = %config.messages_endpoint,
        container = %config.alert_container_id,
        calendar = %config.calendar_selector,
        "loaded page config"
      );
      config
    }
    | Err(error) => {
      error!(
        error = %format!("{error:#}"),
        "failed parsing page config; \
         using defaults"
      );
      PageConfig::default()
    }
  }
}

fn sanitize_page_config(
  config: &mut PageConfig
) {
  if config
    .messages_endpoint
    .trim()
    .is_empty()
  {
    config.messages_endpoint =
      page_default_messages_endpoint();
  }

  let container = config
    .alert_container_id
    .trim()
    .trim_start_matches('#')
    .to_string();
  config.alert_container_id =
    if container.is_empty() {
      page_default_alert_container_id()
    } else {
      container
    };

  if config
    .calendar_selector
    .trim()
    .is_empty()
  {
    config.calendar_selector =
      page_default_calendar_selector();
  }
}
