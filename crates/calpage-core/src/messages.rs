//! Server-pushed notification messages.
//!
//! The page polls an endpoint whose JSON body may carry ready-to-display
//! message content under `ajax_messages`. The content is opaque here. Today
//! it is only logged; see [`MessageAction`].

use std::future::Future;

use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use serde_json::Value;
use tracing::debug;

#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct MessagesPayload {
  #[serde(default)]
  pub ajax_messages: Option<Value>
}

impl MessagesPayload {
  pub fn from_json(
    raw: &str
  ) -> anyhow::Result<Self> {
    serde_json::from_str(raw).context(
      "failed to decode messages \
       payload"
    )
  }

  /// The message content when it is present and truthy in the JavaScript
  /// sense (`null`, `false`, `0` and `""` count as nothing pending).
  pub fn pending(
    &self
  ) -> Option<&Value> {
    self
      .ajax_messages
      .as_ref()
      .filter(|value| is_truthy(value))
  }
}

fn is_truthy(value: &Value) -> bool {
  match value {
    | Value::Null => false,
    | Value::Bool(flag) => *flag,
    | Value::Number(number) => {
      number
        .as_f64()
        .is_some_and(|n| n != 0.0)
    }
    | Value::String(text) => {
      !text.is_empty()
    }
    | Value::Array(_)
    | Value::Object(_) => true
  }
}

/// What the page should do with a polled payload.
///
/// Message content is only ever logged. Inserting it at the top of the main
/// page region is deliberately not offered until the messaging system is
/// redesigned, so no variant here mutates the page.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageAction {
  Ignore,
  Log(Value)
}

impl MessageAction {
  pub fn from_payload(
    payload: &MessagesPayload
  ) -> Self {
    match payload.pending() {
      | Some(content) => {
        Self::Log(content.clone())
      }
      | None => Self::Ignore
    }
  }
}

/// Something that can fetch the pending messages payload.
pub trait MessageSource {
  fn fetch_messages(
    &self
  ) -> impl Future<
    Output = anyhow::Result<
      MessagesPayload
    >
  >;
}

/// Fetches once and decides what to do with the result.
///
/// A failed fetch is dropped: no retry and no error for the caller.
#[tracing::instrument(skip_all)]
pub async fn poll_messages<S>(
  source: &S
) -> MessageAction
where
  S: MessageSource
{
  match source.fetch_messages().await {
    | Ok(payload) => {
      let action =
        MessageAction::from_payload(
          &payload
        );
      debug!(
        pending = matches!(
          action,
          MessageAction::Log(_)
        ),
        "polled messages"
      );
      action
    }
    | Err(error) => {
      debug!(
        error = %format!("{error:#}"),
        "message poll failed; dropping"
      );
      MessageAction::Ignore
    }
  }
}
