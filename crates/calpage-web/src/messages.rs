use anyhow::{
  anyhow,
  bail
};
use calpage_core::{
  MessageAction,
  MessageSource,
  MessagesPayload,
  poll_messages
};
use gloo::console::log;
use gloo::net::http::Request;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::page::page_config;

pub struct HttpMessageSource {
  endpoint: String
}

impl HttpMessageSource {
  pub fn new(
    endpoint: impl Into<String>
  ) -> Self {
    Self {
      endpoint: endpoint.into()
    }
  }
}

impl MessageSource for HttpMessageSource {
  async fn fetch_messages(
    &self
  ) -> anyhow::Result<MessagesPayload> {
    let response =
      Request::get(&self.endpoint)
        .send()
        .await
        .map_err(|e| {
          anyhow!(
            "GET {} failed: {e}",
            self.endpoint
          )
        })?;

    if !response.ok() {
      bail!(
        "GET {} returned status {}",
        self.endpoint,
        response.status()
      );
    }

    let body =
      response.text().await.map_err(
        |e| {
          anyhow!(
            "failed reading {} body: {e}",
            self.endpoint
          )
        }
      )?;

    MessagesPayload::from_json(&body)
  }
}

fn log_content(content: &Value) {
  let serializer =
    serde_wasm_bindgen::Serializer::
      json_compatible();
  match content.serialize(&serializer)
  {
    | Ok(value) => log!(value),
    | Err(_) => {
      log!(content.to_string())
    }
  }
}

/// Polls the messages endpoint in the background and logs anything pending.
#[wasm_bindgen]
pub fn display_ajax_messages() {
  let endpoint =
    page_config().messages_endpoint;

  wasm_bindgen_futures::spawn_local(
    async move {
      let source =
        HttpMessageSource::new(endpoint);

      match poll_messages(&source).await
      {
        | MessageAction::Log(content) => {
          log_content(&content)
        }
        | MessageAction::Ignore => {}
      }
    }
  );
}
