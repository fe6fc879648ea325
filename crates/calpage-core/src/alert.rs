//! Dismissible alert banners.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Success,
  Info,
  Warning,
  Danger
}

impl Severity {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Success => "success",
      | Self::Info => "info",
      | Self::Warning => "warning",
      | Self::Danger => "danger"
    }
  }

  /// Styling class token, e.g. `alert-success`.
  pub fn css_class(self) -> String {
    format!("alert-{}", self.as_str())
  }
}

impl fmt::Display for Severity {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Severity {
  type Err = anyhow::Error;

  /// Accepts the banner names plus the server framework's message tags
  /// (`error`, `debug`).
  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    match raw
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "success" => Ok(Self::Success),
      | "info" | "debug" => {
        Ok(Self::Info)
      }
      | "warning" => Ok(Self::Warning),
      | "danger" | "error" => {
        Ok(Self::Danger)
      }
      | other => Err(anyhow!(
        "unknown alert level: {other}"
      ))
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum AlertBody {
  /// Plain text, escaped when rendered.
  Text(String),
  /// Markup inserted verbatim. The caller vouches for it.
  TrustedHtml(String)
}

impl AlertBody {
  fn render_into(
    &self,
    out: &mut String
  ) {
    match self {
      | Self::Text(text) => {
        escape_html_into(text, out)
      }
      | Self::TrustedHtml(html) => {
        out.push_str(html)
      }
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Alert {
  pub body:     AlertBody,
  pub severity: Severity
}

impl Alert {
  pub fn new(
    body: AlertBody,
    severity: Severity
  ) -> Self {
    Self { body, severity }
  }

  pub fn text(
    message: impl Into<String>,
    severity: Severity
  ) -> Self {
    Self::new(
      AlertBody::Text(message.into()),
      severity
    )
  }

  pub fn trusted_html(
    html: impl Into<String>,
    severity: Severity
  ) -> Self {
    Self::new(
      AlertBody::TrustedHtml(
        html.into()
      ),
      severity
    )
  }

  /// Banner markup with a close button the page's alert plugin dismisses.
  pub fn to_html(&self) -> String {
    let mut out =
      String::with_capacity(160);
    out.push_str(
      "<div class=\"alert fade in "
    );
    out.push_str(
      &self.severity.css_class()
    );
    out.push_str(
      " alert-dismissible\"><button \
       type=\"button\" class=\"close\" \
       data-dismiss=\"alert\">&times;\
       </button>"
    );
    self.body.render_into(&mut out);
    out.push_str("</div>");
    out
  }
}

/// A page region that stacks banners newest first.
pub trait AlertContainer {
  type Error;

  /// Inserts `html` as the region's first child.
  fn prepend_html(
    &self,
    html: &str
  ) -> Result<(), Self::Error>;
}

/// Renders `alert` and puts it on top of `container`. Every call adds one
/// banner; earlier banners stay below it.
pub fn prepend_alert<C>(
  container: &C,
  alert: &Alert
) -> Result<(), C::Error>
where
  C: AlertContainer + ?Sized
{
  container.prepend_html(&alert.to_html())
}

fn escape_html_into(
  text: &str,
  out: &mut String
) {
  for ch in text.chars() {
    match ch {
      | '&' => out.push_str("&amp;"),
      | '<' => out.push_str("&lt;"),
      | '>' => out.push_str("&gt;"),
      | '"' => out.push_str("&quot;"),
      | '\'' => out.push_str("&#39;"),
      | _ => out.push(ch)
    }
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use super::{
    Alert,
    AlertContainer,
    Severity,
    prepend_alert
  };

  #[derive(Default)]
  struct Region {
    children: RefCell<Vec<String>>
  }

  impl AlertContainer for Region {
    type Error = String;

    fn prepend_html(
      &self,
      html: &str
    ) -> Result<(), String> {
      self
        .children
        .borrow_mut()
        .insert(0, html.to_string());
      Ok(())
    }
  }

  #[test]
  fn each_prepend_adds_one_banner_on_top(
  ) {
    let region = Region::default();

    prepend_alert(
      &region,
      &Alert::text(
        "Saved",
        Severity::Success
      )
    )
    .expect("prepend");
    assert_eq!(
      region.children.borrow().len(),
      1
    );

    prepend_alert(
      &region,
      &Alert::text(
        "Saved",
        Severity::Success
      )
    )
    .expect("prepend again");

    let children =
      region.children.borrow();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0], children[1]);
    assert!(children[0].contains("Saved"));
    assert!(
      children[0]
        .contains("alert-success")
    );
  }

  #[test]
  fn renders_banner_markup() {
    let html = Alert::text(
      "Saved",
      Severity::Success
    )
    .to_html();

    assert_eq!(
      html,
      "<div class=\"alert fade in \
       alert-success alert-dismissible\
       \"><button type=\"button\" \
       class=\"close\" \
       data-dismiss=\"alert\">&times;\
       </button>Saved</div>"
    );
    assert!(
      html
        .split(['"', ' '])
        .any(|token| token
          == "alert-success")
    );
  }

  #[test]
  fn text_bodies_are_escaped() {
    let html = Alert::text(
      "<script>alert('x')</script> & co",
      Severity::Danger
    )
    .to_html();

    assert!(!html.contains("<script>"));
    assert!(html.contains(
      "&lt;script&gt;alert(&#39;x&#39;)\
       &lt;/script&gt; &amp; co"
    ));
  }

  #[test]
  fn trusted_bodies_are_verbatim() {
    let html = Alert::trusted_html(
      "Added slot(s): <b>Mon 9:00</b>",
      Severity::Info
    )
    .to_html();

    assert!(html.contains(
      "Added slot(s): <b>Mon 9:00</b>"
    ));
    assert!(html.contains("alert-info"));
  }

  #[test]
  fn parses_banner_and_server_levels() {
    let cases = [
      ("success", Severity::Success),
      ("info", Severity::Info),
      ("warning", Severity::Warning),
      ("danger", Severity::Danger),
      ("error", Severity::Danger),
      ("debug", Severity::Info),
      (" Warning ", Severity::Warning)
    ];

    for (raw, expected) in cases {
      assert_eq!(
        raw
          .parse::<Severity>()
          .expect("known level"),
        expected,
        "level {raw:?}"
      );
    }
  }

  #[test]
  fn rejects_unknown_level() {
    let err = "critical"
      .parse::<Severity>()
      .expect_err("unknown level");
    assert!(
      err
        .to_string()
        .contains("critical")
    );
  }

  #[test]
  fn severity_serializes_lowercase() {
    let json = serde_json::to_string(
      &Severity::Warning
    )
    .expect("serialize severity");
    assert_eq!(json, "\"warning\"");
  }
}
