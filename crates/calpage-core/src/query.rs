//! Query-string parameter lookup.
//!
//! Lookups follow the form-encoding conventions browsers use for
//! `location.search`: the first `name=value` pair wins, `+` stands for a
//! space, and the value is percent-decoded as UTF-8. Nothing here fails; a
//! missing value, a broken `%` escape or bytes that are not UTF-8 all give
//! the empty string.

use std::borrow::Cow;

use regex::Regex;
use tracing::{
  trace,
  warn
};

/// Returns the decoded value of `name` in `search`, or `""` when absent.
///
/// `search` may carry its leading `?` (as `location.search` does) or not.
/// Matching is case-sensitive and the name is matched literally, so
/// `arr[]` finds `arr[]=5`.
#[tracing::instrument(level = "trace")]
pub fn query_param(
  search: &str,
  name: &str
) -> String {
  let Some(raw) =
    find_raw_value(search, name)
  else {
    trace!("query parameter absent");
    return String::new();
  };

  decode_value(&raw)
}

fn find_raw_value(
  search: &str,
  name: &str
) -> Option<String> {
  let pattern = format!(
    r"[?&]{}=([^&#]*)",
    regex::escape(name)
  );
  let re = Regex::new(&pattern).ok()?;

  // A bare query string without `?` still matches its first pair.
  let haystack: Cow<'_, str> =
    if search.starts_with('?') {
      Cow::Borrowed(search)
    } else {
      Cow::Owned(format!("?{search}"))
    };

  re.captures(&haystack)
    .and_then(|captures| captures.get(1))
    .map(|value| {
      value.as_str().to_string()
    })
}

/// True when some `%` is not followed by two hex digits.
fn has_malformed_escape(
  raw: &str
) -> bool {
  raw.match_indices('%').any(
    |(at, _)| {
      !raw
        .get(at + 1..at + 3)
        .is_some_and(|hex| {
          hex
            .bytes()
            .all(|b| b.is_ascii_hexdigit())
        })
    }
  )
}

fn decode_value(raw: &str) -> String {
  if has_malformed_escape(raw) {
    warn!(
      raw,
      "query parameter has a malformed \
       percent escape"
    );
    return String::new();
  }

  let spaced = raw.replace('+', " ");
  match urlencoding::decode(&spaced) {
    | Ok(decoded) => decoded.into_owned(),
    | Err(error) => {
      warn!(
        %error,
        raw,
        "query parameter is not valid \
         utf-8 after decoding"
      );
      String::new()
    }
  }
}

/// A query string held for repeated lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
  search: String
}

impl QueryParams {
  pub fn new(
    search: impl Into<String>
  ) -> Self {
    Self {
      search: search.into()
    }
  }

  pub fn get(
    &self,
    name: &str
  ) -> String {
    query_param(&self.search, name)
  }
}
