/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Request assembly and URL building

use fixer_core::{Endpoint, Error, Field, FieldType, Result};
use tracing::debug;
use url::form_urlencoded::byte_serialize;

/// One call to an endpoint: the base URL plus the supplied parameters in
/// insertion order.
///
/// Parameters form an ordered set keyed by name, case-insensitively. Adding
/// a name that is already present is ignored and the first value wins.
#[derive(Debug, Clone)]
pub struct Request {
  base_url: String,
  endpoint: Endpoint,
  params: Vec<Field>,
}

impl Request {
  pub fn new(base_url: impl Into<String>, endpoint: Endpoint) -> Self {
    Self { base_url: base_url.into(), endpoint, params: Vec::new() }
  }

  /// Add a parameter typed after the endpoint's table entry of the same name.
  /// Names the endpoint does not know are kept as strings and rejected by
  /// [`Request::url`].
  pub fn param(self, name: &str, value: impl Into<String>) -> Self {
    let field = match self.endpoint.descriptor().parameter(name) {
      Some(spec) if !spec.in_query => Field::path_variable(spec.name, value),
      Some(spec) => Field::new(spec.name, value, spec.field_type),
      None => Field::new(name, value, FieldType::String),
    };
    self.field(field)
  }

  /// Add a parameter unless the value is absent or blank
  pub fn optional_param(self, name: &str, value: Option<&str>) -> Self {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
      Some(v) => self.param(name, v),
      None => self,
    }
  }

  pub fn field(mut self, field: Field) -> Self {
    if self.params.contains(&field) {
      debug!("Ignoring duplicate parameter '{}'", field.name());
    } else {
      self.params.push(field);
    }
    self
  }

  pub fn endpoint(&self) -> Endpoint {
    self.endpoint
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub fn params(&self) -> &[Field] {
    &self.params
  }

  /// Validate the parameters against the endpoint and build the URL.
  ///
  /// Query fields are appended as `name=value` in insertion order, a path
  /// variable is put in front of the endpoint path. Names and values are
  /// form-encoded.
  pub fn url(&self) -> Result<String> {
    let descriptor = self.endpoint.descriptor();

    if let Some(missing) = descriptor.mandatory().find(|spec| !self.params.iter().any(|f| spec.matches(f))) {
      return Err(Error::MissingParameter(missing.name.to_string()));
    }
    if let Some(unknown) = self.params.iter().find(|f| !descriptor.authorizes(f)) {
      return Err(Error::UnauthorizedParameter(unknown.name().to_string()));
    }

    let mut path = descriptor.path.to_string();
    let mut query = String::new();
    let mut separator = '?';
    for field in &self.params {
      if field.in_query() {
        query.push(separator);
        query.push_str(&encode(field.name()));
        query.push('=');
        query.push_str(&encode(field.value()));
        separator = '&';
      } else if path.is_empty() {
        path = encode(field.value());
      } else {
        path = format!("{}/{}", encode(field.value()), path);
      }
    }

    Ok(format!("{}/{}{}", self.base_url.trim_end_matches('/'), path, query))
  }
}

/// Form-encode a URL component. Commas stay literal for symbol lists.
fn encode(text: &str) -> String {
  byte_serialize(text.as_bytes()).collect::<String>().replace("%2C", ",")
}

/// The URL with the access key masked, for logs
pub(crate) fn redact(url: &str) -> String {
  match url.find("access_key=") {
    Some(start) => {
      let value_start = start + "access_key=".len();
      let value_end = url[value_start..].find('&').map_or(url.len(), |i| value_start + i);
      format!("{}***{}", &url[..value_start], &url[value_end..])
    }
    None => url.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const BASE: &str = "http://data.fixer.io/api/";

  #[test]
  fn test_latest_url() {
    let url = Request::new(BASE, Endpoint::Latest)
      .param("access_key", "KEY")
      .param("base", "USD")
      .param("symbols", "GBP,JPY")
      .url()
      .unwrap();
    assert_eq!(url, "http://data.fixer.io/api/latest?access_key=KEY&base=USD&symbols=GBP,JPY");
  }

  #[test]
  fn test_historical_date_in_path() {
    let url = Request::new(BASE, Endpoint::Historical)
      .param("access_key", "KEY")
      .param("symbols", "USD,CAD")
      .param("date", "2013-12-24")
      .param("base", "GBP")
      .url()
      .unwrap();
    assert_eq!(url, "http://data.fixer.io/api/2013-12-24?access_key=KEY&symbols=USD,CAD&base=GBP");
  }

  #[test]
  fn test_path_variable_first_keeps_question_mark() {
    let url = Request::new(BASE, Endpoint::Historical)
      .param("date", "2013-12-24")
      .param("access_key", "KEY")
      .url()
      .unwrap();
    assert_eq!(url, "http://data.fixer.io/api/2013-12-24?access_key=KEY");
  }

  #[test]
  fn test_trailing_slash_normalized() {
    for base in ["http://host/api", "http://host/api/", "http://host/api///"] {
      let url = Request::new(base, Endpoint::SupportedSymbols).param("access_key", "K").url().unwrap();
      assert_eq!(url, "http://host/api/symbols?access_key=K");
    }
  }

  #[test]
  fn test_missing_mandatory() {
    let result = Request::new(BASE, Endpoint::TimeSeries)
      .param("access_key", "KEY")
      .param("start_date", "2012-05-01")
      .url();
    match result {
      Err(Error::MissingParameter(name)) => assert_eq!(name, "end_date"),
      other => panic!("Expected MissingParameter, got {:?}", other),
    }
  }

  #[test]
  fn test_unauthorized() {
    let result = Request::new(BASE, Endpoint::SupportedSymbols)
      .param("access_key", "KEY")
      .param("base", "USD")
      .url();
    match result {
      Err(Error::UnauthorizedParameter(name)) => assert_eq!(name, "base"),
      other => panic!("Expected UnauthorizedParameter, got {:?}", other),
    }
  }

  #[test]
  fn test_duplicate_name_first_value_wins() {
    let request = Request::new(BASE, Endpoint::Latest)
      .param("access_key", "KEY")
      .param("base", "USD")
      .param("BASE", "GBP");
    assert_eq!(request.params().len(), 2);
    assert_eq!(request.url().unwrap(), "http://data.fixer.io/api/latest?access_key=KEY&base=USD");
  }

  #[test]
  fn test_blank_optional_skipped() {
    let url = Request::new(BASE, Endpoint::Latest)
      .param("access_key", "KEY")
      .optional_param("symbols", Some("  "))
      .optional_param("base", None)
      .url()
      .unwrap();
    assert_eq!(url, "http://data.fixer.io/api/latest?access_key=KEY");
  }

  #[test]
  fn test_deterministic() {
    let build = || {
      Request::new(BASE, Endpoint::Convert)
        .param("access_key", "KEY")
        .param("from", "GBP")
        .param("to", "JPY")
        .param("amount", "25")
        .url()
        .unwrap()
    };
    assert_eq!(build(), build());
  }

  #[test]
  fn test_param_types_follow_table() {
    let request = Request::new(BASE, Endpoint::Convert).param("AMOUNT", "25").param("extra", "x");
    assert_eq!(request.params()[0].name(), "amount");
    assert_eq!(request.params()[0].field_type(), FieldType::Double);
    assert_eq!(request.params()[1].field_type(), FieldType::String);
  }

  #[test]
  fn test_values_encoded() {
    let url = Request::new(BASE, Endpoint::Latest)
      .param("access_key", "KEY")
      .param("symbols", "USD&callback=evil")
      .param("base", "E UR#")
      .url()
      .unwrap();
    assert_eq!(
      url,
      "http://data.fixer.io/api/latest?access_key=KEY&symbols=USD%26callback%3Devil&base=E+UR%23"
    );
    assert!(!url.contains("&callback="));
  }

  fn sample(field_type: FieldType) -> &'static str {
    match field_type {
      FieldType::Date => "2018-02-22",
      FieldType::Double => "25",
      FieldType::List => "USD,GBP",
      _ => "EUR",
    }
  }

  /// A request for `endpoint` with every parameter but `skip`
  fn request_without(endpoint: Endpoint, skip: Option<&str>) -> Request {
    endpoint
      .descriptor()
      .parameters
      .iter()
      .filter(|p| Some(p.name) != skip)
      .fold(Request::new(BASE, endpoint), |r, p| r.param(p.name, sample(p.field_type)))
  }

  #[test]
  fn test_every_endpoint_validates() {
    for endpoint in Endpoint::ALL {
      let complete = request_without(endpoint, None);
      let url = complete.url().unwrap();
      assert_eq!(url, request_without(endpoint, None).url().unwrap(), "{}", endpoint);
      assert!(url.contains("access_key=EUR"), "{}", endpoint);

      for spec in endpoint.descriptor().mandatory() {
        match request_without(endpoint, Some(spec.name)).url() {
          Err(Error::MissingParameter(name)) => assert_eq!(name, spec.name, "{}", endpoint),
          other => panic!("{}: expected MissingParameter({}), got {:?}", endpoint, spec.name, other),
        }
      }

      match complete.param("callback", "x").url() {
        Err(Error::UnauthorizedParameter(name)) => assert_eq!(name, "callback", "{}", endpoint),
        other => panic!("{}: expected UnauthorizedParameter, got {:?}", endpoint, other),
      }
    }
  }

  #[test]
  fn test_redact() {
    assert_eq!(redact("http://h/latest?access_key=SECRET&base=USD"), "http://h/latest?access_key=***&base=USD");
    assert_eq!(redact("http://h/symbols?access_key=SECRET"), "http://h/symbols?access_key=***");
    assert_eq!(redact("http://h/symbols"), "http://h/symbols");
  }
}
