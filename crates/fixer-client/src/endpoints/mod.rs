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

//! Typed requests, one per Fixer endpoint
//!
//! Each request knows how to turn itself into a [`Request`] (parameters in
//! the order the API documents them) and how to pull its result out of the
//! parsed response.

pub mod convert;
pub mod fluctuation;
pub mod rates;
pub mod symbols;

use crate::request::Request;
use crate::response::ResponseData;
use fixer_core::{Config, Endpoint, Result};

/// A call to one endpoint with a typed result
pub trait FixerRequest {
  /// What the caller gets back from a successful response
  type Output;

  const ENDPOINT: Endpoint;

  /// Build the request. Validation that needs no network happens here.
  fn build(&self, config: &Config) -> Result<Request>;

  /// Pull the result out of a successful response
  fn extract(data: ResponseData) -> Result<Self::Output>;
}

/// A request for `endpoint` carrying the access key
pub(crate) fn authenticated(config: &Config, endpoint: Endpoint) -> Request {
  Request::new(config.base_url.as_str(), endpoint).param("access_key", config.access_key.as_str())
}

/// The base currency to send: the override unless absent or blank
pub(crate) fn base_or_default<'a>(base: Option<&'a str>, config: &'a Config) -> &'a str {
  base.map(str::trim).filter(|b| !b.is_empty()).unwrap_or(config.base_currency.as_str())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_base_or_default() {
    let config = Config::default_with_key("KEY".to_string());
    assert_eq!(base_or_default(None, &config), "EUR");
    assert_eq!(base_or_default(Some(" "), &config), "EUR");
    assert_eq!(base_or_default(Some("USD"), &config), "USD");
  }

  #[test]
  fn test_authenticated() {
    let config = Config::default_with_key("KEY".to_string());
    let request = authenticated(&config, Endpoint::SupportedSymbols);
    assert_eq!(request.url().unwrap(), "http://data.fixer.io/api/symbols?access_key=KEY");
  }
}
