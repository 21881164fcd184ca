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

//! HTTP transport layer for Fixer API requests

use crate::request::redact;
use fixer_core::{Config, Error, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Anything that can fetch a URL and return the body text.
///
/// [`Transport`] is the network implementation; tests substitute in-memory
/// ones.
pub trait HttpGet {
  /// GET `url`. Non-2xx statuses are errors.
  fn get(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP transport over `reqwest`
#[derive(Debug, Clone)]
pub struct Transport {
  client: Client,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("fixer-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, timeout })
  }
}

impl HttpGet for Transport {
  #[instrument(skip_all, fields(url = %redact(url), timeout_secs = self.timeout.as_secs()))]
  fn get(&self, url: &str) -> Result<String> {
    let response = self.client.get(url).send().map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
      error!("Request failed with status: {}", status);
      return Err(Error::HttpStatus {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        url: redact(url),
      });
    }

    let text = response.text().map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;
    debug!("Response body length: {} bytes", text.len());
    Ok(text)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_transport_creation() {
    let mut config = Config::default_with_key("test_key".to_string());
    config.timeout_secs = 5;
    assert!(Transport::new(&config).is_ok());
  }

  #[test]
  fn test_connection_refused_is_http_error() {
    let config = Config::default_with_key("test_key".to_string());
    let transport = Transport::new(&config).unwrap();
    // port 9 (discard) on localhost is not expected to accept connections
    let result = transport.get("http://127.0.0.1:9/latest");
    assert!(matches!(result, Err(Error::Http(_))));
  }
}
