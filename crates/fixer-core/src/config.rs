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

//! Configuration management for the Fixer client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the Fixer client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Fixer access key, sent as the `access_key` query parameter
  pub access_key: String,

  /// Base URL for the Fixer API
  pub base_url: String,

  /// Base currency used when an operation does not override it
  pub base_currency: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let access_key = env::var("FIXER_ACCESS_KEY")
      .map_err(|_| Error::ApiKey("FIXER_ACCESS_KEY not set".to_string()))?;

    let base_url = env::var("FIXER_BASE_URL").unwrap_or_else(|_| crate::FIXER_BASE_URL.to_string());

    let base_currency = env::var("FIXER_BASE_CURRENCY")
      .unwrap_or_else(|_| crate::DEFAULT_BASE_CURRENCY.to_string());

    let timeout_secs = env::var("FIXER_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid FIXER_TIMEOUT_SECS".to_string()))?;

    Ok(Config { access_key, base_url, base_currency, timeout_secs })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(access_key: String) -> Self {
    Config {
      access_key,
      base_url: crate::FIXER_BASE_URL.to_string(),
      base_currency: crate::DEFAULT_BASE_CURRENCY.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Check the settings a request cannot be built without.
  pub fn validate(&self) -> Result<()> {
    if self.access_key.trim().is_empty() {
      return Err(Error::ApiKey("access key is blank".to_string()));
    }
    if self.base_currency.trim().is_empty() {
      return Err(Error::Config("base currency is blank".to_string()));
    }
    Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", self.base_url, e)))?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Mutex;

  // Tests below mutate process environment
  static ENV_LOCK: Mutex<()> = Mutex::new(());

  #[test]
  fn test_config_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("FIXER_ACCESS_KEY", "test_key");
    env::remove_var("FIXER_BASE_CURRENCY");
    env::remove_var("FIXER_TIMEOUT_SECS");
    let config = Config::from_env().unwrap();
    assert_eq!(config.access_key, "test_key");
    assert_eq!(config.base_currency, "EUR");
    assert_eq!(config.timeout_secs, 30);
  }

  #[test]
  fn test_config_invalid_timeout() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("FIXER_ACCESS_KEY", "test_key");
    env::set_var("FIXER_TIMEOUT_SECS", "soon");
    let result = Config::from_env();
    env::remove_var("FIXER_TIMEOUT_SECS");
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_validate() {
    assert!(Config::default_with_key("key".to_string()).validate().is_ok());

    let blank_key = Config::default_with_key("  ".to_string());
    assert!(matches!(blank_key.validate(), Err(Error::ApiKey(_))));

    let mut bad_url = Config::default_with_key("key".to_string());
    bad_url.base_url = "not a url".to_string();
    assert!(matches!(bad_url.validate(), Err(Error::Config(_))));
  }
}
