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

use anyhow::{Context, Result};
use tracing::debug;

/// Command-line settings layered over the environment
#[derive(Debug, Default)]
pub struct Overrides {
  pub base: Option<String>,
  pub base_url: Option<String>,
}

impl Overrides {
  pub fn apply(self, mut config: fixer_core::Config) -> fixer_core::Config {
    if let Some(base) = self.base.filter(|b| !b.trim().is_empty()) {
      config.base_currency = base.trim().to_uppercase();
    }
    if let Some(base_url) = self.base_url {
      config.base_url = base_url;
    }
    config
  }
}

pub fn load(overrides: Overrides) -> Result<fixer_core::Config> {
  let config = fixer_core::Config::from_env().context("Failed to load configuration from environment")?;
  let config = overrides.apply(config);
  config.validate().context("Invalid configuration")?;
  debug!(base_url = %config.base_url, base_currency = %config.base_currency, "Configuration loaded");
  Ok(config)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_overrides() {
    let config = fixer_core::Config::default_with_key("KEY".to_string());
    let config = Overrides { base: Some("usd".to_string()), base_url: Some("http://localhost:8080/api".to_string()) }
      .apply(config);
    assert_eq!(config.base_currency, "USD");
    assert_eq!(config.base_url, "http://localhost:8080/api");
  }

  #[test]
  fn test_blank_base_ignored() {
    let config = fixer_core::Config::default_with_key("KEY".to_string());
    let config = Overrides { base: Some(" ".to_string()), base_url: None }.apply(config);
    assert_eq!(config.base_currency, "EUR");
    assert_eq!(config.base_url, fixer_core::FIXER_BASE_URL);
  }
}
