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

//! Currency symbols and the supported-currency cache

use serde::{Deserialize, Serialize};

/// A currency supported by the Fixer API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
  /// Three-letter currency code
  pub symbol: String,

  /// Name as returned by the API
  pub display_name: String,
}

impl Currency {
  pub fn new(symbol: impl Into<String>, display_name: impl Into<String>) -> Self {
    Self { symbol: symbol.into(), display_name: display_name.into() }
  }
}

impl PartialEq for Currency {
  fn eq(&self, other: &Self) -> bool {
    self.symbol.eq_ignore_ascii_case(&other.symbol)
      && self.display_name.eq_ignore_ascii_case(&other.display_name)
  }
}

impl std::fmt::Display for Currency {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} {}", self.symbol, self.display_name)
  }
}

/// Currencies last retrieved from the supported-symbols endpoint.
///
/// Each successful retrieval replaces the whole list. The cache is a plain
/// owned value; callers sharing it across threads wrap it themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyCache {
  currencies: Vec<Currency>,
}

impl CurrencyCache {
  pub fn new() -> Self {
    Self::default()
  }

  /// Swap in a freshly retrieved list
  pub fn replace(&mut self, currencies: Vec<Currency>) {
    self.currencies = currencies;
  }

  pub fn currencies(&self) -> &[Currency] {
    &self.currencies
  }

  /// Find a currency by code, case-insensitively
  pub fn lookup(&self, symbol: &str) -> Option<&Currency> {
    self.currencies.iter().find(|c| c.symbol.eq_ignore_ascii_case(symbol))
  }

  pub fn len(&self) -> usize {
    self.currencies.len()
  }

  pub fn is_empty(&self) -> bool {
    self.currencies.is_empty()
  }
}

impl From<Vec<Currency>> for CurrencyCache {
  fn from(currencies: Vec<Currency>) -> Self {
    Self { currencies }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_replace_is_wholesale() {
    let mut cache = CurrencyCache::new();
    cache.replace(vec![
      Currency::new("AED", "United Arab Emirates Dirham"),
      Currency::new("AFN", "Afghan Afghani"),
    ]);
    assert_eq!(cache.len(), 2);

    cache.replace(vec![Currency::new("USD", "United States Dollar")]);
    assert_eq!(cache.len(), 1);
    assert!(cache.lookup("AED").is_none());
    assert_eq!(cache.lookup("usd").unwrap().display_name, "United States Dollar");
  }

  #[test]
  fn test_instances_are_isolated() {
    let mut a = CurrencyCache::new();
    let b = CurrencyCache::new();
    a.replace(vec![Currency::new("EUR", "Euro")]);
    assert!(b.is_empty());
  }

  #[test]
  fn test_currency_equality() {
    assert_eq!(Currency::new("eur", "EURO"), Currency::new("EUR", "Euro"));
    assert_ne!(Currency::new("EUR", "Euro"), Currency::new("EUR", "Euro zone"));
  }
}
