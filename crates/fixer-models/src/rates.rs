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

//! Exchange rate data models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One base/target rate on a given day.
///
/// Returned by the latest, historical and time-series endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRate {
  /// Rate date (`yyyy-MM-dd`)
  pub date: String,

  /// Base currency code
  pub base_currency: String,

  /// Target currency code
  pub target_currency: String,

  /// Units of target currency for one unit of base currency
  pub rate: f64,

  /// Provider timestamp as local date-time, when the response carried one
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timestamp: Option<NaiveDateTime>,
}

impl ExchangeRate {
  pub fn new(
    base_currency: impl Into<String>,
    target_currency: impl Into<String>,
    rate: f64,
    date: impl Into<String>,
    timestamp: Option<NaiveDateTime>,
  ) -> Self {
    Self {
      date: date.into(),
      base_currency: base_currency.into(),
      target_currency: target_currency.into(),
      rate,
      timestamp,
    }
  }

  /// Amount of target currency for `amount` of base currency
  pub fn convert(&self, amount: f64) -> f64 {
    amount * self.rate
  }
}

/// Base, target and date compare case-insensitively; the timestamp is ignored.
impl PartialEq for ExchangeRate {
  fn eq(&self, other: &Self) -> bool {
    self.base_currency.eq_ignore_ascii_case(&other.base_currency)
      && self.target_currency.eq_ignore_ascii_case(&other.target_currency)
      && self.date.eq_ignore_ascii_case(&other.date)
      && self.rate == other.rate
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  #[test]
  fn test_equality() {
    let ts = NaiveDate::from_ymd_opt(2013, 12, 24).unwrap().and_hms_opt(23, 59, 59).unwrap();
    let a = ExchangeRate::new("GBP", "USD", 1.636492, "2013-12-24", Some(ts));
    let b = ExchangeRate::new("gbp", "usd", 1.636492, "2013-12-24", None);
    assert_eq!(a, b);

    let c = ExchangeRate::new("GBP", "USD", 1.636493, "2013-12-24", Some(ts));
    assert_ne!(a, c);
    let d = ExchangeRate::new("GBP", "USD", 1.636492, "2013-12-25", Some(ts));
    assert_ne!(a, d);
  }

  #[test]
  fn test_convert() {
    let rate = ExchangeRate::new("EUR", "USD", 1.5, "2018-02-22", None);
    assert_eq!(rate.convert(10.0), 15.0);
  }

  #[test]
  fn test_serialization_skips_missing_timestamp() {
    let rate = ExchangeRate::new("EUR", "USD", 1.1, "2018-02-22", None);
    let json = serde_json::to_string(&rate).unwrap();
    assert!(!json.contains("timestamp"));
    assert!(json.contains("\"target_currency\":\"USD\""));
  }
}
