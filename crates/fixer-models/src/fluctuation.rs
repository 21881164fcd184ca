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

//! Rate fluctuation data models

use serde::{Deserialize, Serialize};

/// Change of one currency pair between two dates.
///
/// `change` and `change_pct` are stored as the API returned them, not
/// recomputed from the rates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fluctuation {
  /// Start date (`yyyy-MM-dd`)
  pub start_date: String,

  /// End date (`yyyy-MM-dd`)
  pub end_date: String,

  /// Base currency code
  pub base_currency: String,

  /// Target currency code
  pub target_currency: String,

  /// Rate on the start date
  pub start_rate: f64,

  /// Rate on the end date
  pub end_rate: f64,

  /// Absolute change
  pub change: f64,

  /// Change in percent
  pub change_pct: f64,
}

impl Fluctuation {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    start_date: impl Into<String>,
    end_date: impl Into<String>,
    base_currency: impl Into<String>,
    target_currency: impl Into<String>,
    start_rate: f64,
    end_rate: f64,
    change: f64,
    change_pct: f64,
  ) -> Self {
    Self {
      start_date: start_date.into(),
      end_date: end_date.into(),
      base_currency: base_currency.into(),
      target_currency: target_currency.into(),
      start_rate,
      end_rate,
      change,
      change_pct,
    }
  }
}

/// Pair and dates compare case-insensitively, rates exactly. `change` and
/// `change_pct` do not take part.
impl PartialEq for Fluctuation {
  fn eq(&self, other: &Self) -> bool {
    self.base_currency.eq_ignore_ascii_case(&other.base_currency)
      && self.target_currency.eq_ignore_ascii_case(&other.target_currency)
      && self.start_date.eq_ignore_ascii_case(&other.start_date)
      && self.end_date.eq_ignore_ascii_case(&other.end_date)
      && self.start_rate == other.start_rate
      && self.end_rate == other.end_rate
  }
}
