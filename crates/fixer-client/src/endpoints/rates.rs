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

//! Latest, historical and time-series rates

use super::{authenticated, base_or_default, FixerRequest};
use crate::request::Request;
use crate::response::ResponseData;
use chrono::NaiveDate;
use fixer_core::{check_date_range, format_date, Config, Endpoint, Result};
use fixer_models::ExchangeRate;

/// Most recent rates
#[derive(Debug, Clone, Default)]
pub struct LatestRates {
  /// Comma-separated target currencies, all when absent
  pub symbols: Option<String>,
  /// Overrides the configured base currency
  pub base: Option<String>,
}

impl FixerRequest for LatestRates {
  type Output = Vec<ExchangeRate>;
  const ENDPOINT: Endpoint = Endpoint::Latest;

  fn build(&self, config: &Config) -> Result<Request> {
    Ok(
      authenticated(config, Self::ENDPOINT)
        .param("base", base_or_default(self.base.as_deref(), config))
        .optional_param("symbols", self.symbols.as_deref()),
    )
  }

  fn extract(data: ResponseData) -> Result<Self::Output> {
    Ok(data.into_rates())
  }
}

/// Rates at the close of one past day
#[derive(Debug, Clone)]
pub struct HistoricalRates {
  pub date: NaiveDate,
  pub symbols: Option<String>,
  pub base: Option<String>,
}

impl FixerRequest for HistoricalRates {
  type Output = Vec<ExchangeRate>;
  const ENDPOINT: Endpoint = Endpoint::Historical;

  fn build(&self, config: &Config) -> Result<Request> {
    Ok(
      authenticated(config, Self::ENDPOINT)
        .optional_param("symbols", self.symbols.as_deref())
        .param("date", format_date(self.date))
        .param("base", base_or_default(self.base.as_deref(), config)),
    )
  }

  fn extract(data: ResponseData) -> Result<Self::Output> {
    Ok(data.into_rates())
  }
}

/// Daily rates between two dates, inclusive
#[derive(Debug, Clone)]
pub struct TimeSeries {
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub symbols: Option<String>,
  pub base: Option<String>,
}

impl FixerRequest for TimeSeries {
  type Output = Vec<ExchangeRate>;
  const ENDPOINT: Endpoint = Endpoint::TimeSeries;

  fn build(&self, config: &Config) -> Result<Request> {
    check_date_range(self.start_date, self.end_date)?;
    Ok(
      authenticated(config, Self::ENDPOINT)
        .param("start_date", format_date(self.start_date))
        .param("end_date", format_date(self.end_date))
        .optional_param("symbols", self.symbols.as_deref())
        .param("base", base_or_default(self.base.as_deref(), config)),
    )
  }

  fn extract(data: ResponseData) -> Result<Self::Output> {
    Ok(data.into_rates())
  }
}
