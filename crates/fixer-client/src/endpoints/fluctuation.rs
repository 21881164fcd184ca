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

//! Rate changes between two dates

use super::{authenticated, base_or_default, FixerRequest};
use crate::request::Request;
use crate::response::ResponseData;
use chrono::NaiveDate;
use fixer_core::{check_date_range, format_date, Config, Endpoint, Result};
use fixer_models::Fluctuation;

/// How rates moved between `start_date` and `end_date`
#[derive(Debug, Clone)]
pub struct Fluctuations {
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub symbols: Option<String>,
  pub base: Option<String>,
}

impl FixerRequest for Fluctuations {
  type Output = Vec<Fluctuation>;
  const ENDPOINT: Endpoint = Endpoint::Fluctuation;

  fn build(&self, config: &Config) -> Result<Request> {
    check_date_range(self.start_date, self.end_date)?;
    Ok(
      authenticated(config, Self::ENDPOINT)
        .param("base", base_or_default(self.base.as_deref(), config))
        .param("start_date", format_date(self.start_date))
        .param("end_date", format_date(self.end_date))
        .optional_param("symbols", self.symbols.as_deref()),
    )
  }

  fn extract(data: ResponseData) -> Result<Self::Output> {
    Ok(data.into_fluctuations())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use fixer_core::{parse_date, Error};

  #[test]
  fn test_fluctuation_url() {
    let config = Config::default_with_key("KEY".to_string());
    let request = Fluctuations {
      start_date: parse_date("2018-02-25").unwrap(),
      end_date: parse_date("2018-02-26").unwrap(),
      symbols: Some("USD,JPY".to_string()),
      base: None,
    };
    let url = request.build(&config).unwrap().url().unwrap();
    assert_eq!(
      url,
      "http://data.fixer.io/api/fluctuation?access_key=KEY&base=EUR&start_date=2018-02-25&end_date=2018-02-26&symbols=USD,JPY"
    );
  }

  #[test]
  fn test_same_day_allowed_reversed_rejected() {
    let config = Config::default_with_key("KEY".to_string());
    let day = parse_date("2018-02-25").unwrap();
    let same = Fluctuations { start_date: day, end_date: day, symbols: None, base: None };
    assert!(same.build(&config).is_ok());

    let reversed = Fluctuations { start_date: day, end_date: day.pred_opt().unwrap(), symbols: None, base: None };
    match reversed.build(&config) {
      Err(Error::InvalidDateRange { start, end }) => {
        assert_eq!(start, "2018-02-25");
        assert_eq!(end, "2018-02-24");
      }
      other => panic!("Expected InvalidDateRange, got {:?}", other),
    }
  }
}
