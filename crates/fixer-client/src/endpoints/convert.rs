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

//! Single-amount conversion

use super::{authenticated, base_or_default, FixerRequest};
use crate::request::Request;
use crate::response::ResponseData;
use chrono::{Local, NaiveDate};
use fixer_core::{format_date, Config, Endpoint, Error, Result};

/// Convert `amount` of `from` into `to`, at the rate of `date` (today when absent)
#[derive(Debug, Clone)]
pub struct Convert {
  pub from: String,
  pub to: String,
  pub amount: f64,
  pub date: Option<NaiveDate>,
  pub base: Option<String>,
}

impl FixerRequest for Convert {
  type Output = f64;
  const ENDPOINT: Endpoint = Endpoint::Convert;

  fn build(&self, config: &Config) -> Result<Request> {
    let date = self.date.unwrap_or_else(|| Local::now().date_naive());
    Ok(
      authenticated(config, Self::ENDPOINT)
        .param("base", base_or_default(self.base.as_deref(), config))
        .param("from", self.from.as_str())
        .param("to", self.to.as_str())
        .param("amount", self.amount.to_string())
        .param("date", format_date(date)),
    )
  }

  fn extract(data: ResponseData) -> Result<Self::Output> {
    data.field("result").ok_or_else(|| Error::MissingField("result".to_string()))?.as_f64()
  }
}
