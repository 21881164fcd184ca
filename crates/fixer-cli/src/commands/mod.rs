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

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

pub mod convert;
pub mod rates;
pub mod symbols;

/// Clap value parser for `yyyy-MM-dd` days
pub fn parse_day(s: &str) -> std::result::Result<NaiveDate, String> {
  fixer_core::parse_date(s).map_err(|e| e.to_string())
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
  pub json: bool,
}

impl Output {
  /// Print `value` as JSON, or each of `lines` otherwise
  pub fn emit<T: Serialize>(&self, value: &T, lines: impl IntoIterator<Item = String>) -> Result<()> {
    if self.json {
      println!("{}", serde_json::to_string_pretty(value)?);
    } else {
      for line in lines {
        println!("{}", line);
      }
    }
    Ok(())
  }
}
