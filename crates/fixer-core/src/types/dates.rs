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

//! Date helpers shared by requests and responses

use crate::error::{Error, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};

/// Fixer's date format, `yyyy-MM-dd`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd` date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(s.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

/// Reject ranges whose start is after their end
pub fn check_date_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
  if start > end {
    return Err(Error::InvalidDateRange { start: format_date(start), end: format_date(end) });
  }
  Ok(())
}

/// Epoch seconds as a local date-time, `None` when out of range or ambiguous
pub fn epoch_to_local(secs: i64) -> Option<NaiveDateTime> {
  Local.timestamp_opt(secs, 0).single().map(|dt| dt.naive_local())
}

/// Join currency codes into the comma-separated `symbols` parameter
pub fn join_symbols<I, S>(symbols: I) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  symbols
    .into_iter()
    .map(|s| s.as_ref().trim().to_string())
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(",")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_date() {
    assert_eq!(parse_date("2013-12-24").unwrap(), NaiveDate::from_ymd_opt(2013, 12, 24).unwrap());
    assert!(matches!(parse_date("2013-13-24"), Err(Error::InvalidDate(_))));
    assert!(matches!(parse_date("24/12/2013"), Err(Error::InvalidDate(_))));
    assert!(matches!(parse_date(""), Err(Error::InvalidDate(_))));
  }

  #[test]
  fn test_date_range() {
    let start = NaiveDate::from_ymd_opt(2018, 2, 25).unwrap();
    let end = NaiveDate::from_ymd_opt(2018, 2, 26).unwrap();
    assert!(check_date_range(start, end).is_ok());
    assert!(check_date_range(start, start).is_ok());
    match check_date_range(end, start) {
      Err(Error::InvalidDateRange { start, end }) => {
        assert_eq!(start, "2018-02-26");
        assert_eq!(end, "2018-02-25");
      }
      other => panic!("Expected InvalidDateRange, got {:?}", other),
    }
  }

  #[test]
  fn test_join_symbols() {
    assert_eq!(join_symbols(["USD", "JPY", " GBP "]), "USD,JPY,GBP");
    assert_eq!(join_symbols(Vec::<String>::new()), "");
  }
}
