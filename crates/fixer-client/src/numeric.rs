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

//! Range-checked decoding of JSON numbers into `f64`

use bigdecimal::BigDecimal;
use fixer_core::{Error, Result};
use std::str::FromStr;
use std::sync::LazyLock;

// f64::MAX widened by a relative 1e-6, so decimal renderings of the
// extreme doubles still pass.
static MAX_MAGNITUDE: LazyLock<BigDecimal> = LazyLock::new(|| {
  let max = BigDecimal::from_str(&f64::MAX.to_string()).unwrap_or_default();
  let almost_one = BigDecimal::from_str("1.000001").unwrap_or_default();
  max * almost_one
});

/// Decode the text of a JSON number (or a quoted `NaN`/`Infinity`/`-Infinity`).
///
/// The text is checked against the double range on an arbitrary-precision
/// decimal before any rounding happens.
pub fn decode_f64(text: &str) -> Result<f64> {
  let text = text.trim();
  match text {
    "NaN" => return Ok(f64::NAN),
    "Infinity" => return Ok(f64::INFINITY),
    "-Infinity" => return Ok(f64::NEG_INFINITY),
    _ => {}
  }

  let value = BigDecimal::from_str(text)
    .map_err(|_| Error::Parse(format!("not a numeric value: '{}'", text)))?;
  if value.abs() > *MAX_MAGNITUDE {
    return Err(Error::NumericRange(text.to_string()));
  }

  text.parse::<f64>().map_err(|_| Error::Parse(format!("not a numeric value: '{}'", text)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_plain_numbers() {
    assert_eq!(decode_f64("1.228952").unwrap(), 1.228952);
    assert_eq!(decode_f64("125").unwrap(), 125.0);
    assert_eq!(decode_f64("-0.0038").unwrap(), -0.0038);
    assert_eq!(decode_f64("1.314E+2").unwrap(), 131.4);
  }

  #[test]
  fn test_special_values() {
    assert!(decode_f64("NaN").unwrap().is_nan());
    assert_eq!(decode_f64("Infinity").unwrap(), f64::INFINITY);
    assert_eq!(decode_f64("-Infinity").unwrap(), f64::NEG_INFINITY);
  }

  #[test]
  fn test_out_of_range() {
    assert!(matches!(decode_f64("1.314E+2500"), Err(Error::NumericRange(_))));
    assert!(matches!(decode_f64("-1.314E+2500"), Err(Error::NumericRange(_))));
    assert!(matches!(decode_f64("1.8E+308"), Err(Error::NumericRange(_))));
  }

  #[test]
  fn test_extremes_accepted() {
    assert_eq!(decode_f64(&f64::MAX.to_string()).unwrap(), f64::MAX);
    assert_eq!(decode_f64(&f64::MIN.to_string()).unwrap(), f64::MIN);
    assert_eq!(decode_f64("4.9E-324").unwrap(), 4.9e-324);
  }

  #[test]
  fn test_not_numeric() {
    assert!(matches!(decode_f64("abcdef"), Err(Error::Parse(_))));
    assert!(matches!(decode_f64(""), Err(Error::Parse(_))));
    assert!(matches!(decode_f64("nan"), Err(Error::Parse(_))));
  }
}
