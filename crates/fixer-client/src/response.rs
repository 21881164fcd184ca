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

//! Parsed response content and API error classification

use fixer_core::{Error, Field, Result};
use fixer_models::{Currency, ExchangeRate, Fluctuation};

const UNKNOWN_ERROR_TYPE: &str = "Unknown error type";

/// Everything the parser recognised in one response body.
///
/// Metadata fields keep document order, lookups return the first match.
#[derive(Debug, Clone, Default)]
pub struct ResponseData {
  fields: Vec<Field>,
  rates: Vec<ExchangeRate>,
  currencies: Vec<Currency>,
  fluctuations: Vec<Fluctuation>,
}

impl ResponseData {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_field(&mut self, field: Field) {
    self.fields.push(field);
  }

  pub fn add_rate(&mut self, rate: ExchangeRate) {
    self.rates.push(rate);
  }

  pub fn add_currency(&mut self, currency: Currency) {
    self.currencies.push(currency);
  }

  pub fn add_fluctuation(&mut self, fluctuation: Fluctuation) {
    self.fluctuations.push(fluctuation);
  }

  /// First field with this name, case-insensitively
  pub fn field(&self, name: &str) -> Option<&Field> {
    self.fields.iter().find(|f| f.is_named(name))
  }

  /// Value of the first field with this name
  pub fn value(&self, name: &str) -> Option<&str> {
    self.field(name).map(Field::value)
  }

  pub fn fields(&self) -> &[Field] {
    &self.fields
  }

  pub fn rates(&self) -> &[ExchangeRate] {
    &self.rates
  }

  pub fn currencies(&self) -> &[Currency] {
    &self.currencies
  }

  pub fn fluctuations(&self) -> &[Fluctuation] {
    &self.fluctuations
  }

  pub fn into_rates(self) -> Vec<ExchangeRate> {
    self.rates
  }

  pub fn into_currencies(self) -> Vec<Currency> {
    self.currencies
  }

  pub fn into_fluctuations(self) -> Vec<Fluctuation> {
    self.fluctuations
  }

  /// `success` is present and `true`
  pub fn is_success(&self) -> bool {
    self.field("success").is_some_and(Field::as_bool)
  }

  /// Turn a `"success": false` (or missing) response into [`Error::Api`].
  pub fn check_api_error(&self) -> Result<()> {
    if self.is_success() {
      return Ok(());
    }

    let code = self.field("code");
    let error_type = self.field("type");
    if code.is_none() && error_type.is_none() {
      return Err(Error::Api {
        code: 0,
        error_type: "unknown_error_type".to_string(),
        info: "Failed to load data, unknown error".to_string(),
      });
    }

    // A code the API did not send as an integer is reported as 1000
    let code = code.map_or(0, |c| c.as_i32().unwrap_or(1000));
    let error_type = error_type
      .filter(|t| !t.is_blank())
      .map_or_else(|| UNKNOWN_ERROR_TYPE.to_string(), |t| t.value().to_string());
    let info = self
      .field("info")
      .filter(|i| !i.is_blank())
      .map_or_else(|| error_type.clone(), |i| i.value().to_string());

    Err(Error::Api { code, error_type, info })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use fixer_core::FieldType;

  fn data(fields: &[(&str, &str, FieldType)]) -> ResponseData {
    let mut data = ResponseData::new();
    for (name, value, field_type) in fields {
      data.add_field(Field::new(*name, *value, *field_type));
    }
    data
  }

  #[test]
  fn test_success() {
    let ok = data(&[("success", "true", FieldType::Boolean)]);
    assert!(ok.is_success());
    assert!(ok.check_api_error().is_ok());
  }

  #[test]
  fn test_first_field_wins() {
    let d = data(&[("date", "2018-02-22", FieldType::String), ("DATE", "2018-02-23", FieldType::String)]);
    assert_eq!(d.value("Date"), Some("2018-02-22"));
    assert_eq!(d.value("base"), None);
  }

  #[test]
  fn test_api_error_fields() {
    let d = data(&[
      ("success", "false", FieldType::Boolean),
      ("code", "202", FieldType::Integer),
      ("type", "invalid_currency_codes", FieldType::String),
      ("info", "You have provided one or more invalid Currency Codes.", FieldType::String),
    ]);
    match d.check_api_error() {
      Err(Error::Api { code, error_type, info }) => {
        assert_eq!(code, 202);
        assert_eq!(error_type, "invalid_currency_codes");
        assert_eq!(info, "You have provided one or more invalid Currency Codes.");
      }
      other => panic!("Expected Api error, got {:?}", other),
    }
  }

  #[test]
  fn test_api_error_info_falls_back_to_type() {
    let d = data(&[
      ("success", "false", FieldType::Boolean),
      ("code", "101", FieldType::Integer),
      ("type", "missing_access_key", FieldType::String),
      ("info", "  ", FieldType::String),
    ]);
    match d.check_api_error() {
      Err(Error::Api { code, error_type, info }) => {
        assert_eq!(code, 101);
        assert_eq!(error_type, "missing_access_key");
        assert_eq!(info, "missing_access_key");
      }
      other => panic!("Expected Api error, got {:?}", other),
    }
  }

  #[test]
  fn test_api_error_non_integer_code() {
    let d = data(&[("code", "E42", FieldType::Integer)]);
    match d.check_api_error() {
      Err(Error::Api { code, error_type, info }) => {
        assert_eq!(code, 1000);
        assert_eq!(error_type, UNKNOWN_ERROR_TYPE);
        assert_eq!(info, UNKNOWN_ERROR_TYPE);
      }
      other => panic!("Expected Api error, got {:?}", other),
    }
  }

  #[test]
  fn test_unknown_error() {
    let d = data(&[("success", "false", FieldType::Boolean)]);
    match d.check_api_error() {
      Err(Error::Api { code, error_type, .. }) => {
        assert_eq!(code, 0);
        assert_eq!(error_type, "unknown_error_type");
      }
      other => panic!("Expected Api error, got {:?}", other),
    }

    // no success field at all
    assert!(matches!(ResponseData::new().check_api_error(), Err(Error::Api { code: 0, .. })));
  }
}
