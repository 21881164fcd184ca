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

//! Named request/response values

use crate::error::{Error, Result};
use crate::types::dates::{epoch_to_local, parse_date};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Semantic type of a [`Field`] value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
  String,
  /// Epoch seconds or `yyyy-MM-dd`
  Date,
  Integer,
  Double,
  Boolean,
  /// Comma-separated values
  List,
}

impl std::fmt::Display for FieldType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FieldType::String => write!(f, "string"),
      FieldType::Date => write!(f, "date"),
      FieldType::Integer => write!(f, "integer"),
      FieldType::Double => write!(f, "double"),
      FieldType::Boolean => write!(f, "boolean"),
      FieldType::List => write!(f, "list"),
    }
  }
}

/// A named value sent to or read back from the Fixer API.
///
/// Identity is the name alone, compared case-insensitively: two fields
/// with the same name and different values are equal. Request validation
/// relies on this for its containment checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
  name: String,
  value: String,
  field_type: FieldType,
  mandatory: bool,
  /// `name=value` in the query string when true, raw URL path segment otherwise
  in_query: bool,
}

impl Field {
  /// A query-string field that is not mandatory
  pub fn new(name: impl Into<String>, value: impl Into<String>, field_type: FieldType) -> Self {
    Self { name: name.into(), value: value.into(), field_type, mandatory: false, in_query: true }
  }

  /// A field carried in the URL path rather than the query string, e.g. the
  /// date of the historical endpoint.
  pub fn path_variable(name: impl Into<String>, value: impl Into<String>) -> Self {
    Self { in_query: false, ..Self::new(name, value, FieldType::String) }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn value(&self) -> &str {
    &self.value
  }

  pub fn field_type(&self) -> FieldType {
    self.field_type
  }

  pub fn is_mandatory(&self) -> bool {
    self.mandatory
  }

  pub fn in_query(&self) -> bool {
    self.in_query
  }

  /// Case-insensitive name comparison
  pub fn is_named(&self, name: &str) -> bool {
    self.name.eq_ignore_ascii_case(name)
  }

  pub fn is_blank(&self) -> bool {
    self.value.trim().is_empty()
  }

  pub fn as_i32(&self) -> Result<i32> {
    self
      .value
      .trim()
      .parse()
      .map_err(|_| Error::Parse(format!("field '{}' is not an integer: '{}'", self.name, self.value)))
  }

  pub fn as_f64(&self) -> Result<f64> {
    self
      .value
      .trim()
      .parse()
      .map_err(|_| Error::Parse(format!("field '{}' is not a number: '{}'", self.name, self.value)))
  }

  /// Only `true` (any case) is true.
  pub fn as_bool(&self) -> bool {
    self.value.trim().eq_ignore_ascii_case("true")
  }

  pub fn as_date(&self) -> Result<NaiveDate> {
    parse_date(&self.value)
  }

  /// Epoch seconds converted to local date-time
  pub fn as_datetime(&self) -> Result<NaiveDateTime> {
    let secs: i64 = self.value.trim().parse().map_err(|_| {
      Error::Parse(format!("field '{}' is not an epoch timestamp: '{}'", self.name, self.value))
    })?;
    epoch_to_local(secs)
      .ok_or_else(|| Error::Parse(format!("timestamp out of range: {}", secs)))
  }

  pub fn as_list(&self) -> Vec<String> {
    self.value.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()
  }
}

impl PartialEq for Field {
  fn eq(&self, other: &Self) -> bool {
    self.name.eq_ignore_ascii_case(&other.name)
  }
}

impl Eq for Field {}

impl Hash for Field {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.name.to_ascii_lowercase().hash(state);
  }
}

/// An authorized parameter of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
  pub name: &'static str,
  pub field_type: FieldType,
  pub mandatory: bool,
  pub in_query: bool,
}

impl ParameterSpec {
  pub const fn mandatory(name: &'static str, field_type: FieldType) -> Self {
    Self { name, field_type, mandatory: true, in_query: true }
  }

  pub const fn optional(name: &'static str, field_type: FieldType) -> Self {
    Self { name, field_type, mandatory: false, in_query: true }
  }

  pub const fn in_path(self) -> Self {
    Self { in_query: false, ..self }
  }

  /// The field template this parameter stands for, with an empty value
  pub fn template(&self) -> Field {
    Field {
      name: self.name.to_string(),
      value: String::new(),
      field_type: self.field_type,
      mandatory: self.mandatory,
      in_query: self.in_query,
    }
  }

  pub fn matches(&self, field: &Field) -> bool {
    field.is_named(self.name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_equality_ignores_value_and_case() {
    let a = Field::new("base", "EUR", FieldType::String);
    let b = Field::new("BASE", "USD", FieldType::String);
    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    assert!(!set.insert(b));
    assert_eq!(set.len(), 1);
  }

  #[test]
  fn test_path_variable() {
    let date = Field::path_variable("date", "2018-02-15");
    assert!(!date.in_query());
    assert!(!date.is_mandatory());
    assert_eq!(date.as_date().unwrap(), NaiveDate::from_ymd_opt(2018, 2, 15).unwrap());
  }

  #[test]
  fn test_typed_accessors() {
    assert_eq!(Field::new("code", "202", FieldType::Integer).as_i32().unwrap(), 202);
    assert!(Field::new("code", "abc", FieldType::Integer).as_i32().is_err());
    assert_eq!(Field::new("result", "3724.305775", FieldType::Double).as_f64().unwrap(), 3724.305775);
    assert!(Field::new("success", "TRUE", FieldType::Boolean).as_bool());
    assert!(!Field::new("success", "yes", FieldType::Boolean).as_bool());
    assert_eq!(
      Field::new("symbols", "USD, JPY,,GBP", FieldType::List).as_list(),
      vec!["USD", "JPY", "GBP"]
    );
  }

  #[test]
  fn test_datetime_is_local() {
    let field = Field::new("timestamp", "1519296206", FieldType::Date);
    assert_eq!(field.as_datetime().unwrap(), epoch_to_local(1519296206).unwrap());
    assert!(Field::new("timestamp", "yesterday", FieldType::Date).as_datetime().is_err());
  }

  #[test]
  fn test_template() {
    let spec = ParameterSpec::mandatory("date", FieldType::Date).in_path();
    let template = spec.template();
    assert!(template.is_mandatory());
    assert!(!template.in_query());
    assert!(template.value().is_empty());
    assert!(spec.matches(&Field::path_variable("DATE", "2018-01-01")));
  }
}
