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

//! Schema-free parser for Fixer response bodies
//!
//! Every endpoint answers with the same loose template: flat metadata
//! fields plus at most one nested `rates`, `symbols` or `error` block. The
//! parser tells the shapes apart while streaming tokens, using the field
//! name, the path of enclosing field names and the metadata already read.
//!
//! # Metadata order
//!
//! Rate and fluctuation records are built from metadata read earlier in the
//! same document (`base`, `date`, `start_date`, `end_date`, `timestamp`).
//! The API emits these before the `rates` block. Metadata that has not been
//! seen yet leaves the record field empty and is logged once with `warn!`.

use crate::numeric::decode_f64;
use crate::response::ResponseData;
use crate::tokens::{JsonToken, Scalar, TokenStream};
use chrono::NaiveDateTime;
use fixer_core::{parse_date, Error, Field, FieldType, Result};
use fixer_models::{Currency, ExchangeRate, Fluctuation};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// Metadata field names by type. A name belongs to one table at most.
const FIELD_TABLES: [(FieldType, &[&str]); 5] = [
  (FieldType::Boolean, &["success", "historical", "fluctuation", "timeseries"]),
  (FieldType::Date, &["timestamp"]),
  (FieldType::Integer, &["code"]),
  (FieldType::Double, &["amount", "result"]),
  (FieldType::String, &["date", "base", "from", "to", "info", "start_date", "end_date", "type"]),
];

fn metadata_type(name: &str) -> Option<FieldType> {
  FIELD_TABLES
    .iter()
    .find(|(_, names)| names.iter().any(|n| n.eq_ignore_ascii_case(name)))
    .map(|(field_type, _)| *field_type)
}

/// Parse a raw response body.
///
/// Malformed JSON fails with [`Error::Json`] before any token is classified.
pub fn parse_response(body: &str) -> Result<ResponseData> {
  let document: Value = serde_json::from_str(body)?;
  ResponseParser::new().parse(TokenStream::new(&document))
}

/// Names of the enclosing objects and arrays, one entry per nesting level.
/// Anonymous levels (the root, array elements) hold an empty name.
#[derive(Debug, Default)]
struct PathStack {
  segments: Vec<String>,
}

impl PathStack {
  fn push(&mut self, name: Option<&str>) {
    self.segments.push(name.unwrap_or_default().to_string());
  }

  fn pop(&mut self) {
    self.segments.pop();
  }

  fn depth(&self) -> usize {
    self.segments.len()
  }

  fn named(&self) -> impl Iterator<Item = &str> {
    self.segments.iter().map(String::as_str).filter(|s| !s.is_empty())
  }

  /// Innermost named level
  fn parent(&self) -> Option<&str> {
    self.named().last()
  }

  fn joined(&self) -> String {
    self.named().collect::<Vec<_>>().join("/")
  }
}

/// What a scalar that is not metadata stands for at the current position
#[derive(Debug, Clone, PartialEq)]
enum Block {
  /// Outside `rates` and `symbols`
  Other,
  /// `symbols/<code>`: display name of a currency
  Symbols,
  /// `rates/<code>` or `rates/<date>/<code>`: a rate on `date`
  Rates { date: String },
  /// `rates/<code>/<field>`: part of one fluctuation
  Fluctuation { target: String },
}

#[derive(Debug)]
struct PendingFluctuation {
  depth: usize,
  record: Fluctuation,
}

/// Streaming classifier filling a [`ResponseData`]
#[derive(Debug, Default)]
pub struct ResponseParser {
  path: PathStack,
  data: ResponseData,
  fluctuation: Option<PendingFluctuation>,
  /// Anomalies already logged for this document
  warned: HashSet<&'static str>,
}

impl ResponseParser {
  pub fn new() -> Self {
    Self::default()
  }

  /// Consume a whole token stream
  pub fn parse<'a>(mut self, tokens: impl IntoIterator<Item = JsonToken<'a>>) -> Result<ResponseData> {
    for token in tokens {
      self.consume(token)?;
    }
    Ok(self.finish())
  }

  pub fn consume(&mut self, token: JsonToken<'_>) -> Result<()> {
    match token {
      JsonToken::StartObject { name } | JsonToken::StartArray { name } => {
        self.path.push(name);
      }
      JsonToken::EndObject | JsonToken::EndArray => {
        if self.fluctuation.as_ref().is_some_and(|p| p.depth == self.path.depth()) {
          self.flush_fluctuation();
        }
        self.path.pop();
      }
      JsonToken::Value { name: Some(name), value } => self.on_value(name, value)?,
      JsonToken::Value { name: None, .. } => trace!(path = %self.path.joined(), "skipping unnamed value"),
    }
    Ok(())
  }

  pub fn finish(mut self) -> ResponseData {
    self.flush_fluctuation();
    debug!(
      fields = self.data.fields().len(),
      rates = self.data.rates().len(),
      currencies = self.data.currencies().len(),
      fluctuations = self.data.fluctuations().len(),
      "Parsed response"
    );
    self.data
  }

  fn on_value(&mut self, name: &str, value: Scalar<'_>) -> Result<()> {
    if let Some(field_type) = metadata_type(name) {
      let text = value.text();
      // a key echoed back as its own value is not metadata
      if !text.eq_ignore_ascii_case(name) {
        trace!(name, value = %text, %field_type, "metadata field");
        self.data.add_field(Field::new(name, text, field_type));
        return Ok(());
      }
    }

    match self.block() {
      Block::Other => {}
      Block::Symbols => {
        self.data.add_currency(Currency::new(name, value.text()));
      }
      Block::Rates { date } => {
        let rate = ExchangeRate::new(
          self.metadata("base"),
          name,
          numeric(name, &value)?,
          date,
          self.timestamp(),
        );
        trace!(?rate, "rate");
        self.data.add_rate(rate);
      }
      Block::Fluctuation { target } => self.collect_fluctuation(target, name, &value)?,
    }
    Ok(())
  }

  fn block(&mut self) -> Block {
    if self.path.parent().is_some_and(|p| p.eq_ignore_ascii_case("symbols")) {
      return Block::Symbols;
    }

    let mut named = self.path.named();
    if !named.next().is_some_and(|first| first.eq_ignore_ascii_case("rates")) {
      return Block::Other;
    }
    let below_rates = named.next().map(str::to_string);
    drop(named);

    if let Some(date) = self.data.value("date") {
      return Block::Rates { date: date.to_string() };
    }

    match below_rates {
      Some(segment) if parse_date(&segment).is_ok() => Block::Rates { date: segment },
      Some(_) => Block::Fluctuation { target: self.path.parent().unwrap_or_default().to_string() },
      None => {
        self.warn_once("date", "rates block without a date field, rates will carry an empty date");
        Block::Rates { date: String::new() }
      }
    }
  }

  fn collect_fluctuation(&mut self, target: String, name: &str, value: &Scalar<'_>) -> Result<()> {
    let depth = self.path.depth();
    if self.fluctuation.as_ref().is_some_and(|p| p.depth != depth) {
      self.flush_fluctuation();
    }
    if self.fluctuation.is_none() {
      let record = Fluctuation {
        start_date: self.metadata("start_date"),
        end_date: self.metadata("end_date"),
        base_currency: self.metadata("base"),
        target_currency: target,
        ..Fluctuation::default()
      };
      self.fluctuation = Some(PendingFluctuation { depth, record });
    }

    let slot = match name.to_ascii_lowercase().as_str() {
      "start_rate" => 0,
      "end_rate" => 1,
      "change" => 2,
      "change_pct" => 3,
      _ => {
        trace!(name, "ignoring fluctuation member");
        return Ok(());
      }
    };
    let number = numeric(name, value)?;
    if let Some(pending) = self.fluctuation.as_mut() {
      let record = &mut pending.record;
      match slot {
        0 => record.start_rate = number,
        1 => record.end_rate = number,
        2 => record.change = number,
        _ => record.change_pct = number,
      }
    }
    Ok(())
  }

  fn flush_fluctuation(&mut self) {
    if let Some(pending) = self.fluctuation.take() {
      trace!(fluctuation = ?pending.record, "fluctuation");
      self.data.add_fluctuation(pending.record);
    }
  }

  /// Value of a metadata field read earlier, empty when it has not been seen
  fn metadata(&mut self, name: &'static str) -> String {
    match self.data.value(name) {
      Some(value) => value.to_string(),
      None => {
        let message = format!("'{}' not seen before the 'rates' block, records will carry an empty value", name);
        self.warn_once(name, &message);
        String::new()
      }
    }
  }

  fn warn_once(&mut self, key: &'static str, message: &str) {
    if self.warned.insert(key) {
      warn!("{}", message);
    }
  }

  fn timestamp(&self) -> Option<NaiveDateTime> {
    let field = self.data.field("timestamp").filter(|f| !f.is_blank())?;
    match field.as_datetime() {
      Ok(ts) => Some(ts),
      Err(e) => {
        warn!("Unable to convert timestamp '{}': {}", field.value(), e);
        None
      }
    }
  }
}

fn numeric(name: &str, value: &Scalar<'_>) -> Result<f64> {
  match value {
    Scalar::Number(text) => decode_f64(text),
    Scalar::Text(text) => decode_f64(text),
    Scalar::Bool(_) | Scalar::Null => Err(Error::Parse(format!("'{}' is not numeric", name))),
  }
}
