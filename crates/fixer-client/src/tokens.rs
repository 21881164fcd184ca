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

//! Document-order JSON token stream
//!
//! The response body is validated by `serde_json` (insertion order kept,
//! numbers kept as their original text) and then walked as a flat sequence
//! of structure and scalar tokens, each carrying the name of the field it
//! belongs to.

use serde_json::Value;

/// A scalar JSON value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar<'a> {
  Bool(bool),
  /// Number in its original textual form
  Number(String),
  Text(&'a str),
  Null,
}

impl Scalar<'_> {
  /// Textual form, as a field value
  pub fn text(&self) -> String {
    match self {
      Scalar::Bool(b) => b.to_string(),
      Scalar::Number(n) => n.clone(),
      Scalar::Text(s) => s.to_string(),
      Scalar::Null => String::new(),
    }
  }
}

/// One token of the stream. `name` is the field name the token is the value
/// of, `None` for the root and for array elements.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonToken<'a> {
  StartObject { name: Option<&'a str> },
  EndObject,
  StartArray { name: Option<&'a str> },
  EndArray,
  Value { name: Option<&'a str>, value: Scalar<'a> },
}

enum Frame<'a> {
  Object(serde_json::map::Iter<'a>),
  Array(std::slice::Iter<'a, Value>),
}

/// Iterator over the tokens of a parsed document
pub struct TokenStream<'a> {
  root: Option<&'a Value>,
  stack: Vec<Frame<'a>>,
}

impl<'a> TokenStream<'a> {
  pub fn new(document: &'a Value) -> Self {
    Self { root: Some(document), stack: Vec::new() }
  }

  fn enter(&mut self, name: Option<&'a str>, value: &'a Value) -> JsonToken<'a> {
    match value {
      Value::Object(map) => {
        self.stack.push(Frame::Object(map.iter()));
        JsonToken::StartObject { name }
      }
      Value::Array(items) => {
        self.stack.push(Frame::Array(items.iter()));
        JsonToken::StartArray { name }
      }
      Value::Bool(b) => JsonToken::Value { name, value: Scalar::Bool(*b) },
      Value::Number(n) => JsonToken::Value { name, value: Scalar::Number(n.to_string()) },
      Value::String(s) => JsonToken::Value { name, value: Scalar::Text(s.as_str()) },
      Value::Null => JsonToken::Value { name, value: Scalar::Null },
    }
  }
}

impl<'a> Iterator for TokenStream<'a> {
  type Item = JsonToken<'a>;

  fn next(&mut self) -> Option<Self::Item> {
    if let Some(root) = self.root.take() {
      return Some(self.enter(None, root));
    }

    let next = match self.stack.last_mut()? {
      Frame::Object(fields) => fields.next().map(|(k, v)| (Some(k.as_str()), v)),
      Frame::Array(items) => items.next().map(|v| (None, v)),
    };

    match next {
      Some((name, value)) => Some(self.enter(name, value)),
      None => match self.stack.pop()? {
        Frame::Object(_) => Some(JsonToken::EndObject),
        Frame::Array(_) => Some(JsonToken::EndArray),
      },
    }
  }
}
