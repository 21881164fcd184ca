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

use thiserror::Error;

/// The main error type for fixer-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// A mandatory endpoint parameter was not supplied
  #[error("Parameter '{0}' is mandatory")]
  MissingParameter(String),

  /// A supplied parameter is not part of the endpoint's parameters
  #[error("Parameter '{0}' is not part of the endpoint's parameters")]
  UnauthorizedParameter(String),

  /// A date argument is not a valid `yyyy-MM-dd` date
  #[error("Invalid date: '{0}'")]
  InvalidDate(String),

  /// Start date after end date
  #[error("Start date {start} cannot be after end date {end}")]
  InvalidDateRange { start: String, end: String },

  /// HTTP transport error (I/O, client construction)
  #[error("HTTP error: {0}")]
  Http(String),

  /// Non-2xx HTTP status
  #[error("HTTP {status} {reason} when loading URL: {url}")]
  HttpStatus { status: u16, reason: String, url: String },

  /// Malformed JSON body
  #[error("Malformed JSON response: {0}")]
  Json(#[from] serde_json::Error),

  /// Well-formed JSON whose content cannot be used
  #[error("Parse error: {0}")]
  Parse(String),

  /// A number beyond the representable double range
  #[error("Double value out of range: {0}")]
  NumericRange(String),

  /// Error reported by the Fixer API (`"success": false`)
  #[error("API error {code} ({error_type}): {info}")]
  Api { code: i32, error_type: String, info: String },

  /// Missing required field in response
  #[error("Missing required field: {0}")]
  MissingField(String),
}

impl Error {
  /// True for errors raised locally before any network call.
  pub fn is_validation(&self) -> bool {
    matches!(
      self,
      Error::MissingParameter(_)
        | Error::UnauthorizedParameter(_)
        | Error::InvalidDate(_)
        | Error::InvalidDateRange { .. }
    )
  }
}

/// Result type alias for fixer-* crates
pub type Result<T> = std::result::Result<T, Error>;
