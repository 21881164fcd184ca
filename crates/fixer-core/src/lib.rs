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

//! # fixer-core
//!
//! Configuration, errors, the field model and the static endpoint tables
//! shared by the fixer-* crates.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod types;

pub use config::Config;
pub use endpoint::{Endpoint, EndpointDescriptor};
pub use error::{Error, Result};
pub use types::{
  check_date_range, epoch_to_local, format_date, join_symbols, parse_date, Field, FieldType,
  ParameterSpec, DATE_FORMAT,
};

/// Base URL for the Fixer API
pub const FIXER_BASE_URL: &str = "http://data.fixer.io/api/";

/// Base currency when none is configured
pub const DEFAULT_BASE_CURRENCY: &str = "EUR";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
