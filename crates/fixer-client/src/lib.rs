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

//! # fixer-client
//!
//! Blocking client for the Fixer exchange-rate API.
//!
//! ## Features
//!
//! - Latest, historical and time-series rates
//! - Fluctuations between two dates
//! - Single-amount conversion
//! - Supported currencies, kept in an owned cache
//!
//! ## Example
//!
//! ```rust,no_run
//! use fixer_client::FixerClient;
//! use fixer_core::{parse_date, Config};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let config = Config::from_env()?;
//!   let mut client = FixerClient::new(config)?;
//!
//!   let start = parse_date("2018-02-25")?;
//!   let end = parse_date("2018-02-26")?;
//!   for f in client.fluctuation(start, end, Some("USD,JPY"), None)? {
//!     println!("{} {:+.4}%", f.target_currency, f.change_pct);
//!   }
//!   Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, fixer_core::Error>`. After a failure the
//! client still holds the URL it built and the body it received, see
//! [`FixerClient::last_url`] and [`FixerClient::last_response`].

#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod numeric;
pub mod parser;
pub mod request;
pub mod response;
pub mod tokens;
pub mod transport;

pub use client::FixerClient;
pub use endpoints::{
  convert::Convert,
  fluctuation::Fluctuations,
  rates::{HistoricalRates, LatestRates, TimeSeries},
  symbols::SupportedSymbols,
  FixerRequest,
};
pub use fixer_core::{Config, Error, Result};
pub use fixer_models::*;
pub use parser::{parse_response, ResponseParser};
pub use request::Request;
pub use response::ResponseData;
pub use transport::{HttpGet, Transport};
