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

//! Supported currencies

use super::{authenticated, FixerRequest};
use crate::request::Request;
use crate::response::ResponseData;
use fixer_core::{Config, Endpoint, Result};
use fixer_models::Currency;

/// Every currency the API knows, with its display name
#[derive(Debug, Clone, Copy, Default)]
pub struct SupportedSymbols;

impl FixerRequest for SupportedSymbols {
  type Output = Vec<Currency>;
  const ENDPOINT: Endpoint = Endpoint::SupportedSymbols;

  fn build(&self, config: &Config) -> Result<Request> {
    Ok(authenticated(config, Self::ENDPOINT))
  }

  fn extract(data: ResponseData) -> Result<Self::Output> {
    Ok(data.into_currencies())
  }
}
