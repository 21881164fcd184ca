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

//! Static parameter tables of the Fixer endpoints

use crate::types::field::{Field, FieldType, ParameterSpec};

/// The supported Fixer API endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  Latest,
  Historical,
  TimeSeries,
  Fluctuation,
  Convert,
  SupportedSymbols,
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Endpoint::Latest => write!(f, "latest"),
      Endpoint::Historical => write!(f, "historical"),
      Endpoint::TimeSeries => write!(f, "timeseries"),
      Endpoint::Fluctuation => write!(f, "fluctuation"),
      Endpoint::Convert => write!(f, "convert"),
      Endpoint::SupportedSymbols => write!(f, "symbols"),
    }
  }
}

/// Path segment and authorized parameters of one endpoint
#[derive(Debug, PartialEq, Eq)]
pub struct EndpointDescriptor {
  pub path: &'static str,
  pub parameters: &'static [ParameterSpec],
}

const ACCESS_KEY: ParameterSpec = ParameterSpec::mandatory("access_key", FieldType::String);
const BASE: ParameterSpec = ParameterSpec::optional("base", FieldType::String);
const SYMBOLS: ParameterSpec = ParameterSpec::optional("symbols", FieldType::List);
const START_DATE: ParameterSpec = ParameterSpec::mandatory("start_date", FieldType::Date);
const END_DATE: ParameterSpec = ParameterSpec::mandatory("end_date", FieldType::Date);

static LATEST: EndpointDescriptor =
  EndpointDescriptor { path: "latest", parameters: &[ACCESS_KEY, BASE, SYMBOLS] };

// The date is the whole path
static HISTORICAL: EndpointDescriptor = EndpointDescriptor {
  path: "",
  parameters: &[ACCESS_KEY, ParameterSpec::mandatory("date", FieldType::Date).in_path(), BASE, SYMBOLS],
};

static TIME_SERIES: EndpointDescriptor = EndpointDescriptor {
  path: "timeseries",
  parameters: &[ACCESS_KEY, START_DATE, END_DATE, BASE, SYMBOLS],
};

static FLUCTUATION: EndpointDescriptor = EndpointDescriptor {
  path: "fluctuation",
  parameters: &[ACCESS_KEY, START_DATE, END_DATE, BASE, SYMBOLS],
};

static CONVERT: EndpointDescriptor = EndpointDescriptor {
  path: "convert",
  parameters: &[
    ACCESS_KEY,
    ParameterSpec::mandatory("from", FieldType::String),
    ParameterSpec::mandatory("to", FieldType::String),
    ParameterSpec::mandatory("amount", FieldType::Double),
    ParameterSpec::optional("date", FieldType::Date),
    BASE,
  ],
};

static SUPPORTED_SYMBOLS: EndpointDescriptor =
  EndpointDescriptor { path: "symbols", parameters: &[ACCESS_KEY] };

impl Endpoint {
  pub const ALL: [Endpoint; 6] = [
    Endpoint::Latest,
    Endpoint::Historical,
    Endpoint::TimeSeries,
    Endpoint::Fluctuation,
    Endpoint::Convert,
    Endpoint::SupportedSymbols,
  ];

  pub fn descriptor(&self) -> &'static EndpointDescriptor {
    match self {
      Endpoint::Latest => &LATEST,
      Endpoint::Historical => &HISTORICAL,
      Endpoint::TimeSeries => &TIME_SERIES,
      Endpoint::Fluctuation => &FLUCTUATION,
      Endpoint::Convert => &CONVERT,
      Endpoint::SupportedSymbols => &SUPPORTED_SYMBOLS,
    }
  }
}

impl EndpointDescriptor {
  pub fn mandatory(&self) -> impl Iterator<Item = &'static ParameterSpec> + '_ {
    self.parameters.iter().filter(|p| p.mandatory)
  }

  pub fn authorizes(&self, field: &Field) -> bool {
    self.parameters.iter().any(|p| p.matches(field))
  }

  pub fn parameter(&self, name: &str) -> Option<&'static ParameterSpec> {
    self.parameters.iter().find(|p| p.name.eq_ignore_ascii_case(name))
  }

  /// The authorized parameters as field templates
  pub fn templates(&self) -> Vec<Field> {
    self.parameters.iter().map(ParameterSpec::template).collect()
  }
}
