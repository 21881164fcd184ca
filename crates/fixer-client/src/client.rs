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

//! The Fixer client facade

use crate::endpoints::convert::Convert;
use crate::endpoints::fluctuation::Fluctuations;
use crate::endpoints::rates::{HistoricalRates, LatestRates, TimeSeries};
use crate::endpoints::symbols::SupportedSymbols;
use crate::endpoints::FixerRequest;
use crate::parser::parse_response;
use crate::request::redact;
use crate::transport::{HttpGet, Transport};
use chrono::NaiveDate;
use fixer_core::{Config, Result};
use fixer_models::{Currency, CurrencyCache, ExchangeRate, Fluctuation};
use tracing::{debug, info, instrument};

/// Main Fixer API client
///
/// Every operation is one blocking HTTP request. The base currency
/// defaults to [`Config::base_currency`] when an operation gets `None` or a
/// blank override.
///
/// # Examples
///
/// ```rust,no_run
/// use fixer_client::FixerClient;
/// use fixer_core::Config;
///
/// let config = Config::from_env().expect("Missing access key");
/// let mut client = FixerClient::new(config).expect("Failed to create client");
///
/// for rate in client.latest(Some("USD,GBP"), None).expect("request failed") {
///   println!("1 {} = {} {}", rate.base_currency, rate.rate, rate.target_currency);
/// }
/// ```
pub struct FixerClient<T: HttpGet = Transport> {
  config: Config,
  transport: T,
  cache: CurrencyCache,
  last_url: Option<String>,
  last_response: Option<String>,
}

impl FixerClient<Transport> {
  /// Create a client over the network transport
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid or the HTTP client
  /// cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Transport::new(&config)?;
    Self::with_transport(config, transport)
  }
}

impl<T: HttpGet> FixerClient<T> {
  pub fn with_transport(config: Config, transport: T) -> Result<Self> {
    config.validate()?;
    Ok(Self { config, transport, cache: CurrencyCache::new(), last_url: None, last_response: None })
  }

  /// Start from an existing currency cache instead of an empty one
  pub fn with_cache(mut self, cache: CurrencyCache) -> Self {
    self.cache = cache;
    self
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Currencies from the last successful [`FixerClient::supported_symbols`]
  pub fn currencies(&self) -> &CurrencyCache {
    &self.cache
  }

  /// URL of the most recent request, set before it was sent
  pub fn last_url(&self) -> Option<&str> {
    self.last_url.as_deref()
  }

  /// Body of the most recent response that was received
  pub fn last_response(&self) -> Option<&str> {
    self.last_response.as_deref()
  }

  /// Run one typed request: build, fetch, parse, check for an API error and
  /// extract the result.
  #[instrument(skip_all, fields(endpoint = %R::ENDPOINT))]
  pub fn execute<R: FixerRequest>(&mut self, request: &R) -> Result<R::Output> {
    let url = request.build(&self.config)?.url()?;
    debug!("Making request to: {}", redact(&url));
    self.last_url = Some(url.clone());
    self.last_response = None;

    let body = self.transport.get(&url)?;
    let data = parse_response(&body);
    self.last_response = Some(body);

    let data = data?;
    data.check_api_error()?;
    R::extract(data)
  }

  /// Most recent rates
  pub fn latest(&mut self, symbols: Option<&str>, base: Option<&str>) -> Result<Vec<ExchangeRate>> {
    self.execute(&LatestRates { symbols: symbols.map(String::from), base: base.map(String::from) })
  }

  /// Rates of a past day
  pub fn historical(
    &mut self,
    date: NaiveDate,
    symbols: Option<&str>,
    base: Option<&str>,
  ) -> Result<Vec<ExchangeRate>> {
    self.execute(&HistoricalRates { date, symbols: symbols.map(String::from), base: base.map(String::from) })
  }

  /// One rate per day and currency between `start_date` and `end_date`
  ///
  /// # Errors
  ///
  /// [`fixer_core::Error::InvalidDateRange`] before any request when
  /// `start_date` is after `end_date`.
  pub fn time_series(
    &mut self,
    start_date: NaiveDate,
    end_date: NaiveDate,
    symbols: Option<&str>,
    base: Option<&str>,
  ) -> Result<Vec<ExchangeRate>> {
    self.execute(&TimeSeries {
      start_date,
      end_date,
      symbols: symbols.map(String::from),
      base: base.map(String::from),
    })
  }

  pub fn fluctuation(
    &mut self,
    start_date: NaiveDate,
    end_date: NaiveDate,
    symbols: Option<&str>,
    base: Option<&str>,
  ) -> Result<Vec<Fluctuation>> {
    self.execute(&Fluctuations {
      start_date,
      end_date,
      symbols: symbols.map(String::from),
      base: base.map(String::from),
    })
  }

  /// Convert `amount` of `from` into `to`
  pub fn convert(
    &mut self,
    from: &str,
    to: &str,
    amount: f64,
    date: Option<NaiveDate>,
    base: Option<&str>,
  ) -> Result<f64> {
    self.execute(&Convert {
      from: from.to_string(),
      to: to.to_string(),
      amount,
      date,
      base: base.map(String::from),
    })
  }

  /// Supported currencies. The cache is replaced with the result.
  pub fn supported_symbols(&mut self) -> Result<Vec<Currency>> {
    let currencies = self.execute(&SupportedSymbols)?;
    self.cache.replace(currencies.clone());
    info!("Cached {} supported currencies", currencies.len());
    Ok(currencies)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use fixer_core::Error;
  use std::cell::RefCell;
  use std::collections::VecDeque;

  /// Replays canned bodies and records the URLs asked for
  #[derive(Default)]
  struct Canned {
    bodies: RefCell<VecDeque<Result<String>>>,
    urls: RefCell<Vec<String>>,
  }

  impl Canned {
    fn with(bodies: &[&str]) -> Self {
      let canned = Self::default();
      canned.bodies.borrow_mut().extend(bodies.iter().map(|b| Ok(b.to_string())));
      canned
    }
  }

  impl HttpGet for Canned {
    fn get(&self, url: &str) -> Result<String> {
      self.urls.borrow_mut().push(url.to_string());
      self.bodies.borrow_mut().pop_front().unwrap_or_else(|| Err(Error::Http("no canned body".to_string())))
    }
  }

  fn client(bodies: &[&str]) -> FixerClient<Canned> {
    let config = Config::default_with_key("KEY".to_string());
    FixerClient::with_transport(config, Canned::with(bodies)).unwrap()
  }

  fn date(s: &str) -> NaiveDate {
    fixer_core::parse_date(s).unwrap()
  }

  #[test]
  fn test_latest() {
    let mut client = client(&[
      r#"{"success":true,"timestamp":1519296206,"base":"EUR","date":"2018-02-22","rates":{"USD":1.23,"GBP":0.88}}"#,
    ]);
    let rates = client.latest(Some("USD,GBP"), None).unwrap();
    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0], ExchangeRate::new("EUR", "USD", 1.23, "2018-02-22", None));
    assert_eq!(client.last_url(), Some("http://data.fixer.io/api/latest?access_key=KEY&base=EUR&symbols=USD,GBP"));
    assert!(client.last_response().unwrap().contains("\"GBP\":0.88"));
  }

  #[test]
  fn test_validation_error_sends_nothing() {
    let mut client = client(&[]);
    let result = client.time_series(date("2012-05-25"), date("2012-05-01"), None, None);
    assert!(matches!(result, Err(Error::InvalidDateRange { .. })));
    assert!(client.transport.urls.borrow().is_empty());
    assert!(client.last_url().is_none());
  }

  #[test]
  fn test_api_error_keeps_post_mortem_state() {
    let body = r#"{"success":false,"error":{"code":101,"type":"invalid_access_key","info":"You have not supplied a valid API Access Key."}}"#;
    let mut client = client(&[body]);
    match client.latest(None, None) {
      Err(Error::Api { code, error_type, .. }) => {
        assert_eq!(code, 101);
        assert_eq!(error_type, "invalid_access_key");
      }
      other => panic!("Expected Api error, got {:?}", other),
    }
    assert_eq!(client.last_response(), Some(body));
    assert!(client.last_url().unwrap().ends_with("latest?access_key=KEY&base=EUR"));
  }

  #[test]
  fn test_malformed_body_kept() {
    let mut client = client(&["<html>Bad gateway</html>"]);
    assert!(matches!(client.supported_symbols(), Err(Error::Json(_))));
    assert_eq!(client.last_response(), Some("<html>Bad gateway</html>"));
    assert!(client.currencies().is_empty());
  }

  #[test]
  fn test_supported_symbols_replaces_cache() {
    let mut client = client(&[
      r#"{"success":true,"symbols":{"AED":"United Arab Emirates Dirham","AFN":"Afghan Afghani"}}"#,
      r#"{"success":true,"symbols":{"USD":"United States Dollar"}}"#,
    ])
    .with_cache(CurrencyCache::from(vec![Currency::new("XXX", "Placeholder")]));

    client.supported_symbols().unwrap();
    assert_eq!(client.currencies().len(), 2);
    assert!(client.currencies().lookup("xxx").is_none());
    assert_eq!(client.currencies().lookup("aed").unwrap().display_name, "United Arab Emirates Dirham");

    let second = client.supported_symbols().unwrap();
    assert_eq!(second, vec![Currency::new("USD", "United States Dollar")]);
    assert_eq!(client.currencies().currencies(), second.as_slice());
  }

  #[test]
  fn test_failed_symbols_call_keeps_cache() {
    let mut client = client(&[r#"{"success":true,"symbols":{"USD":"United States Dollar"}}"#, r#"{"success":false}"#]);
    client.supported_symbols().unwrap();
    assert!(client.supported_symbols().is_err());
    assert_eq!(client.currencies().len(), 1);
  }

  #[test]
  fn test_convert() {
    let mut client = client(&[
      r#"{"success":true,"query":{"from":"GBP","to":"JPY","amount":25},"info":{"timestamp":1519328414,"rate":148.972231},"historical":"","date":"2018-02-22","result":3724.305775}"#,
      r#"{"success":true,"date":"2018-02-22"}"#,
    ]);
    let result = client.convert("GBP", "JPY", 25.0, Some(date("2018-02-22")), None).unwrap();
    assert_eq!(result, 3724.305775);
    assert!(matches!(
      client.convert("GBP", "JPY", 25.0, Some(date("2018-02-22")), None),
      Err(Error::MissingField(_))
    ));
  }

  #[test]
  fn test_base_override() {
    let mut client = client(&[r#"{"success":true,"base":"USD","date":"2013-12-24","rates":{"CAD":1.06}}"#]);
    let rates = client.historical(date("2013-12-24"), Some("CAD"), Some("USD")).unwrap();
    assert_eq!(rates, vec![ExchangeRate::new("USD", "CAD", 1.06, "2013-12-24", None)]);
    assert_eq!(client.last_url(), Some("http://data.fixer.io/api/2013-12-24?access_key=KEY&symbols=CAD&base=USD"));
  }

  #[test]
  fn test_fluctuation() {
    let mut client = client(&[
      r#"{"success":true,"fluctuation":true,"start_date":"2018-02-25","end_date":"2018-02-26","base":"EUR",
        "rates":{"USD":{"start_rate":1.228952,"end_rate":1.232735,"change":0.0038,"change_pct":0.3078}}}"#,
    ]);
    let f = client.fluctuation(date("2018-02-25"), date("2018-02-26"), Some("USD"), None).unwrap();
    assert_eq!(f.len(), 1);
    assert_eq!(f[0].change_pct, 0.3078);
  }

  #[test]
  fn test_invalid_config_rejected() {
    let config = Config::default_with_key("  ".to_string());
    assert!(matches!(FixerClient::with_transport(config, Canned::default()), Err(Error::ApiKey(_))));
  }
}
