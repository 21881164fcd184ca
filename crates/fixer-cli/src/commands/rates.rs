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

use super::{parse_day, Output};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use fixer_client::FixerClient;
use fixer_models::{ExchangeRate, Fluctuation};

#[derive(Args, Debug)]
pub struct RatesCommand {
  /// Comma-separated target currencies, all when omitted
  #[arg(short, long)]
  pub symbols: Option<String>,
}

#[derive(Args, Debug)]
pub struct RangeCommand {
  /// First day, yyyy-MM-dd
  #[arg(value_parser = parse_day)]
  pub start_date: NaiveDate,

  /// Last day, yyyy-MM-dd
  #[arg(value_parser = parse_day)]
  pub end_date: NaiveDate,

  #[command(flatten)]
  pub rates: RatesCommand,
}

fn rate_line(rate: &ExchangeRate) -> String {
  format!("{}  {} -> {}  {}", rate.date, rate.base_currency, rate.target_currency, rate.rate)
}

fn fluctuation_line(f: &Fluctuation) -> String {
  format!(
    "{} -> {}  {} .. {}  {} -> {}  change {} ({}%)",
    f.base_currency, f.target_currency, f.start_date, f.end_date, f.start_rate, f.end_rate, f.change, f.change_pct
  )
}

pub fn latest(client: &mut FixerClient, cmd: RatesCommand, output: Output) -> Result<()> {
  let rates = client.latest(cmd.symbols.as_deref(), None).context("Failed to load latest rates")?;
  output.emit(&rates, rates.iter().map(rate_line))
}

pub fn historical(client: &mut FixerClient, date: NaiveDate, cmd: RatesCommand, output: Output) -> Result<()> {
  let rates = client
    .historical(date, cmd.symbols.as_deref(), None)
    .with_context(|| format!("Failed to load rates for {}", date))?;
  output.emit(&rates, rates.iter().map(rate_line))
}

pub fn time_series(client: &mut FixerClient, cmd: RangeCommand, output: Output) -> Result<()> {
  let rates = client
    .time_series(cmd.start_date, cmd.end_date, cmd.rates.symbols.as_deref(), None)
    .context("Failed to load time series")?;
  output.emit(&rates, rates.iter().map(rate_line))
}

pub fn fluctuation(client: &mut FixerClient, cmd: RangeCommand, output: Output) -> Result<()> {
  let fluctuations = client
    .fluctuation(cmd.start_date, cmd.end_date, cmd.rates.symbols.as_deref(), None)
    .context("Failed to load fluctuations")?;
  output.emit(&fluctuations, fluctuations.iter().map(fluctuation_line))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lines() {
    let rate = ExchangeRate::new("EUR", "USD", 1.1, "2018-02-22", None);
    assert_eq!(rate_line(&rate), "2018-02-22  EUR -> USD  1.1");

    let f = Fluctuation::new("2018-02-25", "2018-02-26", "EUR", "USD", 1.228952, 1.232735, 0.0038, 0.3078);
    assert_eq!(
      fluctuation_line(&f),
      "EUR -> USD  2018-02-25 .. 2018-02-26  1.228952 -> 1.232735  change 0.0038 (0.3078%)"
    );
  }
}
