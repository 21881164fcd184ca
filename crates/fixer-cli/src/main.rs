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

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{convert::ConvertCommand, rates::RangeCommand, rates::RatesCommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Query the Fixer exchange-rate API", long_about = None)]
#[command(name = "fixer")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Base currency, overrides FIXER_BASE_CURRENCY
  #[arg(short, long, global = true)]
  base: Option<String>,

  /// API base URL, overrides FIXER_BASE_URL
  #[arg(long, global = true)]
  base_url: Option<String>,

  /// Print results as JSON
  #[arg(long, global = true)]
  json: bool,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Most recent rates
  Latest(RatesCommand),

  /// Rates of a past day
  Historical {
    /// Day, yyyy-MM-dd
    #[arg(value_parser = commands::parse_day)]
    date: chrono::NaiveDate,

    #[command(flatten)]
    rates: RatesCommand,
  },

  /// Daily rates between two days
  Timeseries(RangeCommand),

  /// Rate changes between two days
  Fluctuation(RangeCommand),

  /// Convert an amount between two currencies
  Convert(ConvertCommand),

  /// List supported currencies
  Symbols,
}

fn main() -> Result<()> {
  dotenv().ok();

  let cli = Cli::parse();

  // Logs go to stderr so --json output stays clean
  let log_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  let config = config::load(config::Overrides { base: cli.base, base_url: cli.base_url })?;
  let mut client = fixer_client::FixerClient::new(config)?;
  let output = commands::Output { json: cli.json };

  match cli.command {
    Commands::Latest(cmd) => commands::rates::latest(&mut client, cmd, output),
    Commands::Historical { date, rates } => commands::rates::historical(&mut client, date, rates, output),
    Commands::Timeseries(cmd) => commands::rates::time_series(&mut client, cmd, output),
    Commands::Fluctuation(cmd) => commands::rates::fluctuation(&mut client, cmd, output),
    Commands::Convert(cmd) => commands::convert::execute(&mut client, cmd, output),
    Commands::Symbols => commands::symbols::execute(&mut client, output),
  }
}
