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
use serde_json::json;

#[derive(Args, Debug)]
pub struct ConvertCommand {
  /// Currency to convert from
  pub from: String,

  /// Currency to convert to
  pub to: String,

  pub amount: f64,

  /// Day of the rate, today when omitted
  #[arg(short, long, value_parser = parse_day)]
  pub date: Option<NaiveDate>,
}

pub fn execute(client: &mut FixerClient, cmd: ConvertCommand, output: Output) -> Result<()> {
  let result = client
    .convert(&cmd.from, &cmd.to, cmd.amount, cmd.date, None)
    .with_context(|| format!("Failed to convert {} {} to {}", cmd.amount, cmd.from, cmd.to))?;

  let value = json!({ "from": cmd.from, "to": cmd.to, "amount": cmd.amount, "result": result });
  output.emit(&value, [format!("{} {} = {} {}", cmd.amount, cmd.from, result, cmd.to)])
}
