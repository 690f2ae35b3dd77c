// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod prompt;
mod session;

#[cfg(test)]
mod tests;

use clap::Parser;
use hotel_booking::{BookingPolicy, State};
use hotel_booking_domain::{parse_iso_date, today_utc};
use prompt::Prompt;
use session::Session;
use std::io::{self, Write};
use time::Date;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Hotel booking console - register a client and book rooms interactively
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Refuse stays whose check-in date is before today
    #[arg(long)]
    reject_past_check_in: bool,

    /// Date to treat as today (yyyy-MM-dd). Defaults to the current UTC date.
    #[arg(long, value_parser = parse_iso_date)]
    today: Option<Date>,
}

impl Args {
    const fn policy(&self) -> BookingPolicy {
        BookingPolicy {
            reject_past_check_in: self.reject_past_check_in,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Parse command-line arguments
    let args: Args = Args::parse();

    // Logs go to stderr so they never interleave with prompts
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let policy: BookingPolicy = args.policy();
    let today: Date = args.today.unwrap_or_else(today_utc);
    info!(?policy, %today, "starting booking session");

    let prompt: Prompt<io::StdinLock<'static>, io::StdoutLock<'static>> =
        Prompt::new(io::stdin().lock(), io::stdout().lock());
    let (state, prompt): (State, _) = Session::new(prompt, policy, today).run()?;
    let (_stdin, mut stdout) = prompt.into_parts();
    stdout.flush()?;

    info!(
        clients = state.clients_registered(),
        reservations = state.reservations_booked(),
        "booking session finished"
    );
    Ok(())
}
