use std::io;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use fetch::HttpFetcher;

mod fetch;
mod report;
mod snapshot;

/// Get PrivatBank cash exchange rates for a currency over the trailing days.
#[derive(Parser)]
struct Cli {
    /// Currency code as listed by the bank (e.g. EUR)
    #[arg(value_name = "CODE")]
    currency_code: String,
    /// Number of trailing days to report
    #[arg(value_name = "DAYS", allow_negative_numbers = true)]
    days: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let today = Utc::now().date_naive();
    report::report(
        &HttpFetcher,
        today,
        &cli.currency_code,
        cli.days,
        &mut io::stdout(),
    )
    .await?;

    Ok(())
}
