use std::io::Write;

use anyhow::Result;
use chrono::{Days, NaiveDate, TimeDelta};

use crate::fetch::Fetch;

const EXCHANGE_RATES_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates";
const DATE_FORMAT: &str = "%d.%m.%Y";

pub fn exchange_url(date: NaiveDate) -> String {
    format!("{EXCHANGE_RATES_URL}?json&date={}", date.format(DATE_FORMAT))
}

/// The `days` dates ending on the day before `today`, oldest first.
/// Zero or negative `days` yields an empty sequence.
pub fn date_sequence(today: NaiveDate, days: i64) -> Result<Vec<NaiveDate>> {
    let window = TimeDelta::try_days(days)
        .ok_or(anyhow::anyhow!("Day count {days} is out of range"))?;
    let start_date = today
        .checked_sub_signed(window)
        .ok_or(anyhow::anyhow!("Can't step {days} days back from {today}"))?;

    let mut dates = Vec::new();
    let mut date = start_date;
    for _ in 0..days {
        dates.push(date);
        date = date
            .checked_add_days(Days::new(1))
            .ok_or(anyhow::anyhow!("Can't get next date for {date}"))?;
    }

    Ok(dates)
}

/// Fetch and print one line per trailing day: the buy/sell rates for
/// `currency_code`, or a note that the day had no usable data. Requests run
/// one at a time; a failed day never stops the days after it.
pub async fn report<F, W>(
    fetcher: &F,
    today: NaiveDate,
    currency_code: &str,
    days: i64,
    out: &mut W,
) -> Result<()>
where
    F: Fetch,
    W: Write,
{
    for date in date_sequence(today, days)? {
        let formatted_date = date.format(DATE_FORMAT).to_string();

        match fetcher.fetch(&exchange_url(date)).await {
            Some(snapshot) => {
                let hit = snapshot
                    .exchange_rate
                    .iter()
                    .find(|rate| rate.currency == currency_code);
                match hit {
                    Some(rate) => writeln!(
                        out,
                        "{currency_code}: buy: {}, sale: {}. Date: {formatted_date}",
                        rate.purchase_rate, rate.sale_rate
                    )?,
                    None => {
                        writeln!(out, "No data available for {currency_code} on {formatted_date}")?
                    }
                }
            }
            None => writeln!(out, "Failed to retrieve data for {formatted_date}")?,
        }
    }

    Ok(())
}
