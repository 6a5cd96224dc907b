use crate::cache::fetch_scrims_cached;
use crate::commands::{now_local, or_tba};
use crate::config::DisplayConfig;
use crate::data_provider::ListingProvider;
use crate::formatting::{format_card, format_header, status_badge};
use crate::status::{classify, non_empty};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use fragzone_api::Scrim;

pub fn format_scrims(scrims: &[Scrim], now: NaiveDateTime, display: &DisplayConfig) -> String {
    let mut output = String::new();
    output.push_str(&format_header("SCRIMS", true, display));
    output.push('\n');

    if scrims.is_empty() {
        output.push_str("No scrims available.\n");
        return output;
    }

    for (i, scrim) in scrims.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        // Scrims are single-day events: no end date, optional start time.
        let status = classify(
            non_empty(&scrim.start_date),
            None,
            non_empty(&scrim.time),
            now,
        );
        let title = if scrim.name.trim().is_empty() {
            "UNKNOWN SCRIM".to_string()
        } else {
            scrim.name.trim().to_uppercase()
        };
        let body = vec![
            format!("Date: {}", or_tba(&scrim.start_date)),
            format!("Time: {}", or_tba(&scrim.time)),
            status_badge(status),
        ];
        output.push_str(&format_card(&title, &body, display));
    }

    output
}

pub async fn run(client: &dyn ListingProvider, display: &DisplayConfig) -> Result<()> {
    let scrims = fetch_scrims_cached(client)
        .await
        .context("Failed to fetch scrims")?;
    print!("{}", format_scrims(&scrims, now_local(), display));
    Ok(())
}
