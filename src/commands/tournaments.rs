use crate::cache::{fetch_tournament_details_cached, fetch_tournaments_cached};
use crate::commands::{now_local, or_tba};
use crate::config::DisplayConfig;
use crate::data_provider::ListingProvider;
use crate::formatting::{format_card, format_header, status_badge};
use crate::status::{classify, non_empty};
use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use fragzone_api::{Tournament, TournamentDetail};

pub fn format_tournaments(
    tournaments: &[Tournament],
    now: NaiveDateTime,
    display: &DisplayConfig,
) -> String {
    let mut output = String::new();
    output.push_str(&format_header("TOURNAMENTS", true, display));
    output.push('\n');

    if tournaments.is_empty() {
        output.push_str("No tournaments available.\n");
        return output;
    }

    for (i, t) in tournaments.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let status = classify(
            non_empty(&t.start_date),
            non_empty(&t.end_date),
            None,
            now,
        );
        let title = if t.name.trim().is_empty() {
            "UNKNOWN TOURNAMENT".to_string()
        } else {
            t.name.trim().to_uppercase()
        };
        let slots = match t.slots {
            Some(n) => n.to_string(),
            None => "Limited".to_string(),
        };
        let body = vec![
            format!("Dates: {} - {}", or_tba(&t.start_date), or_tba(&t.end_date)),
            format!("Slots: {}", slots),
            status_badge(status),
        ];
        output.push_str(&format_card(&title, &body, display));
    }

    output
}

pub fn format_tournament_detail(
    detail: &TournamentDetail,
    now: NaiveDateTime,
    display: &DisplayConfig,
) -> String {
    let status = classify(
        non_empty(&detail.start_date),
        non_empty(&detail.end_date),
        None,
        now,
    );
    let title = if detail.name.trim().is_empty() {
        "UNKNOWN TOURNAMENT".to_string()
    } else {
        detail.name.trim().to_uppercase()
    };
    let body = vec![
        format!("Start Date: {}", or_tba(&detail.start_date)),
        format!("End Date:   {}", or_tba(&detail.end_date)),
        format!("Map:        {}", or_tba(&detail.map)),
        format!("Prize Pool: {}", or_tba(&detail.prize_pool)),
        status_badge(status),
    ];
    format_card(&title, &body, display)
}

pub async fn run(client: &dyn ListingProvider, display: &DisplayConfig) -> Result<()> {
    let tournaments = fetch_tournaments_cached(client)
        .await
        .context("Failed to fetch tournaments")?;
    print!("{}", format_tournaments(&tournaments, now_local(), display));
    Ok(())
}

/// Show the detail record for one tournament id.
pub async fn run_detail(
    client: &dyn ListingProvider,
    tournament_id: &str,
    display: &DisplayConfig,
) -> Result<()> {
    let details = fetch_tournament_details_cached(client)
        .await
        .context("Failed to fetch tournament details")?;
    let wanted = tournament_id.trim();
    let Some(detail) = details.iter().find(|d| d.tournament_id.trim() == wanted) else {
        bail!("Tournament '{}' not found", tournament_id);
    };
    print!("{}", format_tournament_detail(detail, now_local(), display));
    Ok(())
}
