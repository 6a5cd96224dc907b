use crate::cache::fetch_winners_cached;
use crate::config::DisplayConfig;
use crate::data_provider::ListingProvider;
use crate::formatting::format_header;
use anyhow::{Context, Result};
use fragzone_api::Winner;

pub fn format_winners(winners: &[Winner], display: &DisplayConfig) -> String {
    let mut output = String::new();
    output.push_str(&format_header("WINNERS", true, display));
    output.push('\n');

    if winners.is_empty() {
        output.push_str("No winners declared yet.\n");
        return output;
    }

    for (i, winner) in winners.iter().enumerate() {
        let name = if winner.name.trim().is_empty() {
            "UNKNOWN".to_string()
        } else {
            winner.name.trim().to_uppercase()
        };
        let team = if winner.team_name.trim().is_empty() {
            "N/A"
        } else {
            winner.team_name.trim()
        };
        output.push_str(&format!(
            "#{:<3} {:<20} Team: {:<20} Kills: {}\n",
            i + 1,
            name,
            team,
            winner.kill.unwrap_or(0)
        ));
    }

    output
}

pub async fn run(client: &dyn ListingProvider, display: &DisplayConfig) -> Result<()> {
    let winners = fetch_winners_cached(client)
        .await
        .context("Failed to fetch winners")?;
    print!("{}", format_winners(&winners, display));
    Ok(())
}
