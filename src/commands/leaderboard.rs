use crate::cache::fetch_leaderboard_cached;
use crate::config::DisplayConfig;
use crate::data_provider::ListingProvider;
use crate::formatting::format_header;
use anyhow::{Context, Result};
use fragzone_api::LeaderboardEntry;

// Column widths for the rank table
const RANK_COL_WIDTH: usize = 6;
const PLAYER_COL_WIDTH: usize = 20;
const TEAM_COL_WIDTH: usize = 20;
const KILLS_COL_WIDTH: usize = 7;

pub fn format_leaderboard(rows: &[LeaderboardEntry], display: &DisplayConfig) -> String {
    let mut output = String::new();
    output.push_str(&format_header("LEADERBOARD", true, display));
    output.push('\n');

    if rows.is_empty() {
        output.push_str("Leaderboard data not available yet.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<RANK_COL_WIDTH$}{:<PLAYER_COL_WIDTH$}{:<TEAM_COL_WIDTH$}{:<KILLS_COL_WIDTH$}{}\n",
        "Rank", "Player", "Team", "Kills", "Points"
    ));
    output.push_str(&format!(
        "{}\n",
        display.box_chars.horizontal.repeat(
            RANK_COL_WIDTH + PLAYER_COL_WIDTH + TEAM_COL_WIDTH + KILLS_COL_WIDTH + "Points".len()
        )
    ));

    for (i, row) in rows.iter().enumerate() {
        // Rows without an explicit rank fall back to list position.
        let rank = row.rank.unwrap_or(i as i64 + 1);
        let player = if row.player_name.trim().is_empty() {
            "UNKNOWN".to_string()
        } else {
            row.player_name.trim().to_uppercase()
        };
        let team = if row.team_name.trim().is_empty() {
            "UNKNOWN".to_string()
        } else {
            row.team_name.trim().to_uppercase()
        };
        output.push_str(&format!(
            "#{:<5}{:<PLAYER_COL_WIDTH$}{:<TEAM_COL_WIDTH$}{:<KILLS_COL_WIDTH$}{}\n",
            rank,
            player,
            team,
            row.kill.unwrap_or(0),
            row.point.unwrap_or(0)
        ));
    }

    output
}

pub async fn run(client: &dyn ListingProvider, display: &DisplayConfig) -> Result<()> {
    let rows = fetch_leaderboard_cached(client)
        .await
        .context("Failed to fetch leaderboard")?;
    print!("{}", format_leaderboard(&rows, display));
    Ok(())
}
