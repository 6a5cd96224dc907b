use crate::cache::fetch_join_entries_cached;
use crate::config::DisplayConfig;
use crate::data_provider::ListingProvider;
use crate::formatting::format_card;
use crate::join::find_entry;
use anyhow::{Context, Result};
use fragzone_api::JoinEntry;

/// The user's joined match, or a hint when there is none.
pub fn format_profile(
    entries: &[JoinEntry],
    user_email: Option<&str>,
    display: &DisplayConfig,
) -> String {
    let Some(email) = user_email else {
        return "No player email configured. Set player_email in the config file.\n".to_string();
    };

    match find_entry(entries, email) {
        Some(entry) => {
            let body = vec![
                format!("Players: {}", format_players(entry)),
                format!("Email:   {}", entry.player_email.trim()),
                format!("Mobile:  {}", entry.player_mobile_number.trim()),
            ];
            let title = format!("JOINED MATCH: {}", entry.tournament_name.trim());
            format_card(&title, &body, display)
        }
        None => format!("No joined match found for {}\n", email),
    }
}

fn format_players(entry: &JoinEntry) -> String {
    [
        &entry.first_player,
        &entry.second_player,
        &entry.third_player,
        &entry.fourth_player,
    ]
    .iter()
    .map(|p| p.trim())
    .filter(|p| !p.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

pub async fn run(
    client: &dyn ListingProvider,
    user_email: Option<&str>,
    display: &DisplayConfig,
) -> Result<()> {
    let entries = if user_email.is_some() {
        fetch_join_entries_cached(client)
            .await
            .context("Failed to fetch registrations")?
    } else {
        Vec::new()
    };
    print!("{}", format_profile(&entries, user_email, display));
    Ok(())
}
