use crate::data_provider::ListingProvider;
use crate::join::normalize_mobile;
use anyhow::{bail, Context, Result};
use fragzone_api::JoinEntry;

/// Arguments for a team registration, collected from CLI flags.
pub struct JoinArgs {
    pub tournament_id: String,
    pub players: Vec<String>,
    pub email: String,
    pub mobile: String,
}

/// Validate the arguments and build the registration payload.
///
/// The backend stores tournament names uppercased, so the id is uppercased
/// here the same way the join form does it.
pub fn build_entry(args: &JoinArgs) -> Result<JoinEntry> {
    if args.tournament_id.trim().is_empty() {
        bail!("Tournament id must not be empty");
    }
    let players: Vec<&str> = args
        .players
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    if players.len() != 4 {
        bail!("Expected 4 player names, got {}", players.len());
    }
    if args.email.trim().is_empty() {
        bail!("Player email is required (flag --email or player_email in config)");
    }
    let Some(mobile) = normalize_mobile(&args.mobile) else {
        bail!("Mobile number must be 10 digits");
    };

    Ok(JoinEntry {
        tournament_name: args.tournament_id.trim().to_uppercase(),
        first_player: players[0].to_string(),
        second_player: players[1].to_string(),
        third_player: players[2].to_string(),
        fourth_player: players[3].to_string(),
        player_email: args.email.trim().to_string(),
        player_mobile_number: mobile,
    })
}

pub async fn run(client: &dyn ListingProvider, args: JoinArgs) -> Result<()> {
    let entry = build_entry(&args)?;
    client
        .submit_join(&entry)
        .await
        .context("Failed to submit registration")?;
    println!(
        "Joined {} as {}. Room details are shared 15 minutes before match start.",
        entry.tournament_name, entry.first_player
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> JoinArgs {
        JoinArgs {
            tournament_id: "bgmi-weekly-12".to_string(),
            players: vec![
                "AceLeader".to_string(),
                "Viper".to_string(),
                "Ghost".to_string(),
                "Blaze".to_string(),
            ],
            email: " leader@example.com ".to_string(),
            mobile: "98765 43210".to_string(),
        }
    }

    #[test]
    fn builds_uppercased_entry() {
        let entry = build_entry(&args()).unwrap();
        assert_eq!(entry.tournament_name, "BGMI-WEEKLY-12");
        assert_eq!(entry.first_player, "AceLeader");
        assert_eq!(entry.player_email, "leader@example.com");
        assert_eq!(entry.player_mobile_number, "9876543210");
    }

    #[test]
    fn rejects_wrong_player_count() {
        let mut bad = args();
        bad.players.pop();
        let err = build_entry(&bad).unwrap_err();
        assert!(err.to_string().contains("4 player names"));
    }

    #[test]
    fn rejects_bad_mobile() {
        let mut bad = args();
        bad.mobile = "12345".to_string();
        let err = build_entry(&bad).unwrap_err();
        assert!(err.to_string().contains("10 digits"));
    }

    #[test]
    fn rejects_missing_email() {
        let mut bad = args();
        bad.email = "  ".to_string();
        assert!(build_entry(&bad).is_err());
    }
}
