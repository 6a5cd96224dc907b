use crate::cache::{fetch_join_entries_cached, fetch_upcoming_tournaments_cached};
use crate::commands::{now_local, or_tba};
use crate::config::DisplayConfig;
use crate::data_provider::ListingProvider;
use crate::formatting::{format_card, format_header, status_badge};
use crate::join::is_joined;
use crate::status::{classify, non_empty};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use fragzone_api::{JoinEntry, Tournament};

/// Upcoming tournaments with a joined marker for the configured user.
pub fn format_upcoming(
    tournaments: &[Tournament],
    entries: &[JoinEntry],
    user_email: Option<&str>,
    now: NaiveDateTime,
    display: &DisplayConfig,
) -> String {
    let mut output = String::new();
    output.push_str(&format_header("UPCOMING TOURNAMENTS", true, display));
    output.push('\n');

    if tournaments.is_empty() {
        output.push_str("No upcoming tournaments.\n");
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
        let joined = user_email
            .map(|email| is_joined(entries, email, &t.tournament_id))
            .unwrap_or(false);
        let title = if t.name.trim().is_empty() {
            "UNKNOWN TOURNAMENT".to_string()
        } else {
            t.name.trim().to_uppercase()
        };
        let join_line = if joined {
            "JOINED".to_string()
        } else {
            format!("Join with: fragzone join {}", t.tournament_id.trim())
        };
        let body = vec![
            format!("Start: {}", or_tba(&t.start_date)),
            format!("End:   {}", or_tba(&t.end_date)),
            status_badge(status),
            join_line,
        ];
        output.push_str(&format_card(&title, &body, display));
    }

    output
}

pub async fn run(
    client: &dyn ListingProvider,
    user_email: Option<&str>,
    display: &DisplayConfig,
) -> Result<()> {
    let tournaments = fetch_upcoming_tournaments_cached(client)
        .await
        .context("Failed to fetch upcoming tournaments")?;
    // Without a configured email there is nothing to match against.
    let entries = if user_email.is_some() {
        fetch_join_entries_cached(client)
            .await
            .context("Failed to fetch registrations")?
    } else {
        Vec::new()
    };
    print!(
        "{}",
        format_upcoming(&tournaments, &entries, user_email, now_local(), display)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::BoxChars;
    use chrono::NaiveDate;

    fn display() -> DisplayConfig {
        DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
        }
    }

    fn noon(date: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sample() -> (Vec<Tournament>, Vec<JoinEntry>) {
        let tournaments = vec![Tournament {
            tournament_id: "bgmi-weekly-12".to_string(),
            name: "BGMI Weekly #12".to_string(),
            start_date: "2024-06-10".to_string(),
            end_date: "2024-06-12".to_string(),
            slots: Some(20),
        }];
        let entries = vec![JoinEntry {
            tournament_name: "BGMI-WEEKLY-12".to_string(),
            player_email: "Leader@Example.com".to_string(),
            ..Default::default()
        }];
        (tournaments, entries)
    }

    #[test]
    fn joined_marker_uses_loose_matching() {
        let (tournaments, entries) = sample();
        let output = format_upcoming(
            &tournaments,
            &entries,
            Some("leader@example.com "),
            noon("2024-06-01"),
            &display(),
        );
        assert!(output.contains("JOINED"));
        assert!(!output.contains("Join with:"));
    }

    #[test]
    fn not_joined_shows_join_hint() {
        let (tournaments, entries) = sample();
        let output = format_upcoming(
            &tournaments,
            &entries,
            Some("other@example.com"),
            noon("2024-06-01"),
            &display(),
        );
        assert!(output.contains("Join with: fragzone join bgmi-weekly-12"));
    }

    #[test]
    fn anonymous_user_is_never_joined() {
        let (tournaments, entries) = sample();
        let output = format_upcoming(&tournaments, &entries, None, noon("2024-06-01"), &display());
        assert!(output.contains("Join with:"));
        assert!(output.contains("[UPCOMING]"));
    }
}
