//! Join-status matching.
//!
//! A user counts as joined to a tournament when a registration row carries
//! their email and that tournament's id. The backend stores both as free
//! text, so comparisons are whitespace-trimmed and case-insensitive.

use fragzone_api::JoinEntry;

/// Case-insensitive, trimmed equality, the backend's matching rule for
/// emails and tournament names alike.
fn loose_eq(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Whether the user has a registration for the given tournament.
pub fn is_joined(entries: &[JoinEntry], user_email: &str, tournament_id: &str) -> bool {
    if user_email.trim().is_empty() {
        return false;
    }
    entries.iter().any(|entry| {
        loose_eq(&entry.player_email, user_email)
            && loose_eq(&entry.tournament_name, tournament_id)
    })
}

/// The user's registration, if any. The backend keeps at most one per email.
pub fn find_entry<'a>(entries: &'a [JoinEntry], user_email: &str) -> Option<&'a JoinEntry> {
    if user_email.trim().is_empty() {
        return None;
    }
    entries
        .iter()
        .find(|entry| loose_eq(&entry.player_email, user_email))
}

/// Normalize a mobile number to its digits; valid numbers are exactly 10
/// digits long.
pub fn normalize_mobile(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        Some(digits)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(email: &str, tournament: &str) -> JoinEntry {
        JoinEntry {
            tournament_name: tournament.to_string(),
            player_email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn joined_match_is_trimmed_and_case_insensitive() {
        let entries = vec![entry(" Leader@Example.com ", "BGMI-WEEKLY-12")];
        assert!(is_joined(&entries, "leader@example.com", "bgmi-weekly-12 "));
        assert!(!is_joined(&entries, "leader@example.com", "bgmi-weekly-13"));
        assert!(!is_joined(&entries, "other@example.com", "bgmi-weekly-12"));
    }

    #[test]
    fn empty_email_never_matches() {
        let entries = vec![entry("", ""), entry("a@b.c", "x")];
        assert!(!is_joined(&entries, "", "x"));
        assert!(!is_joined(&entries, "   ", "x"));
        assert_eq!(find_entry(&entries, ""), None);
    }

    #[test]
    fn find_entry_returns_first_match() {
        let entries = vec![
            entry("a@b.c", "first"),
            entry("A@B.C", "second"),
        ];
        assert_eq!(find_entry(&entries, "a@b.c").unwrap().tournament_name, "first");
    }

    #[test]
    fn mobile_normalization() {
        assert_eq!(
            normalize_mobile("98765 43210"),
            Some("9876543210".to_string())
        );
        assert_eq!(
            normalize_mobile("+91-98765-43210"),
            None // 12 digits with the country code
        );
        assert_eq!(normalize_mobile("12345"), None);
        assert_eq!(normalize_mobile(""), None);
    }
}
