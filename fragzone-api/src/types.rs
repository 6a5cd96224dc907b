//! Record types returned by the FragZone backend.
//!
//! Field spellings mirror the backend's JSON exactly (`startdate`,
//! `tournamentId`, `playerEmail`, ...). The backend omits fields freely, so
//! every string field defaults to empty on deserialization; callers treat an
//! empty string as "absent".

use serde::{Deserialize, Serialize};

/// A tournament listing entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Tournament {
    #[serde(rename = "tournamentId", default)]
    pub tournament_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "startdate", default)]
    pub start_date: String,
    #[serde(rename = "enddate", default)]
    pub end_date: String,
    #[serde(default)]
    pub slots: Option<i64>,
}

/// A scrim listing entry. Scrims are single-day events with an optional
/// start time and no end date.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Scrim {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "startdate", default)]
    pub start_date: String,
    #[serde(default)]
    pub time: String,
}

/// Extended tournament information shown on the detail page.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct TournamentDetail {
    #[serde(rename = "tournamentId", default)]
    pub tournament_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "startdate", default)]
    pub start_date: String,
    #[serde(rename = "enddate", default)]
    pub end_date: String,
    #[serde(default)]
    pub map: String,
    #[serde(rename = "prizePool", default)]
    pub prize_pool: String,
}

/// A team registration for a tournament or scrim. Used both for reading the
/// registered-teams list and for submitting a new registration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct JoinEntry {
    #[serde(rename = "tournamentName", default)]
    pub tournament_name: String,
    #[serde(rename = "firstPlayer", default)]
    pub first_player: String,
    #[serde(rename = "secondPlayer", default)]
    pub second_player: String,
    #[serde(rename = "thirdPlayer", default)]
    pub third_player: String,
    #[serde(rename = "fourthPlayer", default)]
    pub fourth_player: String,
    #[serde(rename = "playerEmail", default)]
    pub player_email: String,
    #[serde(rename = "playerMobileNumber", default)]
    pub player_mobile_number: String,
}

/// A declared match winner.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Winner {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "teamname", default)]
    pub team_name: String,
    #[serde(default)]
    pub kill: Option<i64>,
    #[serde(rename = "imgSrc", default)]
    pub img_src: String,
}

/// One row of the leaderboard.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(rename = "playerName", default)]
    pub player_name: String,
    #[serde(rename = "teamName", default)]
    pub team_name: String,
    #[serde(default)]
    pub kill: Option<i64>,
    #[serde(default)]
    pub point: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tournament_from_backend_json() {
        let json = r#"{
            "tournamentId": "bgmi-weekly-12",
            "name": "BGMI Weekly",
            "startdate": "2024-06-01",
            "enddate": "03/06/2024",
            "slots": 25
        }"#;
        let t: Tournament = serde_json::from_str(json).unwrap();
        assert_eq!(t.tournament_id, "bgmi-weekly-12");
        assert_eq!(t.start_date, "2024-06-01");
        assert_eq!(t.end_date, "03/06/2024");
        assert_eq!(t.slots, Some(25));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let s: Scrim = serde_json::from_str(r#"{"name": "Night Scrim"}"#).unwrap();
        assert_eq!(s.name, "Night Scrim");
        assert_eq!(s.start_date, "");
        assert_eq!(s.time, "");
    }

    #[test]
    fn join_entry_round_trips_backend_field_names() {
        let entry = JoinEntry {
            tournament_name: "BGMI-WEEKLY-12".to_string(),
            first_player: "Leader".to_string(),
            player_email: "leader@example.com".to_string(),
            player_mobile_number: "9876543210".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["tournamentName"], "BGMI-WEEKLY-12");
        assert_eq!(json["playerEmail"], "leader@example.com");
        assert_eq!(json["playerMobileNumber"], "9876543210");
    }

    #[test]
    fn leaderboard_entry_tolerates_nulls() {
        let row: LeaderboardEntry =
            serde_json::from_str(r#"{"playerName": "Ace", "rank": null}"#).unwrap();
        assert_eq!(row.player_name, "Ace");
        assert_eq!(row.rank, None);
        assert_eq!(row.point, None);
    }
}
