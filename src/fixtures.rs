/// Mock fixture data for testing and development
///
/// Provides consistent fixture data used by:
/// 1. Unit tests — predictable records in both backend date spellings
/// 2. Development mock mode — running the app without a backend
/// 3. Benchmarks — a stable batch for the classifier
///
/// Dates are generated relative to today so the mock listings always show a
/// mix of passed, live, and upcoming entries.
use chrono::{Days, Local, NaiveDate};
use fragzone_api::{
    JoinEntry, LeaderboardEntry, Scrim, Tournament, TournamentDetail, Winner,
};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Day-first spelling with slashes, the backend's other date format.
fn dmy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn create_mock_tournaments() -> Vec<Tournament> {
    let today = today();
    vec![
        Tournament {
            tournament_id: "bgmi-winter-cup".to_string(),
            name: "Winter Cup".to_string(),
            start_date: ymd(today - Days::new(9)),
            end_date: ymd(today - Days::new(7)),
            slots: Some(25),
        },
        Tournament {
            tournament_id: "bgmi-weekly-12".to_string(),
            name: "BGMI Weekly #12".to_string(),
            start_date: dmy(today - Days::new(1)),
            end_date: dmy(today + Days::new(1)),
            slots: Some(20),
        },
        Tournament {
            tournament_id: "bgmi-summer-open".to_string(),
            name: "Summer Open".to_string(),
            start_date: ymd(today + Days::new(7)),
            end_date: ymd(today + Days::new(9)),
            slots: None,
        },
    ]
}

pub fn create_mock_upcoming_tournaments() -> Vec<Tournament> {
    create_mock_tournaments()
        .into_iter()
        .filter(|t| t.tournament_id != "bgmi-winter-cup")
        .collect()
}

pub fn create_mock_scrims() -> Vec<Scrim> {
    let today = today();
    vec![
        Scrim {
            name: "Morning Practice".to_string(),
            start_date: ymd(today),
            time: "9:00 am".to_string(),
        },
        Scrim {
            name: "Night Scrim".to_string(),
            start_date: dmy(today),
            time: "21:30".to_string(),
        },
        Scrim {
            name: "Weekend Qualifier".to_string(),
            start_date: ymd(today + Days::new(2)),
            time: "6:30 pm".to_string(),
        },
        // Backend rows are sometimes half-filled.
        Scrim {
            name: "TBA Scrim".to_string(),
            start_date: String::new(),
            time: String::new(),
        },
    ]
}

pub fn create_mock_tournament_details() -> Vec<TournamentDetail> {
    create_mock_tournaments()
        .into_iter()
        .map(|t| TournamentDetail {
            tournament_id: t.tournament_id,
            name: t.name,
            start_date: t.start_date,
            end_date: t.end_date,
            map: "Erangel".to_string(),
            prize_pool: "₹10,000".to_string(),
        })
        .collect()
}

pub fn create_mock_join_entries() -> Vec<JoinEntry> {
    vec![
        JoinEntry {
            tournament_name: "BGMI-WEEKLY-12".to_string(),
            first_player: "AceLeader".to_string(),
            second_player: "Viper".to_string(),
            third_player: "Ghost".to_string(),
            fourth_player: "Blaze".to_string(),
            player_email: "leader@example.com".to_string(),
            player_mobile_number: "9876543210".to_string(),
        },
        JoinEntry {
            tournament_name: "BGMI-SUMMER-OPEN".to_string(),
            first_player: "Shadow".to_string(),
            second_player: "Falcon".to_string(),
            third_player: "Titan".to_string(),
            fourth_player: "Nova".to_string(),
            player_email: "shadow@example.com".to_string(),
            player_mobile_number: "9123456780".to_string(),
        },
    ]
}

pub fn create_mock_winners() -> Vec<Winner> {
    vec![
        Winner {
            name: "AceLeader".to_string(),
            team_name: "Team Inferno".to_string(),
            kill: Some(14),
            img_src: "ace.png".to_string(),
        },
        Winner {
            name: "Viper".to_string(),
            team_name: "Team Inferno".to_string(),
            kill: Some(11),
            img_src: "viper.png".to_string(),
        },
        Winner {
            name: "Shadow".to_string(),
            team_name: "Night Owls".to_string(),
            kill: Some(9),
            img_src: "shadow.png".to_string(),
        },
    ]
}

pub fn create_mock_leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry {
            rank: Some(1),
            player_name: "AceLeader".to_string(),
            team_name: "Team Inferno".to_string(),
            kill: Some(48),
            point: Some(120),
        },
        LeaderboardEntry {
            rank: Some(2),
            player_name: "Shadow".to_string(),
            team_name: "Night Owls".to_string(),
            kill: Some(41),
            point: Some(104),
        },
        LeaderboardEntry {
            rank: None,
            player_name: "Falcon".to_string(),
            team_name: "Night Owls".to_string(),
            kill: Some(35),
            point: Some(90),
        },
    ]
}
