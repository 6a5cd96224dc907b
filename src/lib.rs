pub mod background;
pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod fixtures;
pub mod formatting;
pub mod join;
pub mod status;
pub mod tui;

#[cfg(feature = "development")]
pub mod dev;

use std::sync::Arc;
use std::time::SystemTime;

use fragzone_api::{JoinEntry, LeaderboardEntry, Scrim, Tournament, TournamentDetail, Winner};
use tokio::sync::RwLock;

/// Snapshot of everything the views render, refreshed by the background
/// fetch loop. Collections sit behind `Arc` so cloning a snapshot per frame
/// is cheap.
#[derive(Clone)]
pub struct SharedData {
    pub tournaments: Arc<Vec<Tournament>>,
    pub upcoming_tournaments: Arc<Vec<Tournament>>,
    pub scrims: Arc<Vec<Scrim>>,
    pub tournament_details: Arc<Vec<TournamentDetail>>,
    pub join_entries: Arc<Vec<JoinEntry>>,
    pub winners: Arc<Vec<Winner>>,
    pub leaderboard: Arc<Vec<LeaderboardEntry>>,
    pub config: config::Config,
    pub last_refresh: Option<SystemTime>,
    pub error_message: Option<String>,
}

impl Default for SharedData {
    fn default() -> Self {
        SharedData {
            tournaments: Arc::new(Vec::new()),
            upcoming_tournaments: Arc::new(Vec::new()),
            scrims: Arc::new(Vec::new()),
            tournament_details: Arc::new(Vec::new()),
            join_entries: Arc::new(Vec::new()),
            winners: Arc::new(Vec::new()),
            leaderboard: Arc::new(Vec::new()),
            config: config::Config::default(),
            last_refresh: None,
            error_message: None,
        }
    }
}

impl SharedData {
    /// Look up the detail record for a tournament, matching ids the way the
    /// backend does: trimmed string equality.
    pub fn detail_for(&self, tournament_id: &str) -> Option<&TournamentDetail> {
        let wanted = tournament_id.trim();
        self.tournament_details
            .iter()
            .find(|d| d.tournament_id.trim() == wanted)
    }
}

pub type SharedDataHandle = Arc<RwLock<SharedData>>;
