//! HTTP client for the FragZone listing backend.
//!
//! The backend is a plain JSON-over-HTTP service with one collection
//! endpoint per listing category and a websocket feed (see [`feed`]) that
//! announces data changes so clients can re-fetch.

use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod feed;
pub mod types;

pub use feed::{FeedEvent, LiveFeed};
pub use types::{
    JoinEntry, LeaderboardEntry, Scrim, Tournament, TournamentDetail, Winner,
};

#[derive(Debug, Error)]
pub enum FragzoneApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with {status} for {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}

/// Client for the FragZone backend REST endpoints.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base: String,
}

impl Client {
    /// Create a client for the given base URL, e.g. `http://localhost:5000`.
    pub fn new(base_url: &str) -> Result<Self, FragzoneApiError> {
        reqwest::Url::parse(base_url)
            .map_err(|_| FragzoneApiError::InvalidBaseUrl(base_url.to_string()))?;
        Ok(Client {
            http: reqwest::Client::new(),
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FragzoneApiError> {
        let url = format!("{}{}", self.base, path);
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FragzoneApiError::Status {
                status: response.status(),
                path: path.to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }

    /// All tournaments, past and future.
    pub async fn tournaments(&self) -> Result<Vec<Tournament>, FragzoneApiError> {
        self.get_json("/tournament").await
    }

    /// Tournaments that are still open for registration.
    pub async fn upcoming_tournaments(&self) -> Result<Vec<Tournament>, FragzoneApiError> {
        self.get_json("/upcomingtournament").await
    }

    /// The scrim schedule.
    pub async fn scrims(&self) -> Result<Vec<Scrim>, FragzoneApiError> {
        self.get_json("/upcomingscrim").await
    }

    /// Extended detail records for all tournaments.
    pub async fn tournament_details(&self) -> Result<Vec<TournamentDetail>, FragzoneApiError> {
        self.get_json("/tournamentdetail").await
    }

    /// All team registrations.
    pub async fn join_entries(&self) -> Result<Vec<JoinEntry>, FragzoneApiError> {
        self.get_json("/joinmatches").await
    }

    /// Register a team for a tournament or scrim.
    pub async fn submit_join(&self, entry: &JoinEntry) -> Result<(), FragzoneApiError> {
        let url = format!("{}/joinmatches", self.base);
        tracing::debug!("POST {}", url);
        let response = self.http.post(&url).json(entry).send().await?;
        if !response.status().is_success() {
            return Err(FragzoneApiError::Status {
                status: response.status(),
                path: "/joinmatches".to_string(),
            });
        }
        Ok(())
    }

    /// Declared winners, most recent first.
    pub async fn winners(&self) -> Result<Vec<Winner>, FragzoneApiError> {
        self.get_json("/winner").await
    }

    /// The current leaderboard.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, FragzoneApiError> {
        self.get_json("/leaderboard").await
    }
}
