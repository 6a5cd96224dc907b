/// Trait for providing listing data, abstracting over the real API client
/// and mock implementations
use async_trait::async_trait;
use fragzone_api::{
    FragzoneApiError, JoinEntry, LeaderboardEntry, Scrim, Tournament, TournamentDetail, Winner,
};

/// Trait for listing data providers, implemented by both the real Client and
/// MockClient
#[async_trait]
pub trait ListingProvider: Send + Sync {
    /// Get all tournaments
    async fn tournaments(&self) -> Result<Vec<Tournament>, FragzoneApiError>;

    /// Get tournaments still open for registration
    async fn upcoming_tournaments(&self) -> Result<Vec<Tournament>, FragzoneApiError>;

    /// Get the scrim schedule
    async fn scrims(&self) -> Result<Vec<Scrim>, FragzoneApiError>;

    /// Get extended detail records for all tournaments
    async fn tournament_details(&self) -> Result<Vec<TournamentDetail>, FragzoneApiError>;

    /// Get all team registrations
    async fn join_entries(&self) -> Result<Vec<JoinEntry>, FragzoneApiError>;

    /// Register a team for a tournament or scrim
    async fn submit_join(&self, entry: &JoinEntry) -> Result<(), FragzoneApiError>;

    /// Get declared winners
    async fn winners(&self) -> Result<Vec<Winner>, FragzoneApiError>;

    /// Get the current leaderboard
    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, FragzoneApiError>;
}

/// Implement the trait for the real fragzone_api::Client
#[async_trait]
impl ListingProvider for fragzone_api::Client {
    async fn tournaments(&self) -> Result<Vec<Tournament>, FragzoneApiError> {
        self.tournaments().await
    }

    async fn upcoming_tournaments(&self) -> Result<Vec<Tournament>, FragzoneApiError> {
        self.upcoming_tournaments().await
    }

    async fn scrims(&self) -> Result<Vec<Scrim>, FragzoneApiError> {
        self.scrims().await
    }

    async fn tournament_details(&self) -> Result<Vec<TournamentDetail>, FragzoneApiError> {
        self.tournament_details().await
    }

    async fn join_entries(&self) -> Result<Vec<JoinEntry>, FragzoneApiError> {
        self.join_entries().await
    }

    async fn submit_join(&self, entry: &JoinEntry) -> Result<(), FragzoneApiError> {
        self.submit_join(entry).await
    }

    async fn winners(&self) -> Result<Vec<Winner>, FragzoneApiError> {
        self.winners().await
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, FragzoneApiError> {
        self.leaderboard().await
    }
}
