/// Mock backend client for development and testing
use crate::data_provider::ListingProvider;
use crate::fixtures;
use async_trait::async_trait;
use fragzone_api::{
    FragzoneApiError, JoinEntry, LeaderboardEntry, Scrim, Tournament, TournamentDetail, Winner,
};
use tracing::info;

/// Client that returns fixture data instead of making real API calls
pub struct MockClient;

impl MockClient {
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingProvider for MockClient {
    async fn tournaments(&self) -> Result<Vec<Tournament>, FragzoneApiError> {
        info!("MockClient: Returning mock tournaments");
        Ok(fixtures::create_mock_tournaments())
    }

    async fn upcoming_tournaments(&self) -> Result<Vec<Tournament>, FragzoneApiError> {
        info!("MockClient: Returning mock upcoming tournaments");
        Ok(fixtures::create_mock_upcoming_tournaments())
    }

    async fn scrims(&self) -> Result<Vec<Scrim>, FragzoneApiError> {
        info!("MockClient: Returning mock scrims");
        Ok(fixtures::create_mock_scrims())
    }

    async fn tournament_details(&self) -> Result<Vec<TournamentDetail>, FragzoneApiError> {
        info!("MockClient: Returning mock tournament details");
        Ok(fixtures::create_mock_tournament_details())
    }

    async fn join_entries(&self) -> Result<Vec<JoinEntry>, FragzoneApiError> {
        info!("MockClient: Returning mock join entries");
        Ok(fixtures::create_mock_join_entries())
    }

    async fn submit_join(&self, entry: &JoinEntry) -> Result<(), FragzoneApiError> {
        info!(
            "MockClient: Accepting join for tournament {}",
            entry.tournament_name
        );
        Ok(())
    }

    async fn winners(&self) -> Result<Vec<Winner>, FragzoneApiError> {
        info!("MockClient: Returning mock winners");
        Ok(fixtures::create_mock_winners())
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, FragzoneApiError> {
        info!("MockClient: Returning mock leaderboard");
        Ok(fixtures::create_mock_leaderboard())
    }
}
