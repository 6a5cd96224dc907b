use crate::data_provider::ListingProvider;
use crate::SharedDataHandle;
use fragzone_api::FeedEvent;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::mpsc;

/// Fetch the event listings (tournaments, upcoming, scrims, details) and
/// update shared state
pub async fn fetch_listings(client: &dyn ListingProvider, shared_data: &SharedDataHandle) {
    let (tournaments, upcoming, scrims, details) = futures::join!(
        client.tournaments(),
        client.upcoming_tournaments(),
        client.scrims(),
        client.tournament_details(),
    );

    let mut shared = shared_data.write().await;
    let mut first_error = None;

    match tournaments {
        Ok(data) => shared.tournaments = Arc::new(data),
        Err(e) => first_error = Some(format!("Failed to fetch tournaments: {}", e)),
    }
    match upcoming {
        Ok(data) => shared.upcoming_tournaments = Arc::new(data),
        Err(e) => {
            first_error.get_or_insert(format!("Failed to fetch upcoming tournaments: {}", e));
        }
    }
    match scrims {
        Ok(data) => shared.scrims = Arc::new(data),
        Err(e) => {
            first_error.get_or_insert(format!("Failed to fetch scrims: {}", e));
        }
    }
    match details {
        Ok(data) => shared.tournament_details = Arc::new(data),
        Err(e) => {
            first_error.get_or_insert(format!("Failed to fetch tournament details: {}", e));
        }
    }

    shared.error_message = first_error;
    shared.last_refresh = Some(SystemTime::now());
}

/// Fetch the community data (registrations, winners, leaderboard) and update
/// shared state. Errors here never clobber a listing error already recorded.
pub async fn fetch_community(client: &dyn ListingProvider, shared_data: &SharedDataHandle) {
    let (entries, winners, leaderboard) = futures::join!(
        client.join_entries(),
        client.winners(),
        client.leaderboard(),
    );

    let mut shared = shared_data.write().await;

    match entries {
        Ok(data) => shared.join_entries = Arc::new(data),
        Err(e) => {
            if shared.error_message.is_none() {
                shared.error_message = Some(format!("Failed to fetch registrations: {}", e));
            }
        }
    }
    match winners {
        Ok(data) => shared.winners = Arc::new(data),
        Err(e) => {
            if shared.error_message.is_none() {
                shared.error_message = Some(format!("Failed to fetch winners: {}", e));
            }
        }
    }
    match leaderboard {
        Ok(data) => shared.leaderboard = Arc::new(data),
        Err(e) => {
            if shared.error_message.is_none() {
                shared.error_message = Some(format!("Failed to fetch leaderboard: {}", e));
            }
        }
    }
}

/// Background task loop that keeps shared state current.
///
/// Re-fetches on three triggers: the periodic interval, a manual refresh
/// request, or a change event from the live feed. Feed bursts are coalesced
/// by draining the channel before fetching, so ten rapid events cost one
/// round trip.
pub async fn fetch_data_loop(
    client: Arc<dyn ListingProvider>,
    shared_data: SharedDataHandle,
    interval: u64,
    mut refresh_rx: mpsc::Receiver<()>,
    mut feed_rx: mpsc::UnboundedReceiver<FeedEvent>,
) {
    let mut interval_timer = tokio::time::interval(Duration::from_secs(interval));
    interval_timer.tick().await; // First tick completes immediately

    loop {
        fetch_listings(client.as_ref(), &shared_data).await;
        fetch_community(client.as_ref(), &shared_data).await;

        tokio::select! {
            _ = interval_timer.tick() => {
                // Regular interval refresh
            }
            _ = refresh_rx.recv() => {
                tracing::debug!("manual refresh requested");
            }
            event = feed_rx.recv() => {
                if let Some(event) = event {
                    tracing::debug!("feed event {} triggered refresh", event.name());
                    // Coalesce a burst of change events into one fetch.
                    while feed_rx.try_recv().is_ok() {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fragzone_api::{
        FragzoneApiError, JoinEntry, LeaderboardEntry, Scrim, Tournament, TournamentDetail, Winner,
    };
    use tokio::sync::RwLock;

    struct FixtureProvider;

    #[async_trait]
    impl ListingProvider for FixtureProvider {
        async fn tournaments(&self) -> Result<Vec<Tournament>, FragzoneApiError> {
            Ok(crate::fixtures::create_mock_tournaments())
        }

        async fn upcoming_tournaments(&self) -> Result<Vec<Tournament>, FragzoneApiError> {
            Ok(crate::fixtures::create_mock_upcoming_tournaments())
        }

        async fn scrims(&self) -> Result<Vec<Scrim>, FragzoneApiError> {
            Ok(crate::fixtures::create_mock_scrims())
        }

        async fn tournament_details(&self) -> Result<Vec<TournamentDetail>, FragzoneApiError> {
            Err(FragzoneApiError::InvalidBaseUrl("down".to_string()))
        }

        async fn join_entries(&self) -> Result<Vec<JoinEntry>, FragzoneApiError> {
            Ok(crate::fixtures::create_mock_join_entries())
        }

        async fn submit_join(&self, _entry: &JoinEntry) -> Result<(), FragzoneApiError> {
            Ok(())
        }

        async fn winners(&self) -> Result<Vec<Winner>, FragzoneApiError> {
            Ok(crate::fixtures::create_mock_winners())
        }

        async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, FragzoneApiError> {
            Ok(crate::fixtures::create_mock_leaderboard())
        }
    }

    #[tokio::test]
    async fn fetch_updates_shared_state_and_records_partial_failure() {
        let shared: SharedDataHandle = Arc::new(RwLock::new(crate::SharedData::default()));

        fetch_listings(&FixtureProvider, &shared).await;
        fetch_community(&FixtureProvider, &shared).await;

        let data = shared.read().await;
        assert_eq!(data.tournaments.len(), 3);
        assert_eq!(data.scrims.len(), 4);
        assert_eq!(data.winners.len(), 3);
        assert!(data.last_refresh.is_some());
        // The failing details fetch is reported but does not block the rest.
        let err = data.error_message.as_deref().unwrap();
        assert!(err.contains("tournament details"), "{}", err);
        assert!(data.tournament_details.is_empty());
    }
}
