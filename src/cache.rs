use crate::data_provider::ListingProvider;
use cached::proc_macro::cached;
use fragzone_api::{
    FragzoneApiError, JoinEntry, LeaderboardEntry, Scrim, Tournament, TournamentDetail, Winner,
};

pub use cached::Cached;

#[cfg(test)]
pub async fn clear_all_caches() {
    TOURNAMENTS_CACHE.lock().await.cache_clear();
    UPCOMING_CACHE.lock().await.cache_clear();
    SCRIMS_CACHE.lock().await.cache_clear();
    DETAILS_CACHE.lock().await.cache_clear();
    JOIN_ENTRIES_CACHE.lock().await.cache_clear();
    WINNERS_CACHE.lock().await.cache_clear();
    LEADERBOARD_CACHE.lock().await.cache_clear();
}

#[allow(clippy::unused_unit)]
#[cached(
    name = "TOURNAMENTS_CACHE",
    type = "cached::TimedSizedCache<(), Vec<Tournament>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(1, 60) }",
    convert = r#"{ () }"#,
    result = true
)]
pub async fn fetch_tournaments_cached(
    client: &dyn ListingProvider,
) -> Result<Vec<Tournament>, FragzoneApiError> {
    client.tournaments().await
}

#[allow(clippy::unused_unit)]
#[cached(
    name = "UPCOMING_CACHE",
    type = "cached::TimedSizedCache<(), Vec<Tournament>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(1, 60) }",
    convert = r#"{ () }"#,
    result = true
)]
pub async fn fetch_upcoming_tournaments_cached(
    client: &dyn ListingProvider,
) -> Result<Vec<Tournament>, FragzoneApiError> {
    client.upcoming_tournaments().await
}

#[allow(clippy::unused_unit)]
#[cached(
    name = "SCRIMS_CACHE",
    type = "cached::TimedSizedCache<(), Vec<Scrim>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(1, 60) }",
    convert = r#"{ () }"#,
    result = true
)]
pub async fn fetch_scrims_cached(
    client: &dyn ListingProvider,
) -> Result<Vec<Scrim>, FragzoneApiError> {
    client.scrims().await
}

#[allow(clippy::unused_unit)]
#[cached(
    name = "DETAILS_CACHE",
    type = "cached::TimedSizedCache<(), Vec<TournamentDetail>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(1, 300) }",
    convert = r#"{ () }"#,
    result = true
)]
pub async fn fetch_tournament_details_cached(
    client: &dyn ListingProvider,
) -> Result<Vec<TournamentDetail>, FragzoneApiError> {
    client.tournament_details().await
}

#[allow(clippy::unused_unit)]
#[cached(
    name = "JOIN_ENTRIES_CACHE",
    type = "cached::TimedSizedCache<(), Vec<JoinEntry>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(1, 30) }",
    convert = r#"{ () }"#,
    result = true
)]
pub async fn fetch_join_entries_cached(
    client: &dyn ListingProvider,
) -> Result<Vec<JoinEntry>, FragzoneApiError> {
    client.join_entries().await
}

#[allow(clippy::unused_unit)]
#[cached(
    name = "WINNERS_CACHE",
    type = "cached::TimedSizedCache<(), Vec<Winner>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(1, 300) }",
    convert = r#"{ () }"#,
    result = true
)]
pub async fn fetch_winners_cached(
    client: &dyn ListingProvider,
) -> Result<Vec<Winner>, FragzoneApiError> {
    client.winners().await
}

#[allow(clippy::unused_unit)]
#[cached(
    name = "LEADERBOARD_CACHE",
    type = "cached::TimedSizedCache<(), Vec<LeaderboardEntry>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(1, 60) }",
    convert = r#"{ () }"#,
    result = true
)]
pub async fn fetch_leaderboard_cached(
    client: &dyn ListingProvider,
) -> Result<Vec<LeaderboardEntry>, FragzoneApiError> {
    client.leaderboard().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider that counts how many times each listing is actually fetched.
    struct CountingProvider {
        scrim_calls: AtomicUsize,
    }

    #[async_trait]
    impl ListingProvider for CountingProvider {
        async fn tournaments(&self) -> Result<Vec<Tournament>, FragzoneApiError> {
            Ok(crate::fixtures::create_mock_tournaments())
        }

        async fn upcoming_tournaments(&self) -> Result<Vec<Tournament>, FragzoneApiError> {
            Ok(crate::fixtures::create_mock_upcoming_tournaments())
        }

        async fn scrims(&self) -> Result<Vec<Scrim>, FragzoneApiError> {
            self.scrim_calls.fetch_add(1, Ordering::SeqCst);
            Ok(crate::fixtures::create_mock_scrims())
        }

        async fn tournament_details(&self) -> Result<Vec<TournamentDetail>, FragzoneApiError> {
            Ok(crate::fixtures::create_mock_tournament_details())
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
    async fn second_scrims_fetch_is_served_from_cache() {
        clear_all_caches().await;
        let provider = CountingProvider {
            scrim_calls: AtomicUsize::new(0),
        };

        let first = fetch_scrims_cached(&provider).await.unwrap();
        let second = fetch_scrims_cached(&provider).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.scrim_calls.load(Ordering::SeqCst), 1);
    }
}
