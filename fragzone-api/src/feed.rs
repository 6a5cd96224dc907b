//! Live-update feed client.
//!
//! The backend pushes `db-update` frames over a websocket whenever a
//! collection changes. The payload carries only an event name; clients use
//! it purely as a signal to re-fetch the affected listing.

use std::time::Duration;

use futures_util::StreamExt;
use serde::Deserialize;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;

/// Delay before retrying a failed connection.
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// A named change event announced by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    UpcomingScrimAdded,
    TournamentAdded,
    TournamentDetailUpdated,
    JoinMatch,
    WinnerUpdated,
    LeaderboardUpdated,
    /// An event name this client does not know about.
    Other(String),
}

impl FeedEvent {
    pub fn parse(name: &str) -> Self {
        match name {
            "UPCOMING_SCRIM_ADDED" => FeedEvent::UpcomingScrimAdded,
            "TOURNAMENT_ADDED" => FeedEvent::TournamentAdded,
            "TOURNAMENT_DETAIL_UPDATED" => FeedEvent::TournamentDetailUpdated,
            "JOIN_MATCH" => FeedEvent::JoinMatch,
            "WINNER_UPDATED" => FeedEvent::WinnerUpdated,
            "LEADERBOARD_UPDATED" => FeedEvent::LeaderboardUpdated,
            other => FeedEvent::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FeedEvent::UpcomingScrimAdded => "UPCOMING_SCRIM_ADDED",
            FeedEvent::TournamentAdded => "TOURNAMENT_ADDED",
            FeedEvent::TournamentDetailUpdated => "TOURNAMENT_DETAIL_UPDATED",
            FeedEvent::JoinMatch => "JOIN_MATCH",
            FeedEvent::WinnerUpdated => "WINNER_UPDATED",
            FeedEvent::LeaderboardUpdated => "LEADERBOARD_UPDATED",
            FeedEvent::Other(name) => name,
        }
    }
}

#[derive(Deserialize)]
struct DbUpdate {
    event: String,
}

/// Websocket listener that forwards change events to an mpsc channel.
///
/// Reconnects after [`RECONNECT_DELAY`] whenever the connection drops. The
/// returned task runs until the cancellation token fires or the receiving
/// side of the channel is closed.
pub struct LiveFeed {
    url: String,
    token: CancellationToken,
}

impl LiveFeed {
    pub fn new(url: impl Into<String>) -> Self {
        LiveFeed {
            url: url.into(),
            token: CancellationToken::new(),
        }
    }

    /// Token that stops the listener task when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn run(&self, tx: UnboundedSender<FeedEvent>) -> JoinHandle<()> {
        let url = self.url.clone();
        let token = self.token.clone();
        tokio::spawn(async move {
            loop {
                if token.is_cancelled() {
                    return;
                }
                let ws = tokio::select! {
                    _ = token.cancelled() => return,
                    result = tokio_tungstenite::connect_async(&url) => match result {
                        Ok((ws, _)) => ws,
                        Err(e) => {
                            tracing::warn!("feed connection to {} failed: {}", url, e);
                            tokio::select! {
                                _ = token.cancelled() => return,
                                _ = tokio::time::sleep(RECONNECT_DELAY) => continue,
                            }
                        }
                    },
                };
                tracing::info!("feed connected to {}", url);
                let (_, mut read) = ws.split();
                loop {
                    let message = tokio::select! {
                        _ = token.cancelled() => return,
                        msg = read.next() => msg,
                    };
                    match message {
                        Some(Ok(Message::Text(text))) => {
                            if let Some(event) = decode_frame(&text) {
                                if tx.send(event).is_err() {
                                    return; // receiver dropped, nothing to notify
                                }
                            }
                        }
                        Some(Ok(_)) => {} // pings and binary frames carry nothing useful
                        Some(Err(e)) => {
                            tracing::warn!("feed read error: {}", e);
                            break;
                        }
                        None => {
                            tracing::info!("feed disconnected from {}", url);
                            break;
                        }
                    }
                }
                tokio::select! {
                    _ = token.cancelled() => return,
                    _ = tokio::time::sleep(RECONNECT_DELAY) => {}
                }
            }
        })
    }
}

fn decode_frame(text: &str) -> Option<FeedEvent> {
    match serde_json::from_str::<DbUpdate>(text) {
        Ok(update) => Some(FeedEvent::parse(&update.event)),
        Err(e) => {
            tracing::debug!("ignoring undecodable feed frame: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_event_names_round_trip() {
        for name in [
            "UPCOMING_SCRIM_ADDED",
            "TOURNAMENT_ADDED",
            "TOURNAMENT_DETAIL_UPDATED",
            "JOIN_MATCH",
            "WINNER_UPDATED",
            "LEADERBOARD_UPDATED",
        ] {
            let event = FeedEvent::parse(name);
            assert!(!matches!(event, FeedEvent::Other(_)), "{} not recognized", name);
            assert_eq!(event.name(), name);
        }
    }

    #[test]
    fn unknown_event_is_preserved() {
        let event = FeedEvent::parse("SOMETHING_NEW");
        assert_eq!(event, FeedEvent::Other("SOMETHING_NEW".to_string()));
        assert_eq!(event.name(), "SOMETHING_NEW");
    }

    #[test]
    fn decode_frame_reads_event_field() {
        let event = decode_frame(r#"{"event": "WINNER_UPDATED", "extra": 42}"#);
        assert_eq!(event, Some(FeedEvent::WinnerUpdated));
    }

    #[test]
    fn decode_frame_drops_garbage() {
        assert_eq!(decode_frame("not json"), None);
        assert_eq!(decode_frame(r#"{"no_event": true}"#), None);
    }
}
