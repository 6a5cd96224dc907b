pub mod leaderboard;
pub mod scrims;
pub mod tournament_detail;
pub mod tournaments;
pub mod winners;

pub use leaderboard::LeaderboardView;
pub use scrims::ScrimListView;
pub use tournament_detail::TournamentDetailView;
pub use tournaments::TournamentListView;
pub use winners::WinnerListView;
