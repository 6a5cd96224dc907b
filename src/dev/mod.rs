/// Development utilities: a mock client that serves fixture data so the
/// TUI and commands can run without a backend.
pub mod mock_client;

pub use mock_client::MockClient;
