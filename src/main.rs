use std::sync::Arc;

use clap::{Parser, Subcommand};
use fragzone::data_provider::ListingProvider;
use fragzone::{background, commands, config, tui, SharedData, SharedDataHandle};
use fragzone_api::LiveFeed;
use tokio::sync::{mpsc, RwLock};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Channel Constants
/// Buffer size for manual refresh trigger channel
const REFRESH_CHANNEL_BUFFER_SIZE: usize = 10;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "fragzone")]
#[command(
    about = "Esports tournament and scrim listings CLI",
    long_about = "Esports tournament and scrim listings CLI\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all tournaments with their live status
    Tournaments,
    /// Show the detail record for one tournament
    Detail {
        /// Tournament id (e.g. BGMI-WEEKLY-12)
        tournament_id: String,
    },
    /// List tournaments still open for registration
    Upcoming,
    /// List the scrim schedule
    Scrims,
    /// Register a team for a tournament
    Join {
        /// Tournament id to join
        tournament_id: String,

        /// The four player names, in slot order
        #[arg(short, long, num_args = 4, value_name = "PLAYER")]
        players: Vec<String>,

        /// Contact email (defaults to player_email from the config file)
        #[arg(short, long)]
        email: Option<String>,

        /// 10 digit contact mobile number
        #[arg(short, long)]
        mobile: String,
    },
    /// List declared winners
    Winners,
    /// Show the current leaderboard
    Leaderboard,
    /// Show your joined match
    Profile,
    /// Display current configuration
    Config,
}

fn create_provider(config: &config::Config) -> Arc<dyn ListingProvider> {
    #[cfg(feature = "development")]
    {
        let _ = config;
        return Arc::new(fragzone::dev::MockClient::new());
    }

    #[cfg(not(feature = "development"))]
    match fragzone_api::Client::new(&config.api_base_url) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            let error_msg = format!("Failed to create API client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("api_base_url: {}", cfg.api_base_url);
    println!("feed_url: {}", cfg.feed_url);
    println!(
        "player_email: {}",
        cfg.user_email().unwrap_or("(not set)")
    );
    println!("time_format: {}", cfg.time_format);
    println!("use_unicode: {}", cfg.use_unicode);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("upcoming_fg: {:?}", cfg.theme.upcoming_fg);
    println!("live_fg: {:?}", cfg.theme.live_fg);
    println!("passed_fg: {:?}", cfg.theme.passed_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run TUI mode with background data fetching and the live-update feed
async fn run_tui_mode(config: config::Config) -> Result<(), std::io::Error> {
    let shared_data: SharedDataHandle = Arc::new(RwLock::new(SharedData {
        config: config.clone(),
        ..Default::default()
    }));

    // Manual refresh triggers from the TUI
    let (refresh_tx, refresh_rx) = mpsc::channel::<()>(REFRESH_CHANNEL_BUFFER_SIZE);

    // Change events pushed by the backend
    let (feed_tx, feed_rx) = mpsc::unbounded_channel();
    let feed = LiveFeed::new(&config.feed_url);
    let feed_token = feed.cancellation_token();
    let _feed_handle = feed.run(feed_tx);

    let provider = create_provider(&config);
    let shared_data_clone = Arc::clone(&shared_data);
    let refresh_interval = config.refresh_interval as u64;
    tokio::spawn(async move {
        background::fetch_data_loop(
            provider,
            shared_data_clone,
            refresh_interval,
            refresh_rx,
            feed_rx,
        )
        .await;
    });

    let result = tui::run(shared_data, refresh_tx).await;
    feed_token.cancel();
    result
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &dyn ListingProvider,
    config: &config::Config,
    command: Commands,
) -> anyhow::Result<()> {
    let display = config.display();
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Tournaments => commands::tournaments::run(client, &display).await,
        Commands::Detail { tournament_id } => {
            commands::tournaments::run_detail(client, &tournament_id, &display).await
        }
        Commands::Upcoming => {
            commands::upcoming::run(client, config.user_email(), &display).await
        }
        Commands::Scrims => commands::scrims::run(client, &display).await,
        Commands::Join {
            tournament_id,
            players,
            email,
            mobile,
        } => {
            let email = match email.or_else(|| config.user_email().map(str::to_string)) {
                Some(email) => email,
                None => anyhow::bail!(
                    "No email given. Pass --email or set player_email in the config file."
                ),
            };
            let args = commands::join::JoinArgs {
                tournament_id,
                players,
                email,
                mobile,
            };
            commands::join::run(client, args).await
        }
        Commands::Winners => commands::winners::run(client, &display).await,
        Commands::Leaderboard => commands::leaderboard::run(client, &display).await,
        Commands::Profile => commands::profile::run(client, config.user_email(), &display).await,
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // If no subcommand, run TUI
    if cli.command.is_none() {
        if let Err(e) = run_tui_mode(config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let command = cli.command.unwrap();

    // Handle Config command separately (doesn't need a client)
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    // Create client and execute command
    let client = create_provider(&config);
    if let Err(e) = execute_command(client.as_ref(), &config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
