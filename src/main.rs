//! Elevator status bot binary

use elevator_status::transport::ConsoleTransport;
use elevator_status::{Config, Incoming, Reporter, Result, SessionStore, StatusBot, StatusTracker};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The console stands in for a single chat
const CONSOLE_CHAT: i64 = 1;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    initialize_tracing();

    info!("Starting elevator status bot v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    info!(
        "Bot configuration - Log dir: {}, Menu columns: {}",
        config.log_dir.display(),
        config.menu_columns
    );

    let tracker = StatusTracker::new(&config);
    let transport = Arc::new(ConsoleTransport::new());
    let bot = StatusBot::new(tracker, transport, SessionStore::new(), config.menu_columns);

    let reporter = Reporter::new(0, std::env::var("USER").ok(), None);

    bot.handle(Incoming::Command {
        chat: CONSOLE_CHAT,
        command: "/start".to_string(),
        from: reporter.clone(),
    })
    .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut callback_seq: u64 = 0;

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal");
                break;
            }
        };

        let Some(line) = line else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let incoming = if line.starts_with('/') {
            Incoming::Command {
                chat: CONSOLE_CHAT,
                command: line.to_string(),
                from: reporter.clone(),
            }
        } else {
            callback_seq += 1;
            Incoming::Callback {
                id: callback_seq.to_string(),
                chat: CONSOLE_CHAT,
                message: None,
                data: line.to_string(),
                from: reporter.clone(),
            }
        };

        if let Err(e) = bot.handle(incoming).await {
            warn!("Failed to handle input '{}': {}", line, e);
        }
    }

    info!("Elevator status bot stopped");
    Ok(())
}

/// Initialize structured logging
fn initialize_tracing() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .json();

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
