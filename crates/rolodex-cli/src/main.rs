//! Rolodex - terminal users list
//!
//! # Usage
//!
//! ```bash
//! # Fetch the live users list
//! rolodex
//!
//! # Answer from the built-in mock dataset instead of the network
//! rolodex --mock
//!
//! # Look up a single user
//! rolodex --mock --user 15
//!
//! # Point at a different API
//! rolodex --base-url https://example.test
//! ```

use anyhow::Context;
use clap::Parser;
use rolodex_core::intercept::handlers;
use rolodex_core::{
    fetch_user, fixture, Config, FetchState, HttpTransport, InterceptedTransport, Interceptor,
    ListController, ListViewModel, Transport,
};
use rolodex_cli::frame;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(author, version, about = "Terminal users list with a mockable fetch pipeline")]
struct Args {
    /// Path to a YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the users API
    #[arg(short, long, env = "ROLODEX_BASE_URL")]
    base_url: Option<String>,

    /// Answer requests from the built-in mock dataset
    #[arg(short, long)]
    mock: bool,

    /// Fetch a single user by id instead of the list
    #[arg(short, long)]
    user: Option<String>,

    /// Maximum record rows per frame
    #[arg(long, default_value = "10")]
    rows: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    let transport = build_transport(&config);

    if let Some(id) = &args.user {
        let user = fetch_user(transport.as_ref(), &config, id)
            .await
            .with_context(|| format!("Failed to fetch user {id}"))?;
        println!("{:<24} {}", user.full_name(), user.email);
        return Ok(());
    }

    run_list(transport, &config, args.rows).await
}

/// Layer configuration: file first, then command-line overrides.
fn resolve_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if args.mock {
        config.interception_enabled = true;
    }

    config.validate()?;
    Ok(config)
}

/// Build the transport stack, wrapping the HTTP client with the interceptor
/// when mock mode is on.
fn build_transport(config: &Config) -> Arc<dyn Transport> {
    let http = Arc::new(HttpTransport::new());
    if !config.interception_enabled {
        return http;
    }

    let interceptor =
        Arc::new(Interceptor::new().with_delay(Duration::from_millis(config.mock_delay_ms)));
    interceptor.activate(handlers::default_rules(fixture::builtin()));
    info!(
        "Mock interception active with {} rules over {} records",
        interceptor.rule_count(),
        fixture::builtin().len()
    );
    Arc::new(InterceptedTransport::new(interceptor, http))
}

/// Drive the list fetch and print each state transition as a frame.
async fn run_list(
    transport: Arc<dyn Transport>,
    config: &Config,
    rows: usize,
) -> anyhow::Result<()> {
    let mut controller = ListController::new(transport, config);
    let mut rx = controller.subscribe();

    let printer = tokio::spawn(async move {
        loop {
            let state = rx.borrow_and_update().clone();
            // Idle means nothing has started; the first frame is Loading.
            if !matches!(state, FetchState::Idle) {
                let view = ListViewModel::from_state(&state);
                for line in frame(&view, rows) {
                    println!("{line}");
                }
                if state.is_terminal() {
                    break;
                }
            }
            if rx.changed().await.is_err() {
                break;
            }
        }
    });

    controller.activate().await;
    printer.await?;
    Ok(())
}
