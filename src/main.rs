//! Restaurant directory HTTP API entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use restaurant_api::api::{create_router_with, AppState};
use restaurant_api::config::Config;
use restaurant_api::error::{AppError, Result};
use restaurant_api::metrics;
use restaurant_api::utils::shutdown_signal;

/// Restaurant directory HTTP API.
#[derive(Parser, Debug)]
#[command(name = "restaurant-api")]
#[command(about = "JSON HTTP API serving a restaurants resource")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT from the environment).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides PORT from the environment).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("restaurant_api=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config()?,
        Some(Command::Serve { port }) => cmd_serve(port).await?,
        None => cmd_serve(args.port).await?,
    }

    Ok(())
}

/// Check configuration validity.
fn cmd_check_config() -> Result<()> {
    println!("======================================================================");
    println!("RESTAURANT API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(AppError::Config(e));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(AppError::InvalidConfig(e));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind: {}:{}", config.host, config.port);
    println!(
        "  CORS Origin: {}",
        config.cors_allowed_origin.as_deref().unwrap_or("any")
    );
    println!("  Max Body: {} bytes", config.max_body_bytes);
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server.
async fn cmd_serve(port_override: Option<u16>) -> Result<()> {
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(AppError::InvalidConfig(e));
    }

    // Initialize metrics
    metrics::init_metrics();
    let prometheus = metrics::install_recorder()?;

    let state = AppState::with_prometheus(prometheus);
    let router = create_router_with(state, &config);

    let host: std::net::IpAddr = config
        .host
        .parse()
        .map_err(|_| AppError::InvalidConfig(format!("invalid bind address: {}", config.host)))?;
    let addr = SocketAddr::new(host, config.port);
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
