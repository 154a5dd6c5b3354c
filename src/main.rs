//! Market State CLI
//!
//! Command-line interface for the navigation shell:
//! - Serve the client bundle
//! - Inspect the route table
//! - Resolve paths
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use market_state::config::{generate_default_config, Config, LogFormat, LoggingConfig};
use market_state::server::{serve, AppState};
use market_state::{Resolution, RouteTable};

#[derive(Parser)]
#[command(name = "market-state")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Navigation shell and host server for Market State Analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the client bundle
    Serve {
        /// Host to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory with the built client bundle
        #[arg(long)]
        dist: Option<PathBuf>,
    },

    /// Print the route table
    Routes {
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Resolve a path against the route table
    Resolve {
        /// Concrete path, e.g. /symbol/AAPL
        path: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&config.logging);

    let table = RouteTable::standard();

    match cli.command {
        Commands::Serve { host, port, dist } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.server.dist_dir = dist;
            }

            tracing::info!("Starting Market State v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Client bundle: {:?}", config.server.dist_dir);

            let state = AppState::load(table, config.server.clone())
                .await
                .context("failed to load client bundle (run `trunk build` in market-state-ui)")?;
            serve(state, &config.server).await?;
        }

        Commands::Routes { json } => {
            let routes = table.describe();
            if json {
                println!("{}", serde_json::to_string_pretty(&routes)?);
            } else {
                println!("{:<20} {:<15} {}", "PATTERN", "VIEW", "PARAM");
                for route in routes {
                    println!(
                        "{:<20} {:<15} {}",
                        route.pattern,
                        route.view.name(),
                        route.param.as_deref().unwrap_or("-")
                    );
                }
            }
        }

        Commands::Resolve { path } => match Resolution::resolve(&table, &path) {
            Resolution::Matched(matched) => {
                println!("{} -> {} ({})", path, matched.view.name(), matched.pattern);
                for (name, value) in matched.params.iter() {
                    println!("  {} = {}", name, value);
                }
            }
            Resolution::NotFound { path } => {
                eprintln!("{}: no route matches", path);
                std::process::exit(1);
            }
        },

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("market_state={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
