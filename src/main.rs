//! Payra host
//!
//! Run with: cargo run -- serve
//!
//! Build the front end first (`trunk build` inside `payra-ui/`) so the dist
//! directory contains the SPA shell.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use payra::config::{generate_default_config, Config};
use payra::logging::init_logging;
use payra::server::{serve, AppState};

#[derive(Parser)]
#[command(name = "payra")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the Payra Pay front end")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the compiled front end
    Serve {
        /// Config file (default: search standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory holding the built front end
        #[arg(short, long)]
        dist: Option<PathBuf>,
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

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            dist,
        } => {
            let loaded = match config {
                Some(path) => Config::load_with_env(&path)
                    .with_context(|| format!("loading config from {}", path.display()))?,
                None => Config::load_default(),
            };
            let mut config = loaded.config.clone();

            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.assets.dist_dir = dist;
            }

            init_logging(&config.logging);
            tracing::info!("Starting Payra v{}", env!("CARGO_PKG_VERSION"));
            loaded.log();

            serve(AppState::new(config)).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}
