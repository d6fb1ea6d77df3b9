//! ArkInput shell host CLI

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use arkinput::config::{generate_default_config, Config};

#[derive(Parser)]
#[command(name = "arkinput")]
#[command(version, about = "Serve the ArkInput dashboard", long_about = None)]
struct Cli {
    /// Config file (defaults to the user config dir, then ./arkinput.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the compiled dashboard
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory holding the compiled dashboard
        #[arg(short, long)]
        dist: Option<PathBuf>,
    },

    /// Print a default config file
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{content}"),
            }
            Ok(())
        }
        Commands::Serve { host, port, dist } => {
            let (mut config, source) = match cli.config {
                Some(path) => {
                    let config = Config::load_with_env(&path)?;
                    (config, Some(path))
                }
                None => Config::load_default()?,
            };

            // Command-line flags win over file and environment
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.server.dist_dir = dist;
            }

            arkinput::logging::init(&config.logging).context("Failed to initialize logging")?;

            tracing::info!("ArkInput v{}", env!("CARGO_PKG_VERSION"));
            match source {
                Some(path) => tracing::info!("Loaded config from {}", path.display()),
                None => tracing::info!("No config file found, using defaults"),
            }

            arkinput::server::serve(config.server).await?;
            Ok(())
        }
    }
}
