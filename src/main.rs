// src/main.rs
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, info};

mod artifacts;
mod builds;
mod config;
mod logging;
mod s3;
mod server;
#[cfg(test)]
mod test_utils;

use crate::artifacts::{ArtifactLocator, BuildIdentity};
use crate::builds::{BuildStore, FileBuildStore};
use crate::s3::{Profiles, S3Storage};
use crate::server::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config.toml",
        global = true
    )]
    config: String,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve download redirects over HTTP
    Serve,
    /// Print a signed download URL for one artifact
    Sign {
        /// Full project name
        #[arg(long)]
        project: String,

        /// Build number
        #[arg(long)]
        build: u32,

        /// Artifact path as uploaded, e.g. out/app.jar
        #[arg(long)]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match config::load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {:#}", cli.config, e);
            process::exit(1);
        }
    };

    let _log_guard = logging::init_logging(config.logging.as_ref(), cli.verbose)?;

    info!("S3 Artifacts v{}", env!("CARGO_PKG_VERSION"));
    info!("Loaded configuration from: {}", cli.config);

    let result = match cli.command {
        Commands::Serve => run_server(config).await,
        Commands::Sign {
            project,
            build,
            path,
        } => sign_artifact(config, BuildIdentity::new(project, build), &path).await,
    };

    if let Err(e) = result {
        error!("{:#}", e);
        process::exit(1);
    }

    Ok(())
}

async fn initialize_locator(config: &config::Config) -> Result<ArtifactLocator<S3Storage>> {
    let profiles = Profiles::<S3Storage>::from_config(&config.profiles)
        .await
        .context("Failed to set up S3 profiles")?;
    Ok(ArtifactLocator::new(profiles))
}

/// Run the HTTP server with manifest-backed builds and real S3 signing
async fn run_server(config: config::Config) -> Result<()> {
    let locator = initialize_locator(&config).await?;
    let build_store = FileBuildStore::new(&config.builds.root);

    info!("Serving builds from {}", build_store.root().display());

    server::serve(
        &config.server.listen_addr,
        AppState::new(build_store, locator),
    )
    .await
}

/// Sign one artifact of one build and print the URL
async fn sign_artifact(config: config::Config, build: BuildIdentity, path: &str) -> Result<()> {
    let locator = initialize_locator(&config).await?;
    let build_store = FileBuildStore::new(&config.builds.root);

    let action = build_store
        .get_action(&build)
        .await?
        .ok_or_else(|| anyhow!("Build {} has no S3 artifacts", build))?;

    let rest_of_path = format!("/{}", path.trim_start_matches('/'));
    let url = locator
        .download(Some(&rest_of_path), &action, &build)
        .await?
        .ok_or_else(|| anyhow!("No artifact path given"))?;

    println!("{}", url);
    Ok(())
}
