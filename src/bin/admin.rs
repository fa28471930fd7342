//! CLI administration tool for alias-shortener.
//!
//! Works directly against the database, without the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Save a URL under a generated alias
//! cargo run --bin admin -- save https://example.com
//!
//! # Save a URL under a chosen alias
//! cargo run --bin admin -- save https://example.com --alias docs
//!
//! # Show a mapping
//! cargo run --bin admin -- get docs
//!
//! # Delete a mapping
//! cargo run --bin admin -- delete docs
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`DATABASE_URL`, `ALIAS_LENGTH`, `DOMAIN_PREFIX`, ...).

use alias_shortener::application::services::UrlService;
use alias_shortener::config::{self, Config};
use alias_shortener::domain::repositories::UrlRepository;
use alias_shortener::infrastructure::persistence::SqliteUrlRepository;
use alias_shortener::server::open_repository;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Save a URL
    Save {
        /// The URL to shorten
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the record stored under an alias
    Get {
        /// Alias to look up
        alias: String,
    },

    /// Delete the record stored under an alias
    Delete {
        /// Alias to delete
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    // Storage causes are only reported through logs
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_target(false)
        .init();

    let repository = Arc::new(open_repository(&config).await?);
    let service = UrlService::new(repository.clone(), config.alias_length);

    match cli.command {
        Commands::Save { url, alias } => save(&service, &config, url, alias).await?,
        Commands::Get { alias } => get(&service, &config, &alias).await?,
        Commands::Delete { alias, yes } => delete(&service, &alias, yes).await?,
        Commands::Db { action } => match action {
            DbAction::Check => check_db(&repository, &config).await?,
        },
    }

    Ok(())
}

async fn save<R: UrlRepository>(
    service: &UrlService<R>,
    config: &Config,
    url: String,
    alias: Option<String>,
) -> Result<()> {
    let alias = service
        .shorten(&url, alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to save URL: {}", e))?;

    println!("{}", "✅ URL saved".green().bold());
    println!("  Alias: {}", alias.cyan());
    println!(
        "  Link:  {}",
        format!("{}{}", config.domain_prefix, alias).bright_yellow()
    );

    Ok(())
}

async fn get<R: UrlRepository>(
    service: &UrlService<R>,
    config: &Config,
    alias: &str,
) -> Result<()> {
    let record = service
        .inspect(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to look up '{}': {}", alias, e))?;

    println!("{}", "Record:".bright_white().bold());
    println!("  ID:      {}", record.id);
    println!("  Alias:   {}", record.alias.cyan());
    println!(
        "  Link:    {}",
        format!("{}{}", config.domain_prefix, record.alias).bright_yellow()
    );
    println!("  Target:  {}", record.target_url);
    println!("  Created: {}", record.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("  Updated: {}", record.updated_at.format("%Y-%m-%d %H:%M:%S"));

    Ok(())
}

/// Deletes a mapping after confirmation (unless `--yes`).
async fn delete<R: UrlRepository>(
    service: &UrlService<R>,
    alias: &str,
    skip_confirm: bool,
) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete alias '{}'?", alias))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted_url = service
        .remove(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete '{}': {}", alias, e))?;

    println!("{}", "✅ Deleted".green().bold());
    println!("  URL: {}", deleted_url);

    Ok(())
}

async fn check_db(repository: &SqliteUrlRepository, config: &Config) -> Result<()> {
    println!("{}", "Checking database connection...".bright_white());

    match repository.ping().await {
        Ok(()) => {
            println!("{}", "✅ Database reachable".green().bold());
            println!("  {}", config.database_url.dimmed());
        }
        Err(e) => {
            println!("{} {}", "❌ Database check failed:".red().bold(), e);
            anyhow::bail!("database check failed");
        }
    }

    Ok(())
}
