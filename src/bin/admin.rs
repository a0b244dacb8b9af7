//! CLI administration tool for shortlink.
//!
//! Works directly against the PostgreSQL storage, without the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Inspect a code
//! cargo run --bin admin -- lookup aZ3k9Q
//!
//! # View totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection
//! - `BASE_URL`: prefix of printed short URLs

use shortlink::application::services::LinkService;
use shortlink::config::{self, StorageBackend};
use shortlink::infrastructure::persistence::PgMappingRepository;
use shortlink::server::connect_pool;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing shortlink.
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
    /// Create a short URL
    Shorten {
        /// URL to shorten (stored verbatim)
        url: String,
    },

    /// Show the mapping behind a code
    Lookup {
        /// Short code
        code: String,
    },

    /// Show link and click totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database diagnostic subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        bail!("admin works only with the postgres storage backend");
    }

    let pool = connect_pool(&config).await?;
    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    let service = LinkService::new(repository, config.base_url.clone())
        .with_code_length(config.code_length);

    match cli.command {
        Commands::Shorten { url } => shorten(&service, url).await?,
        Commands::Lookup { code } => lookup(&service, &code).await?,
        Commands::Stats => stats(&service).await?,
        Commands::Db { action } => match action {
            DbAction::Check => db_check(&service).await?,
        },
    }

    Ok(())
}

async fn shorten(service: &LinkService<PgMappingRepository>, url: String) -> Result<()> {
    let link = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Short URL created".green().bold());
    println!("  Code:      {}", link.code.cyan());
    println!("  Short URL: {}", link.short_url.bright_yellow().bold());

    Ok(())
}

async fn lookup(service: &LinkService<PgMappingRepository>, code: &str) -> Result<()> {
    let mapping = service
        .details(code)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    println!("{}", "🔎 Mapping".bright_blue().bold());
    println!();
    println!("  Code:     {}", mapping.code.cyan());
    println!("  URL:      {}", mapping.original_url.bright_white());
    println!(
        "  Clicks:   {}",
        mapping.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:  {}",
        mapping
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Displays total links and clicks.
async fn stats(service: &LinkService<PgMappingRepository>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let summary = service
        .summary()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  Links:  {}",
        summary.links.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        summary.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn db_check(service: &LinkService<PgMappingRepository>) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());

    service
        .health()
        .await
        .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

    println!("{}", "✅ Database connection OK".green().bold());

    Ok(())
}
