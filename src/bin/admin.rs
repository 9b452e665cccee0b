//! CLI administration tool for link-shortener.
//!
//! Talks to the PostgreSQL store directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- link shorten https://example.com --alias promo
//!
//! # Look up a code
//! cargo run --bin admin -- link resolve promo
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db info
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//! - `BASE_URL` (optional): prefix for printed short URLs
//! - `CODE_LENGTH`, `MAX_GENERATION_ATTEMPTS` (optional): generator settings,
//!   validated the same way as for the server

use link_shortener::application::services::{CodeGenerator, ResolutionService, ShorteningService};
use link_shortener::config::{self, Config, mask_connection_string};
use link_shortener::infrastructure::persistence::PgLinkStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create and look up short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL
    Shorten {
        /// Long URL (prompted for if omitted)
        url: Option<String>,

        /// Custom alias to use instead of a random code
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the long URL for a short code
    Resolve {
        code: String,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info and link count
    Info,

    /// Apply pending migrations
    Migrate {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = match config.database_url.clone() {
        Some(url) => url,
        None => Config::load_database_url()?,
    };

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", mask_connection_string(&database_url)))?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, pool: PgPool, config: &Config) -> Result<()> {
    let store = Arc::new(PgLinkStore::new(Arc::new(pool)));

    match action {
        LinkAction::Shorten { url, alias } => shorten(store, config, url, alias).await,
        LinkAction::Resolve { code } => resolve(store, code).await,
    }
}

async fn shorten(
    store: Arc<PgLinkStore>,
    config: &Config,
    url: Option<String>,
    alias: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let long_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Long URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let generator = CodeGenerator::with_settings(
        store.clone(),
        config.code_length,
        config.max_generation_attempts,
    )?;
    let service = ShorteningService::with_generator(store, generator);

    let shortened = service
        .shorten(&long_url, alias.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    if shortened.created {
        println!("{}", "✅ Short link created".green().bold());
    } else {
        println!("{}", "♻️  URL was already shortened".yellow());
    }
    println!();
    println!("  Code:      {}", shortened.link.code.bright_yellow().bold());
    println!(
        "  Short URL: {}/{}",
        config.base_url.trim_end_matches('/').cyan(),
        shortened.link.code.cyan()
    );
    println!("  Long URL:  {}", shortened.link.long_url.bright_white());
    println!();

    Ok(())
}

async fn resolve(store: Arc<PgLinkStore>, code: String) -> Result<()> {
    let service = ResolutionService::new(store);

    let link = service
        .resolve(&code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!(
        "  {} → {}",
        link.code.bright_yellow().bold(),
        link.long_url.bright_white()
    );

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let store = PgLinkStore::new(Arc::new(pool.clone()));
            let links = store
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().bright_green().bold());
            println!();
        }
        DbAction::Migrate { yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Apply pending migrations?")
                    .default(true)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
