//! CLI administration tool for alias-shortener.
//!
//! Runs the same Create-Mapping and Resolve-Mapping operations as the HTTP
//! API, directly against the database.
//!
//! # Usage
//!
//! ```bash
//! # Create a mapping (prompts for missing values)
//! cargo run --bin admin -- create --url https://example.com/a/b --alias cs391
//!
//! # Look up an alias
//! cargo run --bin admin -- resolve cs391
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection
//! - `BASE_URL` (optional): prefix for printed shortened links

use alias_shortener::AppError;
use alias_shortener::application::services::MappingService;
use alias_shortener::config;
use alias_shortener::infrastructure::persistence::PgMappingRepository;
use alias_shortener::server::connect_pool;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

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
    /// Create a new alias mapping
    Create {
        /// Original URL (must start with http:// or https://)
        #[arg(short, long)]
        url: Option<String>,

        /// Alias to register
        #[arg(short, long)]
        alias: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the URL an alias redirects to
    Resolve {
        /// Alias to look up
        alias: String,
    },

    /// Show statistics
    Stats,

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

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Create { url, alias, yes } => {
            let service = mapping_service(&pool, config.base_url.clone());
            create_mapping(&service, url, alias, yes).await?
        }
        Commands::Resolve { alias } => {
            let service = mapping_service(&pool, config.base_url.clone());
            resolve_mapping(&service, &alias).await?
        }
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn mapping_service(pool: &PgPool, base_url: Option<String>) -> MappingService {
    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));
    MappingService::new(repository, base_url)
}

/// Creates a mapping with interactive prompts for missing values.
///
/// Validation and conflict errors are printed with the same wording the API
/// returns and do not count as a CLI failure.
async fn create_mapping(
    service: &MappingService,
    url: Option<String>,
    alias: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Create Mapping".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let alias = match alias {
        Some(a) => a,
        None => Input::new().with_prompt("Alias").interact_text()?,
    };

    println!();
    println!("  URL:   {}", url.cyan());
    println!("  Alias: {}", alias.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this mapping?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match service.create_mapping(&url, &alias).await {
        Ok(mapping) => {
            let shortened = service.get_shortened_url(&mapping.alias, None);
            println!("{}", "✅ Mapping created!".green().bold());
            println!();
            println!("  {}", shortened.bright_yellow().bold());
            println!();
            Ok(())
        }
        Err(e @ (AppError::Validation(_) | AppError::Conflict { .. })) => {
            println!("{} {}", "⚠️ ".yellow(), e.public_message().yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to create mapping: {}", e)),
    }
}

/// Prints the original URL for an alias.
async fn resolve_mapping(service: &MappingService, alias: &str) -> Result<()> {
    match service.resolve_mapping(alias).await {
        Ok(url) => {
            println!("  {} → {}", alias.cyan(), url.bright_white());
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("  No mapping for '{}'", alias).yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Displays the number of stored mappings and the newest one.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let mappings_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .context("Failed to count mappings")?;

    let newest: Option<(String, DateTime<Utc>)> =
        sqlx::query_as("SELECT alias, created_at FROM urls ORDER BY created_at DESC LIMIT 1")
            .fetch_optional(pool)
            .await
            .context("Failed to load newest mapping")?;

    println!(
        "  Mappings: {}",
        mappings_count.to_string().bright_green().bold()
    );

    if let Some((alias, created_at)) = newest {
        println!(
            "  Newest:   {} ({})",
            alias.cyan(),
            created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }
    println!();

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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
