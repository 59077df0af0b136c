//! CLI administration tool for littlelink.
//!
//! Works directly against the SQLite database, without the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Store a link
//! cargo run --bin admin -- link add abc https://example.com
//!
//! # Look one up
//! cargo run --bin admin -- link get abc
//!
//! # List everything
//! cargo run --bin admin -- link list
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db init
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_PATH`: same resolution as the server

use littlelink::application::services::LinkService;
use littlelink::config::{self, Config};
use littlelink::domain::entities::Link;
use littlelink::domain::repositories::LinkRepository;
use littlelink::error::AppError;
use littlelink::infrastructure::persistence::{PoolSettings, SqliteLinkRepository, connect};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing littlelink.
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
    /// Manage stored links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Store a new identifier/URL pair
    Add {
        /// Identifier clients will look up
        id: String,

        /// Target URL, stored verbatim
        url: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the URL stored for an identifier
    Get {
        /// Identifier to look up
        id: String,
    },

    /// List every stored link
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the Links table if it is missing
    Init,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect(&config.database_url, &PoolSettings::from(&config))
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    let repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));

    match cli.command {
        Commands::Link { action } => handle_link_action(action, repo).await?,
        Commands::Stats => handle_stats(&repo).await?,
        Commands::Db { action } => handle_db_action(action, &repo, &config).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, repo: Arc<SqliteLinkRepository>) -> Result<()> {
    repo.init_schema()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialise schema: {}", e))?;

    match action {
        LinkAction::Add { id, url, yes } => {
            add_link(LinkService::new(repo), id, url, yes).await?;
        }
        LinkAction::Get { id } => {
            get_link(LinkService::new(repo), id).await?;
        }
        LinkAction::List => {
            list_links(repo).await?;
        }
    }

    Ok(())
}

/// Stores a link after an optional confirmation.
async fn add_link(
    service: LinkService<SqliteLinkRepository>,
    id: String,
    url: String,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Add Link".bright_blue().bold());
    println!();
    println!("  ID:  {}", id.cyan());
    println!("  URL: {}", url.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Store this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match service.write(Link::new(id.clone(), url)).await {
        Ok(()) => {
            println!("{}", "✅ Link stored".green().bold());
            println!();
            println!("{}", "Fetch it with:".bright_white());
            println!(
                "  curl http://localhost:3000/api/{}",
                id.bright_yellow()
            );
            println!();
            Ok(())
        }
        Err(AppError::Conflict { .. }) => {
            anyhow::bail!("Identifier '{}' is already taken", id)
        }
        Err(e) => Err(anyhow::anyhow!("Failed to store link: {}", e)),
    }
}

/// Prints the URL stored for an identifier.
async fn get_link(service: LinkService<SqliteLinkRepository>, id: String) -> Result<()> {
    let link = service
        .fetch(&id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch link: {}", e))?;

    match link {
        Some(link) => {
            println!("  {} → {}", link.id.cyan(), link.url.bright_white());
        }
        None => {
            println!("{}", format!("  No link stored for '{}'", id).yellow());
        }
    }

    Ok(())
}

/// Lists every stored link.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   ID                   URL
///   ───────────────────────────────────────────────────────────────────────────
///   abc                  https://example.com
/// ```
async fn list_links(repo: Arc<SqliteLinkRepository>) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Add one with: {} admin link add <ID> <URL>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<20} {}",
        "ID".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!("  {:<20} {}", link.id.cyan(), link.url);
    }

    println!();
    println!(
        "  Total: {}",
        links.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays the number of stored links.
async fn handle_stats(repo: &SqliteLinkRepository) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    repo.init_schema()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialise schema: {}", e))?;

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Links")
        .fetch_one(repo.pool())
        .await?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    repo: &SqliteLinkRepository,
    config: &Config,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            if !repo.health_check().await {
                anyhow::bail!("Database did not answer");
            }

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Init => {
            repo.init_schema()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to initialise schema: {}", e))?;

            println!("{}", "✅ Links table ready".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(repo.pool())
                .await?;

            println!("  SQLite:   {}", version.bright_white());
            println!("  Database: {}", config.database_url.bright_white());
            println!();
        }
    }

    Ok(())
}
