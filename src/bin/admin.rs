//! CLI administration tool for named-links.
//!
//! Manages links and inspects the database without going through the
//! HTTP API. Every link command runs through the same service layer the
//! server uses, so uniqueness and not-found rules are identical.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- link list
//!
//! # Create a link (prompts for missing values)
//! cargo run --bin admin -- link create --name docs --url https://docs.rs
//!
//! # Replace name and URL of an existing link
//! cargo run --bin admin -- link update <id> --name docs --url https://docs.rs/axum
//!
//! # Delete a link
//! cargo run --bin admin -- link delete <id>
//!
//! # Show where a redirect segment points
//! cargo run --bin admin -- link resolve docs
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use named_links::api::dto::link::{LinkRequest, LinkResponse};
use named_links::application::services::{LinkService, RedirectResolver};
use named_links::config::database_url_from_env;
use named_links::domain::entities::{LinkInput, LinkLookup};
use named_links::error::LinkError;
use named_links::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// CLI tool for managing named-links.
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
    /// Manage links
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

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Create a new link
    Create {
        /// Short name used in the redirect path
        #[arg(short, long)]
        name: Option<String>,

        /// Destination URL
        #[arg(short, long)]
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Replace the name and URL of a link
    Update {
        /// Link id
        id: Uuid,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        url: String,
    },

    /// Delete a link
    Delete {
        /// Link id
        id: Uuid,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the destination a redirect segment resolves to
    Resolve {
        /// Link name or id
        segment: String,
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

type Links = LinkService<PgLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = database_url_from_env()?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: PgPool) -> Result<()> {
    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let links = Arc::new(LinkService::new(repository));

    match action {
        LinkAction::List => list_links(&links).await?,
        LinkAction::Create { name, url, yes } => create_link(&links, name, url, yes).await?,
        LinkAction::Update { id, name, url } => update_link(&links, id, name, url).await?,
        LinkAction::Delete { id, yes } => delete_link(&links, id, yes).await?,
        LinkAction::Resolve { segment } => {
            resolve_segment(RedirectResolver::new(links), &segment).await?
        }
    }

    Ok(())
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   ID                                    Name                 URL
///   ────────────────────────────────────────────────────────────────────
///   6f1c...                               docs                 https://docs.rs
/// ```
async fn list_links(links: &Links) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let all = links.list_links().await.map_err(describe)?;

    if all.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin link create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<37} {:<20} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for link in &all {
        println!(
            "  {:<37} {:<20} {}",
            link.id.to_string().bright_black(),
            link.name.cyan(),
            link.url
        );
    }

    println!();
    println!("  Total: {}", all.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a link, prompting for any value not given on the command line.
async fn create_link(
    links: &Links,
    name: Option<String>,
    url: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Create Link".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let input = validated(name, url)?;

    println!();
    println!("  Name: {}", input.name.cyan());
    println!("  URL:  {}", input.url.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let link = links.create_link(input).await.map_err(describe)?;

    println!("{}", "✅ Link created".green().bold());
    print_json(&LinkResponse::from(link))
}

async fn update_link(links: &Links, id: Uuid, name: String, url: String) -> Result<()> {
    let input = validated(name, url)?;
    let link = links.update_link(id, input).await.map_err(describe)?;

    println!("{}", "✅ Link updated".green().bold());
    print_json(&LinkResponse::from(link))
}

/// Deletes a link after showing it and asking for confirmation (default: No).
async fn delete_link(links: &Links, id: Uuid, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();

    let link = links
        .get_link(&LinkLookup::ById(id))
        .await
        .map_err(describe)?;

    println!("  Name: {}", link.name.cyan());
    println!("  URL:  {}", link.url.bright_white());
    println!("  ID:   {}", link.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    links.delete_link(id).await.map_err(describe)?;

    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

async fn resolve_segment(resolver: RedirectResolver<PgLinkRepository>, segment: &str) -> Result<()> {
    let destination = resolver.resolve(segment).await.map_err(describe)?;

    println!(
        "  /{} {} {}",
        segment.cyan(),
        "→".bright_black(),
        destination.bright_white()
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
            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Links:      {}",
                links_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Applies the same field rules as the HTTP API.
fn validated(name: String, url: String) -> Result<LinkInput> {
    let request = LinkRequest { name, url };
    request
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid link: {e}"))?;
    Ok(request.into())
}

fn print_json(link: &LinkResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(link)?);
    println!();
    Ok(())
}

fn describe(error: LinkError) -> anyhow::Error {
    match error {
        LinkError::DuplicateName { name } => {
            anyhow::anyhow!("A link named '{name}' already exists")
        }
        other => anyhow::anyhow!(other),
    }
}
