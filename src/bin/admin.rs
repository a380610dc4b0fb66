//! CLI administration tool for seqlink.
//!
//! Creates and inspects short links, and converts between sequence numbers and
//! short codes, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a short link (prompts for the URL if omitted)
//! cargo run --bin admin -- create https://example.com
//!
//! # Resolve a code (counts as a click)
//! cargo run --bin admin -- resolve 1B
//!
//! # Show the click count of a code
//! cargo run --bin admin -- clicks 1B
//!
//! # Convert between sequence numbers and codes
//! cargo run --bin admin -- encode 1000
//! cargo run --bin admin -- decode G8
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check store connections
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`seqlink::config`]. `encode` and `decode` only
//! read `CODE_ALPHABET` and never touch a store.

use seqlink::application::services::LinkService;
use seqlink::config::{self, Config};
use seqlink::server::build_link_service;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing seqlink.
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
    /// Create a short link
    Create {
        /// URL to shorten (prompted for if omitted)
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Resolve a short code to its URL (counts as a click)
    Resolve {
        code: String,
    },

    /// Show the click count of a short code
    Clicks {
        code: String,
    },

    /// Encode a sequence number as a short code
    Encode {
        sequence: u64,
    },

    /// Decode a short code into its sequence number
    Decode {
        code: String,
    },

    /// Show statistics
    Stats,

    /// Store operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Store diagnostic subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check counter store and link store connections
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Encode { sequence } => encode(&config, sequence)?,
        Commands::Decode { code } => decode(&config, &code)?,
        command => {
            let service = build_link_service(&config)
                .await
                .context("Failed to initialize stores")?;
            run_store_command(command, &service).await?;
        }
    }

    Ok(())
}

/// Dispatches commands that need the link service.
async fn run_store_command(command: Commands, service: &LinkService) -> Result<()> {
    match command {
        Commands::Create { url, yes } => create_link(service, url, yes).await,
        Commands::Resolve { code } => resolve_link(service, &code).await,
        Commands::Clicks { code } => show_clicks(service, &code).await,
        Commands::Stats => show_stats(service).await,
        Commands::Db {
            action: DbAction::Check,
        } => check_stores(service).await,
        Commands::Encode { .. } | Commands::Decode { .. } => Ok(()),
    }
}

/// Creates a short link, prompting for the URL when it was not given.
async fn create_link(service: &LinkService, url: Option<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL to shorten")
            .with_initial_text("https://")
            .interact_text()?,
    };

    url::Url::parse(&url).with_context(|| format!("'{url}' is not a valid URL"))?;

    println!("  URL: {}", url.cyan());
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

    let link = service
        .create_short_link(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!();
    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    println!("  Code:      {}", link.code.bright_yellow().bold());
    println!(
        "  Short URL: {}",
        service.short_url(&link.code).bright_cyan()
    );
    println!();

    Ok(())
}

async fn resolve_link(service: &LinkService, code: &str) -> Result<()> {
    let url = service
        .resolve(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve '{}': {}", code, e))?;

    println!("  {} → {}", code.bright_yellow(), url.cyan());

    Ok(())
}

async fn show_clicks(service: &LinkService, code: &str) -> Result<()> {
    let clicks = service
        .get_clicks(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read clicks for '{}': {}", code, e))?;

    println!(
        "  {} → {} clicks",
        code.bright_yellow(),
        clicks.to_string().bright_green().bold()
    );

    Ok(())
}

fn encode(config: &Config, sequence: u64) -> Result<()> {
    let encoder = config.code_encoder()?;
    println!("  {} → {}", sequence, encoder.encode(sequence).bright_yellow());
    Ok(())
}

fn decode(config: &Config, code: &str) -> Result<()> {
    let encoder = config.code_encoder()?;
    let sequence = encoder
        .decode(code)
        .with_context(|| format!("'{code}' is not a valid short code"))?;
    println!("  {} → {}", code.bright_yellow(), sequence);
    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of links
/// - Current value of the sequence counter
async fn show_stats(service: &LinkService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = service
        .count_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    let sequence = service
        .allocator()
        .current()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read sequence counter: {}", e))?;

    println!(
        "  Links:     {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Sequence:  {} ({})",
        sequence.unwrap_or(0).to_string().bright_green().bold(),
        service.allocator().namespace().bright_black()
    );

    // Each failed insert burns a number, so the counter can run ahead of the link count.
    if let Some(value) = sequence
        && value > links_count
    {
        println!(
            "  Skipped:   {}",
            (value - links_count).to_string().yellow()
        );
    }
    println!();

    Ok(())
}

/// Checks that both stores are reachable.
async fn check_stores(service: &LinkService) -> Result<()> {
    println!("{}", "🔍 Checking store connections...".bright_blue());

    let health = service.health().await;

    let label = |ok: bool| if ok { "OK".green() } else { "FAILED".red() };
    println!("  Counter store: {}", label(health.counter_store));
    println!("  Link store:    {}", label(health.link_store));

    if !health.is_healthy() {
        anyhow::bail!("One or more stores are unreachable");
    }

    println!("{}", "✅ All stores reachable".green().bold());

    Ok(())
}
