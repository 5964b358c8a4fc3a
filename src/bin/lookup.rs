//! Command-line lookup tool for char-exp-bot.
//!
//! Runs the same fetch and extraction pipeline as the `char` chat command
//! and prints the result, so the stats provider can be checked without a
//! Discord token.
//!
//! # Usage
//!
//! ```bash
//! # Print the reply the bot would send
//! cargo run --bin lookup -- Gandalf the Grey
//!
//! # Print parsed fields instead
//! cargo run --bin lookup -- --raw Gandalf
//!
//! # Use another provider mirror and a shorter timeout
//! cargo run --bin lookup -- --base-url http://localhost:8080 --timeout 5 Gandalf
//! ```
//!
//! # Environment Variables
//!
//! - `STATS_BASE_URL`, `HTTP_TIMEOUT_SECS`, `HTTP_USER_AGENT` are honored as
//!   defaults for the matching flags

use char_exp_bot::bot::reply;
use char_exp_bot::config::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_STATS_BASE_URL, DEFAULT_USER_AGENT};
use char_exp_bot::prelude::*;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::sync::Arc;
use std::time::Duration;

/// Look up a character's experience figures on guildstats.eu.
#[derive(Parser)]
#[command(name = "lookup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Character name (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    name: Vec<String>,

    /// Stats provider base URL
    #[arg(long, env = "STATS_BASE_URL", default_value = DEFAULT_STATS_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    timeout: u64,

    /// User-Agent header sent to the provider
    #[arg(long, env = "HTTP_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Print parsed fields instead of the chat reply
    #[arg(long)]
    raw: bool,
}

#[tokio::main]
async fn main() {
    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            std::process::exit(1);
        }
    }
}

/// Runs one lookup and prints it. Returns whether the lookup succeeded.
async fn run() -> Result<bool> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let raw_name = cli.name.join(" ");

    let client = GuildStatsClient::new(
        cli.base_url,
        Duration::from_secs(cli.timeout),
        &cli.user_agent,
    )
    .context("Failed to build HTTP client")?;

    let service = LookupService::new(Arc::new(client));

    println!("{}", reply::acknowledgment(raw_name.trim()).bright_blue());

    let result = service.lookup(&raw_name).await;

    if cli.raw {
        print_raw(&result);
    } else {
        match &result {
            Ok(stats) => println!("{}", reply::success(raw_name.trim(), stats).green()),
            Err(err @ AppError::Validation { .. }) => {
                println!("{}", reply::invalid_input(err).yellow())
            }
            Err(err) => println!("{}", reply::failure(raw_name.trim(), err).red()),
        }
    }

    Ok(result.is_ok())
}

/// Prints the parsed fields of a lookup.
///
/// # Output Format
///
/// ```text
///   Monthly total: 7500
///   2024-05-09     +250
///   Source:        https://www.guildstats.eu/character?nick=Gandalf&tab=9
/// ```
fn print_raw(result: &Result<CharacterStats, AppError>) {
    match result {
        Ok(stats) => {
            let total = stats
                .monthly_total
                .map(|t| t.to_string())
                .unwrap_or_else(|| reply::MISSING_VALUE.to_string());

            println!("  Monthly total: {}", total.bright_green().bold());
            for entry in &stats.daily {
                println!(
                    "  {:<14} {}",
                    entry.date.format("%Y-%m-%d").to_string().bright_black(),
                    format!("+{}", entry.exp).bright_green()
                );
            }
            println!("  Source:        {}", stats.url.cyan());
        }
        Err(err) => {
            println!("  {}: {}", err.kind().red(), err);
            if let Some(url) = err.source_url() {
                println!("  Source: {}", url.cyan());
            }
        }
    }
}
