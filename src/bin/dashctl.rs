//! Command-line client for the dash-backend API.
//!
//! Runs the same loaders and delete action as the web dashboard and prints
//! the results to the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List apps, networks or client domains
//! cargo run --bin dashctl -- apps
//! cargo run --bin dashctl -- networks
//! cargo run --bin dashctl -- domains
//!
//! # Show one app with its links
//! cargo run --bin dashctl -- app shop-1
//!
//! # Delete an entry (asks for confirmation unless --yes)
//! cargo run --bin dashctl -- delete 7
//!
//! # Check backend health
//! cargo run --bin dashctl -- health
//! ```
//!
//! # Environment Variables
//!
//! - `DASH_BACKEND_BASE_URL` (optional): overridden by `--backend-url`

use dash_frontend::domain::{DashBackend, LoadResult};
use dash_frontend::infrastructure::backend::{BackendUrl, DEFAULT_BACKEND_BASE_URL, HttpDashBackend};
use dash_frontend::prelude::DashboardService;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI client for the dashboard backend.
#[derive(Parser)]
#[command(name = "dashctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(
        short,
        long,
        env = "DASH_BACKEND_BASE_URL",
        default_value = DEFAULT_BACKEND_BASE_URL
    )]
    backend_url: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List apps
    Apps,

    /// Show one app and its links
    App {
        /// Store id of the app
        storeid: String,
    },

    /// List networks
    Networks,

    /// List client link domains
    Domains,

    /// Delete an app/network entry
    Delete {
        /// Entry id
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check backend health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let backend = HttpDashBackend::with_base_url(BackendUrl::new(cli.backend_url))
        .context("Failed to build backend client")?;
    let service = DashboardService::new(Arc::new(backend));

    match cli.command {
        Commands::Apps => print_result("Apps", &service.list_apps().await)?,
        Commands::Networks => print_result("Networks", &service.list_networks().await)?,
        Commands::Domains => print_result("Client domains", &service.list_link_domains().await)?,
        Commands::App { storeid } => {
            let page = service.app_page(&storeid).await;
            print_result(&format!("App {storeid}"), &page.app_data)?;
            print_result("Links", &page.app_links)?;
        }
        Commands::Delete { id, yes } => delete(&service, id, yes).await?,
        Commands::Health => health(&service).await,
    }

    Ok(())
}

/// Prints a titled payload as pretty JSON, or the failure sentinel in red.
fn print_result(title: &str, result: &LoadResult) -> Result<()> {
    println!("{}", title.bright_blue().bold());

    match result {
        LoadResult::Loaded(value) => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        failed => {
            let sentinel = failed.sentinel().unwrap_or_default();
            match failed {
                LoadResult::Unexpected(status) => {
                    println!("  {} ({})", sentinel.red().bold(), status.as_u16())
                }
                _ => println!("  {}", sentinel.red().bold()),
            }
        }
    }

    println!();
    Ok(())
}

/// Deletes an entry after confirmation.
async fn delete(service: &DashboardService<HttpDashBackend>, id: String, yes: bool) -> Result<()> {
    println!("  Entry: {}", id.cyan());
    println!(
        "  Backend: {}",
        service.backend().base_url().as_str().bright_black()
    );
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete this entry?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    match service.delete_app(Some(&id)).await {
        Ok(()) => println!("{}", "Deleted".green().bold()),
        Err(failure) => anyhow::bail!(failure.error),
    }

    Ok(())
}

/// Reports whether the backend answers its health probe.
async fn health(service: &DashboardService<HttpDashBackend>) {
    let base = service.backend().base_url().as_str().to_string();

    if service.backend().health_check().await {
        println!("{} {}", "Backend healthy:".green().bold(), base);
    } else {
        println!("{} {}", "Backend unreachable:".red().bold(), base);
    }
}
