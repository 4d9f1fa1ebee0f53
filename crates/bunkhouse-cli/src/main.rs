//! `bunkhouse` — command-line front end for the Bunkhouse tenancy store.
//!
//! # Usage
//!
//! ```text
//! bunkhouse rooms
//! bunkhouse add --room "RM A" --bunk upper-1 --name Ana --contact 0917
//! bunkhouse pay 3 150.50
//! bunkhouse checkout 3
//! bunkhouse serve            # JSON lines on stdin/stdout
//! ```

mod config;
mod render;

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context as _, Result, anyhow};
use bunkhouse_api::{Api, ErrorCode, Request, Response};
use bunkhouse_core::tenancy::{NewTenancy, TenancyId, format_date};
use bunkhouse_store_sqlite::SqliteStore;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "bunkhouse", version, about = "Bunk and tenant records for a boarding house")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "bunkhouse.toml")]
  config: PathBuf,

  /// SQLite database file; overrides `store_path` from the config.
  #[arg(long, value_name = "FILE")]
  db: Option<PathBuf>,

  /// Print results as JSON instead of text.
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Show the bunk map of one room, or of every configured room.
  Rooms { room: Option<String> },

  /// List current tenants.
  List {
    /// Include tenants who have already left.
    #[arg(long)]
    all: bool,
  },

  /// Show one tenancy record, active or not.
  Show { id: TenancyId },

  /// Assign a tenant to a free bunk.
  Add {
    #[arg(long)]
    room:    String,
    #[arg(long)]
    bunk:    String,
    #[arg(long)]
    name:    String,
    /// Start date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    start:   Option<String>,
    #[arg(long, default_value = "")]
    contact: String,
    /// Planned leave date (YYYY-MM-DD).
    #[arg(long, default_value = "")]
    leave:   String,
    #[arg(long)]
    payment: Option<String>,
  },

  /// Record a payment amount.
  Pay { id: TenancyId, amount: String },

  /// Set the leave date. An empty string clears it.
  Leave { id: TenancyId, date: String },

  /// Mark a tenant as departed today.
  Checkout { id: TenancyId },

  /// Permanently remove a record.
  Delete { id: TenancyId },

  /// Find current tenants by exact name.
  Search { name: String },

  /// Check whether a bunk is occupied.
  Occupancy { room: String, bunk: String },

  /// Serve the JSON-lines API on stdin/stdout.
  Serve,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<ExitCode> {
  // Logs go to stderr so stdout stays clean for command output and `serve`.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut settings = Settings::load(&cli.config)?;
  if let Some(db) = cli.db {
    settings.store_path = db;
  }

  let store = SqliteStore::open(&settings.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", settings.store_path))?;

  let api = Api::new(Arc::new(store), settings.rooms.clone(), settings.bunk_style);

  if let Command::Serve = cli.command {
    tracing::info!(store = ?settings.store_path, "serving JSON lines on stdio");
    api
      .serve_lines(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
      .await
      .context("serving requests")?;
    return Ok(ExitCode::SUCCESS);
  }

  let requests = requests_for(cli.command, &api, &settings);
  let mut status = ExitCode::SUCCESS;

  for request in requests {
    let response = match api.dispatch(request).await {
      Ok(response) => response,
      Err(e) if e.code() == ErrorCode::Storage => return Err(anyhow!(e)),
      Err(e) => {
        status = ExitCode::FAILURE;
        e.into_response()
      }
    };
    print(&response, cli.json, &settings.currency_symbol)?;
  }

  Ok(status)
}

/// Translate a subcommand into one or more API requests.
fn requests_for(
  command: Command,
  api: &Api<SqliteStore>,
  settings: &Settings,
) -> Vec<Request> {
  let today = || format_date(api.store().today());

  match command {
    Command::Rooms { room: Some(room) } => vec![Request::RoomMap { room }],
    Command::Rooms { room: None } => settings
      .rooms
      .iter()
      .map(|r| Request::RoomMap { room: r.name.clone() })
      .collect(),
    Command::List { all: false } => vec![Request::ListActiveTenants],
    Command::List { all: true } => vec![Request::ListAllTenants],
    Command::Show { id } => vec![Request::GetTenant { id }],
    Command::Add { room, bunk, name, start, contact, leave, payment } => {
      vec![Request::CreateTenant(NewTenancy {
        room,
        bunk,
        name,
        start_date: start.unwrap_or_else(today),
        contact_number: contact,
        leave_date: leave,
        payment,
      })]
    }
    Command::Pay { id, amount } => vec![Request::UpdatePayment { id, payment: amount }],
    Command::Leave { id, date } => {
      vec![Request::UpdateLeaveDate { id, leave_date: date }]
    }
    Command::Checkout { id } => {
      vec![Request::UpdateLeaveDate { id, leave_date: today() }]
    }
    Command::Delete { id } => vec![Request::DeleteTenant { id }],
    Command::Search { name } => vec![Request::FindTenantsByName { query: name }],
    Command::Occupancy { room, bunk } => vec![Request::OccupancyOf { room, bunk }],
    Command::Serve => Vec::new(),
  }
}

fn print(response: &Response, json: bool, currency_symbol: &str) -> Result<()> {
  if json {
    println!("{}", serde_json::to_string_pretty(response)?);
  } else if let Response::Error { .. } = response {
    eprintln!("{}", render::render(currency_symbol, response));
  } else {
    println!("{}\n", render::render(currency_symbol, response));
  }
  Ok(())
}
