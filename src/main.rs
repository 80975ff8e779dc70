use clap::{Parser, Subcommand};
use core_types::{NewRoom, NewRoomType};
use database::{DbError, DbRepository, connect, run_migrations};
use rust_decimal_macros::dec;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Innkeeper room-management backend.
#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            if let Err(e) = handle_serve(args).await {
                eprintln!("Error while serving: {}", e);
            }
        }
        Commands::Migrate => {
            if let Err(e) = handle_migrate().await {
                eprintln!("Error during migration: {}", e);
            }
        }
        Commands::Seed => {
            if let Err(e) = handle_seed().await {
                eprintln!("Error during seeding: {}", e);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A hotel room-management backend: room inventory, guest check-in/out,
/// and operational statistics.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve(ServeArgs),
    /// Apply pending database migrations and exit.
    Migrate,
    /// Insert a small set of room types and rooms for local development.
    Seed,
}

#[derive(Parser)]
struct ServeArgs {
    /// Override the bind host from config.toml.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port from config.toml.
    #[arg(long)]
    port: Option<u16>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let settings = configuration::load_config()?;
    let host = args.host.unwrap_or_else(|| settings.application.host.clone());
    let port = args.port.unwrap_or(settings.application.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    web_server::run_server(addr).await
}

async fn handle_migrate() -> anyhow::Result<()> {
    let settings = configuration::load_config()?;
    let db_pool = connect(&settings.database).await?;
    run_migrations(&db_pool).await?;
    tracing::info!("Database migrations applied.");
    Ok(())
}

/// Seeds a handful of room categories and rooms so a fresh local database
/// has something to list. Re-running is harmless: rows that already exist
/// are skipped.
async fn handle_seed() -> anyhow::Result<()> {
    let settings = configuration::load_config()?;
    let db_pool = connect(&settings.database).await?;
    run_migrations(&db_pool).await?;
    let db_repo = DbRepository::new(db_pool);

    let room_types = [
        ("A01", "Standard", dec!(100.00), "One queen bed, city view"),
        ("A02", "Twin", dec!(120.00), "Two single beds"),
        ("B01", "Deluxe", dec!(180.00), "King bed, corner room"),
        ("C01", "Suite", dec!(320.00), "Separate living room"),
    ];
    for (id, name, price, desc) in room_types {
        let input = NewRoomType {
            room_type_id: id.to_string(),
            room_type_name: name.to_string(),
            room_price: price,
            room_desc: Some(desc.to_string()),
        };
        match db_repo.create_room_type(&input).await {
            Ok(created) => tracing::info!(room_type_id = %created.room_type_id, "seeded room type"),
            Err(DbError::DuplicateKey(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }

    let rooms = [
        ("101", "A01", 1, 1),
        ("102", "A01", 1, 1),
        ("103", "A02", 1, 2),
        ("201", "B01", 2, 1),
        ("202", "B01", 2, 1),
        ("301", "C01", 3, 2),
    ];
    for (no, type_id, floor, beds) in rooms {
        let input = NewRoom {
            room_no: no.to_string(),
            room_type_id: type_id.to_string(),
            room_floor: Some(floor),
            room_bed_count: Some(beds),
            ..NewRoom::default()
        };
        match db_repo.create_room(&input).await {
            Ok(created) => tracing::info!(room_no = %created.room_no, "seeded room"),
            Err(DbError::DuplicateKey(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }

    tracing::info!("Seed data in place.");
    Ok(())
}
