use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblio_db::{Database, DbConfig};
use biblio_server::{create_router, CatalogService};

#[derive(Parser)]
#[command(name = "biblio-server")]
#[command(about = "Digital library catalog API")]
struct Cli {
    /// Port for the HTTP API
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Path to the SQLite database file
    /// (falls back to BIBLIO_DATABASE, then ./biblio.db)
    #[arg(short, long)]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "biblio_server=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let database_path = cli
        .database
        .or_else(|| std::env::var("BIBLIO_DATABASE").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("biblio.db"));

    tracing::info!(
        path = %database_path.display(),
        "Starting biblio-server"
    );

    // Schema migration is an explicit startup step: DbConfig defaults to
    // running pending migrations before the first request is served.
    let db = Database::new(DbConfig::new(database_path)).await?;

    let app = create_router(CatalogService::new(db));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", cli.port)).await?;
    tracing::info!("biblio-server listening on http://127.0.0.1:{}", cli.port);

    axum::serve(listener, app).await?;

    Ok(())
}
