//! HTTP server command
//!
//! Connects the pool, applies the schema and runs the server until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use imoveis_server::db::{create_pool, migrations, MemoryStore, PgStore, Store};
use imoveis_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Skip creating the tables at startup
    #[arg(long)]
    pub no_migrate: bool,

    /// Keep data in memory instead of PostgreSQL (lost on exit)
    #[arg(long, conflicts_with = "no_migrate")]
    pub memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn Store> = if args.memory {
        tracing::warn!("Using in-memory store; data is lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(connect(&args.database, !args.no_migrate).await?)
    };

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

async fn connect(database: &DatabaseArgs, migrate: bool) -> Result<PgStore> {
    let pool = create_pool(&database.database_url, database.max_connections)
        .await
        .context("Failed to create database pool")?;
    tracing::info!(max_connections = database.max_connections, "Connected to database");

    if migrate {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    Ok(PgStore::new(pool))
}
