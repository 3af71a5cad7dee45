//! Command implementations for the imoveis CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use clap::Args;

/// Fallback when neither --database-url nor DATABASE_URL is given
pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres@localhost:5433/prova_crud";

/// Database connection options shared by every command that needs one
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides .env)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, default_value_t = imoveis_server::db::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}
