//! imoveis CLI - runs the properties/rooms HTTP service
//!
//! - `serve`: start the HTTP server on PostgreSQL (or `--memory`)
//! - `migrate`: create the tables and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "imoveis",
    author,
    version,
    about = "CRUD HTTP service for properties and their rooms"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),

    /// Create the database tables and exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables take precedence
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["imoveis", "serve", "--database-url", "postgres://db/x"])
            .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind.port(), 8080);
        assert_eq!(args.database.database_url, "postgres://db/x");
        assert!(!args.memory);
        assert!(!args.no_migrate);
    }

    #[test]
    fn memory_conflicts_with_no_migrate() {
        let result = Cli::try_parse_from(["imoveis", "serve", "--memory", "--no-migrate"]);
        assert!(result.is_err());
    }
}
