//! HTTP server command
//!
//! Connects to PostgreSQL, bootstraps the schema, and serves the inventory
//! API until Ctrl+C / SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use stockctl_server::db::schema;
use stockctl_server::{run_server, ServerConfig};

use super::db::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "STOCKCTL_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Do not create missing tables on startup
    #[arg(long)]
    pub skip_schema: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting stockctl server on {}", args.bind);

    let pool = args.db.connect().await?;

    if args.skip_schema {
        tracing::info!("Skipping schema bootstrap");
    } else {
        schema::ensure(&pool)
            .await
            .context("Failed to bootstrap schema")?;
    }

    // Blocks until shutdown
    run_server(pool, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--database-url",
            "postgres://localhost/stockctl",
        ])
        .unwrap();

        let config = args.server_config();
        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
        assert!(!config.cors_permissive);
        assert!(!args.skip_schema);
        assert_eq!(args.db.max_connections, 5);
    }

    #[test]
    fn overrides() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--cors-permissive",
            "--skip-schema",
            "--database-url",
            "postgres://db/inventory",
            "--max-connections",
            "20",
        ])
        .unwrap();

        assert_eq!(args.bind.port(), 8080);
        assert!(args.server_config().cors_permissive);
        assert!(args.skip_schema);
        assert_eq!(args.db.database_url, "postgres://db/inventory");
        assert_eq!(args.db.max_connections, 20);
    }
}
