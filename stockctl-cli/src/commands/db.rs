//! Database connection arguments shared by commands

use anyhow::{Context, Result};
use clap::Args;
use stockctl_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use stockctl_server::PgPool;

#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "STOCKCTL_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub async fn connect(&self) -> Result<PgPool> {
        tracing::debug!(max_connections = self.max_connections, "Connecting to database");

        stockctl_server::create_pool_with_options(&self.database_url, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}
