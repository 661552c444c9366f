//! Create the inventory tables without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use stockctl_server::db::schema;

use super::db::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = args.db.connect().await?;

    schema::ensure(&pool)
        .await
        .context("Failed to bootstrap schema")?;

    pool.close().await;
    tracing::info!("Database initialized");
    Ok(())
}
