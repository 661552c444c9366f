//! stockctl CLI - inventory tracking backend
//!
//! Entry point for the `stockctl` binary:
//! - `serve`: run the HTTP API (products, models, receipts)
//! - `init-db`: create the inventory tables and exit
//! - `completions`: print shell completion scripts
//!
//! Settings come from flags, then environment variables, then a `.env`
//! file in the working directory.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "stockctl",
    author,
    version,
    about = "Inventory tracking backend: product categories, priced models, and stock receipts"
)]
struct Cli {
    /// Debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create missing inventory tables and exit
    InitDb(commands::init_db::InitDbArgs),
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; real environment variables take precedence
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::InitDb(args) => commands::run_init_db(args).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    };

    tracing_setup::shutdown_otel();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "stockctl",
            "init-db",
            "--database-url",
            "postgres://localhost/stockctl",
            "--debug",
        ])
        .unwrap();

        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::InitDb(_)));
    }
}
