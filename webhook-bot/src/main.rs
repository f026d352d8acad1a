//! Binary for the webhook echo bot.

use anyhow::Result;
use clap::Parser;
use webhook_bot::{load_config, run_server, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, port } => {
            let config = load_config(token, port)?;
            run_server(config).await
        }
    }
}
