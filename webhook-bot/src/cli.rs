//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "webhook-bot")]
#[command(about = "Telegram webhook echo bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the webhook server (config from env; flags override BOT_TOKEN and PORT).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Load BotConfig from environment. `token` and `port` override BOT_TOKEN and PORT.
pub fn load_config(token: Option<String>, port: Option<u16>) -> Result<BotConfig> {
    BotConfig::load(token, port)
}
