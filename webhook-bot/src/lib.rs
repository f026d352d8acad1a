//! # Webhook echo bot
//!
//! Receives Telegram updates on `POST /<bot-token>`, answers inline queries with an echo
//! article and messages with a fixed reply. Config from env, served by axum.

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod platform;
pub mod runner;
pub mod server;

pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use dispatcher::{DispatchOutcome, Dispatcher, Responder, Watermark};
pub use platform::HttpPlatformClient;
pub use runner::{build_app, run_server};
pub use server::{router, AppState};

pub use webhook_core::{
    FormParams, InlineQuery, Message, PlatformClient, PlatformResponse, Result, Update, User,
    WebhookError,
};
