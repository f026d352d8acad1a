//! # webhook-core
//!
//! Core types and traits for the webhook bot: the typed [`Update`] envelope and its
//! sub-objects, the [`PlatformClient`] abstraction used to deliver replies,
//! [`WebhookError`], and tracing initialization. Transport-agnostic; used by webhook-bot.

pub mod error;
pub mod logger;
pub mod platform;
pub mod types;

pub use error::{Result, WebhookError};
pub use logger::init_tracing;
pub use platform::{ApiEnvelope, FormParams, PlatformClient, PlatformResponse};
pub use types::{
    CallbackQuery, Chat, ChosenInlineResult, InlineQuery, InlineQueryResultArticle,
    InputTextMessageContent, Location, Message, Update, User,
};
