//! Core types: the inbound update envelope, its sub-objects, and the inline answer payload.
//!
//! Types are split into one file per main type for easier navigation.

mod chat;
mod inline_query;
mod lenient;
mod message;
mod reply;
mod update;
mod user;

pub use chat::Chat;
pub use inline_query::{ChosenInlineResult, InlineQuery, Location};
pub use message::{CallbackQuery, Message};
pub use reply::{InlineQueryResultArticle, InputTextMessageContent};
pub use update::Update;
pub use user::User;
