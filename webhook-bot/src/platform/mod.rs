//! Platform layer: HTTP implementation of [`webhook_core::PlatformClient`] for the Telegram Bot API.

mod http_client;

pub use http_client::{mask_token, HttpPlatformClient};
