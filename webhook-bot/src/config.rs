//! Bot config: token, listen address, platform API URL, logging. Loaded from env.

use anyhow::{Context, Result};
use std::env;
use std::net::{IpAddr, SocketAddr};

/// Platform API base URL used when `TELEGRAM_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Webhook bot config (connectivity and logging only).
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN; doubles as the webhook path secret.
    pub bot_token: String,
    /// PORT
    pub port: u16,
    /// BIND_ADDR
    pub bind_addr: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE; console only when unset.
    pub log_file: Option<String>,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN and `port` overrides PORT if provided.
    pub fn load(token: Option<String>, port: Option<u16>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let port = match port {
            Some(p) => p,
            None => match env::var("PORT") {
                Ok(s) => s
                    .parse()
                    .with_context(|| format!("PORT is not a valid port number: {}", s))?,
                Err(_) => DEFAULT_PORT,
            },
        };
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok().filter(|s| !s.is_empty());

        Ok(Self {
            bot_token,
            port,
            bind_addr,
            telegram_api_url,
            log_file,
        })
    }

    /// Builds config with the given token; other fields take their defaults.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            port: DEFAULT_PORT,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            telegram_api_url: None,
            log_file: None,
        }
    }

    /// Validate config: token usable as a path segment, API URL and bind address parse.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if self.bot_token.contains(['/', '{', '}']) {
            anyhow::bail!("BOT_TOKEN must not contain '/', '{{' or '}}'");
        }
        if self.bot_token.starts_with([':', '*']) {
            anyhow::bail!("BOT_TOKEN must not start with ':' or '*'");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        self.socket_addr()?;
        Ok(())
    }

    /// Platform API base URL without trailing slash.
    pub fn api_url(&self) -> &str {
        self.telegram_api_url
            .as_deref()
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
    }

    /// Address the webhook server listens on.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a valid IP address: {}", self.bind_addr))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Path the platform posts updates to.
    pub fn webhook_path(&self) -> String {
        format!("/{}", self.bot_token)
    }
}
