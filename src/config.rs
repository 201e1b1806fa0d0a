//! Runtime configuration.
//!
//! Environment variables are read once, at the process boundary, by
//! [`Config::from_env`]. Everything below the CLI receives an explicit
//! `Config`.

use std::env;

use crate::runn::{Credential, DEFAULT_PAGE_SIZE, StopRule};

pub const API_KEY_ENV: &str = "RUNN_API_KEY";
pub const API_URL_ENV: &str = "RUNN_API_URL";
pub const DEFAULT_API_URL: &str = "https://api.runn.io";
pub const DEFAULT_ACCEPT_VERSION: &str = "1.0.0";

/// Upstream connection settings shared by every tool invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Runn API
    pub api_url: String,
    /// Value of the `Accept-Version` header
    pub accept_version: String,
    /// Default credential used when a call does not pass its own
    pub api_key: Option<Credential>,
    /// Records requested per page
    pub page_size: usize,
    /// Pagination termination rule
    pub stop_rule: StopRule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            accept_version: DEFAULT_ACCEPT_VERSION.to_string(),
            api_key: None,
            page_size: DEFAULT_PAGE_SIZE,
            stop_rule: StopRule::default(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `RUNN_API_URL` and `RUNN_API_KEY`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = env::var(API_URL_ENV).ok().filter(|u| !u.trim().is_empty()) {
            config.api_url = url;
        }
        config.api_key = env::var(API_KEY_ENV).ok().and_then(Credential::new);
        config
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Credential::new(api_key);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_stop_rule(mut self, stop_rule: StopRule) -> Self {
        self.stop_rule = stop_rule;
        self
    }
}
