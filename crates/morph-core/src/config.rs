//! Interceptor configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// User agent sent with page fetches
    pub user_agent: String,
    /// Fetch timeout in seconds
    pub request_timeout_secs: u64,
    /// Redirects followed per fetch
    pub max_redirects: usize,
    /// Session history entries retained before the oldest are dropped
    pub max_history_entries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Morph)".to_string(),
            request_timeout_secs: 12,
            max_redirects: 5,
            max_history_entries: 100,
        }
    }
}
