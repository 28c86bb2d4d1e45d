//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub secret: String,
    /// Upper bound accepted for the `rpp` request parameter.
    pub max_page_size: usize,
    /// Seconds SQLite waits on a locked database before failing.
    pub busy_timeout_secs: u64,
}
