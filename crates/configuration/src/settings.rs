use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

/// Parameters for the HTTP listener.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    /// The interface to bind (e.g., "0.0.0.0").
    pub host: String,
    /// The TCP port the web server listens on.
    pub port: u16,
}

impl ApplicationSettings {
    /// The "host:port" string the listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parameters for the database connection pool. The connection URL
/// itself comes from the `DATABASE_URL` environment variable, never
/// from this file.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Upper bound on pooled connections; one connection serves one
    /// request at a time.
    pub max_connections: u32,
    /// How long a request may wait for a free connection before its
    /// query fails.
    pub acquire_timeout_secs: u64,
}
