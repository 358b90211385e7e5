//! Service configuration loaded from environment variables (or a `.env`
//! file via `dotenvy`).

use std::net::SocketAddr;

/// Runtime configuration, read once at startup via [`AppConfig::from_env`].
///
/// The backend values are deliberately not validated here: a missing or
/// wrong URL/credential surfaces as a call-time error from the store, not
/// at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Base URL of the managed database service.
    pub service_url: String,

    /// Privileged service-role credential attached to every backend request.
    pub service_role_key: String,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as a
    /// [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;
        let service_url = std::env::var("SERVICE_URL").unwrap_or_default();
        let service_role_key = std::env::var("SERVICE_ROLE_KEY").unwrap_or_default();

        Ok(Self {
            listen_addr,
            service_url,
            service_role_key,
        })
    }
}
