use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Settings resolved once at start-up. The database is configured
/// separately in `database_config` because it needs async setup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server = ServerConfig::from_env();
        tracing::debug!("Loaded server config: {:?}", server);

        Self {
            server,
            cors: cors_config::init_cors(),
        }
    }
}
