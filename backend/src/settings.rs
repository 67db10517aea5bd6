//! Service configuration loaded via OrthoConfig.
//!
//! Values layer command-line flags over `VEHICLES_*` environment variables
//! over an optional configuration file. Unset values fall back to the
//! defaults below.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::DEFAULT_CATALOGUE_SIZE;
use crate::outbound::persistence::PoolConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_MIN_IDLE: u32 = 2;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 30;

/// Runtime settings for the vehicles service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "VEHICLES")]
pub struct ServiceSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL; in-memory repositories are used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Connections kept open while idle.
    pub pool_min_idle: Option<u32>,
    /// Connection checkout timeout in seconds.
    pub pool_timeout_secs: Option<u64>,
    /// Number of vehicle ids priced at startup, starting from 1.
    pub price_catalogue_size: Option<u32>,
    /// Skip inserting the default manufacturers at startup.
    #[ortho_config(default = false)]
    pub skip_manufacturer_seed: bool,
}

impl ServiceSettings {
    /// Interface to bind, `0.0.0.0` unless configured.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Port to bind, 8080 unless configured.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address string accepted by `HttpServer::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }

    /// Number of vehicle ids to price at startup.
    #[must_use]
    pub fn price_catalogue_size(&self) -> u32 {
        self.price_catalogue_size.unwrap_or(DEFAULT_CATALOGUE_SIZE)
    }

    /// Whether the default manufacturers are seeded at startup.
    #[must_use]
    pub const fn seed_manufacturers(&self) -> bool {
        !self.skip_manufacturer_seed
    }

    /// Pool configuration, or `None` when no database URL is set.
    ///
    /// A blank URL counts as unset.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref().map(str::trim)?;
        if url.is_empty() {
            return None;
        }
        Some(
            PoolConfig::new(url)
                .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
                .with_min_idle(Some(self.pool_min_idle.unwrap_or(DEFAULT_POOL_MIN_IDLE)))
                .with_connection_timeout(Duration::from_secs(
                    self.pool_timeout_secs.unwrap_or(DEFAULT_POOL_TIMEOUT_SECS),
                )),
        )
    }
}
