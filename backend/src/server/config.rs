//! HTTP server configuration object.

use vehicles::domain::PriceCatalogue;
use vehicles::outbound::persistence::DbPool;

/// Everything `create_server` needs beyond the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: String,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) prices: PriceCatalogue,
    pub(crate) seed_manufacturers: bool,
}

impl ServerConfig {
    /// Configuration with in-memory repositories, an empty price catalogue
    /// and manufacturer seeding enabled.
    #[must_use]
    pub fn new(bind_addr: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            db_pool: None,
            prices: PriceCatalogue::default(),
            seed_manufacturers: true,
        }
    }

    /// Persist through PostgreSQL instead of memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: Option<DbPool>) -> Self {
        self.db_pool = pool;
        self
    }

    /// Serve prices from `prices`.
    #[must_use]
    pub fn with_prices(mut self, prices: PriceCatalogue) -> Self {
        self.prices = prices;
        self
    }

    /// Toggle inserting the default manufacturers before binding.
    #[must_use]
    pub fn with_seed_manufacturers(mut self, enabled: bool) -> Self {
        self.seed_manufacturers = enabled;
        self
    }
}
