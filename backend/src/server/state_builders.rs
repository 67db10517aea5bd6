//! Wiring of repositories, services and the HTTP state.

use std::sync::Arc;

use tracing::info;

use vehicles::domain::ports::{PriceLookup, Repository, RepositoryError};
use vehicles::domain::{Car, Manufacturer, VehicleCatalogueService, seed_default_manufacturers};
use vehicles::inbound::http::state::HttpState;
use vehicles::outbound::memory::InMemoryRepository;
use vehicles::outbound::persistence::{DieselCarRepository, DieselManufacturerRepository};

use super::ServerConfig;

type CarStore = Arc<dyn Repository<Car>>;
type ManufacturerStore = Arc<dyn Repository<Manufacturer>>;

fn build_repositories(config: &ServerConfig) -> (CarStore, ManufacturerStore) {
    match &config.db_pool {
        Some(pool) => {
            info!(backend = "postgres", "using database repositories");
            (
                Arc::new(DieselCarRepository::new(pool.clone())),
                Arc::new(DieselManufacturerRepository::new(pool.clone())),
            )
        }
        None => {
            info!(backend = "memory", "no database configured; using in-memory repositories");
            (
                Arc::new(InMemoryRepository::<Car>::new()),
                Arc::new(InMemoryRepository::<Manufacturer>::new()),
            )
        }
    }
}

/// Build the handler state, seeding manufacturers first when enabled.
pub(super) async fn build_http_state(config: &ServerConfig) -> Result<HttpState, RepositoryError> {
    let (cars, manufacturers) = build_repositories(config);

    if config.seed_manufacturers {
        seed_default_manufacturers(manufacturers.as_ref()).await?;
    }

    let prices: Arc<dyn PriceLookup> = Arc::new(config.prices.clone());
    let catalogue = Arc::new(VehicleCatalogueService::new(
        cars,
        manufacturers,
        Arc::clone(&prices),
    ));
    Ok(HttpState::new(prices, catalogue.clone(), catalogue))
}
