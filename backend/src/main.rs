//! Vehicles service entry point.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use vehicles::domain::PriceCatalogue;
use vehicles::inbound::http::health::HealthState;
use vehicles::outbound::persistence::DbPool;
use vehicles::settings::ServiceSettings;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = ServiceSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;

    let db_pool = match settings.pool_config() {
        Some(pool_config) => Some(
            DbPool::new(pool_config)
                .await
                .map_err(|err| std::io::Error::other(err.to_string()))?,
        ),
        None => None,
    };

    let prices = PriceCatalogue::generate(settings.price_catalogue_size(), &mut rand::thread_rng());
    info!(priced_vehicles = prices.len(), "price catalogue generated");

    let config = ServerConfig::new(settings.bind_address())
        .with_db_pool(db_pool)
        .with_prices(prices)
        .with_seed_manufacturers(settings.seed_manufacturers());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config).await?;
    info!(address = %settings.bind_address(), "vehicles service listening");
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
