//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories translate between Diesel row structs and domain entities
//! and map every database failure onto
//! [`RepositoryError`](crate::domain::ports::RepositoryError). Connections
//! come from a `bb8` pool of `diesel-async` connections.
//!
//! ```ignore
//! use vehicles::outbound::persistence::{DbPool, DieselCarRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/vehicles")).await?;
//! let cars = DieselCarRepository::new(pool);
//! ```

mod diesel_car_repository;
pub(crate) mod diesel_helpers;
mod diesel_manufacturer_repository;
mod models;
mod pool;
mod schema;

pub use diesel_car_repository::DieselCarRepository;
pub use diesel_manufacturer_repository::DieselManufacturerRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
