//! Domain ports for the hexagonal boundary.
//!
//! Driven ports ([`Repository`], [`PriceLookup`]) are implemented by outbound
//! adapters; driving ports ([`CarCatalogue`], [`ManufacturerCatalogue`]) are
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod car_catalogue;
mod manufacturer_catalogue;
mod price_lookup;
mod repository;

#[cfg(test)]
pub use car_catalogue::MockCarCatalogue;
pub use car_catalogue::{CarCatalogue, CarListing};
#[cfg(test)]
pub use manufacturer_catalogue::MockManufacturerCatalogue;
pub use manufacturer_catalogue::ManufacturerCatalogue;
#[cfg(test)]
pub use price_lookup::MockPriceLookup;
pub use price_lookup::{PriceLookup, PriceLookupError};
pub use repository::{
    DEFAULT_PAGE_SIZE, Entity, EntityStream, Repository, RepositoryError, RepositoryExt,
};
