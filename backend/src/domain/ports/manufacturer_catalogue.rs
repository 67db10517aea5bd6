//! Driving port for manufacturer use-cases consumed by inbound adapters.

use async_trait::async_trait;

use crate::domain::{Error, Manufacturer, ManufacturerId};

/// Manufacturer read and write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ManufacturerCatalogue: Send + Sync {
    /// List every manufacturer in ascending id order.
    async fn list_manufacturers(&self) -> Result<Vec<Manufacturer>, Error>;

    /// Fetch a manufacturer; `NotFound` when the id is unknown.
    async fn find_manufacturer(&self, id: ManufacturerId) -> Result<Manufacturer, Error>;

    /// Insert or replace a manufacturer.
    async fn save_manufacturer(&self, manufacturer: Manufacturer) -> Result<Manufacturer, Error>;

    /// Delete a manufacturer; `NotFound` when the id is unknown.
    async fn delete_manufacturer(&self, id: ManufacturerId) -> Result<(), Error>;
}
