//! Driving port for car use-cases consumed by inbound adapters.

use async_trait::async_trait;

use crate::domain::{Car, Error, Price, VehicleId};

/// A car together with its current price, when one is known.
#[derive(Debug, Clone, PartialEq)]
pub struct CarListing {
    /// The stored car.
    pub car: Car,
    /// Catalogue price, absent when the car is not priced.
    pub price: Option<Price>,
}

/// Car read and write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarCatalogue: Send + Sync {
    /// List every car in ascending id order.
    async fn list_cars(&self) -> Result<Vec<Car>, Error>;

    /// Fetch a car and its price; `NotFound` when the id is unknown.
    async fn find_car(&self, id: VehicleId) -> Result<CarListing, Error>;

    /// Insert or replace a car; its manufacturer must exist.
    async fn save_car(&self, car: Car) -> Result<Car, Error>;

    /// Delete a car; `NotFound` when the id is unknown.
    async fn delete_car(&self, id: VehicleId) -> Result<(), Error>;
}
