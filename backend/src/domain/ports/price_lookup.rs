//! Port for resolving the current price of a vehicle.

use async_trait::async_trait;

use crate::domain::{Price, VehicleId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by price lookup adapters.
    pub enum PriceLookupError {
        /// No price is known for the vehicle.
        NotFound { vehicle_id: i64 } => "cannot find price for vehicle {vehicle_id}",
        /// The pricing source could not be reached.
        Unavailable { message: String } => "price lookup unavailable: {message}",
    }
}

/// Resolve prices by vehicle id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceLookup: Send + Sync {
    /// Return the price of `vehicle_id`.
    async fn get_price(&self, vehicle_id: VehicleId) -> Result<Price, PriceLookupError>;
}
