//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` and depend only on
//! domain ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CarCatalogue, ManufacturerCatalogue, PriceLookup};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Price lookup behind `/services/price`.
    pub prices: Arc<dyn PriceLookup>,
    /// Car catalogue behind `/cars`.
    pub cars: Arc<dyn CarCatalogue>,
    /// Manufacturer catalogue behind `/manufacturers`.
    pub manufacturers: Arc<dyn ManufacturerCatalogue>,
}

impl HttpState {
    /// Bundle the port implementations used by the handlers.
    pub fn new(
        prices: Arc<dyn PriceLookup>,
        cars: Arc<dyn CarCatalogue>,
        manufacturers: Arc<dyn ManufacturerCatalogue>,
    ) -> Self {
        Self {
            prices,
            cars,
            manufacturers,
        }
    }
}
