//! Vehicle catalogue domain service.
//!
//! Implements the [`CarCatalogue`] and [`ManufacturerCatalogue`] driving
//! ports over the car and manufacturer repositories plus the price lookup.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    CarCatalogue, CarListing, ManufacturerCatalogue, PriceLookup, PriceLookupError, Repository,
    RepositoryError, RepositoryExt,
};
use crate::domain::{Car, Error, Manufacturer, ManufacturerId, VehicleId};

/// Catalogue service implementing the vehicle driving ports.
pub struct VehicleCatalogueService<C: ?Sized, M: ?Sized> {
    cars: Arc<C>,
    manufacturers: Arc<M>,
    prices: Arc<dyn PriceLookup>,
}

impl<C: ?Sized, M: ?Sized> Clone for VehicleCatalogueService<C, M> {
    fn clone(&self) -> Self {
        Self {
            cars: Arc::clone(&self.cars),
            manufacturers: Arc::clone(&self.manufacturers),
            prices: Arc::clone(&self.prices),
        }
    }
}

impl<C: ?Sized, M: ?Sized> VehicleCatalogueService<C, M> {
    /// Create a service over the given repositories and price lookup.
    pub fn new(cars: Arc<C>, manufacturers: Arc<M>, prices: Arc<dyn PriceLookup>) -> Self {
        Self {
            cars,
            manufacturers,
            prices,
        }
    }
}

fn map_repository_error(store: &str, error: RepositoryError) -> Error {
    match error {
        RepositoryError::Connection { message } => {
            Error::service_unavailable(format!("{store} repository unavailable: {message}"))
        }
        RepositoryError::Query { message } => {
            Error::internal(format!("{store} repository error: {message}"))
        }
        RepositoryError::Constraint { message } => Error::conflict(format!(
            "{store} change violates a constraint: {message}"
        ))
        .with_details(json!({ "code": "constraint_violation" })),
    }
}

fn unknown_manufacturer(id: ManufacturerId) -> Error {
    Error::invalid_request(format!("manufacturer {id} does not exist")).with_details(json!({
        "field": "manufacturerId",
        "value": id.get(),
        "code": "unknown_manufacturer",
    }))
}

#[async_trait]
impl<C, M> CarCatalogue for VehicleCatalogueService<C, M>
where
    C: Repository<Car> + ?Sized,
    M: Repository<Manufacturer> + ?Sized,
{
    async fn list_cars(&self) -> Result<Vec<Car>, Error> {
        let cars: Vec<Car> = self
            .cars
            .find_all()
            .try_collect()
            .await
            .map_err(|err| map_repository_error("car", err))?;
        Ok(cars)
    }

    async fn find_car(&self, id: VehicleId) -> Result<CarListing, Error> {
        let car = self
            .cars
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error("car", err))?
            .ok_or_else(|| Error::not_found(format!("car {id} not found")))?;

        let price = match self.prices.get_price(id).await {
            Ok(price) => Some(price),
            Err(PriceLookupError::NotFound { .. }) => {
                debug!(vehicle_id = id.get(), "car has no catalogued price");
                None
            }
            Err(PriceLookupError::Unavailable { message }) => {
                return Err(Error::service_unavailable(format!(
                    "price lookup unavailable: {message}"
                )));
            }
        };

        Ok(CarListing { car, price })
    }

    async fn save_car(&self, car: Car) -> Result<Car, Error> {
        let manufacturer_id = car.details().manufacturer_id;
        let exists = self
            .manufacturers
            .find_by_id(manufacturer_id)
            .await
            .map_err(|err| map_repository_error("manufacturer", err))?
            .is_some();
        if !exists {
            return Err(unknown_manufacturer(manufacturer_id));
        }

        self.cars
            .save(&car)
            .await
            .map_err(|err| map_repository_error("car", err))?;
        Ok(car)
    }

    async fn delete_car(&self, id: VehicleId) -> Result<(), Error> {
        let removed = self
            .cars
            .delete_by_id(id)
            .await
            .map_err(|err| map_repository_error("car", err))?;
        if removed {
            Ok(())
        } else {
            Err(Error::not_found(format!("car {id} not found")))
        }
    }
}

#[async_trait]
impl<C, M> ManufacturerCatalogue for VehicleCatalogueService<C, M>
where
    C: Repository<Car> + ?Sized,
    M: Repository<Manufacturer> + ?Sized,
{
    async fn list_manufacturers(&self) -> Result<Vec<Manufacturer>, Error> {
        let manufacturers: Vec<Manufacturer> = self
            .manufacturers
            .find_all()
            .try_collect()
            .await
            .map_err(|err| map_repository_error("manufacturer", err))?;
        Ok(manufacturers)
    }

    async fn find_manufacturer(&self, id: ManufacturerId) -> Result<Manufacturer, Error> {
        self.manufacturers
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error("manufacturer", err))?
            .ok_or_else(|| Error::not_found(format!("manufacturer {id} not found")))
    }

    async fn save_manufacturer(&self, manufacturer: Manufacturer) -> Result<Manufacturer, Error> {
        self.manufacturers
            .save(&manufacturer)
            .await
            .map_err(|err| map_repository_error("manufacturer", err))?;
        Ok(manufacturer)
    }

    async fn delete_manufacturer(&self, id: ManufacturerId) -> Result<(), Error> {
        let removed = self
            .manufacturers
            .delete_by_id(id)
            .await
            .map_err(|err| map_repository_error("manufacturer", err))?;
        if removed {
            Ok(())
        } else {
            Err(Error::not_found(format!("manufacturer {id} not found")))
        }
    }
}

#[cfg(test)]
#[path = "catalogue_service_tests.rs"]
mod tests;
