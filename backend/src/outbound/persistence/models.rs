//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! to and from domain entities.

use diesel::prelude::*;

use crate::domain::{Car, CarDetails, Condition, Location, Manufacturer, ManufacturerId, VehicleId};

use super::schema::{cars, manufacturers};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = manufacturers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ManufacturerRow {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = manufacturers)]
pub(crate) struct NewManufacturerRow<'a> {
    pub id: i32,
    pub name: &'a str,
}

impl<'a> From<&'a Manufacturer> for NewManufacturerRow<'a> {
    fn from(value: &'a Manufacturer) -> Self {
        Self {
            id: value.id().get(),
            name: value.name(),
        }
    }
}

/// Convert a stored row into a domain manufacturer.
pub(crate) fn row_to_manufacturer(row: ManufacturerRow) -> Result<Manufacturer, String> {
    let row_id = row.id;
    let id = ManufacturerId::new(row_id).map_err(|err| format!("manufacturer {row_id}: {err}"))?;
    Manufacturer::new(id, row.name).map_err(|err| format!("manufacturer {row_id}: {err}"))
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CarRow {
    pub id: i64,
    pub condition: String,
    pub body: String,
    pub model: String,
    pub manufacturer_id: i32,
    pub number_of_doors: Option<i32>,
    pub fuel_type: Option<String>,
    pub engine: Option<String>,
    pub mileage: Option<i32>,
    pub model_year: Option<i32>,
    pub production_year: Option<i32>,
    pub external_color: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

/// Insertable and upsert changeset for cars.
///
/// `treat_none_as_null` makes an upsert clear optional columns the new
/// record leaves empty.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = cars)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct NewCarRow<'a> {
    pub id: i64,
    pub condition: &'a str,
    pub body: &'a str,
    pub model: &'a str,
    pub manufacturer_id: i32,
    pub number_of_doors: Option<i32>,
    pub fuel_type: Option<&'a str>,
    pub engine: Option<&'a str>,
    pub mileage: Option<i32>,
    pub model_year: Option<i32>,
    pub production_year: Option<i32>,
    pub external_color: Option<&'a str>,
    pub lat: f64,
    pub lon: f64,
}

impl<'a> From<&'a Car> for NewCarRow<'a> {
    fn from(car: &'a Car) -> Self {
        let details = car.details();
        Self {
            id: car.id().get(),
            condition: car.condition().as_str(),
            body: &details.body,
            model: &details.model,
            manufacturer_id: details.manufacturer_id.get(),
            number_of_doors: details.number_of_doors,
            fuel_type: details.fuel_type.as_deref(),
            engine: details.engine.as_deref(),
            mileage: details.mileage,
            model_year: details.model_year,
            production_year: details.production_year,
            external_color: details.external_color.as_deref(),
            lat: car.location().lat(),
            lon: car.location().lon(),
        }
    }
}

/// Convert a stored row into a domain car.
pub(crate) fn row_to_car(row: CarRow) -> Result<Car, String> {
    let row_id = row.id;
    let describe = |err: &dyn std::fmt::Display| format!("car {row_id}: {err}");
    let id = VehicleId::new(row.id).map_err(|err| describe(&err))?;
    let condition = row
        .condition
        .parse::<Condition>()
        .map_err(|err| describe(&err))?;
    let manufacturer_id = ManufacturerId::new(row.manufacturer_id).map_err(|err| describe(&err))?;
    let location = Location::new(row.lat, row.lon).map_err(|err| describe(&err))?;
    let details = CarDetails {
        body: row.body,
        model: row.model,
        manufacturer_id,
        number_of_doors: row.number_of_doors,
        fuel_type: row.fuel_type,
        engine: row.engine,
        mileage: row.mileage,
        model_year: row.model_year,
        production_year: row.production_year,
        external_color: row.external_color,
    };
    Car::new(id, condition, details, location).map_err(|err| describe(&err))
}
