//! Car endpoints.
//!
//! ```text
//! GET    /cars
//! GET    /cars/{id}
//! PUT    /cars/{id}
//! DELETE /cars/{id}
//! ```

use actix_web::{HttpResponse, delete, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Car, CarDetails, Condition, Error, Location, ManufacturerId, VehicleId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::pricing::PriceResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, car_validation_error, invalid_field, parse_vehicle_id,
};

const ID_FIELD: FieldName = FieldName::new("id");
const MANUFACTURER_ID_FIELD: FieldName = FieldName::new("details.manufacturerId");

/// Descriptive car attributes on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarDetailsPayload {
    /// Body style.
    #[schema(example = "sedan")]
    pub body: String,
    /// Model name.
    #[schema(example = "Impala")]
    pub model: String,
    /// Code of an existing manufacturer.
    #[schema(example = 101)]
    pub manufacturer_id: i32,
    /// Door count, positive when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_doors: Option<i32>,
    /// Fuel type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    /// Engine description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    /// Odometer reading, never negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<i32>,
    /// Model year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_year: Option<i32>,
    /// Production year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_year: Option<i32>,
    /// Exterior colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_color: Option<String>,
}

/// Coordinates on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationPayload {
    /// Latitude in degrees.
    #[schema(example = 40.73061)]
    pub lat: f64,
    /// Longitude in degrees.
    #[schema(example = -73.935242)]
    pub lon: f64,
}

/// Request body for `PUT /cars/{id}`; the path carries the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CarRequest {
    /// `NEW` or `USED`.
    #[schema(example = "USED")]
    pub condition: String,
    /// Descriptive attributes.
    pub details: CarDetailsPayload,
    /// Where the car is parked.
    pub location: LocationPayload,
}

/// Car returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    /// Vehicle id.
    #[schema(example = 1)]
    pub id: i64,
    /// `NEW` or `USED`.
    #[schema(example = "USED")]
    pub condition: String,
    /// Descriptive attributes.
    pub details: CarDetailsPayload,
    /// Where the car is parked.
    pub location: LocationPayload,
    /// Present on single-car reads when the price catalogue knows the car.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceResponse>,
}

impl CarRequest {
    fn into_car(self, id: VehicleId) -> Result<Car, Error> {
        let condition = self
            .condition
            .parse::<Condition>()
            .map_err(|err| car_validation_error(&err))?;
        let manufacturer_id = ManufacturerId::new(self.details.manufacturer_id)
            .map_err(|err| invalid_field(MANUFACTURER_ID_FIELD, &err))?;
        let details = CarDetails {
            body: self.details.body,
            model: self.details.model,
            manufacturer_id,
            number_of_doors: self.details.number_of_doors,
            fuel_type: self.details.fuel_type,
            engine: self.details.engine,
            mileage: self.details.mileage,
            model_year: self.details.model_year,
            production_year: self.details.production_year,
            external_color: self.details.external_color,
        };
        let location = Location::new(self.location.lat, self.location.lon)
            .map_err(|err| car_validation_error(&err))?;
        Car::new(id, condition, details, location).map_err(|err| car_validation_error(&err))
    }
}

impl From<&Car> for CarResponse {
    fn from(car: &Car) -> Self {
        let details = car.details();
        Self {
            id: car.id().get(),
            condition: car.condition().as_str().to_owned(),
            details: CarDetailsPayload {
                body: details.body.clone(),
                model: details.model.clone(),
                manufacturer_id: details.manufacturer_id.get(),
                number_of_doors: details.number_of_doors,
                fuel_type: details.fuel_type.clone(),
                engine: details.engine.clone(),
                mileage: details.mileage,
                model_year: details.model_year,
                production_year: details.production_year,
                external_color: details.external_color.clone(),
            },
            location: LocationPayload {
                lat: car.location().lat(),
                lon: car.location().lon(),
            },
            price: None,
        }
    }
}

/// List every car in id order.
#[utoipa::path(
    get,
    path = "/cars",
    responses(
        (status = 200, description = "All cars", body = Vec<CarResponse>),
        (status = 503, description = "Repository unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "listCars"
)]
#[get("/cars")]
pub async fn list_cars(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CarResponse>>> {
    let cars = state.cars.list_cars().await?;
    Ok(web::Json(cars.iter().map(CarResponse::from).collect()))
}

/// Fetch one car together with its price.
#[utoipa::path(
    get,
    path = "/cars/{id}",
    params(("id" = i64, Path, description = "Vehicle identifier")),
    responses(
        (status = 200, description = "Car", body = CarResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Unknown car", body = ErrorSchema),
        (status = 503, description = "Repository unavailable", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "getCar"
)]
#[get("/cars/{id}")]
pub async fn get_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CarResponse>> {
    let id = parse_vehicle_id(ID_FIELD, Some(path.as_str()))?;
    let listing = state.cars.find_car(id).await?;
    let mut response = CarResponse::from(&listing.car);
    response.price = listing.price.map(PriceResponse::from);
    Ok(web::Json(response))
}

/// Create or replace the car stored under `id`.
#[utoipa::path(
    put,
    path = "/cars/{id}",
    params(("id" = i64, Path, description = "Vehicle identifier")),
    request_body = CarRequest,
    responses(
        (status = 200, description = "Saved car", body = CarResponse),
        (status = 400, description = "Invalid car or unknown manufacturer", body = ErrorSchema),
        (status = 409, description = "Constraint violation", body = ErrorSchema),
        (status = 503, description = "Repository unavailable", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "putCar"
)]
#[put("/cars/{id}")]
pub async fn put_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CarRequest>,
) -> ApiResult<web::Json<CarResponse>> {
    let id = parse_vehicle_id(ID_FIELD, Some(path.as_str()))?;
    let car = payload.into_inner().into_car(id)?;
    let saved = state.cars.save_car(car).await?;
    Ok(web::Json(CarResponse::from(&saved)))
}

/// Delete the car stored under `id`.
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    params(("id" = i64, Path, description = "Vehicle identifier")),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Unknown car", body = ErrorSchema),
        (status = 503, description = "Repository unavailable", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "deleteCar"
)]
#[delete("/cars/{id}")]
pub async fn delete_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_vehicle_id(ID_FIELD, Some(path.as_str()))?;
    state.cars.delete_car(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "cars_tests.rs"]
mod tests;
