//! Vehicle pricing endpoint.
//!
//! ```text
//! GET /services/price?vehicleId=1
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::PriceLookupError;
use crate::domain::{Error, Price};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_vehicle_id};

const VEHICLE_ID_FIELD: FieldName = FieldName::new("vehicleId");

/// Query string accepted by the pricing endpoint.
///
/// The id is kept as raw text so malformed values surface as domain
/// validation errors instead of framework rejections.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PriceQuery {
    /// Positive vehicle identifier.
    #[param(value_type = i64, example = 1)]
    pub vehicle_id: Option<String>,
}

/// Price payload returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    /// Vehicle the price applies to.
    #[schema(example = 1)]
    pub vehicle_id: i64,
    /// Decimal amount with two fractional digits.
    #[schema(example = "15234.27")]
    pub price: String,
    /// ISO 4217 currency code.
    #[schema(example = "USD")]
    pub currency: String,
}

impl From<Price> for PriceResponse {
    fn from(price: Price) -> Self {
        Self {
            vehicle_id: price.vehicle_id().get(),
            price: price.amount().to_string(),
            currency: price.currency().code().to_owned(),
        }
    }
}

pub(crate) fn map_price_lookup_error(error: PriceLookupError) -> Error {
    match error {
        PriceLookupError::NotFound { vehicle_id } => {
            debug!(vehicle_id, "price lookup miss");
            Error::not_found("Price Not Found")
        }
        PriceLookupError::Unavailable { message } => {
            Error::service_unavailable(format!("price lookup unavailable: {message}"))
        }
    }
}

/// Return the price of a vehicle.
#[utoipa::path(
    get,
    path = "/services/price",
    params(PriceQuery),
    responses(
        (status = 200, description = "Vehicle price", body = PriceResponse),
        (status = 400, description = "Missing or malformed vehicleId", body = ErrorSchema),
        (status = 404, description = "Price Not Found", body = ErrorSchema),
        (status = 503, description = "Price lookup unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["pricing"],
    operation_id = "getPrice"
)]
#[get("/services/price")]
pub async fn get_price(
    state: web::Data<HttpState>,
    query: web::Query<PriceQuery>,
) -> ApiResult<HttpResponse> {
    let vehicle_id = parse_vehicle_id(VEHICLE_ID_FIELD, query.vehicle_id.as_deref())?;
    let price = state
        .prices
        .get_price(vehicle_id)
        .await
        .map_err(map_price_lookup_error)?;
    Ok(HttpResponse::Ok().json(PriceResponse::from(price)))
}

#[cfg(test)]
#[path = "pricing_tests.rs"]
mod tests;
