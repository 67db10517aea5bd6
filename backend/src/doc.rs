//! OpenAPI document for the REST API.
//!
//! Served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::cars::{
    CarDetailsPayload, CarRequest, CarResponse, LocationPayload,
};
use crate::inbound::http::manufacturers::{ManufacturerRequest, ManufacturerResponse};
use crate::inbound::http::pricing::PriceResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the vehicles service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vehicles API",
        description = "Vehicle pricing plus car and manufacturer catalogue."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::pricing::get_price,
        crate::inbound::http::cars::list_cars,
        crate::inbound::http::cars::get_car,
        crate::inbound::http::cars::put_car,
        crate::inbound::http::cars::delete_car,
        crate::inbound::http::manufacturers::list_manufacturers,
        crate::inbound::http::manufacturers::get_manufacturer,
        crate::inbound::http::manufacturers::put_manufacturer,
        crate::inbound::http::manufacturers::delete_manufacturer,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PriceResponse,
        CarRequest,
        CarResponse,
        CarDetailsPayload,
        LocationPayload,
        ManufacturerRequest,
        ManufacturerResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "pricing", description = "Vehicle prices"),
        (name = "cars", description = "Car catalogue"),
        (name = "manufacturers", description = "Manufacturer catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
