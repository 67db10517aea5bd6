//! Manufacturer endpoints.
//!
//! ```text
//! GET    /manufacturers
//! GET    /manufacturers/{id}
//! PUT    /manufacturers/{id}
//! DELETE /manufacturers/{id}
//! ```

use actix_web::{HttpResponse, delete, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Manufacturer, ManufacturerId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, manufacturer_validation_error, parse_manufacturer_id,
};

const ID_FIELD: FieldName = FieldName::new("id");

/// Request body for `PUT /manufacturers/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ManufacturerRequest {
    /// Display name; surrounding whitespace is trimmed.
    #[schema(example = "Audi")]
    pub name: String,
}

/// Manufacturer returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerResponse {
    /// Manufacturer code.
    #[schema(example = 100)]
    pub id: i32,
    /// Display name.
    #[schema(example = "Audi")]
    pub name: String,
}

impl From<&Manufacturer> for ManufacturerResponse {
    fn from(value: &Manufacturer) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().to_owned(),
        }
    }
}

fn path_id(path: &str) -> ApiResult<ManufacturerId> {
    parse_manufacturer_id(ID_FIELD, path)
}

/// List every manufacturer in id order.
#[utoipa::path(
    get,
    path = "/manufacturers",
    responses(
        (status = 200, description = "All manufacturers", body = Vec<ManufacturerResponse>),
        (status = 503, description = "Repository unavailable", body = ErrorSchema)
    ),
    tags = ["manufacturers"],
    operation_id = "listManufacturers"
)]
#[get("/manufacturers")]
pub async fn list_manufacturers(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ManufacturerResponse>>> {
    let manufacturers = state.manufacturers.list_manufacturers().await?;
    Ok(web::Json(
        manufacturers.iter().map(ManufacturerResponse::from).collect(),
    ))
}

/// Fetch one manufacturer.
#[utoipa::path(
    get,
    path = "/manufacturers/{id}",
    params(("id" = i32, Path, description = "Manufacturer code")),
    responses(
        (status = 200, description = "Manufacturer", body = ManufacturerResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Unknown manufacturer", body = ErrorSchema)
    ),
    tags = ["manufacturers"],
    operation_id = "getManufacturer"
)]
#[get("/manufacturers/{id}")]
pub async fn get_manufacturer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ManufacturerResponse>> {
    let id = path_id(&path)?;
    let manufacturer = state.manufacturers.find_manufacturer(id).await?;
    Ok(web::Json(ManufacturerResponse::from(&manufacturer)))
}

/// Create or rename the manufacturer stored under `id`.
#[utoipa::path(
    put,
    path = "/manufacturers/{id}",
    params(("id" = i32, Path, description = "Manufacturer code")),
    request_body = ManufacturerRequest,
    responses(
        (status = 200, description = "Saved manufacturer", body = ManufacturerResponse),
        (status = 400, description = "Invalid manufacturer", body = ErrorSchema),
        (status = 503, description = "Repository unavailable", body = ErrorSchema)
    ),
    tags = ["manufacturers"],
    operation_id = "putManufacturer"
)]
#[put("/manufacturers/{id}")]
pub async fn put_manufacturer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ManufacturerRequest>,
) -> ApiResult<web::Json<ManufacturerResponse>> {
    let id = path_id(&path)?;
    let manufacturer = Manufacturer::new(id, payload.into_inner().name)
        .map_err(|err| manufacturer_validation_error(&err))?;
    let saved = state.manufacturers.save_manufacturer(manufacturer).await?;
    Ok(web::Json(ManufacturerResponse::from(&saved)))
}

/// Delete the manufacturer stored under `id`.
///
/// Fails with 409 while cars still reference the manufacturer.
#[utoipa::path(
    delete,
    path = "/manufacturers/{id}",
    params(("id" = i32, Path, description = "Manufacturer code")),
    responses(
        (status = 204, description = "Manufacturer deleted"),
        (status = 404, description = "Unknown manufacturer", body = ErrorSchema),
        (status = 409, description = "Manufacturer still referenced", body = ErrorSchema)
    ),
    tags = ["manufacturers"],
    operation_id = "deleteManufacturer"
)]
#[delete("/manufacturers/{id}")]
pub async fn delete_manufacturer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path_id(&path)?;
    state.manufacturers.delete_manufacturer(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
