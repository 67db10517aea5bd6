//! Domain entities, ports and services.
//!
//! Public surface:
//! - [`Car`], [`Manufacturer`] and their value types.
//! - [`Price`] and the startup [`PriceCatalogue`].
//! - [`Error`]/[`ErrorCode`]: transport agnostic error payload.
//! - [`VehicleCatalogueService`]: implementation of the driving ports.

pub mod catalogue_service;
pub mod error;
pub mod manufacturer;
pub mod manufacturer_seed;
pub mod ports;
pub mod price;
pub mod price_catalogue;
pub mod trace_id;
pub mod vehicle;

pub use self::catalogue_service::VehicleCatalogueService;
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::manufacturer::{
    MAX_MANUFACTURER_NAME_LEN, Manufacturer, ManufacturerId, ManufacturerValidationError,
};
pub use self::manufacturer_seed::{DEFAULT_MANUFACTURERS, seed_default_manufacturers};
pub use self::price::{Currency, Price};
pub use self::price_catalogue::{DEFAULT_CATALOGUE_SIZE, PriceCatalogue};
pub use self::trace_id::TraceId;
pub use self::vehicle::{
    Car, CarDetails, CarTextField, CarValidationError, Condition, Location, MAX_CAR_ATTRIBUTE_LEN,
    MAX_CAR_NAME_LEN, VehicleId,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use vehicles::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("Price Not Found"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
