//! HTTP inbound adapter exposing REST endpoints.

pub mod cars;
pub mod error;
pub mod health;
pub mod manufacturers;
pub mod pricing;
pub mod schemas;
pub mod state;
pub mod validation;

use actix_web::web;

use crate::domain::Error;

pub use error::ApiResult;

/// JSON extractor configuration reporting malformed bodies as domain errors.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use vehicles::inbound::http::json_config;
///
/// let _app = App::new().app_data(json_config());
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("malformed JSON body: {err}")).into()
    })
}

/// Query extractor configuration reporting rejected query strings as domain
/// errors, e.g. a repeated `vehicleId`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("malformed query string: {err}")).into()
    })
}

/// Register every API route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(pricing::get_price)
        .service(cars::list_cars)
        .service(cars::get_car)
        .service(cars::put_car)
        .service(cars::delete_car)
        .service(manufacturers::list_manufacturers)
        .service(manufacturers::get_manufacturer)
        .service(manufacturers::put_manufacturer)
        .service(manufacturers::delete_manufacturer)
        .service(health::ready)
        .service(health::live);
}
