//! End-to-end HTTP flows over in-memory repositories.
//!
//! The app is assembled the same way the server binary does it, minus the
//! socket, so these tests exercise routing, middleware and the catalogue
//! service together.

use std::str::FromStr;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use vehicles::Trace;
use vehicles::domain::{
    Car, Currency, Manufacturer, Price, PriceCatalogue, TRACE_ID_HEADER, VehicleCatalogueService,
    VehicleId, seed_default_manufacturers,
};
use vehicles::inbound::http::health::HealthState;
use vehicles::inbound::http::state::HttpState;
use vehicles::inbound::http::{configure, json_config, query_config};
use vehicles::outbound::memory::InMemoryRepository;

async fn http_state() -> HttpState {
    let cars = Arc::new(InMemoryRepository::<Car>::new());
    let manufacturers = Arc::new(InMemoryRepository::<Manufacturer>::new());
    seed_default_manufacturers(manufacturers.as_ref())
        .await
        .expect("seeding succeeds");
    let prices = Arc::new(PriceCatalogue::from_prices([Price::new(
        VehicleId::new(1).expect("valid id"),
        Decimal::from_str("15234.27").expect("valid decimal"),
        Currency::Usd,
    )]));
    let service = Arc::new(VehicleCatalogueService::new(cars, manufacturers, prices.clone()));
    HttpState::new(prices, service.clone(), service)
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(HealthState::new()))
                .app_data(web::Data::new(http_state().await))
                .app_data(json_config())
                .app_data(query_config())
                .wrap(Trace)
                .configure(configure),
        )
        .await
    };
}

fn car_body(manufacturer_id: i32) -> Value {
    json!({
        "condition": "USED",
        "details": {
            "body": "sedan",
            "model": "Impala",
            "manufacturerId": manufacturer_id,
            "numberOfDoors": 4,
            "mileage": 32280
        },
        "location": { "lat": 40.73061, "lon": -73.935242 }
    })
}

#[actix_web::test]
async fn seeded_manufacturers_are_listed() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/manufacturers").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|entry| entry["name"].as_str())
        .collect();
    assert_eq!(names, ["Audi", "Chevrolet", "Ford", "BMW", "Dodge"]);
}

#[actix_web::test]
async fn car_lifecycle_carries_price() {
    let app = init_app!();

    let put = test::TestRequest::put()
        .uri("/cars/1")
        .set_json(car_body(101))
        .to_request();
    let res = test::call_service(&app, put).await;
    assert_eq!(res.status(), StatusCode::OK);

    let get = test::TestRequest::get().uri("/cars/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, get).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["details"]["manufacturerId"], 101);
    assert_eq!(
        body["price"],
        json!({ "vehicleId": 1, "price": "15234.27", "currency": "USD" })
    );

    let delete = test::TestRequest::delete().uri("/cars/1").to_request();
    let res = test::call_service(&app, delete).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let get = test::TestRequest::get().uri("/cars/1").to_request();
    let res = test::call_service(&app, get).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn car_with_unknown_manufacturer_is_rejected() {
    let app = init_app!();

    let put = test::TestRequest::put()
        .uri("/cars/2")
        .set_json(car_body(999))
        .to_request();
    let res = test::call_service(&app, put).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "unknown_manufacturer");
}

#[actix_web::test]
async fn price_endpoint_serves_catalogue_entries() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/services/price?vehicleId=1")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["price"], "15234.27");

    let req = test::TestRequest::get()
        .uri("/services/price?vehicleId=20")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Price Not Found");
}

#[actix_web::test]
async fn malformed_json_body_is_an_invalid_request() {
    let app = init_app!();

    let req = test::TestRequest::put()
        .uri("/manufacturers/105")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\":")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}

#[actix_web::test]
async fn repeated_query_parameter_uses_error_envelope() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/services/price?vehicleId=1&vehicleId=2")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert!(body["traceId"].is_string());
}
