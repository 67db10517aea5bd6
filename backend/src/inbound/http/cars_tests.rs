//! Tests for the car endpoints.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    CarListing, MockCarCatalogue, MockManufacturerCatalogue, MockPriceLookup,
};
use crate::domain::{Currency, Price};
use crate::inbound::http::json_config;

fn sample_body() -> Value {
    json!({
        "condition": "USED",
        "details": {
            "body": "sedan",
            "model": "Impala",
            "manufacturerId": 101,
            "numberOfDoors": 4,
            "fuelType": "Gasoline",
            "engine": "3.6L V6",
            "mileage": 32280,
            "modelYear": 2018,
            "productionYear": 2018,
            "externalColor": "white"
        },
        "location": {"lat": 40.73061, "lon": -73.935242}
    })
}

fn sample_car(raw: i64) -> Car {
    let request: CarRequest = serde_json::from_value(sample_body()).expect("valid body");
    request
        .into_car(VehicleId::new(raw).expect("valid id"))
        .expect("valid car")
}

async fn call(cars: MockCarCatalogue, req: actix_test::TestRequest) -> (StatusCode, Value) {
    let state = HttpState::new(
        Arc::new(MockPriceLookup::new()),
        Arc::new(cars),
        Arc::new(MockManufacturerCatalogue::new()),
    );
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .service(list_cars)
            .service(get_car)
            .service(put_car)
            .service(delete_car),
    )
    .await;
    let res = actix_test::call_service(&app, req.to_request()).await;
    let status = res.status();
    let bytes = actix_test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

#[actix_web::test]
async fn get_car_includes_price_when_known() {
    let mut cars = MockCarCatalogue::new();
    cars.expect_find_car()
        .withf(|id| id.get() == 1)
        .times(1)
        .returning(|id| {
            Ok(CarListing {
                car: sample_car(id.get()),
                price: Some(Price::new(id, Decimal::new(1_000_000, 2), Currency::Usd)),
            })
        });

    let (status, body) = call(cars, actix_test::TestRequest::get().uri("/cars/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["condition"], "USED");
    assert_eq!(body["details"]["manufacturerId"], 101);
    assert_eq!(
        body["price"],
        json!({"vehicleId": 1, "price": "10000.00", "currency": "USD"})
    );
}

#[actix_web::test]
async fn get_car_rejects_malformed_id() {
    let mut cars = MockCarCatalogue::new();
    cars.expect_find_car().times(0);

    let (status, body) = call(cars, actix_test::TestRequest::get().uri("/cars/zero")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "invalid_vehicle_id");
}

#[actix_web::test]
async fn list_cars_omits_prices() {
    let mut cars = MockCarCatalogue::new();
    cars.expect_list_cars()
        .times(1)
        .returning(|| Ok(vec![sample_car(1), sample_car(2)]));

    let (status, body) = call(cars, actix_test::TestRequest::get().uri("/cars")).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("array body");
    assert_eq!(items.len(), 2);
    assert!(items[0].get("price").is_none());
}

#[actix_web::test]
async fn put_car_uses_path_id() {
    let mut cars = MockCarCatalogue::new();
    cars.expect_save_car()
        .withf(|car| car.id().get() == 7 && car.details().model == "Impala")
        .times(1)
        .returning(Ok);

    let (status, body) = call(
        cars,
        actix_test::TestRequest::put()
            .uri("/cars/7")
            .set_json(sample_body()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 7);
}

#[actix_web::test]
async fn put_car_rejects_unknown_condition_without_saving() {
    let mut cars = MockCarCatalogue::new();
    cars.expect_save_car().times(0);
    let mut body = sample_body();
    body["condition"] = json!("SALVAGE");

    let (status, payload) = call(
        cars,
        actix_test::TestRequest::put().uri("/cars/7").set_json(body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["details"]["field"], "condition");
}

#[rstest]
#[case("body", crate::domain::MAX_CAR_NAME_LEN, "details.body")]
#[case("engine", crate::domain::MAX_CAR_ATTRIBUTE_LEN, "details.engine")]
#[case("externalColor", crate::domain::MAX_CAR_ATTRIBUTE_LEN, "details.externalColor")]
#[actix_web::test]
async fn put_car_rejects_oversized_text_without_saving(
    #[case] key: &str,
    #[case] max: usize,
    #[case] field: &str,
) {
    let mut cars = MockCarCatalogue::new();
    cars.expect_save_car().times(0);
    let mut body = sample_body();
    body["details"][key] = json!("x".repeat(max + 1));

    let (status, payload) = call(
        cars,
        actix_test::TestRequest::put().uri("/cars/7").set_json(body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["code"], "invalid_request");
    assert_eq!(payload["details"]["field"], field);
}

#[actix_web::test]
async fn put_car_reports_malformed_json_as_invalid_request() {
    let mut cars = MockCarCatalogue::new();
    cars.expect_save_car().times(0);

    let (status, payload) = call(
        cars,
        actix_test::TestRequest::put()
            .uri("/cars/7")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"condition\":"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["code"], "invalid_request");
}

#[actix_web::test]
async fn put_car_surfaces_unknown_manufacturer() {
    let mut cars = MockCarCatalogue::new();
    cars.expect_save_car()
        .times(1)
        .returning(|_| Err(Error::invalid_request("manufacturer 101 does not exist")));

    let (status, _) = call(
        cars,
        actix_test::TestRequest::put()
            .uri("/cars/7")
            .set_json(sample_body()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_car_returns_no_content() {
    let mut cars = MockCarCatalogue::new();
    cars.expect_delete_car().times(1).returning(|_| Ok(()));

    let (status, body) = call(cars, actix_test::TestRequest::delete().uri("/cars/3")).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[actix_web::test]
async fn delete_unknown_car_is_not_found() {
    let mut cars = MockCarCatalogue::new();
    cars.expect_delete_car()
        .times(1)
        .returning(|id| Err(Error::not_found(format!("car {id} not found"))));

    let (status, body) = call(cars, actix_test::TestRequest::delete().uri("/cars/3")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}
