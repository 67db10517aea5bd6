//! Tests for the vehicle catalogue service.

use std::sync::Arc;

use mockall::mock;
use rstest::rstest;
use rust_decimal::Decimal;

use super::*;
use crate::domain::ports::MockPriceLookup;
use crate::domain::{CarDetails, Condition, Currency, ErrorCode, Location, Price};
use crate::outbound::memory::InMemoryRepository;

mock! {
    ManufacturerRepo {}

    #[async_trait]
    impl Repository<Manufacturer> for ManufacturerRepo {
        async fn find_by_id(&self, id: ManufacturerId) -> Result<Option<Manufacturer>, RepositoryError>;
        async fn find_page(
            &self,
            after: Option<ManufacturerId>,
            limit: usize,
        ) -> Result<Vec<Manufacturer>, RepositoryError>;
        async fn save(&self, entity: &Manufacturer) -> Result<(), RepositoryError>;
        async fn delete_by_id(&self, id: ManufacturerId) -> Result<bool, RepositoryError>;
    }
}

type MemoryService =
    VehicleCatalogueService<InMemoryRepository<Car>, InMemoryRepository<Manufacturer>>;

fn vehicle(raw: i64) -> VehicleId {
    VehicleId::new(raw).expect("valid vehicle id")
}

fn maker(raw: i32) -> ManufacturerId {
    ManufacturerId::new(raw).expect("valid manufacturer id")
}

fn manufacturer(raw: i32, name: &str) -> Manufacturer {
    Manufacturer::new(maker(raw), name).expect("valid manufacturer")
}

fn car(raw: i64, manufacturer_id: i32) -> Car {
    let details = CarDetails {
        body: "sedan".to_owned(),
        model: "Malibu".to_owned(),
        manufacturer_id: maker(manufacturer_id),
        number_of_doors: Some(4),
        fuel_type: Some("Gasoline".to_owned()),
        engine: None,
        mileage: Some(12_000),
        model_year: Some(2019),
        production_year: Some(2019),
        external_color: Some("blue".to_owned()),
    };
    let location = Location::new(40.73, -73.99).expect("valid location");
    Car::new(vehicle(raw), Condition::Used, details, location).expect("valid car")
}

fn usd(raw: i64, cents: i64) -> Price {
    Price::new(vehicle(raw), Decimal::new(cents, 2), Currency::Usd)
}

fn memory_service(
    cars: Vec<Car>,
    manufacturers: Vec<Manufacturer>,
    prices: MockPriceLookup,
) -> MemoryService {
    VehicleCatalogueService::new(
        Arc::new(InMemoryRepository::from_entities(cars)),
        Arc::new(InMemoryRepository::from_entities(manufacturers)),
        Arc::new(prices),
    )
}

#[tokio::test]
async fn find_car_attaches_catalogued_price() {
    let mut prices = MockPriceLookup::new();
    prices
        .expect_get_price()
        .withf(|id| id.get() == 1)
        .times(1)
        .return_once(|_| Ok(usd(1, 1_234_500)));
    let service = memory_service(
        vec![car(1, 101)],
        vec![manufacturer(101, "Chevrolet")],
        prices,
    );

    let listing = service.find_car(vehicle(1)).await.expect("car exists");

    assert_eq!(listing.car, car(1, 101));
    assert_eq!(listing.price, Some(usd(1, 1_234_500)));
}

#[tokio::test]
async fn find_car_omits_price_when_lookup_misses() {
    let mut prices = MockPriceLookup::new();
    prices
        .expect_get_price()
        .times(1)
        .return_once(|id| Err(PriceLookupError::not_found(id.get())));
    let service = memory_service(
        vec![car(40, 101)],
        vec![manufacturer(101, "Chevrolet")],
        prices,
    );

    let listing = service.find_car(vehicle(40)).await.expect("car exists");

    assert!(listing.price.is_none());
}

#[tokio::test]
async fn find_car_propagates_unavailable_price_lookup() {
    let mut prices = MockPriceLookup::new();
    prices
        .expect_get_price()
        .times(1)
        .return_once(|_| Err(PriceLookupError::unavailable("timeout")));
    let service = memory_service(
        vec![car(1, 101)],
        vec![manufacturer(101, "Chevrolet")],
        prices,
    );

    let err = service.find_car(vehicle(1)).await.expect_err("lookup failure");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}

#[tokio::test]
async fn find_car_reports_unknown_vehicle_without_pricing() {
    let mut prices = MockPriceLookup::new();
    prices.expect_get_price().times(0);
    let service = memory_service(Vec::new(), Vec::new(), prices);

    let err = service.find_car(vehicle(9)).await.expect_err("unknown car");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn save_car_rejects_unknown_manufacturer() {
    let service = memory_service(Vec::new(), Vec::new(), MockPriceLookup::new());

    let err = service
        .save_car(car(3, 999))
        .await
        .expect_err("manufacturer is missing");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    let details = err.details().expect("details present");
    assert_eq!(details["code"], "unknown_manufacturer");
    assert_eq!(details["value"], 999);
    assert!(service.list_cars().await.expect("list succeeds").is_empty());
}

#[tokio::test]
async fn save_car_upserts_and_lists_in_key_order() {
    let service = memory_service(
        vec![car(5, 100)],
        vec![manufacturer(100, "Audi"), manufacturer(101, "Chevrolet")],
        MockPriceLookup::new(),
    );

    service.save_car(car(2, 101)).await.expect("insert succeeds");
    service.save_car(car(5, 101)).await.expect("update succeeds");

    let cars = service.list_cars().await.expect("list succeeds");
    let ids: Vec<i64> = cars.iter().map(|car| car.id().get()).collect();
    assert_eq!(ids, vec![2, 5]);
    assert_eq!(cars[1].details().manufacturer_id, maker(101));
}

#[tokio::test]
async fn delete_car_removes_then_reports_missing() {
    let service = memory_service(
        vec![car(1, 101)],
        vec![manufacturer(101, "Chevrolet")],
        MockPriceLookup::new(),
    );

    service.delete_car(vehicle(1)).await.expect("delete succeeds");
    let err = service
        .delete_car(vehicle(1))
        .await
        .expect_err("already deleted");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn manufacturer_round_trip() {
    let service = memory_service(Vec::new(), Vec::new(), MockPriceLookup::new());

    let saved = service
        .save_manufacturer(manufacturer(103, "BMW"))
        .await
        .expect("save succeeds");
    let found = service
        .find_manufacturer(maker(103))
        .await
        .expect("manufacturer exists");

    assert_eq!(saved, found);
    assert_eq!(
        service
            .list_manufacturers()
            .await
            .expect("list succeeds")
            .len(),
        1
    );
}

#[tokio::test]
async fn find_manufacturer_reports_unknown_id() {
    let service = memory_service(Vec::new(), Vec::new(), MockPriceLookup::new());

    let err = service
        .find_manufacturer(maker(104))
        .await
        .expect_err("unknown manufacturer");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[case(RepositoryError::connection("pool exhausted"), ErrorCode::ServiceUnavailable)]
#[case(RepositoryError::query("syntax error"), ErrorCode::InternalError)]
#[case(RepositoryError::constraint("cars_manufacturer_id_fkey"), ErrorCode::Conflict)]
#[tokio::test]
async fn repository_errors_map_to_error_codes(
    #[case] failure: RepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockManufacturerRepo::new();
    repo.expect_delete_by_id()
        .times(1)
        .return_once(move |_| Err(failure));
    let service: VehicleCatalogueService<InMemoryRepository<Car>, MockManufacturerRepo> =
        VehicleCatalogueService::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(repo),
            Arc::new(MockPriceLookup::new()),
        );

    let err = service
        .delete_manufacturer(maker(100))
        .await
        .expect_err("repository failure");

    assert_eq!(err.code(), expected);
}

#[tokio::test]
async fn save_car_maps_manufacturer_lookup_failure() {
    let mut repo = MockManufacturerRepo::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Err(RepositoryError::connection("refused")));
    let service = VehicleCatalogueService::new(
        Arc::new(InMemoryRepository::<Car>::new()),
        Arc::new(repo),
        Arc::new(MockPriceLookup::new()),
    );

    let err = service
        .save_car(car(1, 100))
        .await
        .expect_err("lookup failure");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}
