//! In-memory price catalogue backing the pricing endpoint.
//!
//! Prices are generated once at startup for vehicle ids `1..=size`, each
//! uniformly drawn from `[5000.00, 25000.00)` USD. The catalogue is immutable
//! afterwards and safe to share across workers.

use std::collections::BTreeMap;

use async_trait::async_trait;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

use super::ports::{PriceLookup, PriceLookupError};
use super::{Currency, Price, VehicleId};

/// Number of vehicles priced when no size is configured.
pub const DEFAULT_CATALOGUE_SIZE: u32 = 19;

/// Lower bound of generated prices, in cents (inclusive).
const MIN_PRICE_CENTS: i64 = 500_000;
/// Upper bound of generated prices, in cents (exclusive).
const MAX_PRICE_CENTS: i64 = 2_500_000;

/// Fixed price table keyed by vehicle id.
#[derive(Debug, Clone, Default)]
pub struct PriceCatalogue {
    prices: BTreeMap<VehicleId, Price>,
}

impl PriceCatalogue {
    /// Generate random prices for vehicle ids `1..=size`.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::SmallRng;
    /// use vehicles::domain::PriceCatalogue;
    ///
    /// let catalogue = PriceCatalogue::generate(3, &mut SmallRng::seed_from_u64(7));
    /// assert_eq!(catalogue.len(), 3);
    /// ```
    pub fn generate<R: Rng + ?Sized>(size: u32, rng: &mut R) -> Self {
        let prices = (1..=i64::from(size))
            .filter_map(|raw| VehicleId::new(raw).ok())
            .map(|vehicle_id| {
                let cents = rng.gen_range(MIN_PRICE_CENTS..MAX_PRICE_CENTS);
                let price = Price::new(vehicle_id, Decimal::new(cents, 2), Currency::Usd);
                (vehicle_id, price)
            })
            .collect();
        Self { prices }
    }

    /// Build a catalogue from explicit prices.
    pub fn from_prices(prices: impl IntoIterator<Item = Price>) -> Self {
        Self {
            prices: prices
                .into_iter()
                .map(|price| (price.vehicle_id(), price))
                .collect(),
        }
    }

    /// Number of priced vehicles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether no vehicle is priced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Look up a price without going through the port.
    #[must_use]
    pub fn get(&self, vehicle_id: VehicleId) -> Option<&Price> {
        self.prices.get(&vehicle_id)
    }
}

#[async_trait]
impl PriceLookup for PriceCatalogue {
    async fn get_price(&self, vehicle_id: VehicleId) -> Result<Price, PriceLookupError> {
        match self.get(vehicle_id) {
            Some(price) => Ok(price.clone()),
            None => {
                debug!(vehicle_id = vehicle_id.get(), "price not found");
                Err(PriceLookupError::not_found(vehicle_id.get()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn catalogue() -> PriceCatalogue {
        PriceCatalogue::generate(DEFAULT_CATALOGUE_SIZE, &mut SmallRng::seed_from_u64(42))
    }

    fn vehicle(raw: i64) -> VehicleId {
        VehicleId::new(raw).expect("valid vehicle id")
    }

    #[rstest]
    fn covers_exactly_the_configured_ids(catalogue: PriceCatalogue) {
        assert_eq!(catalogue.len(), 19);
        assert!(catalogue.get(vehicle(1)).is_some());
        assert!(catalogue.get(vehicle(19)).is_some());
        assert!(catalogue.get(vehicle(20)).is_none());
    }

    #[rstest]
    fn prices_lie_in_range_with_two_decimals(catalogue: PriceCatalogue) {
        let min = Decimal::new(MIN_PRICE_CENTS, 2);
        let max = Decimal::new(MAX_PRICE_CENTS, 2);
        for raw in 1..=19 {
            let price = catalogue.get(vehicle(raw)).expect("priced vehicle");
            assert!(price.amount() >= min && price.amount() < max);
            assert_eq!(price.amount().scale(), 2);
            assert_eq!(price.currency(), Currency::Usd);
        }
    }

    #[rstest]
    fn same_seed_yields_same_prices() {
        let first = PriceCatalogue::generate(5, &mut SmallRng::seed_from_u64(9));
        let second = PriceCatalogue::generate(5, &mut SmallRng::seed_from_u64(9));
        assert_eq!(first.get(vehicle(3)), second.get(vehicle(3)));
    }

    #[rstest]
    #[tokio::test]
    async fn lookup_returns_catalogued_price(catalogue: PriceCatalogue) {
        let price = catalogue.get_price(vehicle(1)).await.expect("price exists");
        assert_eq!(price.vehicle_id(), vehicle(1));
    }

    #[rstest]
    #[tokio::test]
    async fn lookup_reports_unknown_vehicle(catalogue: PriceCatalogue) {
        let err = catalogue
            .get_price(vehicle(404))
            .await
            .expect_err("unknown vehicle");
        assert_eq!(err, PriceLookupError::not_found(404_i64));
    }

    #[rstest]
    fn empty_catalogue_prices_nothing() {
        let catalogue = PriceCatalogue::generate(0, &mut SmallRng::seed_from_u64(1));
        assert!(catalogue.is_empty());
    }
}
