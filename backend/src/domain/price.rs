//! Price value returned by the pricing endpoint.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use super::VehicleId;

/// Currency of a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// United States Dollar
    Usd,
}

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
        }
    }

    /// Number of fractional digits used by amounts in this currency.
    #[must_use]
    pub const fn decimal_places(self) -> u32 {
        match self {
            Self::Usd => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Price of a vehicle.
///
/// The amount is rounded to the currency's decimal places on construction.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use vehicles::domain::{Currency, Price, VehicleId};
///
/// let id = VehicleId::new(1).expect("valid id");
/// let price = Price::new(id, Decimal::new(1_234_567, 3), Currency::Usd);
/// assert_eq!(price.amount().to_string(), "1234.57");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    vehicle_id: VehicleId,
    amount: Decimal,
    currency: Currency,
}

impl Price {
    /// Create a price, rounding half away from zero to the currency scale.
    ///
    /// Amounts with fewer fractional digits are padded, so `5000` becomes
    /// `5000.00`.
    #[must_use]
    pub fn new(vehicle_id: VehicleId, amount: Decimal, currency: Currency) -> Self {
        let mut amount = amount.round_dp_with_strategy(
            currency.decimal_places(),
            RoundingStrategy::MidpointAwayFromZero,
        );
        amount.rescale(currency.decimal_places());
        Self {
            vehicle_id,
            amount,
            currency,
        }
    }

    /// Vehicle the price applies to.
    #[must_use]
    pub const fn vehicle_id(&self) -> VehicleId {
        self.vehicle_id
    }

    /// Monetary amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Currency of the amount.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }
}
