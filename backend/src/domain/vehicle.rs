//! Car aggregate and its value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ManufacturerId;
use super::ports::Entity;

/// Longest `body` or `model` accepted, in characters.
pub const MAX_CAR_NAME_LEN: usize = 255;
/// Longest `fuel_type`, `engine` or `external_color` accepted, in characters.
pub const MAX_CAR_ATTRIBUTE_LEN: usize = 64;

/// Free-text car attributes subject to a length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarTextField {
    /// `details.body`.
    Body,
    /// `details.model`.
    Model,
    /// `details.fuel_type`.
    FuelType,
    /// `details.engine`.
    Engine,
    /// `details.external_color`.
    ExternalColor,
}

impl CarTextField {
    /// Attribute name as used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Model => "model",
            Self::FuelType => "fuel type",
            Self::Engine => "engine",
            Self::ExternalColor => "external color",
        }
    }
}

/// Validation errors raised when constructing vehicle types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarValidationError {
    /// Vehicle ids start at 1.
    NonPositiveId,
    /// Body is blank.
    EmptyBody,
    /// Model is blank.
    EmptyModel,
    /// A text attribute exceeds its column width.
    TooLong {
        /// Offending attribute.
        field: CarTextField,
        /// Limit in characters.
        max: usize,
    },
    /// Door count is zero or negative.
    NonPositiveDoors,
    /// Mileage is negative.
    NegativeMileage,
    /// Latitude outside [-90, 90].
    LatitudeOutOfRange,
    /// Longitude outside [-180, 180].
    LongitudeOutOfRange,
    /// Condition other than `NEW` or `USED`.
    UnknownCondition(String),
}

impl fmt::Display for CarValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "vehicle id must be a positive integer"),
            Self::EmptyBody => write!(f, "body must not be empty"),
            Self::EmptyModel => write!(f, "model must not be empty"),
            Self::TooLong { field, max } => {
                write!(f, "{} must be at most {max} characters", field.as_str())
            }
            Self::NonPositiveDoors => write!(f, "number of doors must be positive"),
            Self::NegativeMileage => write!(f, "mileage must not be negative"),
            Self::LatitudeOutOfRange => write!(f, "latitude must be within [-90, 90]"),
            Self::LongitudeOutOfRange => write!(f, "longitude must be within [-180, 180]"),
            Self::UnknownCondition(value) => {
                write!(f, "condition must be NEW or USED, got {value}")
            }
        }
    }
}

impl std::error::Error for CarValidationError {}

/// Identifier of a vehicle; also the key used by the price lookup.
///
/// # Examples
/// ```
/// use vehicles::domain::VehicleId;
///
/// let id = VehicleId::new(1).expect("positive id");
/// assert_eq!(id.get(), 1);
/// assert!(VehicleId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct VehicleId(i64);

impl VehicleId {
    /// Validate and wrap a raw identifier.
    pub fn new(raw: i64) -> Result<Self, CarValidationError> {
        if raw <= 0 {
            return Err(CarValidationError::NonPositiveId);
        }
        Ok(Self(raw))
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for VehicleId {
    type Error = CarValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VehicleId> for i64 {
    fn from(value: VehicleId) -> Self {
        value.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the car is sold new or used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Never registered.
    New,
    /// Previously owned.
    Used,
}

impl Condition {
    /// Stored and serialised representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Used => "USED",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = CarValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(Self::New),
            "USED" => Ok(Self::Used),
            other => Err(CarValidationError::UnknownCondition(other.to_owned())),
        }
    }
}

/// Descriptive attributes of a car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarDetails {
    /// Body style, at most [`MAX_CAR_NAME_LEN`] characters.
    pub body: String,
    /// Model name, at most [`MAX_CAR_NAME_LEN`] characters.
    pub model: String,
    /// Manufacturer the car references.
    pub manufacturer_id: ManufacturerId,
    /// Door count, positive when present.
    pub number_of_doors: Option<i32>,
    /// Fuel type, at most [`MAX_CAR_ATTRIBUTE_LEN`] characters.
    pub fuel_type: Option<String>,
    /// Engine description, at most [`MAX_CAR_ATTRIBUTE_LEN`] characters.
    pub engine: Option<String>,
    /// Odometer reading, never negative.
    pub mileage: Option<i32>,
    /// Model year.
    pub model_year: Option<i32>,
    /// Production year.
    pub production_year: Option<i32>,
    /// Exterior colour, at most [`MAX_CAR_ATTRIBUTE_LEN`] characters.
    pub external_color: Option<String>,
}

impl CarDetails {
    fn validate(&self) -> Result<(), CarValidationError> {
        if self.body.trim().is_empty() {
            return Err(CarValidationError::EmptyBody);
        }
        if self.model.trim().is_empty() {
            return Err(CarValidationError::EmptyModel);
        }
        check_length(CarTextField::Body, Some(&self.body), MAX_CAR_NAME_LEN)?;
        check_length(CarTextField::Model, Some(&self.model), MAX_CAR_NAME_LEN)?;
        check_length(
            CarTextField::FuelType,
            self.fuel_type.as_deref(),
            MAX_CAR_ATTRIBUTE_LEN,
        )?;
        check_length(CarTextField::Engine, self.engine.as_deref(), MAX_CAR_ATTRIBUTE_LEN)?;
        check_length(
            CarTextField::ExternalColor,
            self.external_color.as_deref(),
            MAX_CAR_ATTRIBUTE_LEN,
        )?;
        if self.number_of_doors.is_some_and(|doors| doors <= 0) {
            return Err(CarValidationError::NonPositiveDoors);
        }
        if self.mileage.is_some_and(|mileage| mileage < 0) {
            return Err(CarValidationError::NegativeMileage);
        }
        Ok(())
    }
}

// Storage columns are VARCHAR(n), which counts characters rather than bytes.
fn check_length(
    field: CarTextField,
    value: Option<&str>,
    max: usize,
) -> Result<(), CarValidationError> {
    match value {
        Some(text) if text.chars().count() > max => {
            Err(CarValidationError::TooLong { field, max })
        }
        _ => Ok(()),
    }
}

/// Where the car is parked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    lat: f64,
    lon: f64,
}

impl Location {
    /// Validate coordinates.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CarValidationError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CarValidationError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CarValidationError::LongitudeOutOfRange);
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }
}

/// A vehicle offered for sale.
///
/// ## Invariants
/// - `details.body` and `details.model` are non-empty.
/// - `details.number_of_doors`, when present, is positive.
/// - `details.mileage`, when present, is non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    id: VehicleId,
    condition: Condition,
    details: CarDetails,
    location: Location,
}

impl Car {
    /// Validate and assemble a car.
    pub fn new(
        id: VehicleId,
        condition: Condition,
        details: CarDetails,
        location: Location,
    ) -> Result<Self, CarValidationError> {
        details.validate()?;
        Ok(Self {
            id,
            condition,
            details,
            location,
        })
    }

    /// Vehicle identifier.
    #[must_use]
    pub const fn id(&self) -> VehicleId {
        self.id
    }

    /// Sale condition.
    #[must_use]
    pub const fn condition(&self) -> Condition {
        self.condition
    }

    /// Descriptive details.
    #[must_use]
    pub const fn details(&self) -> &CarDetails {
        &self.details
    }

    /// Parking location.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }
}

impl Entity for Car {
    type Key = VehicleId;

    fn key(&self) -> Self::Key {
        self.id
    }
}
