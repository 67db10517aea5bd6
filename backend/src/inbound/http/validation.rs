//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{
    CarTextField, CarValidationError, Error, ManufacturerId, ManufacturerValidationError,
    VehicleId,
};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidVehicleId,
    InvalidManufacturerId,
    InvalidValue,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidVehicleId => "invalid_vehicle_id",
            Self::InvalidManufacturerId => "invalid_manufacturer_id",
            Self::InvalidValue => "invalid_value",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    Error::invalid_request(format!("{} is required", field.as_str())).with_details(json!({
        "field": field.as_str(),
        "code": ValidationCode::MissingField.as_str(),
    }))
}

fn invalid_value_error(
    field: FieldName,
    code: ValidationCode,
    value: &str,
    message: String,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

/// Parse a required vehicle id from a raw query or path value.
///
/// Absent and blank values are reported as missing; anything that is not a
/// positive integer is reported as `invalid_vehicle_id`.
pub(crate) fn parse_vehicle_id(field: FieldName, raw: Option<&str>) -> Result<VehicleId, Error> {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(missing_field_error(field)),
    };
    raw.parse::<i64>()
        .ok()
        .and_then(|value| VehicleId::new(value).ok())
        .ok_or_else(|| {
            invalid_value_error(
                field,
                ValidationCode::InvalidVehicleId,
                raw,
                format!("{} must be a positive integer", field.as_str()),
            )
        })
}

/// Parse a manufacturer id from a path segment.
pub(crate) fn parse_manufacturer_id(field: FieldName, raw: &str) -> Result<ManufacturerId, Error> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i32>()
        .ok()
        .and_then(|value| ManufacturerId::new(value).ok())
        .ok_or_else(|| {
            invalid_value_error(
                field,
                ValidationCode::InvalidManufacturerId,
                trimmed,
                format!("{} must be a positive integer", field.as_str()),
            )
        })
}

/// Report `err` as an invalid value of `field`.
pub(crate) fn invalid_field(field: FieldName, err: &dyn std::fmt::Display) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field.as_str(),
        "code": ValidationCode::InvalidValue.as_str(),
    }))
}

/// Map a car validation failure onto a client error.
pub(crate) fn car_validation_error(err: &CarValidationError) -> Error {
    let field = match err {
        CarValidationError::NonPositiveId => "id",
        CarValidationError::EmptyBody => "details.body",
        CarValidationError::EmptyModel => "details.model",
        CarValidationError::TooLong { field, .. } => match field {
            CarTextField::Body => "details.body",
            CarTextField::Model => "details.model",
            CarTextField::FuelType => "details.fuelType",
            CarTextField::Engine => "details.engine",
            CarTextField::ExternalColor => "details.externalColor",
        },
        CarValidationError::NonPositiveDoors => "details.numberOfDoors",
        CarValidationError::NegativeMileage => "details.mileage",
        CarValidationError::LatitudeOutOfRange => "location.lat",
        CarValidationError::LongitudeOutOfRange => "location.lon",
        CarValidationError::UnknownCondition(_) => "condition",
    };
    invalid_field(FieldName::new(field), err)
}

/// Map a manufacturer validation failure onto a client error.
pub(crate) fn manufacturer_validation_error(err: &ManufacturerValidationError) -> Error {
    let field = match err {
        ManufacturerValidationError::NonPositiveId => "id",
        ManufacturerValidationError::EmptyName
        | ManufacturerValidationError::NameTooLong { .. } => "name",
    };
    invalid_field(FieldName::new(field), err)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    const VEHICLE_ID: FieldName = FieldName::new("vehicleId");

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn absent_vehicle_id_is_missing(#[case] raw: Option<&str>) {
        let err = parse_vehicle_id(VEHICLE_ID, raw).expect_err("missing value");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({"field": "vehicleId", "code": "missing_field"}))
        );
    }

    #[rstest]
    #[case("abc")]
    #[case("0")]
    #[case("-3")]
    #[case("1.5")]
    #[case("99999999999999999999")]
    fn malformed_vehicle_id_is_rejected(#[case] raw: &str) {
        let err = parse_vehicle_id(VEHICLE_ID, Some(raw)).expect_err("invalid value");
        let details = err.details().expect("details");
        assert_eq!(details["code"], "invalid_vehicle_id");
        assert_eq!(details["value"], raw);
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 42 ", 42)]
    fn well_formed_vehicle_id_parses(#[case] raw: &str, #[case] expected: i64) {
        let id = parse_vehicle_id(VEHICLE_ID, Some(raw)).expect("valid id");
        assert_eq!(id.get(), expected);
    }

    #[rstest]
    fn manufacturer_id_rejects_non_numeric() {
        let err = parse_manufacturer_id(FieldName::new("id"), "audi").expect_err("invalid");
        assert_eq!(err.details().expect("details")["code"], "invalid_manufacturer_id");
    }

    #[rstest]
    fn car_validation_maps_to_field() {
        let err = car_validation_error(&CarValidationError::EmptyModel);
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.details().expect("details")["field"], "details.model");
    }

    #[rstest]
    #[case(CarTextField::FuelType, "details.fuelType")]
    #[case(CarTextField::ExternalColor, "details.externalColor")]
    fn oversized_car_text_maps_to_wire_field(#[case] field: CarTextField, #[case] wire: &str) {
        let err = car_validation_error(&CarValidationError::TooLong { field, max: 64 });
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.details().expect("details")["field"], wire);
    }

    #[rstest]
    fn oversized_manufacturer_name_maps_to_name() {
        let err =
            manufacturer_validation_error(&ManufacturerValidationError::NameTooLong { max: 255 });
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.details().expect("details")["field"], "name");
    }
}
