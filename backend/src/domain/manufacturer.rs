//! Manufacturer entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ports::Entity;

/// Validation errors raised when constructing manufacturers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManufacturerValidationError {
    /// Manufacturer codes start at 1.
    NonPositiveId,
    /// Name is blank.
    EmptyName,
    /// Name exceeds the column width.
    NameTooLong {
        /// Limit in characters.
        max: usize,
    },
}

/// Longest manufacturer name accepted, in characters.
pub const MAX_MANUFACTURER_NAME_LEN: usize = 255;

impl fmt::Display for ManufacturerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "manufacturer id must be a positive integer"),
            Self::EmptyName => write!(f, "manufacturer name must not be empty"),
            Self::NameTooLong { max } => {
                write!(f, "manufacturer name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for ManufacturerValidationError {}

/// Manufacturer code, e.g. `100` for Audi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ManufacturerId(i32);

impl ManufacturerId {
    /// Validate and wrap a raw code.
    pub fn new(raw: i32) -> Result<Self, ManufacturerValidationError> {
        if raw <= 0 {
            return Err(ManufacturerValidationError::NonPositiveId);
        }
        Ok(Self(raw))
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for ManufacturerId {
    type Error = ManufacturerValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ManufacturerId> for i32 {
    fn from(value: ManufacturerId) -> Self {
        value.0
    }
}

impl fmt::Display for ManufacturerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vehicle manufacturer referenced by cars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manufacturer {
    id: ManufacturerId,
    name: String,
}

impl Manufacturer {
    /// Validate and construct a manufacturer. The name is trimmed.
    ///
    /// # Examples
    /// ```
    /// use vehicles::domain::{Manufacturer, ManufacturerId};
    ///
    /// let id = ManufacturerId::new(100).expect("valid id");
    /// let audi = Manufacturer::new(id, " Audi ").expect("valid manufacturer");
    /// assert_eq!(audi.name(), "Audi");
    /// ```
    pub fn new(
        id: ManufacturerId,
        name: impl Into<String>,
    ) -> Result<Self, ManufacturerValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ManufacturerValidationError::EmptyName);
        }
        if trimmed.chars().count() > MAX_MANUFACTURER_NAME_LEN {
            return Err(ManufacturerValidationError::NameTooLong {
                max: MAX_MANUFACTURER_NAME_LEN,
            });
        }
        Ok(Self {
            id,
            name: trimmed.to_owned(),
        })
    }

    /// Manufacturer code.
    #[must_use]
    pub const fn id(&self) -> ManufacturerId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Entity for Manufacturer {
    type Key = ManufacturerId;

    fn key(&self) -> Self::Key {
        self.id
    }
}
