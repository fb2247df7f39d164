//! Car catalog entities and validation.
//!
//! The catalog is the only locally persisted data in the service: a set of
//! car makes, each owning zero or more car models. Deletion of a make
//! cascades to its models — ownership is enforced by the relational store
//! (`ON DELETE CASCADE`), not by application code. Validation here rejects
//! rows the store would accept but the domain forbids (empty or overlong
//! names, out-of-range model years).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum length of a make or model name.
pub const MAX_NAME_LEN: usize = 200;

/// Earliest acceptable model year.
pub const MIN_MODEL_YEAR: i32 = 2015;

/// Latest acceptable model year.
pub const MAX_MODEL_YEAR: i32 = 2050;

/// Model year assumed when none is given.
pub const DEFAULT_MODEL_YEAR: i32 = 2025;

/// Validation failures for catalog rows.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required name field is empty or whitespace-only.
    #[error("{field} must not be empty")]
    EmptyName {
        /// The offending field, e.g. `"name"`.
        field: &'static str,
    },

    /// A name field exceeds [`MAX_NAME_LEN`].
    #[error("{field} must not exceed {MAX_NAME_LEN} characters (got {len})")]
    NameTooLong {
        /// The offending field.
        field: &'static str,
        /// Actual length in characters.
        len: usize,
    },

    /// A model year outside `[MIN_MODEL_YEAR, MAX_MODEL_YEAR]`.
    #[error("model year {year} is outside [{MIN_MODEL_YEAR}, {MAX_MODEL_YEAR}]")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// An unrecognized car type string.
    #[error("unknown car type: {value}")]
    UnknownCarType {
        /// The rejected value.
        value: String,
    },
}

fn validate_name(field: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName { field });
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            field,
            len: name.chars().count(),
        });
    }
    Ok(())
}

/// Body style of a car model.
///
/// Serialized in SCREAMING_SNAKE_CASE to match the catalog's wire and
/// storage representation (`"SEDAN"`, `"SUV"`, `"WAGON"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarType {
    /// Default body style.
    #[default]
    Sedan,
    Suv,
    Wagon,
}

impl CarType {
    /// Storage representation of this car type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sedan => "SEDAN",
            Self::Suv => "SUV",
            Self::Wagon => "WAGON",
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SEDAN" => Ok(Self::Sedan),
            "SUV" => Ok(Self::Suv),
            "WAGON" => Ok(Self::Wagon),
            other => Err(ValidationError::UnknownCarType {
                value: other.to_string(),
            }),
        }
    }
}

/// A car manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarMake {
    pub id: i64,
    /// Display name, non-empty, at most [`MAX_NAME_LEN`] characters.
    pub name: String,
    /// Free-text description.
    pub description: String,
}

impl CarMake {
    /// Check domain constraints before persisting.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("name", &self.name)
    }
}

/// A car model, owned by exactly one [`CarMake`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarModel {
    pub id: i64,
    /// Foreign key to the owning make.
    pub car_make_id: i64,
    /// Display name, non-empty, at most [`MAX_NAME_LEN`] characters.
    pub name: String,
    #[serde(default)]
    pub car_type: CarType,
    /// Model year, constrained to `[MIN_MODEL_YEAR, MAX_MODEL_YEAR]`.
    #[serde(default = "default_year")]
    pub year: i32,
}

fn default_year() -> i32 {
    DEFAULT_MODEL_YEAR
}

impl CarModel {
    /// Check domain constraints before persisting.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("name", &self.name)?;
        if !(MIN_MODEL_YEAR..=MAX_MODEL_YEAR).contains(&self.year) {
            return Err(ValidationError::YearOutOfRange { year: self.year });
        }
        Ok(())
    }
}

/// A `{model name, make name}` pair as returned by the catalog listing.
///
/// Field names match the original API contract consumed by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarListing {
    #[serde(rename = "CarModel")]
    pub car_model: String,
    #[serde(rename = "CarMake")]
    pub car_make: String,
}
