use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::{validate_latitude, validate_longitude, GeoError};

pub type AddressId = i64;

/// A stored address-book entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub id: AddressId,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

/// Fields for an address that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAddress {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

/// Partial replacement of an existing address. Unset fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressPatch {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddressError {
    InvalidCoordinate(GeoError),
    EmptyName,
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate(error) => write!(f, "{error}"),
            Self::EmptyName => write!(f, "name must not be empty"),
        }
    }
}

impl Error for AddressError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCoordinate(error) => Some(error),
            Self::EmptyName => None,
        }
    }
}

impl From<GeoError> for AddressError {
    fn from(error: GeoError) -> Self {
        Self::InvalidCoordinate(error)
    }
}

fn validate_name(name: &str) -> Result<(), AddressError> {
    if name.trim().is_empty() {
        return Err(AddressError::EmptyName);
    }
    Ok(())
}

impl NewAddress {
    pub fn new(latitude: f64, longitude: f64, name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            name: name.into(),
        }
    }

    /// Checks geographic bounds and that the name is not blank.
    pub fn validate(&self) -> Result<(), AddressError> {
        validate_latitude(self.latitude)?;
        validate_longitude(self.longitude)?;
        validate_name(&self.name)
    }

    pub fn into_record(self, id: AddressId) -> AddressRecord {
        AddressRecord {
            id,
            latitude: self.latitude,
            longitude: self.longitude,
            name: self.name,
        }
    }
}

impl AddressPatch {
    pub fn is_empty(&self) -> bool {
        self.latitude.is_none() && self.longitude.is_none() && self.name.is_none()
    }

    /// Validates only the fields that are set.
    pub fn validate(&self) -> Result<(), AddressError> {
        if let Some(latitude) = self.latitude {
            validate_latitude(latitude)?;
        }
        if let Some(longitude) = self.longitude {
            validate_longitude(longitude)?;
        }
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        Ok(())
    }

    pub fn apply_to(&self, record: &mut AddressRecord) {
        if let Some(latitude) = self.latitude {
            record.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            record.longitude = longitude;
        }
        if let Some(name) = &self.name {
            record.name.clone_from(name);
        }
    }
}
