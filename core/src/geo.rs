use std::error::Error;
use std::fmt;

/// Mean Earth radius used by the spherical model, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Half the circumference of the spherical model: the largest distance
/// [`haversine_km`] can return.
pub const MAX_GREAT_CIRCLE_KM: f64 = EARTH_RADIUS_KM * std::f64::consts::PI;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Identifies which coordinate axis triggered a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn as_str(self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

/// Error type for coordinate and radius validation.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Returned when a coordinate is NaN or infinite.
    NonFinite { axis: Axis, value: f64 },
    /// Returned when a coordinate lies outside its geographic bounds.
    OutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Returned when a search radius is negative or not finite.
    InvalidRadius { value: f64 },
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { axis, value } => {
                write!(f, "{} must be a finite number, got {value}", axis.as_str())
            }
            Self::OutOfRange {
                axis,
                value,
                min,
                max,
            } => write!(
                f,
                "{} must be within [{min}, {max}], got {value}",
                axis.as_str()
            ),
            Self::InvalidRadius { value } => {
                write!(f, "distance must be a finite number >= 0, got {value}")
            }
        }
    }
}

impl Error for GeoError {}

fn validate_axis(axis: Axis, value: f64, min: f64, max: f64) -> Result<f64, GeoError> {
    if !value.is_finite() {
        return Err(GeoError::NonFinite { axis, value });
    }
    if !(min..=max).contains(&value) {
        return Err(GeoError::OutOfRange {
            axis,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Checks that `value` is a finite latitude within `[-90, 90]`.
pub fn validate_latitude(value: f64) -> Result<f64, GeoError> {
    validate_axis(Axis::Latitude, value, MIN_LATITUDE, MAX_LATITUDE)
}

/// Checks that `value` is a finite longitude within `[-180, 180]`.
pub fn validate_longitude(value: f64) -> Result<f64, GeoError> {
    validate_axis(Axis::Longitude, value, MIN_LONGITUDE, MAX_LONGITUDE)
}

/// Checks that a search radius in kilometers is finite and non-negative.
pub fn validate_radius_km(value: f64) -> Result<f64, GeoError> {
    if !value.is_finite() || value < 0.0 {
        return Err(GeoError::InvalidRadius { value });
    }
    Ok(value)
}

/// A per-request point to measure stored records against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryPoint {
    latitude: f64,
    longitude: f64,
}

impl QueryPoint {
    /// Builds a query point, rejecting coordinates outside geographic bounds.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        Ok(Self {
            latitude: validate_latitude(latitude)?,
            longitude: validate_longitude(longitude)?,
        })
    }

    /// Builds a query point without validation.
    ///
    /// Distance math stays well-defined for any finite degree value, so the
    /// filter accepts these and computes normally.
    pub const fn unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance in kilometers from this point to another.
    pub fn distance_km(&self, latitude: f64, longitude: f64) -> f64 {
        haversine_km(self.latitude, self.longitude, latitude, longitude)
    }
}

/// The unclamped haversine term `sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)`.
///
/// Mathematically within `[0, 1]`, but rounding can push it slightly past 1
/// for near-antipodal points.
fn haversine_term(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2)
}

/// Great-circle distance in kilometers between two points given in degrees.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`]. The
/// intermediate term is clamped to `[0, 1]` so floating-point rounding can never
/// feed a negative value into a square root.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let a = haversine_term(lat1, lon1, lat2, lon2).clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
