#![forbid(unsafe_code)]
//! Core primitives for GeoBook.
//!
//! Holds the address record model, the haversine distance used for proximity
//! queries, the linear-scan proximity filter and the SQLite-backed record store
//! consumed by the HTTP server.

pub mod address;
pub mod geo;
pub mod proximity;
pub mod store;

pub use address::{AddressError, AddressId, AddressPatch, AddressRecord, NewAddress};
pub use geo::{
    haversine_km, validate_latitude, validate_longitude, validate_radius_km, Axis, GeoError,
    QueryPoint, EARTH_RADIUS_KM, MAX_GREAT_CIRCLE_KM,
};
pub use proximity::{find_within, ProximityError, ProximityFilter};
pub use store::{AddressStore, SqliteAddressStore, StoreError};
