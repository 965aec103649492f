use std::error::Error;
use std::fmt;

use crate::address::{AddressId, AddressPatch, AddressRecord, NewAddress};

mod migrations;
mod sqlite;

pub use sqlite::SqliteAddressStore;

/// Error type for record store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Returned when no address exists with the requested id.
    NotFound { id: AddressId },
    /// Returned when the backing database reports a failure.
    Database(rusqlite::Error),
    /// Returned when the store cannot be reached at all (for example a
    /// poisoned connection lock).
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "address {id} not found"),
            Self::Database(error) => write!(f, "database error: {error}"),
            Self::Unavailable(message) => write!(f, "record store unavailable: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Database(error) => Some(error),
            Self::NotFound { .. } | Self::Unavailable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Database(error)
    }
}

/// Durable storage for address records.
///
/// Implementations serialise their own writes; callers may share one store
/// across threads. Validation of coordinates happens before records reach the
/// store.
pub trait AddressStore: Send + Sync {
    /// Inserts a new record and returns it with its assigned id.
    fn create(&self, address: &NewAddress) -> Result<AddressRecord, StoreError>;

    fn get(&self, id: AddressId) -> Result<AddressRecord, StoreError>;

    /// Replaces the fields set in `patch` and returns the updated record.
    fn update(&self, id: AddressId, patch: &AddressPatch) -> Result<AddressRecord, StoreError>;

    fn delete(&self, id: AddressId) -> Result<(), StoreError>;

    /// Returns every stored record in storage order (ascending id).
    fn list_all(&self) -> Result<Vec<AddressRecord>, StoreError>;

    /// Cheap round-trip used by readiness checks.
    fn ping(&self) -> Result<(), StoreError>;
}
