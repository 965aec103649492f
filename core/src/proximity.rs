use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::address::AddressRecord;
use crate::geo::QueryPoint;
use crate::store::{AddressStore, StoreError};

/// Error type for proximity queries.
#[derive(Debug)]
pub enum ProximityError {
    /// Returned when the record store could not produce the record set.
    Retrieval(StoreError),
}

impl fmt::Display for ProximityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retrieval(error) => write!(f, "failed to retrieve addresses: {error}"),
        }
    }
}

impl Error for ProximityError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Retrieval(error) => Some(error),
        }
    }
}

/// Returns the records whose great-circle distance from `query` is at most
/// `radius_km`, preserving input order.
///
/// This is a linear scan. A negative or NaN radius matches nothing.
pub fn find_within(
    records: &[AddressRecord],
    query: QueryPoint,
    radius_km: f64,
) -> Vec<AddressRecord> {
    records
        .iter()
        .filter(|record| query.distance_km(record.latitude, record.longitude) <= radius_km)
        .cloned()
        .collect()
}

/// Runs proximity queries against the full contents of a record store.
#[derive(Clone)]
pub struct ProximityFilter {
    store: Arc<dyn AddressStore>,
}

impl fmt::Debug for ProximityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProximityFilter").finish_non_exhaustive()
    }
}

impl ProximityFilter {
    pub fn new(store: Arc<dyn AddressStore>) -> Self {
        Self { store }
    }

    /// Fetches every stored address and keeps those within `radius_km` of
    /// `query`, in storage order.
    ///
    /// Emits one summary event per call. Store failures are logged and
    /// returned as [`ProximityError::Retrieval`]; nothing is retried.
    pub fn nearby(
        &self,
        query: QueryPoint,
        radius_km: f64,
    ) -> Result<Vec<AddressRecord>, ProximityError> {
        let records = self.store.list_all().map_err(|error| {
            tracing::error!(
                %error,
                latitude = query.latitude(),
                longitude = query.longitude(),
                radius_km,
                "failed to retrieve addresses for proximity query"
            );
            ProximityError::Retrieval(error)
        })?;

        let matches = find_within(&records, query, radius_km);
        tracing::info!(
            matches = matches.len(),
            scanned = records.len(),
            latitude = query.latitude(),
            longitude = query.longitude(),
            radius_km,
            "proximity query completed"
        );

        Ok(matches)
    }
}
