use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct DeleteAddressResponse {
    pub(crate) message: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NearbyQuery {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    /// Search radius in kilometers.
    pub(crate) distance: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct LiveResponse {
    pub(crate) status: &'static str,
    pub(crate) uptime_ms: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReadyChecks {
    pub(crate) storage_available: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReadyResponse {
    pub(crate) status: &'static str,
    pub(crate) uptime_ms: u64,
    pub(crate) checks: ReadyChecks,
}
