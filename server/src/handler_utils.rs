use geobook_core::{validate_radius_km, QueryPoint};
use tokio::task;

use crate::config::AppConfig;
use crate::errors::{map_geo_error, ApiError};
use crate::models::NearbyQuery;

/// Runs blocking store work off the async executor.
pub(crate) async fn run_blocking<T, F>(label: &'static str, work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(work).await.map_err(|error| {
        tracing::error!(%error, label, "blocking worker task failed");
        ApiError::internal()
    })?
}

pub(crate) fn validate_name_length(name: Option<&str>, config: &AppConfig) -> Result<(), ApiError> {
    let Some(name) = name else {
        return Ok(());
    };
    if name.len() > config.max_name_bytes {
        return Err(ApiError::invalid_argument(format!(
            "name length {} exceeds configured maximum {}",
            name.len(),
            config.max_name_bytes
        )));
    }
    Ok(())
}

pub(crate) fn validate_nearby_query(query: &NearbyQuery) -> Result<(QueryPoint, f64), ApiError> {
    let point = QueryPoint::new(query.latitude, query.longitude).map_err(map_geo_error)?;
    let radius_km = validate_radius_km(query.distance).map_err(map_geo_error)?;
    Ok((point, radius_km))
}
