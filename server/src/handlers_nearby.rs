use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use geobook_core::AddressRecord;

use crate::errors::{map_proximity_error, map_query_rejection, ApiError};
use crate::handler_utils::{run_blocking, validate_nearby_query};
use crate::models::NearbyQuery;
use crate::state::AppState;

/// `GET /address/nearby/`: addresses within `distance` kilometers of
/// (`latitude`, `longitude`), in storage order.
pub(crate) async fn nearby_addresses(
    State(state): State<AppState>,
    query: Result<Query<NearbyQuery>, QueryRejection>,
) -> Result<Json<Vec<AddressRecord>>, ApiError> {
    let Query(query) = query.map_err(map_query_rejection)?;
    let (point, radius_km) = validate_nearby_query(&query)?;

    let proximity = state.proximity.clone();
    let matches = run_blocking("nearby_addresses", move || {
        proximity
            .nearby(point, radius_km)
            .map_err(map_proximity_error)
    })
    .await?;

    Ok(Json(matches))
}
