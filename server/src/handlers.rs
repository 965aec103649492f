use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use geobook_core::{AddressId, AddressPatch, AddressRecord, NewAddress};

use crate::errors::{
    map_address_error, map_json_rejection, map_path_rejection, map_store_error, ApiError,
};
use crate::handler_utils::{run_blocking, validate_name_length};
pub(crate) use crate::handlers_health::{live, ready};
pub(crate) use crate::handlers_nearby::nearby_addresses;
use crate::models::DeleteAddressResponse;
use crate::state::AppState;

pub(crate) async fn create_address(
    State(state): State<AppState>,
    payload: Result<Json<NewAddress>, JsonRejection>,
) -> Result<Json<AddressRecord>, ApiError> {
    let Json(address) = payload.map_err(map_json_rejection)?;
    address.validate().map_err(map_address_error)?;
    validate_name_length(Some(address.name.as_str()), &state.config)?;

    let store = state.store.clone();
    let record = run_blocking("create_address", move || {
        store
            .create(&address)
            .map_err(|error| map_store_error(error, "create"))
    })
    .await?;

    tracing::info!(address_id = record.id, name = %record.name, "address created");
    Ok(Json(record))
}

pub(crate) async fn get_address(
    id: Result<Path<AddressId>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<AddressRecord>, ApiError> {
    let Path(id) = id.map_err(map_path_rejection)?;
    let store = state.store.clone();
    let record = run_blocking("get_address", move || {
        store.get(id).map_err(|error| map_store_error(error, "get"))
    })
    .await?;
    Ok(Json(record))
}

pub(crate) async fn update_address(
    id: Result<Path<AddressId>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<AddressPatch>, JsonRejection>,
) -> Result<Json<AddressRecord>, ApiError> {
    let Path(id) = id.map_err(map_path_rejection)?;
    let Json(patch) = payload.map_err(map_json_rejection)?;
    patch.validate().map_err(map_address_error)?;
    validate_name_length(patch.name.as_deref(), &state.config)?;

    let store = state.store.clone();
    let record = run_blocking("update_address", move || {
        store
            .update(id, &patch)
            .map_err(|error| map_store_error(error, "update"))
    })
    .await?;

    tracing::info!(address_id = record.id, name = %record.name, "address updated");
    Ok(Json(record))
}

pub(crate) async fn delete_address(
    id: Result<Path<AddressId>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<DeleteAddressResponse>, ApiError> {
    let Path(id) = id.map_err(map_path_rejection)?;
    let store = state.store.clone();
    run_blocking("delete_address", move || {
        store
            .delete(id)
            .map_err(|error| map_store_error(error, "delete"))
    })
    .await?;

    tracing::info!(address_id = id, "address deleted");
    Ok(Json(DeleteAddressResponse {
        message: "Address deleted successfully",
    }))
}
