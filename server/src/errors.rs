use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{BoxError, Json};
use geobook_core::{AddressError, GeoError, ProximityError, StoreError};
use serde::Serialize;

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "invalid_argument",
            message: message.into(),
        }
    }

    pub(crate) fn payload_too_large(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            code: "payload_too_large",
            message: message.into(),
        }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "not_found",
            message: message.into(),
        }
    }

    fn request_timeout() -> Self {
        Self {
            status: StatusCode::REQUEST_TIMEOUT,
            code: "request_timeout",
            message: "request timed out".to_string(),
        }
    }

    pub(crate) fn service_unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            code: "not_ready",
            message: message.into(),
        }
    }

    /// Generic server fault. Details belong in the log, never in the body.
    pub(crate) fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "internal",
            message: INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                code: self.code,
                message: self.message,
            }),
        )
            .into_response()
    }
}

pub(crate) fn map_json_rejection(rejection: JsonRejection) -> ApiError {
    let status = rejection.status();
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::payload_too_large("request body exceeds configured size limit");
    }
    if status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
        return ApiError::invalid_argument("content-type must be application/json");
    }
    ApiError::invalid_argument("invalid JSON payload")
}

pub(crate) fn map_query_rejection(rejection: QueryRejection) -> ApiError {
    ApiError::invalid_argument(format!(
        "latitude, longitude and distance query parameters are required numbers ({})",
        rejection.body_text()
    ))
}

pub(crate) fn map_path_rejection(rejection: PathRejection) -> ApiError {
    ApiError::invalid_argument(format!(
        "address id must be an integer ({})",
        rejection.body_text()
    ))
}

pub(crate) fn map_geo_error(error: GeoError) -> ApiError {
    ApiError::invalid_argument(error.to_string())
}

pub(crate) fn map_address_error(error: AddressError) -> ApiError {
    ApiError::invalid_argument(error.to_string())
}

/// Maps store failures onto HTTP errors, logging anything that is not a plain
/// missing record. `action` names the operation for the log line.
pub(crate) fn map_store_error(error: StoreError, action: &'static str) -> ApiError {
    match error {
        StoreError::NotFound { .. } => ApiError::not_found("Address not found"),
        StoreError::Database(_) | StoreError::Unavailable(_) => {
            tracing::error!(%error, action, "record store operation failed");
            ApiError::internal()
        }
    }
}

pub(crate) fn map_proximity_error(error: ProximityError) -> ApiError {
    match error {
        ProximityError::Retrieval(_) => ApiError::internal(),
    }
}

pub(crate) async fn handle_middleware_error(error: BoxError) -> Response {
    if error.is::<tower::timeout::error::Elapsed>() {
        return ApiError::request_timeout().into_response();
    }

    tracing::error!(%error, "middleware error");
    ApiError::internal().into_response()
}
