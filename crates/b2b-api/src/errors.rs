use crate::dto::ApiResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use b2b_kpi::KpiError;
use b2b_master::MasterApiError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Serialize, Deserialize)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("Internal server error")]
    InternalServerError,
}

impl From<MasterApiError> for ApiError {
    fn from(err: MasterApiError) -> Self {
        // NOTE: Error is already logged where the upstream call failed
        match err.root() {
            MasterApiError::HttpError(_) | MasterApiError::JsonError(_) => {
                Self::ServiceUnavailable("Partner data is currently unavailable".to_string())
            }
            _ => Self::InternalServerError,
        }
    }
}

impl From<KpiError> for ApiError {
    fn from(err: KpiError) -> Self {
        match err {
            KpiError::UnknownVault(vault_id) => Self::NotFound(format!("Vault {vault_id} not found")),
            KpiError::InvalidData(msg) => {
                tracing::error!("Failed to compute partner metrics: {msg}");
                Self::InternalServerError
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, msg) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            Self::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };
        let response: ApiResponse<()> = ApiResponse::error(msg);
        (status, Json(response)).into_response()
    }
}
