//! Mapping of domain errors onto HTTP responses.

use crate::allocation::AllocationError;
use crate::equipment_actor::EquipmentError;
use crate::order_actor::ProcessOrderError;
use crate::personnel_actor::PersonnelError;
use crate::progress_actor::OrderProgressError;
use crate::project_actor::ProjectError;
use crate::share_actor::ProjectShareError;
use crate::tracking_actor::ProcessTrackingError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(message) => {
                error!(error = %message, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

/// `From` impl for an entity error; unlisted variants become `Internal`.
macro_rules! api_error_from {
    ($error:ident { $($variant:ident => $kind:ident),* $(,)? }) => {
        impl From<$error> for ApiError {
            fn from(e: $error) -> Self {
                let message = e.to_string();
                match e {
                    $($error::$variant(..) => ApiError::$kind(message),)*
                    _ => ApiError::Internal(message),
                }
            }
        }
    };
}

api_error_from!(PersonnelError { NotFound => NotFound, ValidationError => BadRequest });
api_error_from!(EquipmentError { NotFound => NotFound, ValidationError => BadRequest });
api_error_from!(ProjectError { NotFound => NotFound, ValidationError => BadRequest });
api_error_from!(ProjectShareError { NotFound => NotFound, ValidationError => BadRequest });
api_error_from!(ProcessOrderError { NotFound => NotFound, ValidationError => BadRequest });
api_error_from!(ProcessTrackingError { NotFound => NotFound, ValidationError => BadRequest });
api_error_from!(OrderProgressError { NotFound => NotFound });

impl From<AllocationError> for ApiError {
    fn from(e: AllocationError) -> Self {
        match e {
            AllocationError::OwnerNotFound(_) => ApiError::NotFound(e.to_string()),
            AllocationError::Personnel(e) => e.into(),
            AllocationError::Equipment(e) => e.into(),
            AllocationError::Project(e) => e.into(),
            AllocationError::Share(e) => e.into(),
        }
    }
}
