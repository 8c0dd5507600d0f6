use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http_errors_core::StatusError;
use serde::Serialize;

use crate::HttpError;

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetails,
}

#[derive(Debug, Serialize)]
struct ErrorDetails {
    message: String,
    r#type: String,
    code: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        let error_response = ErrorResponse {
            error: ErrorDetails {
                message: self.client_message(),
                r#type: self.name().to_owned(),
                code: status.as_u16(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}
