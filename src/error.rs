use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::Debug;

use crate::navigation::{NavigationError, UnknownVendor};
use crate::sequencer::SequenceError;

#[derive(Debug, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<SequenceError> for Error {
    fn from(err: SequenceError) -> Self {
        let code = match err {
            SequenceError::Duplicate { .. } => 102,
            SequenceError::InvalidReorder { .. } => 103,
        };

        Error {
            code,
            message: err.to_string(),
        }
    }
}

impl From<NavigationError> for Error {
    fn from(err: NavigationError) -> Self {
        let code = match err {
            NavigationError::EmptyRoute => 110,
            NavigationError::UnsupportedPointCount { .. } => 111,
            NavigationError::MissingCoordinates { .. } => 112,
            NavigationError::InvalidCoordinates { .. } => 113,
        };

        Error {
            code,
            message: err.to_string(),
        }
    }
}

impl From<UnknownVendor> for Error {
    fn from(err: UnknownVendor) -> Self {
        Error {
            code: 101,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            404 => (StatusCode::NOT_FOUND, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: 404,
        message: "not found".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn config_error<T: Debug>(err: T) -> Error {
    tracing::error!(?err, "invalid configuration");

    Error {
        code: 1,
        message: "configuration error".into(),
    }
}

pub fn database_error<T: Debug>(err: T) -> Error {
    tracing::error!(?err, "database error");

    Error {
        code: 2,
        message: "database error".into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    tracing::warn!(%err, "upstream request failed");

    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn server_error<T: Debug>(err: T) -> Error {
    tracing::error!(?err, "server error");

    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

pub fn unavailable_error() -> Error {
    Error {
        code: 6,
        message: "service not configured".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Vendor;

    #[test]
    fn internal_errors_hide_their_message() {
        let response = database_error("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn caller_errors_are_bad_requests() {
        let err: Error = NavigationError::UnsupportedPointCount {
            vendor: Vendor::Tmap,
            count: 3,
            max: 2,
        }
        .into();
        assert_eq!(err.code, 111);
        assert_eq!(err.message, "tmap supports at most 2 points, route has 3");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            not_found_error().into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn sequence_errors_keep_distinct_codes() {
        let duplicate: Error = SequenceError::Duplicate { id: "a".into() }.into();
        let reorder: Error = SequenceError::InvalidReorder {
            expected: 2,
            given: 1,
        }
        .into();
        assert_eq!(duplicate.code, 102);
        assert_eq!(reorder.code, 103);
    }
}
