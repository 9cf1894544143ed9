use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use swatch_color::ParseColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid color {input:?}: {source}")]
    InvalidColor {
        input: String,
        source: ParseColorError,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_color(input: impl Into<String>, source: ParseColorError) -> Self {
        ApiError::InvalidColor {
            input: input.into(),
            source,
        }
    }
}

/// Errors raised while reading a palette file
#[derive(Debug, Error)]
pub enum PaletteLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid palette entry #{index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("Duplicate palette code: {code}")]
    DuplicateCode { code: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidColor { .. } | ApiError::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_invalid_color() {
        let error = ApiError::invalid_color("#12", ParseColorError::InvalidLength);
        assert_eq!(
            error.to_string(),
            "Invalid color \"#12\": invalid hex color length (expected 3 or 6 digits)"
        );

        let error = ApiError::invalid_color("#GG0000", ParseColorError::InvalidHex('G'));
        assert_eq!(
            error.to_string(),
            "Invalid color \"#GG0000\": invalid hex character: 'G'"
        );
    }

    #[test]
    fn test_api_error_invalid_parameter() {
        let error = ApiError::InvalidParameter("missing color".to_string());
        assert_eq!(error.to_string(), "Invalid parameter: missing color");
    }

    #[test]
    fn test_api_error_not_found() {
        let error = ApiError::NotFound("color 999 C".to_string());
        assert_eq!(error.to_string(), "Not found: color 999 C");
    }

    #[test]
    fn test_palette_load_error_messages() {
        let error = PaletteLoadError::InvalidEntry {
            index: 3,
            reason: "missing hex and rgb".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid palette entry #3: missing hex and rgb");

        let error = PaletteLoadError::DuplicateCode {
            code: "2097 C".to_string(),
        };
        assert_eq!(error.to_string(), "Duplicate palette code: 2097 C");
    }

    #[test]
    fn test_palette_load_error_from_json() {
        let json_error = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error: PaletteLoadError = json_error.into();
        assert!(matches!(error, PaletteLoadError::Json(_)));
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        use axum::response::IntoResponse;

        // InvalidColor -> BAD_REQUEST
        let response =
            ApiError::invalid_color("x", ParseColorError::InvalidLength).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // InvalidParameter -> BAD_REQUEST
        let response = ApiError::InvalidParameter("metric".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // NotFound -> NOT_FOUND
        let response = ApiError::NotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Internal -> INTERNAL_SERVER_ERROR
        let response = ApiError::Internal("error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
