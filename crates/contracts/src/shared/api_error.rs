use super::validation::ValidationErrors;
use serde::Deserialize;
use thiserror::Error;

/// Failure of a call to the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Sesi berakhir, silakan masuk kembali")]
    Unauthenticated,
    #[error("Akses ditolak")]
    Forbidden,
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Gagal menghubungi server: {0}")]
    Network(String),
    #[error("Respons server tidak valid: {0}")]
    Parse(String),
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

impl ApiError {
    /// Maps a non-2xx response to an error.
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthenticated,
            403 => ApiError::Forbidden,
            422 => match ValidationErrors::from_body(body) {
                Some(errors) => ApiError::Validation(errors),
                None => ApiError::Http {
                    status,
                    message: body.to_string(),
                },
            },
            _ => {
                let message = serde_json::from_str::<MessageBody>(body)
                    .map(|b| b.message)
                    .unwrap_or_else(|_| body.trim().chars().take(200).collect());
                ApiError::Http { status, message }
            }
        }
    }

    /// Field-keyed messages, when the error is a validation failure.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthenticated);
        assert_eq!(ApiError::from_response(403, "{}"), ApiError::Forbidden);

        let err = ApiError::from_response(
            422,
            r#"{"message":"Invalid","errors":{"email":["Taken."]}}"#,
        );
        assert_eq!(err.validation().and_then(|v| v.first("email")), Some("Taken."));
        assert_eq!(err.to_string(), "Invalid");
    }

    #[test]
    fn test_server_error_message() {
        let err = ApiError::from_response(500, r#"{"message":"Server Error"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: "Server Error".to_string()
            }
        );
        let err = ApiError::from_response(502, " Bad Gateway ");
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
        assert!(err.validation().is_none());
    }
}
