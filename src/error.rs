/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 14/10/26
 ******************************************************************************/
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Failure while talking to the remote service, before any domain meaning is attached.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected http status {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("json error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl TransportError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Builds a `Status` error from a non-success response body.
    ///
    /// The service wraps failures as `{"error": {"message": ...}}`; anything
    /// else is kept verbatim.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorEnvelope {
            error: ErrorBody,
        }
        #[derive(Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        TransportError::Status { status, message }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("authentication required")]
    AuthRequired,
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("registration rejected: {0}")]
    RegistrationRejected(String),
    #[error("service unavailable: {0}")]
    ServiceUnavailable(#[from] TransportError),
    #[error("malformed url {url:?}: {reason}")]
    MalformedUrl { url: String, reason: String },
}

impl AppError {
    /// Maps a failed create/favorite call; a rejected token means the caller must log in again.
    pub(crate) fn from_mutation(err: TransportError) -> Self {
        match err.status() {
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN) => AppError::AuthRequired,
            _ => AppError::ServiceUnavailable(err),
        }
    }

    pub(crate) fn from_login(err: TransportError) -> Self {
        match err.status() {
            Some(StatusCode::BAD_REQUEST)
            | Some(StatusCode::UNAUTHORIZED)
            | Some(StatusCode::FORBIDDEN)
            | Some(StatusCode::NOT_FOUND) => AppError::AuthenticationFailed,
            _ => AppError::ServiceUnavailable(err),
        }
    }

    pub(crate) fn from_signup(err: TransportError) -> Self {
        match err {
            TransportError::Status { status, message }
                if status == StatusCode::BAD_REQUEST || status == StatusCode::CONFLICT =>
            {
                AppError::RegistrationRejected(message)
            }
            other => AppError::ServiceUnavailable(other),
        }
    }
}
