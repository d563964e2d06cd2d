use reqwest::StatusCode;
use thiserror::Error;

/// Failure of the refresh endpoint. Cloned to every request queued behind
/// the refresh that produced it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("session refresh failed: {message}")]
pub struct RefreshError {
    pub status: Option<StatusCode>,
    pub message: String,
}

impl RefreshError {
    pub fn rejected(status: StatusCode, body: impl AsRef<str>) -> Self {
        let body = body.as_ref().trim();
        let message = if body.is_empty() {
            status.to_string()
        } else {
            format!("{status} {body}")
        };
        Self {
            status: Some(status),
            message,
        }
    }

    pub fn transport(err: &reqwest::Error) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpiredReason {
    #[error("request was rejected again after the session was refreshed")]
    RetryRejected,
    #[error(transparent)]
    RefreshFailed(RefreshError),
    #[error("session refresh was abandoned before it settled")]
    RefreshAbandoned,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("authorization expired: {0}")]
    AuthorizationExpired(ExpiredReason),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request failed: {status} {body}")]
    Server { status: StatusCode, body: String },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    #[must_use]
    pub fn is_authorization_expired(&self) -> bool {
        matches!(self, Self::AuthorizationExpired(_))
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Network(err) => err.status(),
            Self::AuthorizationExpired(ExpiredReason::RefreshFailed(err)) => err.status,
            Self::AuthorizationExpired(_) => Some(StatusCode::UNAUTHORIZED),
            Self::Json(_) => None,
        }
    }
}
