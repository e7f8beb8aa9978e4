use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the Riot API
#[derive(Error, Debug)]
pub enum RiotApiError {
    /// The requested resource does not exist (404)
    #[error("Resource not found")]
    NotFound,

    /// Authentication failed due to an invalid or expired API key
    #[error("Authentication failed (check RIFTSTATS_RIOT__API_KEY)")]
    AuthenticationFailed,

    /// Application rate limit exceeded (429)
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Riot API server error (5xx)
    #[error("Riot API server error: HTTP {0}")]
    ServerError(u16),

    /// Network error occurred during request
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),
}

impl RiotApiError {
    /// Map an HTTP status code to an error variant.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => RiotApiError::NotFound,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                RiotApiError::AuthenticationFailed
            }
            StatusCode::TOO_MANY_REQUESTS => RiotApiError::RateLimitExceeded,
            s if s.is_server_error() => RiotApiError::ServerError(s.as_u16()),
            s => RiotApiError::UnexpectedPayload(format!("HTTP {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_codes() {
        assert!(matches!(
            RiotApiError::from_status(StatusCode::NOT_FOUND),
            RiotApiError::NotFound
        ));
        assert!(matches!(
            RiotApiError::from_status(StatusCode::FORBIDDEN),
            RiotApiError::AuthenticationFailed
        ));
        assert!(matches!(
            RiotApiError::from_status(StatusCode::TOO_MANY_REQUESTS),
            RiotApiError::RateLimitExceeded
        ));
        assert!(matches!(
            RiotApiError::from_status(StatusCode::BAD_GATEWAY),
            RiotApiError::ServerError(502)
        ));
    }
}
