use libdns_core::Error;
use reqwest::StatusCode;
use thiserror::Error;

use crate::PROVIDER_NAME;

/// Errors raised by the Linode API client
#[derive(Error, Debug)]
pub enum LinodeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("[{status}] {message}")]
    Api { status: u16, message: String },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl LinodeError {
    /// Build an API error from a non-2xx status and the decoded reasons
    pub(crate) fn api(status: StatusCode, reasons: &str) -> Self {
        let message = match status.as_u16() {
            401 | 403 => format!(
                "Authentication failed: invalid API token or insufficient permissions ({})",
                reasons
            ),
            404 => format!("Not found ({})", reasons),
            429 => "Rate limit exceeded, retry later".to_string(),
            500..=599 => format!("Linode server error (transient): {}", reasons),
            _ => reasons.to_string(),
        };
        LinodeError::Api {
            status: status.as_u16(),
            message,
        }
    }

    /// Convert into the shared error type, naming the operation that failed
    pub fn during(self, operation: &str) -> Error {
        Error::provider(PROVIDER_NAME, operation, self.to_string())
    }
}
